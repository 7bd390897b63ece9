//! Trait seams of the list processor.
//!
//! - `RecordAccessor`: how a screen reads its records (the per-screen strategy)
//! - `Clock`: where "today" comes from
//!
//! The processor knows nothing about concrete entity types. Each screen hands
//! it an accessor describing which field is the date, which fields are
//! searchable, and so on.

use chrono::{Local, NaiveDate};

/// Field accessors for one kind of listable record.
///
/// Every method returns borrowed data from the record; the processor never
/// clones or mutates entities. Returning `None` (or an empty list) means the
/// field is absent, which the processor treats as "no match".
pub trait RecordAccessor: Send + Sync {
    /// The entity type this accessor reads.
    type Record;

    /// Stable screen identifier, used for logging and profile lookup.
    ///
    /// Example: `"doctor-appointments"`
    fn screen_id(&self) -> &str;

    /// The raw date string the list is ordered and filtered by.
    fn date<'r>(&self, record: &'r Self::Record) -> Option<&'r str>;

    /// The raw status string.
    fn status<'r>(&self, record: &'r Self::Record) -> Option<&'r str>;

    /// Every free-text field the search box looks into.
    fn searchable_fields<'r>(&self, record: &'r Self::Record) -> Vec<&'r str>;

    /// Secondary sort key (queue number). Screens without one keep the default.
    fn ordering_key(&self, _record: &Self::Record) -> Option<i64> {
        None
    }
}

/// Source of the current local calendar date.
///
/// `TODAY` filters and the daily summary tiles are computed against this.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date. Used by tests and by `--today` in the demo.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
