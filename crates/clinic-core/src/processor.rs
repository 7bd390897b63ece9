//! The list processor: derive a display view from (records, criteria).
//!
//! The pipeline for one call:
//!
//!   records → status filter → exact-date filter → search filter → sort
//!   records → aggregate counts (unfiltered)
//!
//! Nothing here performs I/O or mutates the caller's records. The view is a
//! fresh `Vec` of references on every call, so a screen simply calls
//! `process()` again whenever its records or criteria change.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::debug;

use clinic_contracts::{
    criteria::{ListCriteria, StatusFilter},
    status::StatusGroups,
    view::{AggregateCounts, CanonicalDate, ListView},
};

use crate::{
    aggregate::aggregate_counts,
    normalize::{fold_text, normalize_date, normalize_opt_date},
    traits::{Clock, LocalClock, RecordAccessor},
};

/// Ordering key used for records without one, so they sort last.
pub const MISSING_ORDERING_KEY: i64 = i64::MAX;

/// Date-filter state after the raw criteria value has been normalized.
enum DateFilter {
    Off,
    On(NaiveDate),
    /// The criteria date itself could not be parsed; nothing can match it.
    Unmatchable,
}

/// Criteria with their normalization done once per call instead of per record.
struct CompiledCriteria<'c> {
    status: &'c StatusFilter,
    date: DateFilter,
    term: Option<String>,
}

impl<'c> CompiledCriteria<'c> {
    fn compile(criteria: &'c ListCriteria) -> Self {
        let date = match criteria.date_exact.as_deref().map(str::trim) {
            None | Some("") => DateFilter::Off,
            Some(raw) => match normalize_date(raw) {
                CanonicalDate::Known(d) => DateFilter::On(d),
                CanonicalDate::Unknown => DateFilter::Unmatchable,
            },
        };

        let term = criteria
            .search_term
            .as_deref()
            .map(fold_text)
            .filter(|t| !t.is_empty());

        Self {
            status: &criteria.status,
            date,
            term,
        }
    }
}

/// The appointment list processor, parameterized by a screen's accessor.
///
/// Construct one per screen. The processor owns the accessor strategy, the
/// clock, and the status groups used for the summary tiles.
pub struct ListProcessor<A: RecordAccessor> {
    accessor: A,
    clock: Box<dyn Clock>,
    groups: StatusGroups,
}

impl<A: RecordAccessor> ListProcessor<A> {
    /// Create a processor with an explicit clock and status groups.
    pub fn new(accessor: A, clock: Box<dyn Clock>, groups: StatusGroups) -> Self {
        Self {
            accessor,
            clock,
            groups,
        }
    }

    /// Create a processor on the system local clock with default groups.
    pub fn with_defaults(accessor: A) -> Self {
        Self::new(accessor, Box::new(LocalClock), StatusGroups::default())
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn groups(&self) -> &StatusGroups {
        &self.groups
    }

    /// Filter, sort, and count in one call.
    ///
    /// This is the `filterAndSort(records, criteria) -> (viewList,
    /// aggregateCounts)` operation. "Today" is read from the clock once, so
    /// the view and the tiles always agree on the date.
    pub fn process<'r>(
        &self,
        records: &'r [A::Record],
        criteria: &ListCriteria,
    ) -> ListView<'r, A::Record> {
        let today = self.clock.today();
        let items = self.filter_and_sort_on(records, criteria, today);
        let counts = aggregate_counts(&self.accessor, records, &self.groups, today);

        debug!(
            screen = %self.accessor.screen_id(),
            total = counts.total,
            matched = items.len(),
            status = %criteria.status,
            "list view derived"
        );

        ListView { items, counts }
    }

    /// Only the filter and sort step.
    pub fn filter_and_sort<'r>(
        &self,
        records: &'r [A::Record],
        criteria: &ListCriteria,
    ) -> Vec<&'r A::Record> {
        self.filter_and_sort_on(records, criteria, self.clock.today())
    }

    /// Only the summary tiles, over the unfiltered records.
    pub fn aggregate(&self, records: &[A::Record]) -> AggregateCounts {
        aggregate_counts(&self.accessor, records, &self.groups, self.clock.today())
    }

    fn filter_and_sort_on<'r>(
        &self,
        records: &'r [A::Record],
        criteria: &ListCriteria,
        today: NaiveDate,
    ) -> Vec<&'r A::Record> {
        let compiled = CompiledCriteria::compile(criteria);

        let matched: Vec<&'r A::Record> = records
            .iter()
            .filter(|r| self.matches(r, &compiled, today))
            .collect();

        sort_records(&self.accessor, matched)
    }

    fn matches(
        &self,
        record: &A::Record,
        criteria: &CompiledCriteria<'_>,
        today: NaiveDate,
    ) -> bool {
        // Dates are only normalized when a filter actually needs them.
        let needs_date = matches!(criteria.status, StatusFilter::Today)
            || !matches!(criteria.date, DateFilter::Off);
        let date = if needs_date {
            normalize_opt_date(self.accessor.date(record)).known()
        } else {
            None
        };

        let status_ok = match criteria.status {
            StatusFilter::All => true,
            StatusFilter::Today => date == Some(today),
            StatusFilter::Exact(wanted) => self
                .accessor
                .status(record)
                .is_some_and(|s| s.trim().eq_ignore_ascii_case(wanted.trim())),
        };
        if !status_ok {
            return false;
        }

        let date_ok = match criteria.date {
            DateFilter::Off => true,
            DateFilter::On(wanted) => date == Some(wanted),
            DateFilter::Unmatchable => false,
        };
        if !date_ok {
            return false;
        }

        match &criteria.term {
            None => true,
            Some(term) => self
                .accessor
                .searchable_fields(record)
                .into_iter()
                .any(|field| fold_text(field).contains(term.as_str())),
        }
    }
}

/// Sort references for display: date descending, then ordering key ascending.
///
/// Unknown dates sort after every known date; missing ordering keys sort
/// after present ones. The sort is stable, so sorting an already sorted
/// view returns it unchanged.
pub fn sort_records<'r, A: RecordAccessor>(
    accessor: &A,
    records: Vec<&'r A::Record>,
) -> Vec<&'r A::Record> {
    let mut keyed: Vec<(Option<NaiveDate>, i64, &'r A::Record)> = records
        .into_iter()
        .map(|r| {
            let date = normalize_opt_date(accessor.date(r)).known();
            let order = accessor.ordering_key(r).unwrap_or(MISSING_ORDERING_KEY);
            (date, order, r)
        })
        .collect();

    keyed.sort_by(|a, b| compare_keys((a.0, a.1), (b.0, b.1)));
    keyed.into_iter().map(|(_, _, r)| r).collect()
}

fn compare_keys(a: (Option<NaiveDate>, i64), b: (Option<NaiveDate>, i64)) -> Ordering {
    // `None < Some(_)`, so reversing the date comparison also puts unknown
    // dates last.
    b.0.cmp(&a.0).then(a.1.cmp(&b.1))
}
