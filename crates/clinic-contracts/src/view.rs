//! Derived view types produced by the list processor.
//!
//! `ListView` borrows the caller's records: the processor never copies or
//! mutates entities, it only selects and orders references to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record date after normalization to the canonical calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalDate {
    Known(NaiveDate),
    /// Missing or unparseable. Excluded from date filters only.
    Unknown,
}

impl CanonicalDate {
    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            CanonicalDate::Known(d) => Some(*d),
            CanonicalDate::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, CanonicalDate::Known(_))
    }
}

impl std::fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanonicalDate::Known(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CanonicalDate::Unknown => f.write_str("unknown"),
        }
    }
}

/// Summary tile numbers, always computed over the unfiltered record list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateCounts {
    /// Every record, regardless of criteria.
    pub total: usize,
    /// Records dated today.
    pub today: usize,
    /// Today's records in the waiting group.
    pub waiting_today: usize,
    /// Today's records in the in-progress group.
    pub in_progress_today: usize,
    /// Today's records in the completed group.
    pub completed_today: usize,
    /// Records in the needs-attention group on any date.
    pub needs_attention: usize,
}

/// The result of one `filterAndSort` call.
#[derive(Debug, Clone)]
pub struct ListView<'r, T> {
    /// Matching records, sorted for display.
    pub items: Vec<&'r T>,
    pub counts: AggregateCounts,
}

impl<'r, T> ListView<'r, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One page of a view, sliced by the caller.
#[derive(Debug, Clone)]
pub struct Page<'v, T> {
    pub items: &'v [T],
    /// 1-based page number after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Records sharing one canonical date.
#[derive(Debug, Clone)]
pub struct DateGroup<'r, T> {
    pub date: CanonicalDate,
    pub records: Vec<&'r T>,
}
