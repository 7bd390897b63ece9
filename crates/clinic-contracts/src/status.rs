//! Record status values and status groups.
//!
//! The backend serializes statuses as upper-snake strings. Every entity type
//! has its own vocabulary, so a status is kept as an opaque string and only
//! compared case-insensitively. The well-known values used by the clinic
//! screens are exposed as constants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const PENDING: &str = "PENDING";
pub const CONFIRMED: &str = "CONFIRMED";
pub const APPROVED: &str = "APPROVED";
pub const IN_PROGRESS: &str = "IN_PROGRESS";
pub const COMPLETED: &str = "COMPLETED";
pub const CANCELLED: &str = "CANCELLED";
pub const REJECTED: &str = "REJECTED";
pub const NEEDS_MANUAL_REVIEW: &str = "NEEDS_MANUAL_REVIEW";
pub const PAID: &str = "PAID";
pub const UNPAID: &str = "UNPAID";
pub const SUCCESS: &str = "SUCCESS";
pub const FAILED: &str = "FAILED";

/// A record status as sent by the backend.
///
/// Example: Status("CONFIRMED")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(pub String);

impl Status {
    /// Construct a status from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Canonical upper-case, trimmed form used for comparisons.
    pub fn key(&self) -> String {
        self.0.trim().to_ascii_uppercase()
    }

    /// Case-insensitive comparison against a raw status string.
    pub fn matches(&self, other: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(other.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for Status {}

impl std::hash::Hash for Status {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of statuses that a summary tile counts together.
///
/// Example: the "waiting" set of a doctor's queue is {CONFIRMED, APPROVED}.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusSet {
    inner: HashSet<Status>,
}

impl StatusSet {
    /// Build a set from a list of raw status strings.
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for value in values {
            set.insert(Status::new(value));
        }
        set
    }

    /// Add a status to this set.
    pub fn insert(&mut self, status: Status) {
        self.inner.insert(status);
    }

    /// Return true if `raw` belongs to this set (case-insensitive).
    pub fn contains(&self, raw: &str) -> bool {
        self.inner.contains(&Status::new(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Return an iterator over all statuses in the set.
    pub fn all(&self) -> impl Iterator<Item = &Status> {
        self.inner.iter()
    }
}

/// The status groups the aggregate tiles are computed from.
///
/// Screens may override any group through their TOML profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroups {
    /// Patients waiting to be seen (counted for today only).
    pub waiting: StatusSet,
    /// Finished visits (counted for today only).
    pub completed: StatusSet,
    /// Visits currently under examination (counted for today only).
    pub in_progress: StatusSet,
    /// Records a user must act on, counted across all dates.
    pub needs_attention: StatusSet,
}

impl Default for StatusGroups {
    fn default() -> Self {
        Self {
            waiting: StatusSet::of([CONFIRMED, APPROVED]),
            completed: StatusSet::of([COMPLETED]),
            in_progress: StatusSet::of([IN_PROGRESS]),
            needs_attention: StatusSet::of([PENDING, NEEDS_MANUAL_REVIEW]),
        }
    }
}
