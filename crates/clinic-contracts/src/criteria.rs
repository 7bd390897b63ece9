//! Filter criteria supplied by a screen.
//!
//! The processor consumes a `ListCriteria` and never mutates it. All filters
//! compose with logical AND.

use serde::{Deserialize, Serialize};

/// The status dropdown of a management screen.
///
/// Serialized as a plain string: `"ALL"`, `"TODAY"`, or any status value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Records dated on the current local date, whatever their status.
    Today,
    /// Records whose status equals this value (case-insensitive).
    Exact(String),
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("ALL") {
            StatusFilter::All
        } else if trimmed.eq_ignore_ascii_case("TODAY") {
            StatusFilter::Today
        } else {
            StatusFilter::Exact(trimmed.to_string())
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        StatusFilter::from(value.to_string())
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.to_string()
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StatusFilter::from(s))
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("ALL"),
            StatusFilter::Today => f.write_str("TODAY"),
            StatusFilter::Exact(s) => f.write_str(s),
        }
    }
}

/// Everything a screen's filter bar can ask for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCriteria {
    #[serde(default)]
    pub status: StatusFilter,
    /// Canonical `YYYY-MM-DD` date. Applied after the status filter.
    #[serde(default)]
    pub date_exact: Option<String>,
    /// Case- and diacritic-insensitive substring.
    #[serde(default)]
    pub search_term: Option<String>,
}

impl ListCriteria {
    /// Criteria that keep every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date_exact = Some(date.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}
