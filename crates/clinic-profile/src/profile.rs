//! Screen profile types and configuration schema.
//!
//! A `ProfileConfig` is deserialized from TOML and holds an ordered list of
//! `ScreenProfile`s. Lookup is first-match in declaration order; an entry with
//! `id = "*"` matches any screen.

use serde::{Deserialize, Serialize};

use clinic_contracts::{
    criteria::StatusFilter,
    status::{StatusGroups, StatusSet},
};

/// Page size used when a profile does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Per-screen settings loaded from TOML.
///
/// Every status group is optional; an omitted group falls back to the
/// built-in `StatusGroups::default()` value for that group.
///
/// Example in TOML:
/// ```toml
/// [[screens]]
/// id = "invoices"
/// waiting = ["UNPAID"]
/// completed = ["PAID"]
/// page_size = 20
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenProfile {
    /// Screen identifier, or `"*"` for any screen.
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    pub waiting: Option<Vec<String>>,
    pub completed: Option<Vec<String>>,
    pub in_progress: Option<Vec<String>>,
    pub needs_attention: Option<Vec<String>>,

    pub page_size: Option<usize>,

    /// Initial value of the status dropdown, e.g. `"TODAY"`.
    pub default_status: Option<String>,
}

impl ScreenProfile {
    /// A profile for `screen_id` with every setting at its default.
    pub fn builtin(screen_id: impl Into<String>) -> Self {
        Self {
            id: screen_id.into(),
            description: None,
            waiting: None,
            completed: None,
            in_progress: None,
            needs_attention: None,
            page_size: None,
            default_status: None,
        }
    }

    /// Return true if this profile applies to `screen_id`.
    ///
    /// `"*"` matches anything; otherwise the match is exact.
    pub fn matches(&self, screen_id: &str) -> bool {
        self.id == "*" || self.id == screen_id
    }

    /// Resolve the status groups, falling back group by group to defaults.
    pub fn status_groups(&self) -> StatusGroups {
        let defaults = StatusGroups::default();
        let pick = |configured: &Option<Vec<String>>, fallback: StatusSet| match configured {
            Some(values) => StatusSet::of(values.iter().map(String::as_str)),
            None => fallback,
        };

        StatusGroups {
            waiting: pick(&self.waiting, defaults.waiting),
            completed: pick(&self.completed, defaults.completed),
            in_progress: pick(&self.in_progress, defaults.in_progress),
            needs_attention: pick(&self.needs_attention, defaults.needs_attention),
        }
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn default_status(&self) -> StatusFilter {
        self.default_status
            .as_deref()
            .map(StatusFilter::from)
            .unwrap_or_default()
    }
}

/// The top-level structure deserialized from a TOML profile file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Ordered list of profiles. First match wins.
    #[serde(default)]
    pub screens: Vec<ScreenProfile>,
}
