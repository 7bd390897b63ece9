//! TOML-backed profile store.
//!
//! `TomlProfileStore` loads a `ProfileConfig` from a TOML string or file and
//! resolves the profile for a screen:
//!
//! 1. Iterate profiles in declaration order.
//! 2. Return the first whose `id` matches the screen (`"*"` matches any).
//! 3. If nothing matched, return a built-in profile with default settings.

use std::path::Path;

use tracing::{debug, info};

use clinic_contracts::error::{ClinicError, ClinicResult};

use crate::profile::{ProfileConfig, ScreenProfile};

/// Screen profiles read from a TOML document.
///
/// ```rust,ignore
/// use clinic_profile::TomlProfileStore;
///
/// let store = TomlProfileStore::from_file(Path::new("profiles/clinic.toml"))?;
/// let profile = store.resolve("doctor-appointments");
/// ```
#[derive(Debug, Default)]
pub struct TomlProfileStore {
    config: ProfileConfig,
}

impl TomlProfileStore {
    /// Parse `s` as TOML and build a store.
    ///
    /// Returns `ClinicError::ConfigError` if the TOML is malformed or does not
    /// match the `ProfileConfig` schema.
    pub fn from_toml_str(s: &str) -> ClinicResult<Self> {
        let config: ProfileConfig = toml::from_str(s).map_err(|e| ClinicError::ConfigError {
            reason: format!("failed to parse profile TOML: {}", e),
        })?;

        for profile in &config.screens {
            if profile.id.trim().is_empty() {
                return Err(ClinicError::ConfigError {
                    reason: "screen profile with empty id".to_string(),
                });
            }
        }

        info!(profiles = config.screens.len(), "screen profiles loaded");
        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a profile document.
    pub fn from_file(path: &Path) -> ClinicResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClinicError::ConfigError {
            reason: format!("failed to read profile file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Resolve the profile that applies to `screen_id`.
    pub fn resolve(&self, screen_id: &str) -> ScreenProfile {
        for profile in &self.config.screens {
            if profile.matches(screen_id) {
                debug!(screen = %screen_id, profile = %profile.id, "profile matched");
                return profile.clone();
            }
        }

        debug!(screen = %screen_id, "no profile matched; using built-in defaults");
        ScreenProfile::builtin(screen_id)
    }

    pub fn profiles(&self) -> &[ScreenProfile] {
        &self.config.screens
    }
}
