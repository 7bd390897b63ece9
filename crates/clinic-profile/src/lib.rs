//! # clinic-profile
//!
//! TOML-driven screen profiles for the clinic list processor.
//!
//! ## Overview
//!
//! Each management screen counts its summary tiles from status groups
//! (which statuses mean "waiting", "completed", …) and pages its view with a
//! fixed page size. Both are configured per screen in a TOML file instead of
//! being hard-coded in every screen.
//!
//! ## Profile matching
//!
//! Profiles are matched on `id` in declaration order; `"*"` matches any
//! screen. A screen with no matching profile gets the built-in defaults.

pub mod profile;
pub mod store;

pub use profile::{ProfileConfig, ScreenProfile, DEFAULT_PAGE_SIZE};
pub use store::TomlProfileStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clinic_contracts::{criteria::StatusFilter, error::ClinicError, status::StatusGroups};

    use crate::{TomlProfileStore, DEFAULT_PAGE_SIZE};

    // ── 1. defaults ───────────────────────────────────────────────────────────

    /// An empty document resolves every screen to the built-in profile.
    #[test]
    fn test_empty_document_uses_builtin_defaults() {
        let store = TomlProfileStore::from_toml_str("screens = []").unwrap();
        let profile = store.resolve("doctor-appointments");

        assert_eq!(profile.id, "doctor-appointments");
        assert_eq!(profile.status_groups(), StatusGroups::default());
        assert_eq!(profile.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(profile.default_status(), StatusFilter::All);
    }

    #[test]
    fn test_missing_screens_key_is_empty() {
        let store = TomlProfileStore::from_toml_str("").unwrap();
        assert!(store.profiles().is_empty());
    }

    // ── 2. explicit profile ───────────────────────────────────────────────────

    #[test]
    fn test_explicit_profile_overrides_groups() {
        let toml = r#"
            [[screens]]
            id = "invoices"
            description = "Cashier invoice list"
            waiting = ["UNPAID"]
            completed = ["PAID"]
            needs_attention = []
            page_size = 20
            default_status = "UNPAID"
        "#;

        let store = TomlProfileStore::from_toml_str(toml).unwrap();
        let profile = store.resolve("invoices");
        let groups = profile.status_groups();

        assert!(groups.waiting.contains("unpaid"));
        assert!(!groups.waiting.contains("CONFIRMED"));
        assert!(groups.completed.contains("PAID"));
        assert!(groups.needs_attention.is_empty());
        // Omitted group keeps its default.
        assert!(groups.in_progress.contains("IN_PROGRESS"));
        assert_eq!(profile.page_size(), 20);
        assert_eq!(profile.default_status(), StatusFilter::Exact("UNPAID".to_string()));
    }

    // ── 3. wildcard and first match ───────────────────────────────────────────

    #[test]
    fn test_wildcard_matches_any_screen() {
        let toml = r#"
            [[screens]]
            id = "medical-records"
            page_size = 5

            [[screens]]
            id = "*"
            page_size = 15
        "#;

        let store = TomlProfileStore::from_toml_str(toml).unwrap();
        assert_eq!(store.resolve("medical-records").page_size(), 5);
        assert_eq!(store.resolve("wallet-transactions").page_size(), 15);
        assert_eq!(store.resolve("wallet-transactions").id, "*");
    }

    #[test]
    fn test_first_match_wins() {
        let toml = r#"
            [[screens]]
            id = "*"
            page_size = 25

            [[screens]]
            id = "invoices"
            page_size = 3
        "#;

        let store = TomlProfileStore::from_toml_str(toml).unwrap();
        assert_eq!(store.resolve("invoices").page_size(), 25);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let store = TomlProfileStore::from_toml_str(
            r#"
            [[screens]]
            id = "invoices"
            page_size = 0
        "#,
        )
        .unwrap();
        assert_eq!(store.resolve("invoices").page_size(), DEFAULT_PAGE_SIZE);
    }

    // ── 4. errors ─────────────────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let result = TomlProfileStore::from_toml_str("this is not valid toml ][[[");

        match result {
            Err(ClinicError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse profile TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = TomlProfileStore::from_toml_str(
            r#"
            [[screens]]
            id = "  "
        "#,
        );
        assert!(matches!(result, Err(ClinicError::ConfigError { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result =
            TomlProfileStore::from_file(std::path::Path::new("/nonexistent/profiles.toml"));
        match result {
            Err(ClinicError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read profile file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
