//! # clinic-screens
//!
//! The clinic management screens, each wired to the shared list processor.
//!
//! Every screen supplies a `RecordAccessor` strategy instead of carrying its
//! own copy of the filter code:
//!
//! 1. **Doctor appointments**: today's queue, ordered by queue number.
//! 2. **Patient appointments**: a patient's own bookings.
//! 3. **Medical records**: examination records by visit date.
//! 4. **Invoices**: the cashier's list, tiles keyed on PAID / UNPAID.
//! 5. **Wallet transactions**: e-wallet top-ups awaiting review.
//! 6. **Medication history**: prescriptions grouped by date.
//!
//! All fixture data is hardcoded and fictional. No backend is contacted.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use clinic_contracts::{error::ClinicResult, intake::IntakeReport};
use clinic_intake::{schemas, RecordIntake};
use clinic_profile::TomlProfileStore;

pub mod mock_data;
pub mod screens;

use screens::{ScreenContext, ScreenOutcome};

/// The screen profile document shipped with the workspace.
pub const DEFAULT_PROFILES: &str = include_str!("../profiles/clinic.toml");

/// Parse the shipped profile document.
pub fn default_profiles() -> ClinicResult<TomlProfileStore> {
    TomlProfileStore::from_toml_str(DEFAULT_PROFILES)
}

/// Decode `input` when given, otherwise the built-in fixture payload.
pub fn load_report<T: DeserializeOwned>(
    intake: &RecordIntake<T>,
    input: Option<&Path>,
    fixture: fn() -> Value,
) -> ClinicResult<IntakeReport<T>> {
    let report = match input {
        Some(path) => intake.decode_file(path)?,
        None => intake.decode_value(&fixture())?,
    };
    info!(
        schema = %intake.schema_id(),
        source = %input.map(|p| p.display().to_string()).unwrap_or_else(|| "fixture".to_string()),
        records = report.records.len(),
        skipped = report.failures.len(),
        "payload loaded"
    );
    Ok(report)
}

// ── Screen registry ───────────────────────────────────────────────────────────

/// Every screen this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DoctorAppointments,
    PatientAppointments,
    MedicalRecords,
    Invoices,
    WalletTransactions,
    MedicationHistory,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::DoctorAppointments,
        Screen::PatientAppointments,
        Screen::MedicalRecords,
        Screen::Invoices,
        Screen::WalletTransactions,
        Screen::MedicationHistory,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Screen::DoctorAppointments => screens::doctor_appointments::SCREEN_ID,
            Screen::PatientAppointments => screens::patient_appointments::SCREEN_ID,
            Screen::MedicalRecords => screens::medical_records::SCREEN_ID,
            Screen::Invoices => screens::invoices::SCREEN_ID,
            Screen::WalletTransactions => screens::wallet_transactions::SCREEN_ID,
            Screen::MedicationHistory => screens::medication_history::SCREEN_ID,
        }
    }

    /// Load the screen's payload (file or fixture) and render it.
    pub fn run(self, input: Option<&Path>, ctx: ScreenContext) -> ClinicResult<ScreenOutcome> {
        let outcome = match self {
            Screen::DoctorAppointments => {
                let report =
                    load_report(&schemas::appointments()?, input, mock_data::appointments)?;
                screens::doctor_appointments::run_screen(&report, ctx)
            }
            Screen::PatientAppointments => {
                let report =
                    load_report(&schemas::appointments()?, input, mock_data::appointments)?;
                screens::patient_appointments::run_screen(&report, ctx)
            }
            Screen::MedicalRecords => {
                let report =
                    load_report(&schemas::medical_records()?, input, mock_data::medical_records)?;
                screens::medical_records::run_screen(&report, ctx)
            }
            Screen::Invoices => {
                let report = load_report(&schemas::invoices()?, input, mock_data::invoices)?;
                screens::invoices::run_screen(&report, ctx)
            }
            Screen::WalletTransactions => {
                let report = load_report(
                    &schemas::wallet_transactions()?,
                    input,
                    mock_data::wallet_transactions,
                )?;
                screens::wallet_transactions::run_screen(&report, ctx)
            }
            Screen::MedicationHistory => {
                let report =
                    load_report(&schemas::prescriptions()?, input, mock_data::prescriptions)?;
                screens::medication_history::run_screen(&report, ctx)
            }
        };
        Ok(outcome)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use clinic_contracts::{criteria::ListCriteria, error::ClinicError};
    use clinic_core::{
        normalize::normalize_opt_date,
        traits::{FixedClock, RecordAccessor},
    };
    use clinic_intake::schemas;

    use super::{default_profiles, mock_data, screens, Screen};
    use crate::screens::{ScreenContext, ScreenOutcome};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn ctx(screen_id: &str, criteria: ListCriteria) -> ScreenContext {
        let today = NaiveDate::parse_from_str(mock_data::FIXTURE_TODAY, "%Y-%m-%d").unwrap();
        ScreenContext {
            criteria,
            profile: default_profiles().unwrap().resolve(screen_id),
            clock: Box::new(FixedClock(today)),
            page: 1,
        }
    }

    fn doctor(criteria: ListCriteria) -> ScreenOutcome {
        let report = schemas::appointments()
            .unwrap()
            .decode_value(&mock_data::appointments())
            .unwrap();
        screens::doctor_appointments::run_screen(
            &report,
            ctx(screens::doctor_appointments::SCREEN_ID, criteria),
        )
    }

    // ── Profiles ──────────────────────────────────────────────────────────────

    #[test]
    fn shipped_profiles_parse_and_cover_every_screen() {
        let store = default_profiles().unwrap();
        for id in [
            screens::doctor_appointments::SCREEN_ID,
            screens::patient_appointments::SCREEN_ID,
            screens::medical_records::SCREEN_ID,
            screens::invoices::SCREEN_ID,
            screens::wallet_transactions::SCREEN_ID,
        ] {
            assert_eq!(store.resolve(id).id, id, "no dedicated profile for {id}");
        }
        assert_eq!(store.resolve(screens::medication_history::SCREEN_ID).id, "*");
    }

    // ── Doctor appointments ───────────────────────────────────────────────────

    #[test]
    fn doctor_queue_tiles_from_fixtures() {
        let outcome = doctor(ListCriteria::all());
        let c = outcome.counts;

        assert_eq!(outcome.skipped, 1, "fixture without id must be skipped");
        assert_eq!(c.total, 8);
        assert_eq!(c.today, 5);
        assert_eq!(c.waiting_today, 3);
        assert_eq!(c.in_progress_today, 1);
        assert_eq!(c.completed_today, 1);
        assert_eq!(c.needs_attention, 2);
        assert_eq!(outcome.matched, 8);
    }

    #[test]
    fn doctor_today_filter_orders_by_queue() {
        let report = schemas::appointments()
            .unwrap()
            .decode_value(&mock_data::appointments())
            .unwrap();
        let processor = clinic_core::ListProcessor::new(
            screens::doctor_appointments::DoctorAppointments,
            ctx(screens::doctor_appointments::SCREEN_ID, ListCriteria::all()).clock,
            Default::default(),
        );
        let criteria = ListCriteria::all().with_status("TODAY");
        let view = processor.filter_and_sort(&report.records, &criteria);
        let ids: Vec<String> = view.iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["101", "102", "103", "108", "104"]);
    }

    #[test]
    fn doctor_search_matches_unaccented_department() {
        let outcome = doctor(ListCriteria::all().with_search("noi tong quat"));
        assert_eq!(outcome.matched, 6);
    }

    #[test]
    fn doctor_search_does_not_look_at_reason() {
        // "dau dau" is only in a booking reason, which this screen does not search.
        let outcome = doctor(ListCriteria::all().with_search("dau dau"));
        assert_eq!(outcome.matched, 0);
        assert_eq!(outcome.counts.total, 8);
    }

    // ── Patient appointments ──────────────────────────────────────────────────

    #[test]
    fn patient_screen_searches_doctor_and_reason() {
        let report = schemas::appointments()
            .unwrap()
            .decode_value(&mock_data::appointments())
            .unwrap();
        let outcome = screens::patient_appointments::run_screen(
            &report,
            ctx(
                screens::patient_appointments::SCREEN_ID,
                ListCriteria::all().with_search("tim mach"),
            ),
        );
        assert_eq!(outcome.matched, 2);
        // Profile counts PENDING and REJECTED as needing attention.
        assert_eq!(outcome.counts.needs_attention, 1);

        let accessor = screens::patient_appointments::PatientAppointments;
        assert!(accessor.searchable_fields(&report.records[2]).contains(&"Đau đầu"));
    }

    // ── Medical records ───────────────────────────────────────────────────────

    #[test]
    fn medical_records_from_paged_envelope() {
        let report = schemas::medical_records()
            .unwrap()
            .decode_value(&mock_data::medical_records())
            .unwrap();
        assert!(report.is_clean());

        let outcome = screens::medical_records::run_screen(
            &report,
            ctx(screens::medical_records::SCREEN_ID, ListCriteria::all().with_search("bn-0001")),
        );
        assert_eq!(outcome.matched, 2);
        assert_eq!(outcome.counts.today, 2);
        assert_eq!(outcome.counts.waiting_today, 0);
        assert_eq!(outcome.counts.needs_attention, 1);
    }

    // ── Invoices ──────────────────────────────────────────────────────────────

    #[test]
    fn invoice_tiles_use_payment_statuses() {
        let report = schemas::invoices()
            .unwrap()
            .decode_value(&mock_data::invoices())
            .unwrap();
        assert_eq!(report.failures.len(), 1, "non-numeric amount must be skipped");

        let outcome = screens::invoices::run_screen(
            &report,
            ctx(screens::invoices::SCREEN_ID, ListCriteria::all().with_status("unpaid")),
        );
        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.counts.total, 3);
        assert_eq!(outcome.counts.waiting_today, 1);
        assert_eq!(outcome.counts.completed_today, 1);
        assert_eq!(outcome.counts.in_progress_today, 0);
        assert_eq!(outcome.counts.needs_attention, 1);
    }

    // ── Wallet transactions ───────────────────────────────────────────────────

    #[test]
    fn wallet_attention_counts_review_and_failed() {
        let report = schemas::wallet_transactions()
            .unwrap()
            .decode_value(&mock_data::wallet_transactions())
            .unwrap();
        let outcome = screens::wallet_transactions::run_screen(
            &report,
            ctx(screens::wallet_transactions::SCREEN_ID, ListCriteria::all().with_search("VNPay")),
        );
        assert_eq!(outcome.matched, 2);
        assert_eq!(outcome.counts.needs_attention, 2);
        assert_eq!(outcome.counts.waiting_today, 1);
        assert_eq!(outcome.counts.completed_today, 1);
    }

    // ── Medication history ────────────────────────────────────────────────────

    #[test]
    fn medication_history_groups_by_day() {
        let report = schemas::prescriptions()
            .unwrap()
            .decode_value(&mock_data::prescriptions())
            .unwrap();
        let outcome = screens::medication_history::run_screen(
            &report,
            ctx(screens::medication_history::SCREEN_ID, ListCriteria::all()),
        );
        assert_eq!(outcome.matched, 4);
        assert_eq!(outcome.shown, 4);

        let accessor = screens::medication_history::MedicationHistory;
        let refs: Vec<_> = report.records.iter().collect();
        let groups = clinic_core::group::group_by_date(&accessor, &refs);
        let dates: Vec<String> = groups.iter().map(|g| g.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-02-18", "2026-01-22", "unknown"]);
        assert_eq!(groups[1].records.len(), 2);
    }

    #[test]
    fn medication_history_pages_by_prescription() {
        let report = schemas::prescriptions()
            .unwrap()
            .decode_value(&mock_data::prescriptions())
            .unwrap();
        let ids_on = |page: usize| {
            let mut paged = ctx(screens::medication_history::SCREEN_ID, ListCriteria::all());
            paged.profile.page_size = Some(2);
            paged.page = page;
            let history = screens::medication_history::history_page(&report.records, paged);
            assert_eq!(history.total_pages, 2);
            assert_eq!(history.matched, 4);
            history
                .groups
                .iter()
                .flat_map(|g| g.records.iter().map(|rx| rx.id.to_string()))
                .collect::<Vec<_>>()
        };

        assert_eq!(ids_on(1), vec!["3001", "2950"]);
        assert_eq!(ids_on(2), vec!["2951", "2800"]);

        let mut second = ctx(screens::medication_history::SCREEN_ID, ListCriteria::all());
        second.profile.page_size = Some(2);
        second.page = 2;
        let outcome = screens::medication_history::run_screen(&report, second);
        assert_eq!(outcome.shown, 2);
        assert_eq!(outcome.matched, 4);
    }

    #[test]
    fn medication_history_search_by_drug_name() {
        let report = schemas::prescriptions()
            .unwrap()
            .decode_value(&mock_data::prescriptions())
            .unwrap();
        let outcome = screens::medication_history::run_screen(
            &report,
            ctx(
                screens::medication_history::SCREEN_ID,
                ListCriteria::all().with_search("amoxicillin"),
            ),
        );
        assert_eq!(outcome.matched, 1);
    }

    // ── Intake edge shapes ────────────────────────────────────────────────────

    #[test]
    fn epoch_dated_appointment_is_listed_and_dated() {
        let report = schemas::appointments()
            .unwrap()
            .decode_value(&serde_json::json!([
                { "id": 1, "appointmentDate": 1709294400000i64, "status": "PENDING" },
                { "id": 2, "appointmentDate": [2024, 3, 1] }
            ]))
            .unwrap();
        assert!(report.is_clean());

        let accessor = screens::doctor_appointments::DoctorAppointments;
        assert!(normalize_opt_date(accessor.date(&report.records[0])).is_known());
        assert!(!normalize_opt_date(accessor.date(&report.records[1])).is_known());

        let outcome = screens::doctor_appointments::run_screen(
            &report,
            ctx(screens::doctor_appointments::SCREEN_ID, ListCriteria::all()),
        );
        assert_eq!(outcome.counts.total, 2);
        assert_eq!(outcome.matched, 2);
    }

    // ── Registry ──────────────────────────────────────────────────────────────

    #[test]
    fn every_screen_runs_on_its_fixture() {
        for screen in Screen::ALL {
            let outcome = screen.run(None, ctx(screen.id(), ListCriteria::all())).unwrap();
            assert_eq!(outcome.screen_id, screen.id());
            assert!(outcome.counts.total > 0, "{} rendered nothing", screen.id());
        }
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let result = Screen::Invoices.run(
            Some(std::path::Path::new("/nonexistent/invoices.json")),
            ctx(screens::invoices::SCREEN_ID, ListCriteria::all()),
        );
        assert!(matches!(result, Err(ClinicError::Io { .. })));
    }

    // ── Formatting helpers ────────────────────────────────────────────────────

    #[test]
    fn vnd_groups_thousands() {
        assert_eq!(screens::vnd(Some(1_250_000.0)), "1.250.000 đ");
        assert_eq!(screens::vnd(Some(500.0)), "500 đ");
        assert_eq!(screens::vnd(None), "-");
    }
}
