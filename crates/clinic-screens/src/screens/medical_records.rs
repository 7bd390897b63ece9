//! Medical records: examination records by visit date.

use clinic_contracts::{entity::MedicalRecord, intake::IntakeReport};
use clinic_core::traits::RecordAccessor;

use super::{or_dash, ScreenContext, ScreenOutcome};

pub const SCREEN_ID: &str = "medical-records";

pub struct MedicalRecords;

impl RecordAccessor for MedicalRecords {
    type Record = MedicalRecord;

    fn screen_id(&self) -> &str {
        SCREEN_ID
    }

    fn date<'r>(&self, record: &'r MedicalRecord) -> Option<&'r str> {
        record.visit_date.as_deref()
    }

    fn status<'r>(&self, record: &'r MedicalRecord) -> Option<&'r str> {
        record.status.as_ref().map(|s| s.as_str())
    }

    fn searchable_fields<'r>(&self, record: &'r MedicalRecord) -> Vec<&'r str> {
        [
            record.record_code.as_deref(),
            record.patient_name.as_deref(),
            record.patient_code.as_deref(),
            record.doctor_name.as_deref(),
            record.diagnosis.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn row(record: &MedicalRecord) -> String {
    format!(
        "{:<14} {:<20} {:<18} {:<24} {}",
        or_dash(record.record_code.as_deref()),
        or_dash(record.visit_date.as_deref()),
        or_dash(record.patient_name.as_deref()),
        or_dash(record.diagnosis.as_deref()),
        record.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
    )
}

pub fn run_screen(report: &IntakeReport<MedicalRecord>, ctx: ScreenContext) -> ScreenOutcome {
    super::run(MedicalRecords, report, ctx, row)
}
