//! # clinic-intake
//!
//! Decoding of fetched clinic list payloads.
//!
//! This crate provides [`engine::RecordIntake`], which turns list endpoint
//! JSON into typed records in two phases:
//!
//! 1. **Structural**: JSON Schema validation via the `jsonschema` crate.
//! 2. **Typed**: serde deserialization into the entity type.
//!
//! Bad elements are skipped and reported, never fatal to the list.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use clinic_intake::schemas;
//!
//! let intake = schemas::appointments()?;
//! let report = intake.decode_file(Path::new("appointments.json"))?;
//! for failure in &report.failures {
//!     eprintln!("skipped #{}: {}", failure.index, failure.message);
//! }
//! ```

pub mod engine;
pub mod schemas;

pub use engine::{RecordIntake, ENVELOPE_KEYS};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use clinic_contracts::{entity::RecordId, error::ClinicError};

    use crate::{schemas, RecordIntake};

    // ── Phase 1: envelopes ────────────────────────────────────────────────────

    #[test]
    fn test_bare_array_decodes() {
        let intake = schemas::appointments().unwrap();
        let report = intake
            .decode_value(&json!([
                { "id": 1, "patientName": "Nguyễn Văn An", "appointmentDate": "2024-03-01" },
                { "id": "APT-2", "status": "CONFIRMED" }
            ]))
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[1].id, RecordId::Text("APT-2".to_string()));
    }

    #[test]
    fn test_envelope_keys_are_unwrapped() {
        let intake = schemas::invoices().unwrap();
        for key in ["data", "content", "items", "records"] {
            let payload = json!({ key: [{ "id": 7, "totalAmount": 150000.0 }], "total": 1 });
            let report = intake.decode_value(&payload).unwrap();
            assert_eq!(report.records.len(), 1, "envelope key '{key}' not unwrapped");
        }
    }

    #[test]
    fn test_non_list_payload_is_intake_error() {
        let intake = schemas::invoices().unwrap();
        match intake.decode_value(&json!({ "message": "Unauthorized" })) {
            Err(ClinicError::Intake { reason }) => {
                assert!(reason.contains("invoice-list-v1"), "unexpected reason: {reason}");
            }
            other => panic!("expected Intake error, got {:?}", other.map(|r| r.records.len())),
        }
    }

    // ── Phase 2: per-record validation ────────────────────────────────────────

    #[test]
    fn test_bad_records_are_skipped_and_reported() {
        let intake = schemas::appointments().unwrap();
        let report = intake
            .decode_value(&json!([
                { "id": 1 },
                { "patientName": "no id" },
                { "id": 3, "status": 7 },
                "not an object",
                { "id": 5, "appointmentDate": null }
            ]))
            .unwrap();

        let kept: Vec<String> = report.records.iter().map(|a| a.id.to_string()).collect();
        assert_eq!(kept, vec!["1", "5"]);

        let skipped: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(skipped, vec![1, 2, 3]);
        assert!(report.failures[0].message.contains("JSON Schema violation"));
    }

    #[test]
    fn test_unusual_date_shapes_keep_the_record() {
        let intake = schemas::appointments().unwrap();
        let report = intake
            .decode_value(&json!([
                { "id": 1, "appointmentDate": 1709294400000i64 },
                { "id": 2, "appointmentDate": [2024, 3, 1] },
                { "id": 3, "queueNumber": "3" }
            ]))
            .unwrap();

        assert!(report.is_clean(), "unexpected failures: {:?}", report.failures);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.records[0].appointment_date.as_deref(), Some("1709294400000"));
        assert_eq!(report.records[1].appointment_date, None);
        assert_eq!(report.records[2].queue_number, Some(3));
    }

    #[test]
    fn test_prescription_medications_require_name() {
        let intake = schemas::prescriptions().unwrap();
        let report = intake
            .decode_value(&json!([
                { "id": 1, "medications": [{ "name": "Paracetamol 500mg", "quantity": 10 }] },
                { "id": 2, "medications": [{ "dosage": "2 viên/ngày" }] }
            ]))
            .unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].medications[0].name, "Paracetamol 500mg");
        assert_eq!(report.failures[0].index, 1);
    }

    // ── Text and file input ───────────────────────────────────────────────────

    #[test]
    fn test_decode_str_rejects_malformed_json() {
        let intake = schemas::medical_records().unwrap();
        let result = intake.decode_str("[{ \"id\": 1, ");
        assert!(matches!(result, Err(ClinicError::Intake { .. })));
    }

    #[test]
    fn test_decode_file_missing_is_io_error() {
        let intake = schemas::wallet_transactions().unwrap();
        let result = intake.decode_file(std::path::Path::new("/nonexistent/tx.json"));
        match result {
            Err(ClinicError::Io { path, .. }) => assert!(path.contains("tx.json")),
            other => panic!("expected Io error, got {:?}", other.map(|r| r.records.len())),
        }
    }

    #[test]
    fn test_invalid_schema_document_is_rejected() {
        let result = RecordIntake::<serde_json::Value>::new("broken", &json!({ "type": 12 }));
        assert!(matches!(result, Err(ClinicError::SchemaValidation { .. })));
    }
}
