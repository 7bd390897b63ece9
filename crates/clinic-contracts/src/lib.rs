//! # clinic-contracts
//!
//! Shared record, criteria, and view types for the clinic list processor.
//!
//! All crates in the workspace import from here. No filtering logic lives in
//! this crate, only data definitions and error types.

pub mod criteria;
pub mod entity;
pub mod error;
pub mod intake;
pub mod status;
pub mod view;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use criteria::{ListCriteria, StatusFilter};
    use entity::{Appointment, Prescription, RecordId};
    use error::ClinicError;
    use status::{Status, StatusGroups, StatusSet};
    use view::{AggregateCounts, CanonicalDate};

    // ── Status / StatusSet ───────────────────────────────────────────────────

    #[test]
    fn status_comparison_ignores_case_and_padding() {
        let status = Status::new(" confirmed ");
        assert!(status.matches("CONFIRMED"));
        assert_eq!(status, Status::new("Confirmed"));
        assert_eq!(status.key(), "CONFIRMED");
    }

    #[test]
    fn status_set_contains_is_case_insensitive() {
        let set = StatusSet::of(["PENDING", "NEEDS_MANUAL_REVIEW"]);
        assert!(set.contains("pending"));
        assert!(set.contains("Needs_Manual_Review"));
        assert!(!set.contains("COMPLETED"));
    }

    #[test]
    fn status_set_duplicate_insert_is_idempotent() {
        let mut set = StatusSet::default();
        set.insert(Status::new("PAID"));
        set.insert(Status::new("paid"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn default_status_groups_match_clinic_tiles() {
        let groups = StatusGroups::default();
        assert!(groups.waiting.contains(status::CONFIRMED));
        assert!(groups.waiting.contains(status::APPROVED));
        assert!(groups.completed.contains(status::COMPLETED));
        assert!(groups.in_progress.contains(status::IN_PROGRESS));
        assert!(groups.needs_attention.contains(status::PENDING));
        assert!(groups.needs_attention.contains(status::NEEDS_MANUAL_REVIEW));
        assert!(!groups.needs_attention.contains(status::CANCELLED));
    }

    // ── StatusFilter ─────────────────────────────────────────────────────────

    #[test]
    fn status_filter_parses_keywords() {
        assert_eq!(StatusFilter::from("all"), StatusFilter::All);
        assert_eq!(StatusFilter::from(""), StatusFilter::All);
        assert_eq!(StatusFilter::from("Today"), StatusFilter::Today);
        assert_eq!(
            StatusFilter::from("COMPLETED"),
            StatusFilter::Exact("COMPLETED".to_string())
        );
    }

    #[test]
    fn criteria_deserialize_from_screen_json() {
        let criteria: ListCriteria = serde_json::from_value(json!({
            "status": "TODAY",
            "dateExact": "2024-03-01",
            "searchTerm": "bac si"
        }))
        .unwrap();

        assert_eq!(criteria.status, StatusFilter::Today);
        assert_eq!(criteria.date_exact.as_deref(), Some("2024-03-01"));
        assert_eq!(criteria.search_term.as_deref(), Some("bac si"));

        let back = serde_json::to_value(&criteria).unwrap();
        assert_eq!(back["status"], "TODAY");
    }

    #[test]
    fn criteria_default_keeps_everything() {
        let criteria: ListCriteria = serde_json::from_value(json!({})).unwrap();
        assert_eq!(criteria, ListCriteria::all());
    }

    // ── Entities ─────────────────────────────────────────────────────────────

    #[test]
    fn appointment_decodes_partial_backend_payload() {
        let appt: Appointment = serde_json::from_value(json!({
            "id": 42,
            "patientName": "Nguyễn Văn An",
            "appointmentDate": "2024-03-01T08:30:00",
            "queueNumber": 3,
            "status": "CONFIRMED"
        }))
        .unwrap();

        assert_eq!(appt.id, RecordId::Number(42));
        assert_eq!(appt.queue_number, Some(3));
        assert!(appt.status.unwrap().matches("confirmed"));
        assert!(appt.doctor_name.is_none());
    }

    #[test]
    fn record_id_accepts_string_codes() {
        let appt: Appointment = serde_json::from_value(json!({ "id": "APT-0007" })).unwrap();
        assert_eq!(appt.id.to_string(), "APT-0007");
    }

    #[test]
    fn prescription_defaults_to_no_medications() {
        let rx: Prescription = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(rx.medications.is_empty());
    }

    #[test]
    fn appointment_date_accepts_epoch_numbers() {
        let appt: Appointment =
            serde_json::from_value(json!({ "id": 1, "appointmentDate": 1709294400000i64 }))
                .unwrap();
        assert_eq!(appt.appointment_date.as_deref(), Some("1709294400000"));
    }

    #[test]
    fn odd_shaped_dates_and_queue_numbers_read_as_absent() {
        let appt: Appointment = serde_json::from_value(json!({
            "id": 2,
            "appointmentDate": [2024, 3, 1],
            "queueNumber": "first"
        }))
        .unwrap();
        assert_eq!(appt.appointment_date, None);
        assert_eq!(appt.queue_number, None);

        let appt: Appointment =
            serde_json::from_value(json!({ "id": 3, "queueNumber": " 3 " })).unwrap();
        assert_eq!(appt.queue_number, Some(3));
    }

    // ── View types ───────────────────────────────────────────────────────────

    #[test]
    fn canonical_date_display() {
        let d = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(CanonicalDate::Known(d).to_string(), "2024-03-01");
        assert_eq!(CanonicalDate::Unknown.to_string(), "unknown");
        assert!(CanonicalDate::Unknown.known().is_none());
    }

    #[test]
    fn aggregate_counts_serialize_camel_case() {
        let counts = AggregateCounts { total: 3, waiting_today: 1, ..Default::default() };
        let v = serde_json::to_value(counts).unwrap();
        assert_eq!(v["total"], 3);
        assert_eq!(v["waitingToday"], 1);
        assert_eq!(v["needsAttention"], 0);
    }

    // ── ClinicError display messages ─────────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = ClinicError::ConfigError {
            reason: "missing screen id".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing screen id"));
    }

    #[test]
    fn error_intake_display() {
        let err = ClinicError::Intake {
            reason: "payload is not a list".to_string(),
        };
        assert!(err.to_string().contains("intake error"));
    }

    #[test]
    fn error_io_display_names_path() {
        let err = ClinicError::Io {
            path: "appointments.json".to_string(),
            reason: "not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("appointments.json"));
        assert!(msg.contains("not found"));
    }
}
