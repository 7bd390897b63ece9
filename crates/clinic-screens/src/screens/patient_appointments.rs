//! Patient appointments: a patient's own bookings.
//!
//! Patients look for a visit by doctor, department, or the reason they gave
//! when booking, not by their own name.

use clinic_contracts::{entity::Appointment, intake::IntakeReport};
use clinic_core::traits::RecordAccessor;

use super::{or_dash, ScreenContext, ScreenOutcome};

pub const SCREEN_ID: &str = "patient-appointments";

pub struct PatientAppointments;

impl RecordAccessor for PatientAppointments {
    type Record = Appointment;

    fn screen_id(&self) -> &str {
        SCREEN_ID
    }

    fn date<'r>(&self, record: &'r Appointment) -> Option<&'r str> {
        record.appointment_date.as_deref()
    }

    fn status<'r>(&self, record: &'r Appointment) -> Option<&'r str> {
        record.status.as_ref().map(|s| s.as_str())
    }

    fn searchable_fields<'r>(&self, record: &'r Appointment) -> Vec<&'r str> {
        [
            record.doctor_name.as_deref(),
            record.department_name.as_deref(),
            record.reason.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn ordering_key(&self, record: &Appointment) -> Option<i64> {
        record.queue_number
    }
}

pub fn row(appt: &Appointment) -> String {
    format!(
        "{:<20} {:<22} {:<20} {}",
        or_dash(appt.appointment_date.as_deref()),
        or_dash(appt.doctor_name.as_deref()),
        or_dash(appt.department_name.as_deref()),
        appt.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
    )
}

pub fn run_screen(report: &IntakeReport<Appointment>, ctx: ScreenContext) -> ScreenOutcome {
    super::run(PatientAppointments, report, ctx, row)
}
