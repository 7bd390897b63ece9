//! Doctor appointments: the examining doctor's queue.
//!
//! Searches by patient identity (name, phone, patient code) and department.
//! Same-day appointments are ordered by queue number.

use clinic_contracts::{entity::Appointment, intake::IntakeReport};
use clinic_core::traits::RecordAccessor;

use super::{or_dash, ScreenContext, ScreenOutcome};

pub const SCREEN_ID: &str = "doctor-appointments";

pub struct DoctorAppointments;

impl RecordAccessor for DoctorAppointments {
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
            record.patient_name.as_deref(),
            record.patient_phone.as_deref(),
            record.patient_code.as_deref(),
            record.department_name.as_deref(),
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
        "#{:<3} {:<11} {:<6} {:<22} {:<12} {}",
        appt.queue_number.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
        or_dash(appt.appointment_date.as_deref()),
        or_dash(appt.appointment_time.as_deref()),
        or_dash(appt.patient_name.as_deref()),
        or_dash(appt.patient_phone.as_deref()),
        appt.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
    )
}

pub fn run_screen(report: &IntakeReport<Appointment>, ctx: ScreenContext) -> ScreenOutcome {
    super::run(DoctorAppointments, report, ctx, row)
}
