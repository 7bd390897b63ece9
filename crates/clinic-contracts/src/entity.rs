//! Listable record types returned by the clinic backend.
//!
//! These mirror the JSON the backend serves (camelCase keys). Apart from
//! `id`, every field is optional: list endpoints routinely omit fields, and a
//! missing field must read as "no match" rather than fail decoding.
//!
//! Date fields and the queue number are decoded leniently: backends serialize
//! timestamps as strings, epoch numbers, or component arrays, and a value of
//! an unexpected shape must leave the record listed with an unknown date.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::status::Status;

/// Backend-assigned identifier. Some endpoints use numeric keys, others
/// string codes, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// A raw date field as text. Numbers keep their digits (epoch timestamps);
/// arrays, objects, and booleans read as absent.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// An integer field that may arrive as a number or numeric text. Anything
/// else reads as absent.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A booked appointment, as listed on the doctor and patient screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub patient_code: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    /// Plain date, date-time, or backend timestamp.
    #[serde(default, deserialize_with = "lenient_date")]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub appointment_time: Option<String>,
    /// Position in the doctor's queue for the day.
    #[serde(default, deserialize_with = "lenient_int")]
    pub queue_number: Option<i64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// An examination record written by a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: RecordId,
    #[serde(default)]
    pub record_code: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_code: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: RecordId,
    #[serde(default)]
    pub invoice_code: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub issued_at: Option<String>,
    /// Amount in VND.
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
}

/// A top-up or payment against a patient's e-wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: RecordId,
    #[serde(default)]
    pub transaction_code: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescribedMedication {
    pub name: String,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// A prescription issued at the end of an examination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: RecordId,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub prescribed_at: Option<String>,
    #[serde(default)]
    pub medications: Vec<PrescribedMedication>,
    #[serde(default)]
    pub status: Option<Status>,
}
