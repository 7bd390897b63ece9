//! JSON Schemas for the listable entities.
//!
//! The schemas are deliberately loose: they pin the shape of the fields the
//! list processor reads (id, status) and leave everything else to serde.
//! Date fields and the queue number accept any JSON type: an odd shape
//! decodes to an absent value, so the record is still listed.

use serde_json::{json, Value};

use clinic_contracts::{
    entity::{Appointment, Invoice, MedicalRecord, Prescription, WalletTransaction},
    error::ClinicResult,
};

use crate::engine::RecordIntake;

fn optional(kind: &str) -> Value {
    json!({ "type": [kind, "null"] })
}

fn any() -> Value {
    json!({})
}

/// Base object schema: an object with an integer or string `id`.
fn listable(date_field: &str, extra: Value) -> Value {
    let mut properties = json!({
        "id": { "type": ["integer", "string"] },
        "status": optional("string"),
    });
    properties[date_field] = any();
    if let (Some(target), Value::Object(more)) = (properties.as_object_mut(), extra) {
        target.extend(more);
    }

    json!({
        "type": "object",
        "required": ["id"],
        "properties": properties
    })
}

pub fn appointment_schema() -> Value {
    listable(
        "appointmentDate",
        json!({ "queueNumber": any(), "patientName": optional("string") }),
    )
}

pub fn medical_record_schema() -> Value {
    listable("visitDate", json!({ "diagnosis": optional("string") }))
}

pub fn invoice_schema() -> Value {
    listable("issuedAt", json!({ "totalAmount": optional("number") }))
}

pub fn wallet_transaction_schema() -> Value {
    listable("createdAt", json!({ "amount": optional("number") }))
}

pub fn prescription_schema() -> Value {
    listable(
        "prescribedAt",
        json!({
            "medications": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name"],
                    "properties": { "name": { "type": "string" } }
                }
            }
        }),
    )
}

pub fn appointments() -> ClinicResult<RecordIntake<Appointment>> {
    RecordIntake::new("appointment-list-v1", &appointment_schema())
}

pub fn medical_records() -> ClinicResult<RecordIntake<MedicalRecord>> {
    RecordIntake::new("medical-record-list-v1", &medical_record_schema())
}

pub fn invoices() -> ClinicResult<RecordIntake<Invoice>> {
    RecordIntake::new("invoice-list-v1", &invoice_schema())
}

pub fn wallet_transactions() -> ClinicResult<RecordIntake<WalletTransaction>> {
    RecordIntake::new("wallet-transaction-list-v1", &wallet_transaction_schema())
}

pub fn prescriptions() -> ClinicResult<RecordIntake<Prescription>> {
    RecordIntake::new("prescription-list-v1", &prescription_schema())
}
