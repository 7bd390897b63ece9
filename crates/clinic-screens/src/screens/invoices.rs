//! Invoices: the cashier's invoice list.

use clinic_contracts::{entity::Invoice, intake::IntakeReport};
use clinic_core::traits::RecordAccessor;

use super::{or_dash, vnd, ScreenContext, ScreenOutcome};

pub const SCREEN_ID: &str = "invoices";

pub struct Invoices;

impl RecordAccessor for Invoices {
    type Record = Invoice;

    fn screen_id(&self) -> &str {
        SCREEN_ID
    }

    fn date<'r>(&self, record: &'r Invoice) -> Option<&'r str> {
        record.issued_at.as_deref()
    }

    fn status<'r>(&self, record: &'r Invoice) -> Option<&'r str> {
        record.status.as_ref().map(|s| s.as_str())
    }

    fn searchable_fields<'r>(&self, record: &'r Invoice) -> Vec<&'r str> {
        [
            record.invoice_code.as_deref(),
            record.patient_name.as_deref(),
            record.patient_phone.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn row(invoice: &Invoice) -> String {
    format!(
        "{:<15} {:<20} {:<18} {:>14} {}",
        or_dash(invoice.invoice_code.as_deref()),
        or_dash(invoice.issued_at.as_deref()),
        or_dash(invoice.patient_name.as_deref()),
        vnd(invoice.total_amount),
        invoice.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
    )
}

pub fn run_screen(report: &IntakeReport<Invoice>, ctx: ScreenContext) -> ScreenOutcome {
    super::run(Invoices, report, ctx, row)
}
