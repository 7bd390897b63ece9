//! Wallet transactions: e-wallet top-ups and payments.
//!
//! Transactions stuck in `NEEDS_MANUAL_REVIEW` after the payment gateway
//! callback are what the attention tile is for.

use clinic_contracts::{entity::WalletTransaction, intake::IntakeReport};
use clinic_core::traits::RecordAccessor;

use super::{or_dash, vnd, ScreenContext, ScreenOutcome};

pub const SCREEN_ID: &str = "wallet-transactions";

pub struct WalletTransactions;

impl RecordAccessor for WalletTransactions {
    type Record = WalletTransaction;

    fn screen_id(&self) -> &str {
        SCREEN_ID
    }

    fn date<'r>(&self, record: &'r WalletTransaction) -> Option<&'r str> {
        record.created_at.as_deref()
    }

    fn status<'r>(&self, record: &'r WalletTransaction) -> Option<&'r str> {
        record.status.as_ref().map(|s| s.as_str())
    }

    fn searchable_fields<'r>(&self, record: &'r WalletTransaction) -> Vec<&'r str> {
        [
            record.transaction_code.as_deref(),
            record.owner_name.as_deref(),
            record.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn row(tx: &WalletTransaction) -> String {
    format!(
        "{:<13} {:<20} {:<18} {:>14} {}",
        or_dash(tx.transaction_code.as_deref()),
        or_dash(tx.created_at.as_deref()),
        or_dash(tx.owner_name.as_deref()),
        vnd(tx.amount),
        tx.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
    )
}

pub fn run_screen(report: &IntakeReport<WalletTransaction>, ctx: ScreenContext) -> ScreenOutcome {
    super::run(WalletTransactions, report, ctx, row)
}
