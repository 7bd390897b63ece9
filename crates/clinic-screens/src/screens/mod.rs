//! Clinic management screens.
//!
//! Each screen is a self-contained module that supplies a `RecordAccessor`
//! for its entity (which field is the date, which fields are searchable) and
//! a row formatter. The filtering itself is never duplicated: every screen
//! goes through `clinic_core::ListProcessor` via [`run`].

pub mod doctor_appointments;
pub mod invoices;
pub mod medical_records;
pub mod medication_history;
pub mod patient_appointments;
pub mod wallet_transactions;

use clinic_contracts::{
    criteria::ListCriteria,
    intake::{IntakeFailure, IntakeReport},
    view::AggregateCounts,
};
use clinic_core::{
    page::paginate,
    traits::{Clock, RecordAccessor},
    ListProcessor,
};
use clinic_profile::ScreenProfile;

/// Everything a screen needs besides its records.
pub struct ScreenContext {
    pub criteria: ListCriteria,
    pub profile: ScreenProfile,
    pub clock: Box<dyn Clock>,
    /// 1-based page to print.
    pub page: usize,
}

/// What a screen run produced, for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOutcome {
    pub screen_id: String,
    pub counts: AggregateCounts,
    /// Records matching the criteria, before pagination.
    pub matched: usize,
    /// Records shown on the requested page.
    pub shown: usize,
    /// Payload elements dropped at intake.
    pub skipped: usize,
}

/// Process `report.records` with `accessor`, print one page, return the outcome.
pub fn run<A, F>(
    accessor: A,
    report: &IntakeReport<A::Record>,
    ctx: ScreenContext,
    row: F,
) -> ScreenOutcome
where
    A: RecordAccessor,
    F: Fn(&A::Record) -> String,
{
    let screen_id = accessor.screen_id().to_string();
    let page_size = ctx.profile.page_size();
    let processor = ListProcessor::new(accessor, ctx.clock, ctx.profile.status_groups());

    let view = processor.process(&report.records, &ctx.criteria);
    let page = paginate(&view.items, ctx.page, page_size);

    print_header(&screen_id, &ctx.criteria);
    print_counts(&view.counts);
    println!();

    if page.items.is_empty() {
        println!("  (no matching records)");
    }
    for &record in page.items {
        println!("  {}", row(record));
    }

    print_footer(page.page, page.total_pages, page.total_items, view.counts.total);
    print_failures(&report.failures);

    ScreenOutcome {
        screen_id,
        counts: view.counts,
        matched: view.items.len(),
        shown: page.items.len(),
        skipped: report.failures.len(),
    }
}

pub(crate) fn print_header(screen_id: &str, criteria: &ListCriteria) {
    println!("=== {} ===", screen_id);
    println!(
        "  Filter: status={} date={} search={}",
        criteria.status,
        criteria.date_exact.as_deref().unwrap_or("-"),
        criteria.search_term.as_deref().unwrap_or("-"),
    );
}

pub(crate) fn print_footer(page: usize, total_pages: usize, matched: usize, total: usize) {
    println!();
    println!(
        "  Page {}/{} ({} matching, {} total)",
        page,
        total_pages.max(1),
        matched,
        total
    );
}

pub(crate) fn print_failures(failures: &[IntakeFailure]) {
    for failure in failures {
        println!("  Skipped payload element #{}: {}", failure.index, failure.message);
    }
    println!();
}

pub(crate) fn print_counts(counts: &AggregateCounts) {
    println!(
        "  Tiles: total={} today={} waiting={} in-progress={} completed={} attention={}",
        counts.total,
        counts.today,
        counts.waiting_today,
        counts.in_progress_today,
        counts.completed_today,
        counts.needs_attention
    );
}

/// Display helper for optional text columns.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Format an amount in VND with thousands separators.
pub(crate) fn vnd(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return "-".to_string();
    };
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}{grouped} đ")
}
