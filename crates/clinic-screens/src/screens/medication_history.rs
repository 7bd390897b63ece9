//! Medication history: a patient's prescriptions grouped by visit date.
//!
//! Unlike the tabular screens, this one prints one block per day, newest
//! first, listing every medication prescribed that day. Pagination counts
//! prescriptions, not days, so a day may continue on the next page.
//! Searching by a drug name keeps only prescriptions containing it.

use clinic_contracts::{
    entity::Prescription,
    intake::IntakeReport,
    view::{AggregateCounts, DateGroup},
};
use clinic_core::{group::group_by_date, page::paginate, traits::RecordAccessor, ListProcessor};

use super::{
    or_dash, print_counts, print_failures, print_footer, print_header, ScreenContext,
    ScreenOutcome,
};

pub const SCREEN_ID: &str = "medication-history";

pub struct MedicationHistory;

impl RecordAccessor for MedicationHistory {
    type Record = Prescription;

    fn screen_id(&self) -> &str {
        SCREEN_ID
    }

    fn date<'r>(&self, record: &'r Prescription) -> Option<&'r str> {
        record.prescribed_at.as_deref()
    }

    fn status<'r>(&self, record: &'r Prescription) -> Option<&'r str> {
        record.status.as_ref().map(|s| s.as_str())
    }

    fn searchable_fields<'r>(&self, record: &'r Prescription) -> Vec<&'r str> {
        record
            .doctor_name
            .as_deref()
            .into_iter()
            .chain(record.medications.iter().map(|m| m.name.as_str()))
            .collect()
    }
}

/// One page of the history, already grouped by day.
pub struct HistoryPage<'r> {
    pub counts: AggregateCounts,
    /// Prescriptions matching the criteria, before pagination.
    pub matched: usize,
    pub page: usize,
    pub total_pages: usize,
    pub groups: Vec<DateGroup<'r, Prescription>>,
}

impl HistoryPage<'_> {
    /// Prescriptions on this page.
    pub fn shown(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

/// Filter, sort, and paginate `records`, then group the page by day.
pub fn history_page(records: &[Prescription], ctx: ScreenContext) -> HistoryPage<'_> {
    let page_size = ctx.profile.page_size();
    let processor = ListProcessor::new(MedicationHistory, ctx.clock, ctx.profile.status_groups());
    let view = processor.process(records, &ctx.criteria);
    let window = paginate(&view.items, ctx.page, page_size);

    HistoryPage {
        counts: view.counts,
        matched: view.items.len(),
        page: window.page,
        total_pages: window.total_pages,
        groups: group_by_date(processor.accessor(), window.items),
    }
}

pub fn run_screen(report: &IntakeReport<Prescription>, ctx: ScreenContext) -> ScreenOutcome {
    print_header(SCREEN_ID, &ctx.criteria);
    let history = history_page(&report.records, ctx);
    print_counts(&history.counts);
    println!();

    if history.groups.is_empty() {
        println!("  (no prescriptions)");
    }
    for group in &history.groups {
        println!("  [{}]", group.date);
        for rx in &group.records {
            println!("    Đơn #{}: {}", rx.id, or_dash(rx.doctor_name.as_deref()));
            for med in &rx.medications {
                println!(
                    "      - {} x{} {}",
                    med.name,
                    med.quantity.map(|q| q.to_string()).unwrap_or_else(|| "?".to_string()),
                    or_dash(med.dosage.as_deref()),
                );
            }
        }
    }

    print_footer(history.page, history.total_pages, history.matched, history.counts.total);
    print_failures(&report.failures);

    ScreenOutcome {
        screen_id: SCREEN_ID.to_string(),
        counts: history.counts,
        matched: history.matched,
        shown: history.shown(),
        skipped: report.failures.len(),
    }
}
