//! Summary tile counts.
//!
//! Always computed from scratch over the full, unfiltered record list. Lists
//! are a few hundred records at most, so there is no incremental bookkeeping.

use chrono::NaiveDate;
use tracing::debug;

use clinic_contracts::{
    status::{StatusGroups, StatusSet},
    view::AggregateCounts,
};

use crate::{normalize::normalize_opt_date, traits::RecordAccessor};

/// Count the six dashboard tiles for `records` as of `today`.
pub fn aggregate_counts<A: RecordAccessor>(
    accessor: &A,
    records: &[A::Record],
    groups: &StatusGroups,
    today: NaiveDate,
) -> AggregateCounts {
    let mut counts = AggregateCounts {
        total: records.len(),
        ..AggregateCounts::default()
    };
    let mut unknown_dates = 0usize;

    for record in records {
        let date = normalize_opt_date(accessor.date(record));
        let status = accessor.status(record);
        let in_group = |set: &StatusSet| status.is_some_and(|s| set.contains(s));

        if in_group(&groups.needs_attention) {
            counts.needs_attention += 1;
        }

        match date.known() {
            Some(d) if d == today => {
                counts.today += 1;
                if in_group(&groups.waiting) {
                    counts.waiting_today += 1;
                }
                if in_group(&groups.in_progress) {
                    counts.in_progress_today += 1;
                }
                if in_group(&groups.completed) {
                    counts.completed_today += 1;
                }
            }
            Some(_) => {}
            None => unknown_dates += 1,
        }
    }

    if unknown_dates > 0 {
        debug!(
            screen = %accessor.screen_id(),
            unknown_dates,
            "records with unparseable dates left out of daily tiles"
        );
    }

    counts
}
