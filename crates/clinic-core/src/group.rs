//! Group records by canonical date, newest first.
//!
//! Used by the medication history screen, which shows one block per visit
//! date. Records keep their input order inside a group; records with an
//! unknown date land in a final group of their own.

use std::{cmp::Reverse, collections::BTreeMap};

use chrono::NaiveDate;

use clinic_contracts::view::{CanonicalDate, DateGroup};

use crate::{normalize::normalize_opt_date, traits::RecordAccessor};

pub fn group_by_date<'r, A: RecordAccessor>(
    accessor: &A,
    records: &[&'r A::Record],
) -> Vec<DateGroup<'r, A::Record>> {
    let mut by_date: BTreeMap<Reverse<NaiveDate>, Vec<&'r A::Record>> = BTreeMap::new();
    let mut unknown: Vec<&'r A::Record> = Vec::new();

    for &record in records {
        match normalize_opt_date(accessor.date(record)) {
            CanonicalDate::Known(d) => by_date.entry(Reverse(d)).or_default().push(record),
            CanonicalDate::Unknown => unknown.push(record),
        }
    }

    let mut groups: Vec<DateGroup<'r, A::Record>> = by_date
        .into_iter()
        .map(|(Reverse(d), records)| DateGroup {
            date: CanonicalDate::Known(d),
            records,
        })
        .collect();

    if !unknown.is_empty() {
        groups.push(DateGroup {
            date: CanonicalDate::Unknown,
            records: unknown,
        });
    }

    groups
}
