use std::cmp::Ordering;

use crate::models::ExperienceRecord;
use crate::timeline::date::{is_present, record_timestamp};

/// Ongoing positions first, newest start first within each group.
///
/// A missing or unparseable `start_date` is "unknown". Among finished
/// positions unknown sorts after every known date and ties with other
/// unknowns. Among ongoing positions unknown counts as the epoch.
pub fn compare_experiences(a: &ExperienceRecord, b: &ExperienceRecord) -> Ordering {
    let a_present = is_present(a.end_date.as_deref());
    let b_present = is_present(b.end_date.as_deref());

    match (a_present, b_present) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => {
            let start_a = record_timestamp(a.start_date.as_deref()).unwrap_or(0);
            let start_b = record_timestamp(b.start_date.as_deref()).unwrap_or(0);
            start_b.cmp(&start_a)
        }
        (false, false) => {
            let start_a = record_timestamp(a.start_date.as_deref());
            let start_b = record_timestamp(b.start_date.as_deref());
            match (start_a, start_b) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => b.cmp(&a),
            }
        }
    }
}

/// Stable sort by [`compare_experiences`]; equal records keep input order.
pub fn sort_experiences(mut records: Vec<ExperienceRecord>) -> Vec<ExperienceRecord> {
    records.sort_by(compare_experiences);
    tracing::debug!(count = records.len(), "experiences ordered");
    records
}
