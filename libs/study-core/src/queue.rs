//! Due-queue selection over learning records.

use crate::types::LearningRecord;
use chrono::{DateTime, Utc};

/// Records due at or before `now`, ordered by due time ascending.
///
/// The sort is stable, so records sharing a due time keep their original
/// relative order.
pub fn due_records(records: &[LearningRecord], now: DateTime<Utc>) -> Vec<LearningRecord> {
    let mut due: Vec<LearningRecord> = records
        .iter()
        .filter(|r| r.next_review <= now)
        .cloned()
        .collect();
    due.sort_by_key(|r| r.next_review);
    due
}
