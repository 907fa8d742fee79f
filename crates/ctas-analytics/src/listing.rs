use std::cmp::Reverse;

use ctas_core::CtasLevel;
use ctas_core::models::{
    DecisionRecord, FeedbackRecord, LevelEntry, LevelListing, Provenance,
};

use crate::linkage::feedback_level;

/// Entries kept per level when no limit is configured.
pub const DEFAULT_LIST_LIMIT: usize = 120;

fn decision_entry(record: &DecisionRecord) -> LevelEntry {
    LevelEntry {
        provenance: Provenance::DecisionLog,
        timestamp: record.timestamp,
        chief_complaint: record.chief_complaint.clone(),
        history: record.history.clone(),
        reasons: record.reason.clone(),
        decision: None,
    }
}

fn feedback_entry(record: &FeedbackRecord) -> LevelEntry {
    LevelEntry {
        provenance: Provenance::FeedbackLog,
        timestamp: record.timestamp,
        chief_complaint: record.chief_complaint.clone(),
        history: record.history.clone(),
        reasons: if record.reason.is_empty() {
            Vec::new()
        } else {
            vec![record.reason.clone()]
        },
        decision: Some(record.decision),
    }
}

/// Recent history grouped by level, most urgent level first.
///
/// Decision and feedback entries share each level's list. Entries are
/// ordered newest first; on equal timestamps the entry read later wins,
/// with the feedback log read after the decision log. Each list holds at
/// most `limit` entries. Unlinked feedback is not listed.
pub fn list_by_level(
    decisions: &[DecisionRecord],
    feedback: &[FeedbackRecord],
    limit: usize,
) -> Vec<LevelListing> {
    let mut buckets: Vec<Vec<LevelEntry>> = vec![Vec::new(); CtasLevel::ALL.len()];

    for record in decisions {
        buckets[record.ctas_level.index()].push(decision_entry(record));
    }
    for record in feedback {
        if let Some(level) = feedback_level(record) {
            buckets[level.index()].push(feedback_entry(record));
        }
    }

    CtasLevel::ALL
        .into_iter()
        .zip(buckets)
        .map(|(level, mut entries)| {
            entries.reverse();
            entries.sort_by_key(|entry| Reverse(entry.timestamp));
            entries.truncate(limit);
            LevelListing { level, entries }
        })
        .collect()
}
