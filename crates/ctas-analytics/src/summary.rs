use ctas_core::CtasLevel;
use ctas_core::models::{
    AggregateReport, DecisionRecord, FeedbackDecision, FeedbackRecord, FeedbackTally, LevelSummary,
};

use crate::linkage::feedback_level;

/// `round(accepted / total * 100)`, rounding halves away from zero and
/// capped at 100.
///
/// Feedback is linked to a level independently of the decision log, so a
/// level can collect more acceptances than it has decisions.
pub fn confidence_percent(accepted: u64, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    let percent = (accepted as f64 / total as f64 * 100.0).round() as u64;
    Some(percent.min(100))
}

/// Per-level decision totals and feedback judgments over the full history.
pub fn summarize(decisions: &[DecisionRecord], feedback: &[FeedbackRecord]) -> AggregateReport {
    let mut levels: Vec<LevelSummary> =
        CtasLevel::ALL.into_iter().map(LevelSummary::empty).collect();
    let mut tally = FeedbackTally::default();

    for record in decisions {
        levels[record.ctas_level.index()].total_decisions += 1;
    }

    for record in feedback {
        tally.total += 1;
        match record.decision {
            FeedbackDecision::Accept => tally.accepted += 1,
            FeedbackDecision::Decline => tally.declined += 1,
            FeedbackDecision::Unknown => tally.unknown += 1,
        }

        let Some(level) = feedback_level(record) else {
            tally.unlinked += 1;
            continue;
        };
        let summary = &mut levels[level.index()];
        match record.decision {
            FeedbackDecision::Accept => summary.accepted_count += 1,
            FeedbackDecision::Decline => summary.declined_count += 1,
            FeedbackDecision::Unknown => {}
        }
    }

    for summary in &mut levels {
        summary.confidence_percent =
            confidence_percent(summary.accepted_count, summary.total_decisions);
    }

    tracing::debug!(
        decisions = decisions.len(),
        feedback = tally.total,
        unlinked = tally.unlinked,
        "summarized triage history"
    );

    AggregateReport {
        levels,
        decision_count: decisions.len() as u64,
        feedback: tally,
    }
}
