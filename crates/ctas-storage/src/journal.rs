use std::path::Path;
use std::sync::Arc;

use jiff::civil::DateTime;

use ctas_core::models::{
    Decision, DecisionRecord, FeedbackRecord, PatientState, VitalClassification,
};

use crate::error::StorageError;
use crate::jsonl::JsonlLog;
use crate::log::RecordLog;
use crate::memory::MemoryLog;

/// Everything read back from both logs.
#[derive(Debug, Clone, Default)]
pub struct History {
    pub decisions: Vec<DecisionRecord>,
    pub feedback: Vec<FeedbackRecord>,
    pub skipped_decisions: usize,
    pub skipped_feedback: usize,
}

/// Writes decision and feedback records to their logs and reads them back.
#[derive(Clone)]
pub struct TriageJournal {
    decisions: Arc<dyn RecordLog<DecisionRecord>>,
    feedback: Arc<dyn RecordLog<FeedbackRecord>>,
}

impl TriageJournal {
    pub fn new(
        decisions: Arc<dyn RecordLog<DecisionRecord>>,
        feedback: Arc<dyn RecordLog<FeedbackRecord>>,
    ) -> Self {
        Self {
            decisions,
            feedback,
        }
    }

    /// Journal backed by two JSON-lines files under `dir`.
    pub fn open(dir: &Path, decisions_file: &str, feedback_file: &str) -> Self {
        Self::new(
            Arc::new(JsonlLog::<DecisionRecord>::new(dir.join(decisions_file))),
            Arc::new(JsonlLog::<FeedbackRecord>::new(dir.join(feedback_file))),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryLog::<DecisionRecord>::new()),
            Arc::new(MemoryLog::<FeedbackRecord>::new()),
        )
    }

    /// Build a decision record and append it.
    pub async fn record_decision(
        &self,
        state: &PatientState,
        decision: &Decision,
        classification: Option<VitalClassification>,
        timestamp: DateTime,
    ) -> Result<DecisionRecord, StorageError> {
        let record = DecisionRecord::new(state, decision, classification, timestamp);
        self.decisions.append(&record).await?;
        tracing::info!(level = %record.ctas_level, "recorded triage decision");
        Ok(record)
    }

    /// Append a feedback record.
    ///
    /// Feedback without an explicit level takes the level of the most recent
    /// decision in the log at the time of writing. This is a best guess, not a
    /// reference: concurrent evaluations can make it point at the wrong
    /// decision.
    pub async fn record_feedback(
        &self,
        mut feedback: FeedbackRecord,
    ) -> Result<FeedbackRecord, StorageError> {
        if feedback.ctas_level.is_none() {
            let snapshot = self.decisions.read_all().await?;
            feedback.ctas_level = snapshot.records.last().map(|r| r.ctas_level);
            if feedback.ctas_level.is_none() {
                tracing::warn!("no decision on record; feedback stored without a level");
            }
        }

        self.feedback.append(&feedback).await?;
        tracing::info!(
            decision = ?feedback.decision,
            level = ?feedback.ctas_level.map(|l| l.get()),
            "recorded feedback"
        );
        Ok(feedback)
    }

    pub async fn load_history(&self) -> Result<History, StorageError> {
        let decisions = self.decisions.read_all().await?;
        let feedback = self.feedback.read_all().await?;
        Ok(History {
            decisions: decisions.records,
            feedback: feedback.records,
            skipped_decisions: decisions.skipped,
            skipped_feedback: feedback.skipped,
        })
    }
}
