use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::record::FeedbackDecision;
use crate::level::CtasLevel;

/// Totals for one CTAS level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelSummary {
    pub level: CtasLevel,
    pub total_decisions: u64,
    pub accepted_count: u64,
    pub declined_count: u64,
    /// `round(accepted / total_decisions * 100)`, capped at 100; absent when
    /// there are no decisions at this level.
    pub confidence_percent: Option<u64>,
}

impl LevelSummary {
    pub fn empty(level: CtasLevel) -> Self {
        Self {
            level,
            total_decisions: 0,
            accepted_count: 0,
            declined_count: 0,
            confidence_percent: None,
        }
    }
}

/// Feedback counts across all levels, including records that could not be
/// tied to any level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackTally {
    pub total: u64,
    pub accepted: u64,
    pub declined: u64,
    pub unknown: u64,
    pub unlinked: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateReport {
    /// One entry per level, most urgent first.
    pub levels: Vec<LevelSummary>,
    pub decision_count: u64,
    pub feedback: FeedbackTally,
}

impl AggregateReport {
    pub fn level(&self, level: CtasLevel) -> Option<&LevelSummary> {
        self.levels.iter().find(|s| s.level == level)
    }
}

/// Which log a listed entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Provenance {
    DecisionLog,
    FeedbackLog,
}

/// A historical entry surfaced for review under a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelEntry {
    pub provenance: Provenance,
    #[serde(with = "crate::timestamp")]
    #[ts(type = "string")]
    pub timestamp: DateTime,
    pub chief_complaint: String,
    pub history: String,
    pub reasons: Vec<String>,
    /// The clinician's judgment, for feedback entries.
    pub decision: Option<FeedbackDecision>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelListing {
    pub level: CtasLevel,
    pub entries: Vec<LevelEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelShare {
    pub level: CtasLevel,
    pub count: u64,
    pub proportion: f64,
}

/// How often each level is mentioned across the segments of a reason string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelDistribution {
    pub shares: Vec<LevelShare>,
    pub total: u64,
}
