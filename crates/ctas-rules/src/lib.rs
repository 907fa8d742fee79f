//! ctas-rules
//!
//! The triage engine: raw input normalization, vital classification, the
//! default rule catalogue, rule evaluation and most-severe-wins resolution.
//! Pure and synchronous. No I/O.

pub mod catalogue;
pub mod classify;
pub mod error;
pub mod evaluate;
pub mod normalize;
pub mod predicate;
pub mod resolve;

use jiff::civil::DateTime;
use serde::Serialize;

use ctas_core::models::{
    Decision, DecisionRecord, MatchSet, PatientState, VitalClassification, VitalValue,
};

pub use catalogue::{Rule, RuleGroup, RuleSummary, catalogue, rule};
pub use classify::{classify_named, classify_state, reference_range};
pub use evaluate::{evaluate, evaluate_rules, evaluate_with};
pub use normalize::{RawEncounter, normalize};
pub use resolve::{FALLBACK_EXPLANATION, most_severe_wins};

/// Everything produced by one pass through the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Triage {
    pub state: PatientState,
    pub vitals: Vec<VitalValue>,
    pub classification: VitalClassification,
    pub matches: MatchSet,
    pub decision: Decision,
}

impl Triage {
    /// Package this result as a decision log record.
    pub fn into_record(self, timestamp: DateTime) -> DecisionRecord {
        DecisionRecord::new(
            &self.state,
            &self.decision,
            Some(self.classification),
            timestamp,
        )
    }
}

/// Normalize, classify, evaluate and resolve a raw encounter.
pub fn triage(raw: &RawEncounter) -> Triage {
    let state = normalize(raw);
    let vitals = normalize::vital_values(raw);
    let classification = classify_state(&state);
    let matches = evaluate_rules(catalogue(), &state);
    let decision = most_severe_wins(&matches);

    tracing::info!(
        level = %decision.level,
        matched = matches.len(),
        flagged = classification.flagged().count(),
        "triage complete"
    );

    Triage {
        state,
        vitals,
        classification,
        matches,
        decision,
    }
}
