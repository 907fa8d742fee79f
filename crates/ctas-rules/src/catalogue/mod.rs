//! The default triage rule catalogue.
//!
//! Each group module contributes an ordered list of rules. Groups are only a
//! way of organising the table: every rule is evaluated on its own, and rules
//! across (and within) groups overlap and sometimes disagree. Catalogue order
//! only determines the order of explanations in a decision.

mod bleeding;
mod blood_pressure;
mod complaints;
mod critical;
mod dehydration;
mod distress;
mod glucose;
mod mechanism;
mod modifiers;
mod neuro;
mod pain;
mod temperature;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ctas_core::CtasLevel;
use ctas_core::models::RuleMatch;

use crate::error::RulesError;
use crate::predicate::Facts;

/// Conceptual grouping of a rule, for listing and review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleGroup {
    Critical,
    BloodPressure,
    Distress,
    Neurological,
    Temperature,
    Pain,
    Glucose,
    Complaint,
    Bleeding,
    Mechanism,
    Dehydration,
    Modifier,
}

pub type Predicate = fn(&Facts<'_>) -> bool;

/// A single `(level, predicate, explanation)` catalogue entry.
#[derive(Clone)]
pub struct Rule {
    pub id: &'static str,
    pub group: RuleGroup,
    pub level: CtasLevel,
    pub explanation: &'static str,
    predicate: Predicate,
}

impl Rule {
    pub fn new(
        id: &'static str,
        group: RuleGroup,
        level: CtasLevel,
        explanation: &'static str,
        predicate: Predicate,
    ) -> Self {
        Self {
            id,
            group,
            level,
            explanation,
            predicate,
        }
    }

    pub fn matches(&self, facts: &Facts<'_>) -> bool {
        (self.predicate)(facts)
    }

    pub fn to_match(&self) -> RuleMatch {
        RuleMatch::new(self.id, self.level, self.explanation)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("group", &self.group)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// Serializable view of a rule, without its predicate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleSummary {
    pub id: String,
    pub group: RuleGroup,
    pub level: CtasLevel,
    pub explanation: String,
}

impl From<&Rule> for RuleSummary {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.to_string(),
            group: rule.group,
            level: rule.level,
            explanation: rule.explanation.to_string(),
        }
    }
}

static CATALOGUE: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        critical::rules(),
        blood_pressure::rules(),
        distress::rules(),
        neuro::rules(),
        temperature::rules(),
        pain::rules(),
        glucose::rules(),
        complaints::rules(),
        bleeding::rules(),
        mechanism::rules(),
        dehydration::rules(),
        modifiers::rules(),
    ]
    .into_iter()
    .flatten()
    .collect()
});

/// The default catalogue, in evaluation order.
pub fn catalogue() -> &'static [Rule] {
    &CATALOGUE
}

/// Look up a rule of the default catalogue by id.
pub fn rule(id: &str) -> Result<&'static Rule, RulesError> {
    catalogue()
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| RulesError::UnknownRule(id.to_string()))
}
