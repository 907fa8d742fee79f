use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::level::CtasLevel;

/// One catalogue rule that fired for an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleMatch {
    pub rule_id: String,
    pub level: CtasLevel,
    pub explanation: String,
}

impl RuleMatch {
    pub fn new(
        rule_id: impl Into<String>,
        level: CtasLevel,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            level,
            explanation: explanation.into(),
        }
    }
}

/// Every rule that fired, in catalogue order. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct MatchSet {
    pub matches: Vec<RuleMatch>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleMatch> {
        self.matches.iter()
    }

    /// Lowest (most urgent) level among the matches.
    pub fn most_severe(&self) -> Option<CtasLevel> {
        self.matches.iter().map(|m| m.level).min()
    }

    pub fn explanations(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.explanation.clone()).collect()
    }
}

impl FromIterator<RuleMatch> for MatchSet {
    fn from_iter<I: IntoIterator<Item = RuleMatch>>(iter: I) -> Self {
        Self {
            matches: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a RuleMatch;
    type IntoIter = std::slice::Iter<'a, RuleMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// The resolved triage outcome.
///
/// `explanations` holds every matched explanation, not only those at the
/// winning level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Decision {
    pub level: CtasLevel,
    pub explanations: Vec<String>,
}
