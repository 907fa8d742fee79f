use ctas_core::CtasLevel;
use ctas_core::models::{Decision, MatchSet};

/// Reported when no rule fires.
pub const FALLBACK_EXPLANATION: &str = "No immediate distress or minor complaints.";

/// Report the most urgent matched level together with every matched
/// explanation, in match order. An empty match set resolves to level 5 with
/// [`FALLBACK_EXPLANATION`].
pub fn most_severe_wins(matches: &MatchSet) -> Decision {
    match matches.most_severe() {
        Some(level) => {
            tracing::debug!(level = %level, matched = matches.len(), "resolved triage level");
            Decision {
                level,
                explanations: matches.explanations(),
            }
        }
        None => Decision {
            level: CtasLevel::NON_URGENT,
            explanations: vec![FALLBACK_EXPLANATION.to_string()],
        },
    }
}
