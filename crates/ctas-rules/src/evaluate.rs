use ctas_core::models::{Decision, MatchSet, PatientState};

use crate::catalogue::{Rule, catalogue};
use crate::predicate::Facts;
use crate::resolve::most_severe_wins;

/// Run every rule against the state and collect the ones that fire, in
/// catalogue order. There is no early exit.
pub fn evaluate_rules(rules: &[Rule], state: &PatientState) -> MatchSet {
    let facts = Facts::new(state);
    let matches: MatchSet = rules
        .iter()
        .filter(|rule| rule.matches(&facts))
        .map(Rule::to_match)
        .collect();

    tracing::debug!(
        evaluated = rules.len(),
        matched = matches.len(),
        "evaluated triage rules"
    );
    matches
}

/// Evaluate a state against a custom catalogue and resolve the result.
pub fn evaluate_with(rules: &[Rule], state: &PatientState) -> Decision {
    most_severe_wins(&evaluate_rules(rules, state))
}

/// Evaluate a state against the default catalogue.
pub fn evaluate(state: &PatientState) -> Decision {
    evaluate_with(catalogue(), state)
}
