use ctas_core::CtasLevel;
use ctas_core::models::{DistressLevel, MatchSet, PatientState, RuleMatch};
use ctas_rules::{FALLBACK_EXPLANATION, evaluate, most_severe_wins, rule};

fn explanation(id: &str) -> String {
    rule(id).unwrap().explanation.to_string()
}

#[test]
fn cardiac_arrest_alone_is_resuscitation() {
    let state = PatientState::with_complaint("cardiac arrest");

    let decision = evaluate(&state);
    assert_eq!(decision.level, CtasLevel::RESUSCITATION);
    assert_eq!(decision.explanations, vec![explanation("cardiac_arrest")]);
}

#[test]
fn symptomatic_severe_hypertension_is_emergent() {
    let mut state = PatientState::default();
    state.vitals.systolic = Some(230.0);
    state.vitals.diastolic = Some(80.0);
    state.symptoms_present = true;

    let decision = evaluate(&state);
    assert_eq!(decision.level, CtasLevel::EMERGENT);
    assert_eq!(decision.explanations, vec![explanation("severe_hypertension_symptomatic")]);
}

#[test]
fn stable_patient_is_non_urgent_with_all_reasons() {
    let mut state = PatientState::default();
    state.vitals.gcs = Some(15.0);
    state.vitals.pain_scale = Some(0.0);
    state.vitals.o2_saturation = Some(98.0);
    state.distress_level = Some(DistressLevel::NoDistress);

    let decision = evaluate(&state);
    assert_eq!(decision.level, CtasLevel::NON_URGENT);
    assert_eq!(
        decision.explanations,
        vec![
            explanation("no_distress_normal_saturation"),
            explanation("gcs_normal"),
            explanation("pain_free"),
        ]
    );
}

#[test]
fn nothing_matched_falls_back_to_non_urgent() {
    let decision = evaluate(&PatientState::default());
    assert_eq!(decision.level, CtasLevel::NON_URGENT);
    assert_eq!(decision.explanations, vec![FALLBACK_EXPLANATION.to_string()]);
    assert_eq!(FALLBACK_EXPLANATION, "No immediate distress or minor complaints.");
}

#[test]
fn evaluation_is_deterministic() {
    let mut state =
        PatientState::with_complaint("Chest pain, tearing, shortness of breath moderate");
    state.vitals.heart_rate = Some(120.0);
    state.vitals.pain_scale = Some(9.0);
    state.distress_level = Some(DistressLevel::Moderate);

    assert_eq!(evaluate(&state), evaluate(&state));
}

#[test]
fn most_severe_level_wins_and_every_reason_is_kept() {
    let matches: MatchSet = [
        RuleMatch::new("x", CtasLevel::URGENT, "a"),
        RuleMatch::new("y", CtasLevel::RESUSCITATION, "b"),
        RuleMatch::new("z", CtasLevel::LESS_URGENT, "c"),
    ]
    .into_iter()
    .collect();

    let decision = most_severe_wins(&matches);
    assert_eq!(decision.level, CtasLevel::RESUSCITATION);
    assert_eq!(decision.explanations, vec!["a", "b", "c"]);
}

#[test]
fn resolving_an_empty_match_set_uses_the_fallback() {
    let decision = most_severe_wins(&MatchSet::default());
    assert_eq!(decision.level, CtasLevel::NON_URGENT);
    assert_eq!(decision.explanations.len(), 1);
}

#[test]
fn lower_level_reasons_are_reported_alongside_the_winner() {
    let mut state = PatientState::with_complaint("headache");
    state.vitals.pain_scale = Some(5.0);
    state.vitals.gcs = Some(15.0);

    let decision = evaluate(&state);
    assert_eq!(decision.level, CtasLevel::URGENT);
    assert_eq!(
        decision.explanations,
        vec![explanation("gcs_normal"), explanation("headache_moderate")]
    );
}

#[test]
fn implausible_readings_still_drive_rules() {
    let mut state = PatientState::default();
    state.vitals.systolic = Some(300.0);
    state.symptoms_present = true;

    let decision = evaluate(&state);
    assert_eq!(decision.level, CtasLevel::EMERGENT);
}
