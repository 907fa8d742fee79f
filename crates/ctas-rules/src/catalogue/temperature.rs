use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

/// Fever presentations, checked in this order. Only the first keyword found
/// in the complaint counts, so "unwell" never also reads as "well".
const FEVER_PRESENTATIONS: [&str; 4] = ["immunocompromised", "septic", "unwell", "well"];

fn febrile_presentation(f: &Facts<'_>) -> Option<&'static str> {
    if !f.temperature().at_least(38.0) {
        return None;
    }
    FEVER_PRESENTATIONS
        .into_iter()
        .find(|keyword| f.complaint_has(keyword))
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "fever_immunocompromised",
            RuleGroup::Temperature,
            CtasLevel::EMERGENT,
            "Immunocompromised (temperature > 38°C): Neutropenia or suspected, chemotherapy, or immunosuppressive drugs, including steroids—assigning CTAS 2.",
            |f| febrile_presentation(f) == Some("immunocompromised"),
        ),
        Rule::new(
            "fever_septic",
            RuleGroup::Temperature,
            CtasLevel::EMERGENT,
            "Looks septic (temperature > 38°C): 3 positive SIRS criteria, hemodynamic compromise, moderate respiratory distress, or altered level of consciousness—assigning CTAS 2.",
            |f| febrile_presentation(f) == Some("septic"),
        ),
        Rule::new(
            "fever_unwell",
            RuleGroup::Temperature,
            CtasLevel::URGENT,
            "Looks unwell (temperature > 38°C): 1 or 2 positive SIRS criteria, appears ill-looking (flushed, lethargic, anxious, or agitated)—assigning CTAS 3.",
            |f| febrile_presentation(f) == Some("unwell"),
        ),
        Rule::new(
            "fever_well",
            RuleGroup::Temperature,
            CtasLevel::LESS_URGENT,
            "Looks well (temperature > 38°C): Only fever as the positive SIRS criterion, appears comfortable and in no distress—assigning CTAS 4.",
            |f| febrile_presentation(f) == Some("well"),
        ),
        Rule::new(
            "hypothermia",
            RuleGroup::Temperature,
            CtasLevel::EMERGENT,
            "Hypothermia (temperature < 35°C): Suspected sepsis, hypothermic shock, or other life-threatening conditions—assigning CTAS 2.",
            |f| f.temperature().below(35.0),
        ),
    ]
}
