use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

fn severe_hypertension(f: &Facts<'_>) -> bool {
    f.systolic().above(220.0) || f.diastolic().above(130.0)
}

fn moderate_hypertension(f: &Facts<'_>) -> bool {
    f.systolic().between(200.0, 220.0) || f.diastolic().between(110.0, 130.0)
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "severe_hypertension_symptomatic",
            RuleGroup::BloodPressure,
            CtasLevel::EMERGENT,
            "SBP > 220 or DBP > 130 with symptoms (e.g., headache, nausea, shortness of breath, chest pain)—assigning CTAS 2.",
            |f| severe_hypertension(f) && f.symptoms_present(),
        ),
        Rule::new(
            "severe_hypertension_asymptomatic",
            RuleGroup::BloodPressure,
            CtasLevel::URGENT,
            "SBP > 220 or DBP > 130 without symptoms—assigning CTAS 3.",
            |f| severe_hypertension(f) && !f.symptoms_present(),
        ),
        Rule::new(
            "moderate_hypertension_symptomatic",
            RuleGroup::BloodPressure,
            CtasLevel::URGENT,
            "SBP 200–220 or DBP 110–130 with symptoms (e.g., headache, nausea, shortness of breath, chest pain)—assigning CTAS 3.",
            |f| moderate_hypertension(f) && f.symptoms_present(),
        ),
        Rule::new(
            "moderate_hypertension_asymptomatic",
            RuleGroup::BloodPressure,
            CtasLevel::LESS_URGENT,
            "SBP 200–220 or DBP 110–130 without symptoms—assigning CTAS 4 or 5 depending on other factors.",
            |f| moderate_hypertension(f) && !f.symptoms_present(),
        ),
    ]
}
