use ctas_core::CtasLevel;
use ctas_core::models::GlucoseSymptom;

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

fn hypoglycaemic(f: &Facts<'_>) -> bool {
    f.glucose().below(50.0)
}

fn hyperglycaemic(f: &Facts<'_>) -> bool {
    f.glucose().above(300.0)
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "hypoglycaemia_symptomatic",
            RuleGroup::Glucose,
            CtasLevel::EMERGENT,
            "Blood glucose <50 mg/dL with symptoms (e.g., confusion, diaphoresis) indicates critical condition—assigning CTAS 2.",
            |f| hypoglycaemic(f) && f.glucose_symptom().is_some_and(|s| s.is_neuroglycopenic()),
        ),
        Rule::new(
            "hypoglycaemia_asymptomatic",
            RuleGroup::Glucose,
            CtasLevel::URGENT,
            "Blood glucose <50 mg/dL with no symptoms indicates moderate urgency—assigning CTAS 3.",
            |f| hypoglycaemic(f) && f.glucose_symptom() == Some(GlucoseSymptom::Asymptomatic),
        ),
        Rule::new(
            "hyperglycaemia_symptomatic",
            RuleGroup::Glucose,
            CtasLevel::EMERGENT,
            "Blood glucose >300 mg/dL with symptoms (e.g., dyspnea, dehydration) indicates critical condition—assigning CTAS 2.",
            |f| hyperglycaemic(f) && f.glucose_symptom().is_some_and(|s| s.is_hyperglycaemic()),
        ),
        Rule::new(
            "hyperglycaemia_asymptomatic",
            RuleGroup::Glucose,
            CtasLevel::URGENT,
            "Blood glucose >300 mg/dL with no symptoms indicates moderate urgency—assigning CTAS 3.",
            |f| hyperglycaemic(f) && f.glucose_symptom() == Some(GlucoseSymptom::Asymptomatic),
        ),
    ]
}
