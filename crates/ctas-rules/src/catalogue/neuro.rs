use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};

/// Level of consciousness by Glasgow Coma Scale.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "gcs_unconscious",
            RuleGroup::Neurological,
            CtasLevel::RESUSCITATION,
            "Unconscious (GCS 3-9): unable to protect airway, continuous seizure, or progressive deterioration in level of consciousness—assigning CTAS 1.",
            |f| f.gcs().between(3.0, 9.0),
        ),
        Rule::new(
            "gcs_altered",
            RuleGroup::Neurological,
            CtasLevel::EMERGENT,
            "Altered level of consciousness (GCS 10-13): loss of orientation to person, place, or time; new impairment of recent memory; new onset confusion; agitation—assigning CTAS 2.",
            |f| f.gcs().between(10.0, 13.0),
        ),
        Rule::new(
            "gcs_confused",
            RuleGroup::Neurological,
            CtasLevel::LESS_URGENT,
            "Confusion GCS (14): 3, CTAS 4 based on other symptoms or findings.",
            |f| f.gcs().equals(14.0),
        ),
        Rule::new(
            "gcs_normal",
            RuleGroup::Neurological,
            CtasLevel::NON_URGENT,
            "Normal GCS (15): CTAS 5 based on other symptoms or findings.",
            |f| f.gcs().equals(15.0),
        ),
    ]
}
