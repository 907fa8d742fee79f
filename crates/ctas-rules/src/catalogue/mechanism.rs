use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};

/// High-risk mechanisms of injury. All are emergent.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "ejection_from_vehicle",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Ejection from vehicle or rollover suggests CTAS 2 due to high risk of serious injury.",
            |f| f.complaint_has("ejection from vehicle"),
        ),
        Rule::new(
            "passenger_space_intrusion",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Significant intrusion into passenger space is a CTAS 2 mechanism.",
            |f| f.complaint_has("intrusion") && f.complaint_has("passenger"),
        ),
        Rule::new(
            "fall_over_18_ft",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Falls from >18 ft (6 m) suggest CTAS 2 severity.",
            |f| f.complaint_has("fall") && f.complaint_has(">18 ft"),
        ),
        Rule::new(
            "penetrating_injury",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Penetrating injury to head, neck, or torso indicates CTAS 2 urgency.",
            |f| f.complaint_has("penetrating injury"),
        ),
        Rule::new(
            "windshield_head_strike",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Unrestrained head trauma involving windshield impact is CTAS 2.",
            |f| f.complaint_has("head") && f.complaint_has("striking windshield"),
        ),
        Rule::new(
            "pedestrian_struck",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Pedestrian struck by vehicle suggests CTAS 2 head trauma.",
            |f| f.complaint_has("pedestrian struck"),
        ),
        Rule::new(
            "fall_over_3_ft",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Falls from >3 ft or 5 stairs involving head injury indicate CTAS 2.",
            |f| f.complaint_has("fall") && f.complaint_has(">3 ft"),
        ),
        Rule::new(
            "axial_load",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Axial load to the head is a CTAS 2 neck trauma indicator.",
            |f| f.complaint_has("axial load to the head"),
        ),
        Rule::new(
            "rollover",
            RuleGroup::Mechanism,
            CtasLevel::EMERGENT,
            "Vehicle rollover, particularly if unrestrained, suggests CTAS 2 for neck trauma.",
            |f| f.complaint_has("rollover"),
        ),
    ]
}
