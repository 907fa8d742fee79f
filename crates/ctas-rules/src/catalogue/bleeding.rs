use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

fn bleeding_from(f: &Facts<'_>, sites: &[&str]) -> bool {
    f.complaint_has("bleeding") && f.complaint_has_any(sites)
}

/// Bleeding by site. Central and uncontrolled bleeds are emergent,
/// peripheral and mucosal bleeds urgent.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "bleeding_head_neck",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Bleeding from head or neck CTAS 2",
            |f| bleeding_from(f, &["head", "neck"]),
        ),
        Rule::new(
            "bleeding_torso",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Bleeding from chest, abdomen, pelvis, or spine CTAS 2",
            |f| bleeding_from(f, &["chest", "abdomen", "pelvis", "spine"]),
        ),
        Rule::new(
            "bleeding_vaginal",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Massive vaginal hemorrhage CTAS 2",
            |f| bleeding_from(f, &["vaginal"]),
        ),
        Rule::new(
            "bleeding_iliopsoas_hip",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Bleeding from iliopsoas muscle or hip CTAS 2",
            |f| bleeding_from(f, &["iliopsoas", "hip"]),
        ),
        Rule::new(
            "bleeding_compartments",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Bleeding from extremity muscle compartments CTAS 2",
            |f| bleeding_from(f, &["extremity muscle compartments"]),
        ),
        Rule::new(
            "bleeding_fracture_dislocation",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Bleeding from fractures or dislocations CTAS 2",
            |f| bleeding_from(f, &["fractures", "dislocations"]),
        ),
        Rule::new(
            "bleeding_deep_laceration",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Bleeding from deep lacerations CTAS 2",
            |f| bleeding_from(f, &["deep lacerations"]),
        ),
        Rule::new(
            "bleeding_uncontrolled",
            RuleGroup::Bleeding,
            CtasLevel::EMERGENT,
            "Any uncontrolled bleeding CTAS 2",
            |f| bleeding_from(f, &["uncontrolled"]),
        ),
        Rule::new(
            "bleeding_nose",
            RuleGroup::Bleeding,
            CtasLevel::URGENT,
            "Bleeding from nose (epistaxis) CTAS 3",
            |f| bleeding_from(f, &["nose"]),
        ),
        Rule::new(
            "bleeding_mouth",
            RuleGroup::Bleeding,
            CtasLevel::URGENT,
            "Bleeding from mouth (including gums) CTAS 3",
            |f| bleeding_from(f, &["mouth"]),
        ),
        Rule::new(
            "bleeding_joints",
            RuleGroup::Bleeding,
            CtasLevel::URGENT,
            "Bleeding from joints (hemarthroses) CTAS 3",
            |f| bleeding_from(f, &["joints"]),
        ),
        Rule::new(
            "bleeding_menorrhagia",
            RuleGroup::Bleeding,
            CtasLevel::URGENT,
            "Bleeding from menorrhagia CTAS 3",
            |f| bleeding_from(f, &["menorrhagia"]),
        ),
        Rule::new(
            "abrasions",
            RuleGroup::Bleeding,
            CtasLevel::URGENT,
            "Bleeding from abrasions and superficial lacerations CTAS 3",
            |f| f.complaint_has("abrasions"),
        ),
    ]
}
