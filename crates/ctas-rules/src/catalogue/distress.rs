use ctas_core::CtasLevel;
use ctas_core::models::DistressLevel;

use super::{Rule, RuleGroup};

/// Observed distress paired with oxygen saturation.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "severe_distress_or_hypoxia",
            RuleGroup::Distress,
            CtasLevel::RESUSCITATION,
            "Severe distress or O2 Saturation < 90%—assigning CTAS 1.",
            |f| f.distress() == Some(DistressLevel::Severe) || f.o2_saturation().below(90.0),
        ),
        Rule::new(
            "moderate_distress_or_low_saturation",
            RuleGroup::Distress,
            CtasLevel::EMERGENT,
            "Moderate distress or O2 Saturation 90–92%—assigning CTAS 2.",
            |f| {
                f.distress() == Some(DistressLevel::Moderate)
                    || (f.o2_saturation().at_least(90.0) && f.o2_saturation().below(92.0))
            },
        ),
        Rule::new(
            "mild_distress_borderline_saturation",
            RuleGroup::Distress,
            CtasLevel::URGENT,
            "Mild distress and O2 Saturation 92–94%—assigning CTAS 3.",
            |f| f.distress() == Some(DistressLevel::Mild) && f.o2_saturation().between(92.0, 94.0),
        ),
        Rule::new(
            "no_distress_normal_saturation",
            RuleGroup::Distress,
            CtasLevel::NON_URGENT,
            "No distress and O2 Saturation > 94%—assigning 4 or CTAS 5.",
            |f| f.distress() == Some(DistressLevel::NoDistress) && f.o2_saturation().above(94.0),
        ),
    ]
}
