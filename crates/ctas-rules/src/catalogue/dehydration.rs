use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

fn dehydrated_with(f: &Facts<'_>, signs: &[&str]) -> bool {
    f.complaint_has("dehydration") && f.complaint_has_any(signs)
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "severe_dehydration",
            RuleGroup::Dehydration,
            CtasLevel::RESUSCITATION,
            "Marked volume loss with classic signs of dehydration and signs and symptoms of shock indicate CTAS 1.",
            |f| f.complaint_has("severe dehydration") || dehydrated_with(f, &["shock"]),
        ),
        Rule::new(
            "moderate_dehydration",
            RuleGroup::Dehydration,
            CtasLevel::EMERGENT,
            "Dry mucous membranes, tachycardia, decreased skin turgor, or decreased urine output suggest moderate dehydration and CTAS 2.",
            |f| {
                f.complaint_has("moderate dehydration")
                    || dehydrated_with(
                        f,
                        &[
                            "dry mucous membranes",
                            "tachycardia",
                            "decreased skin turgor",
                            "decreased urine output",
                        ],
                    )
            },
        ),
        Rule::new(
            "mild_dehydration",
            RuleGroup::Dehydration,
            CtasLevel::URGENT,
            "Stable vital signs with thirst, concentrated urine, or decreased fluid intake suggest mild dehydration and CTAS 3.",
            |f| {
                f.complaint_has("mild dehydration")
                    || dehydrated_with(
                        f,
                        &[
                            "stable vital signs",
                            "thirst",
                            "concentrated urine",
                            "decreased fluid intake",
                        ],
                    )
            },
        ),
        Rule::new(
            "potential_dehydration",
            RuleGroup::Dehydration,
            CtasLevel::LESS_URGENT,
            "No symptoms of dehydration but ongoing fluid loss or difficulty tolerating fluids suggests CTAS 4.",
            |f| {
                f.complaint_has("potential dehydration")
                    || (f.complaint_has("fluid loss") && f.complaint_has("ongoing"))
                    || f.complaint_has("difficulty tolerating oral fluids")
            },
        ),
    ]
}
