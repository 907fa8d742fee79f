use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

fn cva_presentation(f: &Facts<'_>) -> bool {
    f.complaint_has_any(&["extremity weakness", "cva symptoms"])
}

fn cva_early_onset(f: &Facts<'_>) -> bool {
    cva_presentation(f) && f.complaint_has("onset < 4.5 hours")
}

fn dysphagia(f: &Facts<'_>) -> bool {
    f.complaint_has_any(&["difficulty swallowing", "dysphagia"])
}

fn dysphagia_airway_signs(f: &Facts<'_>) -> bool {
    dysphagia(f) && f.complaint_has_any(&["drooling", "stridor"])
}

/// Second-order modifiers and remaining complaint-specific rules.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "chest_pain_tearing",
            RuleGroup::Modifier,
            CtasLevel::EMERGENT,
            "Significant chest pain with ripping or tearing features suggests CTAS 2.",
            |f| f.complaint_has("chest pain") && f.complaint_has_any(&["ripping", "tearing"]),
        ),
        Rule::new(
            "cva_early_onset",
            RuleGroup::Modifier,
            CtasLevel::EMERGENT,
            "Extremity weakness or symptoms of CVA with onset < 4.5 hours indicates CTAS 2.",
            cva_early_onset,
        ),
        Rule::new(
            "cva_late_or_resolved",
            RuleGroup::Modifier,
            CtasLevel::URGENT,
            "Extremity weakness or symptoms of CVA with onset > 4.5 hours or resolved indicates CTAS 3.",
            |f| {
                cva_presentation(f)
                    && !cva_early_onset(f)
                    && f.complaint_has_any(&["onset > 4.5 hours", "resolved"])
            },
        ),
        Rule::new(
            "dysphagia_airway",
            RuleGroup::Modifier,
            CtasLevel::EMERGENT,
            "Difficulty swallowing with drooling or stridor suggests CTAS 2.",
            dysphagia_airway_signs,
        ),
        Rule::new(
            "dysphagia_foreign_body",
            RuleGroup::Modifier,
            CtasLevel::URGENT,
            "Difficulty swallowing with a possible foreign body indicates CTAS 3.",
            |f| dysphagia(f) && !dysphagia_airway_signs(f) && f.complaint_has("foreign body"),
        ),
        Rule::new(
            "extremity_deformity",
            RuleGroup::Modifier,
            CtasLevel::URGENT,
            "Obvious deformity in upper or lower extremity injury suggests CTAS 3.",
            |f| {
                f.complaint_has_any(&["extremity injury", "upper extremity", "lower extremity"])
                    && f.complaint_has("obvious deformity")
            },
        ),
        Rule::new(
            "stroke_slurred_speech",
            RuleGroup::Modifier,
            CtasLevel::EMERGENT,
            "Possible stroke with slurred speech indicates a high risk of deterioration—assigning CTAS 2.",
            |f| f.complaint_has("stroke") && f.history_has("slurred speech"),
        ),
        Rule::new(
            "post_seizure_low_gcs",
            RuleGroup::Modifier,
            CtasLevel::EMERGENT,
            "Post-seizure with GCS < 14 indicates ongoing risk of deterioration—assigning CTAS 2.",
            |f| f.complaint_has("seizure") && f.gcs().below(14.0),
        ),
        Rule::new(
            "mild_skin_rash",
            RuleGroup::Modifier,
            CtasLevel::LESS_URGENT,
            "Mild rash without systemic symptoms is less urgent—assigning CTAS 4.",
            |f| f.complaint_has("mild skin rash"),
        ),
        Rule::new(
            "sore_throat_afebrile",
            RuleGroup::Modifier,
            CtasLevel::NON_URGENT,
            "Sore throat without fever or systemic symptoms is non-urgent—assigning CTAS 5.",
            |f| f.complaint_has("sore throat") && f.history_has("no fever"),
        ),
    ]
}
