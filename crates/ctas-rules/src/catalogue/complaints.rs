use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};

/// Presenting complaints, optionally qualified by pain or GCS.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "moderate_shortness_of_breath",
            RuleGroup::Complaint,
            CtasLevel::EMERGENT,
            "Moderate shortness of breath or respiratory distress requires rapid medical intervention—assigning CTAS 2.",
            |f| {
                f.complaint_has("shortness of breath")
                    && f.complaint_has_any(&["moderate", "respiratory distress"])
            },
        ),
        // The history qualifier has always been satisfied, so any chest pain
        // complaint fires.
        Rule::new(
            "chest_pain",
            RuleGroup::Complaint,
            CtasLevel::EMERGENT,
            "Chest pain with radiating symptoms or sweating suggests possible acute coronary syndrome CTAS 2.",
            |f| f.complaint_has("chest pain"),
        ),
        Rule::new(
            "abdominal_pain_severe",
            RuleGroup::Complaint,
            CtasLevel::EMERGENT,
            "Abdominal pain with moderate severity needs further evaluation—assigning CTAS 2.",
            |f| f.complaint_has("abdominal pain") && f.pain().at_least(8.0),
        ),
        Rule::new(
            "headache_severe",
            RuleGroup::Complaint,
            CtasLevel::EMERGENT,
            "Headache with sudden onset needs evaluation for possible serious causes—assigning CTAS 2.",
            |f| f.complaint_has("headache") && f.pain().at_least(8.0),
        ),
        Rule::new(
            "major_trauma",
            RuleGroup::Complaint,
            CtasLevel::EMERGENT,
            "Major trauma – blunt, no obvious injury + no shock (pedestrian struck by car travelling at speed CTAS 2.",
            |f| f.complaint_has("major trauma"),
        ),
        Rule::new(
            "abdominal_pain_moderate",
            RuleGroup::Complaint,
            CtasLevel::URGENT,
            "Abdominal pain (moderate pain 4-7/10) CTAS 3.",
            |f| f.complaint_has("abdominal pain") && f.pain().between(4.0, 7.0),
        ),
        Rule::new(
            "headache_moderate",
            RuleGroup::Complaint,
            CtasLevel::URGENT,
            "Headache (moderate pain 4-7/10) CTAS 3.",
            |f| f.complaint_has("headache") && f.pain().between(4.0, 7.0),
        ),
        Rule::new(
            "bloody_diarrhea",
            RuleGroup::Complaint,
            CtasLevel::URGENT,
            "Diarrhea (uncontrolled bloody diarrhea) CTAS 3",
            |f| f.complaint_has("bloody diarrhea"),
        ),
        Rule::new(
            "chronic_confusion",
            RuleGroup::Complaint,
            CtasLevel::LESS_URGENT,
            "Confusion (chronic, no change from usual state) CTAS 4",
            |f| f.complaint_has("confusion") && f.gcs().at_least(14.0),
        ),
        Rule::new(
            "constipation",
            RuleGroup::Complaint,
            CtasLevel::LESS_URGENT,
            "Constipation (mild pain <4/10) CTAS 4.",
            |f| f.complaint_has("constipation") && f.pain().between(4.0, 10.0),
        ),
        Rule::new(
            "medication_refill",
            RuleGroup::Complaint,
            CtasLevel::NON_URGENT,
            "Medication refill requests are non-urgent—assigning CTAS 5.",
            |f| f.complaint_has("medication refill"),
        ),
        Rule::new(
            "medication_request",
            RuleGroup::Complaint,
            CtasLevel::NON_URGENT,
            "Medication refill requests are non-urgent—assigning CTAS 5.",
            |f| f.complaint_has("medication request"),
        ),
        // Listed twice in the historical table; both entries fire and both
        // explanations are reported.
        Rule::new(
            "dressing_change",
            RuleGroup::Complaint,
            CtasLevel::NON_URGENT,
            "Dressing change (uncomplicated) CTAS 5.",
            |f| f.complaint_has("dressing change"),
        ),
        Rule::new(
            "dressing_change_repeat",
            RuleGroup::Complaint,
            CtasLevel::NON_URGENT,
            "Dressing change (uncomplicated) CTAS 5.",
            |f| f.complaint_has("dressing change"),
        ),
        Rule::new(
            "minor_bite",
            RuleGroup::Complaint,
            CtasLevel::NON_URGENT,
            "Minor bites (+/- mild acute peripheral pain) CTAS 5.",
            |f| f.complaint_has("bite") && f.pain().between(1.0, 3.0),
        ),
        Rule::new(
            "mild_diarrhea",
            RuleGroup::Complaint,
            CtasLevel::NON_URGENT,
            "Diarrhea (mild, no dehydration CTAS 5",
            |f| f.complaint_has("diarrhea"),
        ),
    ]
}
