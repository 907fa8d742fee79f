use ctas_core::CtasLevel;

use super::{Rule, RuleGroup};

/// Life-threatening presentations: arrests, shock, hemodynamic compromise.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "cardiac_arrest",
            RuleGroup::Critical,
            CtasLevel::RESUSCITATION,
            "Cardiac Arrest is a life-threatening condition requiring immediate resuscitation.",
            |f| f.complaint_has("cardiac arrest"),
        ),
        Rule::new(
            "respiratory_arrest",
            RuleGroup::Critical,
            CtasLevel::RESUSCITATION,
            "Respiratory Arrest requires immediate aggressive interventions to prevent fatal outcomes.",
            |f| f.complaint_has("respiratory arrest"),
        ),
        // Fires on "shock" alone. The trauma qualifier has never constrained
        // this rule and historical decisions depend on that.
        Rule::new(
            "major_trauma_shock",
            RuleGroup::Critical,
            CtasLevel::RESUSCITATION,
            "Major trauma with shock requires immediate intervention—assigning CTAS 1.",
            |f| f.complaint_has("shock"),
        ),
        Rule::new(
            "severe_shortness_of_breath",
            RuleGroup::Critical,
            CtasLevel::RESUSCITATION,
            "Severe shortness of breath or respiratory distress requires immediate intervention—assigning CTAS 1.",
            |f| {
                f.complaint_has("shortness of breath")
                    && f.complaint_has_any(&["severe", "respiratory distress"])
            },
        ),
        Rule::new(
            "shock_hypoperfusion",
            RuleGroup::Critical,
            CtasLevel::RESUSCITATION,
            "Evidence of severe end-organ hypoperfusion; weak or thready pulse, hypotension, significant tachycardia or bradycardia, decreased level of consciousness. Could also appear as flushed, febrile, toxic, as in septic shock.",
            |f| {
                f.complaint_has("shock")
                    && (f.heart_rate().between(130.0, 180.0) || f.heart_rate().at_most(50.0))
                    && (f.systolic().between(200.0, 220.0) || f.diastolic().between(110.0, 130.0))
                    && f.gcs().below(15.0)
                    && (f.temperature().below(35.0) || f.temperature().above(38.0))
            },
        ),
        Rule::new(
            "hemodynamic_compromise",
            RuleGroup::Critical,
            CtasLevel::EMERGENT,
            "Evidence of hemodynamic compromise: unexplained tachycardia, postural hypotension (by history), or suspected hypotension (lower than normal blood pressure or expected blood pressure for the patient).",
            |f| {
                f.complaint_has("hemodynamic compromise")
                    && f.heart_rate().above(100.0)
                    && (f.systolic().below(90.0) || f.diastolic().below(60.0))
                    && f.gcs().at_least(15.0)
            },
        ),
    ]
}
