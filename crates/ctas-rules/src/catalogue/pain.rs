use ctas_core::CtasLevel;
use ctas_core::models::{PainDuration, PainLocation};

use super::{Rule, RuleGroup};
use crate::predicate::Facts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PainBand {
    Severe,
    Moderate,
    Mild,
    Free,
}

/// Scale 8–10 severe, 4–7 moderate, 1–3 mild, 0 pain-free. Values between
/// bands (e.g. 7.5) fall in none.
fn band(f: &Facts<'_>) -> Option<PainBand> {
    let pain = f.pain();
    if pain.between(8.0, 10.0) {
        Some(PainBand::Severe)
    } else if pain.between(4.0, 7.0) {
        Some(PainBand::Moderate)
    } else if pain.between(1.0, 3.0) {
        Some(PainBand::Mild)
    } else if pain.equals(0.0) {
        Some(PainBand::Free)
    } else {
        None
    }
}

fn pain_is(
    f: &Facts<'_>,
    expected: PainBand,
    location: PainLocation,
    duration: PainDuration,
) -> bool {
    band(f) == Some(expected)
        && f.pain_location() == Some(location)
        && f.pain_duration() == Some(duration)
}

/// Pain stratified by scale, location and duration.
pub(super) fn rules() -> Vec<Rule> {
    use PainBand::*;
    use PainDuration::*;
    use PainLocation::*;

    vec![
        Rule::new(
            "severe_central_acute_pain",
            RuleGroup::Pain,
            CtasLevel::EMERGENT,
            "Severe pain (8-10) with central acute pain indicates a high urgency condition—assigning CTAS 2.",
            |f| pain_is(f, Severe, Central, Acute),
        ),
        Rule::new(
            "severe_central_chronic_pain",
            RuleGroup::Pain,
            CtasLevel::URGENT,
            "Severe pain (8-10) with central chronic pain indicates a moderately high urgency—assigning CTAS 3.",
            |f| pain_is(f, Severe, Central, Chronic),
        ),
        Rule::new(
            "severe_peripheral_acute_pain",
            RuleGroup::Pain,
            CtasLevel::URGENT,
            "Severe pain (8-10) with peripheral acute pain requires moderate urgency—assigning CTAS 3.",
            |f| pain_is(f, Severe, Peripheral, Acute),
        ),
        Rule::new(
            "severe_peripheral_chronic_pain",
            RuleGroup::Pain,
            CtasLevel::LESS_URGENT,
            "Severe pain (8-10) with peripheral chronic pain suggests a lower urgency—assigning CTAS 4.",
            |f| pain_is(f, Severe, Peripheral, Chronic),
        ),
        Rule::new(
            "moderate_central_acute_pain",
            RuleGroup::Pain,
            CtasLevel::URGENT,
            "Moderate pain (4-7) with central acute pain suggests moderate urgency—assigning CTAS 3.",
            |f| pain_is(f, Moderate, Central, Acute),
        ),
        Rule::new(
            "moderate_central_chronic_pain",
            RuleGroup::Pain,
            CtasLevel::LESS_URGENT,
            "Moderate pain (4-7) with central chronic pain indicates a lower urgency—assigning CTAS 4.",
            |f| pain_is(f, Moderate, Central, Chronic),
        ),
        Rule::new(
            "moderate_peripheral_acute_pain",
            RuleGroup::Pain,
            CtasLevel::LESS_URGENT,
            "Moderate pain (4-7) with peripheral acute pain indicates moderate urgency—assigning CTAS 4.",
            |f| pain_is(f, Moderate, Peripheral, Acute),
        ),
        Rule::new(
            "moderate_peripheral_chronic_pain",
            RuleGroup::Pain,
            CtasLevel::NON_URGENT,
            "Moderate pain (4-7) with peripheral chronic pain suggests minimal urgency—assigning CTAS 5.",
            |f| pain_is(f, Moderate, Peripheral, Chronic),
        ),
        Rule::new(
            "mild_central_acute_pain",
            RuleGroup::Pain,
            CtasLevel::LESS_URGENT,
            "Mild pain (1-3) with central acute pain suggests low urgency—assigning CTAS 4.",
            |f| pain_is(f, Mild, Central, Acute),
        ),
        Rule::new(
            "mild_central_chronic_pain",
            RuleGroup::Pain,
            CtasLevel::NON_URGENT,
            "Mild pain (1-3) with central chronic pain indicates minimal urgency—assigning CTAS 5.",
            |f| pain_is(f, Mild, Central, Chronic),
        ),
        Rule::new(
            "mild_peripheral_pain",
            RuleGroup::Pain,
            CtasLevel::NON_URGENT,
            "Mild pain (1-3) with peripheral pain (acute or chronic) suggests minimal urgency—assigning CTAS 5.",
            |f| {
                band(f) == Some(Mild)
                    && f.pain_location() == Some(Peripheral)
                    && f.pain_duration().is_some()
            },
        ),
        Rule::new(
            "pain_free",
            RuleGroup::Pain,
            CtasLevel::NON_URGENT,
            "No pain (0) indicates minimal urgency—assigning CTAS 5.",
            |f| band(f) == Some(Free),
        ),
    ]
}
