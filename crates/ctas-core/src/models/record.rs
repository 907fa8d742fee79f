use std::str::FromStr;

use jiff::civil::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::classification::VitalClassification;
use super::decision::Decision;
use super::patient::PatientState;
use super::vitals::{DistressLevel, Vitals};
use crate::error::CoreError;
use crate::lenient;
use crate::level::CtasLevel;
use crate::timestamp;

/// One evaluated encounter, as appended to the decision log.
///
/// Created once per evaluation and never updated. Wire names match the
/// historical log so older lines load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionRecord {
    #[serde(with = "timestamp")]
    #[ts(type = "string")]
    pub timestamp: DateTime,
    #[serde(default)]
    pub vitals: Vitals,
    #[serde(default, deserialize_with = "lenient::deserialize_flag")]
    pub symptoms_present: bool,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub chief_complaint: String,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub history: String,
    #[serde(default, deserialize_with = "lenient::deserialize_category")]
    pub distress_level: Option<DistressLevel>,
    #[serde(deserialize_with = "lenient::deserialize_required_level")]
    pub ctas_level: CtasLevel,
    #[serde(default)]
    pub reason: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<VitalClassification>,
}

impl DecisionRecord {
    pub fn new(
        state: &PatientState,
        decision: &Decision,
        classification: Option<VitalClassification>,
        timestamp: DateTime,
    ) -> Self {
        Self {
            timestamp,
            vitals: state.vitals.clone(),
            symptoms_present: state.symptoms_present,
            chief_complaint: state.chief_complaint.clone(),
            history: state.history.clone(),
            distress_level: state.distress_level,
            ctas_level: decision.level,
            reason: decision.explanations.clone(),
            classification,
        }
    }

    /// Rebuild the patient state this record was evaluated from.
    pub fn patient_state(&self) -> PatientState {
        PatientState {
            vitals: self.vitals.clone(),
            chief_complaint: self.chief_complaint.clone(),
            history: self.history.clone(),
            symptoms_present: self.symptoms_present,
            distress_level: self.distress_level,
        }
    }

    pub fn decision(&self) -> Decision {
        Decision {
            level: self.ctas_level,
            explanations: self.reason.clone(),
        }
    }
}

/// A clinician's judgment on a triage decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FeedbackDecision {
    Accept,
    Decline,
    #[default]
    Unknown,
}

impl FromStr for FeedbackDecision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" | "accepted" => Ok(Self::Accept),
            "decline" | "declined" => Ok(Self::Decline),
            "unknown" | "" => Ok(Self::Unknown),
            _ => Err(CoreError::UnknownCategory {
                field: "feedback decision",
                value: s.to_string(),
            }),
        }
    }
}

fn deserialize_feedback_decision<'de, D>(deserializer: D) -> Result<FeedbackDecision, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed: Option<FeedbackDecision> = lenient::deserialize_category(deserializer)?;
    Ok(parsed.unwrap_or_default())
}

/// Clinician feedback, appended to its own log.
///
/// `ctas_level` is the explicit level the feedback refers to, when known.
/// Association with a decision record is best-effort (see the storage
/// journal); there is no foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackRecord {
    #[serde(with = "timestamp")]
    #[ts(type = "string")]
    pub timestamp: DateTime,
    #[serde(default, deserialize_with = "deserialize_feedback_decision")]
    pub decision: FeedbackDecision,
    #[serde(default, deserialize_with = "lenient::deserialize_level")]
    pub ctas_level: Option<CtasLevel>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub chief_complaint: String,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub history: String,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_text: Option<String>,
}

impl FeedbackRecord {
    pub fn new(decision: FeedbackDecision, timestamp: DateTime) -> Self {
        Self {
            timestamp,
            decision,
            ctas_level: None,
            chief_complaint: String::new(),
            history: String::new(),
            reason: String::new(),
            feedback_text: None,
        }
    }
}
