use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::vitals::{DistressLevel, Vitals};

/// Everything the rule catalogue can look at for one encounter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientState {
    pub vitals: Vitals,
    pub chief_complaint: String,
    pub history: String,
    pub symptoms_present: bool,
    pub distress_level: Option<DistressLevel>,
}

impl PatientState {
    pub fn with_complaint(complaint: impl Into<String>) -> Self {
        Self {
            chief_complaint: complaint.into(),
            ..Self::default()
        }
    }
}
