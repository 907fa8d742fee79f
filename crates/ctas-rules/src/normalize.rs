//! Raw encounter input and its conversion to a typed patient state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ctas_core::lenient;
use ctas_core::models::{PatientState, VitalName, VitalValue, Vitals};

/// An encounter as submitted, before any parsing.
///
/// Every field is kept as raw JSON so that a single malformed entry never
/// rejects the whole submission. Keys follow the intake form; the decision-log
/// spellings are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEncounter {
    #[serde(alias = "Systolic")]
    pub systolic: Option<Value>,
    #[serde(alias = "Diastolic")]
    pub diastolic: Option<Value>,
    pub hr: Option<Value>,
    #[serde(alias = "RR")]
    pub rr: Option<Value>,
    #[serde(alias = "TEMPERATURE")]
    pub temp: Option<Value>,
    #[serde(alias = "O2_Sat")]
    pub o2_sat: Option<Value>,
    #[serde(alias = "GCS")]
    pub gcs: Option<Value>,
    #[serde(alias = "Pain_Scale")]
    pub pain_scale: Option<Value>,
    #[serde(alias = "Location_of_Pain")]
    pub location_of_pain: Option<Value>,
    #[serde(alias = "Pain_Duration")]
    pub pain_duration: Option<Value>,
    pub blood_glucose: Option<Value>,
    pub blood_glucose_symptoms: Option<Value>,
    pub chief_complaint: Option<Value>,
    pub history: Option<Value>,
    pub symptoms_present: Option<Value>,
    pub distress_level: Option<Value>,
}

impl RawEncounter {
    /// Raw value submitted for a numeric vital.
    pub fn vital(&self, name: VitalName) -> Option<&Value> {
        let slot = match name {
            VitalName::Systolic => &self.systolic,
            VitalName::Diastolic => &self.diastolic,
            VitalName::Temperature => &self.temp,
            VitalName::HeartRate => &self.hr,
            VitalName::RespiratoryRate => &self.rr,
            VitalName::O2Saturation => &self.o2_sat,
            VitalName::Gcs => &self.gcs,
            VitalName::BloodGlucose => &self.blood_glucose,
            VitalName::PainScale => &self.pain_scale,
        };
        slot.as_ref()
    }
}

/// Parse every numeric vital, keeping the raw value next to the parsed one.
pub fn vital_values(raw: &RawEncounter) -> Vec<VitalValue> {
    VitalName::ALL
        .into_iter()
        .map(|name| VitalValue::parse(name, raw.vital(name)))
        .collect()
}

/// Build a patient state from raw input. Never fails: anything that does not
/// parse is left unset.
pub fn normalize(raw: &RawEncounter) -> PatientState {
    let mut vitals = Vitals::default();
    for value in vital_values(raw) {
        vitals.set(value.name, value.numeric_value);
    }
    vitals.pain_location = raw.location_of_pain.as_ref().and_then(lenient::category);
    vitals.pain_duration = raw.pain_duration.as_ref().and_then(lenient::category);
    vitals.glucose_symptom = raw
        .blood_glucose_symptoms
        .as_ref()
        .and_then(lenient::category);

    PatientState {
        vitals,
        chief_complaint: raw.chief_complaint.as_ref().map(lenient::text).unwrap_or_default(),
        history: raw.history.as_ref().map(lenient::text).unwrap_or_default(),
        symptoms_present: raw.symptoms_present.as_ref().is_some_and(lenient::flag),
        distress_level: raw.distress_level.as_ref().and_then(lenient::category),
    }
}
