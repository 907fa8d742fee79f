use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::lenient;

/// A numeric vital sign with a reference-range entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalName {
    Systolic,
    Diastolic,
    Temperature,
    HeartRate,
    RespiratoryRate,
    O2Saturation,
    Gcs,
    BloodGlucose,
    PainScale,
}

impl VitalName {
    pub const ALL: [Self; 9] = [
        Self::Systolic,
        Self::Diastolic,
        Self::Temperature,
        Self::HeartRate,
        Self::RespiratoryRate,
        Self::O2Saturation,
        Self::Gcs,
        Self::BloodGlucose,
        Self::PainScale,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Systolic => "systolic",
            Self::Diastolic => "diastolic",
            Self::Temperature => "temperature",
            Self::HeartRate => "heart_rate",
            Self::RespiratoryRate => "respiratory_rate",
            Self::O2Saturation => "o2_saturation",
            Self::Gcs => "gcs",
            Self::BloodGlucose => "blood_glucose",
            Self::PainScale => "pain_scale",
        }
    }

    /// Key used for this vital in raw form submissions.
    pub fn form_key(self) -> &'static str {
        match self {
            Self::Systolic => "systolic",
            Self::Diastolic => "diastolic",
            Self::Temperature => "temp",
            Self::HeartRate => "hr",
            Self::RespiratoryRate => "rr",
            Self::O2Saturation => "o2_sat",
            Self::Gcs => "gcs",
            Self::BloodGlucose => "blood_glucose",
            Self::PainScale => "pain_scale",
        }
    }
}

impl fmt::Display for VitalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalName {
    type Err = CoreError;

    /// Accepts the snake_case name or the raw form key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == key || v.form_key() == key)
            .ok_or_else(|| CoreError::UnknownCategory {
                field: "vital",
                value: s.to_string(),
            })
    }
}

/// A single vital as received, alongside its parsed numeric value.
///
/// `numeric_value` is set iff `raw_value` parsed as a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalValue {
    pub name: VitalName,
    pub raw_value: Option<serde_json::Value>,
    pub numeric_value: Option<f64>,
}

impl VitalValue {
    pub fn parse(name: VitalName, raw: Option<&serde_json::Value>) -> Self {
        let raw_value = raw.filter(|v| !v.is_null()).cloned();
        let numeric_value = raw_value.as_ref().and_then(lenient::number);
        Self {
            name,
            raw_value,
            numeric_value,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.numeric_value.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PainLocation {
    Central,
    Peripheral,
}

impl FromStr for PainLocation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "central" => Ok(Self::Central),
            "peripheral" => Ok(Self::Peripheral),
            _ => Err(CoreError::UnknownCategory {
                field: "pain location",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PainDuration {
    Acute,
    Chronic,
}

impl FromStr for PainDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acute" => Ok(Self::Acute),
            "chronic" => Ok(Self::Chronic),
            _ => Err(CoreError::UnknownCategory {
                field: "pain duration",
                value: s.to_string(),
            }),
        }
    }
}

/// Observed level of distress. `NoDistress` is an explicit "None" answer,
/// distinct from the field being unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DistressLevel {
    #[serde(rename = "None")]
    NoDistress,
    Mild,
    Moderate,
    Severe,
}

impl FromStr for DistressLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::NoDistress),
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            _ => Err(CoreError::UnknownCategory {
                field: "distress level",
                value: s.to_string(),
            }),
        }
    }
}

/// Symptom accompanying a blood glucose reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GlucoseSymptom {
    Confusion,
    Diaphoresis,
    #[serde(rename = "Behavioural Change")]
    BehaviouralChange,
    Seizure,
    #[serde(rename = "Acute Focal Deficits")]
    AcuteFocalDeficits,
    Dyspnea,
    Dehydration,
    Tachypnea,
    Thirst,
    Polyuria,
    Weakness,
    #[serde(rename = "None")]
    Asymptomatic,
}

impl GlucoseSymptom {
    /// Symptoms that make hypoglycaemia critical.
    pub fn is_neuroglycopenic(self) -> bool {
        matches!(
            self,
            Self::Confusion
                | Self::Diaphoresis
                | Self::BehaviouralChange
                | Self::Seizure
                | Self::AcuteFocalDeficits
        )
    }

    /// Symptoms that make hyperglycaemia critical.
    pub fn is_hyperglycaemic(self) -> bool {
        matches!(
            self,
            Self::Dyspnea
                | Self::Dehydration
                | Self::Tachypnea
                | Self::Thirst
                | Self::Polyuria
                | Self::Weakness
        )
    }
}

impl FromStr for GlucoseSymptom {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confusion" => Ok(Self::Confusion),
            "diaphoresis" => Ok(Self::Diaphoresis),
            "behavioural change" | "behavioral change" => Ok(Self::BehaviouralChange),
            "seizure" => Ok(Self::Seizure),
            "acute focal deficits" => Ok(Self::AcuteFocalDeficits),
            "dyspnea" => Ok(Self::Dyspnea),
            "dehydration" => Ok(Self::Dehydration),
            "tachypnea" => Ok(Self::Tachypnea),
            "thirst" => Ok(Self::Thirst),
            "polyuria" => Ok(Self::Polyuria),
            "weakness" => Ok(Self::Weakness),
            "none" => Ok(Self::Asymptomatic),
            _ => Err(CoreError::UnknownCategory {
                field: "blood glucose symptom",
                value: s.to_string(),
            }),
        }
    }
}

/// Normalized vitals. Every field is nullable; unset values never satisfy a
/// numeric comparison.
///
/// Field names on the wire follow the historical decision log layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    #[serde(rename = "Systolic", default, deserialize_with = "lenient::deserialize_number")]
    pub systolic: Option<f64>,
    #[serde(rename = "Diastolic", default, deserialize_with = "lenient::deserialize_number")]
    pub diastolic: Option<f64>,
    #[serde(rename = "hr", default, deserialize_with = "lenient::deserialize_number")]
    pub heart_rate: Option<f64>,
    #[serde(rename = "RR", default, deserialize_with = "lenient::deserialize_number")]
    pub respiratory_rate: Option<f64>,
    #[serde(rename = "TEMPERATURE", default, deserialize_with = "lenient::deserialize_number")]
    pub temperature: Option<f64>,
    #[serde(rename = "O2_Sat", default, deserialize_with = "lenient::deserialize_number")]
    pub o2_saturation: Option<f64>,
    #[serde(rename = "GCS", default, deserialize_with = "lenient::deserialize_number")]
    pub gcs: Option<f64>,
    #[serde(rename = "Pain_Scale", default, deserialize_with = "lenient::deserialize_number")]
    pub pain_scale: Option<f64>,
    #[serde(
        rename = "Location_of_Pain",
        default,
        deserialize_with = "lenient::deserialize_category"
    )]
    pub pain_location: Option<PainLocation>,
    #[serde(
        rename = "Pain_Duration",
        default,
        deserialize_with = "lenient::deserialize_category"
    )]
    pub pain_duration: Option<PainDuration>,
    #[serde(rename = "blood_glucose", default, deserialize_with = "lenient::deserialize_number")]
    pub blood_glucose: Option<f64>,
    #[serde(
        rename = "blood_glucose_symptoms",
        default,
        deserialize_with = "lenient::deserialize_category"
    )]
    pub glucose_symptom: Option<GlucoseSymptom>,
}

impl Vitals {
    pub fn get(&self, name: VitalName) -> Option<f64> {
        match name {
            VitalName::Systolic => self.systolic,
            VitalName::Diastolic => self.diastolic,
            VitalName::Temperature => self.temperature,
            VitalName::HeartRate => self.heart_rate,
            VitalName::RespiratoryRate => self.respiratory_rate,
            VitalName::O2Saturation => self.o2_saturation,
            VitalName::Gcs => self.gcs,
            VitalName::BloodGlucose => self.blood_glucose,
            VitalName::PainScale => self.pain_scale,
        }
    }

    pub fn set(&mut self, name: VitalName, value: Option<f64>) {
        let slot = match name {
            VitalName::Systolic => &mut self.systolic,
            VitalName::Diastolic => &mut self.diastolic,
            VitalName::Temperature => &mut self.temperature,
            VitalName::HeartRate => &mut self.heart_rate,
            VitalName::RespiratoryRate => &mut self.respiratory_rate,
            VitalName::O2Saturation => &mut self.o2_saturation,
            VitalName::Gcs => &mut self.gcs,
            VitalName::BloodGlucose => &mut self.blood_glucose,
            VitalName::PainScale => &mut self.pain_scale,
        };
        *slot = value;
    }
}
