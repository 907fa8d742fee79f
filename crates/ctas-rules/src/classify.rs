use ctas_core::models::{PatientState, VitalClassification, VitalName, VitalStatus};

use crate::error::RulesError;

/// Plausible and normal bounds for one vital. Both bands are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    pub valid_min: f64,
    pub valid_max: f64,
    pub normal_min: f64,
    pub normal_max: f64,
}

impl ReferenceRange {
    const fn new(valid_min: f64, valid_max: f64, normal_min: f64, normal_max: f64) -> Self {
        Self {
            valid_min,
            valid_max,
            normal_min,
            normal_max,
        }
    }

    pub fn is_valid(&self, value: f64) -> bool {
        value >= self.valid_min && value <= self.valid_max
    }

    pub fn is_normal(&self, value: f64) -> bool {
        value >= self.normal_min && value <= self.normal_max
    }

    pub fn classify(&self, value: Option<f64>) -> VitalStatus {
        match value {
            None => VitalStatus::Missing,
            Some(v) if !self.is_valid(v) => VitalStatus::OutOfRange,
            Some(v) if self.is_normal(v) => VitalStatus::Normal,
            Some(_) => VitalStatus::Abnormal,
        }
    }
}

/// Adult reference ranges.
pub fn reference_range(name: VitalName) -> ReferenceRange {
    match name {
        VitalName::Systolic => ReferenceRange::new(60.0, 260.0, 90.0, 120.0),
        VitalName::Diastolic => ReferenceRange::new(30.0, 160.0, 60.0, 80.0),
        VitalName::Temperature => ReferenceRange::new(30.0, 43.0, 36.1, 37.8),
        VitalName::HeartRate => ReferenceRange::new(30.0, 220.0, 60.0, 100.0),
        VitalName::RespiratoryRate => ReferenceRange::new(6.0, 35.0, 12.0, 20.0),
        VitalName::O2Saturation => ReferenceRange::new(50.0, 100.0, 95.0, 100.0),
        VitalName::Gcs => ReferenceRange::new(3.0, 15.0, 15.0, 15.0),
        VitalName::BloodGlucose => ReferenceRange::new(20.0, 600.0, 70.0, 140.0),
        VitalName::PainScale => ReferenceRange::new(0.0, 10.0, 0.0, 3.0),
    }
}

/// Classify every vital of a patient state. Advisory only: rule evaluation
/// reads the raw values regardless of the result.
pub fn classify_state(state: &PatientState) -> VitalClassification {
    let statuses = VitalName::ALL
        .into_iter()
        .map(|name| (name, reference_range(name).classify(state.vitals.get(name))))
        .collect();
    VitalClassification { statuses }
}

/// Classify a single value by vital name (snake_case name or form key).
pub fn classify_named(name: &str, value: Option<f64>) -> Result<VitalStatus, RulesError> {
    let vital: VitalName = name
        .parse()
        .map_err(|_| RulesError::UnknownVital(name.to_string()))?;
    Ok(reference_range(vital).classify(value))
}
