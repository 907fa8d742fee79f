//! Building blocks for rule predicates.
//!
//! Every comparison against an unset reading is false, and every text test
//! is a case-insensitive substring test.

use ctas_core::models::{
    DistressLevel, GlucoseSymptom, PainDuration, PainLocation, PatientState,
};

/// A possibly-unset numeric reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading(pub Option<f64>);

impl Reading {
    /// `lo <= v <= hi`
    pub fn between(self, lo: f64, hi: f64) -> bool {
        self.0.is_some_and(|v| v >= lo && v <= hi)
    }

    pub fn above(self, bound: f64) -> bool {
        self.0.is_some_and(|v| v > bound)
    }

    pub fn at_least(self, bound: f64) -> bool {
        self.0.is_some_and(|v| v >= bound)
    }

    pub fn below(self, bound: f64) -> bool {
        self.0.is_some_and(|v| v < bound)
    }

    pub fn at_most(self, bound: f64) -> bool {
        self.0.is_some_and(|v| v <= bound)
    }

    pub fn equals(self, target: f64) -> bool {
        self.0.is_some_and(|v| v == target)
    }
}

/// A patient state prepared for predicate evaluation: free text is
/// lowercased once per evaluation.
pub struct Facts<'a> {
    pub state: &'a PatientState,
    complaint: String,
    history: String,
}

impl<'a> Facts<'a> {
    pub fn new(state: &'a PatientState) -> Self {
        Self {
            state,
            complaint: state.chief_complaint.to_lowercase(),
            history: state.history.to_lowercase(),
        }
    }

    pub fn complaint_has(&self, needle: &str) -> bool {
        self.complaint.contains(&needle.to_lowercase())
    }

    pub fn complaint_has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.complaint_has(n))
    }

    pub fn history_has(&self, needle: &str) -> bool {
        self.history.contains(&needle.to_lowercase())
    }

    pub fn systolic(&self) -> Reading {
        Reading(self.state.vitals.systolic)
    }

    pub fn diastolic(&self) -> Reading {
        Reading(self.state.vitals.diastolic)
    }

    pub fn heart_rate(&self) -> Reading {
        Reading(self.state.vitals.heart_rate)
    }

    pub fn temperature(&self) -> Reading {
        Reading(self.state.vitals.temperature)
    }

    pub fn o2_saturation(&self) -> Reading {
        Reading(self.state.vitals.o2_saturation)
    }

    pub fn gcs(&self) -> Reading {
        Reading(self.state.vitals.gcs)
    }

    pub fn pain(&self) -> Reading {
        Reading(self.state.vitals.pain_scale)
    }

    pub fn glucose(&self) -> Reading {
        Reading(self.state.vitals.blood_glucose)
    }

    pub fn pain_location(&self) -> Option<PainLocation> {
        self.state.vitals.pain_location
    }

    pub fn pain_duration(&self) -> Option<PainDuration> {
        self.state.vitals.pain_duration
    }

    pub fn glucose_symptom(&self) -> Option<GlucoseSymptom> {
        self.state.vitals.glucose_symptom
    }

    pub fn distress(&self) -> Option<DistressLevel> {
        self.state.distress_level
    }

    pub fn symptoms_present(&self) -> bool {
        self.state.symptoms_present
    }
}
