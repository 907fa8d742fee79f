use ctas_core::CtasLevel;
use ctas_core::models::{
    Decision, DecisionRecord, DistressLevel, FeedbackDecision, FeedbackRecord, GlucoseSymptom,
    PainLocation, PatientState,
};
use ctas_core::timestamp;

#[test]
fn level_rejects_values_outside_scale() {
    assert!(CtasLevel::new(0).is_err());
    assert!(CtasLevel::new(6).is_err());
    assert!(CtasLevel::from_i64(-1).is_err());
    assert_eq!(CtasLevel::new(3).unwrap(), CtasLevel::URGENT);
}

#[test]
fn lower_level_is_more_severe() {
    let levels = [CtasLevel::URGENT, CtasLevel::RESUSCITATION, CtasLevel::LESS_URGENT];
    assert_eq!(levels.iter().min(), Some(&CtasLevel::RESUSCITATION));
    assert_eq!(CtasLevel::EMERGENT.to_string(), "CTAS 2");
}

#[test]
fn historical_decision_line_loads() {
    let line = r#"{"timestamp": "2024-11-02 09:15:42.118204", "vitals": {"Systolic": 230, "Diastolic": 80, "hr": 88, "TEMPERATURE": 37.1, "O2_Sat": 97, "RR": 16, "GCS": 15, "Pain_Scale": 2, "Location_of_Pain": "Central", "Pain_Duration": "Acute", "blood_glucose": 110.0, "blood_glucose_symptoms": "None"}, "symptoms_present": true, "chief_complaint": "headache", "history": "", "distress_level": "Mild", "ctas_level": 2, "reason": ["SBP > 220 or DBP > 130 with symptoms"]}"#;

    let record: DecisionRecord = serde_json::from_str(line).expect("historical line");
    assert_eq!(record.ctas_level, CtasLevel::EMERGENT);
    assert_eq!(record.vitals.systolic, Some(230.0));
    assert_eq!(record.vitals.pain_location, Some(PainLocation::Central));
    assert_eq!(record.vitals.glucose_symptom, Some(GlucoseSymptom::Asymptomatic));
    assert_eq!(record.distress_level, Some(DistressLevel::Mild));
    assert!(record.symptoms_present);
    assert_eq!(record.timestamp.year(), 2024);
    assert_eq!(record.timestamp.second(), 42);
}

#[test]
fn malformed_fields_read_as_unset() {
    let line = r#"{"timestamp": "2024-11-02T09:15:42", "vitals": {"Systolic": "abc", "GCS": "", "Location_of_Pain": "Elsewhere"}, "distress_level": 7, "ctas_level": 5}"#;

    let record: DecisionRecord = serde_json::from_str(line).expect("tolerant line");
    assert_eq!(record.vitals.systolic, None);
    assert_eq!(record.vitals.gcs, None);
    assert_eq!(record.vitals.pain_location, None);
    assert_eq!(record.distress_level, None);
    assert!(!record.symptoms_present);
    assert!(record.reason.is_empty());
}

#[test]
fn decision_record_rejects_missing_or_invalid_level() {
    let missing = r#"{"timestamp": "2024-11-02T09:15:42", "vitals": {}}"#;
    assert!(serde_json::from_str::<DecisionRecord>(missing).is_err());

    let invalid = r#"{"timestamp": "2024-11-02T09:15:42", "ctas_level": 9}"#;
    assert!(serde_json::from_str::<DecisionRecord>(invalid).is_err());
}

#[test]
fn decision_record_level_reads_like_feedback_level() {
    let line = r#"{"timestamp": "2024-11-02T09:15:42", "ctas_level": "2"}"#;
    let record: DecisionRecord = serde_json::from_str(line).unwrap();
    assert_eq!(record.ctas_level, CtasLevel::EMERGENT);

    let line = r#"{"timestamp": "2024-11-02T09:15:42", "ctas_level": 4.0}"#;
    let record: DecisionRecord = serde_json::from_str(line).unwrap();
    assert_eq!(record.ctas_level, CtasLevel::LESS_URGENT);

    for level in [r#""2.5""#, r#""urgent""#, "null", "0"] {
        let line = format!(r#"{{"timestamp": "2024-11-02T09:15:42", "ctas_level": {level}}}"#);
        assert!(serde_json::from_str::<DecisionRecord>(&line).is_err(), "{level}");
    }
}

#[test]
fn decision_record_round_trips() {
    let mut state = PatientState::with_complaint("chest pain");
    state.vitals.heart_rate = Some(112.0);
    state.distress_level = Some(DistressLevel::NoDistress);
    let decision = Decision {
        level: CtasLevel::EMERGENT,
        explanations: vec!["a".to_string(), "b".to_string()],
    };
    let at = timestamp::parse("2025-01-10T08:00:00.5").unwrap();

    let record = DecisionRecord::new(&state, &decision, None, at);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""distress_level":"None""#));
    assert!(json.contains(r#""hr":112.0"#));

    let back: DecisionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.patient_state(), state);
    assert_eq!(back.decision(), decision);
}

#[test]
fn feedback_level_accepts_numeric_strings_only_in_range() {
    let line = r#"{"timestamp": "2024-11-02 10:00:00", "decision": "Accept", "ctas_level": "3", "reason": "ok"}"#;
    let feedback: FeedbackRecord = serde_json::from_str(line).unwrap();
    assert_eq!(feedback.decision, FeedbackDecision::Accept);
    assert_eq!(feedback.ctas_level, Some(CtasLevel::URGENT));

    let line = r#"{"timestamp": "2024-11-02 10:00:00", "decision": "maybe", "ctas_level": "7"}"#;
    let feedback: FeedbackRecord = serde_json::from_str(line).unwrap();
    assert_eq!(feedback.decision, FeedbackDecision::Unknown);
    assert_eq!(feedback.ctas_level, None);
}

#[test]
fn feedback_reason_list_is_joined() {
    let line = r#"{"timestamp": "2024-11-02T10:00:00", "decision": "decline", "reason": ["CTAS 2 a", "CTAS 4 b"]}"#;
    let feedback: FeedbackRecord = serde_json::from_str(line).unwrap();
    assert_eq!(feedback.decision, FeedbackDecision::Decline);
    assert_eq!(feedback.reason, "CTAS 2 a, CTAS 4 b");
}

#[test]
fn timestamp_rejects_garbage() {
    assert!(timestamp::parse("yesterday").is_err());
    assert!(timestamp::parse("2024-13-40 10:00:00").is_err());
}
