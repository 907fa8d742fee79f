use ctas_core::CtasLevel;
use ctas_core::models::{Decision, FeedbackDecision, FeedbackRecord, PatientState};
use ctas_storage::TriageJournal;

fn at(minute: u8) -> jiff::civil::DateTime {
    format!("2024-03-02T09:{minute:02}:00").parse().unwrap()
}

fn decision(level: CtasLevel) -> Decision {
    Decision {
        level,
        explanations: vec![format!("assigning {level}")],
    }
}

#[tokio::test]
async fn feedback_without_level_links_to_latest_decision() {
    let journal = TriageJournal::in_memory();
    let state = PatientState::with_complaint("headache");

    journal
        .record_decision(&state, &decision(CtasLevel::URGENT), None, at(0))
        .await
        .unwrap();
    journal
        .record_decision(&state, &decision(CtasLevel::EMERGENT), None, at(1))
        .await
        .unwrap();

    let stored = journal
        .record_feedback(FeedbackRecord::new(FeedbackDecision::Accept, at(2)))
        .await
        .unwrap();
    assert_eq!(stored.ctas_level, Some(CtasLevel::EMERGENT));
}

#[tokio::test]
async fn explicit_feedback_level_is_kept() {
    let journal = TriageJournal::in_memory();
    journal
        .record_decision(
            &PatientState::default(),
            &decision(CtasLevel::NON_URGENT),
            None,
            at(0),
        )
        .await
        .unwrap();

    let mut feedback = FeedbackRecord::new(FeedbackDecision::Decline, at(1));
    feedback.ctas_level = Some(CtasLevel::RESUSCITATION);
    let stored = journal.record_feedback(feedback).await.unwrap();
    assert_eq!(stored.ctas_level, Some(CtasLevel::RESUSCITATION));
}

#[tokio::test]
async fn feedback_before_any_decision_stays_unlinked() {
    let journal = TriageJournal::in_memory();
    let stored = journal
        .record_feedback(FeedbackRecord::new(FeedbackDecision::Accept, at(0)))
        .await
        .unwrap();
    assert_eq!(stored.ctas_level, None);
}

#[tokio::test]
async fn feedback_links_to_string_level_decision_lines() {
    let dir = tempfile::tempdir().unwrap();
    let lines = concat!(
        r#"{"timestamp": "2024-03-02 09:00:00", "chief_complaint": "cough", "ctas_level": 5}"#,
        "\n",
        r#"{"timestamp": "2024-03-02 09:01:00", "chief_complaint": "chest pain", "ctas_level": "2"}"#,
        "\n",
    );
    std::fs::write(dir.path().join("records.json"), lines).unwrap();

    let journal = TriageJournal::open(dir.path(), "records.json", "feedback.json");
    let stored = journal
        .record_feedback(FeedbackRecord::new(FeedbackDecision::Accept, at(2)))
        .await
        .unwrap();
    assert_eq!(stored.ctas_level, Some(CtasLevel::EMERGENT));

    let history = journal.load_history().await.unwrap();
    assert_eq!(history.decisions.len(), 2);
    assert_eq!(history.skipped_decisions, 0);
}

#[tokio::test]
async fn file_journal_persists_both_logs() {
    let dir = tempfile::tempdir().unwrap();
    let journal = TriageJournal::open(dir.path(), "records.json", "feedback.json");

    let mut state = PatientState::with_complaint("cardiac arrest");
    state.vitals.heart_rate = Some(0.0);
    let record = journal
        .record_decision(&state, &decision(CtasLevel::RESUSCITATION), None, at(0))
        .await
        .unwrap();
    assert_eq!(record.patient_state(), state);

    let mut feedback = FeedbackRecord::new(FeedbackDecision::Accept, at(1));
    feedback.feedback_text = Some("agreed".to_string());
    journal.record_feedback(feedback).await.unwrap();

    let reopened = TriageJournal::open(dir.path(), "records.json", "feedback.json");
    let history = reopened.load_history().await.unwrap();
    assert_eq!(history.decisions, vec![record]);
    assert_eq!(history.feedback.len(), 1);
    assert_eq!(history.feedback[0].ctas_level, Some(CtasLevel::RESUSCITATION));
    assert_eq!(history.feedback[0].feedback_text.as_deref(), Some("agreed"));
    assert_eq!(history.skipped_decisions, 0);
    assert_eq!(history.skipped_feedback, 0);
}
