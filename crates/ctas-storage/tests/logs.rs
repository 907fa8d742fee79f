use ctas_core::CtasLevel;
use ctas_core::models::{DecisionRecord, FeedbackDecision, FeedbackRecord};
use ctas_storage::log::parse_lines;
use ctas_storage::{JsonlLog, MemoryLog, RecordLog};

const HISTORICAL_LINE: &str = r#"{"timestamp": "2024-03-02 14:05:09.123456", "vitals": {"Systolic": 120, "Diastolic": 80, "hr": 80, "TEMPERATURE": 37.0, "O2_Sat": 98, "RR": 16, "GCS": 15, "Pain_Scale": 0, "Location_of_Pain": "Central", "Pain_Duration": "Acute", "blood_glucose": 100.0, "blood_glucose_symptoms": "None"}, "symptoms_present": false, "chief_complaint": "cough", "history": "", "distress_level": "None", "ctas_level": 5, "reason": ["Normal GCS (15): CTAS 5 based on other symptoms or findings."]}"#;

fn feedback(decision: FeedbackDecision, minute: u8) -> FeedbackRecord {
    let at = format!("2024-03-02T10:{minute:02}:00").parse().unwrap();
    let mut record = FeedbackRecord::new(decision, at);
    record.reason = "CTAS 3".to_string();
    record
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let log: JsonlLog<FeedbackRecord> = JsonlLog::new(dir.path().join("feedback.json"));

    let snapshot = log.read_all().await.unwrap();
    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.skipped, 0);
}

#[tokio::test]
async fn appended_records_read_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = JsonlLog::new(dir.path().join("nested").join("feedback.json"));

    let first = feedback(FeedbackDecision::Accept, 1);
    let second = feedback(FeedbackDecision::Decline, 2);
    log.append(&first).await.unwrap();
    log.append(&second).await.unwrap();

    let snapshot = log.read_all().await.unwrap();
    assert_eq!(snapshot.records, vec![first, second]);

    let raw = std::fs::read_to_string(log.path()).unwrap();
    assert_eq!(raw.lines().count(), 2);
    assert!(raw.ends_with('\n'));
}

#[tokio::test]
async fn historical_lines_load_and_garbage_is_counted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    let content = format!(
        "{HISTORICAL_LINE}\nnot json at all\n\n{{\"timestamp\": \"2024-03-02 15:00:00\"}}\n{HISTORICAL_LINE}\n"
    );
    std::fs::write(&path, content).unwrap();

    let log: JsonlLog<DecisionRecord> = JsonlLog::new(&path);
    let snapshot = log.read_all().await.unwrap();

    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.skipped, 2);

    let record = &snapshot.records[0];
    assert_eq!(record.ctas_level, CtasLevel::NON_URGENT);
    assert_eq!(record.vitals.gcs, Some(15.0));
    assert_eq!(record.timestamp.to_string(), "2024-03-02T14:05:09.123456");
}

#[test]
fn trailing_partial_line_is_ignored() {
    let content = format!("{HISTORICAL_LINE}\n{{\"timestamp\": \"2024-03-");
    let snapshot = parse_lines::<DecisionRecord>(&content);
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(snapshot.skipped, 0);

    let snapshot = parse_lines::<DecisionRecord>(HISTORICAL_LINE);
    assert!(snapshot.records.is_empty());
}

#[tokio::test]
async fn concurrent_appends_keep_lines_whole() {
    let dir = tempfile::tempdir().unwrap();
    let log = std::sync::Arc::new(JsonlLog::new(dir.path().join("feedback.json")));

    let mut tasks = Vec::new();
    for minute in 0..20u8 {
        let log = log.clone();
        let record = feedback(FeedbackDecision::Accept, minute);
        tasks.push(tokio::spawn(async move {
            log.append(&record).await?;
            Ok::<_, ctas_storage::error::StorageError>(())
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let snapshot: ctas_storage::LogSnapshot<FeedbackRecord> = log.read_all().await.unwrap();
    assert_eq!(snapshot.records.len(), 20);
    assert_eq!(snapshot.skipped, 0);
}

#[tokio::test]
async fn memory_log_round_trips() {
    let log = MemoryLog::with_records(vec![feedback(FeedbackDecision::Unknown, 0)]);
    log.append(&feedback(FeedbackDecision::Accept, 1)).await.unwrap();

    let snapshot = log.read_all().await.unwrap();
    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.records[1].decision, FeedbackDecision::Accept);
}
