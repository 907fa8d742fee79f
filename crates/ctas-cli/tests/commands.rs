use clap::Parser;

use ctas_cli::cli::{Cli, Command};
use ctas_cli::commands::{self, FeedbackArgs};
use ctas_cli::config::{CtasConfig, load_config};
use ctas_core::CtasLevel;
use ctas_core::models::FeedbackDecision;
use ctas_storage::TriageJournal;

fn journal(config: &CtasConfig) -> TriageJournal {
    TriageJournal::open(&config.data_dir, &config.decisions_file, &config.feedback_file)
}

#[test]
fn feedback_arguments_are_validated() {
    let cli =
        Cli::try_parse_from(["ctas", "feedback", "--decision", "Accept", "--level", "3"]).unwrap();
    match cli.command {
        Command::Feedback { decision, level, .. } => {
            assert_eq!(decision, FeedbackDecision::Accept);
            assert_eq!(level, Some(3));
        }
        other => panic!("unexpected command {other:?}"),
    }

    let out_of_scale = ["ctas", "feedback", "--decision", "accept", "--level", "7"];
    assert!(Cli::try_parse_from(out_of_scale).is_err());
    assert!(Cli::try_parse_from(["ctas", "feedback", "--decision", "maybe"]).is_err());
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli =
        Cli::try_parse_from(["ctas", "summary", "--json", "--config", "/tmp/c.json"]).unwrap();
    assert!(cli.json);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.json")));
}

#[tokio::test]
async fn evaluate_records_unless_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = CtasConfig::in_dir(dir.path().join("data"));
    let input = dir.path().join("encounter.json");
    std::fs::write(
        &input,
        r#"{"systolic": "230", "diastolic": "80", "symptoms_present": "yes", "chief_complaint": ""}"#,
    )
    .unwrap();

    commands::evaluate(&config, Some(&input), true).await.unwrap();
    assert!(journal(&config).load_history().await.unwrap().decisions.is_empty());

    commands::evaluate(&config, Some(&input), false).await.unwrap();
    let history = journal(&config).load_history().await.unwrap();
    assert_eq!(history.decisions.len(), 1);
    assert_eq!(history.decisions[0].ctas_level, CtasLevel::EMERGENT);
    assert!(history.decisions[0].classification.is_some());
}

#[tokio::test]
async fn feedback_links_to_the_last_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let config = CtasConfig::in_dir(dir.path());
    let input = dir.path().join("encounter.json");
    std::fs::write(&input, r#"{"chief_complaint": "cardiac arrest"}"#).unwrap();

    commands::evaluate(&config, Some(&input), false).await.unwrap();
    commands::feedback(
        &config,
        FeedbackArgs {
            decision: FeedbackDecision::Accept,
            level: None,
            reason: String::new(),
            complaint: "cardiac arrest".to_string(),
            history: String::new(),
            text: Some("  ".to_string()),
        },
    )
    .await
    .unwrap();

    let history = journal(&config).load_history().await.unwrap();
    assert_eq!(history.feedback.len(), 1);
    assert_eq!(history.feedback[0].ctas_level, Some(CtasLevel::RESUSCITATION));
    assert_eq!(history.feedback[0].feedback_text, None);

    let report = ctas_analytics::summarize(&history.decisions, &history.feedback);
    let level_one = report.level(CtasLevel::RESUSCITATION).unwrap();
    assert_eq!(level_one.confidence_percent, Some(100));
}

#[tokio::test]
async fn malformed_encounter_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = CtasConfig::in_dir(dir.path());
    let input = dir.path().join("encounter.json");
    std::fs::write(&input, "{ not json").unwrap();

    assert!(commands::evaluate(&config, Some(&input), false).await.is_err());
}

#[tokio::test]
async fn config_init_force_replaces_an_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let path_arg = path.to_str().unwrap();
    let cli = Cli::try_parse_from(["ctas", "--config", path_arg, "config", "show"]).unwrap();
    assert!(commands::run(cli).await.is_err());

    let cli = Cli::try_parse_from(["ctas", "--config", path_arg, "config", "init"]).unwrap();
    assert!(commands::run(cli).await.is_err());

    let cli =
        Cli::try_parse_from(["ctas", "--config", path_arg, "config", "init", "--force"]).unwrap();
    commands::run(cli).await.unwrap();
    assert!(load_config(&path).is_ok());
}
