use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Serialize;
use tokio::io::AsyncReadExt;

use ctas_analytics::{level_distribution, list_by_level, summarize};
use ctas_core::CtasLevel;
use ctas_core::models::{FeedbackDecision, FeedbackRecord};
use ctas_core::timestamp;
use ctas_rules::{RawEncounter, RuleSummary, catalogue, triage};
use ctas_storage::{History, TriageJournal};

use crate::cli::{Cli, Command, ConfigCommand};
use crate::config::{self, CtasConfig};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn journal(config: &CtasConfig) -> TriageJournal {
    TriageJournal::open(&config.data_dir, &config.decisions_file, &config.feedback_file)
}

async fn load_history(config: &CtasConfig) -> Result<History> {
    let history = journal(config).load_history().await?;
    if history.skipped_decisions > 0 || history.skipped_feedback > 0 {
        tracing::warn!(
            decisions = history.skipped_decisions,
            feedback = history.skipped_feedback,
            "skipped unreadable history lines"
        );
    }
    Ok(history)
}

async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

pub async fn evaluate(config: &CtasConfig, input: Option<&Path>, dry_run: bool) -> Result<()> {
    let raw: RawEncounter = serde_json::from_str(&read_input(input).await?)?;
    let result = triage(&raw);
    print_json(&result)?;

    if !dry_run {
        journal(config)
            .record_decision(
                &result.state,
                &result.decision,
                Some(result.classification),
                timestamp::now(),
            )
            .await?;
    }
    Ok(())
}

pub struct FeedbackArgs {
    pub decision: FeedbackDecision,
    pub level: Option<u8>,
    pub reason: String,
    pub complaint: String,
    pub history: String,
    pub text: Option<String>,
}

pub async fn feedback(config: &CtasConfig, args: FeedbackArgs) -> Result<()> {
    let mut record = FeedbackRecord::new(args.decision, timestamp::now());
    record.ctas_level = args.level.map(CtasLevel::new).transpose()?;
    record.reason = args.reason;
    record.chief_complaint = args.complaint;
    record.history = args.history;
    record.feedback_text = args.text.filter(|t| !t.trim().is_empty());

    let stored = journal(config).record_feedback(record).await?;
    print_json(&stored)
}

pub async fn summary(config: &CtasConfig) -> Result<()> {
    let history = load_history(config).await?;
    print_json(&summarize(&history.decisions, &history.feedback))
}

pub async fn list(config: &CtasConfig, level: Option<u8>, limit: Option<usize>) -> Result<()> {
    let level = level.map(CtasLevel::new).transpose()?;
    let history = load_history(config).await?;

    let listings: Vec<_> = list_by_level(
        &history.decisions,
        &history.feedback,
        limit.unwrap_or(config.list_limit),
    )
    .into_iter()
    .filter(|listing| level.is_none_or(|l| listing.level == l))
    .collect();
    print_json(&listings)
}

pub fn distribution(reason: &str) -> Result<()> {
    print_json(&level_distribution(reason))
}

pub fn rules() -> Result<()> {
    let summaries: Vec<RuleSummary> = catalogue().iter().map(RuleSummary::from).collect();
    print_json(&summaries)
}

#[derive(Serialize)]
struct ConfigView<'a> {
    path: &'a Path,
    exists: bool,
    config: &'a CtasConfig,
}

pub fn show_config(path: &Path, config: &CtasConfig) -> Result<()> {
    print_json(&ConfigView {
        path,
        exists: path.exists(),
        config,
    })
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    let config = CtasConfig::with_defaults()?;
    config::save_config(path, &config)?;
    show_config(path, &config)
}

/// Resolve the config and dispatch one parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path: PathBuf = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    // Loaded per command so `config init --force` can replace an unreadable file.
    let load = || config::load_or_default(&config_path);
    match cli.command {
        Command::Evaluate { input, dry_run } => evaluate(&load()?, input.as_deref(), dry_run).await,
        Command::Feedback {
            decision,
            level,
            reason,
            complaint,
            history,
            text,
        } => {
            let args = FeedbackArgs {
                decision,
                level,
                reason,
                complaint,
                history,
                text,
            };
            feedback(&load()?, args).await
        }
        Command::Summary => summary(&load()?).await,
        Command::List { level, limit } => list(&load()?, level, limit).await,
        Command::Distribution { reason } => distribution(&reason),
        Command::Rules => rules(),
        Command::Config(ConfigCommand::Show) => show_config(&config_path, &load()?),
        Command::Config(ConfigCommand::Init { force }) => init_config(&config_path, force),
    }
}
