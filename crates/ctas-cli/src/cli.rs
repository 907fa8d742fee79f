use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ctas_core::models::FeedbackDecision;

#[derive(Parser, Debug)]
#[command(name = "ctas", version, about = "CTAS triage rule engine and decision journal.")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Triage an encounter read from a JSON file or stdin.
    Evaluate {
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the result without recording it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Record a clinician's judgment on a decision.
    Feedback {
        /// accept, decline or unknown.
        #[arg(long)]
        decision: FeedbackDecision,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,

        #[arg(long, default_value = "")]
        reason: String,

        #[arg(long, default_value = "")]
        complaint: String,

        #[arg(long, default_value = "")]
        history: String,

        /// Free-text comment.
        #[arg(long)]
        text: Option<String>,
    },

    /// Per-level totals and confidence over the full history.
    Summary,

    /// Recent decisions and feedback per level.
    List {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,

        /// Entries per level. Defaults to the configured limit.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Count the CTAS levels mentioned across a comma-separated reason.
    Distribution {
        #[arg(long)]
        reason: String,
    },

    /// Print the rule catalogue.
    Rules,

    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the active configuration.
    Show,

    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
