//! CLI argument definitions for dartout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dartout_core::{ExportFormat, FinishingRule};

#[derive(Parser)]
#[command(name = "dartout")]
#[command(about = "Darts checkout calculator", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "DARTOUT_CONFIG", default_value = "dartout.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List ranked checkouts for a score
    Solve {
        /// Remaining score
        #[arg(allow_negative_numbers = true)]
        target: i32,
        /// Finishing rule (double_out, master_out, single_out)
        #[arg(short, long, value_parser = parse_rule)]
        rule: Option<FinishingRule>,
        /// Maximum number of paths to show (0 = all)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output format (console, tsv, json)
        #[arg(short, long, value_parser = parse_format, default_value = "console")]
        format: ExportFormat,
    },
    /// Show the best checkout for every score in a range
    Table {
        /// Finishing rule (double_out, master_out, single_out)
        #[arg(short, long, value_parser = parse_rule)]
        rule: Option<FinishingRule>,
        /// First score (defaults to the rule's lowest checkout)
        #[arg(long)]
        from: Option<u32>,
        /// Last score (defaults to the rule's maximum)
        #[arg(long)]
        to: Option<u32>,
        /// Output format (console, tsv, json)
        #[arg(short, long, value_parser = parse_format, default_value = "console")]
        format: ExportFormat,
    },
    /// List scores that cannot be checked out
    Bogeys {
        /// Finishing rule (double_out, master_out, single_out)
        #[arg(short, long, value_parser = parse_rule)]
        rule: Option<FinishingRule>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_rule(value: &str) -> Result<FinishingRule, String> {
    FinishingRule::parse_name(value).map_err(|e| e.to_string())
}

pub fn parse_format(value: &str) -> Result<ExportFormat, String> {
    value
        .parse()
        .map_err(|_| format!("Unknown format: {} (expected console, tsv or json)", value))
}
