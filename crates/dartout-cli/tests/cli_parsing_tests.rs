//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without running the commands.

use clap::Parser;
use dartout_core::{ExportFormat, FinishingRule};

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::{Args, Command};

#[test]
fn test_solve_defaults() {
    let args = Args::try_parse_from(["dartout", "solve", "170"]).unwrap();
    assert_eq!(args.config.to_str(), Some("dartout.toml"));
    match args.command {
        Command::Solve {
            target,
            rule,
            limit,
            format,
        } => {
            assert_eq!(target, 170);
            assert_eq!(rule, None);
            assert_eq!(limit, None);
            assert_eq!(format, ExportFormat::Console);
        }
        _ => panic!("expected solve"),
    }
}

#[test]
fn test_solve_with_options() {
    let args = Args::try_parse_from([
        "dartout", "solve", "60", "--rule", "single", "--limit", "5", "--format", "json",
    ])
    .unwrap();
    match args.command {
        Command::Solve {
            target,
            rule,
            limit,
            format,
        } => {
            assert_eq!(target, 60);
            assert_eq!(rule, Some(FinishingRule::SingleOut));
            assert_eq!(limit, Some(5));
            assert_eq!(format, ExportFormat::Json);
        }
        _ => panic!("expected solve"),
    }
}

#[test]
fn test_solve_negative_target() {
    let args = Args::try_parse_from(["dartout", "solve", "-1"]).unwrap();
    assert!(matches!(args.command, Command::Solve { target: -1, .. }));
}

#[test]
fn test_invalid_rule_rejected() {
    let result = Args::try_parse_from(["dartout", "solve", "40", "--rule", "triple_out"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_format_rejected() {
    let result = Args::try_parse_from(["dartout", "solve", "40", "--format", "csv"]);
    assert!(result.is_err());
}

#[test]
fn test_table_range() {
    let args = Args::try_parse_from([
        "dartout", "table", "--rule", "master_out", "--from", "100", "--to", "120", "-f", "tsv",
    ])
    .unwrap();
    match args.command {
        Command::Table {
            rule,
            from,
            to,
            format,
        } => {
            assert_eq!(rule, Some(FinishingRule::MasterOut));
            assert_eq!(from, Some(100));
            assert_eq!(to, Some(120));
            assert_eq!(format, ExportFormat::Tsv);
        }
        _ => panic!("expected table"),
    }
}

#[test]
fn test_table_defaults_leave_range_to_rule() {
    let args = Args::try_parse_from(["dartout", "table", "--rule", "single_out"]).unwrap();
    assert!(matches!(
        args.command,
        Command::Table {
            from: None,
            to: None,
            ..
        }
    ));
}

#[test]
fn test_bogeys_with_config() {
    let args =
        Args::try_parse_from(["dartout", "--config", "custom.toml", "bogeys", "--json"]).unwrap();
    assert_eq!(args.config.to_str(), Some("custom.toml"));
    assert!(matches!(
        args.command,
        Command::Bogeys {
            rule: None,
            json: true
        }
    ));
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(["dartout"]).is_err());
}
