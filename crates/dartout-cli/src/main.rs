mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dartout_cli=warn,dartout_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config);

    match args.command {
        Command::Solve {
            target,
            rule,
            limit,
            format,
        } => commands::solve::run(&config, target, rule, limit, format),
        Command::Table {
            rule,
            from,
            to,
            format,
        } => commands::table::run(&config, rule, from, to, format),
        Command::Bogeys { rule, json } => commands::bogeys::run(&config, rule, json),
    }
}
