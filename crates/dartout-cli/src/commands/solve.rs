//! Solve command: ranked checkouts for one score.

use anyhow::Result;
use dartout_core::export::format_checkouts_console;
use dartout_core::{
    Config, ExportFormat, FinishingRule, find_checkouts, generate_json, generate_tsv,
};
use tracing::debug;

pub fn run(
    config: &Config,
    target: i32,
    rule: Option<FinishingRule>,
    limit: Option<usize>,
    format: ExportFormat,
) -> Result<()> {
    let rule = rule.unwrap_or(config.rule);
    let config = Config {
        rule,
        limit: limit.unwrap_or(config.limit),
        ..config.clone()
    };

    let paths = find_checkouts(target, rule);
    let shown = config.limited(&paths);
    debug!("Showing {} of {} paths", shown.len(), paths.len());

    let content = match format {
        ExportFormat::Console => {
            format_checkouts_console(target, rule, shown, paths.len(), config.color)
        }
        ExportFormat::Tsv => generate_tsv(shown),
        ExportFormat::Json => generate_json(shown)?,
    };
    println!("{}", content);

    Ok(())
}
