//! Table command: best checkout per score.

use std::ops::RangeInclusive;

use anyhow::{Result, bail};
use dartout_core::export::{
    PathRecord, format_chart_console, format_tsv_header, format_tsv_row,
};
use dartout_core::{Config, ExportFormat, FinishingRule, best_checkout};
use serde_json::json;

pub fn run(
    config: &Config,
    rule: Option<FinishingRule>,
    from: Option<u32>,
    to: Option<u32>,
    format: ExportFormat,
) -> Result<()> {
    let rule = rule.unwrap_or(config.rule);
    let range = score_range(rule, from, to)?;

    let rows: Vec<(u32, _)> = range
        .map(|target| (target, best_checkout(target as i32, rule)))
        .collect();

    let content = match format {
        ExportFormat::Console => format_chart_console(rule, &rows, config.color),
        ExportFormat::Tsv => {
            let mut lines = vec![format!("score\t{}", format_tsv_header())];
            for (target, best) in &rows {
                let row = match best {
                    Some(path) => format_tsv_row(1, path),
                    None => "\t0\t\t\t\t".to_string(),
                };
                lines.push(format!("{}\t{}", target, row));
            }
            lines.join("\n")
        }
        ExportFormat::Json => {
            let records: Vec<_> = rows
                .iter()
                .map(|(target, best)| {
                    json!({
                        "score": target,
                        "best": best.as_ref().map(|path| PathRecord::new(1, path)),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&records)?
        }
    };
    println!("{}", content);

    Ok(())
}

/// Scores to chart, from the lowest checkout of `rule` to its maximum unless
/// given.
fn score_range(
    rule: FinishingRule,
    from: Option<u32>,
    to: Option<u32>,
) -> Result<RangeInclusive<u32>> {
    let from = from.unwrap_or(rule.min_remainder());
    let to = to.unwrap_or(rule.max_score());
    if from == 0 || from > to {
        bail!("Invalid score range: {}..={}", from, to);
    }
    if to > rule.max_score() {
        bail!("{} exceeds the {} maximum of {}", to, rule, rule.max_score());
    }
    Ok(from..=to)
}
