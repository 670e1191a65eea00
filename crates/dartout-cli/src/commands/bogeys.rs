//! Bogeys command: scores with no checkout.

use anyhow::Result;
use dartout_core::export::format_bogeys_console;
use dartout_core::{Config, FinishingRule, bogey_numbers};
use serde_json::json;

pub fn run(config: &Config, rule: Option<FinishingRule>, json: bool) -> Result<()> {
    let rule = rule.unwrap_or(config.rule);
    let bogeys = bogey_numbers(rule);

    if json {
        let value = json!({ "rule": rule, "bogeys": bogeys });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", format_bogeys_console(rule, &bogeys));
    }

    Ok(())
}
