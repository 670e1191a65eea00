//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::board::{Segment, SegmentKind};
use crate::checkout::CheckoutPath;
use crate::rule::FinishingRule;

/// Board-colored label: trebles and the outer bull green, doubles and the
/// double bull red
pub fn format_segment_tag(segment: &Segment, color: bool) -> String {
    let label = segment.label();
    if !color {
        return label;
    }
    match segment.kind {
        SegmentKind::Treble | SegmentKind::Bull => label.green().bold().to_string(),
        SegmentKind::Double | SegmentKind::DoubleBull => label.red().bold().to_string(),
        SegmentKind::Single => label,
    }
}

pub fn format_path_tags(path: &CheckoutPath, color: bool) -> String {
    path.throws()
        .iter()
        .map(|t| format_segment_tag(t, color))
        .collect::<Vec<_>>()
        .join(" ")
}

fn dart_count(n: usize) -> String {
    if n == 1 {
        "1 dart".to_string()
    } else {
        format!("{} darts", n)
    }
}

/// Ranked checkouts for one target.
///
/// `shown` is the (possibly truncated) list to print and `total` the number
/// of paths found.
pub fn format_checkouts_console(
    target: i32,
    rule: FinishingRule,
    shown: &[CheckoutPath],
    total: usize,
    color: bool,
) -> String {
    let mut output = String::new();

    let heading = format!("{} - {}", target, rule.description());
    let border = "━".repeat(heading.chars().count().max(40));
    if color {
        let _ = writeln!(output, "{}", border.dimmed());
        let _ = writeln!(output, "{}", heading.bold());
        let _ = writeln!(output, "{}", border.dimmed());
    } else {
        let _ = writeln!(output, "{}", border);
        let _ = writeln!(output, "{}", heading);
        let _ = writeln!(output, "{}", border);
    }

    if shown.is_empty() {
        let _ = write!(output, "  No checkout");
        return output;
    }

    for (i, path) in shown.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {:>3}. {}  ({})",
            i + 1,
            format_path_tags(path, color),
            dart_count(path.total_throws())
        );
    }
    if total > shown.len() {
        let _ = writeln!(output, "  ... {} more", total - shown.len());
    }
    let _ = write!(output, "  {} checkouts", total);

    output
}

/// Best checkout per score, one line each
pub fn format_chart_console(
    rule: FinishingRule,
    rows: &[(u32, Option<CheckoutPath>)],
    color: bool,
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", rule.description());
    for (target, best) in rows {
        let line = match best {
            Some(path) => format_path_tags(path, color),
            None if color => "no checkout".dimmed().to_string(),
            None => "no checkout".to_string(),
        };
        let _ = writeln!(output, "  {:>3}  {}", target, line);
    }
    output.trim_end().to_string()
}

pub fn format_bogeys_console(rule: FinishingRule, bogeys: &[u32]) -> String {
    let list = bogeys
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {} bogey numbers\n  {}", rule.description(), bogeys.len(), list)
}
