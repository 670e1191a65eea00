//! Output formats for ranked checkouts.

mod console;

pub use console::*;

use serde::Serialize;
use strum::{EnumString, IntoStaticStr};

use crate::board::Segment;
use crate::checkout::CheckoutPath;
use crate::config::limits::MAX_THROWS;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Console,
    Tsv,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThrowRecord {
    pub label: String,
    pub kind: &'static str,
    pub base: u8,
    pub multiplier: u8,
    pub value: u32,
}

impl From<&Segment> for ThrowRecord {
    fn from(segment: &Segment) -> Self {
        Self {
            label: segment.label(),
            kind: segment.kind.short_name(),
            base: segment.base,
            multiplier: segment.multiplier,
            value: segment.value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathRecord {
    pub rank: usize,
    pub total_throws: usize,
    pub throws: Vec<ThrowRecord>,
}

impl PathRecord {
    pub fn new(rank: usize, path: &CheckoutPath) -> Self {
        Self {
            rank,
            total_throws: path.total_throws(),
            throws: path.throws().iter().map(ThrowRecord::from).collect(),
        }
    }
}

pub fn format_tsv_header() -> String {
    ["rank", "throws", "dart1", "dart2", "dart3", "total"].join("\t")
}

/// One TSV row; unused dart columns are left empty
pub fn format_tsv_row(rank: usize, path: &CheckoutPath) -> String {
    let mut values = vec![rank.to_string(), path.total_throws().to_string()];
    for i in 0..MAX_THROWS {
        values.push(path.throws().get(i).map(Segment::label).unwrap_or_default());
    }
    values.push(path.total().to_string());
    values.join("\t")
}

/// Header plus one row per path, ranks starting at 1
pub fn generate_tsv(paths: &[CheckoutPath]) -> String {
    let mut lines = vec![format_tsv_header()];
    lines.extend(
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| format_tsv_row(i + 1, path)),
    );
    lines.join("\n")
}

pub fn generate_json(paths: &[CheckoutPath]) -> Result<String> {
    let records: Vec<PathRecord> = paths
        .iter()
        .enumerate()
        .map(|(i, path)| PathRecord::new(i + 1, path))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
