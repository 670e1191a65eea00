//! Configuration and search constants.
//!
//! - `Config` - user settings loaded from a TOML file
//! - `limits` - fixed bounds of the checkout search

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rule::FinishingRule;

/// Fixed bounds of a three-throw checkout.
pub mod limits {
    use std::ops::RangeInclusive;

    /// Maximum number of throws in one visit.
    pub const MAX_THROWS: usize = 3;

    /// Highest value of a single segment (T20).
    pub const MAX_SEGMENT_VALUE: u32 = 60;

    /// Highest score two throws can remove (T20, T20).
    pub const MAX_TWO_THROW_VALUE: u32 = 2 * MAX_SEGMENT_VALUE;

    /// Targets where master/single-out prefer a double bull finish.
    pub const BULL_FINISH_WINDOW: RangeInclusive<u32> = 51..=70;
}

/// Number of paths printed per target when nothing else is configured.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Finishing rule used when none is given on the command line
    pub rule: FinishingRule,
    /// Maximum paths shown per target; 0 shows all
    pub limit: usize,
    /// Colored console output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule: FinishingRule::default(),
            limit: DEFAULT_LIMIT,
            color: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Truncate `items` to the configured limit
    pub fn limited<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.limit == 0 {
            items
        } else {
            &items[..items.len().min(self.limit)]
        }
    }
}
