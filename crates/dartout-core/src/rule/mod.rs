//! Finishing rules.
//!
//! A finishing rule decides which segments may legally end a checkout and
//! the highest score that can be checked out in three throws.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::board::{Segment, SegmentKind, catalog};
use crate::config::limits::BULL_FINISH_WINDOW;
use crate::error::{Error, Result};

/// Double-out scores below 170 that no three-throw sequence can finish.
pub const DOUBLE_OUT_BOGEYS: [u32; 7] = [169, 168, 166, 165, 163, 162, 159];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum FinishingRule {
    #[default]
    #[strum(to_string = "double_out", serialize = "double", serialize = "do")]
    DoubleOut,
    #[strum(to_string = "master_out", serialize = "master", serialize = "mo")]
    MasterOut,
    #[strum(to_string = "single_out", serialize = "single", serialize = "so")]
    SingleOut,
}

impl FinishingRule {
    /// Parse a rule name such as "double_out", "master" or "so"
    pub fn parse_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::InvalidRule(name.to_string()))
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DoubleOut => "Double Out (finish on a double or double bull)",
            Self::MasterOut => "Master Out (finish on a treble, double or bull)",
            Self::SingleOut => "Single Out (finish on any segment)",
        }
    }

    /// Whether `segment` may be the last throw of a checkout
    pub fn allows_finish_on(&self, segment: &Segment) -> bool {
        match self {
            Self::SingleOut => true,
            Self::MasterOut => segment.kind != SegmentKind::Single,
            Self::DoubleOut => {
                matches!(segment.kind, SegmentKind::Double | SegmentKind::DoubleBull)
            }
        }
    }

    /// Catalog segments eligible to be the final throw, in catalog order
    pub fn finishers(&self) -> Vec<Segment> {
        catalog()
            .iter()
            .filter(|s| self.allows_finish_on(s))
            .copied()
            .collect()
    }

    pub fn max_score(&self) -> u32 {
        match self {
            Self::DoubleOut => 170,
            Self::MasterOut | Self::SingleOut => 180,
        }
    }

    /// Smallest remainder a later throw can still finish.
    pub fn min_remainder(&self) -> u32 {
        match self {
            Self::SingleOut => 1,
            Self::MasterOut | Self::DoubleOut => 2,
        }
    }

    /// Scores known to have no checkout under this rule, short-circuited
    /// before searching.
    pub fn known_bogeys(&self) -> &'static [u32] {
        match self {
            Self::DoubleOut => &DOUBLE_OUT_BOGEYS,
            Self::MasterOut | Self::SingleOut => &[],
        }
    }

    /// Whether the bull-finish preference applies to `target`
    pub fn prefers_bull_finish(&self, target: u32) -> bool {
        matches!(self, Self::MasterOut | Self::SingleOut) && BULL_FINISH_WINDOW.contains(&target)
    }
}

impl std::fmt::Display for FinishingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
