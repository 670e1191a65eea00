//! Preference order over checkout paths.
//!
//! Paths are compared tier by tier; the first tier that tells two paths
//! apart decides. Tiers are public so each preference can be checked on its
//! own.

use std::cmp::Ordering;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::board::SegmentKind;
use crate::rule::FinishingRule;

use super::CheckoutPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RankTier {
    /// Fewer throws first.
    FewestThrows,
    /// Master/single-out in 51-70 only: double bull finish first, and
    /// among those a single as the first throw.
    BullFinish,
    /// Finishing on D16 first.
    DoubleSixteen,
    /// All throws on the same number first.
    Uniform,
    /// Higher throw values first, position by position.
    HighestFirst,
    /// Higher multiplier on the first throw first.
    FirstMultiplier,
}

/// `Less` when only `a` has the preferred property
fn prefer(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

impl RankTier {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn compare(
        &self,
        ranker: &CheckoutRanker,
        a: &CheckoutPath,
        b: &CheckoutPath,
    ) -> Ordering {
        match self {
            Self::FewestThrows => a.total_throws().cmp(&b.total_throws()),
            Self::BullFinish => {
                if !ranker.rule.prefers_bull_finish(ranker.target) {
                    return Ordering::Equal;
                }
                let a_bull = a.finishes_on_double_bull();
                let b_bull = b.finishes_on_double_bull();
                if a_bull && b_bull {
                    prefer(
                        a.first().kind == SegmentKind::Single,
                        b.first().kind == SegmentKind::Single,
                    )
                } else {
                    prefer(a_bull, b_bull)
                }
            }
            Self::DoubleSixteen => prefer(
                a.finishes_on_double_sixteen(),
                b.finishes_on_double_sixteen(),
            ),
            Self::Uniform => prefer(a.is_uniform(), b.is_uniform()),
            Self::HighestFirst => a
                .throws()
                .iter()
                .zip(b.throws())
                .map(|(x, y)| y.value.cmp(&x.value))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal),
            Self::FirstMultiplier => b.first().multiplier.cmp(&a.first().multiplier),
        }
    }
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ranks the checkouts of one target under one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutRanker {
    rule: FinishingRule,
    target: u32,
}

impl CheckoutRanker {
    pub fn new(rule: FinishingRule, target: u32) -> Self {
        Self { rule, target }
    }

    pub fn rule(&self) -> FinishingRule {
        self.rule
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn compare(&self, a: &CheckoutPath, b: &CheckoutPath) -> Ordering {
        RankTier::iter()
            .map(|tier| tier.compare(self, a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// The tier that separates `a` from `b`, or `None` if they rank equal
    pub fn deciding_tier(&self, a: &CheckoutPath, b: &CheckoutPath) -> Option<RankTier> {
        RankTier::iter().find(|tier| tier.compare(self, a, b).is_ne())
    }

    /// Stable sort, so equal paths keep their enumeration order.
    pub fn sort(&self, paths: &mut [CheckoutPath]) {
        paths.sort_by(|a, b| self.compare(a, b));
    }
}
