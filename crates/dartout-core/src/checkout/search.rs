//! Bounded-depth enumeration of checkout paths.

use crate::board::{Segment, catalog};
use crate::config::limits::{MAX_SEGMENT_VALUE, MAX_THROWS};
use crate::rule::FinishingRule;

use super::CheckoutPath;

/// Exhaustive search over a fixed alphabet of segments.
///
/// Every throw except the last may be any alphabet segment; the last must be
/// one of `finishers`. After each non-final throw the remainder has to stay
/// at or above `min_remainder` and within reach of the throws still to come.
#[derive(Debug, Clone)]
pub struct BoundedSearch<'a> {
    alphabet: &'a [Segment],
    finishers: &'a [Segment],
    min_remainder: u32,
    max_depth: usize,
}

impl<'a> BoundedSearch<'a> {
    pub fn new(alphabet: &'a [Segment], finishers: &'a [Segment], min_remainder: u32) -> Self {
        Self {
            alphabet,
            finishers,
            min_remainder,
            max_depth: MAX_THROWS,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// All paths summing to `target`, shortest first. Within one length the
    /// order follows the alphabet at each position.
    pub fn run(&self, target: u32) -> Vec<CheckoutPath> {
        let mut paths = Vec::new();
        let mut prefix = Vec::with_capacity(self.max_depth);
        for length in 1..=self.max_depth {
            self.extend(target, length, &mut prefix, &mut paths);
        }
        paths
    }

    fn extend(
        &self,
        remaining: u32,
        throws_left: usize,
        prefix: &mut Vec<Segment>,
        paths: &mut Vec<CheckoutPath>,
    ) {
        if throws_left == 1 {
            for finisher in self.finishers.iter().filter(|f| f.value == remaining) {
                let mut throws = prefix.clone();
                throws.push(*finisher);
                paths.push(CheckoutPath::new(throws));
            }
            return;
        }

        // Highest score the throws after this one can still remove.
        let reach = (throws_left as u32 - 1) * MAX_SEGMENT_VALUE;

        for segment in self.alphabet {
            let Some(rest) = remaining.checked_sub(segment.value) else {
                continue;
            };
            if rest < self.min_remainder || rest > reach {
                continue;
            }
            prefix.push(*segment);
            self.extend(rest, throws_left - 1, prefix, paths);
            prefix.pop();
        }
    }
}

/// Enumerate every checkout of `target` under `rule`, unranked.
///
/// No range checks and no bogey shortcut: this is the raw search that
/// `find_checkouts` builds on.
pub fn enumerate(target: u32, rule: FinishingRule) -> Vec<CheckoutPath> {
    let finishers = rule.finishers();
    BoundedSearch::new(catalog(), &finishers, rule.min_remainder()).run(target)
}
