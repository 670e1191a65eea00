//! Checkout resolution.
//!
//! - `CheckoutPath` - one ranked way to finish a score
//! - `search` - exhaustive enumeration of up to three throws
//! - `ranking` - preference order applied to the enumerated paths

mod path;
pub mod ranking;
pub mod search;

pub use path::*;
pub use ranking::{CheckoutRanker, RankTier};
pub use search::{BoundedSearch, enumerate};

use tracing::{debug, trace};

use crate::rule::FinishingRule;

/// Every checkout of `target` under `rule`, best first.
///
/// Out-of-range targets and bogey numbers yield an empty list.
pub fn find_checkouts(target: i32, rule: FinishingRule) -> Vec<CheckoutPath> {
    let Some(target) = checkable_target(target, rule) else {
        return Vec::new();
    };
    if rule.known_bogeys().contains(&target) {
        debug!("{} is a known {} bogey", target, rule);
        return Vec::new();
    }

    let mut paths = enumerate(target, rule);
    let ranker = CheckoutRanker::new(rule, target);
    ranker.sort(&mut paths);

    if let [first, second, ..] = paths.as_slice() {
        trace!(
            "{} ranks above {} by {:?}",
            first,
            second,
            ranker.deciding_tier(first, second)
        );
    }

    debug!(
        "{} under {}: {} paths ({} one-throw)",
        target,
        rule,
        paths.len(),
        paths.iter().take_while(|p| p.total_throws() == 1).count()
    );
    paths
}

/// The top-ranked checkout, if any
pub fn best_checkout(target: i32, rule: FinishingRule) -> Option<CheckoutPath> {
    find_checkouts(target, rule).into_iter().next()
}

/// True when `target` is in range for `rule` but cannot be checked out
pub fn is_bogey(target: i32, rule: FinishingRule) -> bool {
    checkable_target(target, rule).is_some() && find_checkouts(target, rule).is_empty()
}

/// All bogey numbers between 1 and the rule's maximum score
pub fn bogey_numbers(rule: FinishingRule) -> Vec<u32> {
    (1..=rule.max_score())
        .filter(|&target| {
            rule.known_bogeys().contains(&target) || enumerate(target, rule).is_empty()
        })
        .collect()
}

fn checkable_target(target: i32, rule: FinishingRule) -> Option<u32> {
    u32::try_from(target)
        .ok()
        .filter(|&t| (1..=rule.max_score()).contains(&t))
}
