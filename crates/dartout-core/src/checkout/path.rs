use serde::Serialize;

use crate::board::{Segment, catalog};
use crate::config::limits::MAX_THROWS;

/// An ordered sequence of one to three throws that checks out a score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CheckoutPath {
    throws: Vec<Segment>,
}

impl CheckoutPath {
    /// Paths built by the search are non-empty and catalog-only.
    pub(crate) fn new(throws: Vec<Segment>) -> Self {
        assert!(!throws.is_empty(), "checkout path needs at least one throw");
        Self { throws }
    }

    /// Build a path from caller-supplied throws.
    ///
    /// Returns `None` unless there are one to three throws and every throw
    /// is a board segment.
    pub fn from_throws(throws: Vec<Segment>) -> Option<Self> {
        let valid = (1..=MAX_THROWS).contains(&throws.len())
            && throws.iter().all(|t| catalog().contains(t));
        valid.then(|| Self { throws })
    }

    pub fn throws(&self) -> &[Segment] {
        &self.throws
    }

    pub fn total_throws(&self) -> usize {
        self.throws.len()
    }

    pub fn total(&self) -> u32 {
        self.throws.iter().map(|t| t.value).sum()
    }

    pub fn first(&self) -> &Segment {
        &self.throws[0]
    }

    pub fn last(&self) -> &Segment {
        &self.throws[self.throws.len() - 1]
    }

    /// True when every throw hits the same number (e.g. T20, D20)
    pub fn is_uniform(&self) -> bool {
        let base = self.first().base;
        self.throws.iter().all(|t| t.base == base)
    }

    pub fn finishes_on_double_bull(&self) -> bool {
        self.last().value == 50
    }

    pub fn finishes_on_double_sixteen(&self) -> bool {
        self.last().is_double_sixteen()
    }

    /// Space-separated labels, e.g. "T20 T20 BULL"
    pub fn labels(&self) -> String {
        self.throws
            .iter()
            .map(Segment::label)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for CheckoutPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels())
    }
}
