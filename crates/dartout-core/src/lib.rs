//! # dartout-core
//!
//! Checkout calculator for darts.
//!
//! For a remaining score and a finishing rule this crate enumerates every
//! way to reach exactly zero in at most three throws and ranks the paths
//! by how a player would actually want to throw them.
//!
//! ```
//! use dartout_core::{FinishingRule, find_checkouts};
//!
//! let paths = find_checkouts(170, FinishingRule::DoubleOut);
//! assert_eq!(paths[0].to_string(), "T20 T20 BULL");
//! ```

pub mod board;
pub mod checkout;
pub mod config;
pub mod error;
pub mod export;
pub mod rule;

// Re-export from board module
pub use board::{Segment, SegmentKind, catalog};

// Re-export from checkout module
pub use checkout::{
    BoundedSearch, CheckoutPath, CheckoutRanker, RankTier, best_checkout, bogey_numbers,
    enumerate, find_checkouts, is_bogey,
};

// Re-export from config module
pub use config::Config;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{ExportFormat, PathRecord, ThrowRecord, generate_json, generate_tsv};

// Re-export from rule module
pub use rule::FinishingRule;
