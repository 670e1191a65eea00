//! Dartboard segments.
//!
//! This module contains the building blocks of every checkout:
//! - `SegmentKind` - single, double, treble, outer bull, double bull
//! - `Segment` - one scoring region with its base number, multiplier and value
//! - `catalog()` - the 62 segments of a standard board, built once per process

mod catalog;
mod segment;

pub use catalog::*;
pub use segment::*;
