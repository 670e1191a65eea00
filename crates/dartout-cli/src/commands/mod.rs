//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod bogeys;
pub mod solve;
pub mod table;
