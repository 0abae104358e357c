//! Anagram matching and lookup
//!
//! The matcher is a pure filter over a borrowed dictionary; the lookup wraps it
//! with input normalization and permutation generation.

pub mod lookup;
pub mod matcher;

pub use lookup::{LookupReport, lookup};
pub use matcher::{MatchResult, find_matches};
