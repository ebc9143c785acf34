//! Analysis modules.
//!
//! Sorting and classification of collected outcomes.

pub mod aggregator;

pub use aggregator::*;
