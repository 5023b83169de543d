//! Streaming equivalence check between two byte sources.
//!
//! - [`Comparator`] - Configured comparison engine
//! - [`Outcome`] - Equal, not equal, or failed
//! - [`compare`] / [`compare_readers`] - One-shot helpers

mod engine;
mod outcome;

pub use engine::{Comparator, compare, compare_readers};
pub use outcome::Outcome;
