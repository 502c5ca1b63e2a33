//! Typodist computes bounded, transposition-aware edit distances.
//!
//! The distance counts unit-cost insertions, deletions, substitutions, and
//! adjacent transpositions between Unicode code points (optimal string
//! alignment, so `"ab"` to `"ba"` costs 1 where plain Levenshtein says 2).
//! It is built for scanning: one [`EditDistance`] per target amortizes
//! decoding and buffer allocation over many candidates, and a per-call
//! bound lets obviously-distant candidates be rejected without running the
//! alignment at all.
//!
//! # Examples
//!
//! ```
//! use typodist::EditDistance;
//!
//! let ed = EditDistance::new("kitten");
//! assert_eq!(ed.distance("sitting", 3), 3);
//! assert_eq!(ed.distance("knitting", 5), 3);
//! assert!(ed.distance("purring", 2) > 2);
//! ```
//!
//! # The bound contract
//!
//! `distance(candidate, max_distance)` returns the exact distance whenever
//! it is `<= max_distance`. Anything greater than `max_distance` means only
//! "further than the bound": the value is unspecified, so never compare two
//! over-bound results against each other. Searches that keep a best-so-far
//! should pass a non-increasing sequence of bounds, which is exactly what
//! [`best_match`] does.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod distance;
mod engine;
pub mod suggest;

pub use crate::distance::EditDistance;
pub use crate::suggest::{Suggestion, best_match};

/// One-shot distance between two strings, bounded by `max_distance`.
///
/// Builds a throwaway [`EditDistance`]; when comparing one target against
/// many candidates, build the calculator once instead.
///
/// # Examples
///
/// ```
/// assert_eq!(typodist::edit_distance("ab", "ba", 2), 1);
/// assert!(typodist::edit_distance("stationary", "stationery", 1) <= 1);
/// ```
pub fn edit_distance(target: &str, candidate: &str, max_distance: usize) -> usize {
    EditDistance::new(target).distance(candidate, max_distance)
}
