//! The per-target calculator: decoded profile, prefilter cascade, buffers.
//!
//! [`EditDistance`] is built once per target and then invoked across a whole
//! candidate stream, so everything that can be paid for once is: the target
//! is decoded into code points at construction, together with a small
//! frequency histogram that later yields a cheap lower bound per candidate.
//! Candidates are screened by a cascade of checks ordered cheapest first,
//! and only the survivors reach the banded engine.

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::engine;

/// Histogram width. Code points are tallied modulo this, which can only
/// weaken the bound, never break it. 64 trades clear/sum cost against bound
/// quality well enough in practice.
const BUCKETS: usize = 64;

#[inline(always)]
fn bucket(ch: char) -> usize {
    ch as usize % BUCKETS
}

/// Bounded edit distance from one fixed target to many candidates.
///
/// Distance counts unit-cost inserts, deletes, substitutes, and adjacent
/// transpositions over Unicode code points (never bytes). Construction
/// decodes the target once; [`distance`](EditDistance::distance) is then
/// cheap to call in a loop.
///
/// The working buffers live per thread, so a single instance may be shared
/// across threads freely; each thread pays its own lazy allocation and then
/// reuses it. The type deliberately does not implement `Clone`: the buffers
/// are call-scoped caches, not value state.
///
/// # Examples
///
/// ```
/// use typodist::EditDistance;
///
/// let ed = EditDistance::new("kitten");
/// assert_eq!(ed.distance("sitting", 3), 3);
/// assert_eq!(ed.distance("kitten", 0), 0);
/// assert!(ed.distance("mouse", 2) > 2);
/// ```
#[derive(Debug)]
pub struct EditDistance {
    /// Target code points, decoded once.
    target: Vec<char>,
    /// Count of target code points per bucket. Summing the per-bucket
    /// differences against a candidate and halving gives a lower bound on
    /// the distance: one edit moves at most two bucket counts by one each,
    /// and a transposition moves none.
    freqs: [u32; BUCKETS],
    /// Reusable buffers (per-thread).
    cand_buf: ThreadLocal<RefCell<Vec<char>>>,
    row_buf: ThreadLocal<RefCell<Vec<usize>>>,
}

impl EditDistance {
    /// Builds the profile for `target`.
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        let mut freqs = [0u32; BUCKETS];
        for &ch in &target {
            freqs[bucket(ch)] += 1;
        }
        Self {
            target,
            freqs,
            cand_buf: ThreadLocal::new(),
            row_buf: ThreadLocal::new(),
        }
    }

    /// Edit distance between the target and `candidate`, bounded by
    /// `max_distance`.
    ///
    /// Returns the exact distance when it is `<= max_distance`. Otherwise
    /// returns some unspecified value `> max_distance`; treat every such
    /// value uniformly as "not within bound" and never rank one against
    /// another.
    ///
    /// When narrowing a search (keeping the best distance found so far),
    /// pass a non-increasing sequence of bounds across calls on the same
    /// instance; the pruning gets cheaper as the bound tightens.
    pub fn distance(&self, candidate: &str, max_distance: usize) -> usize {
        // Byte-window rejection, before any decoding. A code point encodes
        // to 1..=4 UTF-8 bytes, so the decoded length lies within
        // [bytes.div_ceil(4), bytes].
        let bytes = candidate.len();
        if self.target.len() > bytes.saturating_add(max_distance) {
            // Candidate too short.
            return usize::MAX;
        }
        if self.target.len().saturating_add(max_distance) < bytes.div_ceil(4) {
            // Candidate too long.
            return usize::MAX;
        }

        let mut cand = self.cand_buf.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        cand.clear();
        cand.extend(candidate.chars());

        // Any length gap must be paid for in indels.
        let len_bound = cand.len().abs_diff(self.target.len());
        if len_bound > max_distance {
            return len_bound;
        }

        let mut cand_freqs = [0u32; BUCKETS];
        for &ch in cand.iter() {
            cand_freqs[bucket(ch)] += 1;
        }
        let spread: usize = self
            .freqs
            .iter()
            .zip(&cand_freqs)
            .map(|(&t, &c)| t.abs_diff(c) as usize)
            .sum();
        let freq_bound = spread / 2;
        if freq_bound > max_distance {
            return freq_bound;
        }

        let mut rows = self.row_buf.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        engine::banded_distance(&self.target, &cand, max_distance, &mut rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
