//! Dictionary scanning on top of the calculator.
//!
//! This is the narrowing loop the calculator's bound contract is shaped
//! for: build one [`EditDistance`] for the misspelled input, walk the
//! dictionary, and every time a candidate lands within the bound, tighten
//! the bound to one less than its distance. Later candidates then only
//! survive the prefilters if they would strictly improve on the best hit,
//! and an exact match ends the scan outright.

use crate::EditDistance;

/// A dictionary entry matched within the requested bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// The matched dictionary term.
    pub term: &'a str,
    /// Exact edit distance between the target and [`term`](Self::term).
    pub distance: usize,
}

/// Scans `candidates` and returns the entry closest to `target`, if any
/// lies within `max_distance`.
///
/// Ties go to the earliest candidate: once a term matches at distance `d`,
/// only distances `< d` remain interesting. A distance-0 hit returns
/// immediately without consuming the rest of the stream.
///
/// # Examples
///
/// ```
/// use typodist::best_match;
///
/// let hit = best_match("helo", ["halo", "hello", "helm"], 2).unwrap();
/// assert_eq!(hit.term, "halo");
/// assert_eq!(hit.distance, 1);
///
/// assert!(best_match("qqq", ["halo", "hello", "helm"], 1).is_none());
/// ```
pub fn best_match<'a, I>(target: &str, candidates: I, max_distance: usize) -> Option<Suggestion<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let calc = EditDistance::new(target);
    let mut best: Option<Suggestion<'a>> = None;
    let mut bound = max_distance;

    for term in candidates {
        let d = calc.distance(term, bound);
        if d > bound {
            continue;
        }
        trace!("{term:?} within bound at distance {d}");
        best = Some(Suggestion { term, distance: d });
        if d == 0 {
            break;
        }
        bound = d - 1;
    }

    if let Some(hit) = &best {
        debug!("best match for {target:?}: {:?} at distance {}", hit.term, hit.distance);
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
