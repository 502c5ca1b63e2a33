//! Banded optimal-string-alignment distance.
//!
//! Computes the edit distance between two code-point sequences under four
//! unit-cost operations: insert, delete, substitute, and adjacent
//! transposition. The computation is bounded by a caller threshold:
//!
//! - If the true distance is `<= max_distance`, the exact distance is
//!   returned.
//! - Otherwise some value `> max_distance` is returned; callers must treat
//!   all such values alike and never rank them.
//!
//! The bound licenses two prunings:
//!
//! - **Banding**: every cell `(i, j)` with `|j - i| > max_distance` costs at
//!   least `|j - i|` indels, so only the diagonal band is computed. Cells
//!   just past the band edge are seeded with [`INF`] so a recycled row can
//!   never leak stale values into the next row's reads.
//! - **Row-pair early exit**: every alignment path touches at least one of
//!   any two consecutive rows, even where a transposition edge steps from
//!   row `i - 2` straight to row `i`, so once two consecutive rows both have
//!   banded minima above the threshold no path can finish below it. The pair
//!   rule is a conservative margin rather than a necessity: in-band row
//!   minima never decrease (each cell lies at most one substitution above
//!   the same-diagonal cell one row up), so the first over-threshold row
//!   already decides the outcome and the exit merely fires one row later.
//!
//! Working storage is three logical rows (current, previous, and the row
//! before that for the transposition move) cycled through one flat buffer.

/// Sentinel that won't overflow when incremented.
pub(crate) const INF: usize = usize::MAX / 2;

/// Flat offset of logical row `i` in the 3-row cycle.
#[inline(always)]
fn row_off(i: usize, cols: usize) -> usize {
    (i % 3) * cols
}

/// Bounded transposition-aware edit distance between `target` and `cand`.
///
/// `buf` is the reusable row storage; it is grown as needed and never
/// shrunk. Contents are overwritten, so any buffer may be passed in.
pub(crate) fn banded_distance(target: &[char], cand: &[char], max_distance: usize, buf: &mut Vec<usize>) -> usize {
    let n = target.len();
    let m = cand.len();

    // Degenerate shapes have exact answers without touching the buffer.
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }
    let len_diff = n.abs_diff(m);
    if len_diff > max_distance {
        return len_diff;
    }

    let k = max_distance;
    let cols = m + 1;
    let total = 3 * cols;
    if buf.len() < total {
        buf.resize(total, INF);
    }

    // Row 0: dp[0][j] = j inside the band, one guard cell past its edge.
    let row0 = row_off(0, cols);
    let hi0 = m.min(k);
    for j in 0..=hi0 {
        buf[row0 + j] = j;
    }
    if hi0 < m {
        buf[row0 + hi0 + 1] = INF;
    }

    // Banded minimum of the previous row, for the row-pair early exit.
    let mut above_min = 0;

    for i in 1..=n {
        let cur = row_off(i, cols);
        let prev = row_off(i + 2, cols); // i - 1
        let prev2 = row_off(i + 1, cols); // i - 2
        let lo = i.saturating_sub(k);
        let hi = m.min(i.saturating_add(k));
        let tc = target[i - 1];

        let mut row_min = INF;
        // `left` tracks dp[i][j - 1]; the cell left of the band is INF.
        let mut left = INF;
        if lo == 0 {
            buf[cur] = i;
            left = i;
            row_min = i;
        }
        for j in lo.max(1)..=hi {
            let cc = cand[j - 1];
            let sub = buf[prev + j - 1] + usize::from(tc != cc);
            let del = buf[prev + j] + 1;
            let ins = left + 1;
            let mut d = sub.min(del).min(ins);
            if i >= 2 && j >= 2 && tc == cand[j - 2] && target[i - 2] == cc {
                d = d.min(buf[prev2 + j - 2] + 1);
            }
            buf[cur + j] = d;
            left = d;
            row_min = row_min.min(d);
        }
        if hi < m {
            buf[cur + hi + 1] = INF;
        }

        if row_min > k && above_min > k {
            return row_min;
        }
        above_min = row_min;
    }

    buf[row_off(n, cols) + m]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
