//! Divide-and-conquer closest pair in O(n log n).
//!
//! Inputs
//! - `points[start..=end]` sorted by x (ties in any consistent order).
//! - `y_indexes`: every index of that range exactly once, ordered by the y of
//!   the indexed point.
//!
//! Recursion
//! - Ranges of two or three points are solved directly.
//! - Larger ranges split at `mid = start + (end - start) / 2` (left half takes
//!   the extra element). `y_indexes` is split by a stable linear partition, so
//!   each half receives its own y order without re-sorting.
//! - The merge takes the better half (`delta`), keeps the points within
//!   `delta` of `x = points[mid].x`, and compares each of them against the next
//!   `STRIP_WINDOW` strip entries in y order.
//!
//! The point slice is only ever borrowed; each call owns the two index
//! vectors it hands to its children.

mod strip;

pub use strip::STRIP_WINDOW;

use crate::brute::{check_range, scan};
use crate::error::PairError;
use crate::point::{Pair, Point};

use strip::{collect_strip, partition_y, search_strip};

/// Counters collected during one divide-and-conquer run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls, including the root.
    pub calls: usize,
    /// Deepest recursion level reached (root is 0).
    pub max_depth: usize,
    /// Three-point ranges delegated to the brute-force scan.
    pub brute_cases: usize,
    /// Points that entered a merge-step strip, summed over all merges.
    pub strip_points: usize,
    /// Distance evaluations spent in strip searches.
    pub strip_comparisons: usize,
    /// Merges where the strip produced a pair closer than `delta`.
    pub strip_wins: usize,
}

/// Closest pair among `points[start..=end]` using the prepared y order.
///
/// Validates the range and the sortedness/length invariants first (linear
/// time), then runs the recursion.
pub fn divide_and_conquer(
    points: &[Point],
    start: usize,
    end: usize,
    y_indexes: &[usize],
) -> Result<Pair, PairError> {
    divide_and_conquer_with_stats(points, start, end, y_indexes).map(|(pair, _)| pair)
}

/// Same as [`divide_and_conquer`], also returning recursion counters.
pub fn divide_and_conquer_with_stats(
    points: &[Point],
    start: usize,
    end: usize,
    y_indexes: &[usize],
) -> Result<(Pair, SearchStats), PairError> {
    validate_inputs(points, start, end, y_indexes)?;
    let mut stats = SearchStats::default();
    let pair = recurse(points, start, end, y_indexes, 0, &mut stats);
    Ok((pair, stats))
}

/// Checks every divide-and-conquer precondition.
///
/// - `InvalidRange` if the range holds fewer than two points or leaves the slice.
/// - `Precondition` for a length mismatch, an index outside the range or
///   repeated, x not sorted over the range, or `y_indexes` not sorted by y.
pub fn validate_inputs(
    points: &[Point],
    start: usize,
    end: usize,
    y_indexes: &[usize],
) -> Result<(), PairError> {
    check_range(points, start, end)?;
    let size = end - start + 1;
    if y_indexes.len() != size {
        return Err(PairError::precondition(format!(
            "y index array has {} entries, range [{start}, {end}] has {size}",
            y_indexes.len()
        )));
    }
    if let Some(k) = points[start..=end]
        .windows(2)
        .position(|w| w[0].x() > w[1].x())
    {
        return Err(PairError::precondition(format!(
            "points not sorted by x at positions {} and {}",
            start + k,
            start + k + 1
        )));
    }
    let mut seen = vec![false; size];
    for &idx in y_indexes {
        if idx < start || idx > end {
            return Err(PairError::precondition(format!(
                "y index {idx} outside range [{start}, {end}]"
            )));
        }
        if std::mem::replace(&mut seen[idx - start], true) {
            return Err(PairError::precondition(format!("y index {idx} repeated")));
        }
    }
    if let Some(w) = y_indexes
        .windows(2)
        .find(|w| points[w[0]].y() > points[w[1]].y())
    {
        return Err(PairError::precondition(format!(
            "y indexes not sorted by y at {} then {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn recurse(
    points: &[Point],
    start: usize,
    end: usize,
    y_indexes: &[usize],
    depth: usize,
    stats: &mut SearchStats,
) -> Pair {
    debug_assert_eq!(y_indexes.len(), end - start + 1);
    stats.calls += 1;
    stats.max_depth = stats.max_depth.max(depth);

    match end - start {
        1 => return Pair::new(points[start], points[end]),
        2 => {
            stats.brute_cases += 1;
            return scan(points, start, end);
        }
        _ => {}
    }

    let mid = start + (end - start) / 2;
    let (left_y, right_y) = partition_y(y_indexes, mid);
    debug_assert_eq!(left_y.len(), mid - start + 1);

    let left = recurse(points, start, mid, &left_y, depth + 1, stats);
    let right = recurse(points, mid + 1, end, &right_y, depth + 1, stats);
    let winner = if left.distance() < right.distance() {
        left
    } else {
        right
    };
    let delta = winner.distance();
    let line_x = points[mid].x();

    let strip = collect_strip(points, y_indexes, line_x, delta);
    let (candidate, comparisons) = search_strip(points, &strip);
    stats.strip_points += strip.len();
    stats.strip_comparisons += comparisons;

    match candidate {
        Some(pair) if pair.distance() < delta => {
            stats.strip_wins += 1;
            pair
        }
        _ => winner,
    }
}
