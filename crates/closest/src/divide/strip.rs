//! Merge-step helpers: y-index partition, strip filter, bounded strip search.
//!
//! Packing bound
//! - Inside a `delta × 2·delta` rectangle straddling the dividing line, each
//!   half holds at most four points that are pairwise ≥ delta apart, so at most
//!   eight points total. A point therefore only needs to look at the next
//!   `STRIP_WINDOW` strip entries above it in y order.

use crate::point::{distance, Pair, Point};

/// Successors each strip point is compared against.
pub const STRIP_WINDOW: usize = 7;

/// Stable split of `y_indexes` around `mid`: indices `<= mid` go left, the rest right.
///
/// Linear scan, no re-sort; y order inside each half is the parent's order.
pub(crate) fn partition_y(y_indexes: &[usize], mid: usize) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::with_capacity(y_indexes.len() / 2 + 1);
    let mut right = Vec::with_capacity(y_indexes.len() / 2 + 1);
    for &idx in y_indexes {
        if idx <= mid {
            left.push(idx);
        } else {
            right.push(idx);
        }
    }
    (left, right)
}

/// Indices (in y order) whose point lies within `delta` of the vertical line `x = line_x`.
pub(crate) fn collect_strip(
    points: &[Point],
    y_indexes: &[usize],
    line_x: f64,
    delta: f64,
) -> Vec<usize> {
    y_indexes
        .iter()
        .copied()
        .filter(|&idx| (points[idx].x() - line_x).abs() <= delta)
        .collect()
}

/// Closest pair inside the strip, comparing each entry with its next
/// `STRIP_WINDOW` successors. `None` if the strip has fewer than two points.
///
/// Also returns the number of distance evaluations performed.
pub(crate) fn search_strip(points: &[Point], strip: &[usize]) -> (Option<Pair>, usize) {
    let mut best: Option<(usize, usize)> = None;
    let mut best_d = f64::INFINITY;
    let mut comparisons = 0;
    for (i, &a) in strip.iter().enumerate() {
        let upper = (i + STRIP_WINDOW).min(strip.len() - 1);
        for &b in &strip[(i + 1)..=upper] {
            comparisons += 1;
            let d = distance(&points[a], &points[b]);
            if d < best_d {
                best_d = d;
                best = Some((a, b));
            }
        }
    }
    (
        best.map(|(a, b)| Pair::new(points[a], points[b])),
        comparisons,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_stable_and_complete() {
        let y = vec![5, 0, 3, 7, 1, 6, 2, 4];
        let (left, right) = partition_y(&y, 3);
        assert_eq!(left, vec![0, 3, 1, 2]);
        assert_eq!(right, vec![5, 7, 6, 4]);
    }

    #[test]
    fn strip_keeps_boundary_points_in_y_order() {
        let points = vec![
            Point::new(0.0, 4.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 3.0),
            Point::new(3.0, 1.0),
            Point::new(9.0, 2.0),
        ];
        // y order: 1, 3, 4, 2, 0
        let y = vec![1, 3, 4, 2, 0];
        let strip = collect_strip(&points, &y, 2.0, 1.0);
        // |x - 2| <= 1 keeps x in {1, 2, 3}, inclusive at both ends.
        assert_eq!(strip, vec![1, 3, 2]);
    }

    #[test]
    fn search_strip_limits_window() {
        let points: Vec<Point> = (0..20).map(|k| Point::new(0.0, k as f64)).collect();
        let strip: Vec<usize> = (0..20).collect();
        let (pair, comparisons) = search_strip(&points, &strip);
        assert!((pair.unwrap().distance() - 1.0).abs() < 1e-12);
        // 13 entries see a full window; the last 7 see 6, 5, ..., 0.
        assert_eq!(comparisons, 13 * STRIP_WINDOW + (0..STRIP_WINDOW).sum::<usize>());
    }

    #[test]
    fn search_strip_needs_two_points() {
        let points = vec![Point::new(0.0, 0.0)];
        assert_eq!(search_strip(&points, &[]), (None, 0));
        assert_eq!(search_strip(&points, &[0]), (None, 0));
    }
}
