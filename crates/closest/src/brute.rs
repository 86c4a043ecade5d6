//! Exhaustive O(n²) closest-pair scan over an inclusive index range.
//!
//! Used standalone as the reference answer and by the divide-and-conquer
//! recursion for its three-point base case.

use crate::error::PairError;
use crate::point::{distance, Pair, Point};

/// Closest pair among `points[start..=end]`.
///
/// Every pair of distinct positions is compared once and the first strict
/// minimum wins. With tied minima the choice is unspecified; compare
/// distances, not identities.
///
/// Errors with `InvalidRange` if the range holds fewer than two points or
/// `end` is past the end of `points`.
pub fn brute_force(points: &[Point], start: usize, end: usize) -> Result<Pair, PairError> {
    check_range(points, start, end)?;
    Ok(scan(points, start, end))
}

/// Shared range check: `start < end < points.len()`.
pub(crate) fn check_range(points: &[Point], start: usize, end: usize) -> Result<(), PairError> {
    if start >= end || end >= points.len() {
        return Err(PairError::InvalidRange {
            start,
            end,
            len: points.len(),
        });
    }
    Ok(())
}

/// Unchecked scan; caller guarantees a valid range.
pub(crate) fn scan(points: &[Point], start: usize, end: usize) -> Pair {
    debug_assert!(start < end && end < points.len());
    let mut best = (start, start + 1);
    let mut best_d = f64::INFINITY;
    for i in start..=end {
        for j in (i + 1)..=end {
            let d = distance(&points[i], &points[j]);
            if d < best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    Pair::new(points[best.0], points[best.1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn two_points_are_returned_as_is() {
        let p = pts(&[(1.0, 1.0), (4.0, 5.0)]);
        let pair = brute_force(&p, 0, 1).unwrap();
        assert_eq!(pair, Pair::new(p[0], p[1]));
        assert!((pair.distance() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn finds_unit_pair_in_small_set() {
        let p = pts(&[(0.0, 0.0), (1.0, 1.0), (5.0, 5.0), (1.0, 0.0)]);
        let pair = brute_force(&p, 0, 3).unwrap();
        assert!((pair.distance() - 1.0).abs() < 1e-12);
        assert!(pair.contains(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn respects_subrange_bounds() {
        // The globally closest pair sits at positions 0 and 1; the subrange excludes it.
        let p = pts(&[(0.0, 0.0), (0.1, 0.0), (10.0, 0.0), (13.0, 0.0), (20.0, 0.0)]);
        let pair = brute_force(&p, 2, 4).unwrap();
        assert!((pair.distance() - 3.0).abs() < 1e-12);
        assert_eq!(pair, Pair::new(p[2], p[3]));
    }

    #[test]
    fn identical_points_have_zero_distance() {
        let p = vec![Point::new(3.0, 3.0); 10];
        let pair = brute_force(&p, 0, 9).unwrap();
        assert_eq!(pair.distance(), 0.0);
    }

    #[test]
    fn degenerate_ranges_are_rejected() {
        let p = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!(matches!(
            brute_force(&p, 1, 1),
            Err(PairError::InvalidRange { start: 1, end: 1, len: 3 })
        ));
        assert!(matches!(
            brute_force(&p, 2, 1),
            Err(PairError::InvalidRange { .. })
        ));
        assert!(matches!(
            brute_force(&p, 0, 3),
            Err(PairError::InvalidRange { .. })
        ));
        assert!(matches!(
            brute_force(&[], 0, 0),
            Err(PairError::InvalidRange { len: 0, .. })
        ));
    }
}
