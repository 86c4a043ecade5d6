//! Caller-side setup for the divide-and-conquer search, plus whole-set entry points.
//!
//! `PreparedPoints` owns an x-sorted copy of the input (ties broken by y) and
//! the index array that walks it in y order. Both orders use `f64::total_cmp`
//! with stable sorts, so preparation is deterministic.

use std::cmp::Ordering;

use crate::brute::brute_force;
use crate::divide::{divide_and_conquer_with_stats, SearchStats};
use crate::error::PairError;
use crate::point::{Pair, Point};

/// Points sorted by x plus their y-ordered index array.
#[derive(Clone, Debug)]
pub struct PreparedPoints {
    sorted: Vec<Point>,
    y_indexes: Vec<usize>,
}

impl PreparedPoints {
    pub fn new(points: &[Point]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(cmp_x_then_y);
        let mut y_indexes: Vec<usize> = (0..sorted.len()).collect();
        y_indexes.sort_by(|&a, &b| sorted[a].y().total_cmp(&sorted[b].y()));
        Self { sorted, y_indexes }
    }

    /// Points in ascending x order.
    pub fn points(&self) -> &[Point] {
        &self.sorted
    }

    /// Indices into [`Self::points`] in ascending y order.
    pub fn y_indexes(&self) -> &[usize] {
        &self.y_indexes
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Divide-and-conquer over the whole prepared set.
    pub fn closest_pair(&self) -> Result<Pair, PairError> {
        self.closest_pair_with_stats().map(|(pair, _)| pair)
    }

    pub fn closest_pair_with_stats(&self) -> Result<(Pair, SearchStats), PairError> {
        let end = self.sorted.len().checked_sub(1).ok_or(PairError::InvalidRange {
            start: 0,
            end: 0,
            len: 0,
        })?;
        divide_and_conquer_with_stats(&self.sorted, 0, end, &self.y_indexes)
    }
}

fn cmp_x_then_y(a: &Point, b: &Point) -> Ordering {
    a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y()))
}

/// Sorts a copy of `points` and runs the divide-and-conquer search over all of it.
pub fn closest_pair_divide_and_conquer(points: &[Point]) -> Result<Pair, PairError> {
    PreparedPoints::new(points).closest_pair()
}

/// Brute-force scan over all of `points`, in input order.
pub fn closest_pair_brute_force(points: &[Point]) -> Result<Pair, PairError> {
    let end = points.len().checked_sub(1).ok_or(PairError::InvalidRange {
        start: 0,
        end: 0,
        len: 0,
    })?;
    brute_force(points, 0, end)
}
