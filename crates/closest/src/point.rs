//! Planar points, closest-pair results, and the Euclidean metric.
//!
//! - `Point`: immutable `(x, y)` with exact equality and a matching hash.
//! - `Pair`: the two points a search settled on, plus their cached distance.
//! - `distance`: the only metric both algorithms use.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::PairError;

/// A point in the plane. Coordinates are expected to be finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(self, other)
    }
}

// Exact equality is reflexive for every finite coordinate; NaN is out of contract.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so both must hash alike.
        fn canonical_bits(v: f64) -> u64 {
            if v == 0.0 {
                0.0f64.to_bits()
            } else {
                v.to_bits()
            }
        }
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parses `"x y"`: exactly two whitespace-separated finite decimals.
impl FromStr for Point {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let x = parse_coord(s, tokens.next(), "x")?;
        let y = parse_coord(s, tokens.next(), "y")?;
        if let Some(extra) = tokens.next() {
            return Err(PairError::format(
                s,
                format!("unexpected trailing token {extra:?}"),
            ));
        }
        Ok(Point::new(x, y))
    }
}

fn parse_coord(input: &str, token: Option<&str>, axis: &str) -> Result<f64, PairError> {
    let token = token.ok_or_else(|| PairError::format(input, format!("missing {axis}")))?;
    let value: f64 = token
        .parse()
        .map_err(|e| PairError::format(input, format!("{axis} coordinate {token:?}: {e}")))?;
    if !value.is_finite() {
        return Err(PairError::format(
            input,
            format!("{axis} coordinate {token:?} is not finite"),
        ));
    }
    Ok(value)
}

/// Euclidean distance `sqrt((a.x-b.x)² + (a.y-b.y)²)`.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Unordered pair of points with their distance.
///
/// Equality ignores order: `Pair::new(a, b) == Pair::new(b, a)`.
#[derive(Clone, Copy, Debug)]
pub struct Pair {
    a: Point,
    b: Point,
    distance: f64,
}

impl Pair {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            distance: distance(&a, &b),
        }
    }
    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.a, self.b)
    }
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }
    /// True if `p` is one of the two endpoints.
    #[cfg(test)]
    pub(crate) fn contains(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) and ({}, {}) at distance {}",
            self.a.x, self.a.y, self.b.x, self.b.y, self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn distance_is_symmetric_and_zero_on_diagonal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = Point::new(rng.gen_range(0.0..50_000.0), rng.gen_range(0.0..50_000.0));
            let b = Point::new(rng.gen_range(0.0..50_000.0), rng.gen_range(0.0..50_000.0));
            assert_eq!(distance(&a, &b), distance(&b, &a));
            assert_eq!(distance(&a, &a), 0.0);
        }
    }

    #[test]
    fn distance_three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_across_full_coordinate_range() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(49_999.999, 49_999.999);
        let d = distance(&a, &b);
        assert!(d.is_finite());
        assert!((d - 49_999.999 * std::f64::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn parse_accepts_whitespace_pairs() {
        let p: Point = "12.5 7".parse().unwrap();
        assert_eq!(p, Point::new(12.5, 7.0));
        let q: Point = "  3.25\t\t1e2  ".parse().unwrap();
        assert_eq!(q, Point::new(3.25, 100.0));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in ["", "1.0", "1.0 abc", "x 2", "1 2 3", "NaN 1", "1 inf"] {
            let err = bad.parse::<Point>().unwrap_err();
            assert!(
                matches!(err, PairError::Format { line: None, .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let p = Point::new(0.1 + 0.2, 49_999.123_456_789);
        let back: Point = p.to_string().parse().unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Point::new(1.0, 2.0));
        set.insert(Point::new(1.0, 2.0));
        set.insert(Point::new(0.0, -0.0));
        set.insert(Point::new(-0.0, 0.0));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point::new(1.0, 2.0)));
    }

    #[test]
    fn pair_equality_is_unordered() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 1.0);
        assert_eq!(Pair::new(a, b), Pair::new(b, a));
        assert_ne!(Pair::new(a, b), Pair::new(a, c));
        assert!((Pair::new(a, b).distance() - 1.0).abs() < 1e-12);
        assert!(Pair::new(a, b).contains(&b));
        assert!(!Pair::new(a, b).contains(&c));
    }
}
