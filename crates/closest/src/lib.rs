//! Closest pair of points in the plane.
//!
//! Two algorithms over the same `Point` slice:
//! - `brute_force`: O(n²) scan of every pair in an index range.
//! - `divide_and_conquer`: O(n log n) recursion over an x-sorted slice with a
//!   y-ordered index array that is partitioned, never re-sorted, per level.
//!
//! `PreparedPoints` builds both orders for a raw point set; `io` and
//! `generate` cover the point-file format and reproducible random inputs.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer the re-exports in [`api`] or [`prelude`] from callers.

pub mod api;
pub mod brute;
pub mod divide;
pub mod error;
pub mod generate;
pub mod io;
pub mod point;
pub mod prepare;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PairError;
pub use point::{distance, Pair, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute::brute_force;
    pub use crate::divide::{divide_and_conquer, SearchStats};
    pub use crate::error::PairError;
    pub use crate::point::{distance, Pair, Point};
    pub use crate::prepare::{
        closest_pair_brute_force, closest_pair_divide_and_conquer, PreparedPoints,
    };
}
