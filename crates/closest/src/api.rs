//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI, benches, and examples. Breaking
//! changes are allowed.

// Core types and metric
pub use crate::error::PairError;
pub use crate::point::{distance, Pair, Point};
// Algorithms
pub use crate::brute::brute_force;
pub use crate::divide::{
    divide_and_conquer, divide_and_conquer_with_stats, validate_inputs, SearchStats, STRIP_WINDOW,
};
pub use crate::prepare::{
    closest_pair_brute_force, closest_pair_divide_and_conquer, PreparedPoints,
};
// Inputs
pub use crate::generate::{generate_points, GenCfg, DEFAULT_UPPER, MAX_UPPER};
pub use crate::io::{load_points, read_points, save_points, write_points};

/// True if two distances agree within `rel_tol` relative to the larger one
/// (absolute near zero).
pub fn distances_agree(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs()).max(1.0)
}
