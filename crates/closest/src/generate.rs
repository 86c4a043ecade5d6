//! Reproducible uniform point sets for benchmarks and cross-checks.
//!
//! Both coordinates are drawn independently from `[0, upper)`. The seed is
//! mixed SplitMix64-style before seeding `StdRng`, so nearby seeds give
//! unrelated streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PairError;
use crate::point::Point;

/// Upper coordinate bound used by the point-file generator.
pub const DEFAULT_UPPER: f64 = 50_000.0;

/// Largest accepted bound; squared coordinate differences must stay finite.
pub const MAX_UPPER: f64 = 1e150;

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenCfg {
    pub count: usize,
    /// Exclusive upper bound for both coordinates.
    pub upper: f64,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            count: 25_000,
            upper: DEFAULT_UPPER,
        }
    }
}

impl GenCfg {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), PairError> {
        if !self.upper.is_finite() {
            return Err(PairError::invalid_config("upper bound must be finite"));
        }
        if self.upper <= 0.0 {
            return Err(PairError::invalid_config("upper bound must be > 0"));
        }
        if self.upper > MAX_UPPER {
            return Err(PairError::invalid_config(format!(
                "upper bound must be <= {MAX_UPPER:e}"
            )));
        }
        Ok(())
    }
}

fn seeded_rng(seed: u64) -> StdRng {
    fn mix(mut x: u64) -> u64 {
        x = x.wrapping_add(0x9e3779b97f4a7c15);
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }
    StdRng::seed_from_u64(mix(seed))
}

/// Draw `cfg.count` points uniformly from `[0, upper)²`.
pub fn generate_points(cfg: GenCfg, seed: u64) -> Result<Vec<Point>, PairError> {
    cfg.validate()?;
    let mut rng = seeded_rng(seed);
    Ok((0..cfg.count)
        .map(|_| Point::new(rng.gen_range(0.0..cfg.upper), rng.gen_range(0.0..cfg.upper)))
        .collect())
}
