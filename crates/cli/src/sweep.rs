//! Size sweep: time both algorithms over generated inputs and tabulate with polars.

use anyhow::{Context, Result};
use closest::api::{generate_points, GenCfg};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::report::{time_brute_force, time_divide_and_conquer, AlgoReport};

/// Sweep parameters.
#[derive(Clone, Debug)]
pub struct SweepCfg {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub upper: f64,
    /// Largest size brute force is timed on.
    pub brute_max: usize,
}

/// Time every size; brute force only where `n <= brute_max`.
///
/// Each size gets its own seed offset so rows are independent but replayable.
pub fn run_sweep(cfg: &SweepCfg) -> Result<Vec<AlgoReport>> {
    let mut rows = Vec::new();
    for (k, &n) in cfg.sizes.iter().enumerate() {
        let gen_cfg = GenCfg {
            count: n,
            upper: cfg.upper,
        };
        let points = generate_points(gen_cfg, cfg.seed.wrapping_add(k as u64))?;
        let dc = time_divide_and_conquer(&points)
            .with_context(|| format!("divide and conquer at n={n}"))?;
        tracing::info!(n, seconds = dc.seconds, "sweep_divide_and_conquer");
        rows.push(dc);
        if n <= cfg.brute_max {
            let bf = time_brute_force(&points).with_context(|| format!("brute force at n={n}"))?;
            tracing::info!(n, seconds = bf.seconds, "sweep_brute_force");
            rows.push(bf);
        } else {
            tracing::debug!(n, brute_max = cfg.brute_max, "sweep_skip_brute_force");
        }
    }
    Ok(rows)
}

/// Rows as a `n, algo, seconds, distance` frame.
pub fn to_frame(rows: &[AlgoReport]) -> PolarsResult<DataFrame> {
    let n: Vec<u64> = rows.iter().map(|r| r.n as u64).collect();
    let algo: Vec<&str> = rows.iter().map(|r| r.algo.as_str()).collect();
    let seconds: Vec<f64> = rows.iter().map(|r| r.seconds).collect();
    let distance: Vec<f64> = rows.iter().map(|r| r.distance).collect();
    df!(
        "n" => n,
        "algo" => algo,
        "seconds" => seconds,
        "distance" => distance
    )
}

pub fn write_csv(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Read a sweep table back (lazily) for the `report` subcommand.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AlgoName;
    use tempfile::tempdir;

    fn small_cfg() -> SweepCfg {
        SweepCfg {
            sizes: vec![10, 200, 600],
            seed: 3,
            upper: 50_000.0,
            brute_max: 200,
        }
    }

    #[test]
    fn brute_force_is_capped() {
        let rows = run_sweep(&small_cfg()).unwrap();
        // 3 divide-and-conquer rows + brute force at 10 and 200.
        assert_eq!(rows.len(), 5);
        let brute: Vec<usize> = rows
            .iter()
            .filter(|r| r.algo == AlgoName::BruteForce)
            .map(|r| r.n)
            .collect();
        assert_eq!(brute, vec![10, 200]);
    }

    #[test]
    fn csv_round_trip_keeps_shape() {
        let rows = run_sweep(&small_cfg()).unwrap();
        let mut df = to_frame(&rows).unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("sweep").join("timings.csv");
        write_csv(&mut df, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("n,algo,seconds,distance"));
        let back = read_csv(&out).unwrap();
        assert_eq!(back.shape(), (5, 4));
    }
}
