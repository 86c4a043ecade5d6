//! Timed runs of the two closest-pair algorithms and their printable report.

use std::fmt;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::ValueEnum;
use closest::api::{closest_pair_brute_force, distances_agree, Pair, Point, PreparedPoints};
use serde::Serialize;

/// Relative tolerance when checking that both algorithms found the same distance.
pub const AGREEMENT_TOL: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algo {
    /// Divide and conquer, then brute force, then an agreement check.
    Both,
    /// Divide and conquer only (includes the x-sort and y-index build).
    Divide,
    /// Brute force only.
    Brute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgoName {
    DivideAndConquer,
    BruteForce,
}

impl AlgoName {
    pub fn as_str(self) -> &'static str {
        match self {
            AlgoName::DivideAndConquer => "divide_and_conquer",
            AlgoName::BruteForce => "brute_force",
        }
    }
}

/// One algorithm's wall-clock time and result.
#[derive(Clone, Debug, Serialize)]
pub struct AlgoReport {
    pub algo: AlgoName,
    pub n: usize,
    pub seconds: f64,
    pub pair: [[f64; 2]; 2],
    pub distance: f64,
}

impl AlgoReport {
    fn new(algo: AlgoName, n: usize, seconds: f64, pair: &Pair) -> Self {
        let (a, b) = pair.points();
        Self {
            algo,
            n,
            seconds,
            pair: [[a.x(), a.y()], [b.x(), b.y()]],
            distance: pair.distance(),
        }
    }
}

impl fmt::Display for AlgoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[ax, ay], [bx, by]] = self.pair;
        writeln!(
            f,
            "{} took {:.6} seconds for {} points",
            self.algo.as_str(),
            self.seconds,
            self.n
        )?;
        write!(
            f,
            "{ax}, {ay} and {bx}, {by} are closest with a distance of {}",
            self.distance
        )
    }
}

/// Time divide and conquer end to end (sort, index build, recursion).
pub fn time_divide_and_conquer(points: &[Point]) -> Result<AlgoReport> {
    let start = Instant::now();
    let prepared = PreparedPoints::new(points);
    let (pair, stats) = prepared.closest_pair_with_stats()?;
    let seconds = start.elapsed().as_secs_f64();
    tracing::debug!(?stats, "divide_and_conquer_stats");
    Ok(AlgoReport::new(
        AlgoName::DivideAndConquer,
        points.len(),
        seconds,
        &pair,
    ))
}

pub fn time_brute_force(points: &[Point]) -> Result<AlgoReport> {
    let start = Instant::now();
    let pair = closest_pair_brute_force(points)?;
    let seconds = start.elapsed().as_secs_f64();
    Ok(AlgoReport::new(AlgoName::BruteForce, points.len(), seconds, &pair))
}

/// Run the selected algorithms; with `Algo::Both` fail if their distances disagree.
pub fn run_algorithms(points: &[Point], algo: Algo) -> Result<Vec<AlgoReport>> {
    let mut reports = Vec::new();
    if matches!(algo, Algo::Both | Algo::Divide) {
        reports.push(time_divide_and_conquer(points)?);
    }
    if matches!(algo, Algo::Both | Algo::Brute) {
        reports.push(time_brute_force(points)?);
    }
    for r in &reports {
        tracing::info!(
            algo = r.algo.as_str(),
            n = r.n,
            seconds = r.seconds,
            distance = r.distance,
            "closest_pair"
        );
    }
    if let [dc, bf] = reports.as_slice() {
        if !distances_agree(dc.distance, bf.distance, AGREEMENT_TOL) {
            bail!(
                "algorithms disagree: divide and conquer found {}, brute force found {}",
                dc.distance,
                bf.distance
            );
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use closest::api::{generate_points, GenCfg};

    #[test]
    fn both_runs_two_agreeing_reports() {
        let pts = generate_points(GenCfg::with_count(800), 5).unwrap();
        let reports = run_algorithms(&pts, Algo::Both).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].algo, AlgoName::DivideAndConquer);
        assert_eq!(reports[1].algo, AlgoName::BruteForce);
        assert!(reports.iter().all(|r| r.n == 800 && r.seconds >= 0.0));
    }

    #[test]
    fn single_algorithm_selection() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(1.0, 0.0),
        ];
        let dc = run_algorithms(&pts, Algo::Divide).unwrap();
        let bf = run_algorithms(&pts, Algo::Brute).unwrap();
        assert_eq!(dc.len(), 1);
        assert_eq!(bf.len(), 1);
        assert!((dc[0].distance - 1.0).abs() < 1e-12);
        assert!((bf[0].distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_points_is_an_error() {
        assert!(run_algorithms(&[Point::new(1.0, 2.0)], Algo::Both).is_err());
    }

    #[test]
    fn report_serializes_with_snake_case_names() {
        let pair = Pair::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let report = AlgoReport::new(AlgoName::BruteForce, 2, 0.5, &pair);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["algo"], "brute_force");
        assert_eq!(v["distance"], 5.0);
        assert_eq!(v["pair"][1][0], 3.0);
        assert!(report.to_string().contains("brute_force took 0.500000 seconds for 2 points"));
    }
}
