//! Timing probe: one generated point set, both algorithms, wall-clock each.
//!
//! Usage: `cargo run --release -p closest --example timing_probe -- [count] [seed]`

use std::time::Instant;

use closest::api::{
    closest_pair_brute_force, distances_agree, generate_points, GenCfg, PreparedPoints,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(25_000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let points = generate_points(GenCfg::with_count(count), seed).expect("valid generator cfg");

    let dc_start = Instant::now();
    let prepared = PreparedPoints::new(&points);
    let (dc, stats) = prepared
        .closest_pair_with_stats()
        .expect("need at least two points");
    let dc_elapsed = dc_start.elapsed().as_secs_f64();

    let bf_start = Instant::now();
    let bf = closest_pair_brute_force(&points).expect("need at least two points");
    let bf_elapsed = bf_start.elapsed().as_secs_f64();

    println!("n={count} seed={seed}");
    println!("divide_and_conquer secs={dc_elapsed:.6} pair={dc} stats={stats:?}");
    println!("brute_force        secs={bf_elapsed:.6} pair={bf}");
    assert!(
        distances_agree(dc.distance(), bf.distance(), 1e-9),
        "algorithms disagree: {} vs {}",
        dc.distance(),
        bf.distance()
    );
}
