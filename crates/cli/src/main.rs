mod provenance;
mod report;
mod sweep;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use closest::api::{generate_points, load_points, save_points, GenCfg, DEFAULT_UPPER, STRIP_WINDOW};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Payload};
use report::Algo;
use sweep::SweepCfg;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair data generation and benchmark runner")]
struct Cmd {
    /// Log at DEBUG instead of INFO (adds recursion counters)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a random point file (count line, then one "x y" line per point)
    Generate {
        #[arg(long, default_value_t = 25_000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Exclusive upper bound for both coordinates (at most 1e150)
        #[arg(long, default_value_t = DEFAULT_UPPER)]
        upper: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Load a point file and time the closest-pair algorithms on it
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Both)]
        algo: Algo,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time both algorithms over generated inputs of several sizes; write a CSV table
    Sweep {
        #[arg(long, value_delimiter = ',', default_values_t = vec![1_000, 5_000, 25_000])]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Skip brute force above this size
        #[arg(long, default_value_t = 25_000)]
        brute_max: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a provenance JSON block; optionally summarize a sweep table
    Report {
        #[arg(long)]
        sweep: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate {
            count,
            seed,
            upper,
            out,
        } => generate(count, seed, upper, &out),
        Action::Run { input, algo, json } => run(&input, algo, json),
        Action::Sweep {
            sizes,
            seed,
            brute_max,
            out,
        } => sweep(
            SweepCfg {
                sizes,
                seed,
                upper: DEFAULT_UPPER,
                brute_max,
            },
            &out,
        ),
        Action::Report { sweep } => report(sweep.as_deref()),
    }
}

fn generate(count: usize, seed: u64, upper: f64, out: &Path) -> Result<()> {
    tracing::info!(count, seed, upper, out = %out.display(), "generate");
    let points = generate_points(GenCfg { count, upper }, seed)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    save_points(out, &points)?;
    let payload = Payload::new(
        "generate",
        serde_json::json!({ "count": count, "seed": seed, "upper": upper }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn run(input: &Path, algo: Algo, json: bool) -> Result<()> {
    tracing::info!(input = %input.display(), ?algo, "run");
    let points =
        load_points(input).with_context(|| format!("loading points from {}", input.display()))?;
    tracing::debug!(n = points.len(), "points_loaded");
    let reports = report::run_algorithms(&points, algo)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let blocks: Vec<String> = reports.iter().map(ToString::to_string).collect();
        println!("{}", blocks.join("\n-------------------------------------------------\n"));
    }
    Ok(())
}

fn sweep(cfg: SweepCfg, out: &Path) -> Result<()> {
    tracing::info!(sizes = ?cfg.sizes, seed = cfg.seed, brute_max = cfg.brute_max, "sweep");
    let rows = sweep::run_sweep(&cfg)?;
    let mut df = sweep::to_frame(&rows)?;
    sweep::write_csv(&mut df, out)?;
    tracing::info!(rows = df.height(), cols = df.width(), "sweep_table_written");
    let payload = Payload::new(
        "sweep",
        serde_json::json!({
            "sizes": cfg.sizes,
            "seed": cfg.seed,
            "upper": cfg.upper,
            "brute_max": cfg.brute_max
        }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(sweep_table: Option<&Path>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "closest_version": closest::VERSION,
        "strip_window": STRIP_WINDOW,
        "default_upper": DEFAULT_UPPER
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    if let Some(path) = sweep_table {
        let df = sweep::read_csv(path).with_context(|| format!("reading {}", path.display()))?;
        tracing::info!(rows = df.height(), cols = df.width(), "sweep_table_shape");
        println!("{df}");
    }
    Ok(())
}
