use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use closest::api::{
    closest_pair, closest_pair_brute_force, closest_pair_match, draw_uniform, solve, Algo,
    CloudCfg, CloudReplay, Point, PointCount, DIST_EPS,
};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{fmt_point, read_points, PairReport};
use provenance::{write_sidecar, Payload, Record};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair demos and experiment runner")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the built-in four-point sample and print the pair
    Demo,
    /// Solve a point set from a CSV/Parquet file with `x`,`y` columns
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Solver: `dc` (divide and conquer) or `brute`
        #[arg(long, default_value = "dc")]
        algo: String,
    },
    /// Draw a reproducible random cloud and solve it
    Random {
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Half-width of the sampling box
        #[arg(long, default_value_t = 1.0)]
        extent: f64,
        /// Round coordinates to multiples of this step
        #[arg(long)]
        snap: Option<f64>,
        /// Cross-check against brute force
        #[arg(long)]
        check: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Run { input, out, algo } => run(input, out, algo, cmd.tag),
        Action::Random {
            n,
            seed,
            index,
            extent,
            snap,
            check,
        } => random(n, CloudReplay { seed, index }, extent, snap, check, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn sample_points() -> Vec<Point> {
    vec![
        Point::new(32.0, 4.0),
        Point::new(7.0, 4.0),
        Point::new(6.0, 9.0),
        Point::new(2.0, 96.0),
    ]
}

fn demo() -> Result<()> {
    let (p1, p2) = closest_pair(&sample_points())?;
    println!(
        "P1: {}, P2: {}, d = {:.4}",
        fmt_point(p1),
        fmt_point(p2),
        p1.distance(&p2)
    );
    Ok(())
}

fn run(input: String, out: String, algo: String, tag: Option<String>) -> Result<()> {
    let algo = Algo::from_name(&algo).ok_or_else(|| anyhow!("unknown algo {algo:?}"))?;
    let points = read_points(Path::new(&input))?;
    tracing::info!(input, out, algo = algo.name(), n = points.len(), tag = ?tag, "run");

    let m = solve(&points, algo)?;
    tracing::info!(i = m.i, j = m.j, distance = m.distance, "solved");

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let row = PairReport::new(algo, points.len(), &m);
    std::fs::write(out_path, serde_json::to_vec_pretty(&row)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(json!({
        "algo": algo.name(),
        "input": input,
        "n": points.len(),
    }))
    .with_tag(tag);
    let prov = write_sidecar(out_path, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn random(
    n: usize,
    tok: CloudReplay,
    extent: f64,
    snap: Option<f64>,
    check: bool,
    tag: Option<String>,
) -> Result<()> {
    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        half_extent: extent,
        snap,
        ..CloudCfg::default()
    };
    let points = draw_uniform(cfg, tok)?;
    tracing::info!(n, seed = tok.seed, index = tok.index, tag = ?tag, "random");

    let m = closest_pair_match(&points)?;
    if check {
        let bf = closest_pair_brute_force(&points)?;
        if (bf.distance - m.distance).abs() >= DIST_EPS {
            bail!(
                "divide and conquer ({}) disagrees with brute force ({})",
                m.distance,
                bf.distance
            );
        }
        tracing::info!(distance = bf.distance, "brute force agrees");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&PairReport::new(Algo::DivideConquer, n, &m))?
    );
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Record::bare(tag))?);
    Ok(())
}
