use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graham::rand::{sample_cloud, CloudCfg};
use graham::verify::right_turns;
use graham::{close_polygon, graham_scan, graham_scan_with, HullCfg, Point};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points, to_pairs, write_points, HullDoc};
use provenance::{HullSummary, Provenance};

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Convex hulls of planar point sets (Graham Scan)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file and write it as JSON
    Run {
        /// Points as JSON `[[x, y], ...]` or CSV with `x,y` headers
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Fail on inputs of fewer than three points instead of echoing them
        #[arg(long)]
        reject_small: bool,
    },
    /// Hull of the built-in sample set, printed as JSON for plotting
    Demo,
    /// Write a seeded random point cloud
    Sample {
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        x_min: f64,
        #[arg(long, default_value_t = 100.0)]
        x_max: f64,
        #[arg(long, default_value_t = 1.0)]
        y_min: f64,
        #[arg(long, default_value_t = 100.0)]
        y_max: f64,
        /// Do not put the origin in the cloud
        #[arg(long)]
        no_anchor: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Turn a `run` output into a closed polygon outline (x,y CSV)
    Figure {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

const DEMO_POINTS: [[f64; 2]; 9] = [
    [1.0, 1.0],
    [2.0, 5.0],
    [3.0, 2.0],
    [4.0, 4.0],
    [5.0, 2.0],
    [6.0, 3.0],
    [2.0, 3.0],
    [3.0, 4.0],
    [5.0, 3.0],
];

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            reject_small,
        } => run(&input, &out, reject_small),
        Action::Demo => demo(),
        Action::Sample {
            n,
            seed,
            x_min,
            x_max,
            y_min,
            y_max,
            no_anchor,
            out,
        } => {
            let cfg = CloudCfg {
                n,
                x_range: (x_min, x_max),
                y_range: (y_min, y_max),
                anchor_at_origin: !no_anchor,
            };
            sample(cfg, seed, &out)
        }
        Action::Figure { from, out } => figure(&from, &out),
        Action::Report => report(),
    }
}

fn run(input: &Path, out: &Path, reject_small: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), reject_small, "run");
    let pts = read_points(input)?;
    let cfg = if reject_small {
        HullCfg::rejecting_small()
    } else {
        HullCfg::default()
    };
    let report = graham_scan_with(&pts, cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;

    let bad = right_turns(&report.hull);
    if !bad.is_empty() {
        // raw-slope order was not angular around the pivot
        tracing::warn!(
            vertices = ?bad,
            "hull has right turns; input is not positioned for slope ordering"
        );
    }
    tracing::info!(
        points = pts.len(),
        vertices = report.hull.len(),
        pops = report.stats.pops,
        "hull"
    );

    points::ensure_parent(out)?;
    let doc = HullDoc::from(&report);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Provenance::new("run", serde_json::json!({ "reject_small": reject_small }))
        .input(input)
        .hull(HullSummary::from(&report))
        .write(out)?;
    Ok(())
}

fn demo() -> Result<()> {
    let pts: Vec<Point> = DEMO_POINTS.iter().map(|p| Point::new(p[0], p[1])).collect();
    let hull = graham_scan(&pts)?;
    tracing::info!(vertices = hull.len(), "demo");
    let obj = serde_json::json!({
        "title": "Convex Hull using Graham Scan",
        "points": to_pairs(&pts),
        "polygon": to_pairs(&close_polygon(&hull)),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn sample(cfg: CloudCfg, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(n = cfg.n, seed, out = %out.display(), "sample");
    let pts = sample_cloud(cfg, seed);
    write_points(out, &pts)?;
    Provenance::new(
        "sample",
        serde_json::json!({
            "n": cfg.n,
            "seed": seed,
            "x_range": [cfg.x_range.0, cfg.x_range.1],
            "y_range": [cfg.y_range.0, cfg.y_range.1],
            "anchor_at_origin": cfg.anchor_at_origin,
        }),
    )
    .write(out)?;
    Ok(())
}

fn figure(from: &Path, out: &Path) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), "figure");
    let bytes = std::fs::read(from).with_context(|| format!("reading {}", from.display()))?;
    let doc: HullDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing hull document {}", from.display()))?;
    let outline = close_polygon(&doc.hull_points());
    write_points(out, &outline)?;
    Provenance::new("figure", serde_json::json!({ "closed": true }))
        .input(from)
        .hull(doc.summary())
        .write(out)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "graham_version": graham::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provenance::Sidecar;
    use tempfile::tempdir;

    #[test]
    fn run_writes_hull_and_provenance() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        std::fs::write(&input, serde_json::to_vec(&DEMO_POINTS).unwrap()).unwrap();
        let out = dir.path().join("out/hull.json");
        run(&input, &out, false).unwrap();

        let doc: HullDoc = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc.pivot, [1.0, 1.0]);
        assert_eq!(
            doc.hull,
            vec![[1.0, 1.0], [5.0, 2.0], [6.0, 3.0], [4.0, 4.0], [2.0, 5.0]]
        );
        assert_eq!(doc.stats.input, 9);

        let sidecar = dir.path().join("out/hull.provenance.json");
        let prov: Sidecar = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov.command, "run");
        assert_eq!(prov.inputs, vec![input.display().to_string()]);
        let summary = prov.hull.unwrap();
        assert_eq!(summary.points, 9);
        assert_eq!(summary.pivot, [1.0, 1.0]);
        assert_eq!(summary.vertices, 5);
    }

    #[test]
    fn run_reject_small_surfaces_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("two.json");
        std::fs::write(&input, "[[0, 0], [1, 1]]").unwrap();
        let out = dir.path().join("hull.json");
        let err = run(&input, &out, true).unwrap_err();
        assert!(format!("{err:#}").contains("need at least 3 points"));
        assert!(!out.exists());
    }

    #[test]
    fn figure_closes_the_outline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.json");
        std::fs::write(&input, "[[0, 0], [4, 0], [2, 4], [2, 1]]").unwrap();
        let hull_path = dir.path().join("hull.json");
        run(&input, &hull_path, false).unwrap();

        let csv = dir.path().join("outline.csv");
        figure(&hull_path, &csv).unwrap();
        let outline = read_points(&csv).unwrap();
        let prov: Sidecar = serde_json::from_slice(
            &std::fs::read(dir.path().join("outline.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov.command, "figure");
        assert_eq!(prov.hull.map(|h| h.vertices), Some(3));
        assert_eq!(
            outline,
            vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(2.0, 4.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn sample_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let cfg = CloudCfg {
            n: 20,
            ..CloudCfg::default()
        };
        sample(cfg, 5, &a).unwrap();
        sample(cfg, 5, &b).unwrap();
        assert_eq!(read_points(&a).unwrap(), read_points(&b).unwrap());
        let pts = read_points(&a).unwrap();
        assert_eq!(pts.len(), 20);
        assert_eq!(pts[0], Point::zeros());
    }
}
