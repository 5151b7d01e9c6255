use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use percmap::prelude::*;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "percmap")]
#[command(about = "Perceptual-map segmentation runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze a scenario file and write a JSON report
    Run {
        /// Scenario JSON: points, reference pair, tolerances, individuals
        #[arg(long)]
        input: String,
        /// Individuals CSV with dim1/dim2 columns; overrides the scenario's
        /// inline individuals
        #[arg(long)]
        individuals: Option<String>,
        #[arg(long)]
        out: String,
    },
    /// Print the engine version and default configuration
    Report,
}

fn default_tolerance() -> f64 {
    0.25
}
fn default_core_tolerance() -> f64 {
    0.2
}
fn default_margin() -> f64 {
    1.0
}

#[derive(Deserialize)]
struct Scenario {
    /// Point configuration on the two displayed dimensions.
    points: Vec<[f64; 2]>,
    /// Indices of the two reference points.
    reference: [usize; 2],
    /// x_min, x_max, y_min, y_max; derived from the points when absent.
    #[serde(default)]
    viewport: Option<[f64; 4]>,
    #[serde(default = "default_margin")]
    margin: f64,
    #[serde(default = "default_tolerance")]
    tolerance: f64,
    #[serde(default = "default_core_tolerance")]
    core_tolerance: f64,
    /// Seed for the corner tie-break RNG.
    #[serde(default)]
    seed: u64,
    #[serde(default)]
    individuals: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            individuals,
            out,
        } => run(&input, individuals.as_deref(), &out),
        Action::Report => report(),
    }
}

fn run(input: &str, individuals_csv: Option<&str>, out: &str) -> Result<()> {
    tracing::info!(input, out, "run");
    let raw = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let scenario: Scenario =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {input}"))?;

    let points: Vec<Vec2<f64>> = scenario
        .points
        .iter()
        .map(|p| Vec2::new(p[0], p[1]))
        .collect();
    let individuals: Vec<Individual> = match individuals_csv {
        Some(path) => read_individuals_csv(path)?,
        None => scenario
            .individuals
            .iter()
            .map(|s| Individual::new(s[0], s[1]))
            .collect(),
    };
    tracing::info!(
        points = points.len(),
        individuals = individuals.len(),
        "scenario"
    );

    let viewport = match scenario.viewport {
        Some([x_min, x_max, y_min, y_max]) => Viewport::new(x_min, x_max, y_min, y_max)?,
        None => Viewport::around(&points, scenario.margin)?,
    };
    let cfg = EngineCfg {
        tolerance: scenario.tolerance,
        core_tolerance: scenario.core_tolerance,
        geom: GeomCfg::default(),
    };
    let analysis = analyze(
        &points,
        ReferencePair {
            a: scenario.reference[0],
            b: scenario.reference[1],
        },
        viewport,
        &individuals,
        cfg,
        TieToken {
            seed: scenario.seed,
        },
    )?;
    tracing::info!(
        bisector_case = analysis.bisector.case.label(),
        west_case = analysis.west.case.label(),
        east_case = analysis.east.case.label(),
        "clipped"
    );

    let report = serde_json::json!({
        "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "engine_version": percmap::VERSION,
        "params": {
            "input": input,
            "tolerance": scenario.tolerance,
            "core_tolerance": scenario.core_tolerance,
            "seed": scenario.seed,
            "individuals": individuals.len(),
        },
        "lines": {
            "bisector": line_json(&analysis.bisector),
            "west": line_json(&analysis.west),
            "east": line_json(&analysis.east),
        },
        "segments": segments_json(&analysis.percentages),
    });
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

fn report() -> Result<()> {
    let cfg = EngineCfg::default();
    let obj = serde_json::json!({
        "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "engine_version": percmap::VERSION,
        "defaults": {
            "tolerance": cfg.tolerance,
            "core_tolerance": cfg.core_tolerance,
        },
        "systems": SegmentSystem::ALL.iter().map(|s| s.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn line_json(line: &ClippedLine) -> serde_json::Value {
    serde_json::json!({
        "case": line.case.label(),
        "start": [line.start.x, line.start.y],
        "end": [line.end.x, line.end.y],
    })
}

fn segments_json(pct: &SegmentPercentages) -> serde_json::Value {
    let mut systems = serde_json::Map::new();
    for (system, shares) in &pct.systems {
        let mut inner = serde_json::Map::new();
        for (code, share) in shares {
            inner.insert(code.to_string(), serde_json::json!(share));
        }
        systems.insert(system.name().to_string(), serde_json::Value::Object(inner));
    }
    serde_json::Value::Object(systems)
}

fn read_individuals_csv(path: &str) -> Result<Vec<Individual>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {path}"))?;
    let df = lf.select([col("dim1"), col("dim2")]).collect()?;
    tracing::info!(rows = df.height(), "individuals_csv");
    let dim1 = df.column("dim1")?.f64()?;
    let dim2 = df.column("dim2")?.f64()?;
    let mut individuals = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        if let (Some(d1), Some(d2)) = (dim1.get(i), dim2.get(i)) {
            individuals.push(Individual::new(d1, d2));
        }
    }
    Ok(individuals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn run_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scenario.json");
        let out = dir.path().join("report.json");
        let scenario = serde_json::json!({
            "points": [[-1.0, 0.0], [1.0, 0.0], [0.3, 0.8]],
            "reference": [0, 1],
            "individuals": [[-1.5, 0.2], [0.1, -0.4], [1.2, 0.0]],
            "seed": 7
        });
        std::fs::write(&input, serde_json::to_vec(&scenario).unwrap()).unwrap();
        run(input.to_str().unwrap(), None, out.to_str().unwrap()).unwrap();

        let report: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(report["lines"]["bisector"]["case"], "ZeroB");
        let base = report["segments"]["base"].as_object().unwrap();
        assert_eq!(base.len(), 3);
        let total: f64 = base.values().map(|v| v.as_f64().unwrap()).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn csv_individuals_parse() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("individuals.csv");
        std::fs::write(&csv, "dim1,dim2\n-1.5,0.2\n0.1,-0.4\n1.2,0.0\n").unwrap();
        let individuals = read_individuals_csv(csv.to_str().unwrap()).unwrap();
        assert_eq!(individuals.len(), 3);
        assert!((individuals[0].dim1 + 1.5).abs() < 1e-12);
        assert!(individuals[2].dim2.abs() < 1e-12);
    }
}
