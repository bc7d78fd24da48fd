use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spanwood::graph::io;
use spanwood::{
    GeneratorConfig, Graph, GraphFormat, GraphValidator, MinimumSpanningTree, Representation,
    Strategy,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "spanwood workspace automation", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a random connected graph to a file
    Generate {
        /// Output file; the format is taken from its extension unless --format is given
        output: PathBuf,

        /// JSON file with a generator configuration; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        vertices: Option<usize>,

        /// Percentage of vertex pairs connected (1-100)
        #[arg(long)]
        density: Option<u8>,

        #[arg(long)]
        max_weight: Option<u32>,

        #[arg(long)]
        seed: Option<u64>,

        /// matrix, list, edges or json
        #[arg(long)]
        format: Option<GraphFormat>,

        /// Representation recorded in json output
        #[arg(long, default_value = "matrix")]
        representation: Representation,
    },

    /// Compute a minimum spanning tree of a graph file
    Mst {
        input: PathBuf,

        /// kruskal, prim or prim:<start vertex>
        #[arg(long, default_value = "kruskal")]
        strategy: Strategy,

        /// Representation to load the graph into
        #[arg(long, default_value = "matrix")]
        representation: Representation,

        /// Input format; taken from the extension when omitted
        #[arg(long)]
        format: Option<GraphFormat>,

        /// Write the tree here (format from its extension) instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["mst_benchmark", "graph_benchmark", "disjoint_set_benchmark"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Generate {
            output,
            config,
            vertices,
            density,
            max_weight,
            seed,
            format,
            representation,
        } => {
            let mut generator = match config {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    serde_json::from_str(&text)
                        .with_context(|| format!("Invalid generator config {}", path.display()))?
                }
                None => GeneratorConfig::default(),
            };
            generator.vertices = vertices.unwrap_or(generator.vertices);
            generator.density = density.unwrap_or(generator.density);
            generator.max_weight = max_weight.unwrap_or(generator.max_weight);
            generator.seed = seed.or(generator.seed);

            let format = resolve_format(format, &output)?;
            generate(&generator, representation, &output, format)?;
        }
        Commands::Mst {
            input,
            strategy,
            representation,
            format,
            output,
        } => {
            let format = resolve_format(format, &input)?;
            spanning_tree(&input, format, representation, strategy, output.as_deref())?;
        }
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn resolve_format(format: Option<GraphFormat>, path: &Path) -> Result<GraphFormat> {
    format
        .or_else(|| GraphFormat::from_path(path))
        .with_context(|| format!("Cannot tell the format of {}; pass --format", path.display()))
}

fn generate(
    config: &GeneratorConfig,
    representation: Representation,
    output: &Path,
    format: GraphFormat,
) -> Result<()> {
    let mut graph = representation.empty();
    graph.generate(config).context("Failed to generate graph")?;
    io::save_file(&graph, output, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        vertices = graph.vertices(),
        edges = graph.edge_count(),
        path = %output.display(),
        %format,
        "graph written"
    );
    Ok(())
}

fn spanning_tree(
    input: &Path,
    format: GraphFormat,
    representation: Representation,
    strategy: Strategy,
    output: Option<&Path>,
) -> Result<()> {
    let graph = io::load_file(input, format, representation)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    GraphValidator::validate_connected(&graph)
        .with_context(|| format!("{} has no spanning tree", input.display()))?;

    let start = Instant::now();
    let tree = strategy.spanning_tree(&graph)?;
    info!(
        %strategy,
        %representation,
        vertices = tree.vertices(),
        total_weight = tree.total_weight(),
        elapsed = ?start.elapsed(),
        "spanning tree built"
    );

    match output {
        Some(path) => {
            let format = resolve_format(None, path)?;
            io::save_file(&tree, path, format)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Tree written to {}", path.display());
        }
        None => {
            print!("{tree}");
            println!("Total weight: {}", tree.total_weight());
        }
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--benches", "--release", "-p", "spanwood"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Benchmark: {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "-p", "spanwood", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd.status().with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark {bench} failed");
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct BenchResult {
    mean_ns: f64,
    ops_per_sec: f64,
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results: BTreeMap<String, BenchResult> = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_dir = Path::new("benchmark_results");
    fs::create_dir_all(report_dir)?;

    use std::fmt::Write as _;
    let mut report = String::new();
    writeln!(report, "# Benchmark Report")?;
    writeln!(report)?;
    writeln!(report, "| Benchmark | Mean | Ops/s |")?;
    writeln!(report, "|---|---|---|")?;
    for (name, result) in &results {
        writeln!(
            report,
            "| {name} | {} | {} |",
            format_time(result.mean_ns),
            format_ops(result.ops_per_sec)
        )?;
    }

    let report_path = report_dir.join("report.md");
    fs::write(&report_path, report)?;
    fs::write(
        report_dir.join("report.json"),
        serde_json::to_string_pretty(&results)?,
    )?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns > 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion`, reading `<benchmark id>/new/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, BenchResult>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                collect_results(root, &path, results);
            }
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Only the latest run; `base` holds the previous one.
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };
        let Ok(id) = bench_dir.strip_prefix(root) else { continue };

        let mean_ns = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
            .unwrap_or(0.0);
        if mean_ns > 0.0 {
            results.insert(
                id.display().to_string(),
                BenchResult {
                    mean_ns,
                    ops_per_sec: 1e9 / mean_ns,
                },
            );
        }
    }
}
