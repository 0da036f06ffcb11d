use crate::domain::config::GeneratorConfig;
use crate::domain::graph::Graph;
use crate::infrastructure::edge_list::{read_edge_list_dir, read_edge_list_file, write_edge_list_file};
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::geometric_generator::GeometricGraphGenerator;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::usecase::analyze::analyze_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::generate::generate_graphs;
use crate::usecase::stats::GraphReport;
use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Generate {
            config,
            output,
            seed,
            emit_events,
        } => {
            let (sink, printer) = event_sink(emit_events);
            let seed = resolve_seed(seed);

            let mut rng = StdRng::seed_from_u64(seed);
            let graphs = generate_graphs(&[config], &GeometricGraphGenerator, &mut rng, &sink).await?;
            write_graphs(&graphs, &[output], &sink).await?;

            finish(sink, printer, Vec::new()).await;
            eprintln!(
                "summary: seed={seed} nodes={} edges={}",
                graphs[0].node_count(),
                graphs[0].edge_count()
            );
            Ok(())
        }

        Cli::Suite {
            out_dir,
            seed,
            emit_events,
        } => {
            let (sink, printer) = event_sink(emit_events);
            let seed = resolve_seed(seed);

            let configs = GeneratorConfig::default_suite();
            let mut rng = StdRng::seed_from_u64(seed);
            let graphs = generate_graphs(&configs, &GeometricGraphGenerator, &mut rng, &sink).await?;
            let paths: Vec<PathBuf> = (1..=graphs.len())
                .map(|i| out_dir.join(format!("graph{i}.txt")))
                .collect();
            write_graphs(&graphs, &paths, &sink).await?;

            finish(sink, printer, Vec::new()).await;
            eprintln!("summary: seed={seed} graphs={}", graphs.len());
            Ok(())
        }

        Cli::Analyze {
            source,
            lcc_out,
            json,
            emit_events,
        } => {
            let (sink, printer) = event_sink(emit_events);

            let inputs: Vec<(PathBuf, Graph)> = match &source {
                Source::File(path) => {
                    let graph = read_edge_list_file(path)
                        .await
                        .with_context(|| format!("reading edge list: {}", path.display()))?;
                    vec![(path.clone(), graph)]
                }
                Source::Dir(dir) => read_edge_list_dir(dir)
                    .await
                    .with_context(|| format!("scanning graph directory: {}", dir.display()))?,
            };
            eprintln!("loaded {} graph(s)", inputs.len());

            let detector = KosarajuSccDetector;
            let mut reports: Vec<GraphReport> = Vec::with_capacity(inputs.len());

            for (path, graph) in inputs.iter() {
                let name = path.display().to_string();
                crate::usecase::event::emit(
                    &sink,
                    AppEvent::GraphLoaded {
                        path: name.clone(),
                        nodes: graph.node_count(),
                        edges: graph.edge_count(),
                    },
                )
                .await;

                let analysis = analyze_graph(&name, graph, &detector, &sink).await?;

                if let Some(lcc_path) = lcc_out.as_ref() {
                    write_graphs(&[analysis.lcc.clone()], &[lcc_path.clone()], &sink).await?;
                }

                if !json {
                    print_report(&analysis.report);
                }
                reports.push(analysis.report);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }

            finish(sink, printer, reports).await;
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Source {
    File(PathBuf),
    Dir(PathBuf),
}

#[derive(Debug)]
enum Cli {
    Generate {
        config: GeneratorConfig,
        output: PathBuf,
        seed: Option<u64>,
        emit_events: bool,
    },
    Suite {
        out_dir: PathBuf,
        seed: Option<u64>,
        emit_events: bool,
    },
    Analyze {
        source: Source,
        lcc_out: Option<PathBuf>,
        json: bool,
        emit_events: bool,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph generate --nodes N --radius R --max-capacity C --max-cost K --out <file> [--seed S] [--emit-events]
        // <bin> graph suite --out-dir <dir> [--seed S] [--emit-events]
        // <bin> graph analyze (--in <file> | --dir <dir>) [--lcc-out <file>] [--json] [--emit-events]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "generate" => Self::parse_generate(args),
            "suite" => Self::parse_suite(args),
            "analyze" => Self::parse_analyze(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_generate(args: &[String]) -> Result<Self> {
        let mut nodes: Option<usize> = None;
        let mut radius: Option<f64> = None;
        let mut max_capacity: Option<u32> = None;
        let mut max_cost: Option<u32> = None;
        let mut output: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--nodes" | "-n" => {
                    i += 1;
                    nodes = Some(parse_value(args, i, "--nodes")?);
                }
                "--radius" | "-r" => {
                    i += 1;
                    radius = Some(parse_value(args, i, "--radius")?);
                }
                "--max-capacity" => {
                    i += 1;
                    max_capacity = Some(parse_value(args, i, "--max-capacity")?);
                }
                "--max-cost" => {
                    i += 1;
                    max_cost = Some(parse_value(args, i, "--max-cost")?);
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).map(PathBuf::from);
                }
                "--seed" => {
                    i += 1;
                    seed = Some(parse_value(args, i, "--seed")?);
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let config = GeneratorConfig::new(
            required(nodes, "--nodes")?,
            required(radius, "--radius")?,
            required(max_capacity, "--max-capacity")?,
            required(max_cost, "--max-cost")?,
        );
        config.validate()?;
        let output = required(output, "--out/--output")?;

        Ok(Cli::Generate {
            config,
            output,
            seed,
            emit_events,
        })
    }

    fn parse_suite(args: &[String]) -> Result<Self> {
        let mut out_dir: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--out-dir" => {
                    i += 1;
                    out_dir = args.get(i).map(PathBuf::from);
                }
                "--seed" => {
                    i += 1;
                    seed = Some(parse_value(args, i, "--seed")?);
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Suite {
            out_dir: required(out_dir, "--out-dir")?,
            seed,
            emit_events,
        })
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<PathBuf> = None;
        let mut dir: Option<PathBuf> = None;
        let mut lcc_out: Option<PathBuf> = None;
        let mut json = false;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).map(PathBuf::from);
                }
                "--dir" => {
                    i += 1;
                    dir = args.get(i).map(PathBuf::from);
                }
                "--lcc-out" => {
                    i += 1;
                    lcc_out = args.get(i).map(PathBuf::from);
                }
                "--json" => {
                    json = true;
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let source = match (input, dir) {
            (Some(path), None) => Source::File(path),
            (None, Some(dir)) => Source::Dir(dir),
            (Some(_), Some(_)) => {
                return Err(anyhow!(format!(
                    "--in and --dir are mutually exclusive\n\n{}",
                    usage()
                )))
            }
            (None, None) => return Err(anyhow!(format!("missing --in or --dir\n\n{}", usage()))),
        };

        if lcc_out.is_some() && matches!(source, Source::Dir(_)) {
            return Err(anyhow!("--lcc-out requires a single --in file"));
        }

        Ok(Cli::Analyze {
            source,
            lcc_out,
            json,
            emit_events,
        })
    }
}

fn parse_value<T>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
    raw.parse::<T>()
        .map_err(|e| anyhow!("invalid value for {flag}: {raw:?} ({e})"))
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!(format!("missing {flag}\n\n{}", usage())))
}

fn usage() -> &'static str {
    "Usage:\n  graph generate --nodes <n> --radius <r> --max-capacity <c> --max-cost <k> --out <file> [--seed <u64>] [--emit-events]\n  graph suite --out-dir <dir> [--seed <u64>] [--emit-events]\n  graph analyze (--in <file> | --dir <dir>) [--lcc-out <file>] [--json] [--emit-events]\n\nFormat:\n  Edge lists hold one `from to capacity cost` line per edge; --dir reads every *.txt file.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summaries go to stderr."
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| StdRng::from_entropy().next_u64())
}

fn event_sink(
    emit_events: bool,
) -> (Option<mpsc::Sender<AppEvent>>, Option<JoinHandle<()>>) {
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    if emit_events {
        (Some(tx), Some(spawn_ndjson_printer(rx)))
    } else {
        drop(rx);
        (None, None)
    }
}

async fn finish(
    sink: Option<mpsc::Sender<AppEvent>>,
    printer: Option<JoinHandle<()>>,
    reports: Vec<GraphReport>,
) {
    crate::usecase::event::emit(&sink, AppEvent::Finished { reports }).await;
    drop(sink);
    if let Some(handle) = printer {
        handle.await.ok();
    }
}

async fn write_graphs(
    graphs: &[Graph],
    paths: &[PathBuf],
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<()> {
    for (graph, path) in graphs.iter().zip(paths) {
        write_edge_list_file(path, graph)
            .await
            .with_context(|| format!("writing edge list: {}", path.display()))?;
        eprintln!("graph saved to file: {}", path.display());
        crate::usecase::event::emit(
            sink,
            AppEvent::GraphWritten {
                path: path.display().to_string(),
                edges: graph.edge_count(),
            },
        )
        .await;
    }
    Ok(())
}

fn print_report(report: &GraphReport) {
    eprintln!(
        "metrics: graph={} n={} edges={} components={} lcc_size={} lcc_edges={} max_out_degree={} max_in_degree={} avg_degree={:.4}",
        report.name,
        report.total_nodes,
        report.total_edges,
        report.components,
        report.metrics.size,
        report.lcc_edges,
        report.metrics.max_out_degree,
        report.metrics.max_in_degree,
        report.metrics.avg_degree
    );
}
