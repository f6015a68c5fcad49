use std::env;
use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use shortest_path::graph::generators::generate_random;
use shortest_path::graph::{Graph, GraphKind, MixedGraph};
use shortest_path::{brandes, Dijkstra, IndexedBrandes};

/// Command line options
struct Options {
    sizes: Vec<usize>,
    edge_factor: f64,
    seed: u64,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            sizes: vec![500, 1_000, 2_000, 5_000],
            edge_factor: 2.0,
            seed: 42,
            json: false,
        }
    }
}

/// One line of the summary table
#[derive(Debug, Serialize)]
struct Row {
    nodes: usize,
    edges: usize,
    keyed_ms: f64,
    indexed_ms: f64,
    parallel_ms: f64,
    dijkstra_ms: f64,
    reached: usize,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--sizes" => {
                let value = args.next().ok_or("--sizes needs a value")?;
                options.sizes = value
                    .split(',')
                    .map(|size| size.trim().parse::<usize>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| format!("invalid --sizes {:?}: {}", value, e))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value
                    .parse()
                    .map_err(|e| format!("invalid --seed {:?}: {}", value, e))?;
            }
            "--edge-factor" => {
                let value = args.next().ok_or("--edge-factor needs a value")?;
                options.edge_factor = value
                    .parse()
                    .map_err(|e| format!("invalid --edge-factor {:?}: {}", value, e))?;
            }
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }

    Ok(options)
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Builds the path DAG from every source with the keyed builder
fn run_keyed(graph: &MixedGraph<usize>) -> shortest_path::Result<(Duration, usize)> {
    let start = Instant::now();
    let mut reached = 0;
    for source in graph.nodes() {
        reached += brandes(graph, &source)?.stack.len();
    }
    Ok((start.elapsed(), reached))
}

/// Same work through one reused indexed runner
fn run_indexed(graph: &MixedGraph<usize>) -> shortest_path::Result<(Duration, usize)> {
    let start = Instant::now();
    let mut runner = IndexedBrandes::new(graph)?;
    let mut reached = 0;
    for source in 0..runner.order() {
        reached += runner.compute(source)?.stack().len();
        runner.clear_stack();
    }
    Ok((start.elapsed(), reached))
}

/// Same work spread over the rayon pool, one runner per worker
fn run_parallel(graph: &MixedGraph<usize>) -> shortest_path::Result<(Duration, usize)> {
    let start = Instant::now();
    let template = IndexedBrandes::new(graph)?;

    let reached = (0..template.order())
        .into_par_iter()
        .map_init(
            || template.clone(),
            |runner, source| -> shortest_path::Result<usize> {
                let count = runner.compute(source)?.stack().len();
                runner.clear_stack();
                Ok(count)
            },
        )
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    Ok((start.elapsed(), reached))
}

fn run_dijkstra(graph: &MixedGraph<usize>) -> shortest_path::Result<Duration> {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let distances = dijkstra.single_source_lengths(graph, &0)?;
    info!("dijkstra from 0 reached {} nodes", distances.len());
    Ok(start.elapsed())
}

fn benchmark(size: usize, options: &Options) -> shortest_path::Result<Row> {
    let graph = generate_random(size, options.edge_factor, GraphKind::Directed, options.seed);
    if !options.json {
        println!("\nGraph has {} nodes and {} edges", graph.order(), graph.size());
    }

    let (keyed_time, keyed_reached) = run_keyed(&graph)?;
    let (indexed_time, indexed_reached) = run_indexed(&graph)?;
    let (parallel_time, parallel_reached) = run_parallel(&graph)?;
    let dijkstra_time = run_dijkstra(&graph)?;

    if keyed_reached != indexed_reached || keyed_reached != parallel_reached {
        warn!(
            "runs disagree on reached nodes: keyed {}, indexed {}, parallel {}",
            keyed_reached, indexed_reached, parallel_reached
        );
    }

    if !options.json {
        println!("  - Keyed brandes:    {:?}", keyed_time);
        println!("  - Indexed brandes:  {:?}", indexed_time);
        println!("  - Parallel indexed: {:?}", parallel_time);
        println!("  - Dijkstra (1 src): {:?}", dijkstra_time);
    }

    Ok(Row {
        nodes: graph.order(),
        edges: graph.size(),
        keyed_ms: millis(keyed_time),
        indexed_ms: millis(indexed_time),
        parallel_ms: millis(parallel_time),
        dijkstra_ms: millis(dijkstra_time),
        reached: keyed_reached,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = parse_args()?;

    if !options.json {
        println!("=====================================================");
        println!("Benchmark: keyed vs indexed Brandes path DAGs");
        println!("Edge factor: {} edges per node (on average)", options.edge_factor);
        println!("Seed: {}, threads: {}", options.seed, rayon::current_num_threads());
        println!("=====================================================");
    }

    let mut rows = Vec::with_capacity(options.sizes.len());
    for &size in &options.sizes {
        rows.push(benchmark(size, &options)?);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<10} | {:<10}",
        "Nodes", "Keyed (ms)", "Indexed (ms)", "Parallel (ms)", "SpeedUp", "Par-SpeedUp"
    );
    println!("-----------------------------------------------------");

    for row in &rows {
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<12.2} | {:<10.2} | {:<10.2}",
            row.nodes,
            row.keyed_ms,
            row.indexed_ms,
            row.parallel_ms,
            row.keyed_ms / row.indexed_ms,
            row.keyed_ms / row.parallel_ms
        );
    }

    Ok(())
}
