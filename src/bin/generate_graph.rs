use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::prelude::*;
use shortest_paths::{
    graphs::{
        graph_factory::{GraphFactory, LabeledGraph},
        graph_functions::all_edges,
    },
    logging::init_logging,
    utility::random_graph,
    Graph, HashGraph,
};
use tracing::info;

/// Writes a random directed graph with integer weights.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes, labeled 0 to nodes - 1
    #[arg(short, long)]
    nodes: u32,

    /// Number of directed edges
    #[arg(short, long)]
    edges: usize,

    /// Largest edge weight
    #[arg(short, long, default_value_t = 100)]
    max_weight: u32,

    /// Seed of the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Outfile, .json or .bincode
    #[arg(short, long)]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging(args.verbose) {
        eprintln!("unable to initialize logging: {}", err);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = random_graph(args.nodes, args.edges, args.max_weight, &mut rng);

    let mut labeled: LabeledGraph<u64> = HashGraph::new();
    graph
        .nodes()
        .for_each(|vertex| labeled.add_node(vertex.to_string()));
    for (tail, head, weight) in all_edges(&graph) {
        labeled.add_edge(tail.to_string(), head.to_string(), weight as u64);
    }

    if let Err(err) = GraphFactory::to_file(&labeled, &args.output) {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }

    info!(
        nodes = labeled.number_of_nodes(),
        edges = labeled.number_of_edges(),
        output = %args.output.display(),
        "graph written"
    );
    ExitCode::SUCCESS
}
