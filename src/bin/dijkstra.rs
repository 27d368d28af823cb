use std::{collections::BTreeMap, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use shortest_paths::{
    graphs::graph_factory::GraphFactory, logging::init_logging, Dijkstra, DijkstraConfig, Graph,
    PathFinding, PathResult, Weight,
};
use tracing::{error, info};

/// Computes a shortest path, or all shortest distances, in a graph file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as .json adjacency map or .bincode file
    #[arg(short, long)]
    graph: PathBuf,

    /// Start node
    #[arg(short, long)]
    source: String,

    /// End node. Without it the distances to all reachable nodes are printed.
    #[arg(short, long)]
    target: Option<String>,

    /// Type of the edge weights in the file
    #[arg(short, long, value_enum, default_value = "integer")]
    weights: WeightType,

    /// Abort after closing this many nodes
    #[arg(long)]
    max_expanded: Option<usize>,

    /// Skip the check for negative edge weights
    #[arg(long)]
    no_weight_validation: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, ValueEnum, Clone)]
enum WeightType {
    Integer,
    Float,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging(args.verbose) {
        eprintln!("unable to initialize logging: {}", err);
    }

    let result = match args.weights {
        WeightType::Integer => run::<u64>(&args),
        WeightType::Float => run::<f64>(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "query failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run<W>(args: &Args) -> PathResult<()>
where
    W: Weight + Serialize + DeserializeOwned,
{
    let graph = GraphFactory::from_file::<W>(&args.graph)?;
    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );

    let config = DijkstraConfig::default()
        .with_weight_validation(!args.no_weight_validation)
        .with_max_expanded(args.max_expanded);
    let dijkstra = Dijkstra::with_config(&graph, config);

    if let Some(target) = &args.target {
        let path = dijkstra.shortest_path(&args.source, target)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&path)?);
        } else if path.is_reachable() {
            println!("shortest path: {}", path.vertices.join(" -> "));
            println!("distance: {}", path.distance);
        } else {
            println!("there is no path from {} to {}", args.source, target);
        }
        return Ok(());
    }

    let distances: BTreeMap<String, W> = dijkstra
        .shortest_distances(&args.source)?
        .into_iter()
        .collect();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&distances)?);
    } else {
        for (node, distance) in &distances {
            println!("{}: {}", node, distance);
        }
    }

    Ok(())
}
