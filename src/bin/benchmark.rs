use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use rand::prelude::*;
use rayon::prelude::*;
use shortest_paths::{
    graphs::graph_factory::GraphFactory,
    logging::init_logging,
    search::path::ShortestPathTestCase,
    utility::{benchmark, gen_test_cases, get_progressbar_long_jobs, validate_path},
    Dijkstra, PathResult, Weight,
};
use tracing::{error, info};

/// Benchmarks random queries on a graph with integer weights and validates
/// every returned path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as .json adjacency map or .bincode file
    #[arg(short, long)]
    graph: PathBuf,

    /// Number of random queries
    #[arg(short, long, default_value_t = 1000)]
    number_of_queries: u32,

    /// Seed of the random number generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging(args.verbose) {
        eprintln!("unable to initialize logging: {}", err);
    }

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            eprintln!("{} of {} paths are invalid", failures, args.number_of_queries);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> PathResult<usize> {
    let graph = GraphFactory::from_file::<u64>(&args.graph)?;
    let dijkstra = Dijkstra::new(&graph);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let requests = gen_test_cases(&graph, args.number_of_queries, &mut rng);

    // Reference distances come from full one to all searches.
    let bar = get_progressbar_long_jobs("Generating test cases", requests.len() as u64);
    let test_cases = requests
        .par_iter()
        .progress_with(bar)
        .map(|request| -> PathResult<ShortestPathTestCase<String, u64>> {
            let tree = dijkstra.shortest_path_tree(request.source())?;
            let distance = tree.distance(request.target())?;
            Ok(ShortestPathTestCase {
                request: request.clone(),
                distance: Some(distance).filter(Weight::is_finite),
            })
        })
        .collect::<PathResult<Vec<_>>>()?;

    let average_duration = benchmark(&dijkstra, &requests);
    println!("average sequential query took {:?}", average_duration);

    let start = Instant::now();
    let paths = dijkstra.shortest_paths_par(&requests)?;
    println!(
        "{} parallel queries took {:?}",
        requests.len(),
        start.elapsed()
    );

    let mut failures = 0;
    for (test_case, path) in test_cases.iter().zip(paths) {
        let result = path
            .map_err(|err| err.to_string())
            .and_then(|path| validate_path(&graph, test_case, &path));
        if let Err(reason) = result {
            error!(request = ?test_case.request, %reason, "invalid path");
            failures += 1;
        }
    }
    info!(failures, "validation finished");

    Ok(failures)
}
