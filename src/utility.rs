use std::{
    cmp::Ordering,
    time::{Duration, Instant},
};

use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rand::prelude::*;

use crate::{
    graphs::{hash_graph::HashGraph, Graph, Weight},
    search::{
        path::{Path, ShortestPathRequest, ShortestPathTestCase},
        PathFinding,
    },
};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Random directed graph on the vertices `0..number_of_vertices` with weights
/// in `0..=max_weight`. Self loops are not generated.
pub fn random_graph(
    number_of_vertices: u32,
    number_of_edges: usize,
    max_weight: u32,
    rng: &mut impl Rng,
) -> HashGraph<u32, u32> {
    let mut graph = HashGraph::new();
    (0..number_of_vertices).for_each(|vertex| graph.add_node(vertex));

    if number_of_vertices < 2 {
        return graph;
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = (tail + rng.gen_range(1..number_of_vertices)) % number_of_vertices;
        graph.add_edge(tail, head, rng.gen_range(0..=max_weight));
    }

    graph
}

/// Draws `number_of_test_cases` random source/target pairs.
pub fn gen_test_cases<G: Graph>(
    graph: &G,
    number_of_test_cases: u32,
    rng: &mut impl Rng,
) -> Vec<ShortestPathRequest<G::Node>> {
    let vertices: Vec<&G::Node> = graph.nodes().collect();
    if vertices.is_empty() {
        return Vec::new();
    }

    (0..number_of_test_cases)
        .filter_map(|_| {
            let source = *vertices.choose(rng)?;
            let target = *vertices.choose(rng)?;
            Some(ShortestPathRequest::new(source.clone(), target.clone()))
        })
        .collect()
}

/// Checks a returned path against the expected distance and against the
/// edges of the graph.
pub fn validate_path<G: Graph>(
    graph: &G,
    test_case: &ShortestPathTestCase<G::Node, G::Weight>,
    path: &Path<G::Node, G::Weight>,
) -> Result<(), String> {
    let Some(expected_distance) = test_case.distance else {
        if path.is_reachable() || path.distance.is_finite() {
            return Err("a path was found where there should be none".to_string());
        }
        return Ok(());
    };

    if path.distance.total_cmp(&expected_distance) != Ordering::Equal {
        return Err(format!(
            "wrong path distance {}, expected {}",
            path.distance, expected_distance
        ));
    }

    // Ensure fist and last vertex of path are source and target of request.
    if path.vertices.first() != Some(test_case.request.source()) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(test_case.request.target()) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let mut true_distance = <G::Weight as Weight>::ZERO;
    for (tail, head) in path.vertices.iter().tuple_windows() {
        let Some(weight) = graph.get_edge_weight(tail, head) else {
            return Err(format!("no edge between {:?} and {:?} found", tail, head));
        };
        true_distance = true_distance.saturating_add(weight);
    }

    if true_distance.total_cmp(&path.distance) != Ordering::Equal {
        return Err(format!(
            "edges of path sum up to {}, path claims {}",
            true_distance, path.distance
        ));
    }

    Ok(())
}

/// Minimum over all simple paths from `source` to `target`, `INFINITY` if
/// there is none. Exponential, only meant for small graphs.
pub fn brute_force_distance<G: Graph>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> G::Weight {
    let mut best = <G::Weight as Weight>::INFINITY;
    let mut stack = vec![(vec![source], <G::Weight as Weight>::ZERO)];

    while let Some((path, distance)) = stack.pop() {
        // path is never empty
        let Some(&last) = path.last() else { continue };
        if last == target {
            if distance.total_cmp(&best) == Ordering::Less {
                best = distance;
            }
            continue;
        }

        for (head, weight) in graph.out_edges(last) {
            if path.contains(&head) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(head);
            stack.push((extended, distance.saturating_add(weight)));
        }
    }

    best
}

/// Average duration of a query.
pub fn benchmark<N, W>(
    pathfinder: &dyn PathFinding<N, W>,
    requests: &[ShortestPathRequest<N>],
) -> Duration {
    let bar = get_progressbar_long_jobs("Benchmarking", requests.len() as u64);

    let mut total = Duration::ZERO;
    for request in requests {
        let start = Instant::now();
        let _ = pathfinder.shortest_path(request.source(), request.target());
        total += start.elapsed();
        bar.inc(1);
    }
    bar.finish_and_clear();

    total / requests.len().max(1) as u32
}
