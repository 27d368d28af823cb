use std::cmp::Ordering;

use ahash::HashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{
    error::{PathError, PathResult},
    graphs::{
        graph_functions::{contains_all, validate_weights},
        Graph, Weight,
    },
};

/// Counters of a single search, reported through `tracing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub expanded: usize,
    pub stale_discarded: usize,
    pub relaxations: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraConfig {
    /// Reject graphs with negative or NaN weights before searching.
    pub validate_weights: bool,
    /// Fail once more than this many vertices would be closed.
    pub max_expanded: Option<usize>,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        DijkstraConfig {
            validate_weights: true,
            max_expanded: None,
        }
    }
}

impl DijkstraConfig {
    pub fn with_weight_validation(mut self, validate_weights: bool) -> Self {
        self.validate_weights = validate_weights;
        self
    }

    pub fn with_max_expanded(mut self, max_expanded: Option<usize>) -> Self {
        self.max_expanded = max_expanded;
        self
    }
}

/// Runs Dijkstra from `source` until the queue is exhausted or `target` is
/// closed.
///
/// Stale queue entries of already expanded vertices are skipped when popped.
/// The distance popped together with a vertex is the one used for relaxing
/// its out edges. Edges into expanded vertices are never relaxed, which keeps
/// the predecessors acyclic even for unchecked negative weights.
pub fn dijkstra_search<G: Graph>(
    graph: &G,
    data: &mut dyn DijkstraData<G::Node, G::Weight>,
    expanded: &mut dyn VertexExpandedData<G::Node>,
    queue: &mut dyn VertexDistanceQueue<G::Node, G::Weight>,
    source: &G::Node,
    target: Option<&G::Node>,
    max_expanded: Option<usize>,
) -> PathResult<SearchStatistics> {
    let mut statistics = SearchStatistics::default();

    let zero = <G::Weight as Weight>::ZERO;
    data.set_distance(source.clone(), zero);
    queue.insert(source.clone(), zero);

    while let Some((tail, distance_tail)) = queue.pop() {
        if expanded.expand(&tail) {
            statistics.stale_discarded += 1;
            trace!(vertex = ?tail, distance = %distance_tail, "discarding stale queue entry");
            continue;
        }

        statistics.expanded += 1;
        if let Some(limit) = max_expanded {
            if statistics.expanded > limit {
                return Err(PathError::ExpansionLimitExceeded(limit));
            }
        }

        if target == Some(&tail) {
            break;
        }

        for (head, weight) in graph.out_edges(&tail) {
            if expanded.is_expanded(head) {
                continue;
            }
            let alternative_distance_head = distance_tail.saturating_add(weight);
            if alternative_distance_head.total_cmp(&data.get_distance(head)) == Ordering::Less {
                data.set_distance(head.clone(), alternative_distance_head);
                data.set_predecessor(head.clone(), tail.clone());
                queue.insert(head.clone(), alternative_distance_head);
                statistics.relaxations += 1;
            }
        }
    }

    Ok(statistics)
}

/// Dijkstra pathfinder over a borrowed, immutable graph.
///
/// Every query allocates its own queue, closed set and distance data, so a
/// single instance can answer queries from several threads at once.
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    config: DijkstraConfig,
}

impl<'a, G: Graph> Dijkstra<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self::with_config(graph, DijkstraConfig::default())
    }

    pub fn with_config(graph: &'a G, config: DijkstraConfig) -> Self {
        Dijkstra { graph, config }
    }

    /// Distances of all vertices reachable from `source`. Unreachable vertices
    /// are absent.
    pub fn shortest_distances(
        &self,
        source: &G::Node,
    ) -> PathResult<HashMap<G::Node, G::Weight>> {
        self.validate_graph()?;
        contains_all(self.graph, [source])?;
        let data = self.search(source, None)?;
        Ok(data.into_distances())
    }

    /// Runs one full search from `source` and keeps its predecessors, so paths
    /// to any number of targets can be read off afterwards.
    pub fn shortest_path_tree(
        &self,
        source: &G::Node,
    ) -> PathResult<ShortestPathTree<'a, G>> {
        self.validate_graph()?;
        contains_all(self.graph, [source])?;
        let data = self.search(source, None)?;
        Ok(ShortestPathTree {
            graph: self.graph,
            source: source.clone(),
            data,
        })
    }

    /// Answers independent requests in parallel. The outer error is a graph
    /// level failure, the inner results belong to the single requests.
    pub fn shortest_paths_par(
        &self,
        requests: &[ShortestPathRequest<G::Node>],
    ) -> PathResult<Vec<PathResult<Path<G::Node, G::Weight>>>> {
        self.validate_graph()?;
        Ok(requests
            .par_iter()
            .map(|request| self.single_pair(request.source(), request.target()))
            .collect())
    }

    fn validate_graph(&self) -> PathResult<()> {
        if self.config.validate_weights {
            validate_weights(self.graph)?;
        }
        Ok(())
    }

    fn single_pair(
        &self,
        source: &G::Node,
        target: &G::Node,
    ) -> PathResult<Path<G::Node, G::Weight>> {
        contains_all(self.graph, [source, target])?;
        let data = self.search(source, Some(target))?;
        Ok(data.get_path(target).unwrap_or_else(Path::unreachable))
    }

    fn search(
        &self,
        source: &G::Node,
        target: Option<&G::Node>,
    ) -> PathResult<DijkstraDataHashMap<G::Node, G::Weight>> {
        let mut data = DijkstraDataHashMap::new();
        let mut expanded = VertexExpandedDataHashSet::<G::Node>::new();
        let mut queue = VertexDistanceQueueBinaryHeap::<G::Node, G::Weight>::new();

        let statistics = dijkstra_search(
            self.graph,
            &mut data,
            &mut expanded,
            &mut queue,
            source,
            target,
            self.config.max_expanded,
        )?;

        debug!(
            source = ?source,
            target = ?target,
            expanded = statistics.expanded,
            stale_discarded = statistics.stale_discarded,
            relaxations = statistics.relaxations,
            "dijkstra search finished"
        );

        Ok(data)
    }
}

impl<'a, G: Graph> PathFinding<G::Node, G::Weight> for Dijkstra<'a, G> {
    fn shortest_path(
        &self,
        source: &G::Node,
        target: &G::Node,
    ) -> PathResult<Path<G::Node, G::Weight>> {
        self.validate_graph()?;
        self.single_pair(source, target)
    }
}

/// Result of a one to all search. Keeps the graph borrowed to tell vertices
/// that are unreachable from vertices that do not exist.
pub struct ShortestPathTree<'a, G: Graph> {
    graph: &'a G,
    source: G::Node,
    data: DijkstraDataHashMap<G::Node, G::Weight>,
}

impl<'a, G: Graph> ShortestPathTree<'a, G> {
    pub fn source(&self) -> &G::Node {
        &self.source
    }

    /// `INFINITY` for vertices that are not reachable.
    pub fn distance(&self, vertex: &G::Node) -> PathResult<G::Weight> {
        contains_all(self.graph, [vertex])?;
        Ok(self.data.get_distance(vertex))
    }

    /// Path from the source to `target`, `Path::unreachable()` if there is
    /// none.
    pub fn path_to(&self, target: &G::Node) -> PathResult<Path<G::Node, G::Weight>> {
        contains_all(self.graph, [target])?;
        Ok(self.data.get_path(target).unwrap_or_else(Path::unreachable))
    }

    pub fn distances(&self) -> &HashMap<G::Node, G::Weight> {
        self.data.distances()
    }

    pub fn into_distances(self) -> HashMap<G::Node, G::Weight> {
        self.data.into_distances()
    }
}

/// Shortest path from `source` to `target` with the default configuration.
pub fn shortest_path<G: Graph>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> PathResult<Path<G::Node, G::Weight>> {
    Dijkstra::new(graph).shortest_path(source, target)
}

/// Distances from `source` to all reachable vertices with the default
/// configuration.
pub fn shortest_distances<G: Graph>(
    graph: &G,
    source: &G::Node,
) -> PathResult<HashMap<G::Node, G::Weight>> {
    Dijkstra::new(graph).shortest_distances(source)
}

pub fn shortest_path_tree<'a, G: Graph>(
    graph: &'a G,
    source: &G::Node,
) -> PathResult<ShortestPathTree<'a, G>> {
    Dijkstra::new(graph).shortest_path_tree(source)
}
