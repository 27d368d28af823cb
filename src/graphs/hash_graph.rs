use std::hash::Hash;

use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use super::{Graph, Node, Weight};

/// Adjacency map from node to its ordered list of `(head, weight)` pairs.
///
/// Serializes as a plain map, so a JSON graph file reads
/// `{"A": [["B", 7], ["C", 9]], "B": []}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize + Eq + Hash, W: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash, W: Deserialize<'de>"
))]
pub struct HashGraph<N, W> {
    out_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N: Node, W: Weight> Default for HashGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, W: Weight> Graph for HashGraph<N, W> {
    type Node = N;
    type Weight = W;

    fn contains_node(&self, node: &N) -> bool {
        self.out_edges.contains_key(node)
    }

    fn out_edges(&self, tail: &N) -> Box<dyn ExactSizeIterator<Item = (&N, W)> + Send + '_> {
        let edges = self.out_edges.get(tail).map(Vec::as_slice).unwrap_or(&[]);
        Box::new(edges.iter().map(|(head, weight)| (head, *weight)))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + Send + '_> {
        Box::new(self.out_edges.keys())
    }

    fn number_of_nodes(&self) -> usize {
        self.out_edges.len()
    }

    fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(Vec::len).sum()
    }
}

impl<N: Node, W: Weight> HashGraph<N, W> {
    pub fn new() -> Self {
        HashGraph {
            out_edges: HashMap::new(),
        }
    }

    /// Takes the adjacency map as is. Heads that are not keys stay outside of
    /// the node set.
    pub fn from_adjacency(out_edges: HashMap<N, Vec<(N, W)>>) -> Self {
        HashGraph { out_edges }
    }

    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, W)>) -> Self {
        let mut graph = HashGraph::new();
        edges
            .into_iter()
            .for_each(|(tail, head, weight)| graph.add_edge(tail, head, weight));
        graph
    }

    /// Adds a node without outgoing edges. Existing edges are kept.
    pub fn add_node(&mut self, node: N) {
        self.out_edges.entry(node).or_default();
    }

    /// Appends a directed edge. Both endpoints become nodes of the graph.
    /// Parallel edges are kept.
    pub fn add_edge(&mut self, tail: N, head: N, weight: W) {
        self.add_node(head.clone());
        self.out_edges.entry(tail).or_default().push((head, weight));
    }

    pub fn add_edge_bidirectional(&mut self, a: N, b: N, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }
}
