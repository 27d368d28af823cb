//! Single source shortest paths with Dijkstra's algorithm over weighted graphs
//! with non-negative edge weights.

pub mod error;
pub mod graphs;
pub mod logging;
pub mod search;
pub mod utility;

pub use error::{PathError, PathResult};
pub use graphs::{hash_graph::HashGraph, Graph, Node, Weight};
pub use search::{
    dijkstra::{shortest_distances, shortest_path, shortest_path_tree, Dijkstra, DijkstraConfig},
    path::{Path, ShortestPathRequest},
    PathFinding,
};
