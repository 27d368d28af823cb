use serde::{Deserialize, Serialize};

use crate::graphs::Weight;

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph. Source and target may
/// be the same vertex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest<N> {
    source: N,
    target: N,
}

impl<N> ShortestPathRequest<N> {
    pub fn new(source: N, target: N) -> ShortestPathRequest<N> {
        ShortestPathRequest { source, target }
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn target(&self) -> &N {
        &self.target
    }
}

/// Represents a path in a graph.
///
/// The vertices run from source to target, both inclusive. A target that
/// cannot be reached is represented by an empty vertex list and an infinite
/// distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<N, W> {
    pub vertices: Vec<N>,
    pub distance: W,
}

impl<N, W: Weight> Path<N, W> {
    pub fn unreachable() -> Self {
        Path {
            vertices: Vec::new(),
            distance: W::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// distance of a shortest path, if there exists one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestCase<N, W> {
    pub request: ShortestPathRequest<N>,
    pub distance: Option<W>,
}
