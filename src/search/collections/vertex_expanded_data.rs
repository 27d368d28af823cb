use ahash::{HashSet, HashSetExt};

use crate::graphs::Node;

/// The closed set of a search.
pub trait VertexExpandedData<N> {
    /// Marks `vertex` as expanded and returns whether it already was.
    fn expand(&mut self, vertex: &N) -> bool;

    fn is_expanded(&self, vertex: &N) -> bool;
}

pub struct VertexExpandedDataHashSet<N> {
    expanded: HashSet<N>,
}

impl<N: Node> Default for VertexExpandedDataHashSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> VertexExpandedDataHashSet<N> {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl<N: Node> VertexExpandedData<N> for VertexExpandedDataHashSet<N> {
    fn expand(&mut self, vertex: &N) -> bool {
        if self.expanded.contains(vertex) {
            return true;
        }
        self.expanded.insert(vertex.clone());
        false
    }

    fn is_expanded(&self, vertex: &N) -> bool {
        self.expanded.contains(vertex)
    }
}
