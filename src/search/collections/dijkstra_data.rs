use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{Node, Weight},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData<N, W: Weight> {
    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: &N) -> Option<&N>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: N, predecessor: N);

    /// Retrieves the distance to a given vertex, `W::INFINITY` if unseen.
    fn get_distance(&self, vertex: &N) -> W;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: N, distance: W);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: &N) -> Option<Path<N, W>>
    where
        N: Clone,
    {
        let distance = self.get_distance(target);
        if !distance.is_finite() {
            return None;
        }

        let mut vertices = vec![target.clone()];

        // Only distance improving relaxations set a predecessor, so the chain
        // ends at the source.
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            vertices.push(predecessor.clone());
            current = predecessor;
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

pub struct DijkstraDataHashMap<N, W> {
    predecessors: HashMap<N, N>,
    distances: HashMap<N, W>,
}

impl<N: Node, W: Weight> Default for DijkstraDataHashMap<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, W: Weight> DijkstraDataHashMap<N, W> {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }

    /// All vertices that received a distance, with that distance.
    pub fn distances(&self) -> &HashMap<N, W> {
        &self.distances
    }

    pub fn into_distances(self) -> HashMap<N, W> {
        self.distances
    }
}

impl<N: Node, W: Weight> DijkstraData<N, W> for DijkstraDataHashMap<N, W> {
    fn get_predecessor(&self, vertex: &N) -> Option<&N> {
        self.predecessors.get(vertex)
    }

    fn set_predecessor(&mut self, vertex: N, predecessor: N) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: &N) -> W {
        self.distances.get(vertex).copied().unwrap_or(W::INFINITY)
    }

    fn set_distance(&mut self, vertex: N, distance: W) {
        self.distances.insert(vertex, distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_predecessors_back_to_source() {
        let mut data = DijkstraDataHashMap::new();
        data.set_distance("s", 0u32);
        data.set_distance("a", 2);
        data.set_distance("t", 5);
        data.set_predecessor("a", "s");
        data.set_predecessor("t", "a");

        let path = data.get_path(&"t").unwrap();
        assert_eq!(path.vertices, vec!["s", "a", "t"]);
        assert_eq!(path.distance, 5);

        let source_path = data.get_path(&"s").unwrap();
        assert_eq!(source_path.vertices, vec!["s"]);
        assert_eq!(source_path.distance, 0);
    }

    #[test]
    fn unseen_vertex_has_no_path() {
        let mut data: DijkstraDataHashMap<&str, f64> = DijkstraDataHashMap::new();
        data.set_distance("s", 0.0);

        assert_eq!(data.get_distance(&"x"), f64::INFINITY);
        assert!(data.get_path(&"x").is_none());
        assert_eq!(data.distances().len(), 1);
    }
}
