use crate::error::PathResult;
use path::Path;

pub mod collections;
pub mod dijkstra;
pub mod path;

pub trait PathFinding<N, W>: Send + Sync {
    /// Shortest path from `source` to `target`. An unreachable target yields
    /// `Path::unreachable()`, unknown nodes yield an error.
    fn shortest_path(&self, source: &N, target: &N) -> PathResult<Path<N, W>>;

    fn shortest_path_distance(&self, source: &N, target: &N) -> PathResult<W> {
        Ok(self.shortest_path(source, target)?.distance)
    }
}
