use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Node, Weight};

/// A trait for a priority queue that manages vertices and their tentative
/// distances. Dijkstra repeatedly retrieves the vertex with the smallest
/// distance from it.
///
/// No decrease key is offered. A vertex may be inserted several times, the
/// caller discards the stale entries when they are popped.
pub trait VertexDistanceQueue<N, W> {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: N, distance: W);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<(N, W)>;
}

struct QueueElement<N, W> {
    distance: W,
    sequence: u64,
    vertex: N,
}

// `BinaryHeap` is a max-heap. Flip the ordering on distances and, for equal
// distances, prefer the element inserted first.
impl<N, W: Weight> Ord for QueueElement<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N, W: Weight> PartialOrd for QueueElement<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Weight> PartialEq for QueueElement<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: Weight> Eq for QueueElement<N, W> {}

/// A priority queue implementation using a binary heap.
///
/// Ties between equal distances are broken first in, first out.
pub struct VertexDistanceQueueBinaryHeap<N, W> {
    heap: BinaryHeap<QueueElement<N, W>>,
    sequence: u64,
}

impl<N: Node, W: Weight> Default for VertexDistanceQueueBinaryHeap<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, W: Weight> VertexDistanceQueueBinaryHeap<N, W> {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<N: Node, W: Weight> VertexDistanceQueue<N, W> for VertexDistanceQueueBinaryHeap<N, W> {
    fn insert(&mut self, vertex: N, distance: W) {
        self.heap.push(QueueElement {
            distance,
            sequence: self.sequence,
            vertex,
        });
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<(N, W)> {
        let QueueElement {
            distance, vertex, ..
        } = self.heap.pop()?;

        Some((vertex, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_distance_first() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert('c', 9u32);
        queue.insert('a', 1);
        queue.insert('b', 4);

        assert_eq!(queue.pop(), Some(('a', 1)));
        assert_eq!(queue.pop(), Some(('b', 4)));
        assert_eq!(queue.pop(), Some(('c', 9)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn equal_distances_pop_in_insertion_order() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        for vertex in ["x", "y", "z", "w"] {
            queue.insert(vertex, 2.5f64);
        }
        queue.insert("first", 0.5);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|(vertex, _)| vertex)
            .collect();
        assert_eq!(order, vec!["first", "x", "y", "z", "w"]);
    }

    #[test]
    fn keeps_duplicate_entries_of_a_vertex() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(7u32, 10u64);
        queue.insert(7u32, 3u64);

        assert_eq!(queue.pop(), Some((7, 3)));
        assert_eq!(queue.pop(), Some((7, 10)));
        assert_eq!(queue.pop(), None);
    }
}
