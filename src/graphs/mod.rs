use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::Hash,
};

pub mod graph_factory;
pub mod graph_functions;
pub mod hash_graph;

/// Identifier of a node. Only equality and hashing are required, nodes are
/// never ordered.
pub trait Node: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Node for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// Edge weight and path distance.
///
/// `INFINITY` doubles as the distance of nodes that are not reachable. For
/// integer weights it is the maximum value, additions saturate at it. A node
/// whose exact distance is `MAX` therefore reads as unreachable; pick a wider
/// weight type if distances can get that large.
pub trait Weight: Copy + PartialEq + Debug + Display + Send + Sync + 'static {
    const ZERO: Self;
    const INFINITY: Self;

    /// Total order, also for floating point weights.
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn saturating_add(self, other: Self) -> Self;

    /// Weights have to be non-negative (and not NaN) for the greedy
    /// relaxation to be correct.
    fn is_valid_edge_weight(&self) -> bool;

    fn is_finite(&self) -> bool {
        self.total_cmp(&Self::INFINITY) == Ordering::Less
    }
}

macro_rules! unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn saturating_add(self, other: Self) -> Self {
                <$t>::saturating_add(self, other)
            }

            fn is_valid_edge_weight(&self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! signed_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn saturating_add(self, other: Self) -> Self {
                <$t>::saturating_add(self, other)
            }

            fn is_valid_edge_weight(&self) -> bool {
                *self >= 0
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;
            const INFINITY: Self = <$t>::INFINITY;

            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn saturating_add(self, other: Self) -> Self {
                self + other
            }

            fn is_valid_edge_weight(&self) -> bool {
                // false for NaN
                *self >= 0.0
            }
        }
    )*};
}

unsigned_weight!(u8, u16, u32, u64, usize);
signed_weight!(i32, i64);
float_weight!(f32, f64);

/// A directed weighted graph, read-only for the duration of a query.
pub trait Graph: Send + Sync {
    type Node: Node;
    type Weight: Weight;

    /// Returns whether `node` is part of the node set of the graph.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Outgoing edges of `tail` as `(head, weight)` pairs in insertion order.
    /// Unknown nodes have no outgoing edges.
    fn out_edges(
        &self,
        tail: &Self::Node,
    ) -> Box<dyn ExactSizeIterator<Item = (&Self::Node, Self::Weight)> + Send + '_>;

    fn nodes(&self) -> Box<dyn Iterator<Item = &Self::Node> + Send + '_>;

    fn number_of_nodes(&self) -> usize;

    fn number_of_edges(&self) -> usize {
        self.nodes().map(|node| self.out_edges(node).len()).sum()
    }

    /// Smallest weight of all parallel edges from `tail` to `head`.
    fn get_edge_weight(&self, tail: &Self::Node, head: &Self::Node) -> Option<Self::Weight> {
        self.out_edges(tail)
            .filter(|(edge_head, _)| *edge_head == head)
            .map(|(_, weight)| weight)
            .min_by(|a, b| a.total_cmp(b))
    }
}
