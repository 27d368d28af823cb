use super::{Graph, Weight};
use crate::error::{PathError, PathResult};

/// Collects every edge of the graph as `(tail, head, weight)`.
pub fn all_edges<G: Graph>(graph: &G) -> Vec<(G::Node, G::Node, G::Weight)> {
    graph
        .nodes()
        .flat_map(|tail| {
            graph
                .out_edges(tail)
                .map(move |(head, weight)| (tail.clone(), head.clone(), weight))
        })
        .collect()
}

/// Fails on the first edge whose weight is negative or NaN.
pub fn validate_weights<G: Graph>(graph: &G) -> PathResult<()> {
    for tail in graph.nodes() {
        if let Some((head, weight)) = graph
            .out_edges(tail)
            .find(|(_, weight)| !weight.is_valid_edge_weight())
        {
            return Err(PathError::MalformedGraph {
                tail: format!("{:?}", tail),
                head: format!("{:?}", head),
                weight: weight.to_string(),
            });
        }
    }

    Ok(())
}

/// Returns the first of `nodes` that is not part of the graph as error.
pub fn contains_all<'a, G: Graph>(
    graph: &G,
    nodes: impl IntoIterator<Item = &'a G::Node>,
) -> PathResult<()>
where
    G::Node: 'a,
{
    for node in nodes {
        if !graph.contains_node(node) {
            return Err(PathError::invalid_node(node));
        }
    }

    Ok(())
}
