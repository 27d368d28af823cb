use thiserror::Error;

/// Failures of a shortest path query or of loading a graph.
///
/// An unreachable target is not an error, it is answered with an infinite
/// distance and an empty path.
#[derive(Error, Debug)]
pub enum PathError {
    /// Start or end node is not a key of the graph.
    #[error("node {0} is not part of the graph")]
    InvalidNode(String),

    /// An edge carries a negative (or NaN) weight.
    #[error("edge {tail} -> {head} has invalid weight {weight}")]
    MalformedGraph {
        tail: String,
        head: String,
        weight: String,
    },

    #[error("search closed more than {0} nodes")]
    ExpansionLimitExceeded(usize),

    #[error("unsupported graph file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type PathResult<T> = Result<T, PathError>;

impl PathError {
    pub fn invalid_node(node: &impl std::fmt::Debug) -> Self {
        PathError::InvalidNode(format!("{:?}", node))
    }
}
