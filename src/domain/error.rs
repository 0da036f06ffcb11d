use thiserror::Error;

/// Precondition violations detected by the domain layer.
///
/// None of these are recoverable mid-algorithm; callers decide whether to
/// abort or skip the offending graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("non-contiguous node id {id}: ids must cover 0..{node_count} exactly")]
    NonContiguousNodeId { id: usize, node_count: usize },

    #[error("node {id} is outside 0..{node_count}")]
    UnknownNode { id: usize, node_count: usize },

    #[error("duplicate node id {id}")]
    DuplicateNodeId { id: usize },

    #[error("edge {from}->{to} references node {missing} outside 0..{node_count}")]
    DanglingEdge {
        from: usize,
        to: usize,
        missing: usize,
        node_count: usize,
    },

    #[error("edge {from}->{to} has non-positive {field}: {value}")]
    NonPositiveAttribute {
        from: usize,
        to: usize,
        field: &'static str,
        value: i64,
    },

    #[error("edge {from}->{to} has {field} {value} which does not fit in 32 bits")]
    AttributeOutOfRange {
        from: usize,
        to: usize,
        field: &'static str,
        value: i64,
    },

    #[error("invalid generator parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
