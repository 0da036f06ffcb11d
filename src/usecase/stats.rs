use serde::Serialize;

/// Structural metrics of the largest strongly connected component.
///
/// Degrees are counted over the whole graph for each member node, not only
/// over edges internal to the component.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LccMetrics {
    pub size: usize,
    pub max_out_degree: usize,
    pub max_in_degree: usize,
    pub avg_degree: f64,
}

/// Per-graph summary handed to printers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphReport {
    pub name: String,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub components: usize,
    pub lcc_edges: usize,
    pub metrics: LccMetrics,
}
