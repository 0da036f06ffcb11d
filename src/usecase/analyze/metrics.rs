use crate::domain::error::{GraphError, GraphResult};
use crate::domain::graph::AdjacencyIndex;
use crate::usecase::stats::LccMetrics;
use std::collections::HashSet;

/// Size and degree statistics of `group`, with each node's degrees taken
/// from the full-graph index. An empty group yields all zeros.
pub fn compute_metrics(group: &HashSet<usize>, index: &AdjacencyIndex) -> GraphResult<LccMetrics> {
    let mut metrics = LccMetrics {
        size: group.len(),
        ..LccMetrics::default()
    };
    if group.is_empty() {
        return Ok(metrics);
    }

    let n = index.node_count();

    let mut incidence_total = 0usize;
    for &v in group {
        if v >= n {
            return Err(GraphError::UnknownNode { id: v, node_count: n });
        }
        let out_degree = index.out_degree(v);
        let in_degree = index.in_degree(v);
        metrics.max_out_degree = metrics.max_out_degree.max(out_degree);
        metrics.max_in_degree = metrics.max_in_degree.max(in_degree);
        incidence_total += out_degree + in_degree;
    }
    metrics.avg_degree = incidence_total as f64 / group.len() as f64;

    Ok(metrics)
}
