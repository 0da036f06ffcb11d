mod induced;
mod metrics;

pub use induced::build_induced;
pub use metrics::compute_metrics;

use crate::domain::graph::{AdjacencyIndex, Graph, SccPartition};
use crate::domain::traits::SccDetector;
use crate::usecase::event::{emit, AppEvent};
use crate::usecase::stats::{GraphReport, LccMetrics};
use anyhow::{Context, Result};
use std::collections::HashSet;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    pub partition: SccPartition,
    pub lcc: Graph,
    pub metrics: LccMetrics,
    pub report: GraphReport,
}

/// Decomposes `graph`, extracts its largest component and measures it.
/// The adjacency index is built once and shared by the detector and the
/// metrics.
pub async fn analyze_graph(
    name: &str,
    graph: &Graph,
    scc: &dyn SccDetector,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<GraphAnalysis> {
    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "adjacency_index".into(),
        },
    )
    .await;
    let index = AdjacencyIndex::build(graph).with_context(|| format!("indexing graph {name}"))?;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "adjacency_index".into(),
        },
    )
    .await;

    emit(sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let partition = scc.compute_scc(&index);
    emit(
        sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: partition.component_count(),
            largest: partition.largest_component().len(),
        },
    )
    .await;
    emit(sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "induced_subgraph".into(),
        },
    )
    .await;
    let largest = partition.largest_component();
    let lcc = build_induced(largest, graph)
        .with_context(|| format!("building largest component of {name}"))?;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "induced_subgraph".into(),
        },
    )
    .await;

    let group: HashSet<usize> = largest.iter().copied().collect();
    let metrics = compute_metrics(&group, &index)
        .with_context(|| format!("measuring largest component of {name}"))?;
    emit(
        sink,
        AppEvent::MetricsComputed {
            graph: name.to_string(),
            metrics: metrics.clone(),
        },
    )
    .await;

    let report = GraphReport {
        name: name.to_string(),
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        components: partition.component_count(),
        lcc_edges: lcc.edge_count(),
        metrics: metrics.clone(),
    };

    Ok(GraphAnalysis {
        partition,
        lcc,
        metrics,
        report,
    })
}
