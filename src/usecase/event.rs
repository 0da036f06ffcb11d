use crate::usecase::stats::{GraphReport, LccMetrics};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        path: String,
        nodes: usize,
        edges: usize,
    },

    GraphGenerated {
        nodes: usize,
        edges: usize,
        radius: f64,
    },

    GraphWritten {
        path: String,
        edges: usize,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        largest: usize,
    },

    MetricsComputed {
        graph: String,
        metrics: LccMetrics,
    },

    Finished {
        reports: Vec<GraphReport>,
    },
}

pub(crate) async fn emit(sink: &Option<tokio::sync::mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
