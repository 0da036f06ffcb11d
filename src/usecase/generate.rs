use crate::domain::config::GeneratorConfig;
use crate::domain::graph::Graph;
use crate::domain::traits::GraphGenerator;
use crate::usecase::event::{emit, AppEvent};
use anyhow::{Context, Result};
use rand::RngCore;
use tokio::sync::mpsc;

/// One graph per config, drawn in order from the same random source.
pub async fn generate_graphs(
    configs: &[GeneratorConfig],
    generator: &dyn GraphGenerator,
    rng: &mut dyn RngCore,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<Vec<Graph>> {
    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "generate".into(),
        },
    )
    .await;

    let mut graphs = Vec::with_capacity(configs.len());
    for (i, config) in configs.iter().enumerate() {
        let graph = generator
            .generate(config, rng)
            .with_context(|| format!("generating graph {} ({config:?})", i + 1))?;
        emit(
            sink,
            AppEvent::GraphGenerated {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                radius: config.radius,
            },
        )
        .await;
        graphs.push(graph);
    }

    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "generate".into(),
        },
    )
    .await;
    Ok(graphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::geometric_generator::GeometricGraphGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn generates_one_graph_per_config_and_reports_events() {
        let (tx, mut rx) = mpsc::channel::<AppEvent>(16);
        let configs = [
            GeneratorConfig::new(5, 0.5, 2, 2),
            GeneratorConfig::new(7, 0.1, 2, 2),
        ];
        let mut rng = StdRng::seed_from_u64(1);

        let graphs = generate_graphs(&configs, &GeometricGraphGenerator, &mut rng, &Some(tx))
            .await
            .expect("generate");
        assert_eq!(graphs.iter().map(Graph::node_count).collect::<Vec<_>>(), vec![5, 7]);

        let mut generated = 0;
        while let Some(ev) = rx.recv().await {
            if matches!(ev, AppEvent::GraphGenerated { .. }) {
                generated += 1;
            }
        }
        assert_eq!(generated, 2);
    }

    #[tokio::test]
    async fn invalid_config_names_the_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_graphs(
            &[GeneratorConfig::new(0, 0.5, 1, 1)],
            &GeometricGraphGenerator,
            &mut rng,
            &None,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("generating graph 1"));
    }
}
