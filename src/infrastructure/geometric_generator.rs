use crate::domain::config::GeneratorConfig;
use crate::domain::error::GraphResult;
use crate::domain::graph::Graph;
use crate::domain::traits::GraphGenerator;
use rand::{Rng, RngCore};

/// Probability mass for orienting a close pair `u -> v`; the next band of
/// the same width orients it `v -> u`, and the rest leaves the pair unlinked.
const FORWARD_BAND: f64 = 0.3;
const BACKWARD_BAND: f64 = 0.6;

/// Random geometric graph on the unit square with randomly oriented,
/// capacitated edges between nodes no further apart than the radius.
///
/// Every unordered pair is evaluated once, so generation is O(n^2).
pub struct GeometricGraphGenerator;

impl GraphGenerator for GeometricGraphGenerator {
    fn generate(&self, config: &GeneratorConfig, rng: &mut dyn RngCore) -> GraphResult<Graph> {
        generate_geometric_graph(config, rng)
    }
}

pub fn generate_geometric_graph<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> GraphResult<Graph> {
    config.validate()?;

    let mut graph = Graph::new();
    for _ in 0..config.nodes {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        graph.add_node(x, y);
    }

    let n = graph.node_count();

    for i in 0..n {
        for j in (i + 1)..n {
            let (u, v) = (graph.nodes[i], graph.nodes[j]);
            if u.distance_to(&v) > config.radius {
                continue;
            }

            let p: f64 = rng.gen();
            let (from, to) = if p < FORWARD_BAND {
                (u.id, v.id)
            } else if p < BACKWARD_BAND {
                (v.id, u.id)
            } else {
                continue;
            };

            let capacity = rng.gen_range(1..=config.max_capacity);
            let cost = rng.gen_range(1..=config.max_cost);
            graph.add_edge(from, to, i64::from(capacity), i64::from(cost))?;
        }
    }

    Ok(graph)
}
