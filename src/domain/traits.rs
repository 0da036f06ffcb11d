use crate::domain::config::GeneratorConfig;
use crate::domain::error::GraphResult;
use crate::domain::graph::{AdjacencyIndex, Graph, SccPartition};
use rand::RngCore;

pub trait SccDetector {
    fn compute_scc(&self, index: &AdjacencyIndex) -> SccPartition;
}

pub trait GraphGenerator {
    fn generate(&self, config: &GeneratorConfig, rng: &mut dyn RngCore) -> GraphResult<Graph>;
}
