use crate::domain::error::{GraphError, GraphResult};
use serde::Serialize;

/// Parameters of one random geometric graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub nodes: usize,
    pub radius: f64,
    pub max_capacity: u32,
    pub max_cost: u32,
}

impl GeneratorConfig {
    pub fn new(nodes: usize, radius: f64, max_capacity: u32, max_cost: u32) -> Self {
        Self {
            nodes,
            radius,
            max_capacity,
            max_cost,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.nodes == 0 {
            return Err(invalid("nodes", "must be greater than zero".to_string()));
        }
        // NaN fails both comparisons.
        if !(self.radius > 0.0 && self.radius <= std::f64::consts::SQRT_2) {
            return Err(invalid(
                "radius",
                format!("{} is outside (0, sqrt(2)]", self.radius),
            ));
        }
        if self.max_capacity == 0 {
            return Err(invalid("max_capacity", "must be at least 1".to_string()));
        }
        if self.max_cost == 0 {
            return Err(invalid("max_cost", "must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The eight benchmark graphs, in `graph1`..`graph8` order.
    pub fn default_suite() -> Vec<Self> {
        let mut suite = Vec::with_capacity(8);
        for (max_capacity, max_cost) in [(8, 5), (64, 20)] {
            for radius in [0.2, 0.3] {
                for nodes in [100, 200] {
                    suite.push(Self::new(nodes, radius, max_capacity, max_cost));
                }
            }
        }
        suite
    }
}

fn invalid(name: &'static str, reason: String) -> GraphError {
    GraphError::InvalidParameter { name, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_checks_every_bound() {
        assert!(GeneratorConfig::new(10, 0.5, 1, 1).validate().is_ok());
        assert!(GeneratorConfig::new(10, std::f64::consts::SQRT_2, 1, 1)
            .validate()
            .is_ok());

        let cases = [
            (GeneratorConfig::new(0, 0.5, 1, 1), "nodes"),
            (GeneratorConfig::new(10, 0.0, 1, 1), "radius"),
            (GeneratorConfig::new(10, 1.5, 1, 1), "radius"),
            (GeneratorConfig::new(10, f64::NAN, 1, 1), "radius"),
            (GeneratorConfig::new(10, 0.5, 0, 1), "max_capacity"),
            (GeneratorConfig::new(10, 0.5, 1, 0), "max_cost"),
        ];
        for (cfg, expected) in cases {
            match cfg.validate() {
                Err(GraphError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_suite_matches_benchmark_order() {
        let suite = GeneratorConfig::default_suite();
        assert_eq!(suite.len(), 8);
        assert_eq!(suite[0], GeneratorConfig::new(100, 0.2, 8, 5));
        assert_eq!(suite[1], GeneratorConfig::new(200, 0.2, 8, 5));
        assert_eq!(suite[2], GeneratorConfig::new(100, 0.3, 8, 5));
        assert_eq!(suite[3], GeneratorConfig::new(200, 0.3, 8, 5));
        assert_eq!(suite[4], GeneratorConfig::new(100, 0.2, 64, 20));
        assert_eq!(suite[7], GeneratorConfig::new(200, 0.3, 64, 20));
    }
}
