//! Domain layer: pure, synchronous graph types and rules.

pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod traits;
