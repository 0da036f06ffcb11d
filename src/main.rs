//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: graph types, validation and the detector/generator ports
//! - usecase: analysis and generation workflows + progress events
//! - infrastructure: Kosaraju, the geometric generator, edge-list IO, NDJSON events
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    rgg_scc_analyzer::interface::cli::run().await
}
