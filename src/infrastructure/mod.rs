// Infrastructure layer: algorithm implementations, edge-list file I/O, eventing
pub mod edge_list;
pub mod event_ndjson;
pub mod geometric_generator;
pub mod scc_kosaraju;
