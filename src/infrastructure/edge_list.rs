//! Plain-text edge lists: one `from to capacity cost` line per edge.

use crate::domain::graph::Graph;
use crate::domain::model::Edge;
use anyhow::{anyhow, Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Largest node id accepted from a file; ids size the node array directly.
pub const MAX_NODE_ID: usize = (1 << 24) - 1;

/// Parses edge-list text. Lines without exactly four fields are ignored.
/// Nodes `0..=max_id` are created in id order.
pub fn parse_edge_list(raw: &str) -> Result<Graph> {
    let mut edges: Vec<Edge> = Vec::new();

    for (lineno, line) in raw.lines().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            continue;
        }

        let field = |i: usize, name: &str| -> Result<i64> {
            parts[i]
                .parse::<i64>()
                .with_context(|| format!("line {}: invalid {name} {:?}", lineno + 1, parts[i]))
        };
        let from = endpoint(field(0, "from")?, lineno)?;
        let to = endpoint(field(1, "to")?, lineno)?;
        let edge = Edge::new(from, to, field(2, "capacity")?, field(3, "cost")?)
            .with_context(|| format!("line {}", lineno + 1))?;
        edges.push(edge);
    }

    // The format cannot name isolated nodes, so ids between mentioned ones
    // are kept as nodes without edges.
    let node_count = edges.iter().map(|e| e.from.max(e.to) + 1).max().unwrap_or(0);
    let mut graph = Graph::with_node_count(node_count);
    graph.edges = edges;

    Ok(graph)
}

fn endpoint(value: i64, lineno: usize) -> Result<usize> {
    let id = usize::try_from(value)
        .map_err(|_| anyhow!("line {}: negative node id {value}", lineno + 1))?;
    if id > MAX_NODE_ID {
        return Err(anyhow!(
            "line {}: node id {id} exceeds the maximum of {MAX_NODE_ID}",
            lineno + 1
        ));
    }
    Ok(id)
}

pub fn format_edge_list(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.edge_count() * 12);
    for e in graph.edges.iter() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {} {} {}", e.from, e.to, e.capacity(), e.cost());
    }
    out
}

pub async fn read_edge_list_file(path: &Path) -> Result<Graph> {
    let raw = fs::read_to_string(path).await?;
    parse_edge_list(&raw)
}

pub async fn write_edge_list_file(path: &Path, graph: &Graph) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    fs::write(path, format_edge_list(graph)).await?;
    Ok(())
}

/// Every `*.txt` file directly inside `dir`, sorted by file name.
pub async fn list_edge_list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_txt = path.extension().and_then(|e| e.to_str()) == Some("txt");
        if is_txt && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

pub async fn read_edge_list_dir(dir: &Path) -> Result<Vec<(PathBuf, Graph)>> {
    let mut graphs = Vec::new();
    for path in list_edge_list_files(dir).await? {
        let graph = read_edge_list_file(&path)
            .await
            .with_context(|| format!("reading edge list: {}", path.display()))?;
        graphs.push((path, graph));
    }
    Ok(graphs)
}
