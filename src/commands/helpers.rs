//! Helper functions shared across commands

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cli::GraphArgs;
use algokit_core::config::GraphDocument;
use algokit_core::error::Result;
use algokit_core::graph::Graph;

/// Load the graph named by `--graph`, honoring `--input-format`
pub fn load_graph(args: &GraphArgs) -> Result<Graph<String>> {
    let start = Instant::now();
    let graph = GraphDocument::load(&args.graph, args.input_format)?.into_graph()?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        kind = %graph.kind(),
        elapsed = ?start.elapsed(),
        "load_graph"
    );
    Ok(graph)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Records header line shared by every command
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut header = format!("H algokit=1 mode={}", mode);
    for (key, value) in fields {
        header.push_str(&format!(" {}={}", key, value));
    }
    header
}
