//! CLI argument parsing for algokit
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};

pub use algokit_core::format::OutputFormat;
pub use args::GraphArgs;
use parse::parse_output_format;

/// Algokit - run classic graph algorithms over graph documents
#[derive(Parser, Debug)]
#[command(name = "algokit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "algokit_core=trace")
    #[arg(long, global = true, env = "ALGOKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal from a source node
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node to start from
        #[arg(long, short)]
        source: String,
    },

    /// Depth-first traversal from a source node
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node to start from
        #[arg(long, short)]
        source: String,
    },

    /// Reachable nodes grouped by hop distance
    Levels {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node to start from
        #[arg(long, short)]
        source: String,
    },

    /// Find a path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(long)]
        from: String,

        /// End node
        #[arg(long)]
        to: String,

        /// Minimize total weight (Dijkstra) instead of hop count (BFS)
        #[arg(long)]
        weighted: bool,
    },

    /// Single-source shortest distances (Dijkstra)
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node to measure distances from
        #[arg(long, short)]
        source: String,
    },

    /// Single-source shortest distances allowing negative weights (Bellman–Ford)
    BellmanFord {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node to measure distances from
        #[arg(long, short)]
        source: String,
    },

    /// All-pairs shortest distances (Floyd–Warshall)
    FloydWarshall {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Minimum spanning forest (Kruskal)
    Kruskal {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Connected components of an undirected graph
    Components {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Topological order of a directed acyclic graph
    Topo {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Strongly connected components of a directed graph
    Scc {
        #[command(flatten)]
        graph: GraphArgs,
    },
}
