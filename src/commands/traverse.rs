//! Traversal commands: bfs, dfs, levels, components, topo, scc

use serde_json::json;

use super::helpers::{load_graph, print_json, records_header};
use crate::cli::{Cli, GraphArgs};
use crate::output_by_format_result;
use algokit_core::error::Result;
use algokit_core::format::record_field;
use algokit_core::graph::{
    bfs, bfs_levels, connected_components, dfs, strongly_connected_components, topological_sort,
    Traversal,
};

/// Which traversal a `bfs`/`dfs` invocation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Breadth,
    Depth,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::Breadth => "bfs",
            Order::Depth => "dfs",
        }
    }
}

/// Execute the bfs or dfs command
pub fn execute_traversal(cli: &Cli, args: &GraphArgs, source: &str, order: Order) -> Result<()> {
    let graph = load_graph(args)?;
    let source = source.to_string();
    let traversal = match order {
        Order::Breadth => bfs(&graph, &source)?,
        Order::Depth => dfs(&graph, &source)?,
    };

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "algorithm": order.name(),
            "source": traversal.source,
            "order": traversal.order,
            "parents": traversal.parents,
            "depths": traversal.depths,
        })),
        human => { output_traversal_human(cli, &traversal, order) },
        records => { output_traversal_records(&traversal, order) }
    )
}

fn output_traversal_human(cli: &Cli, traversal: &Traversal<String>, order: Order) {
    if !cli.quiet {
        println!(
            "{} from {}: {} reached",
            order.name(),
            traversal.source,
            traversal.order.len()
        );
    }
    for node in &traversal.order {
        let depth = traversal.depth(node).unwrap_or_default();
        match traversal.parent(node) {
            Some(parent) => println!("{} (depth {}, via {})", node, depth, parent),
            None => println!("{} (depth {})", node, depth),
        }
    }
}

fn output_traversal_records(traversal: &Traversal<String>, order: Order) {
    println!(
        "{}",
        records_header(
            order.name(),
            &[
                ("source", record_field(&traversal.source)),
                ("reached", traversal.order.len().to_string()),
            ],
        )
    );
    for node in &traversal.order {
        let depth = traversal.depth(node).unwrap_or_default();
        println!("N {} depth={}", record_field(node), depth);
    }
    for node in &traversal.order {
        if let Some(parent) = traversal.parent(node) {
            println!("E {} {}", record_field(parent), record_field(node));
        }
    }
}

/// Execute the levels command
pub fn execute_levels(cli: &Cli, args: &GraphArgs, source: &str) -> Result<()> {
    let graph = load_graph(args)?;
    let levels = bfs_levels(&graph, &source.to_string())?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "source": source, "levels": levels })),
        human => {
            for (depth, nodes) in levels.iter().enumerate() {
                println!("{}: {}", depth, nodes.join(" "));
            }
        },
        records => {
            println!("{}", records_header("levels", &[("source", record_field(source))]));
            for (depth, nodes) in levels.iter().enumerate() {
                for node in nodes {
                    println!("L {} {}", depth, record_field(node));
                }
            }
        }
    )
}

/// Execute the components command (undirected graphs)
pub fn execute_components(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(args)?;
    let components = connected_components(&graph)?;
    output_groups(cli, "components", &components)
}

/// Execute the scc command (directed graphs)
pub fn execute_scc(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(args)?;
    let components = strongly_connected_components(&graph)?;
    output_groups(cli, "scc", &components)
}

fn output_groups(cli: &Cli, mode: &str, groups: &[Vec<String>]) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({ "count": groups.len(), "components": groups })),
        human => {
            if !cli.quiet {
                println!("{} component(s)", groups.len());
            }
            for (i, group) in groups.iter().enumerate() {
                println!("{}: {}", i + 1, group.join(" "));
            }
        },
        records => {
            println!("{}", records_header(mode, &[("count", groups.len().to_string())]));
            for (i, group) in groups.iter().enumerate() {
                for node in group {
                    println!("C {} {}", i + 1, record_field(node));
                }
            }
        }
    )
}

/// Execute the topo command
pub fn execute_topo(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(args)?;
    let order = topological_sort(&graph)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "order": order })),
        human => {
            for node in &order {
                println!("{}", node);
            }
        },
        records => {
            println!("{}", records_header("topo", &[("nodes", order.len().to_string())]));
            for (position, node) in order.iter().enumerate() {
                println!("T {} {}", position, record_field(node));
            }
        }
    )
}
