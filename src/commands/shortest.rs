//! Shortest-path commands: path, dijkstra, bellman-ford, floyd-warshall

use serde_json::json;

use super::helpers::{load_graph, print_json, records_header};
use crate::cli::{Cli, GraphArgs};
use crate::output_by_format_result;
use algokit_core::error::Result;
use algokit_core::format::record_field;
use algokit_core::graph::{
    bellman_ford, bfs_shortest_path, dijkstra, dijkstra_path, floyd_warshall_graph, AllPairs,
    Cost, ShortestPaths,
};

/// Execute the path command
///
/// Unweighted mode counts hops, so the reported cost is the edge count.
pub fn execute_path(cli: &Cli, args: &GraphArgs, from: &str, to: &str, weighted: bool) -> Result<()> {
    let graph = load_graph(args)?;
    let (from, to) = (from.to_string(), to.to_string());

    let found: Option<(Vec<String>, Cost)> = if weighted {
        dijkstra_path(&graph, &from, &to)?
    } else {
        bfs_shortest_path(&graph, &from, &to)?.map(|path| {
            let hops = Cost::from(path.len().saturating_sub(1) as u32);
            (path, hops)
        })
    };
    let mode = if weighted { "dijkstra" } else { "bfs" };

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "from": from,
            "to": to,
            "mode": mode,
            "found": found.is_some(),
            "path": found.as_ref().map(|(path, _)| path),
            "cost": found.as_ref().map(|(_, cost)| *cost),
        })),
        human => {
            match &found {
                Some((path, cost)) => println!("{} (cost {})", path.join(" -> "), cost),
                None if !cli.quiet => println!("No path from {} to {}", from, to),
                None => {}
            }
        },
        records => {
            println!(
                "{}",
                records_header(
                    "path",
                    &[
                        ("from", record_field(&from)),
                        ("to", record_field(&to)),
                        ("search", mode.to_string()),
                        ("found", found.is_some().to_string()),
                    ],
                )
            );
            if let Some((path, cost)) = &found {
                for (step, node) in path.iter().enumerate() {
                    println!("P {} {}", step, record_field(node));
                }
                println!("W {}", cost);
            }
        }
    )
}

/// Which single-source algorithm computes the distances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dijkstra,
    BellmanFord,
}

impl Solver {
    fn name(self) -> &'static str {
        match self {
            Solver::Dijkstra => "dijkstra",
            Solver::BellmanFord => "bellman-ford",
        }
    }
}

/// Execute the dijkstra or bellman-ford command
pub fn execute_distances(cli: &Cli, args: &GraphArgs, source: &str, solver: Solver) -> Result<()> {
    let graph = load_graph(args)?;
    let source = source.to_string();
    let paths = match solver {
        Solver::Dijkstra => dijkstra(&graph, &source)?,
        Solver::BellmanFord => bellman_ford(&graph, &source)?,
    };

    output_by_format_result!(cli.format,
        json => print_json(&paths),
        human => { output_distances_human(&paths) },
        records => {
            println!(
                "{}",
                records_header(
                    solver.name(),
                    &[
                        ("source", record_field(&paths.source)),
                        ("reached", paths.reachable().count().to_string()),
                    ],
                )
            );
            for (node, distance) in &paths.distances {
                match paths.parent(node) {
                    Some(parent) => println!(
                        "N {} dist={} parent={}",
                        record_field(node),
                        distance,
                        record_field(parent)
                    ),
                    None => println!("N {} dist={}", record_field(node), distance),
                }
            }
        }
    )
}

fn output_distances_human(paths: &ShortestPaths<String>) {
    let width = paths.distances.keys().map(String::len).max().unwrap_or(0);
    for (node, distance) in &paths.distances {
        match paths.parent(node) {
            Some(parent) => println!("{:<width$}  {}  (via {})", node, distance, parent),
            None => println!("{:<width$}  {}", node, distance),
        }
    }
}

/// Execute the floyd-warshall command
pub fn execute_floyd_warshall(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(args)?;
    let all = floyd_warshall_graph(&graph)?;

    output_by_format_result!(cli.format,
        json => print_json(&all),
        human => { output_matrix_human(&all) },
        records => {
            println!(
                "{}",
                records_header("floyd-warshall", &[("nodes", all.nodes().len().to_string())])
            );
            let nodes: Vec<&String> = all.nodes().collect();
            for (row, from) in all.matrix().rows().zip(&nodes) {
                for (cost, to) in row.iter().zip(&nodes) {
                    if cost.is_finite() {
                        println!("D {} {} {}", record_field(from), record_field(to), cost);
                    }
                }
            }
        }
    )
}

fn output_matrix_human(all: &AllPairs<String>) {
    let nodes: Vec<&String> = all.nodes().collect();
    let mut cells: Vec<Vec<String>> = vec![std::iter::once(String::new())
        .chain(nodes.iter().map(|n| n.to_string()))
        .collect()];
    for (row, from) in all.matrix().rows().zip(&nodes) {
        cells.push(
            std::iter::once(from.to_string())
                .chain(row.iter().map(Cost::to_string))
                .collect(),
        );
    }

    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);
    for line in cells {
        let padded: Vec<String> = line.iter().map(|c| format!("{:>width$}", c)).collect();
        println!("{}", padded.join(" "));
    }
}
