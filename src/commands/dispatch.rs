//! Command dispatch logic for algokit
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::shortest::Solver;
use crate::commands::traverse::Order;
use crate::commands::{mst, shortest, traverse};
use algokit_core::error::Result;
use algokit_core::trace_time;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let result = match command {
        Commands::Bfs { graph, source } => {
            traverse::execute_traversal(cli, graph, source, Order::Breadth)
        }
        Commands::Dfs { graph, source } => {
            traverse::execute_traversal(cli, graph, source, Order::Depth)
        }
        Commands::Levels { graph, source } => traverse::execute_levels(cli, graph, source),
        Commands::Path {
            graph,
            from,
            to,
            weighted,
        } => shortest::execute_path(cli, graph, from, to, *weighted),
        Commands::Dijkstra { graph, source } => {
            shortest::execute_distances(cli, graph, source, Solver::Dijkstra)
        }
        Commands::BellmanFord { graph, source } => {
            shortest::execute_distances(cli, graph, source, Solver::BellmanFord)
        }
        Commands::FloydWarshall { graph } => shortest::execute_floyd_warshall(cli, graph),
        Commands::Kruskal { graph } => mst::execute(cli, graph),
        Commands::Components { graph } => traverse::execute_components(cli, graph),
        Commands::Topo { graph } => traverse::execute_topo(cli, graph),
        Commands::Scc { graph } => traverse::execute_scc(cli, graph),
    };

    trace_time!(start, "command");
    result
}

fn handle_no_command() -> Result<()> {
    println!("algokit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Classic graph algorithms over TOML, JSON or YAML graph documents.");
    println!();
    println!("Run `algokit --help` for usage information.");
    Ok(())
}
