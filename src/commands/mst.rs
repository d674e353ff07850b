//! Minimum spanning forest command

use super::helpers::{load_graph, print_json, records_header};
use crate::cli::{Cli, GraphArgs};
use crate::output_by_format_result;
use algokit_core::error::Result;
use algokit_core::format::record_field;
use algokit_core::graph::{kruskal, SpanningForest};

/// Execute the kruskal command
pub fn execute(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(args)?;
    let forest = kruskal(&graph)?;

    output_by_format_result!(cli.format,
        json => print_json(&forest),
        human => { output_human(cli, &forest) },
        records => { output_records(&forest) }
    )
}

fn output_human(cli: &Cli, forest: &SpanningForest<String>) {
    for edge in &forest.edges {
        println!("{} -- {}  {}", edge.from, edge.to, edge.weight);
    }
    if !cli.quiet {
        let trees = if forest.component_count == 1 {
            "1 tree".to_string()
        } else {
            format!("{} trees", forest.component_count)
        };
        println!("total weight: {} ({})", forest.total_weight, trees);
    }
}

fn output_records(forest: &SpanningForest<String>) {
    println!(
        "{}",
        records_header(
            "kruskal",
            &[
                ("edges", forest.edge_count().to_string()),
                ("weight", forest.total_weight.to_string()),
                ("trees", forest.component_count.to_string()),
            ],
        )
    );
    for edge in &forest.edges {
        println!(
            "E {} {} {}",
            record_field(&edge.from),
            record_field(&edge.to),
            edge.weight
        );
    }
    for edge in &forest.rejected {
        println!(
            "X {} {} {}",
            record_field(&edge.from),
            record_field(&edge.to),
            edge.weight
        );
    }
}
