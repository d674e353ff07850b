//! Single-source shortest paths that tolerate negative weights

use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{AlgoError, Result};
use crate::graph::algos::shared::label;
use crate::graph::model::Graph;
use crate::graph::results::ShortestPaths;
use crate::graph::types::{Cost, NodeId};
use crate::trace_time;

/// Bellman–Ford relaxation from `source`.
///
/// Runs at most V−1 rounds over every arc and stops early once a round
/// changes nothing. Negative weights are fine; a negative cycle reachable
/// from `source` fails with `NegativeCycle` listing the cycle's nodes.
/// Cycles the source cannot reach do not affect the result. An undirected
/// edge with a negative weight is itself such a cycle.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bellman_ford<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    let start = Instant::now();
    graph.require(source)?;

    let mut distances: IndexMap<N, Cost> = graph
        .nodes()
        .map(|node| (node.clone(), Cost::INFINITY))
        .collect();
    let mut parents: IndexMap<N, Option<N>> =
        graph.nodes().map(|node| (node.clone(), None)).collect();
    distances.insert(source.clone(), Cost::ZERO);

    let mut rounds = 0usize;
    for _ in 1..graph.node_count() {
        rounds += 1;
        if relax_round(graph, &mut distances, &mut parents).is_none() {
            break;
        }
    }

    if let Some(changed) = relax_round(graph, &mut distances, &mut parents) {
        let cycle = cycle_through(&parents, changed, graph.node_count());
        debug!(nodes = ?cycle, "negative cycle");
        return Err(AlgoError::NegativeCycle { nodes: cycle });
    }

    debug!(rounds, "bellman_ford complete");
    trace_time!(start, "bellman_ford", rounds = rounds);
    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        parents,
    })
}

/// One pass over every arc; returns the last node whose distance improved
fn relax_round<N: NodeId>(
    graph: &Graph<N>,
    distances: &mut IndexMap<N, Cost>,
    parents: &mut IndexMap<N, Option<N>>,
) -> Option<N> {
    let mut changed = None;
    for (from, arc) in graph.arcs() {
        let Some(base) = distances.get(from).copied() else {
            continue;
        };
        if !base.is_finite() {
            continue;
        }
        let candidate = base + Cost::new(arc.weight);
        let Some(recorded) = distances.get_mut(&arc.node) else {
            continue;
        };
        if candidate < *recorded {
            *recorded = candidate;
            if let Some(parent) = parents.get_mut(&arc.node) {
                *parent = Some(from.clone());
            }
            trace!(node = ?arc.node, %candidate, "relaxed");
            changed = Some(arc.node.clone());
        }
    }
    changed
}

/// Labels of the cycle found by walking parents back from `node`.
///
/// `node` improved after V−1 rounds, so V steps back along the parent chain
/// land on the cycle itself.
fn cycle_through<N: NodeId>(parents: &IndexMap<N, Option<N>>, node: N, steps: usize) -> Vec<String> {
    let parent_of = |n: &N| parents.get(n).cloned().flatten();

    let mut on_cycle = node;
    for _ in 0..steps {
        match parent_of(&on_cycle) {
            Some(parent) => on_cycle = parent,
            None => break,
        }
    }

    let mut cycle = vec![on_cycle.clone()];
    let mut current = parent_of(&on_cycle);
    while let Some(node) = current {
        if node == on_cycle || cycle.len() > steps {
            break;
        }
        current = parent_of(&node);
        cycle.push(node);
    }
    cycle.reverse();
    cycle.iter().map(label).collect()
}
