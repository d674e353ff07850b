use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::algos::shared::ensure_non_negative;
use crate::graph::model::Graph;
use crate::graph::results::ShortestPaths;
use crate::graph::types::{Cost, NodeId};
use crate::queue::MinQueue;
use crate::trace_time;

/// Single-source shortest paths over non-negative weights.
///
/// Every arc is checked before any work starts, so a negative weight
/// anywhere in the graph fails with `NegativeWeight` and no distances are
/// produced. The queue uses lazy deletion: improved nodes are pushed again
/// and stale entries are dropped when popped. Among equal-cost paths the
/// first one relaxed wins, which is deterministic for a fixed insertion
/// order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    let start = Instant::now();
    graph.require(source)?;
    ensure_non_negative(graph)?;

    let mut distances: IndexMap<N, Cost> = graph
        .nodes()
        .map(|node| (node.clone(), Cost::INFINITY))
        .collect();
    let mut parents: IndexMap<N, Option<N>> =
        graph.nodes().map(|node| (node.clone(), None)).collect();
    distances.insert(source.clone(), Cost::ZERO);

    let mut queue: MinQueue<Cost, &N> = MinQueue::with_capacity(graph.node_count());
    queue.push(Cost::ZERO, source);
    let mut settled = 0usize;

    while !queue.is_empty() {
        let (cost, node) = queue.pop_min()?;
        let best = distances.get(node).copied().unwrap_or(Cost::INFINITY);
        if cost > best {
            trace!(node = ?node, %cost, %best, "skipping stale entry");
            continue;
        }
        settled += 1;

        for arc in graph.neighbors(node)? {
            let candidate = cost + Cost::new(arc.weight);
            let Some(recorded) = distances.get_mut(&arc.node) else {
                continue;
            };
            if candidate < *recorded {
                *recorded = candidate;
                if let Some(parent) = parents.get_mut(&arc.node) {
                    *parent = Some(node.clone());
                }
                trace!(node = ?arc.node, %candidate, "relaxed");
                queue.push(candidate, &arc.node);
            }
        }
    }

    debug!(settled, "dijkstra complete");
    trace_time!(start, "dijkstra", settled = settled);
    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        parents,
    })
}

/// Cheapest path from `from` to `to` and its cost, or `None` if unreachable
pub fn dijkstra_path<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<Option<(Vec<N>, Cost)>> {
    graph.require(to)?;
    let paths = dijkstra(graph, from)?;
    Ok(paths.path_to(to).zip(paths.distance(to)))
}
