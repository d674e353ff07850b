use std::time::Instant;

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::results::SpanningForest;
use crate::graph::types::{Edge, GraphKind, NodeId};
use crate::trace_time;
use crate::union_find::DisjointSet;

/// Minimum spanning forest of an undirected graph.
///
/// Edges are stably sorted by weight, so equal weights keep insertion
/// order. An edge is accepted when `union` merges two sets and rejected
/// when its endpoints already share one. Disconnected graphs yield one tree
/// per component. The scan stops early once V - 1 edges are accepted.
/// Directed graphs fail with `InvalidGraphMode`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn kruskal<N: NodeId>(graph: &Graph<N>) -> Result<SpanningForest<N>> {
    let start = Instant::now();
    graph.require_kind(GraphKind::Undirected, "kruskal")?;

    let mut sorted: Vec<&Edge<N>> = graph.edges().iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets: DisjointSet<N> = graph.nodes().cloned().collect();
    let tree_size = graph.node_count().saturating_sub(1);
    let mut edges = Vec::with_capacity(tree_size);
    let mut rejected = Vec::new();
    let mut total_weight = 0.0;

    for edge in sorted {
        if edges.len() == tree_size {
            break;
        }
        if sets.union(&edge.from, &edge.to)? {
            total_weight += edge.weight;
            edges.push(edge.clone());
        } else {
            trace!(from = ?edge.from, to = ?edge.to, weight = edge.weight, "edge closes a cycle");
            rejected.push(edge.clone());
        }
    }

    let component_count = sets.set_count();
    debug!(
        accepted = edges.len(),
        rejected = rejected.len(),
        component_count,
        total_weight,
        "kruskal complete"
    );
    trace_time!(start, "kruskal");
    Ok(SpanningForest {
        edges,
        total_weight,
        rejected,
        component_count,
    })
}
