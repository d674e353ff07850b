use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::path::reconstruct_path;
use crate::graph::results::Traversal;
use crate::graph::types::{GraphKind, NodeId};
use crate::trace_time;

/// Breadth-first traversal from `source`.
///
/// Nodes are marked when enqueued, so each reachable node is expanded once
/// and `depths` holds the minimum hop count. Neighbors are explored in
/// adjacency order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<Traversal<N>> {
    let start = Instant::now();
    graph.require(source)?;

    let traversal = explore(graph, source, None)?;

    debug!(visited = traversal.order.len(), "bfs complete");
    trace_time!(start, "bfs");
    Ok(traversal)
}

/// Reachable nodes grouped by hop distance from `source`.
///
/// Level 0 is `[source]`; within a level nodes keep BFS visit order.
pub fn bfs_levels<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<Vec<Vec<N>>> {
    let traversal = bfs(graph, source)?;

    let mut levels: Vec<Vec<N>> = Vec::new();
    for node in traversal.order {
        let depth = traversal.depths.get(&node).copied().unwrap_or_default();
        if levels.len() <= depth {
            levels.resize_with(depth + 1, Vec::new);
        }
        levels[depth].push(node);
    }
    Ok(levels)
}

/// Fewest-hop path from `from` to `to`, or `None` when `to` is unreachable.
///
/// The search stops as soon as `to` is discovered.
pub fn bfs_shortest_path<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<Option<Vec<N>>> {
    graph.require(from)?;
    graph.require(to)?;

    let traversal = explore(graph, from, Some(to))?;
    Ok(traversal.path_to(to))
}

/// Hop distance from `from` to `to`, or `None` when unreachable
pub fn bfs_distance<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<Option<usize>> {
    Ok(bfs_shortest_path(graph, from, to)?.map(|path| path.len() - 1))
}

/// Fewest-hop path from `from` to `to`, searched from both ends at once.
///
/// The two searches expand one whole level at a time, alternating sides;
/// the first node discovered by both closes a shortest path. Directed
/// graphs run the backward search over the transposed graph. The path has
/// the same length as `bfs_shortest_path` but may pick a different route
/// among equally short ones.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs_bidirectional<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<Option<Vec<N>>> {
    graph.require(from)?;
    graph.require(to)?;
    if from == to {
        return Ok(Some(vec![from.clone()]));
    }

    let transposed;
    let backward_graph = if graph.is_directed() {
        transposed = graph.transposed();
        &transposed
    } else {
        graph
    };

    let mut forward = Frontier::new(from);
    let mut backward = Frontier::new(to);
    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        let meeting = match forward.expand_level(graph, &backward.parents)? {
            Some(node) => Some(node),
            None => backward.expand_level(backward_graph, &forward.parents)?,
        };
        if let Some(meeting) = meeting {
            trace!(node = ?meeting, "searches met");
            return Ok(join_halves(&forward, &backward, from, to, &meeting));
        }
    }
    Ok(None)
}

/// One side of a bidirectional search
struct Frontier<N> {
    parents: IndexMap<N, Option<N>>,
    queue: VecDeque<N>,
}

impl<N: NodeId> Frontier<N> {
    fn new(root: &N) -> Self {
        Self {
            parents: IndexMap::from([(root.clone(), None)]),
            queue: VecDeque::from([root.clone()]),
        }
    }

    /// Expand every node of the current level; returns the first newly
    /// discovered node that `other` has already reached.
    fn expand_level(&mut self, graph: &Graph<N>, other: &IndexMap<N, Option<N>>) -> Result<Option<N>> {
        for _ in 0..self.queue.len() {
            let Some(current) = self.queue.pop_front() else {
                break;
            };
            for arc in graph.neighbors(&current)? {
                if self.parents.contains_key(&arc.node) {
                    continue;
                }
                self.parents
                    .insert(arc.node.clone(), Some(current.clone()));
                if other.contains_key(&arc.node) {
                    return Ok(Some(arc.node.clone()));
                }
                self.queue.push_back(arc.node.clone());
            }
        }
        Ok(None)
    }
}

fn join_halves<N: NodeId>(
    forward: &Frontier<N>,
    backward: &Frontier<N>,
    from: &N,
    to: &N,
    meeting: &N,
) -> Option<Vec<N>> {
    let mut path = reconstruct_path(&forward.parents, from, meeting)?;
    let mut tail = reconstruct_path(&backward.parents, to, meeting)?;
    tail.reverse();
    path.extend(tail.into_iter().skip(1));
    Some(path)
}

/// Connected components of an undirected graph.
///
/// Components are listed in order of their first node in insertion order;
/// members keep BFS visit order from that node. Directed graphs fail with
/// `InvalidGraphMode` (see `strongly_connected_components`).
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn connected_components<N: NodeId>(graph: &Graph<N>) -> Result<Vec<Vec<N>>> {
    graph.require_kind(GraphKind::Undirected, "connected_components")?;

    let mut seen: HashSet<N> = HashSet::new();
    let mut components = Vec::new();
    for node in graph.nodes() {
        if seen.contains(node) {
            continue;
        }
        let traversal = explore(graph, node, None)?;
        seen.extend(traversal.order.iter().cloned());
        components.push(traversal.order);
    }

    debug!(count = components.len(), "components found");
    Ok(components)
}

/// Whether an undirected graph forms a single component.
///
/// The empty graph counts as connected.
pub fn is_connected<N: NodeId>(graph: &Graph<N>) -> Result<bool> {
    graph.require_kind(GraphKind::Undirected, "is_connected")?;
    let Some(first) = graph.nodes().next() else {
        return Ok(true);
    };
    let traversal = explore(graph, first, None)?;
    Ok(traversal.order.len() == graph.node_count())
}

/// Core BFS loop shared by every entry point; `source` must be registered.
fn explore<N: NodeId>(graph: &Graph<N>, source: &N, target: Option<&N>) -> Result<Traversal<N>> {
    let mut traversal = Traversal::start(source.clone());
    let mut queue: VecDeque<(&N, usize)> = VecDeque::from([(source, 0)]);

    while let Some((current, depth)) = queue.pop_front() {
        traversal.order.push(current.clone());
        if target == Some(current) {
            break;
        }

        for arc in graph.neighbors(current)? {
            if traversal.parents.contains_key(&arc.node) {
                continue;
            }
            traversal
                .parents
                .insert(arc.node.clone(), Some(current.clone()));
            traversal.depths.insert(arc.node.clone(), depth + 1);
            queue.push_back((&arc.node, depth + 1));
        }
    }

    Ok(traversal)
}
