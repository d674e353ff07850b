use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;
use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{AlgoError, Result};
use crate::graph::algos::shared::{label, walk, walk_all, Visit};
use crate::graph::model::Graph;
use crate::graph::path::reconstruct_path;
use crate::graph::results::Traversal;
use crate::graph::types::{GraphKind, Neighbor, NodeId};
use crate::trace_time;

/// Depth-first traversal from `source`.
///
/// Visit order is the preorder of the recursive formulation: a node is
/// recorded when first reached and its neighbors are followed in adjacency
/// order. Runs on an explicit stack, so long chains cannot exhaust the call
/// stack. `depths` holds the depth in the DFS tree, not the hop distance.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<Traversal<N>> {
    let start = Instant::now();
    graph.require(source)?;

    let mut traversal = Traversal::start(source.clone());
    let mut visited = HashSet::new();
    walk_all(graph, source, &mut visited, |event| {
        if let Visit::Discover { node, parent } = event {
            traversal.order.push(node.clone());
            if let Some(parent) = parent {
                let depth = traversal.depths.get(parent).copied().unwrap_or_default() + 1;
                traversal.parents.insert(node.clone(), Some(parent.clone()));
                traversal.depths.insert(node.clone(), depth);
            }
        }
    })?;

    debug!(visited = traversal.order.len(), "dfs complete");
    trace_time!(start, "dfs");
    Ok(traversal)
}

/// Some path from `from` to `to` found depth-first, or `None`.
///
/// The path follows the DFS tree and is not necessarily the shortest.
pub fn dfs_find_path<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<Option<Vec<N>>> {
    graph.require(from)?;
    graph.require(to)?;

    let mut parents: IndexMap<N, Option<N>> = IndexMap::new();
    let mut visited = HashSet::new();
    let flow = walk(graph, from, &mut visited, |event| match event {
        Visit::Discover { node, parent } => {
            parents.insert(node.clone(), parent.cloned());
            if node == to {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
        _ => ControlFlow::Continue(()),
    })?;
    if flow.is_continue() {
        return Ok(None);
    }

    Ok(reconstruct_path(&parents, from, to))
}

/// Whether `to` is reachable from `from`
pub fn dfs_path_exists<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<bool> {
    Ok(dfs_find_path(graph, from, to)?.is_some())
}

/// Every simple path from `from` to `to`, in depth-first discovery order.
///
/// A node never repeats within a path. Parallel arcs yield one path each.
/// The number of paths can grow exponentially with the graph size.
/// `from == to` gives the single path `[from]`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs_all_paths<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<Vec<Vec<N>>> {
    graph.require(from)?;
    graph.require(to)?;
    if from == to {
        return Ok(vec![vec![from.clone()]]);
    }

    let mut paths: Vec<Vec<N>> = Vec::new();
    let mut path: Vec<&N> = vec![from];
    let mut on_path: HashSet<&N> = HashSet::from([from]);
    let mut stack: Vec<(&[Neighbor<N>], usize)> = vec![(graph.neighbors(from)?, 0)];

    while let Some(frame) = stack.last_mut() {
        let arcs = frame.0;
        let Some(arc) = arcs.get(frame.1) else {
            stack.pop();
            if let Some(node) = path.pop() {
                on_path.remove(node);
            }
            continue;
        };
        frame.1 += 1;

        let target = &arc.node;
        if on_path.contains(target) {
            continue;
        }
        if target == to {
            paths.push(path.iter().copied().chain([target]).cloned().collect());
            continue;
        }
        on_path.insert(target);
        path.push(target);
        stack.push((graph.neighbors(target)?, 0));
    }

    debug!(count = paths.len(), "simple paths found");
    Ok(paths)
}

/// Topological order of a directed acyclic graph.
///
/// Roots are taken in node insertion order and the result is the reverse
/// DFS finishing order. Any cycle (a self-loop included) fails with
/// `CycleDetected` naming a node on it.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn topological_sort<N: NodeId>(graph: &Graph<N>) -> Result<Vec<N>> {
    graph.require_kind(GraphKind::Directed, "topological_sort")?;

    match directed_finish_order(graph)? {
        Ok(mut finished) => {
            finished.reverse();
            Ok(finished.into_iter().cloned().collect())
        }
        Err(node) => Err(AlgoError::CycleDetected { node: label(node) }),
    }
}

/// Whether the graph contains a cycle.
///
/// Directed graphs look for a back edge. Undirected graphs look for any
/// non-tree arc other than the single arc back to the DFS parent, so
/// self-loops and parallel edges count as cycles.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn has_cycle<N: NodeId>(graph: &Graph<N>) -> Result<bool> {
    if graph.is_directed() {
        return Ok(directed_finish_order(graph)?.is_err());
    }

    let mut visited = HashSet::new();
    let mut parent_of: HashMap<&N, Option<&N>> = HashMap::new();
    let mut skipped_parent_arc: HashSet<&N> = HashSet::new();
    for root in graph.nodes() {
        let flow = walk(graph, root, &mut visited, |event| match event {
            Visit::Discover { node, parent } => {
                parent_of.insert(node, parent);
                ControlFlow::Continue(())
            }
            Visit::Revisit { from, to } => {
                let is_parent = parent_of.get(from).copied().flatten() == Some(to);
                if is_parent && skipped_parent_arc.insert(from) {
                    ControlFlow::Continue(())
                } else {
                    trace!(from = ?from, to = ?to, "non-tree arc closes a cycle");
                    ControlFlow::Break(())
                }
            }
            Visit::Finish { .. } => ControlFlow::Continue(()),
        })?;
        if flow.is_break() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Strongly connected components of a directed graph (Kosaraju).
///
/// The first pass records finishing order over all nodes; the second walks
/// the transposed graph in reverse finishing order, and each walk collects
/// one component. Components come out in topological order of the
/// condensation (sources first).
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn strongly_connected_components<N: NodeId>(graph: &Graph<N>) -> Result<Vec<Vec<N>>> {
    graph.require_kind(GraphKind::Directed, "strongly_connected_components")?;

    let mut visited = HashSet::new();
    let mut finished: Vec<&N> = Vec::with_capacity(graph.node_count());
    for root in graph.nodes() {
        walk_all(graph, root, &mut visited, |event| {
            if let Visit::Finish { node } = event {
                finished.push(node);
            }
        })?;
    }

    let transposed = graph.transposed();
    let mut assigned = HashSet::new();
    let mut components = Vec::new();
    for root in finished.iter().rev() {
        let mut component = Vec::new();
        walk_all(&transposed, *root, &mut assigned, |event| {
            if let Visit::Discover { node, .. } = event {
                component.push(node.clone());
            }
        })?;
        if !component.is_empty() {
            components.push(component);
        }
    }

    debug!(count = components.len(), "strongly connected components found");
    Ok(components)
}

/// DFS finishing order over every node of a directed graph.
///
/// The inner `Err` carries a node on the first cycle found: the target of
/// an arc into a node that is still on the stack.
fn directed_finish_order<N: NodeId>(graph: &Graph<N>) -> Result<std::result::Result<Vec<&N>, &N>> {
    let mut visited = HashSet::new();
    let mut on_stack: HashSet<&N> = HashSet::new();
    let mut finished = Vec::with_capacity(graph.node_count());
    let mut cycle_at = None;

    for root in graph.nodes() {
        let flow = walk(graph, root, &mut visited, |event| match event {
            Visit::Discover { node, .. } => {
                on_stack.insert(node);
                ControlFlow::Continue(())
            }
            Visit::Revisit { to, .. } if on_stack.contains(to) => {
                cycle_at = Some(to);
                ControlFlow::Break(())
            }
            Visit::Revisit { .. } => ControlFlow::Continue(()),
            Visit::Finish { node } => {
                on_stack.remove(node);
                finished.push(node);
                ControlFlow::Continue(())
            }
        })?;
        if flow.is_break() {
            break;
        }
    }

    Ok(match cycle_at {
        Some(node) => Err(node),
        None => Ok(finished),
    })
}

#[cfg(test)]
mod tests;
