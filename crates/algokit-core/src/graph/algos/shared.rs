//! Helpers shared by several algorithms

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::error::{AlgoError, Result};
use crate::graph::model::Graph;
use crate::graph::types::{Neighbor, NodeId};

/// Render a node identifier for error messages
pub fn label<N: NodeId>(node: &N) -> String {
    format!("{:?}", node)
}

/// Fail with `NegativeWeight` on the first negative arc, in adjacency order.
///
/// Scans the whole graph rather than the reachable part so the outcome
/// does not depend on the chosen source.
pub fn ensure_non_negative<N: NodeId>(graph: &Graph<N>) -> Result<()> {
    match graph.arcs().find(|(_, arc)| arc.weight < 0.0) {
        Some((from, arc)) => Err(AlgoError::NegativeWeight {
            from: label(from),
            to: label(&arc.node),
            weight: arc.weight,
        }),
        None => Ok(()),
    }
}

/// Event reported by [`walk`]
#[derive(Debug, Clone, Copy)]
pub enum Visit<'g, N> {
    /// First time `node` is reached; `parent` is `None` for the walk root
    Discover { node: &'g N, parent: Option<&'g N> },
    /// Arc `from -> to` whose target was already visited
    Revisit { from: &'g N, to: &'g N },
    /// Every arc of `node` has been examined
    Finish { node: &'g N },
}

struct Frame<'g, N> {
    node: &'g N,
    arcs: &'g [Neighbor<N>],
    next: usize,
}

/// Iterative depth-first walk from `root`.
///
/// Reproduces the event order of the recursive formulation (preorder
/// discovery, neighbors in adjacency order, postorder finish) with an
/// explicit frame stack, so depth is bounded by the heap rather than the
/// call stack. Nodes already in `visited` are not entered, which lets
/// callers chain walks over every component. Returns `Break` as soon as
/// `visit` does.
pub fn walk<'g, N, F>(
    graph: &'g Graph<N>,
    root: &'g N,
    visited: &mut HashSet<&'g N>,
    mut visit: F,
) -> Result<ControlFlow<()>>
where
    N: NodeId,
    F: FnMut(Visit<'g, N>) -> ControlFlow<()>,
{
    if !visited.insert(root) {
        return Ok(ControlFlow::Continue(()));
    }
    if visit(Visit::Discover {
        node: root,
        parent: None,
    })
    .is_break()
    {
        return Ok(ControlFlow::Break(()));
    }

    let mut stack = vec![Frame {
        node: root,
        arcs: graph.neighbors(root)?,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let arcs = frame.arcs;
        let Some(arc) = arcs.get(frame.next) else {
            stack.pop();
            if visit(Visit::Finish { node }).is_break() {
                return Ok(ControlFlow::Break(()));
            }
            continue;
        };
        frame.next += 1;

        let target = &arc.node;
        let flow = if visited.insert(target) {
            stack.push(Frame {
                node: target,
                arcs: graph.neighbors(target)?,
                next: 0,
            });
            visit(Visit::Discover {
                node: target,
                parent: Some(node),
            })
        } else {
            visit(Visit::Revisit { from: node, to: target })
        };
        if flow.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// [`walk`] for callers that observe every event and never stop early
pub fn walk_all<'g, N, F>(
    graph: &'g Graph<N>,
    root: &'g N,
    visited: &mut HashSet<&'g N>,
    mut visit: F,
) -> Result<()>
where
    N: NodeId,
    F: FnMut(Visit<'g, N>),
{
    walk(graph, root, visited, |event| {
        visit(event);
        ControlFlow::Continue(())
    })
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::GraphKind;

    fn events(graph: &Graph<u32>, root: u32) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut log = Vec::new();
        let root = graph.nodes().find(|n| **n == root).unwrap();
        walk_all(graph, root, &mut visited, |event| {
            log.push(match event {
                Visit::Discover { node, .. } => format!("+{}", node),
                Visit::Revisit { from, to } => format!("{}~{}", from, to),
                Visit::Finish { node } => format!("-{}", node),
            });
        })
        .unwrap();
        log
    }

    #[test]
    fn test_walk_matches_recursive_event_order() {
        let graph = Graph::from_adjacency(
            GraphKind::Directed,
            vec![(0, vec![(1, 1.0), (2, 1.0)]), (1, vec![(2, 1.0)]), (2, vec![(0, 1.0)])],
        )
        .unwrap();
        assert_eq!(
            events(&graph, 0),
            vec!["+0", "+1", "+2", "2~0", "-2", "-1", "0~2", "-0"]
        );
    }

    #[test]
    fn test_walk_stops_on_break() {
        let graph = Graph::from_adjacency(
            GraphKind::Directed,
            vec![(0, vec![(1, 1.0)]), (1, vec![(2, 1.0)])],
        )
        .unwrap();
        let mut visited = HashSet::new();
        let mut seen = Vec::new();
        let flow = walk(&graph, &0, &mut visited, |event| match event {
            Visit::Discover { node, .. } => {
                seen.push(*node);
                if *node == 1 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
            _ => ControlFlow::Continue(()),
        })
        .unwrap();
        assert!(flow.is_break());
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_walk_all_chains_over_components() {
        let graph = Graph::from_adjacency(
            GraphKind::Directed,
            vec![(0, vec![(1, 1.0)]), (2, vec![(1, 1.0)])],
        )
        .unwrap();
        let mut visited = HashSet::new();
        let mut finished = Vec::new();
        for root in graph.nodes() {
            walk_all(&graph, root, &mut visited, |event| {
                if let Visit::Finish { node } = event {
                    finished.push(*node);
                }
            })
            .unwrap();
        }
        assert_eq!(finished, vec![1, 0, 2]);
    }

    #[test]
    fn test_ensure_non_negative_reports_first_arc() {
        let graph = Graph::from_adjacency(
            GraphKind::Directed,
            vec![(0, vec![(1, 2.0)]), (1, vec![(2, -1.0)])],
        )
        .unwrap();
        let err = ensure_non_negative(&graph).unwrap_err();
        assert_eq!(err.to_string(), "negative edge weight -1 on 1 -> 2");
    }
}
