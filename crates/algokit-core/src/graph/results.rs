//! Result structures returned by the graph algorithms

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::path::reconstruct_path;
use crate::graph::types::{Cost, Edge, NodeId};

/// Outcome of a BFS or DFS from a single source.
///
/// Only reachable nodes appear in `parents` and `depths`. `depths` holds
/// hop counts along the parent chain (the minimum for BFS, the tree depth
/// for DFS).
#[derive(Debug, Clone, Serialize)]
pub struct Traversal<N: NodeId> {
    pub source: N,
    /// Every reachable node exactly once, in visit order
    pub order: Vec<N>,
    pub parents: IndexMap<N, Option<N>>,
    pub depths: IndexMap<N, usize>,
}

impl<N: NodeId> Traversal<N> {
    pub(crate) fn start(source: N) -> Self {
        let mut parents = IndexMap::new();
        let mut depths = IndexMap::new();
        parents.insert(source.clone(), None);
        depths.insert(source.clone(), 0);
        Self {
            source,
            order: Vec::new(),
            parents,
            depths,
        }
    }

    /// Whether `node` was reached from the source
    pub fn contains(&self, node: &N) -> bool {
        self.parents.contains_key(node)
    }

    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    pub fn depth(&self, node: &N) -> Option<usize> {
        self.depths.get(node).copied()
    }

    /// Path from the source to `node` through the traversal tree
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        reconstruct_path(&self.parents, &self.source, node)
    }
}

/// Single-source shortest-path distances.
///
/// Every graph node has an entry: unreachable nodes map to
/// `Cost::INFINITY` with no parent.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<N: NodeId> {
    pub source: N,
    pub distances: IndexMap<N, Cost>,
    pub parents: IndexMap<N, Option<N>>,
}

impl<N: NodeId> ShortestPaths<N> {
    /// Distance to `node`, or `None` if `node` is not in the graph
    pub fn distance(&self, node: &N) -> Option<Cost> {
        self.distances.get(node).copied()
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some_and(|d| d.is_finite())
    }

    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    /// Shortest path from the source to `node`, or `None` if unreachable
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        if !self.is_reachable(node) {
            return None;
        }
        reconstruct_path(&self.parents, &self.source, node)
    }

    /// Reachable nodes with their distances, in graph order
    pub fn reachable(&self) -> impl Iterator<Item = (&N, Cost)> + '_ {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(n, d)| (n, *d))
    }
}

/// Minimum spanning forest: one tree per connected component.
#[derive(Debug, Clone, Serialize)]
pub struct SpanningForest<N: NodeId> {
    /// Selected edges in the order they were accepted
    pub edges: Vec<Edge<N>>,
    pub total_weight: f64,
    /// Edges scanned and skipped because they would close a cycle
    pub rejected: Vec<Edge<N>>,
    /// Number of trees in the forest (isolated nodes count as trees)
    pub component_count: usize,
}

impl<N: NodeId> SpanningForest<N> {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the forest links `a` and `b` directly, in either orientation
    pub fn contains_edge(&self, a: &N, b: &N) -> bool {
        self.edges
            .iter()
            .any(|e| (&e.from == a && &e.to == b) || (&e.from == b && &e.to == a))
    }

    /// A forest over a connected graph is a spanning tree
    pub fn is_tree(&self) -> bool {
        self.component_count <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_start_records_source() {
        let traversal = Traversal::start("s");
        assert!(traversal.contains(&"s"));
        assert_eq!(traversal.depth(&"s"), Some(0));
        assert_eq!(traversal.parent(&"s"), None);
        assert_eq!(traversal.path_to(&"s"), Some(vec!["s"]));
    }

    #[test]
    fn test_shortest_paths_unreachable_has_no_path() {
        let paths = ShortestPaths {
            source: 0,
            distances: IndexMap::from([(0, Cost::ZERO), (1, Cost::new(2.0)), (2, Cost::INFINITY)]),
            parents: IndexMap::from([(0, None), (1, Some(0)), (2, None)]),
        };
        assert_eq!(paths.path_to(&1), Some(vec![0, 1]));
        assert_eq!(paths.path_to(&2), None);
        assert!(!paths.is_reachable(&2));
        assert_eq!(paths.distance(&7), None);
        assert_eq!(paths.reachable().count(), 2);
    }

    #[test]
    fn test_forest_contains_edge_either_orientation() {
        let forest = SpanningForest {
            edges: vec![Edge::new(1, 2, 1.0)],
            total_weight: 1.0,
            rejected: Vec::new(),
            component_count: 1,
        };
        assert!(forest.contains_edge(&2, &1));
        assert!(!forest.contains_edge(&1, &3));
        assert!(forest.is_tree());
    }
}
