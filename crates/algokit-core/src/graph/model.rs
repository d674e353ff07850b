//! Adjacency-list graph model
//!
//! Nodes keep their insertion order, which fixes neighbor tie-breaking in
//! every traversal and the row order of dense matrices built from a graph.

use indexmap::IndexMap;

use crate::bail_unknown_node;
use crate::error::{AlgoError, Result};
use crate::graph::types::{Edge, GraphKind, Neighbor, NodeId};

/// A directed or undirected weighted graph.
///
/// `add_edge` requires both endpoints to have been registered with
/// `add_node` first; there is no implicit node creation. Undirected edges
/// are materialized as two arcs at insertion time (a self-loop becomes a
/// single arc). Parallel edges and self-loops are kept as given.
///
/// No removal operations exist, so a graph handed to an algorithm is
/// effectively immutable and can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    kind: GraphKind,
    adjacency: IndexMap<N, Vec<Neighbor<N>>>,
    edges: Vec<Edge<N>>,
}

impl<N: NodeId> Graph<N> {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Register a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add an edge of uniform weight 1
    pub fn add_edge(&mut self, from: &N, to: &N) -> Result<()> {
        self.add_weighted_edge(from, to, 1.0)
    }

    /// Add a weighted edge; the reverse arc is added for undirected graphs.
    ///
    /// Negative weights are accepted here (Floyd–Warshall and Kruskal handle
    /// them); Dijkstra rejects them at call time. NaN and infinite weights
    /// fail with `InvalidWeight`.
    pub fn add_weighted_edge(&mut self, from: &N, to: &N, weight: f64) -> Result<()> {
        if !self.adjacency.contains_key(from) {
            bail_unknown_node!(from);
        }
        if !self.adjacency.contains_key(to) {
            bail_unknown_node!(to);
        }
        if !weight.is_finite() {
            return Err(AlgoError::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight,
            });
        }

        self.push_arc(from, to, weight);
        if !self.kind.is_directed() && from != to {
            self.push_arc(to, from, weight);
        }
        self.edges.push(Edge::new(from.clone(), to.clone(), weight));
        Ok(())
    }

    fn push_arc(&mut self, from: &N, to: &N, weight: f64) {
        if let Some(arcs) = self.adjacency.get_mut(from) {
            arcs.push(Neighbor {
                node: to.clone(),
                weight,
            });
        }
    }

    /// Outgoing arcs of `node`, in insertion order
    pub fn neighbors(&self, node: &N) -> Result<&[Neighbor<N>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| AlgoError::unknown_node(node))
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Logical edges in insertion order (one entry per `add_edge` call)
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Every stored arc as `(from, neighbor)`; undirected edges appear twice
    pub fn arcs(&self) -> impl Iterator<Item = (&N, &Neighbor<N>)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, arcs)| arcs.iter().map(move |arc| (from, arc)))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Position of `node` in insertion order
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.adjacency.get_index_of(node)
    }

    /// Node at `index` in insertion order
    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.adjacency.get_index(index).map(|(node, _)| node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Fail with `UnknownNode` unless `node` is registered
    pub fn require(&self, node: &N) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(AlgoError::unknown_node(node))
        }
    }

    /// Fail with `InvalidGraphMode` unless the graph has the given kind
    pub(crate) fn require_kind(&self, kind: GraphKind, algorithm: &'static str) -> Result<()> {
        if self.kind == kind {
            return Ok(());
        }
        Err(AlgoError::InvalidGraphMode {
            algorithm,
            expected: match kind {
                GraphKind::Directed => "a directed",
                GraphKind::Undirected => "an undirected",
            },
        })
    }

    /// The graph with every arc reversed. Undirected graphs are returned as is.
    pub fn transposed(&self) -> Self {
        if !self.is_directed() {
            return self.clone();
        }
        let mut reversed = Graph::new(self.kind);
        for node in self.nodes() {
            reversed.add_node(node.clone());
        }
        for edge in &self.edges {
            reversed.push_arc(&edge.to, &edge.from, edge.weight);
            reversed
                .edges
                .push(Edge::new(edge.to.clone(), edge.from.clone(), edge.weight));
        }
        reversed
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl<N: NodeId> Graph<N> {
    /// Build a graph from an adjacency listing, registering every key and
    /// neighbor in order of first appearance.
    pub fn from_adjacency<I, A>(kind: GraphKind, adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (N, f64)>,
    {
        let listing: Vec<(N, Vec<(N, f64)>)> = adjacency
            .into_iter()
            .map(|(node, arcs)| (node, arcs.into_iter().collect()))
            .collect();

        let mut graph = Graph::new(kind);
        for (node, arcs) in &listing {
            graph.add_node(node.clone());
            for (to, _) in arcs {
                graph.add_node(to.clone());
            }
        }
        for (node, arcs) in &listing {
            for (to, weight) in arcs {
                graph.add_weighted_edge(node, to, *weight)?;
            }
        }
        Ok(graph)
    }
}
