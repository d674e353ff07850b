//! All-pairs shortest paths
//!
//! The relaxation works on a dense `DistanceMatrix`; `floyd_warshall_graph`
//! derives that matrix from a `Graph` (node insertion order is the matrix
//! index) and keeps a next-hop matrix alongside for path reconstruction.

use std::time::Instant;

use indexmap::IndexSet;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{AlgoError, Result};
use crate::graph::algos::shared::label;
use crate::graph::model::Graph;
use crate::graph::types::{Cost, NodeId};
use crate::trace_time;

/// Square matrix of path costs; `Cost::INFINITY` marks a missing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Cost>,
}

impl DistanceMatrix {
    /// `size` x `size` matrix with a zero diagonal and no edges
    pub fn new(size: usize) -> Self {
        let mut cells = vec![Cost::INFINITY; size * size];
        for i in 0..size {
            cells[i * size + i] = Cost::ZERO;
        }
        Self { size, cells }
    }

    /// Build from rows of raw weights, `f64::INFINITY` meaning "no edge".
    ///
    /// Rows are taken as given, diagonal included. Fails with
    /// `InvalidMatrix` if the rows are ragged or a cell is NaN or `-inf`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AlgoError::InvalidMatrix {
                    reason: format!("row {} has {} cells, expected {}", i, row.len(), size),
                });
            }
            if let Some(j) = row.iter().position(|w| !is_cell_weight(*w)) {
                return Err(AlgoError::InvalidMatrix {
                    reason: format!("cell ({}, {}) is {}", i, j, row[j]),
                });
            }
            cells.extend(row.into_iter().map(Cost::new));
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost at row `i`, column `j`; `None` outside the matrix
    pub fn get(&self, i: usize, j: usize) -> Option<Cost> {
        self.slot(i, j).map(|slot| self.cells[slot])
    }

    /// Overwrite one cell.
    ///
    /// Fails with `InvalidMatrix` outside the matrix or for a NaN or `-inf`
    /// cost.
    pub fn set(&mut self, i: usize, j: usize, cost: Cost) -> Result<()> {
        let Some(slot) = self.slot(i, j) else {
            return Err(AlgoError::InvalidMatrix {
                reason: format!(
                    "cell ({}, {}) outside a {}x{} matrix",
                    i, j, self.size, self.size
                ),
            });
        };
        if !is_cell_weight(cost.value()) {
            return Err(AlgoError::InvalidMatrix {
                reason: format!("cell ({}, {}) is {}", i, j, cost.value()),
            });
        }
        self.cells[slot] = cost;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    fn slot(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.size && j < self.size).then_some(i * self.size + j)
    }

    fn at(&self, i: usize, j: usize) -> Cost {
        self.cells[i * self.size + j]
    }

    fn put(&mut self, i: usize, j: usize, cost: Cost) {
        self.cells[i * self.size + j] = cost;
    }

    /// Indices whose diagonal cell is negative
    fn negative_diagonal(&self) -> Vec<usize> {
        (0..self.size)
            .filter(|&i| self.at(i, i).is_negative())
            .collect()
    }
}

/// Finite weights and `+inf` ("no edge") are valid cells
fn is_cell_weight(weight: f64) -> bool {
    weight.is_finite() || weight == f64::INFINITY
}

/// Serialized as nested rows; unreachable cells become `null`
impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Relax `dist` in place with `k` as the outermost loop.
///
/// Round `k` only combines paths whose intermediate nodes are all below
/// `k`. `on_improve(i, j, k)` fires for every strict improvement.
fn relax(dist: &mut DistanceMatrix, mut on_improve: impl FnMut(usize, usize, usize)) {
    let n = dist.size();
    for k in 0..n {
        for i in 0..n {
            let through_k = dist.at(i, k);
            if !through_k.is_finite() {
                continue;
            }
            for j in 0..n {
                let onward = dist.at(k, j);
                if !onward.is_finite() {
                    continue;
                }
                let candidate = through_k + onward;
                if candidate < dist.at(i, j) {
                    dist.put(i, j, candidate);
                    on_improve(i, j, k);
                }
            }
        }
    }
}

/// Fully relaxed all-pairs distances for a dense matrix.
///
/// Negative weights are allowed; a negative cell on the diagonal after
/// relaxation means a negative cycle and fails with `NegativeCycle` naming
/// the affected indices.
#[tracing::instrument(skip(matrix), fields(size = matrix.size()))]
pub fn floyd_warshall(matrix: &DistanceMatrix) -> Result<DistanceMatrix> {
    let start = Instant::now();
    let mut dist = matrix.clone();
    relax(&mut dist, |_, _, _| {});

    let negative = dist.negative_diagonal();
    if !negative.is_empty() {
        return Err(AlgoError::NegativeCycle {
            nodes: negative.iter().map(ToString::to_string).collect(),
        });
    }

    trace_time!(start, "floyd_warshall");
    Ok(dist)
}

/// All-pairs result over a graph's nodes, with next hops for paths.
#[derive(Debug, Clone, Serialize)]
pub struct AllPairs<N: NodeId> {
    nodes: IndexSet<N>,
    distances: DistanceMatrix,
    #[serde(skip)]
    next: Vec<Option<usize>>,
}

impl<N: NodeId> AllPairs<N> {
    /// Nodes in matrix order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.distances
    }

    fn index(&self, node: &N) -> Result<usize> {
        self.nodes
            .get_index_of(node)
            .ok_or_else(|| AlgoError::unknown_node(node))
    }

    /// Shortest distance from `from` to `to`; `Cost::INFINITY` if unreachable
    pub fn distance(&self, from: &N, to: &N) -> Result<Cost> {
        Ok(self.distances.at(self.index(from)?, self.index(to)?))
    }

    /// Shortest path from `from` to `to`, or `None` if unreachable
    pub fn path(&self, from: &N, to: &N) -> Result<Option<Vec<N>>> {
        let (mut i, j) = (self.index(from)?, self.index(to)?);
        let n = self.nodes.len();
        if self.next[i * n + j].is_none() {
            return Ok(None);
        }

        let mut path = vec![from.clone()];
        while i != j {
            let Some(hop) = self.next[i * n + j] else {
                return Ok(None);
            };
            i = hop;
            match self.nodes.get_index(i) {
                Some(node) => path.push(node.clone()),
                None => return Ok(None),
            }
            if path.len() > n {
                return Ok(None);
            }
        }
        Ok(Some(path))
    }
}

/// Floyd–Warshall over a graph.
///
/// Parallel edges keep the cheapest weight. Non-negative self-loops leave
/// the zero diagonal alone; a negative self-loop lowers it and surfaces as a
/// negative cycle. Undirected edges fill both cells.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn floyd_warshall_graph<N: NodeId>(graph: &Graph<N>) -> Result<AllPairs<N>> {
    let start = Instant::now();
    let nodes: IndexSet<N> = graph.nodes().cloned().collect();
    let n = nodes.len();

    let mut dist = DistanceMatrix::new(n);
    let mut next: Vec<Option<usize>> = vec![None; n * n];
    for i in 0..n {
        next[i * n + i] = Some(i);
    }

    for (from, arc) in graph.arcs() {
        let i = nodes
            .get_index_of(from)
            .ok_or_else(|| AlgoError::unknown_node(from))?;
        let j = nodes
            .get_index_of(&arc.node)
            .ok_or_else(|| AlgoError::unknown_node(&arc.node))?;
        let weight = Cost::new(arc.weight);
        if weight < dist.at(i, j) {
            dist.put(i, j, weight);
            next[i * n + j] = Some(j);
        }
    }

    relax(&mut dist, |i, j, k| next[i * n + j] = next[i * n + k]);

    let negative = dist.negative_diagonal();
    if !negative.is_empty() {
        let cycle: Vec<String> = negative
            .into_iter()
            .filter_map(|i| nodes.get_index(i).map(label))
            .collect();
        debug!(nodes = ?cycle, "negative cycle");
        return Err(AlgoError::NegativeCycle { nodes: cycle });
    }

    trace_time!(start, "floyd_warshall_graph");
    Ok(AllPairs {
        nodes,
        distances: dist,
        next,
    })
}

/// Which nodes reach which, a path of length zero included.
#[derive(Debug, Clone, Serialize)]
pub struct Reachability<N: NodeId> {
    nodes: IndexSet<N>,
    reach: Vec<bool>,
}

impl<N: NodeId> Reachability<N> {
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Whether `to` is reachable from `from`; `false` for unknown nodes
    pub fn reaches(&self, from: &N, to: &N) -> bool {
        match (self.nodes.get_index_of(from), self.nodes.get_index_of(to)) {
            (Some(i), Some(j)) => self.reach[i * self.nodes.len() + j],
            _ => false,
        }
    }

    /// Every node reachable from `from`, in matrix order
    pub fn reachable_from<'a>(&'a self, from: &N) -> Vec<&'a N> {
        self.nodes
            .iter()
            .filter(|to| self.reaches(from, to))
            .collect()
    }
}

/// Transitive closure (Warshall's boolean form of the same k-outer loop).
///
/// Weights are ignored; every node reaches itself.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn transitive_closure<N: NodeId>(graph: &Graph<N>) -> Reachability<N> {
    let nodes: IndexSet<N> = graph.nodes().cloned().collect();
    let n = nodes.len();
    let mut reach = vec![false; n * n];
    for i in 0..n {
        reach[i * n + i] = true;
    }
    for (from, arc) in graph.arcs() {
        if let (Some(i), Some(j)) = (nodes.get_index_of(from), nodes.get_index_of(&arc.node)) {
            reach[i * n + j] = true;
        }
    }

    for k in 0..n {
        for i in 0..n {
            if !reach[i * n + k] {
                continue;
            }
            for j in 0..n {
                if reach[k * n + j] {
                    reach[i * n + j] = true;
                }
            }
        }
    }

    Reachability { nodes, reach }
}
