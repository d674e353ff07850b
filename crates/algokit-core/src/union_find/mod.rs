//! Disjoint-set forest keyed by node identifier
//!
//! Elements are interned into a dense index on `make_set`; the parent-pointer
//! tree and ranks live in parallel vectors indexed by that slot.

use std::collections::HashMap;

use crate::bail_unknown_node;
use crate::error::Result;
use crate::graph::NodeId;

/// Union–find with path compression and union by rank.
///
/// Invariant: following `parent` from any slot reaches a root (a slot that
/// is its own parent) in finitely many steps, and every root's `rank` is an
/// upper bound on the height of its tree.
#[derive(Debug, Clone)]
pub struct DisjointSet<N> {
    slots: HashMap<N, usize>,
    elements: Vec<N>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl<N: NodeId> DisjointSet<N> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }

    /// Place `x` in a singleton set. No-op (returns `false`) if already present.
    pub fn make_set(&mut self, x: N) -> bool {
        if self.slots.contains_key(&x) {
            return false;
        }
        let slot = self.elements.len();
        self.slots.insert(x.clone(), slot);
        self.elements.push(x);
        self.parent.push(slot);
        self.rank.push(0);
        self.sets += 1;
        true
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node on the walked path is re-pointed directly at the root.
    pub fn find(&mut self, x: &N) -> Result<N> {
        let slot = self.slot(x)?;
        let root = self.find_slot(slot);
        Ok(self.elements[root].clone())
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` when both were already in the same set; Kruskal reads
    /// that as "this edge would close a cycle".
    pub fn union(&mut self, x: &N, y: &N) -> Result<bool> {
        let x_slot = self.slot(x)?;
        let y_slot = self.slot(y)?;
        let root_x = self.find_slot(x_slot);
        let root_y = self.find_slot(y_slot);
        if root_x == root_y {
            return Ok(false);
        }

        // Lower rank goes under higher; rank grows only on a tie
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Whether `x` and `y` currently share a representative
    pub fn same_set(&mut self, x: &N, y: &N) -> Result<bool> {
        let x_slot = self.slot(x)?;
        let y_slot = self.slot(y)?;
        Ok(self.find_slot(x_slot) == self.find_slot(y_slot))
    }

    pub fn contains(&self, x: &N) -> bool {
        self.slots.contains_key(x)
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Current partition, grouped by representative.
    ///
    /// Groups appear in order of their earliest registered member, and
    /// members keep registration order.
    pub fn sets(&mut self) -> Vec<Vec<N>> {
        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<N>> = Vec::new();
        for slot in 0..self.elements.len() {
            let root = self.find_slot(slot);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(self.elements[slot].clone());
        }
        groups
    }

    fn slot(&self, x: &N) -> Result<usize> {
        match self.slots.get(x) {
            Some(slot) => Ok(*slot),
            None => bail_unknown_node!(x),
        }
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

impl<N: NodeId> Default for DisjointSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> FromIterator<N> for DisjointSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut set = DisjointSet::new();
        for x in iter {
            set.make_set(x);
        }
        set
    }
}

#[cfg(test)]
mod tests;
