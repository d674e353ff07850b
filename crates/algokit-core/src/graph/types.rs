use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Bound satisfied by every type usable as a node identifier.
///
/// Node identifiers are hashed for O(1) adjacency lookup and printed with
/// `Debug` in error messages.
pub trait NodeId: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> NodeId for T {}

/// Accumulated path weight.
///
/// `Cost::INFINITY` is the sentinel for "unreachable". Costs are totally
/// ordered (via `f64::total_cmp`) so they can key a binary heap; graphs
/// reject NaN weights at insertion, so NaN never reaches a comparison.
#[derive(Debug, Clone, Copy)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const DEFAULT: Cost = Cost(1.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// The finite value, or `None` for the unreachable sentinel
    pub fn finite(&self) -> Option<f64> {
        self.is_finite().then_some(self.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl From<u32> for Cost {
    fn from(hops: u32) -> Self {
        Cost(f64::from(hops))
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else if self.0 > 0.0 {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    }
}

/// Unreachable costs serialize as `null`
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.finite() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_none(),
        }
    }
}

/// Whether edges are one-way arcs or two-way links. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Each edge is a single arc `from -> to`
    Directed,
    #[default]
    /// Each edge is stored as two arcs, one in each direction
    Undirected,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

impl std::str::FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            other => Err(format!(
                "unknown graph kind '{}' (expected: directed, undirected)",
                other
            )),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// One outgoing arc in an adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor<N> {
    pub node: N,
    pub weight: f64,
}

/// A logical edge as it was inserted.
///
/// Undirected edges are recorded once here even though the adjacency holds
/// an arc in each direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Edge { from, to, weight }
    }

    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_default() {
        let cost = Cost::DEFAULT;
        assert_eq!(cost.value(), 1.0);
        assert!(cost.is_finite());
    }

    #[test]
    fn test_cost_from_u32() {
        let cost = Cost::from(5);
        assert_eq!(cost.value(), 5.0);
    }

    #[test]
    fn test_cost_addition() {
        let sum = Cost::from(2) + Cost::from(3);
        assert_eq!(sum.value(), 5.0);

        let mut acc = Cost::ZERO;
        acc += Cost::new(1.5);
        acc += Cost::new(2.5);
        assert_eq!(acc, Cost::new(4.0));
    }

    #[test]
    fn test_cost_infinity_absorbs() {
        let sum = Cost::INFINITY + Cost::new(-3.0);
        assert!(!sum.is_finite());
        assert_eq!(sum.finite(), None);
    }

    #[test]
    fn test_cost_ordering() {
        assert!(Cost::new(1.0) < Cost::new(2.0));
        assert!(Cost::new(-1.0) < Cost::ZERO);
        assert!(Cost::new(1e300) < Cost::INFINITY);
        assert_eq!(Cost::new(3.0).max(Cost::new(2.0)), Cost::new(3.0));
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(Cost::new(3.0).to_string(), "3");
        assert_eq!(Cost::new(2.5).to_string(), "2.5");
        assert_eq!(Cost::INFINITY.to_string(), "inf");
    }

    #[test]
    fn test_cost_serializes_infinity_as_null() {
        assert_eq!(serde_json::to_string(&Cost::new(4.0)).unwrap(), "4.0");
        assert_eq!(serde_json::to_string(&Cost::INFINITY).unwrap(), "null");
    }

    #[test]
    fn test_graph_kind_from_str() {
        assert_eq!("Directed".parse::<GraphKind>(), Ok(GraphKind::Directed));
        assert_eq!("undirected".parse::<GraphKind>(), Ok(GraphKind::Undirected));
        assert!("mixed".parse::<GraphKind>().is_err());
    }

    #[test]
    fn test_edge_self_loop() {
        assert!(Edge::new(1, 1, 0.0).is_self_loop());
        assert!(!Edge::new(1, 2, 0.0).is_self_loop());
    }
}
