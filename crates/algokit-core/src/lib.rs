//! Algokit Core Library
//!
//! Classic graph algorithms and the structures they rest on: an
//! adjacency-list graph, a binary min-heap and a disjoint-set forest.
//! Every algorithm takes the graph by shared reference and returns a fresh
//! result, so one graph can serve concurrent callers.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod queue;
pub mod union_find;
