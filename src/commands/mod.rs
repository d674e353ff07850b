//! CLI commands for algokit

pub mod dispatch;
pub mod helpers;
pub mod mst;
pub mod shortest;
pub mod traverse;
