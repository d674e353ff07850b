//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bellman_ford`: Single-source shortest paths with negative weights
//! - `bfs`: Breadth-first traversal, hop levels, fewest-hop paths, components
//! - `dfs`: Depth-first traversal, simple paths, cycle checks, topological order, SCCs
//! - `dijkstra`: Single-source shortest paths over non-negative weights
//! - `floyd_warshall`: All-pairs shortest paths and transitive closure
//! - `kruskal`: Minimum spanning forest
//! - `shared`: Common utilities used by multiple algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod shared;

pub use bellman_ford::bellman_ford;
pub use bfs::{
    bfs, bfs_bidirectional, bfs_distance, bfs_levels, bfs_shortest_path, connected_components,
    is_connected,
};
pub use dfs::{
    dfs, dfs_all_paths, dfs_find_path, dfs_path_exists, has_cycle, strongly_connected_components,
    topological_sort,
};
pub use dijkstra::{dijkstra, dijkstra_path};
pub use floyd_warshall::{
    floyd_warshall, floyd_warshall_graph, transitive_closure, AllPairs, DistanceMatrix,
    Reachability,
};
pub use kruskal::kruskal;
