//! Graph model and algorithms
//!
//! Provides the adjacency-list graph every algorithm consumes, plus:
//! - BFS/DFS traversal and the helpers built on them
//! - Dijkstra, Bellman–Ford and Floyd–Warshall shortest paths
//! - Kruskal minimum spanning forest

pub mod algos;
pub mod model;
pub mod path;
pub mod results;
pub mod types;

pub use algos::{
    bellman_ford, bfs, bfs_bidirectional, bfs_distance, bfs_levels, bfs_shortest_path,
    connected_components, dfs, dfs_all_paths, dfs_find_path, dfs_path_exists, dijkstra,
    dijkstra_path, floyd_warshall, floyd_warshall_graph, has_cycle, is_connected, kruskal,
    strongly_connected_components, topological_sort, transitive_closure, AllPairs,
    DistanceMatrix, Reachability,
};
pub use model::Graph;
pub use path::reconstruct_path;
pub use results::{ShortestPaths, SpanningForest, Traversal};
pub use types::{Cost, Edge, GraphKind, Neighbor, NodeId};
