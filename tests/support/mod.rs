use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for algokit
pub fn algokit() -> Command {
    cargo_bin_cmd!("algokit")
}

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Directed weighted graph `{0:[(1,4),(2,1)], 1:[(3,1)], 2:[(1,2),(3,5)], 3:[]}`
/// plus an isolated node 9
pub const WEIGHTED_DIGRAPH: &str = r#"
directed = true
nodes = [0, 1, 2, 3, 9]

[[edges]]
from = 0
to = 1
weight = 4

[[edges]]
from = 0
to = 2
weight = 1

[[edges]]
from = 1
to = 3
weight = 1

[[edges]]
from = 2
to = 1
weight = 2

[[edges]]
from = 2
to = 3
weight = 5
"#;

/// Directed unweighted graph `{0:[1,2], 1:[2], 2:[0,3], 3:[3]}`
pub const CYCLIC_DIGRAPH: &str = r#"{
  "directed": true,
  "edges": [
    {"from": "0", "to": "1"},
    {"from": "0", "to": "2"},
    {"from": "1", "to": "2"},
    {"from": "2", "to": "0"},
    {"from": "2", "to": "3"},
    {"from": "3", "to": "3"}
  ]
}"#;

/// Undirected weighted graph whose spanning tree weighs 19
pub const MST_GRAPH: &str = "\
edges:
  - {from: 0, to: 1, weight: 10}
  - {from: 0, to: 2, weight: 6}
  - {from: 0, to: 3, weight: 5}
  - {from: 1, to: 3, weight: 15}
  - {from: 2, to: 3, weight: 4}
";
