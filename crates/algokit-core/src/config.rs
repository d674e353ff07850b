//! Graph documents: loading graphs from TOML, JSON or YAML files
//!
//! A document lists optional nodes and a sequence of edges. Listed nodes are
//! registered first, in order; edge endpoints that were not listed are
//! registered as they are first mentioned. `Graph::add_edge` itself never
//! registers nodes implicitly.

pub mod types;

use std::fmt::Display;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, GraphKind, NodeId};

pub use types::{EdgeSpec, GraphDocument, InputFormat};

impl GraphDocument {
    /// Parse a document from text in the given format
    pub fn parse(content: &str, format: InputFormat) -> Result<Self> {
        let document = match format {
            InputFormat::Toml => toml::from_str(content)?,
            InputFormat::Json => serde_json::from_str(content)?,
            InputFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(document)
    }

    /// Load a document from a file.
    ///
    /// The format comes from `format` when given, else from the extension.
    pub fn load(path: &Path, format: Option<InputFormat>) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => InputFormat::from_path(path)?,
        };
        let content = fs::read_to_string(path)?;
        let document = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            %format,
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "loaded graph document"
        );
        Ok(document)
    }

    /// Render the document in the given format
    pub fn render(&self, format: InputFormat) -> Result<String> {
        let content = match format {
            InputFormat::Toml => toml::to_string_pretty(self)?,
            InputFormat::Json => serde_json::to_string_pretty(self)?,
            InputFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(content)
    }

    pub fn save(&self, path: &Path, format: InputFormat) -> Result<()> {
        fs::write(path, self.render(format)?)?;
        Ok(())
    }

    pub fn kind(&self) -> GraphKind {
        if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }

    /// Build the graph this document describes.
    ///
    /// Fails with `InvalidWeight` on a NaN or infinite weight.
    pub fn into_graph(self) -> Result<Graph<String>> {
        let mut graph = Graph::new(self.kind());
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in &self.edges {
            graph.add_node(edge.from.clone());
            graph.add_node(edge.to.clone());
            graph.add_weighted_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Describe an existing graph, keeping node and edge order
    pub fn from_graph<N: NodeId + Display>(graph: &Graph<N>) -> Self {
        GraphDocument {
            directed: graph.is_directed(),
            nodes: graph.nodes().map(ToString::to_string).collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| EdgeSpec {
                    from: edge.from.to_string(),
                    to: edge.to.to_string(),
                    weight: edge.weight,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const TOML_DOC: &str = r#"
directed = true
nodes = ["c"]

[[edges]]
from = "a"
to = "b"
weight = 2.5

[[edges]]
from = "b"
to = "c"
"#;

    fn names(graph: &Graph<String>) -> Vec<&str> {
        graph.nodes().map(String::as_str).collect()
    }

    #[test]
    fn test_parse_toml_defaults_and_order() {
        let document = GraphDocument::parse(TOML_DOC, InputFormat::Toml).unwrap();
        assert!(document.directed);
        assert_eq!(document.edges[1].weight, 1.0);

        let graph = document.into_graph().unwrap();
        assert!(graph.is_directed());
        // Listed nodes first, then endpoints in order of mention
        assert_eq!(names(&graph), vec!["c", "a", "b"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_parse_json_integer_names() {
        let json = r#"{"edges": [{"from": 0, "to": 1, "weight": 4}, {"from": "1", "to": 2}]}"#;
        let document = GraphDocument::parse(json, InputFormat::Json).unwrap();
        assert!(!document.directed);
        assert_eq!(document.edges[0].from, "0");
        assert_eq!(document.edges[0].weight, 4.0);

        let graph = document.into_graph().unwrap();
        assert_eq!(names(&graph), vec!["0", "1", "2"]);
        // Undirected: the reverse arc exists
        assert_eq!(graph.neighbors(&"1".to_string()).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "directed: false\nnodes: [x, 7]\nedges:\n  - from: x\n    to: y\n    weight: 0.5\n";
        let document = GraphDocument::parse(yaml, InputFormat::Yaml).unwrap();
        assert_eq!(document.nodes, vec!["x", "7"]);
        assert_eq!(document.edges[0].to, "y");
        assert_eq!(document.kind(), GraphKind::Undirected);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = GraphDocument::parse("edges = [", InputFormat::Toml).unwrap_err();
        assert!(matches!(err, AlgoError::Toml(_)));
        let err = GraphDocument::parse("{\"edges\": [{\"from\": \"a\"}]}", InputFormat::Json)
            .unwrap_err();
        assert!(matches!(err, AlgoError::Json(_)));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let doc = "[[edges]]\nfrom = \"a\"\nto = \"b\"\nweight = nan\n";
        let document = GraphDocument::parse(doc, InputFormat::Toml).unwrap();
        assert!(matches!(
            document.into_graph(),
            Err(AlgoError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            InputFormat::from_path(&PathBuf::from("g.yml")).unwrap(),
            InputFormat::Yaml
        );
        assert_eq!(
            InputFormat::from_path(&PathBuf::from("dir/g.JSON")).unwrap(),
            InputFormat::Json
        );
        let err = InputFormat::from_path(&PathBuf::from("graph")).unwrap_err();
        assert!(matches!(err, AlgoError::UsageError(_)));
        assert!(matches!(
            "xml".parse::<InputFormat>(),
            Err(AlgoError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_save_and_load_each_format() {
        let dir = tempdir().unwrap();
        let original = GraphDocument::parse(TOML_DOC, InputFormat::Toml).unwrap();
        for (file, format) in [
            ("g.toml", InputFormat::Toml),
            ("g.json", InputFormat::Json),
            ("g.yaml", InputFormat::Yaml),
        ] {
            let path = dir.path().join(file);
            original.save(&path, format).unwrap();
            let loaded = GraphDocument::load(&path, None).unwrap();
            assert_eq!(loaded, original, "{} did not survive", format);
        }
    }

    #[test]
    fn test_load_with_explicit_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        fs::write(&path, r#"{"directed": true, "edges": []}"#).unwrap();
        assert!(GraphDocument::load(&path, None).is_err());
        let document = GraphDocument::load(&path, Some(InputFormat::Json)).unwrap();
        assert!(document.directed);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GraphDocument::load(Path::new("/nonexistent/g.toml"), None).unwrap_err();
        assert!(matches!(err, AlgoError::Io(_)));
    }

    #[test]
    fn test_from_graph_describes_graph() {
        let mut graph: Graph<u32> = Graph::directed();
        for node in [3, 1, 2] {
            graph.add_node(node);
        }
        graph.add_weighted_edge(&1, &2, 0.25).unwrap();

        let document = GraphDocument::from_graph(&graph);
        assert!(document.directed);
        assert_eq!(document.nodes, vec!["3", "1", "2"]);
        assert_eq!(
            document.edges,
            vec![EdgeSpec {
                from: "1".to_string(),
                to: "2".to_string(),
                weight: 0.25
            }]
        );
        let rebuilt = document.into_graph().unwrap();
        assert_eq!(rebuilt.node_count(), 3);
        assert_eq!(rebuilt.edge_count(), 1);
    }
}
