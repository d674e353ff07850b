//! Graph document type definitions

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::bail_usage;
use crate::error::AlgoError;

/// A graph described as data.
///
/// ```toml
/// directed = true
/// nodes = ["a", "b", "c"]
///
/// [[edges]]
/// from = "a"
/// to = "b"
/// weight = 2.5
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Edge direction mode (optional; default undirected)
    #[serde(default)]
    pub directed: bool,

    /// Nodes to register before any edge, in order (optional)
    #[serde(default, deserialize_with = "node_names", skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One edge of a graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(deserialize_with = "node_name")]
    pub from: String,

    #[serde(deserialize_with = "node_name")]
    pub to: String,

    /// Edge weight (optional; default 1.0)
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Node names may be written as strings or integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawName {
    Text(String),
    Integer(i64),
}

impl From<RawName> for String {
    fn from(raw: RawName) -> String {
        match raw {
            RawName::Text(text) => text,
            RawName::Integer(n) => n.to_string(),
        }
    }
}

fn node_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawName::deserialize(deserializer).map(String::from)
}

fn node_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Vec::<RawName>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(String::from).collect())
}

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, AlgoError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.parse() {
            Ok(format) => Ok(format),
            Err(_) => bail_usage!(format!(
                "cannot infer format of {} (use --input-format)",
                path.display()
            )),
        }
    }
}

impl FromStr for InputFormat {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(InputFormat::Toml),
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            other => Err(AlgoError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Toml => write!(f, "toml"),
            InputFormat::Json => write!(f, "json"),
            InputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
