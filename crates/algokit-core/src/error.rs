//! Error types and exit codes for algokit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse errors, internal invariant violations)
//! - 2: Usage error (bad flags/args, unknown formats)
//! - 3: Input-contract error (unknown node, negative weight, wrong graph mode)

mod macros;

use thiserror::Error;

/// Exit codes for the algokit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input-contract error - the graph or query violates an algorithm precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised by the algorithms and their surrounding tooling.
///
/// Every algorithm fails atomically: an `Err` is never accompanied by a
/// partially filled result.
#[derive(Error, Debug)]
pub enum AlgoError {
    // Input-contract errors (exit code 3)
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("negative cycle through {}", .nodes.join(", "))]
    NegativeCycle { nodes: Vec<String> },

    #[error("{algorithm} requires {expected} graph")]
    InvalidGraphMode {
        algorithm: &'static str,
        expected: &'static str,
    },

    #[error("graph contains a cycle through {node}")]
    CycleDetected { node: String },

    #[error("invalid edge weight {weight} on {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid distance matrix: {reason}")]
    InvalidMatrix { reason: String },

    // Internal invariant violations (exit code 1)
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: toml, json, or yaml)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AlgoError {
    /// Create an unknown-node error from any debuggable node identifier
    pub fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        AlgoError::UnknownNode {
            node: format!("{:?}", node),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AlgoError::UnknownFormat(_) | AlgoError::UsageError(_) => ExitCode::Usage,

            AlgoError::UnknownNode { .. }
            | AlgoError::NegativeWeight { .. }
            | AlgoError::NegativeCycle { .. }
            | AlgoError::InvalidGraphMode { .. }
            | AlgoError::CycleDetected { .. }
            | AlgoError::InvalidWeight { .. }
            | AlgoError::InvalidMatrix { .. } => ExitCode::Data,

            AlgoError::EmptyQueue
            | AlgoError::Io(_)
            | AlgoError::Json(_)
            | AlgoError::Toml(_)
            | AlgoError::TomlSer(_)
            | AlgoError::Yaml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AlgoError::UnknownNode { .. } => "unknown_node",
            AlgoError::NegativeWeight { .. } => "negative_weight",
            AlgoError::NegativeCycle { .. } => "negative_cycle",
            AlgoError::InvalidGraphMode { .. } => "invalid_graph_mode",
            AlgoError::CycleDetected { .. } => "cycle_detected",
            AlgoError::InvalidWeight { .. } => "invalid_weight",
            AlgoError::InvalidMatrix { .. } => "invalid_matrix",
            AlgoError::EmptyQueue => "empty_queue",
            AlgoError::UnknownFormat(_) => "unknown_format",
            AlgoError::UsageError(_) => "usage_error",
            AlgoError::Io(_) => "io_error",
            AlgoError::Json(_) => "json_error",
            AlgoError::Toml(_) | AlgoError::TomlSer(_) => "toml_error",
            AlgoError::Yaml(_) => "yaml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for algokit operations
pub type Result<T> = std::result::Result<T, AlgoError>;
