use std::path::PathBuf;

use clap::Args;

use super::parse::parse_input_format;
use algokit_core::config::InputFormat;

/// Graph input shared by every command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (TOML, JSON or YAML)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Document format (default: inferred from the file extension)
    #[arg(long, value_parser = parse_input_format)]
    pub input_format: Option<InputFormat>,
}
