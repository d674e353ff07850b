use algokit_core::config::InputFormat;
use algokit_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph document format from string
pub fn parse_input_format(s: &str) -> std::result::Result<InputFormat, String> {
    s.parse::<InputFormat>().map_err(|e| e.to_string())
}
