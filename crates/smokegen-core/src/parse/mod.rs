pub mod operation;
pub mod security;
pub mod server;
pub mod spec;

use crate::error::ParseError;
use spec::ApiDocument;

/// Parse an API document from YAML.
pub fn from_yaml(input: &str) -> Result<ApiDocument, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse an API document from JSON.
pub fn from_json(input: &str) -> Result<ApiDocument, ParseError> {
    Ok(serde_json::from_str(input)?)
}
