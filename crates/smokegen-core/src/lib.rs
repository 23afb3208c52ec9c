pub mod config;
pub mod error;
pub mod ops;
pub mod parse;
pub mod sanitize;
pub mod template;

use parse::spec::ApiDocument;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that produce test files from a parsed document.
pub trait CodeGenerator {
    type Error: std::error::Error;
    fn generate(&self, doc: &ApiDocument) -> Result<Vec<GeneratedFile>, Self::Error>;
}
