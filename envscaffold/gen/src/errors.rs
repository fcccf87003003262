//! Error types for the envscaffold generator.
//!
//! Generation itself never fails: unsupported schemes are skipped. These
//! errors come from the surrounding steps (reading the API document,
//! validating emitted code, writing files).

use thiserror::Error;

/// Errors that can occur around code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse the API document
    #[error("Failed to parse API document: {0}")]
    ParseError(String),

    /// Failed to read the API document
    #[error("Failed to read API document '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Emitted code did not parse as Rust
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
