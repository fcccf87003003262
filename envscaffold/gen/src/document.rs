//! Security scheme extraction from OpenAPI documents.
//!
//! Only `components.securitySchemes` is read. Everything else in the document
//! is ignored, so partially-valid documents still load as long as that
//! section is well formed.
//!
//! ## Examples
//!
//! ```
//! use envscaffold_gen::document::{DocumentFormat, security_schemes_from_str};
//!
//! let yaml = r#"
//! openapi: 3.0.3
//! components:
//!   securitySchemes:
//!     api_key:
//!       type: apiKey
//!       in: header
//!       name: X-API-Key
//! "#;
//!
//! let schemes = security_schemes_from_str(yaml, DocumentFormat::Yaml).unwrap().unwrap();
//! assert!(schemes.contains_key("api_key"));
//! ```

use std::fs;
use std::path::Path;

use envscaffold_define::SecuritySchemes;
use serde::Deserialize;
use tracing::debug;

use crate::errors::GeneratorError;

/// Serialization format of an API document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension (`json`, `yaml`, `yml`).
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, GeneratorError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(GeneratorError::ConfigError(format!(
                "Cannot determine document format of '{}': expected a .json, .yaml or .yml file",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiDocument {
    #[serde(default)]
    components: Option<Components>,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(rename = "securitySchemes", default)]
    security_schemes: Option<SecuritySchemes>,
}

/// Extracts the security schemes from document text.
///
/// Returns `Ok(None)` when the document has no `components` or no
/// `securitySchemes`.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` if the text is not valid JSON/YAML
/// or `securitySchemes` is not a map. Individual malformed entries are kept
/// as [`SecurityScheme::Unrecognized`](envscaffold_define::SecurityScheme::Unrecognized)
/// and skipped later.
pub fn security_schemes_from_str(
    text: &str,
    format: DocumentFormat,
) -> Result<Option<SecuritySchemes>, GeneratorError> {
    let document: ApiDocument = match format {
        DocumentFormat::Json => serde_json::from_str(text)
            .map_err(|e| GeneratorError::ParseError(format!("invalid JSON: {e}")))?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| GeneratorError::ParseError(format!("invalid YAML: {e}")))?,
    };

    let schemes = document
        .components
        .and_then(|components| components.security_schemes);
    debug!(
        count = schemes.as_ref().map_or(0, |s| s.len()),
        "read security schemes"
    );
    Ok(schemes)
}

/// Reads an API document from disk and extracts its security schemes.
///
/// ## Errors
///
/// Returns an error if the extension is not recognised, the file cannot be
/// read, or its contents fail to parse.
pub fn read_security_schemes(path: &Path) -> Result<Option<SecuritySchemes>, GeneratorError> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    security_schemes_from_str(&text, format)
}
