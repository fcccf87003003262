//! Feature toggles for template generation.

use serde::{Deserialize, Serialize};

/// Optional output blocks for the generated `.env.example`.
///
/// Both toggles default to `false`.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::GenerationOptions;
///
/// let opts = GenerationOptions::default().analytics(true);
/// assert!(opts.with_analytics);
/// assert!(!opts.with_tracing);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Emit the `MCPCAT_PROJECT_ID` analytics block.
    #[serde(default)]
    pub with_analytics: bool,
    /// Emit the `OTLP_ENDPOINT` tracing block.
    #[serde(default)]
    pub with_tracing: bool,
}

impl GenerationOptions {
    /// Creates options with every block disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the analytics toggle.
    pub fn analytics(mut self, enabled: bool) -> Self {
        self.with_analytics = enabled;
        self
    }

    /// Sets the tracing toggle.
    pub fn tracing(mut self, enabled: bool) -> Self {
        self.with_tracing = enabled;
        self
    }
}
