//! Convenient re-exports for working with envscaffold definitions.
//!
//! ## Examples
//!
//! ```
//! use envscaffold_define::prelude::*;
//!
//! let mut schemes = SecuritySchemes::new();
//! schemes.insert("oauth".to_string(), SchemeDefinition::oauth2(["clientCredentials"]).into());
//!
//! let opts = GenerationOptions::new().tracing(true);
//! assert!(opts.with_tracing);
//! ```

pub use crate::declaration::{EnvEntry, VariableDeclaration};
pub use crate::loader::{ConfigField, LoaderDescriptor};
pub use crate::options::GenerationOptions;
pub use crate::scheme::{
    HttpSubtype, OAuthFlows, SchemeDefinition, SchemeKind, SecurityScheme, SecuritySchemes,
};
