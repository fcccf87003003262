//! Envscaffold Definition Library
//!
//! This crate provides the types consumed and produced by the `envscaffold-gen`
//! generator when it turns an API's security schemes into a `.env.example`
//! template and a runtime configuration loader.
//!
//! ## Core Types
//!
//! ### Input
//!
//! - [`SecuritySchemes`] - Ordered map of scheme name to [`SecurityScheme`]
//! - [`SecurityScheme`] - A `$ref` or an inline [`SchemeDefinition`]
//! - [`SchemeKind`] - Scheme type (`apiKey`, `http`, `oauth2`, other)
//! - [`HttpSubtype`] - Supported HTTP auth schemes (bearer, basic)
//! - [`GenerationOptions`] - Analytics and tracing toggles
//!
//! ### Output
//!
//! - [`EnvEntry`] - A comment or a [`VariableDeclaration`] in the auth block
//! - [`LoaderDescriptor`] - The two runtime settings (`port`, `log_level`)
//!
//! ## Examples
//!
//! ```
//! use envscaffold_define::{SchemeDefinition, SecurityScheme, SecuritySchemes};
//!
//! let mut schemes = SecuritySchemes::new();
//! schemes.insert("petstore_key".to_string(), SchemeDefinition::api_key().into());
//! schemes.insert("bearerAuth".to_string(), SchemeDefinition::http("bearer").into());
//! schemes.insert(
//!     "shared".to_string(),
//!     SecurityScheme::reference("#/components/securitySchemes/shared"),
//! );
//!
//! assert_eq!(schemes.len(), 3);
//! assert_eq!(schemes.get_index(0).unwrap().0, "petstore_key");
//! ```

pub mod declaration;
pub mod loader;
pub mod options;
pub mod prelude;
pub mod scheme;

// Re-export main types at crate root
pub use declaration::{EnvEntry, VariableDeclaration};
pub use loader::{ConfigField, LoaderDescriptor};
pub use options::GenerationOptions;
pub use scheme::{
    HttpSubtype, OAuthFlows, SchemeDefinition, SchemeKind, SecurityScheme, SecuritySchemes,
};
