//! Envscaffold generator library.
//!
//! This crate turns the security schemes of an API description into the
//! environment configuration of a scaffolded server. It produces:
//!
//! - A `.env.example` template listing one variable per credential, with
//!   placeholder values and explanatory comments
//! - A `config.rs` loader that reads `.env` at startup and exposes a typed
//!   `Config` with defaults
//!
//! ## Modules
//!
//! - [`mapper`] - Security scheme to variable mapping
//! - [`resolver`] - Environment variable naming
//! - [`template`] - `.env.example` assembly
//! - [`codegen`] - Loader code generation
//! - [`document`] - Reading security schemes from OpenAPI documents
//! - [`output`] - Validation, formatting and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use envscaffold_define::{GenerationOptions, SchemeDefinition, SecuritySchemes};
//! use envscaffold_gen::codegen::emit_loader;
//! use envscaffold_gen::template::generate_env_example;
//!
//! let mut schemes = SecuritySchemes::new();
//! schemes.insert("x-api-key".to_string(), SchemeDefinition::api_key().into());
//! schemes.insert("basicAuth".to_string(), SchemeDefinition::http("basic").into());
//!
//! let env = generate_env_example(Some(&schemes), GenerationOptions::new().tracing(true));
//! assert!(env.contains("API_KEY_X_API_KEY=your_api_key_here"));
//! assert!(env.contains("BASIC_USERNAME_BASICAUTH=your_username_here"));
//! assert!(env.contains("OTLP_ENDPOINT="));
//!
//! let loader = emit_loader().unwrap();
//! assert!(loader.contains("pub struct Config"));
//! ```
//!
//! ## Generated Template
//!
//! ```text
//! # MCP Server Environment Variables
//! # Copy this file to .env and fill in the values
//!
//! # Server configuration
//! PORT=3000
//! LOG_LEVEL=info
//!
//! # API Authentication
//! API_KEY_X_API_KEY=your_api_key_here
//! BASIC_USERNAME_BASICAUTH=your_username_here
//! BASIC_PASSWORD_BASICAUTH=your_password_here
//!
//! # Add any other environment variables your API might need
//! ```

pub mod codegen;
pub mod document;
pub mod errors;
pub mod mapper;
pub mod output;
pub mod resolver;
pub mod template;

#[cfg(test)]
pub(crate) mod test_utils;
