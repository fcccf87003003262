//! Code generation modules for envscaffold.
//!
//! This module contains generators that produce Rust source code for the
//! scaffolded server. Unlike the `.env.example` template (plain text, see
//! [`crate::template`]), generated code goes through the usual pipeline.
//!
//! ## Submodules
//!
//! - [`loader`] - Generates the `config.rs` runtime configuration loader
//!
//! ## Output Format
//!
//! Generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the formatting and file writing logic.

pub mod loader;

pub use loader::{
    assemble_loader_module, emit_loader, generate_config_struct, generate_default_consts,
    generate_env_file_loading,
};
