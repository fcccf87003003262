//! Output assembly and file writing for generated artifacts.
//!
//! This module handles the final phase of generation: producing the
//! `.env.example` template and the `config.rs` loader, validating and
//! formatting the Rust code, and writing both files atomically.
//!
//! ## Output Structure
//!
//! ```text
//! <output_dir>/
//! ├── .env.example   # Environment template for operators
//! └── config.rs      # Runtime configuration loader
//! ```
//!
//! The loader is parsed with `syn` and printed with `prettyplease` before it
//! is written. Each file is staged as `<name>.tmp` next to its target and
//! renamed into place.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use envscaffold_define::{GenerationOptions, SecuritySchemes};
use proc_macro2::TokenStream;
use tracing::info;

use crate::codegen::emit_loader;
use crate::errors::GeneratorError;
use crate::template::generate_env_example;

/// File name of the generated environment template.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// File name of the generated loader module.
pub const LOADER_FILE: &str = "config.rs";

/// The text of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Contents of `.env.example`.
    pub env_example: String,
    /// Contents of `config.rs`.
    pub loader: String,
}

/// Banner written above every generated Rust file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by envscaffold-gen. Do not edit manually.";

/// Parses emitted tokens as a whole Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` carrying the `syn` message when the
/// tokens do not form a valid file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|err| {
        GeneratorError::CodeGenError(format!("emitted module does not parse: {err}"))
    })
}

/// Pretty-prints a validated file below [`GENERATED_NOTICE`].
pub fn format_code(file: &syn::File) -> String {
    format!("{GENERATED_NOTICE}\n\n{}", prettyplease::unparse(file))
}

/// Sibling path used while writing `path`: the full file name plus `.tmp`.
///
/// Appending keeps dotfiles intact, so `.env.example` stages as
/// `.env.example.tmp` rather than clobbering a real `.env.tmp`.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replaces `path` with `content` through a staged sibling and a rename.
///
/// A reader of `path` never sees a half-written template or loader.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming whichever path failed: the
/// parent directory, the staging file, or the final rename target.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let write_error = |at: &Path| {
        let at = at.display().to_string();
        move |source| GeneratorError::WriteError { path: at, source }
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }

    let staged = staging_path(path);
    fs::write(&staged, content).map_err(write_error(&staged))?;
    fs::rename(&staged, path).map_err(write_error(path))
}

/// Generates both artifacts without touching the filesystem.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the loader code fails validation.
pub fn generate(
    schemes: Option<&SecuritySchemes>,
    options: GenerationOptions,
) -> Result<GeneratedFiles, GeneratorError> {
    let env_example = generate_env_example(schemes, options);

    let loader = emit_loader()?;

    Ok(GeneratedFiles {
        env_example,
        loader,
    })
}

/// Generates and writes `.env.example` and `config.rs` to the output directory.
///
/// This is the main entry point used by the CLI.
///
/// ## Arguments
///
/// * `schemes` - Security schemes read from the API document, if any
/// * `options` - Optional block toggles
/// * `output_dir` - Directory to write generated files to
/// * `dry_run` - If true, print the files instead of writing them
///
/// ## Returns
///
/// The `.env.example` text.
///
/// ## Errors
///
/// Returns an error if:
/// - Loader code generation produces invalid Rust
/// - File writing fails
pub fn generate_and_write(
    schemes: Option<&SecuritySchemes>,
    options: GenerationOptions,
    output_dir: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let files = generate(schemes, options)?;

    if dry_run {
        println!("=== {} ===\n{}", ENV_EXAMPLE_FILE, files.env_example);
        println!("=== {} ===\n{}", LOADER_FILE, files.loader);
    } else {
        let env_path = output_dir.join(ENV_EXAMPLE_FILE);
        write_atomic(&env_path, &files.env_example)?;
        info!(path = %env_path.display(), "wrote environment template");

        let loader_path = output_dir.join(LOADER_FILE);
        write_atomic(&loader_path, &files.loader)?;
        info!(path = %loader_path.display(), "wrote configuration loader");
    }

    Ok(files.env_example)
}
