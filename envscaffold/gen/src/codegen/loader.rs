//! Runtime configuration loader generation.
//!
//! Generates the `config.rs` module embedded in a scaffolded server. At
//! startup the generated code loads `.env` from next to the executable on a
//! best-effort basis and then reads each setting from the process
//! environment, falling back to the defaults in [`LoaderDescriptor`].
//!
//! Loading the file never aborts the server: a missing or malformed file is
//! logged with `tracing::warn!` and the defaults apply.
//!
//! ## Generated Code
//!
//! ```ignore
//! pub const DEFAULT_PORT: &str = "3000";
//! pub const DEFAULT_LOG_LEVEL: &str = "info";
//!
//! pub fn env_file_path() -> PathBuf { ... }
//! pub fn load_env_file() { ... }
//!
//! pub struct Config {
//!     pub port: String,
//!     pub log_level: String,
//! }
//!
//! pub static CONFIG: LazyLock<Config> = LazyLock::new(|| { ... });
//! ```

use envscaffold_define::{ConfigField, LoaderDescriptor};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::errors::GeneratorError;
use crate::output::{format_code, validate_code};

/// Name of the `DEFAULT_*` constant holding a field's default.
fn default_const(field: &ConfigField) -> proc_macro2::Ident {
    format_ident!("DEFAULT_{}", field.env_var)
}

/// Generates the `DEFAULT_*` constants.
pub fn generate_default_consts(descriptor: &LoaderDescriptor) -> TokenStream {
    descriptor
        .fields()
        .into_iter()
        .map(|field| {
            let name = default_const(field);
            let value = field.default;
            let doc = format!(" Default for `{}` when it is unset.", field.env_var);
            quote! {
                #[doc = #doc]
                pub const #name: &str = #value;
            }
        })
        .collect()
}

/// Generates `env_file_path()` and `load_env_file()`.
///
/// The path is resolved next to the running executable, falling back to the
/// working directory when the executable path cannot be determined.
pub fn generate_env_file_loading(descriptor: &LoaderDescriptor) -> TokenStream {
    let env_file = descriptor.env_file;
    let path_doc = format!(" Returns the path of the `{env_file}` file next to the running executable.");

    quote! {
        #[doc = #path_doc]
        ///
        /// Falls back to the working directory when the executable path is unavailable.
        pub fn env_file_path() -> PathBuf {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.join(#env_file)))
                .unwrap_or_else(|| PathBuf::from(#env_file))
        }

        /// Loads the environment file into the process environment.
        ///
        /// Variables already set in the environment take precedence. A missing
        /// or unreadable file is logged as a warning and otherwise ignored.
        pub fn load_env_file() {
            let path = env_file_path();
            match dotenvy::from_path(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "loaded environment file"),
                Err(err) => tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "could not load environment file, using defaults"
                ),
            }
        }
    }
}

/// Generates the `Config` struct and its constructors.
pub fn generate_config_struct(descriptor: &LoaderDescriptor) -> TokenStream {
    let fields = descriptor.fields();

    let decls = fields.iter().map(|field| {
        let ident = format_ident!("{}", field.field);
        let doc = format!(" {} Read from `{}`.", field.description, field.env_var);
        quote! {
            #[doc = #doc]
            pub #ident: String,
        }
    });

    let from_env = fields.iter().map(|field| {
        let ident = format_ident!("{}", field.field);
        let env_var = field.env_var;
        let default = default_const(field);
        quote! {
            #ident: std::env::var(#env_var).unwrap_or_else(|_| #default.to_string()),
        }
    });

    let defaults = fields.iter().map(|field| {
        let ident = format_ident!("{}", field.field);
        let default = default_const(field);
        quote! {
            #ident: #default.to_string(),
        }
    });

    quote! {
        /// Server configuration resolved at startup.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct Config {
            #(#decls)*
        }

        impl Config {
            /// Reads every setting from the process environment, using the
            /// built-in default for any variable that is unset.
            pub fn from_env() -> Self {
                Self {
                    #(#from_env)*
                }
            }
        }

        impl Default for Config {
            fn default() -> Self {
                Self {
                    #(#defaults)*
                }
            }
        }

        /// Configuration loaded on first access.
        ///
        /// The environment file is loaded before the environment is read.
        pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
            load_env_file();
            Config::from_env()
        });
    }
}

/// Assembles the complete loader module.
pub fn assemble_loader_module(descriptor: &LoaderDescriptor) -> TokenStream {
    let consts = generate_default_consts(descriptor);
    let loading = generate_env_file_loading(descriptor);
    let config = generate_config_struct(descriptor);

    quote! {
        //! Runtime configuration for the generated server.
        //!
        //! Settings come from the process environment, optionally seeded from
        //! an environment file placed next to the executable.

        use std::path::PathBuf;
        use std::sync::LazyLock;

        #consts

        #loading

        #config
    }
}

/// Emits the formatted loader source.
///
/// Takes no arguments: the output depends only on
/// [`LoaderDescriptor::STANDARD`] and is identical on every call.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the assembled module fails
/// validation.
///
/// ## Examples
///
/// ```
/// use envscaffold_gen::codegen::emit_loader;
///
/// let code = emit_loader().unwrap();
/// assert!(code.contains("\"3000\""));
/// assert!(code.contains("\"info\""));
/// assert_eq!(code, emit_loader().unwrap());
/// ```
pub fn emit_loader() -> Result<String, GeneratorError> {
    let tokens = assemble_loader_module(&LoaderDescriptor::STANDARD);
    let file = validate_code(&tokens)?;
    Ok(format_code(&file))
}
