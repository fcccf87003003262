//! Runtime configuration fields shared by the template and the loader stub.
//!
//! The generated `.env.example` header and the generated `config.rs` loader
//! both describe the same two settings. Keeping them in one descriptor means
//! the defaults written into the template always match the defaults the
//! loader falls back to.

/// A single runtime setting read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigField {
    /// Field name on the generated `Config` struct (snake_case).
    pub field: &'static str,
    /// Environment variable the value is read from.
    pub env_var: &'static str,
    /// Value used when the variable is unset.
    pub default: &'static str,
    /// One-line description used in generated docs.
    pub description: &'static str,
}

/// The fixed set of settings every generated server understands.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::LoaderDescriptor;
///
/// let desc = LoaderDescriptor::STANDARD;
/// assert_eq!(desc.port.default, "3000");
/// assert_eq!(desc.log_level.env_var, "LOG_LEVEL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderDescriptor {
    /// File name of the environment file, resolved next to the executable.
    pub env_file: &'static str,
    /// HTTP port.
    pub port: ConfigField,
    /// Log verbosity.
    pub log_level: ConfigField,
}

impl LoaderDescriptor {
    /// The descriptor used by every generator in this workspace.
    pub const STANDARD: Self = Self {
        env_file: ".env",
        port: ConfigField {
            field: "port",
            env_var: "PORT",
            default: "3000",
            description: "Port the server listens on.",
        },
        log_level: ConfigField {
            field: "log_level",
            env_var: "LOG_LEVEL",
            default: "info",
            description: "Minimum log level.",
        },
    };

    /// Returns both fields in declaration order.
    pub fn fields(&self) -> [&ConfigField; 2] {
        [&self.port, &self.log_level]
    }
}

impl Default for LoaderDescriptor {
    fn default() -> Self {
        Self::STANDARD
    }
}
