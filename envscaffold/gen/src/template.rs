//! `.env.example` template assembly.
//!
//! This module provides the [`EnvTemplateBuilder`] struct, which wraps the
//! authentication entries produced by [`crate::mapper`] with the fixed
//! header, the optional feature blocks and the footer.
//!
//! ## Section Order
//!
//! ```text
//! header          # server name, PORT, LOG_LEVEL
//! auth block      # "# API Authentication" + entries, or the no-auth comment
//! analytics       # only with `with_analytics`
//! tracing         # only with `with_tracing`
//! footer          # invitation to add more variables
//! ```
//!
//! Sections are separated by one blank line and the file ends with a newline.

use envscaffold_define::{EnvEntry, GenerationOptions, LoaderDescriptor, SecuritySchemes};

use crate::mapper::{NO_AUTH_COMMENT, map_schemes};
use crate::resolver::DefaultResolver;

/// Heading of the authentication block.
pub const AUTH_HEADING: &str = "# API Authentication";

/// Variable holding the MCPcat analytics project id.
pub const ANALYTICS_VAR: &str = "MCPCAT_PROJECT_ID";

/// Variable holding the OpenTelemetry collector endpoint.
pub const TRACING_VAR: &str = "OTLP_ENDPOINT";

/// Builds the text of a `.env.example` file.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::GenerationOptions;
/// use envscaffold_gen::mapper::no_auth_entries;
/// use envscaffold_gen::template::EnvTemplateBuilder;
///
/// let entries = no_auth_entries();
/// let text = EnvTemplateBuilder::new(&entries, GenerationOptions::default()).build();
///
/// assert!(text.contains("PORT=3000\n"));
/// assert!(text.contains("# No API authentication required\n"));
/// ```
pub struct EnvTemplateBuilder<'a> {
    entries: &'a [EnvEntry],
    options: GenerationOptions,
    descriptor: LoaderDescriptor,
}

impl<'a> EnvTemplateBuilder<'a> {
    /// Creates a builder for the given entries and options.
    pub fn new(entries: &'a [EnvEntry], options: GenerationOptions) -> Self {
        Self {
            entries,
            options,
            descriptor: LoaderDescriptor::STANDARD,
        }
    }

    /// Builds the complete template text.
    pub fn build(&self) -> String {
        let mut sections = vec![
            self.intro_section(),
            self.server_section(),
            self.auth_section(),
        ];

        if self.options.with_analytics {
            sections.push(analytics_section());
        }
        if self.options.with_tracing {
            sections.push(tracing_section());
        }
        sections.push(footer_section());

        let mut text = sections
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        text.push('\n');
        text
    }

    fn intro_section(&self) -> Vec<String> {
        vec![
            "# MCP Server Environment Variables".to_string(),
            format!(
                "# Copy this file to {} and fill in the values",
                self.descriptor.env_file
            ),
        ]
    }

    /// Generates the static server configuration lines.
    ///
    /// Values come from the loader descriptor so the template always agrees
    /// with the generated `config.rs`.
    fn server_section(&self) -> Vec<String> {
        let mut lines = vec!["# Server configuration".to_string()];
        lines.extend(
            self.descriptor
                .fields()
                .iter()
                .map(|field| format!("{}={}", field.env_var, field.default)),
        );
        lines
    }

    /// Generates the authentication block.
    ///
    /// The no-auth comment appears only for the mapper's no-auth entries. A
    /// non-empty scheme map whose schemes were all skipped still gets the
    /// heading, with nothing under it.
    fn auth_section(&self) -> Vec<String> {
        if !self.has_auth() {
            return vec![format!("# {NO_AUTH_COMMENT}")];
        }

        let mut lines = vec![AUTH_HEADING.to_string()];
        for entry in self.entries {
            lines.extend(entry.to_string().lines().map(str::to_string));
        }
        lines
    }

    fn has_auth(&self) -> bool {
        !matches!(self.entries, [EnvEntry::Comment(text)] if text == NO_AUTH_COMMENT)
    }
}

fn analytics_section() -> Vec<String> {
    vec![
        "# MCPcat analytics (optional)".to_string(),
        "# Get your project ID at https://mcpcat.io".to_string(),
        format!("{ANALYTICS_VAR}=proj_0000000"),
    ]
}

fn tracing_section() -> Vec<String> {
    vec![
        "# OpenTelemetry trace collector endpoint".to_string(),
        format!("{TRACING_VAR}=http://localhost:4318/v1/traces"),
    ]
}

fn footer_section() -> Vec<String> {
    vec!["# Add any other environment variables your API might need".to_string()]
}

/// Assembles the template from pre-mapped entries.
pub fn assemble(entries: &[EnvEntry], options: GenerationOptions) -> String {
    EnvTemplateBuilder::new(entries, options).build()
}

/// Maps `schemes` with the [`DefaultResolver`] and assembles the template.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::{GenerationOptions, SchemeDefinition, SecuritySchemes};
/// use envscaffold_gen::template::generate_env_example;
///
/// let mut schemes = SecuritySchemes::new();
/// schemes.insert("bearerAuth".to_string(), SchemeDefinition::http("bearer").into());
///
/// let text = generate_env_example(Some(&schemes), GenerationOptions::default());
/// assert!(text.contains("# API Authentication\nBEARER_TOKEN_BEARERAUTH=your_bearer_token_here\n"));
/// ```
pub fn generate_env_example(
    schemes: Option<&SecuritySchemes>,
    options: GenerationOptions,
) -> String {
    let entries = map_schemes(schemes, &DefaultResolver);
    assemble(&entries, options)
}
