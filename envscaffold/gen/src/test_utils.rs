//! Shared test utilities for envscaffold-gen tests.
//!
//! This module provides common helpers for building scheme maps and
//! inspecting rendered output.

use envscaffold_define::{EnvEntry, SchemeDefinition, SecurityScheme, SecuritySchemes};

/// Builds an ordered scheme map from `(name, scheme)` pairs.
pub fn schemes_of<const N: usize>(entries: [(&str, SecurityScheme); N]) -> SecuritySchemes {
    entries
        .into_iter()
        .map(|(name, scheme)| (name.to_string(), scheme))
        .collect()
}

/// Renders entries into individual text lines.
pub fn render(entries: &[EnvEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| {
            entry
                .to_string()
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// A scheme map covering every supported kind plus the skipped ones.
///
/// Includes:
/// - an `apiKey` scheme
/// - `http` bearer, basic and digest schemes
/// - an `oauth2` scheme with two flows
/// - a `$ref` entry
/// - an `openIdConnect` scheme
pub fn make_mixed_schemes() -> SecuritySchemes {
    schemes_of([
        ("x-api-key", SchemeDefinition::api_key().into()),
        ("bearerAuth", SchemeDefinition::http("bearer").into()),
        ("basicAuth", SchemeDefinition::http("basic").into()),
        ("digestAuth", SchemeDefinition::http("digest").into()),
        (
            "petstore_auth",
            SchemeDefinition::oauth2(["authorizationCode", "clientCredentials"]).into(),
        ),
        (
            "shared",
            SecurityScheme::reference("#/components/securitySchemes/shared"),
        ),
        ("oidc", SchemeDefinition::of_kind("openIdConnect").into()),
    ])
}
