//! Environment variable name resolution.
//!
//! The mapper never builds credential variable names itself (with one
//! exception, see [`crate::mapper`]). It asks an [`EnvVarNameResolver`] to turn
//! a scheme name plus a purpose suffix into a legal identifier, so callers can
//! plug in their own naming convention.
//!
//! ## Default Convention
//!
//! [`DefaultResolver`] produces `<SUFFIX>_<NAME>`, where `NAME` is the scheme
//! name with every character outside `[A-Za-z0-9]` replaced by `_` and the
//! result uppercased:
//!
//! - `("x-api-key", "API_KEY")` -> `API_KEY_X_API_KEY`
//! - `("petstore_auth", "BEARER_TOKEN")` -> `BEARER_TOKEN_PETSTORE_AUTH`
//! - `("basic.auth", "BASIC_USERNAME")` -> `BASIC_USERNAME_BASIC_AUTH`
//!
//! ## Examples
//!
//! ```
//! use envscaffold_gen::resolver::{DefaultResolver, EnvVarNameResolver};
//!
//! assert_eq!(DefaultResolver.resolve("x-api-key", "API_KEY"), "API_KEY_X_API_KEY");
//!
//! // Any `Fn(&str, &str) -> String` works as a resolver
//! let prefixed = |name: &str, suffix: &str| format!("MYAPP_{}_{}", name.to_uppercase(), suffix);
//! assert_eq!(prefixed.resolve("key", "API_KEY"), "MYAPP_KEY_API_KEY");
//! ```

/// Maps a scheme name and purpose suffix to an environment variable name.
///
/// Implementations must be pure and deterministic: the same inputs always
/// yield the same name.
pub trait EnvVarNameResolver {
    /// Returns the variable name for `scheme_name` used for `suffix`
    /// (e.g., `API_KEY`, `BASIC_PASSWORD`).
    fn resolve(&self, scheme_name: &str, suffix: &str) -> String;
}

impl<F> EnvVarNameResolver for F
where
    F: Fn(&str, &str) -> String,
{
    fn resolve(&self, scheme_name: &str, suffix: &str) -> String {
        self(scheme_name, suffix)
    }
}

/// The `<SUFFIX>_<NORMALIZED_NAME>` naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultResolver;

impl EnvVarNameResolver for DefaultResolver {
    fn resolve(&self, scheme_name: &str, suffix: &str) -> String {
        format!("{}_{}", suffix, normalize_identifier(scheme_name))
    }
}

/// Replaces every character outside `[A-Za-z0-9]` with `_` and uppercases
/// the rest.
///
/// Each non-ASCII character becomes a single `_`. The output length in
/// characters equals the input length.
///
/// ## Examples
///
/// ```
/// use envscaffold_gen::resolver::normalize_identifier;
///
/// assert_eq!(normalize_identifier("petstore-auth.v2"), "PETSTORE_AUTH_V2");
/// assert_eq!(normalize_identifier("café"), "CAF_");
/// ```
pub fn normalize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // === normalize_identifier tests ===

    #[test]
    fn normalize_identifier_uppercases_alphanumerics() {
        assert_eq!(normalize_identifier("apiKey2"), "APIKEY2");
    }

    #[test]
    fn normalize_identifier_replaces_punctuation() {
        assert_eq!(normalize_identifier("x-api-key"), "X_API_KEY");
        assert_eq!(normalize_identifier("a b/c"), "A_B_C");
    }

    #[test]
    fn normalize_identifier_keeps_existing_underscores() {
        assert_eq!(normalize_identifier("petstore_auth"), "PETSTORE_AUTH");
    }

    #[test]
    fn normalize_identifier_non_ascii_becomes_underscore() {
        assert_eq!(normalize_identifier("ключ"), "____");
    }

    #[test]
    fn normalize_identifier_empty() {
        assert_eq!(normalize_identifier(""), "");
    }

    // === DefaultResolver tests ===

    #[test]
    fn default_resolver_puts_suffix_first() {
        assert_eq!(
            DefaultResolver.resolve("x-api-key", "API_KEY"),
            "API_KEY_X_API_KEY"
        );
    }

    #[test]
    fn default_resolver_is_deterministic() {
        let first = DefaultResolver.resolve("Bearer Auth", "BEARER_TOKEN");
        let second = DefaultResolver.resolve("Bearer Auth", "BEARER_TOKEN");
        assert_eq!(first, second);
        assert_eq!(first, "BEARER_TOKEN_BEARER_AUTH");
    }

    // === closure resolver tests ===

    #[test]
    fn closures_are_resolvers() {
        let resolver = |name: &str, suffix: &str| format!("{name}:{suffix}");
        assert_eq!(resolver.resolve("n", "S"), "n:S");
    }
}
