//! Security scheme to environment variable mapping.
//!
//! Walks the declared security schemes in order and produces the entries of
//! the `.env.example` authentication block.
//!
//! ## Mapping Rules
//!
//! | Scheme                 | Output                                                  |
//! |------------------------|---------------------------------------------------------|
//! | `apiKey`               | `<resolve(name, API_KEY)>=your_api_key_here`            |
//! | `http` / `bearer`      | `<resolve(name, BEARER_TOKEN)>=your_bearer_token_here`  |
//! | `http` / `basic`       | username then password declarations                     |
//! | `http` / anything else | nothing                                                 |
//! | `oauth2`               | flow comment, then `OAUTH_TOKEN_<NAME>=...`             |
//! | `$ref`                 | a comment noting the unresolved reference               |
//! | any other type         | nothing                                                 |
//! | malformed entry        | nothing                                                 |
//!
//! Nothing here returns an error. Unsupported entries are skipped and logged
//! at `debug` level.
//!
//! The `oauth2` variable name does not go through the resolver: it is always
//! `OAUTH_TOKEN_` followed by the normalized scheme name.

use envscaffold_define::{
    EnvEntry, HttpSubtype, SchemeDefinition, SchemeKind, SecurityScheme, SecuritySchemes,
    VariableDeclaration,
};
use tracing::debug;

use crate::resolver::{EnvVarNameResolver, normalize_identifier};

/// Comment emitted when no security schemes are declared.
pub const NO_AUTH_COMMENT: &str = "No API authentication required";

/// Prefix of the inlined oauth2 variable name.
pub const OAUTH_TOKEN_PREFIX: &str = "OAUTH_TOKEN_";

/// A resolver suffix paired with its placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSlot {
    /// Suffix handed to the resolver.
    pub suffix: &'static str,
    /// Example value written into the template.
    pub placeholder: &'static str,
}

pub const API_KEY: CredentialSlot = CredentialSlot {
    suffix: "API_KEY",
    placeholder: "your_api_key_here",
};

pub const BEARER_TOKEN: CredentialSlot = CredentialSlot {
    suffix: "BEARER_TOKEN",
    placeholder: "your_bearer_token_here",
};

pub const BASIC_USERNAME: CredentialSlot = CredentialSlot {
    suffix: "BASIC_USERNAME",
    placeholder: "your_username_here",
};

pub const BASIC_PASSWORD: CredentialSlot = CredentialSlot {
    suffix: "BASIC_PASSWORD",
    placeholder: "your_password_here",
};

/// Placeholder for the oauth2 token variable.
pub const OAUTH_TOKEN_PLACEHOLDER: &str = "your_oauth_token_here";

/// Returns the entry list used when there is no authentication.
pub fn no_auth_entries() -> Vec<EnvEntry> {
    vec![EnvEntry::comment(NO_AUTH_COMMENT)]
}

/// Maps every security scheme to its template entries, in declaration order.
///
/// A missing or empty map yields a single [`NO_AUTH_COMMENT`] comment.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::{SchemeDefinition, SecuritySchemes};
/// use envscaffold_gen::mapper::map_schemes;
/// use envscaffold_gen::resolver::DefaultResolver;
///
/// let mut schemes = SecuritySchemes::new();
/// schemes.insert("x-api-key".to_string(), SchemeDefinition::api_key().into());
///
/// let entries = map_schemes(Some(&schemes), &DefaultResolver);
/// assert_eq!(entries[0].to_string(), "API_KEY_X_API_KEY=your_api_key_here");
///
/// let none = map_schemes(None, &DefaultResolver);
/// assert_eq!(none[0].to_string(), "# No API authentication required");
/// ```
pub fn map_schemes<R>(schemes: Option<&SecuritySchemes>, resolver: &R) -> Vec<EnvEntry>
where
    R: EnvVarNameResolver + ?Sized,
{
    let Some(schemes) = schemes.filter(|schemes| !schemes.is_empty()) else {
        debug!("no security schemes declared");
        return no_auth_entries();
    };

    let mut entries = Vec::new();
    for (name, scheme) in schemes {
        map_scheme(name, scheme, resolver, &mut entries);
    }
    entries
}

/// Appends the entries for a single scheme to `out`.
pub fn map_scheme<R>(name: &str, scheme: &SecurityScheme, resolver: &R, out: &mut Vec<EnvEntry>)
where
    R: EnvVarNameResolver + ?Sized,
{
    match scheme {
        SecurityScheme::Reference { reference } => {
            debug!(scheme = name, reference = reference.as_str(), "leaving reference unresolved");
            out.push(EnvEntry::comment(format!(
                "{name} - Referenced security scheme (reference not resolved)"
            )));
        }
        SecurityScheme::Definition(definition) => map_definition(name, definition, resolver, out),
        SecurityScheme::Unrecognized(_) => {
            debug!(scheme = name, "skipping malformed security scheme entry");
        }
    }
}

fn map_definition<R>(name: &str, definition: &SchemeDefinition, resolver: &R, out: &mut Vec<EnvEntry>)
where
    R: EnvVarNameResolver + ?Sized,
{
    match &definition.kind {
        SchemeKind::ApiKey => out.push(declare(resolver, name, API_KEY)),
        SchemeKind::Http => match definition.http_subtype() {
            Some(HttpSubtype::Bearer) => out.push(declare(resolver, name, BEARER_TOKEN)),
            Some(HttpSubtype::Basic) => {
                out.push(declare(resolver, name, BASIC_USERNAME));
                out.push(declare(resolver, name, BASIC_PASSWORD));
            }
            None => debug!(
                scheme = name,
                subtype = definition.subtype.as_deref().unwrap_or(""),
                "skipping unsupported http auth scheme"
            ),
        },
        SchemeKind::OAuth2 => {
            out.push(EnvEntry::comment(oauth2_flow_comment(definition)));
            out.push(
                VariableDeclaration::new(oauth_token_var(name), OAUTH_TOKEN_PLACEHOLDER).into(),
            );
        }
        SchemeKind::Other(kind) => debug!(
            scheme = name,
            kind = kind.as_str(),
            "skipping unsupported security scheme type"
        ),
    }
}

fn declare<R>(resolver: &R, name: &str, slot: CredentialSlot) -> EnvEntry
where
    R: EnvVarNameResolver + ?Sized,
{
    let var = resolver.resolve(name, slot.suffix);
    debug!(scheme = name, var = var.as_str(), "declaring credential variable");
    VariableDeclaration::new(var, slot.placeholder).into()
}

/// Returns the oauth2 token variable name for a scheme.
///
/// ## Examples
///
/// ```
/// use envscaffold_gen::mapper::oauth_token_var;
///
/// assert_eq!(oauth_token_var("petstore-oauth"), "OAUTH_TOKEN_PETSTORE_OAUTH");
/// ```
pub fn oauth_token_var(scheme_name: &str) -> String {
    format!("{OAUTH_TOKEN_PREFIX}{}", normalize_identifier(scheme_name))
}

fn oauth2_flow_comment(definition: &SchemeDefinition) -> String {
    let flows = definition.flow_names();
    let flows = if flows.is_empty() {
        "unknown".to_string()
    } else {
        flows.join(", ")
    };
    format!("OAuth2 authentication ({flows} flow)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DefaultResolver;
    use crate::test_utils::{render, schemes_of};
    use tracing_test::traced_test;

    #[test]
    fn absent_map_yields_no_auth_comment() {
        let entries = map_schemes(None, &DefaultResolver);
        assert_eq!(entries, no_auth_entries());
    }

    #[test]
    fn empty_map_yields_no_auth_comment() {
        let entries = map_schemes(Some(&SecuritySchemes::new()), &DefaultResolver);
        assert_eq!(entries, no_auth_entries());
    }

    #[test]
    fn api_key_uses_resolver_with_api_key_suffix() {
        let schemes = schemes_of([("x-api-key", SchemeDefinition::api_key().into())]);
        let entries = map_schemes(Some(&schemes), &DefaultResolver);

        assert_eq!(entries.len(), 1);
        let expected = format!(
            "{}=your_api_key_here",
            DefaultResolver.resolve("x-api-key", "API_KEY")
        );
        assert_eq!(entries[0].to_string(), expected);
    }

    #[test]
    fn bearer_is_case_insensitive() {
        let schemes = schemes_of([("auth", SchemeDefinition::http("BeArEr").into())]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(lines, vec!["BEARER_TOKEN_AUTH=your_bearer_token_here"]);
    }

    #[test]
    fn basic_emits_username_then_password() {
        let schemes = schemes_of([("basicAuth", SchemeDefinition::http("Basic").into())]);
        let entries = map_schemes(Some(&schemes), &DefaultResolver);

        let vars: Vec<_> = entries.iter().filter_map(EnvEntry::as_variable).collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "BASIC_USERNAME_BASICAUTH");
        assert_eq!(vars[0].placeholder, "your_username_here");
        assert_eq!(vars[1].name, "BASIC_PASSWORD_BASICAUTH");
        assert_eq!(vars[1].placeholder, "your_password_here");
    }

    #[test]
    fn other_http_subtypes_are_skipped() {
        let schemes = schemes_of([
            ("digest", SchemeDefinition::http("digest").into()),
            ("bare", SchemeDefinition::of_kind("http").into()),
        ]);
        assert!(map_schemes(Some(&schemes), &DefaultResolver).is_empty());
    }

    #[test]
    fn oauth2_lists_flows_before_declaration() {
        let schemes = schemes_of([(
            "petstore_auth",
            SchemeDefinition::oauth2(["authorizationCode", "clientCredentials"]).into(),
        )]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(
            lines,
            vec![
                "# OAuth2 authentication (authorizationCode, clientCredentials flow)",
                "OAUTH_TOKEN_PETSTORE_AUTH=your_oauth_token_here",
            ]
        );
    }

    #[test]
    fn oauth2_without_flows_says_unknown() {
        let schemes = schemes_of([("o", SchemeDefinition::of_kind("oauth2").into())]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(lines[0], "# OAuth2 authentication (unknown flow)");
    }

    #[test]
    fn oauth2_bypasses_the_resolver() {
        let schemes = schemes_of([("my.oauth", SchemeDefinition::oauth2(["implicit"]).into())]);
        let custom = |name: &str, suffix: &str| format!("CUSTOM_{name}_{suffix}");
        let entries = map_schemes(Some(&schemes), &custom);
        assert_eq!(
            entries[1].as_variable().map(|v| v.name.as_str()),
            Some("OAUTH_TOKEN_MY_OAUTH")
        );
    }

    #[test]
    fn reference_yields_single_comment() {
        let schemes = schemes_of([(
            "shared",
            SecurityScheme::reference("#/components/securitySchemes/shared"),
        )]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(
            lines,
            vec!["# shared - Referenced security scheme (reference not resolved)"]
        );
    }

    #[test]
    fn unknown_kinds_are_skipped() {
        let schemes = schemes_of([
            ("oidc", SchemeDefinition::of_kind("openIdConnect").into()),
            ("mtls", SchemeDefinition::of_kind("mutualTLS").into()),
        ]);
        assert!(map_schemes(Some(&schemes), &DefaultResolver).is_empty());
    }

    #[test]
    fn entries_follow_insertion_order() {
        let schemes = schemes_of([
            ("zeta", SchemeDefinition::api_key().into()),
            ("alpha", SchemeDefinition::http("bearer").into()),
            ("mid", SecurityScheme::reference("#/x")),
        ]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(
            lines,
            vec![
                "API_KEY_ZETA=your_api_key_here",
                "BEARER_TOKEN_ALPHA=your_bearer_token_here",
                "# mid - Referenced security scheme (reference not resolved)",
            ]
        );
    }

    #[test]
    fn duplicate_resolved_names_are_kept() {
        let schemes = schemes_of([
            ("a-b", SchemeDefinition::api_key().into()),
            ("a_b", SchemeDefinition::api_key().into()),
        ]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(lines, vec!["API_KEY_A_B=your_api_key_here"; 2]);
    }

    #[test]
    #[traced_test]
    fn malformed_entries_are_skipped_and_logged() {
        let schemes = schemes_of([
            ("weird", SecurityScheme::Unrecognized(serde_json::json!({ "type": 42 }))),
            ("key", SchemeDefinition::api_key().into()),
        ]);
        let lines = render(&map_schemes(Some(&schemes), &DefaultResolver));
        assert_eq!(lines, vec!["API_KEY_KEY=your_api_key_here"]);
        assert!(logs_contain("skipping malformed security scheme entry"));
    }

    #[test]
    #[traced_test]
    fn skipped_schemes_are_logged() {
        let schemes = schemes_of([("oidc", SchemeDefinition::of_kind("openIdConnect").into())]);
        map_schemes(Some(&schemes), &DefaultResolver);
        assert!(logs_contain("skipping unsupported security scheme type"));
        assert!(logs_contain("openIdConnect"));
    }
}
