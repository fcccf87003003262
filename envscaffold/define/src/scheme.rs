//! Security scheme definitions.
//!
//! This module mirrors the `components.securitySchemes` section of an OpenAPI
//! document, reduced to the fields that influence environment variable
//! generation. Each entry is either a reference to a scheme defined elsewhere
//! or an inline definition classified by its `type`.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Security schemes keyed by their declared name.
///
/// Insertion order is preserved: it decides the order in which variables
/// appear in the generated template.
pub type SecuritySchemes = IndexMap<String, SecurityScheme>;

/// OAuth2 flows keyed by flow name (e.g., `authorizationCode`).
///
/// Flow bodies are kept as raw JSON since only the names are rendered.
pub type OAuthFlows = IndexMap<String, serde_json::Value>;

/// A single security scheme entry: either a reference or an inline definition.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::{SchemeDefinition, SecurityScheme};
///
/// let inline = SecurityScheme::from(SchemeDefinition::http("bearer"));
/// let referenced = SecurityScheme::reference("#/components/securitySchemes/shared");
///
/// assert!(!inline.is_reference());
/// assert!(referenced.is_reference());
/// ```
///
/// Deserializing from OpenAPI JSON:
///
/// ```
/// use envscaffold_define::{SchemeKind, SecurityScheme};
///
/// let scheme: SecurityScheme =
///     serde_json::from_str(r#"{ "type": "apiKey", "in": "header", "name": "X-API-Key" }"#).unwrap();
///
/// match scheme {
///     SecurityScheme::Definition(def) => assert_eq!(def.kind, SchemeKind::ApiKey),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecurityScheme {
    /// A `$ref` pointer to a scheme declared elsewhere.
    ///
    /// References are never dereferenced by the generator.
    Reference {
        /// The raw `$ref` target.
        #[serde(rename = "$ref")]
        reference: String,
    },

    /// An inline scheme definition.
    Definition(SchemeDefinition),

    /// An entry that is neither a `$ref` nor a well-formed definition
    /// (e.g. `type: 42`, `flows: "x"`, or a bare scalar).
    ///
    /// Kept so one odd entry does not reject the whole map. The generator
    /// skips it.
    Unrecognized(serde_json::Value),
}

impl SecurityScheme {
    /// Creates a reference entry pointing at `target`.
    pub fn reference(target: impl Into<String>) -> Self {
        Self::Reference {
            reference: target.into(),
        }
    }

    /// Returns `true` for `$ref` entries.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Returns `true` for entries that did not match any known shape.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

impl From<SchemeDefinition> for SecurityScheme {
    fn from(definition: SchemeDefinition) -> Self {
        Self::Definition(definition)
    }
}

/// An inline security scheme definition.
///
/// Only `type`, `scheme` and `flows` are read; every other OpenAPI field
/// (`in`, `name`, `bearerFormat`, ...) is accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeDefinition {
    /// The scheme type (`apiKey`, `http`, `oauth2`, or anything else).
    #[serde(rename = "type", default)]
    pub kind: SchemeKind,

    /// The HTTP auth scheme (`bearer`, `basic`, ...) for `http` schemes.
    #[serde(rename = "scheme", default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    /// OAuth2 flows for `oauth2` schemes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,
}

impl SchemeDefinition {
    /// Creates an `apiKey` definition.
    pub fn api_key() -> Self {
        Self {
            kind: SchemeKind::ApiKey,
            ..Self::default()
        }
    }

    /// Creates an `http` definition with the given auth scheme.
    pub fn http(subtype: impl Into<String>) -> Self {
        Self {
            kind: SchemeKind::Http,
            subtype: Some(subtype.into()),
            flows: None,
        }
    }

    /// Creates an `oauth2` definition declaring the named flows.
    ///
    /// Flow bodies are left empty.
    ///
    /// ## Examples
    ///
    /// ```
    /// use envscaffold_define::SchemeDefinition;
    ///
    /// let def = SchemeDefinition::oauth2(["authorizationCode", "clientCredentials"]);
    /// assert_eq!(def.flow_names(), vec!["authorizationCode", "clientCredentials"]);
    /// ```
    pub fn oauth2<I, S>(flows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flows = flows
            .into_iter()
            .map(|name| (name.into(), serde_json::Value::Object(Default::default())))
            .collect();

        Self {
            kind: SchemeKind::OAuth2,
            subtype: None,
            flows: Some(flows),
        }
    }

    /// Creates a definition from a raw `type` value.
    pub fn of_kind(kind: &str) -> Self {
        Self {
            kind: SchemeKind::from(kind.to_string()),
            ..Self::default()
        }
    }

    /// Parses the `scheme` field as a supported HTTP auth scheme.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` when the field is
    /// missing or names an unsupported scheme (e.g., `digest`).
    pub fn http_subtype(&self) -> Option<HttpSubtype> {
        self.subtype.as_deref().and_then(|s| s.parse().ok())
    }

    /// Returns the declared OAuth2 flow names in declaration order.
    pub fn flow_names(&self) -> Vec<&str> {
        self.flows
            .as_ref()
            .map(|flows| flows.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// The `type` of a security scheme.
///
/// Unknown types are preserved in [`SchemeKind::Other`] rather than rejected,
/// so documents using e.g. `openIdConnect` or `mutualTLS` still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
pub enum SchemeKind {
    #[strum(serialize = "apiKey")]
    ApiKey,
    #[strum(serialize = "http")]
    Http,
    #[strum(serialize = "oauth2")]
    OAuth2,
    /// Any other type, kept verbatim. Empty when the `type` field is missing.
    #[strum(default)]
    Other(String),
}

impl Default for SchemeKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for SchemeKind {
    fn from(value: String) -> Self {
        // `Other` is the strum default, so parsing never fails
        match value.parse() {
            Ok(kind) => kind,
            Err(_) => Self::Other(value),
        }
    }
}

impl From<SchemeKind> for String {
    fn from(kind: SchemeKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey => f.write_str("apiKey"),
            Self::Http => f.write_str("http"),
            Self::OAuth2 => f.write_str("oauth2"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// HTTP auth schemes that map to environment variables.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use envscaffold_define::HttpSubtype;
///
/// assert_eq!(HttpSubtype::from_str("Bearer").unwrap(), HttpSubtype::Bearer);
/// assert_eq!(HttpSubtype::from_str("BASIC").unwrap(), HttpSubtype::Basic);
/// assert!(HttpSubtype::from_str("digest").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HttpSubtype {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// `Authorization: Basic <base64(username:password)>`
    Basic,
}
