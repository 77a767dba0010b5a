//! Webhook payload model and token extraction
//!
//! The Figma export is only loosely structured, so the payload is kept as a
//! parsed `serde_json::Value` and read through accessors that tolerate missing
//! or mistyped fields. A body that is not JSON at all is the only hard failure.

use serde::Serialize;
use serde_json::Value;

/// Literal substituted for tokens without a hex value in documentation-style
/// artifacts. The theme block never uses it.
pub const FALLBACK_HEX: &str = "#000000";

// =============================================================================
// TOKEN TYPES
// =============================================================================

/// A single named color from the first collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Name as exported, e.g. `Brand/100`
    pub display_name: String,
    /// Custom-property suffix, e.g. `brand-100`
    pub identifier: String,
    /// Hex value of the first mode, when present and non-empty
    pub hex: Option<String>,
}

impl Token {
    pub fn new(display_name: impl Into<String>, hex: Option<String>) -> Self {
        let display_name = display_name.into();
        Self {
            identifier: normalize_identifier(&display_name),
            display_name,
            hex: hex.filter(|h| !h.is_empty()),
        }
    }

    /// Custom property name, e.g. `--color-brand-100`
    pub fn css_variable(&self) -> String {
        format!("--color-{}", self.identifier)
    }

    pub fn hex_or_fallback(&self) -> &str {
        self.hex.as_deref().unwrap_or(FALLBACK_HEX)
    }
}

/// Lowercase and replace the first `/` with `-`. No further CSS validation.
pub fn normalize_identifier(display_name: &str) -> String {
    display_name.to_lowercase().replacen('/', "-", 1)
}

/// Tokens of the first collection in the payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    /// Raw number of variable entries, including ones that yielded no token
    pub variable_count: usize,
    pub tokens: Vec<Token>,
}

/// Source file metadata used in artifact headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub last_modified: String,
}

// =============================================================================
// PAYLOAD
// =============================================================================

/// Parsed webhook body
#[derive(Debug, Clone)]
pub struct WebhookPayload {
    raw: Value,
}

impl WebhookPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self::from_value)
    }

    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn file_meta(&self) -> FileMeta {
        let file = &self.raw["figmaFile"];
        FileMeta {
            name: scalar_text(&file["name"]),
            last_modified: scalar_text(&file["lastModified"]),
        }
    }

    /// `github.owner` / `github.repo`, both required and non-empty
    pub fn github_target(&self) -> Option<crate::github::RepoTarget> {
        let github = &self.raw["github"];
        let owner = github["owner"].as_str().filter(|s| !s.is_empty())?;
        let repo = github["repo"].as_str().filter(|s| !s.is_empty())?;
        Some(crate::github::RepoTarget::new(owner, repo))
    }

    /// All collections as raw values, for logging
    pub fn collections(&self) -> &[Value] {
        self.raw["collections"]
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Extract the tokens of the first collection.
    pub fn extract_collection(&self) -> Collection {
        extract_collection(&self.raw)
    }
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Walk the first collection and build one token per well-formed variable.
///
/// Additional collections are ignored. Each variable's hex comes from the first
/// key of its `values` map in document order; which mode that is depends only
/// on position. A variable without a string `name` yields no token.
pub fn extract_collection(payload: &Value) -> Collection {
    let Some(first) = payload["collections"].as_array().and_then(|c| c.first()) else {
        return Collection::default();
    };

    let variables = first["variables"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let tokens = variables.iter().filter_map(extract_token).collect();

    Collection {
        name: scalar_text(&first["name"]),
        variable_count: variables.len(),
        tokens,
    }
}

fn extract_token(variable: &Value) -> Option<Token> {
    let name = variable["name"].as_str()?;
    let hex = variable["values"]
        .as_object()
        .and_then(|modes| modes.values().next())
        .and_then(|mode| mode["hex"].as_str())
        .map(str::to_string);
    Some(Token::new(name, hex))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
