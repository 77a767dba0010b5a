//! Palette inspection
//!
//! Resolves the nine brand swatches against the live theme block so the
//! current colors can be checked without a browser. Swatches missing from the
//! stylesheet keep their default value.

use serde::Serialize;

use crate::color::{color_formats, ColorFormats};
use crate::theme::theme_declarations;
use crate::tokens::normalize_identifier;

pub const DEFAULT_SWATCHES: [(&str, &str); 9] = [
    ("Brand/100", "#f8fafc"),
    ("Brand/200", "#e2e8f0"),
    ("Brand/300", "#cbd5e1"),
    ("Brand/400", "#94a3b8"),
    ("Brand/500", "#64748b"),
    ("Brand/600", "#475569"),
    ("Brand/700", "#334155"),
    ("Brand/800", "#1e293b"),
    ("Brand/900", "#0f172a"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    pub name: String,
    /// Tailwind utility class, e.g. `bg-brand-100`
    pub class: String,
    pub css_variable: String,
    #[serde(flatten)]
    pub formats: ColorFormats,
}

#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub swatches: Vec<Swatch>,
}

/// Build the palette from stylesheet text; `None` means the defaults.
pub fn resolve_palette(css: Option<&str>) -> Palette {
    let declarations = css.map(theme_declarations).unwrap_or_default();

    let swatches = DEFAULT_SWATCHES
        .iter()
        .map(|&(name, default_hex)| {
            let identifier = normalize_identifier(name);
            let hex = declarations
                .iter()
                .find(|(id, _)| *id == identifier)
                .map(|(_, value)| value.as_str())
                .unwrap_or(default_hex);
            Swatch {
                name: name.to_string(),
                class: format!("bg-{identifier}"),
                css_variable: format!("--color-{identifier}"),
                formats: color_formats(hex),
            }
        })
        .collect();

    Palette { swatches }
}
