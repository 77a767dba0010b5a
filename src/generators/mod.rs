//! Brand guide artifact generators
//!
//! Four deterministic renderers, each a pure function of the token list and
//! the source file metadata:
//! - `styles/colors.css` ([`stylesheet::render`])
//! - `README.md` ([`readme::render`])
//! - `package.json` ([`manifest::render`])
//! - `index.html` ([`html::render`])

pub mod html;
pub mod manifest;
pub mod readme;
pub mod stylesheet;

use serde::Serialize;

use crate::tokens::{FileMeta, Token};

/// One file to push to the brand guide repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    pub path: String,
    pub content: String,
    /// Commit message for the contents API
    pub message: String,
}

impl FileDescriptor {
    fn new(path: &str, content: String, message: &str) -> Self {
        Self {
            path: path.to_string(),
            content,
            message: message.to_string(),
        }
    }
}

/// Render the full brand guide, in push order.
pub fn brand_guide_files(tokens: &[Token], meta: &FileMeta) -> Vec<FileDescriptor> {
    vec![
        FileDescriptor::new(
            "styles/colors.css",
            stylesheet::render(tokens, meta),
            "Update brand colors from Figma",
        ),
        FileDescriptor::new(
            "README.md",
            readme::render(tokens, meta),
            "Update brand guide documentation",
        ),
        FileDescriptor::new(
            "package.json",
            manifest::render(),
            "Add package.json for brand guide",
        ),
        FileDescriptor::new(
            "index.html",
            html::render(tokens, meta),
            "Update brand guide HTML",
        ),
    ]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::tokens::{FileMeta, Token};

    pub fn tokens() -> Vec<Token> {
        vec![
            Token::new("Brand/100", Some("#f8fafc".into())),
            Token::new("Brand/200", None),
            Token::new("Accent/Blue", Some("#2563eb".into())),
        ]
    }

    pub fn meta() -> FileMeta {
        FileMeta {
            name: "Acme Brand".into(),
            last_modified: "2024-05-01T10:00:00Z".into(),
        }
    }
}
