//! `@theme inline` block rewriting
//!
//! The target stylesheet carries exactly one block of the form
//!
//! ```css
//! @theme inline {
//!   --color-background: var(--background);
//!   ...
//! }
//! ```
//!
//! The block is located by a non-greedy scan to the first `}` after the
//! marker, so it must never contain nested braces. Only tokens with a real hex
//! value are written into it.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::{debug, info};

use crate::error::ThemeError;
use crate::tokens::Token;

pub const THEME_MARKER: &str = "@theme inline";

const PREAMBLE: [&str; 4] = [
    "--color-background: var(--background);",
    "--color-foreground: var(--foreground);",
    "--font-sans: var(--font-geist-sans);",
    "--font-mono: var(--font-geist-mono);",
];

static THEME_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@theme inline\s*\{[\s\S]*?\}").unwrap());

static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--color-([^\s:;{}]+)\s*:\s*([^;{}]+?)\s*;").unwrap());

/// Render a complete theme block for the given tokens.
pub fn render_theme_block(tokens: &[Token]) -> String {
    let mut block = format!("{THEME_MARKER} {{");
    for line in PREAMBLE {
        block.push_str("\n  ");
        block.push_str(line);
    }
    for token in tokens {
        if let Some(hex) = &token.hex {
            block.push_str(&format!("\n  {}: {};", token.css_variable(), hex));
        }
    }
    block.push_str("\n}");
    block
}

/// Replace the first theme block in `css`. Returns `None` if there is none.
pub fn rewrite_theme_block(css: &str, tokens: &[Token]) -> Option<String> {
    if !THEME_BLOCK_RE.is_match(css) {
        return None;
    }
    let block = render_theme_block(tokens);
    Some(THEME_BLOCK_RE.replace(css, NoExpand(&block)).into_owned())
}

/// `--color-*` declarations of the first theme block, as `(identifier, value)`.
pub fn theme_declarations(css: &str) -> Vec<(String, String)> {
    let Some(block) = THEME_BLOCK_RE.find(css) else {
        return Vec::new();
    };
    DECLARATION_RE
        .captures_iter(block.as_str())
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// The stylesheet on disk that owns the theme block
#[derive(Debug, Clone)]
pub struct ThemeFile {
    path: PathBuf,
}

impl ThemeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<String, ThemeError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    /// Rewrite the theme block in place.
    ///
    /// The whole file is overwritten on success. If the block is missing the
    /// file is left untouched. Returns the number of token declarations written.
    pub async fn apply(&self, tokens: &[Token]) -> Result<usize, ThemeError> {
        let current = self.read().await?;

        let updated =
            rewrite_theme_block(&current, tokens).ok_or_else(|| ThemeError::BlockNotFound {
                path: self.path.display().to_string(),
            })?;

        tokio::fs::write(&self.path, updated).await?;

        let written = tokens.iter().filter(|t| t.hex.is_some()).count();
        debug!(path = %self.path.display(), written, "theme block rewritten");
        info!("@theme section updated successfully");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const GLOBALS_CSS: &str = r#"@import "tailwindcss";

:root {
  --background: #ffffff;
  --foreground: #171717;
}

@theme inline {
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --font-sans: var(--font-geist-sans);
  --font-mono: var(--font-geist-mono);
}

body {
  background: var(--background);
}
"#;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("Brand/100", Some("#ff0000".into())),
            Token::new("Brand/200", None),
            Token::new("Brand/300", Some("#00ff00".into())),
        ]
    }

    #[test]
    fn test_render_skips_tokens_without_hex() {
        let block = render_theme_block(&tokens());
        assert_eq!(
            block,
            "@theme inline {\n  \
             --color-background: var(--background);\n  \
             --color-foreground: var(--foreground);\n  \
             --font-sans: var(--font-geist-sans);\n  \
             --font-mono: var(--font-geist-mono);\n  \
             --color-brand-100: #ff0000;\n  \
             --color-brand-300: #00ff00;\n\
             }"
        );
        assert!(!block.contains("#000000"));
    }

    #[test]
    fn test_rewrite_keeps_surrounding_css() {
        let updated = rewrite_theme_block(GLOBALS_CSS, &tokens()).unwrap();
        let head = "@import \"tailwindcss\";\n\n:root {\n  --background: #ffffff;";
        assert!(updated.starts_with(head));
        assert!(updated.contains("  --color-brand-300: #00ff00;\n}\n\nbody {"));
        assert_eq!(updated.matches(THEME_MARKER).count(), 1);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewrite_theme_block(GLOBALS_CSS, &tokens()).unwrap();
        let twice = rewrite_theme_block(&once, &tokens()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rewrite_replaces_first_block_only() {
        let css = "@theme inline { --a: 1; }\n@theme inline { --b: 2; }\n";
        let updated = rewrite_theme_block(css, &[]).unwrap();
        assert!(updated.ends_with("}\n@theme inline { --b: 2; }\n"));
    }

    #[test]
    fn test_rewrite_without_block() {
        assert!(rewrite_theme_block(":root { --a: 1; }", &tokens()).is_none());
        assert!(rewrite_theme_block("@theme inline", &tokens()).is_none());
    }

    #[test]
    fn test_replacement_is_literal() {
        let tokens = vec![Token::new("Odd/$1", Some("#123456".into()))];
        let updated = rewrite_theme_block(GLOBALS_CSS, &tokens).unwrap();
        assert!(updated.contains("--color-odd-$1: #123456;"));
    }

    #[test]
    fn test_theme_declarations() {
        let updated = rewrite_theme_block(GLOBALS_CSS, &tokens()).unwrap();
        let declarations = theme_declarations(&updated);
        assert_eq!(
            declarations,
            vec![
                ("background".to_string(), "var(--background)".to_string()),
                ("foreground".to_string(), "var(--foreground)".to_string()),
                ("brand-100".to_string(), "#ff0000".to_string()),
                ("brand-300".to_string(), "#00ff00".to_string()),
            ]
        );
        assert!(theme_declarations("body { color: red; }").is_empty());
    }

    #[tokio::test]
    async fn test_apply_rewrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("globals.css");
        tokio::fs::write(&path, GLOBALS_CSS).await.unwrap();

        let theme = ThemeFile::new(&path);
        assert_eq!(theme.apply(&tokens()).await.unwrap(), 2);
        let first = tokio::fs::read_to_string(&path).await.unwrap();

        theme.apply(&tokens()).await.unwrap();
        let second = tokio::fs::read_to_string(&path).await.unwrap();

        assert_eq!(first, second);
        assert!(first.contains("--color-brand-100: #ff0000;"));
    }

    #[tokio::test]
    async fn test_apply_missing_block_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("globals.css");
        let original = ":root {\n  --background: #ffffff;\n}\n";
        tokio::fs::write(&path, original).await.unwrap();

        let err = ThemeFile::new(&path).apply(&tokens()).await.unwrap_err();
        assert!(matches!(err, ThemeError::BlockNotFound { .. }));
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_apply_missing_file() {
        let dir = tempdir().unwrap();
        let err = ThemeFile::new(dir.path().join("absent.css"))
            .apply(&tokens())
            .await
            .unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
