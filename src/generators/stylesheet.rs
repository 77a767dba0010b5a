//! `styles/colors.css`

use crate::tokens::{FileMeta, Token};

/// Usage rules appended after `:root`. Fixed text, independent of the tokens.
const USAGE_EXAMPLES: &str = "\
/* Usage Examples */
.brand-100 { background-color: var(--color-brand-100); }
.brand-200 { background-color: var(--color-brand-200); }
.brand-300 { background-color: var(--color-brand-300); }
.brand-400 { background-color: var(--color-brand-400); }
.brand-500 { background-color: var(--color-brand-500); }
";

pub fn render(tokens: &[Token], meta: &FileMeta) -> String {
    let mut css = format!(
        "/* Brand Colors - Generated from Figma */\n\
         /* File: {} */\n\
         /* Last Updated: {} */\n\
         \n\
         :root {{",
        meta.name, meta.last_modified
    );

    for token in tokens {
        css.push_str(&format!(
            "\n  {}: {};",
            token.css_variable(),
            token.hex_or_fallback()
        ));
    }

    css.push_str("\n}\n\n");
    css.push_str(USAGE_EXAMPLES);
    css
}
