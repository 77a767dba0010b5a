//! `README.md`

use crate::tokens::{FileMeta, Token};

const USAGE_LABEL: &str = "Primary brand color";

const USAGE_SECTION: &str = "\n\n## Usage\n\n```css\n/* Use CSS variables */\n.my-element {\n  background-color: var(--color-brand-100);\n  color: var(--color-brand-900);\n}\n```\n\n## Development\n\nThis brand guide is automatically generated from Figma variables.";

pub fn render(tokens: &[Token], meta: &FileMeta) -> String {
    let mut readme = format!(
        "# Brand Guide\n\
         \n\
         Generated from Figma file: **{}**\n\
         \n\
         Last updated: {}\n\
         \n\
         ## Color Palette\n\
         \n\
         | Color | Variable | HEX | Usage |\n\
         |-------|----------|-----|-------|",
        meta.name, meta.last_modified
    );

    for token in tokens {
        readme.push_str(&format!(
            "\n| {} | `{}` | `{}` | {} |",
            token.display_name,
            token.css_variable(),
            token.hex_or_fallback(),
            USAGE_LABEL
        ));
    }

    readme.push_str(USAGE_SECTION);
    readme
}
