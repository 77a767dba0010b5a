//! `index.html`: a standalone page with one card per token.
//!
//! Names and values are inserted as exported, without escaping.

use crate::tokens::{FileMeta, Token};

const STYLE: &str = "\
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 20px; background: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; }
        .header { background: white; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
        .color-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; }
        .color-card { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .color-preview { height: 100px; border-radius: 8px; margin-bottom: 10px; border: 1px solid #e0e0e0; }
        code { background: #f0f0f0; padding: 2px 6px; border-radius: 4px; font-family: monospace; }";

fn color_card(token: &Token) -> String {
    let variable = token.css_variable();
    format!(
        r#"
        <div class="color-card">
          <div class="color-preview" style="background-color: var({variable})"></div>
          <h3>{name}</h3>
          <p><code>{variable}</code></p>
          <p><code>{hex}</code></p>
        </div>"#,
        name = token.display_name,
        hex = token.hex_or_fallback(),
    )
}

pub fn render(tokens: &[Token], meta: &FileMeta) -> String {
    let cards: String = tokens.iter().map(color_card).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Brand Guide - {name}</title>
    <link rel="stylesheet" href="styles/colors.css">
    <style>
{STYLE}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Brand Guide</h1>
            <p>Generated from Figma file: <strong>{name}</strong></p>
            <p>Last updated: {last_modified}</p>
        </div>
        <div class="color-grid">
            {cards}
        </div>
    </div>
</body>
</html>"#,
        name = meta.name,
        last_modified = meta.last_modified,
    )
}
