//! Color format conversion
//!
//! HEX -> RGB -> CMYK for the palette view. Only six-digit hex (with or
//! without a leading `#`) is understood; shorthand and alpha forms are not.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CMYK percentages, each in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// Display strings for a single color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub cmyk: String,
}

pub const NOT_AVAILABLE: &str = "N/A";

/// Parse `#rrggbb` / `rrggbb`, case-insensitive.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Approximate CMYK. Pure black has no defined chroma, so c/m/y are 0 there.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let red = f64::from(rgb.r) / 255.0;
    let green = f64::from(rgb.g) / 255.0;
    let blue = f64::from(rgb.b) / 255.0;

    let k = 1.0 - red.max(green).max(blue);
    let chroma = |channel: f64| {
        if k >= 1.0 {
            0.0
        } else {
            (1.0 - channel - k) / (1.0 - k)
        }
    };

    Cmyk {
        c: percent(chroma(red)),
        m: percent(chroma(green)),
        y: percent(chroma(blue)),
        k: percent(k),
    }
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Format a hex string for display; rgb/cmyk read "N/A" when it does not parse.
pub fn color_formats(hex: &str) -> ColorFormats {
    match hex_to_rgb(hex) {
        Some(rgb) => {
            let cmyk = rgb_to_cmyk(rgb);
            ColorFormats {
                hex: hex.to_uppercase(),
                rgb: format!("{} {} {}", rgb.r, rgb.g, rgb.b),
                cmyk: format!("{} {} {} {}", cmyk.c, cmyk.m, cmyk.y, cmyk.k),
            }
        }
        None => ColorFormats {
            hex: hex.to_uppercase(),
            rgb: NOT_AVAILABLE.to_string(),
            cmyk: NOT_AVAILABLE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(hex_to_rgb("0F172A"), Some(Rgb { r: 15, g: 23, b: 42 }));
        assert_eq!(
            hex_to_rgb("#E2e8F0"),
            Some(Rgb {
                r: 226,
                g: 232,
                b: 240
            })
        );
    }

    #[test]
    fn test_hex_to_rgb_rejects_other_shapes() {
        for bad in ["abc", "#12", "#fff", "#ff000080", "", "#", "#gg0000", "##ff0000"] {
            assert_eq!(hex_to_rgb(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_cmyk_black_and_white() {
        let black = rgb_to_cmyk(Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(black, Cmyk { c: 0, m: 0, y: 0, k: 100 });

        let white = rgb_to_cmyk(Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
        assert_eq!(white, Cmyk { c: 0, m: 0, y: 0, k: 0 });
    }

    #[test]
    fn test_cmyk_primary_and_slate() {
        let red = rgb_to_cmyk(Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(red, Cmyk { c: 0, m: 100, y: 100, k: 0 });

        // #64748b
        let slate = rgb_to_cmyk(Rgb {
            r: 100,
            g: 116,
            b: 139,
        });
        assert_eq!(slate, Cmyk { c: 28, m: 17, y: 0, k: 45 });
    }

    #[test]
    fn test_color_formats() {
        let formats = color_formats("#ff0000");
        assert_eq!(formats.hex, "#FF0000");
        assert_eq!(formats.rgb, "255 0 0");
        assert_eq!(formats.cmyk, "0 100 100 0");

        let formats = color_formats("#000000");
        assert_eq!(formats.cmyk, "0 0 0 100");
    }

    #[test]
    fn test_color_formats_malformed() {
        let formats = color_formats("abc");
        assert_eq!(formats.rgb, "N/A");
        assert_eq!(formats.cmyk, "N/A");
        assert_eq!(color_formats("#12").cmyk, "N/A");
    }
}
