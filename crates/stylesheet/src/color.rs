//! Color math for compiled declarations
//!
//! Hex decomposition follows the fade-gallery template's conventions:
//! 3-digit shorthand expands by digit doubling, 6-digit forms decompose
//! into RGB bytes. Both functions are total; a malformed hex literal
//! passes through unchanged (upstream color validation is the
//! constructor invariant on the color type, not this module's job).

/// Convert an integer percentage to a clamped 0.0..=1.0 fraction
pub fn clamp_fraction(percent: i64) -> f64 {
    percent.clamp(0, 100) as f64 / 100.0
}

/// Combine a hex color and an alpha fraction into an `rgba(...)` literal
///
/// Accepts `#rgb` and `#rrggbb` (case-insensitive, leading `#`
/// optional). Anything else is returned as the literal input.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return hex.to_string();
    }

    let r = u8::from_str_radix(&expanded[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&expanded[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&expanded[4..6], 16).unwrap_or(0);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba_short_and_long_agree() {
        assert_eq!(hex_to_rgba("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
        assert_eq!(hex_to_rgba("#ffffff", 0.5), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_hex_to_rgba_decomposition() {
        assert_eq!(hex_to_rgba("#e9e9e9", 0.8), "rgba(233, 233, 233, 0.8)");
        assert_eq!(hex_to_rgba("#000000", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("102030", 0.25), "rgba(16, 32, 48, 0.25)");
    }

    #[test]
    fn test_hex_to_rgba_case_insensitive() {
        assert_eq!(hex_to_rgba("#A1B2C3", 1.0), hex_to_rgba("#a1b2c3", 1.0));
    }

    #[test]
    fn test_malformed_hex_passes_through() {
        assert_eq!(hex_to_rgba("tomato", 0.5), "tomato");
        assert_eq!(hex_to_rgba("#ab", 0.5), "#ab");
        assert_eq!(hex_to_rgba("", 0.5), "");
    }

    #[test]
    fn test_clamp_fraction() {
        assert_eq!(clamp_fraction(80), 0.8);
        assert_eq!(clamp_fraction(150), 1.0);
        assert_eq!(clamp_fraction(-10), 0.0);
        assert_eq!(clamp_fraction(0), 0.0);
        assert_eq!(clamp_fraction(100), 1.0);
    }
}
