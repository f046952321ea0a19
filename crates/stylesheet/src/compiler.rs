//! The theme-to-stylesheet compiler
//!
//! `compile` is pure and total: it never fails, never touches the
//! surface, and recompiling the same state yields byte-identical
//! output. Emission order is fixed for readability only; cascade
//! correctness comes from the `!important` suffix every declaration
//! carries.
//!
//! Effective-override rules:
//! - a color counts iff it is set and differs case-insensitively from
//!   the default literal (string comparison, never parsed-color
//!   equality, so `#FFF` over a `#ffffff` default is an override);
//! - integers and booleans count iff they differ from the default
//!   record.
//!
//! A group with overrides emits one unguarded light block; dark values
//! for that group are restated inside the two guarded dark blocks and
//! never appear unguarded.

use theme_state::{Color, ThemeState};

use crate::color::{clamp_fraction, hex_to_rgba};
use crate::selectors;

/// Compiled stylesheet text: rule blocks joined by blank lines, trimmed
pub type CssText = String;

/// Template base for vertical caption padding, px
const BASE_PADDING_Y: i64 = 3;

/// Template base for horizontal caption padding, px
const BASE_PADDING_X: i64 = 7;

/// Fixed rules emitted when the attribution background is stripped
const ATTRIBUTION_BG_RESET: &[&str] = &[
    "background:transparent !important;",
    "border:none !important;",
    "box-shadow:none !important;",
];

/// Compile the current state against the default record
pub fn compile(state: &ThemeState, defaults: &ThemeState) -> CssText {
    let mut blocks: Vec<String> = Vec::new();

    // Caption pill: radius, weight, derived padding, bg + opacity
    let mut span = Vec::new();
    if state.border_radius != defaults.border_radius {
        span.push(format!(
            "border-radius:{}px !important;",
            state.border_radius
        ));
    }
    if state.bold_caption != defaults.bold_caption {
        let weight = if state.bold_caption { 700 } else { 400 };
        span.push(format!("font-weight:{} !important;", weight));
    }
    if state.padding_y_delta != defaults.padding_y_delta
        || state.padding_x_delta != defaults.padding_x_delta
    {
        let padding_y = (BASE_PADDING_Y + state.padding_y_delta).max(0);
        let padding_x = (BASE_PADDING_X + state.padding_x_delta).max(0);
        span.push(format!(
            "padding:{}px {}px !important;",
            padding_y, padding_x
        ));
    }
    if color_override(&state.caption_bg, &defaults.caption_bg).is_some()
        || state.caption_bg_opacity != defaults.caption_bg_opacity
    {
        let alpha = clamp_fraction(state.caption_bg_opacity);
        let bg = state
            .caption_bg
            .as_deref()
            .or(defaults.caption_bg.as_deref())
            .unwrap_or("#e9e9e9");
        span.push(format!(
            "--background-caption-fade-gallery:{} !important;",
            hex_to_rgba(bg, alpha)
        ));
    }
    if !span.is_empty() {
        blocks.push(block(selectors::CAPTION_SPAN, &span));
    }

    // Caption text color
    if let Some(color) = color_override(&state.caption_color, &defaults.caption_color) {
        blocks.push(block(
            selectors::CAPTION,
            &[format!("color:{} !important;", color)],
        ));
    }

    // Article root colors
    let mut light = Vec::new();
    let mut dark = Vec::new();
    push_color(&mut light, "background-color", &state.article_bg, &defaults.article_bg);
    push_color(&mut light, "color", &state.article_text, &defaults.article_text);
    push_color(&mut dark, "background-color", &state.article_bg_dark, &defaults.article_bg_dark);
    push_color(&mut dark, "color", &state.article_text_dark, &defaults.article_text_dark);
    push_group(&mut blocks, selectors::ARTICLE_ROOT, &light, &dark);

    // Title
    let mut light = Vec::new();
    let mut dark = Vec::new();
    push_color(&mut light, "color", &state.title_color, &defaults.title_color);
    push_color(&mut dark, "color", &state.title_color_dark, &defaults.title_color_dark);
    push_group(&mut blocks, selectors::TITLE, &light, &dark);

    // Subtitle (color + centered flag)
    let mut light = Vec::new();
    let mut dark = Vec::new();
    push_color(&mut light, "color", &state.subtitle_color, &defaults.subtitle_color);
    if state.subtitle_centered != defaults.subtitle_centered {
        let align = if state.subtitle_centered { "center" } else { "left" };
        light.push(format!("text-align:{} !important;", align));
    }
    push_color(&mut dark, "color", &state.subtitle_color_dark, &defaults.subtitle_color_dark);
    push_group(&mut blocks, selectors::SUBTITLE, &light, &dark);

    // Highlight marks
    let mut light = Vec::new();
    let mut dark = Vec::new();
    push_color(&mut light, "background-color", &state.mark_bg, &defaults.mark_bg);
    push_color(&mut light, "color", &state.mark_text, &defaults.mark_text);
    push_color(&mut dark, "background-color", &state.mark_bg_dark, &defaults.mark_bg_dark);
    push_color(&mut dark, "color", &state.mark_text_dark, &defaults.mark_text_dark);
    push_group(&mut blocks, selectors::MARK, &light, &dark);

    // Attribution title
    let mut light = Vec::new();
    let mut dark = Vec::new();
    push_color(
        &mut light,
        "color",
        &state.attribution_title_color,
        &defaults.attribution_title_color,
    );
    push_color(
        &mut dark,
        "color",
        &state.attribution_title_color_dark,
        &defaults.attribution_title_color_dark,
    );
    push_group(&mut blocks, selectors::ATTRIBUTION_TITLE, &light, &dark);

    // Attribution background removal: fixed block, independent of colors
    if state.remove_attribution_bg != defaults.remove_attribution_bg && state.remove_attribution_bg
    {
        let reset: Vec<String> = ATTRIBUTION_BG_RESET.iter().map(|d| d.to_string()).collect();
        blocks.push(block(selectors::ATTRIBUTION_BLOCK, &reset));
        blocks.push(block(
            selectors::ATTRIBUTION_TITLE,
            &["background:transparent !important;".to_string()],
        ));
    }

    blocks.join("\n\n").trim().to_string()
}

/// Wrap compiled css in the style-tag envelope used by the clipboard
/// boundary; empty css yields the empty string
pub fn wrap_style_tag(css: &str) -> String {
    let trimmed = css.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("<style>\n{}\n</style>", trimmed)
    }
}

/// Effective override for a color parameter
///
/// Set-and-different (case-insensitive against the default literal)
/// wins; unset never overrides, even when the default is concrete.
fn color_override<'a>(current: &'a Option<Color>, default: &Option<Color>) -> Option<&'a str> {
    match (current, default) {
        (Some(c), Some(d)) if c.eq_ignore_ascii_case(d) => None,
        (Some(c), _) => Some(c.as_str()),
        (None, _) => None,
    }
}

fn push_color(
    declarations: &mut Vec<String>,
    property: &str,
    current: &Option<Color>,
    default: &Option<Color>,
) {
    if let Some(color) = color_override(current, default) {
        declarations.push(format!("{}:{} !important;", property, color));
    }
}

fn block(selector: &str, declarations: &[String]) -> String {
    format!("{} {{ {} }}", selector, declarations.join(" "))
}

/// Emit one group: unguarded light block plus the two guarded dark
/// blocks when dark declarations exist
fn push_group(blocks: &mut Vec<String>, selector: &str, light: &[String], dark: &[String]) {
    if !light.is_empty() {
        blocks.push(block(selector, light));
    }
    if !dark.is_empty() {
        let declarations = dark.join(" ");
        blocks.push(selectors::dark_auto_block(selector, &declarations));
        blocks.push(selectors::dark_forced_block(selector, &declarations));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_state::{ParamValue, ThemeParameter};

    fn defaults() -> ThemeState {
        ThemeState::default()
    }

    fn edited(param: ThemeParameter, value: ParamValue) -> ThemeState {
        let mut state = ThemeState::default();
        state.set(param, value).unwrap();
        state
    }

    #[test]
    fn test_all_default_compiles_empty() {
        assert_eq!(compile(&defaults(), &defaults()), "");
    }

    #[test]
    fn test_single_integer_edit_emits_one_declaration() {
        let state = edited(ThemeParameter::BorderRadius, ParamValue::Integer(12));
        let css = compile(&state, &defaults());
        assert_eq!(
            css,
            ".fade-gallery .content .caption span:not(:empty) { border-radius:12px !important; }"
        );
        assert!(!css.contains("@media"));
        assert!(!css.contains("data-theme-mode"));
    }

    #[test]
    fn test_single_boolean_edit_emits_one_declaration() {
        let state = edited(ThemeParameter::BoldCaption, ParamValue::Boolean(true));
        let css = compile(&state, &defaults());
        assert_eq!(
            css,
            ".fade-gallery .content .caption span:not(:empty) { font-weight:700 !important; }"
        );
    }

    #[test]
    fn test_padding_is_derived_from_base_plus_delta() {
        let state = edited(ThemeParameter::PaddingYDelta, ParamValue::Integer(4));
        let css = compile(&state, &defaults());
        assert!(css.contains("padding:7px 7px !important;"));
    }

    #[test]
    fn test_padding_floors_at_zero() {
        let mut state = ThemeState::default();
        state
            .set(ThemeParameter::PaddingYDelta, ParamValue::Integer(-10))
            .unwrap();
        state
            .set(ThemeParameter::PaddingXDelta, ParamValue::Integer(-10))
            .unwrap();
        let css = compile(&state, &defaults());
        assert!(css.contains("padding:0px 0px !important;"));
        assert!(!css.contains("-px"));
    }

    #[test]
    fn test_caption_bg_and_opacity_combine_into_rgba() {
        let state = edited(ThemeParameter::CaptionBgOpacity, ParamValue::Integer(50));
        let css = compile(&state, &defaults());
        // Opacity-only change combines with the default background color
        assert!(css.contains(
            "--background-caption-fade-gallery:rgba(233, 233, 233, 0.5) !important;"
        ));
    }

    #[test]
    fn test_caption_bg_opacity_clamped() {
        let state = edited(ThemeParameter::CaptionBgOpacity, ParamValue::Integer(150));
        let css = compile(&state, &defaults());
        assert!(css.contains("rgba(233, 233, 233, 1)"));
    }

    #[test]
    fn test_caption_color_block() {
        let state = edited(
            ThemeParameter::CaptionColor,
            ParamValue::Color(Some("#ff0000".to_string())),
        );
        let css = compile(&state, &defaults());
        assert_eq!(
            css,
            ".fade-gallery .content .caption { color:#ff0000 !important; }"
        );
    }

    #[test]
    fn test_color_compare_is_case_insensitive() {
        // Same literal in different case is not an override
        let state = edited(
            ThemeParameter::CaptionColor,
            ParamValue::Color(Some("#FFFFFF".to_string())),
        );
        assert_eq!(compile(&state, &defaults()), "");
    }

    #[test]
    fn test_compile_color_compare_is_string_not_parsed() {
        // #FFF and #ffffff denote the same color but differ as strings,
        // so the short form over the long default counts as an override
        let state = edited(
            ThemeParameter::CaptionColor,
            ParamValue::Color(Some("#FFF".to_string())),
        );
        let css = compile(&state, &defaults());
        assert!(css.contains("color:#FFF !important;"));
    }

    #[test]
    fn test_unset_color_is_not_an_override() {
        let state = edited(ThemeParameter::CaptionColor, ParamValue::Color(None));
        assert_eq!(compile(&state, &defaults()), "");
    }

    #[test]
    fn test_light_override_emits_unguarded_block() {
        let state = edited(
            ThemeParameter::ArticleBg,
            ParamValue::Color(Some("#fafafa".to_string())),
        );
        let css = compile(&state, &defaults());
        assert_eq!(
            css,
            ".fade-gallery .content { background-color:#fafafa !important; }"
        );
    }

    #[test]
    fn test_dark_only_override_is_always_guarded() {
        let state = edited(
            ThemeParameter::ArticleBgDark,
            ParamValue::Color(Some("#101018".to_string())),
        );
        let css = compile(&state, &defaults());
        let blocks: Vec<&str> = css.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("@media (prefers-color-scheme: dark)"));
        assert!(blocks[0].contains("html[data-theme-mode=\"auto\"] .fade-gallery .content"));
        assert!(blocks[1].starts_with("html[data-theme-mode=\"on\"]"));
        // Never unguarded
        assert!(!css.contains("\n.fade-gallery .content {"));
        assert!(!css.starts_with(".fade-gallery"));
    }

    #[test]
    fn test_light_and_dark_pair_emits_three_blocks() {
        let mut state = ThemeState::default();
        state
            .set(
                ThemeParameter::TitleColor,
                ParamValue::Color(Some("#222222".to_string())),
            )
            .unwrap();
        state
            .set(
                ThemeParameter::TitleColorDark,
                ParamValue::Color(Some("#dddddd".to_string())),
            )
            .unwrap();
        let css = compile(&state, &defaults());
        let blocks: Vec<&str> = css.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            ".fade-gallery .content h1.entry-title { color:#222222 !important; }"
        );
        assert!(blocks[1].contains("prefers-color-scheme: dark"));
        assert!(blocks[1].contains("color:#dddddd !important;"));
        assert!(blocks[2].starts_with("html[data-theme-mode=\"on\"]"));
        assert!(blocks[2].contains("color:#dddddd !important;"));
    }

    #[test]
    fn test_subtitle_centered_flag() {
        let state = edited(ThemeParameter::SubtitleCentered, ParamValue::Boolean(true));
        let css = compile(&state, &defaults());
        assert_eq!(
            css,
            ".fade-gallery .content .entry-subtitle { text-align:center !important; }"
        );
    }

    #[test]
    fn test_mark_group() {
        let mut state = ThemeState::default();
        state
            .set(
                ThemeParameter::MarkBg,
                ParamValue::Color(Some("#fff176".to_string())),
            )
            .unwrap();
        state
            .set(
                ThemeParameter::MarkText,
                ParamValue::Color(Some("#1a1a1a".to_string())),
            )
            .unwrap();
        let css = compile(&state, &defaults());
        assert_eq!(
            css,
            ".fade-gallery .content mark { background-color:#fff176 !important; color:#1a1a1a !important; }"
        );
    }

    #[test]
    fn test_remove_attribution_bg_emits_fixed_block() {
        let state = edited(ThemeParameter::RemoveAttributionBg, ParamValue::Boolean(true));
        let css = compile(&state, &defaults());
        assert!(css.contains(
            ".fade-gallery .content .attribution { background:transparent !important; border:none !important; box-shadow:none !important; }"
        ));
        assert!(css.contains(
            ".fade-gallery .content .attribution .attribution-title { background:transparent !important; }"
        ));
    }

    #[test]
    fn test_emission_order_is_fixed() {
        let mut state = ThemeState::default();
        state
            .set(ThemeParameter::RemoveAttributionBg, ParamValue::Boolean(true))
            .unwrap();
        state
            .set(
                ThemeParameter::CaptionColor,
                ParamValue::Color(Some("#123456".to_string())),
            )
            .unwrap();
        state
            .set(ThemeParameter::BorderRadius, ParamValue::Integer(9))
            .unwrap();
        let css = compile(&state, &defaults());

        let span_pos = css.find("border-radius").unwrap();
        let caption_pos = css.find("color:#123456").unwrap();
        let attribution_pos = css.find("background:transparent").unwrap();
        assert!(span_pos < caption_pos);
        assert!(caption_pos < attribution_pos);
    }

    #[test]
    fn test_recompilation_is_byte_identical() {
        let mut state = ThemeState::default();
        state
            .set(ThemeParameter::BorderRadius, ParamValue::Integer(3))
            .unwrap();
        state
            .set(
                ThemeParameter::ArticleTextDark,
                ParamValue::Color(Some("#cccccc".to_string())),
            )
            .unwrap();
        let first = compile(&state, &defaults());
        let second = compile(&state, &defaults());
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrap_style_tag() {
        assert_eq!(wrap_style_tag(""), "");
        assert_eq!(wrap_style_tag("   \n"), "");
        assert_eq!(
            wrap_style_tag(".x { color:#fff !important; }"),
            "<style>\n.x { color:#fff !important; }\n</style>"
        );
    }
}
