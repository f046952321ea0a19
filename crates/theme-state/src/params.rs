//! Theme parameter definitions
//!
//! Every tunable visual setting is one variant of [`ThemeParameter`].
//! Each parameter has a stable camelCase key (used by the external
//! control surface) and a semantic kind: color, integer, or boolean.
//! Color parameters carry an explicit "unset" state (`None`), distinct
//! from any concrete color, meaning "no override, inherit the template
//! default".

use serde::{Deserialize, Serialize};

/// A color represented as a hex string (e.g., "#ffffff" or "#fff")
///
/// Construction-side validation must guarantee a 3- or 6-hex-digit
/// form; downstream color math is total over that input.
pub type Color = String;

/// Semantic kind of a theme parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamKind {
    /// Hex color with a nullable "unset" state
    Color,
    /// Bounded integer (radii, deltas, percentages)
    Integer,
    /// On/off flag
    Boolean,
}

/// One tunable theme parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeParameter {
    /// Caption pill corner radius in pixels
    BorderRadius,
    /// Bold caption text
    BoldCaption,
    /// Vertical caption padding delta against the template base
    PaddingYDelta,
    /// Horizontal caption padding delta against the template base
    PaddingXDelta,
    /// Caption text color
    CaptionColor,
    /// Caption background color (combined with opacity)
    CaptionBg,
    /// Caption background opacity, integer percent 0-100
    CaptionBgOpacity,
    /// Article background color, light mode
    ArticleBg,
    /// Article background color, dark mode
    ArticleBgDark,
    /// Article text color, light mode
    ArticleText,
    /// Article text color, dark mode
    ArticleTextDark,
    /// Title color, light mode
    TitleColor,
    /// Title color, dark mode
    TitleColorDark,
    /// Subtitle color, light mode
    SubtitleColor,
    /// Subtitle color, dark mode
    SubtitleColorDark,
    /// Center the subtitle
    SubtitleCentered,
    /// Highlight mark background, light mode
    MarkBg,
    /// Highlight mark background, dark mode
    MarkBgDark,
    /// Highlight mark text color, light mode
    MarkText,
    /// Highlight mark text color, dark mode
    MarkTextDark,
    /// Attribution block title color, light mode
    AttributionTitleColor,
    /// Attribution block title color, dark mode
    AttributionTitleColorDark,
    /// Strip the attribution block background entirely
    RemoveAttributionBg,
}

impl ThemeParameter {
    /// Every parameter, in declaration order
    pub const ALL: [ThemeParameter; 23] = [
        ThemeParameter::BorderRadius,
        ThemeParameter::BoldCaption,
        ThemeParameter::PaddingYDelta,
        ThemeParameter::PaddingXDelta,
        ThemeParameter::CaptionColor,
        ThemeParameter::CaptionBg,
        ThemeParameter::CaptionBgOpacity,
        ThemeParameter::ArticleBg,
        ThemeParameter::ArticleBgDark,
        ThemeParameter::ArticleText,
        ThemeParameter::ArticleTextDark,
        ThemeParameter::TitleColor,
        ThemeParameter::TitleColorDark,
        ThemeParameter::SubtitleColor,
        ThemeParameter::SubtitleColorDark,
        ThemeParameter::SubtitleCentered,
        ThemeParameter::MarkBg,
        ThemeParameter::MarkBgDark,
        ThemeParameter::MarkText,
        ThemeParameter::MarkTextDark,
        ThemeParameter::AttributionTitleColor,
        ThemeParameter::AttributionTitleColorDark,
        ThemeParameter::RemoveAttributionBg,
    ];

    /// Stable key used by the external control surface
    pub fn key(&self) -> &'static str {
        match self {
            ThemeParameter::BorderRadius => "borderRadius",
            ThemeParameter::BoldCaption => "boldCaption",
            ThemeParameter::PaddingYDelta => "paddingYDelta",
            ThemeParameter::PaddingXDelta => "paddingXDelta",
            ThemeParameter::CaptionColor => "captionColor",
            ThemeParameter::CaptionBg => "captionBg",
            ThemeParameter::CaptionBgOpacity => "captionBgOpacity",
            ThemeParameter::ArticleBg => "articleBg",
            ThemeParameter::ArticleBgDark => "articleBgDark",
            ThemeParameter::ArticleText => "articleText",
            ThemeParameter::ArticleTextDark => "articleTextDark",
            ThemeParameter::TitleColor => "titleColor",
            ThemeParameter::TitleColorDark => "titleColorDark",
            ThemeParameter::SubtitleColor => "subtitleColor",
            ThemeParameter::SubtitleColorDark => "subtitleColorDark",
            ThemeParameter::SubtitleCentered => "subtitleCentered",
            ThemeParameter::MarkBg => "markBg",
            ThemeParameter::MarkBgDark => "markBgDark",
            ThemeParameter::MarkText => "markText",
            ThemeParameter::MarkTextDark => "markTextDark",
            ThemeParameter::AttributionTitleColor => "attributionTitleColor",
            ThemeParameter::AttributionTitleColorDark => "attributionTitleColorDark",
            ThemeParameter::RemoveAttributionBg => "removeAttributionBg",
        }
    }

    /// Look up a parameter by its stable key
    ///
    /// Unknown keys yield `None`; callers treat them as a no-op.
    pub fn from_key(key: &str) -> Option<ThemeParameter> {
        Self::ALL.iter().find(|param| param.key() == key).copied()
    }

    /// Semantic kind of this parameter's value
    pub fn kind(&self) -> ParamKind {
        match self {
            ThemeParameter::BorderRadius
            | ThemeParameter::PaddingYDelta
            | ThemeParameter::PaddingXDelta
            | ThemeParameter::CaptionBgOpacity => ParamKind::Integer,
            ThemeParameter::BoldCaption
            | ThemeParameter::SubtitleCentered
            | ThemeParameter::RemoveAttributionBg => ParamKind::Boolean,
            _ => ParamKind::Color,
        }
    }
}

/// A value carried by one theme parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ParamValue {
    /// Hex color; `None` is the unset state
    Color(Option<Color>),
    /// Integer value
    Integer(i64),
    /// Boolean flag
    Boolean(bool),
}

impl ParamValue {
    /// Kind of the carried value
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Color(_) => ParamKind::Color,
            ParamValue::Integer(_) => ParamKind::Integer,
            ParamValue::Boolean(_) => ParamKind::Boolean,
        }
    }
}
