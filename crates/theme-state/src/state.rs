//! The mutable theme record and its immutable default counterpart
//!
//! `ThemeState` keeps one typed field per parameter, so the "no partial
//! state" invariant holds by construction. The orchestrator is the only
//! writer; the compiler and the control-sync routine read it by shared
//! reference.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::{Color, ParamKind, ParamValue, ThemeParameter};

/// Errors that can occur when mutating theme state
#[derive(Debug, Error)]
pub enum ThemeStateError {
    /// A value of the wrong kind was supplied for a parameter
    #[error("Value kind {got:?} does not match parameter {param:?} (expected {expected:?})")]
    KindMismatch {
        /// Target parameter
        param: ThemeParameter,
        /// Kind the parameter requires
        expected: ParamKind,
        /// Kind that was supplied
        got: ParamKind,
    },
}

/// Result type for theme state operations
pub type Result<T> = std::result::Result<T, ThemeStateError>;

/// Current values for every theme parameter
///
/// `ThemeState::default()` is the documented default record used for
/// diff-against-default suppression and reset. Extended colors default
/// to the unset state (`None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    /// Caption pill corner radius in pixels
    pub border_radius: i64,
    /// Bold caption text
    pub bold_caption: bool,
    /// Vertical caption padding delta
    pub padding_y_delta: i64,
    /// Horizontal caption padding delta
    pub padding_x_delta: i64,
    /// Caption text color
    pub caption_color: Option<Color>,
    /// Caption background color
    pub caption_bg: Option<Color>,
    /// Caption background opacity, percent
    pub caption_bg_opacity: i64,
    /// Article background, light
    pub article_bg: Option<Color>,
    /// Article background, dark
    pub article_bg_dark: Option<Color>,
    /// Article text, light
    pub article_text: Option<Color>,
    /// Article text, dark
    pub article_text_dark: Option<Color>,
    /// Title color, light
    pub title_color: Option<Color>,
    /// Title color, dark
    pub title_color_dark: Option<Color>,
    /// Subtitle color, light
    pub subtitle_color: Option<Color>,
    /// Subtitle color, dark
    pub subtitle_color_dark: Option<Color>,
    /// Center the subtitle
    pub subtitle_centered: bool,
    /// Highlight mark background, light
    pub mark_bg: Option<Color>,
    /// Highlight mark background, dark
    pub mark_bg_dark: Option<Color>,
    /// Highlight mark text, light
    pub mark_text: Option<Color>,
    /// Highlight mark text, dark
    pub mark_text_dark: Option<Color>,
    /// Attribution title color, light
    pub attribution_title_color: Option<Color>,
    /// Attribution title color, dark
    pub attribution_title_color_dark: Option<Color>,
    /// Strip the attribution block background
    pub remove_attribution_bg: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            border_radius: 5,
            bold_caption: false,
            padding_y_delta: 0,
            padding_x_delta: 0,
            caption_color: Some("#ffffff".to_string()),
            caption_bg: Some("#e9e9e9".to_string()),
            caption_bg_opacity: 80,
            article_bg: None,
            article_bg_dark: None,
            article_text: None,
            article_text_dark: None,
            title_color: None,
            title_color_dark: None,
            subtitle_color: None,
            subtitle_color_dark: None,
            subtitle_centered: false,
            mark_bg: None,
            mark_bg_dark: None,
            mark_text: None,
            mark_text_dark: None,
            attribution_title_color: None,
            attribution_title_color_dark: None,
            remove_attribution_bg: false,
        }
    }
}

impl ThemeState {
    /// Read the current value of one parameter
    pub fn get(&self, param: ThemeParameter) -> ParamValue {
        match param {
            ThemeParameter::BorderRadius => ParamValue::Integer(self.border_radius),
            ThemeParameter::BoldCaption => ParamValue::Boolean(self.bold_caption),
            ThemeParameter::PaddingYDelta => ParamValue::Integer(self.padding_y_delta),
            ThemeParameter::PaddingXDelta => ParamValue::Integer(self.padding_x_delta),
            ThemeParameter::CaptionColor => ParamValue::Color(self.caption_color.clone()),
            ThemeParameter::CaptionBg => ParamValue::Color(self.caption_bg.clone()),
            ThemeParameter::CaptionBgOpacity => ParamValue::Integer(self.caption_bg_opacity),
            ThemeParameter::ArticleBg => ParamValue::Color(self.article_bg.clone()),
            ThemeParameter::ArticleBgDark => ParamValue::Color(self.article_bg_dark.clone()),
            ThemeParameter::ArticleText => ParamValue::Color(self.article_text.clone()),
            ThemeParameter::ArticleTextDark => ParamValue::Color(self.article_text_dark.clone()),
            ThemeParameter::TitleColor => ParamValue::Color(self.title_color.clone()),
            ThemeParameter::TitleColorDark => ParamValue::Color(self.title_color_dark.clone()),
            ThemeParameter::SubtitleColor => ParamValue::Color(self.subtitle_color.clone()),
            ThemeParameter::SubtitleColorDark => {
                ParamValue::Color(self.subtitle_color_dark.clone())
            }
            ThemeParameter::SubtitleCentered => ParamValue::Boolean(self.subtitle_centered),
            ThemeParameter::MarkBg => ParamValue::Color(self.mark_bg.clone()),
            ThemeParameter::MarkBgDark => ParamValue::Color(self.mark_bg_dark.clone()),
            ThemeParameter::MarkText => ParamValue::Color(self.mark_text.clone()),
            ThemeParameter::MarkTextDark => ParamValue::Color(self.mark_text_dark.clone()),
            ThemeParameter::AttributionTitleColor => {
                ParamValue::Color(self.attribution_title_color.clone())
            }
            ThemeParameter::AttributionTitleColorDark => {
                ParamValue::Color(self.attribution_title_color_dark.clone())
            }
            ThemeParameter::RemoveAttributionBg => {
                ParamValue::Boolean(self.remove_attribution_bg)
            }
        }
    }

    /// Write one parameter
    ///
    /// A value whose kind does not match the parameter is rejected and
    /// leaves the state untouched.
    pub fn set(&mut self, param: ThemeParameter, value: ParamValue) -> Result<()> {
        match (param, value) {
            (ThemeParameter::BorderRadius, ParamValue::Integer(v)) => self.border_radius = v,
            (ThemeParameter::BoldCaption, ParamValue::Boolean(v)) => self.bold_caption = v,
            (ThemeParameter::PaddingYDelta, ParamValue::Integer(v)) => self.padding_y_delta = v,
            (ThemeParameter::PaddingXDelta, ParamValue::Integer(v)) => self.padding_x_delta = v,
            (ThemeParameter::CaptionColor, ParamValue::Color(v)) => self.caption_color = v,
            (ThemeParameter::CaptionBg, ParamValue::Color(v)) => self.caption_bg = v,
            (ThemeParameter::CaptionBgOpacity, ParamValue::Integer(v)) => {
                self.caption_bg_opacity = v
            }
            (ThemeParameter::ArticleBg, ParamValue::Color(v)) => self.article_bg = v,
            (ThemeParameter::ArticleBgDark, ParamValue::Color(v)) => self.article_bg_dark = v,
            (ThemeParameter::ArticleText, ParamValue::Color(v)) => self.article_text = v,
            (ThemeParameter::ArticleTextDark, ParamValue::Color(v)) => self.article_text_dark = v,
            (ThemeParameter::TitleColor, ParamValue::Color(v)) => self.title_color = v,
            (ThemeParameter::TitleColorDark, ParamValue::Color(v)) => self.title_color_dark = v,
            (ThemeParameter::SubtitleColor, ParamValue::Color(v)) => self.subtitle_color = v,
            (ThemeParameter::SubtitleColorDark, ParamValue::Color(v)) => {
                self.subtitle_color_dark = v
            }
            (ThemeParameter::SubtitleCentered, ParamValue::Boolean(v)) => {
                self.subtitle_centered = v
            }
            (ThemeParameter::MarkBg, ParamValue::Color(v)) => self.mark_bg = v,
            (ThemeParameter::MarkBgDark, ParamValue::Color(v)) => self.mark_bg_dark = v,
            (ThemeParameter::MarkText, ParamValue::Color(v)) => self.mark_text = v,
            (ThemeParameter::MarkTextDark, ParamValue::Color(v)) => self.mark_text_dark = v,
            (ThemeParameter::AttributionTitleColor, ParamValue::Color(v)) => {
                self.attribution_title_color = v
            }
            (ThemeParameter::AttributionTitleColorDark, ParamValue::Color(v)) => {
                self.attribution_title_color_dark = v
            }
            (ThemeParameter::RemoveAttributionBg, ParamValue::Boolean(v)) => {
                self.remove_attribution_bg = v
            }
            (param, value) => {
                return Err(ThemeStateError::KindMismatch {
                    param,
                    expected: param.kind(),
                    got: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Overwrite every parameter with a fresh copy of the defaults
    pub fn reset(&mut self) {
        *self = ThemeState::default();
    }
}
