//! External control binding surface
//!
//! Form controls live outside the core. Each one declares the parameter
//! it edits and the kind of widget it is; the core consumes values on
//! edit events and produces the values controls must display after
//! init or reset. Display-only formatting (slider captions and the
//! like) is entirely the collaborator's business.

use serde::{Deserialize, Serialize};

use crate::params::{ParamValue, ThemeParameter};
use crate::state::ThemeState;

/// Kind of widget bound to a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ControlKind {
    /// On/off checkbox
    Toggle,
    /// Bounded integer slider
    Slider {
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },
    /// Free color picker with an optional per-key reset affordance
    ColorWell,
}

/// One external control bound to a theme parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlBinding {
    /// Parameter this control edits
    pub parameter: ThemeParameter,
    /// Widget kind
    pub control: ControlKind,
}

impl ControlBinding {
    /// Create a binding
    pub fn new(parameter: ThemeParameter, control: ControlKind) -> Self {
        Self { parameter, control }
    }
}

/// The fixed editor control set, in panel order
pub fn standard_bindings() -> Vec<ControlBinding> {
    use ControlKind::{ColorWell, Slider, Toggle};
    use ThemeParameter as P;

    vec![
        ControlBinding::new(P::BorderRadius, Slider { min: 0, max: 30 }),
        ControlBinding::new(P::BoldCaption, Toggle),
        ControlBinding::new(P::PaddingYDelta, Slider { min: -10, max: 20 }),
        ControlBinding::new(P::PaddingXDelta, Slider { min: -10, max: 20 }),
        ControlBinding::new(P::CaptionColor, ColorWell),
        ControlBinding::new(P::CaptionBg, ColorWell),
        ControlBinding::new(P::CaptionBgOpacity, Slider { min: 0, max: 100 }),
        ControlBinding::new(P::ArticleBg, ColorWell),
        ControlBinding::new(P::ArticleBgDark, ColorWell),
        ControlBinding::new(P::ArticleText, ColorWell),
        ControlBinding::new(P::ArticleTextDark, ColorWell),
        ControlBinding::new(P::TitleColor, ColorWell),
        ControlBinding::new(P::TitleColorDark, ColorWell),
        ControlBinding::new(P::SubtitleColor, ColorWell),
        ControlBinding::new(P::SubtitleColorDark, ColorWell),
        ControlBinding::new(P::SubtitleCentered, Toggle),
        ControlBinding::new(P::MarkBg, ColorWell),
        ControlBinding::new(P::MarkBgDark, ColorWell),
        ControlBinding::new(P::MarkText, ColorWell),
        ControlBinding::new(P::MarkTextDark, ColorWell),
        ControlBinding::new(P::AttributionTitleColor, ColorWell),
        ControlBinding::new(P::AttributionTitleColorDark, ColorWell),
        ControlBinding::new(P::RemoveAttributionBg, Toggle),
    ]
}

/// Values every bound control must display for the given state
///
/// Used on init and after reset to write current values back into the
/// external widgets.
pub fn sync_values(state: &ThemeState) -> Vec<(ControlBinding, ParamValue)> {
    standard_bindings()
        .into_iter()
        .map(|binding| (binding, state.get(binding.parameter)))
        .collect()
}
