//! Theme-to-stylesheet compiler for Theme Studio
//!
//! Maps a theme parameter set to a minimal, selector-scoped CSS text
//! overriding a fixed set of selectors in the third-party fade-gallery
//! article template. Only values differing from the documented defaults
//! are emitted; an all-default theme compiles to the empty string.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod compiler;
pub mod selectors;

pub use color::{clamp_fraction, hex_to_rgba};
pub use compiler::{compile, wrap_style_tag, CssText};
