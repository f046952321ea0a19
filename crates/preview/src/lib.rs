//! The isolated article preview for Theme Studio
//!
//! Owns the sandboxed rendering surface. Every document edit is a
//! by-value snapshot transform: pure `String -> String` functions in
//! [`transform`], applied through the surface's snapshot/apply access.
//! The surface adapter performs the one-way load; nothing here aliases
//! a live document tree.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod renderer;
pub mod surface;
pub mod transform;

pub use renderer::PreviewRenderer;
pub use surface::{EmbeddedSurface, RenderSurface};
pub use transform::{LEGACY_MODE_STYLE_ID, STYLE_ELEMENT_ID};
