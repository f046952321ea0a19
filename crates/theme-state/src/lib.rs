//! Theme parameter state for Theme Studio
//!
//! This crate holds the tunable theme parameters, their documented
//! defaults, and the binding surface external form controls attach to.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controls;
pub mod params;
pub mod state;

pub use controls::{standard_bindings, sync_values, ControlBinding, ControlKind};
pub use params::{Color, ParamKind, ParamValue, ThemeParameter};
pub use state::{Result, ThemeState, ThemeStateError};
