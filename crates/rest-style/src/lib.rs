#![forbid(unsafe_code)]

//! Style types for BetterRest widgets.
//!
//! # Role in BetterRest
//! Widgets describe how text should look with a [`Style`]; the render layer
//! stores the resolved colors and attributes per cell. Focus-dependent looks
//! go through [`InteractiveStyle`].

pub mod interactive;
pub mod style;

pub use interactive::{InteractionState, InteractiveStyle};
pub use rest_render::cell::{PackedRgba, StyleFlags};
pub use style::Style;
