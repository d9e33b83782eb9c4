#![forbid(unsafe_code)]

//! Runtime for BetterRest.
//!
//! # Role in BetterRest
//! `rest-runtime` drives the application: it owns the update/view loop,
//! turns terminal input into model messages, and presents frames through the
//! render kernel. [`simulator::ProgramSimulator`] runs the same model logic
//! headless for tests.
//!
//! # Primary responsibilities
//! - **Model / Cmd**: the Elm-style contract every screen implements.
//! - **Program**: event polling, dirty tracking, diffed presentation.
//! - **ProgramSimulator**: deterministic event injection and frame capture.
//! - **locale**: 12-hour vs 24-hour clock detection from the environment.

pub mod locale;
pub mod program;
pub mod simulator;

pub use locale::HourCycle;
#[cfg(feature = "crossterm")]
pub use program::{App, AppBuilder, Program};
pub use program::{Cmd, Model, ProgramConfig};
pub use simulator::{CmdRecord, ProgramSimulator};
