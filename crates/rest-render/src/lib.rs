#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, diffs, and ANSI presentation.
//!
//! # Role in BetterRest
//! The runtime calls the app's `view()` to fill a [`frame::Frame`]. The
//! frame's [`buffer::Buffer`] is diffed against the previous one and only the
//! changed cells are sent to the terminal by the [`presenter::Presenter`].

pub mod buffer;
pub mod cell;
pub mod diff;
pub mod drawing;
pub mod frame;
pub mod presenter;
