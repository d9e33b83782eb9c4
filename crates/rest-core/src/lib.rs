#![forbid(unsafe_code)]

//! Core: terminal lifecycle, canonical events, geometry, and logging setup.
//!
//! # Role in BetterRest
//! `rest-core` is the input layer. It owns terminal session setup/teardown
//! and the normalized event types that the runtime feeds to the application
//! model.
//!
//! # Primary responsibilities
//! - **TerminalSession**: RAII lifecycle for raw mode, alt-screen, and cleanup.
//! - **Event**: canonical input events (keys, resize, focus).
//! - **Rect**: terminal-cell geometry shared by layout, render, and widgets.
//! - **logging**: file-backed `tracing` subscriber for the full-screen app,
//!   which cannot log to stdout while it owns the terminal.

pub mod event;
pub mod geometry;
pub mod logging;

#[cfg(feature = "crossterm")]
pub mod terminal_session;
