#![forbid(unsafe_code)]

//! BetterRest: a terminal bedtime estimator.
//!
//! The binary is a thin wrapper over [`run_from_env`]. Everything it does is
//! reachable from here so integration tests can drive the app model through
//! [`rest_runtime::ProgramSimulator`] and check `--once` output without a
//! terminal.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod theme;

use std::io::Write;

use clap::Parser;
use rest_estimator::{BedtimeEstimator, ResultState};
use rest_runtime::{App, ProgramConfig};

use crate::app::BetterRest;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Parse the command line and run. Returns the process exit code.
pub fn run_from_env() -> Result<i32> {
    let config = AppConfig::from_cli(Cli::parse())?;
    run(&config)
}

pub fn run(config: &AppConfig) -> Result<i32> {
    init_logging(config)?;
    tracing::info!(
        variant = ?config.variant,
        clock = ?config.clock,
        model = ?config.model.source,
        cache = config.model.cache,
        "betterrest starting"
    );

    if config.once {
        let stdout = std::io::stdout();
        return run_once(config, &mut stdout.lock());
    }

    let model = App::fullscreen(BetterRest::from_config(config))
        .config(ProgramConfig::fullscreen())
        .run()?;
    tracing::info!(result = ?model.result(), "betterrest finished");
    Ok(0)
}

/// Compute once with the configured inputs and print the alert text.
///
/// Exits `0` when a bedtime was computed and `1` otherwise.
pub fn run_once(config: &AppConfig, out: &mut impl Write) -> Result<i32> {
    let estimator = BedtimeEstimator::from_config(config.model.clone());
    let state = estimator.estimate(&config.inputs);
    writeln!(out, "{}", state.title())?;
    writeln!(out, "{}", state.message(config.clock))?;
    out.flush()?;
    Ok(match state {
        ResultState::Computed(_) => 0,
        _ => 1,
    })
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(log) = config.log.as_ref() else {
        return Ok(());
    };
    rest_core::logging::init_file_logging(log).map_err(|source| AppError::Logging {
        path: log.path.clone(),
        source,
    })
}
