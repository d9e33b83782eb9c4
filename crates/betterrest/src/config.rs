//! Effective settings: command-line flags over environment over defaults.

use std::path::PathBuf;

use clap::ValueEnum;
use rest_core::logging::{DEFAULT_FILTER, LOG_FILTER_ENV, LogConfig};
use rest_estimator::{
    ClockStyle, CoffeeAmount, EstimateInputs, ModelConfiguration, ModelSource, SleepAmount,
    TimeOfDay,
};
use rest_runtime::HourCycle;
use rest_runtime::locale;

use crate::app::Variant;
use crate::cli::{ClockChoice, Cli};
use crate::error::{AppError, Result};

pub const VARIANT_ENV: &str = "BETTERREST_VARIANT";
pub const MODEL_ENV: &str = "BETTERREST_MODEL";
pub const CLOCK_ENV: &str = "BETTERREST_CLOCK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub variant: Variant,
    pub model: ModelConfiguration,
    pub clock: ClockStyle,
    pub inputs: EstimateInputs,
    pub log: Option<LogConfig>,
    pub once: bool,
}

impl AppConfig {
    /// Resolve against the process environment.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// `AppError::Config` for an unrecognized environment value and
    /// `AppError::Input` for out-of-range or unparseable inputs.
    pub fn resolve<F>(cli: Cli, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let variant = match cli.variant {
            Some(variant) => variant,
            None => env(VARIANT_ENV)
                .map(|raw| parse_enum(VARIANT_ENV, &raw))
                .transpose()?
                .unwrap_or_default(),
        };

        let source = cli
            .model
            .or_else(|| env(MODEL_ENV).map(PathBuf::from))
            .map_or(ModelSource::Bundled, ModelSource::File);
        let model = ModelConfiguration {
            source,
            cache: cli.cache_model,
        };

        let choice = match cli.clock {
            Some(choice) => choice,
            None => env(CLOCK_ENV)
                .map(|raw| parse_enum(CLOCK_ENV, &raw))
                .transpose()?
                .unwrap_or_default(),
        };
        let clock = match choice {
            ClockChoice::TwelveHour => ClockStyle::TwelveHour,
            ClockChoice::TwentyFourHour => ClockStyle::TwentyFourHour,
            ClockChoice::Auto => clock_for(locale::detect_with(&lookup)),
        };

        let mut inputs = EstimateInputs::default();
        if let Some(raw) = cli.wake.as_deref() {
            inputs.wake_up = raw.parse::<TimeOfDay>()?;
        }
        if let Some(raw) = cli.sleep.as_deref() {
            inputs.sleep = raw.parse::<SleepAmount>()?;
        }
        if let Some(raw) = cli.coffee.as_deref() {
            inputs.coffee = raw.parse::<CoffeeAmount>()?;
        }

        let log = cli.log_file.map(|path| {
            LogConfig::new(path)
                .json(cli.log_json)
                .filter(env(LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string()))
        });

        Ok(Self {
            variant,
            model,
            clock,
            inputs,
            log,
            once: cli.once,
        })
    }
}

pub fn clock_for(cycle: HourCycle) -> ClockStyle {
    match cycle {
        HourCycle::H12 => ClockStyle::TwelveHour,
        HourCycle::H23 => ClockStyle::TwentyFourHour,
    }
}

fn parse_enum<T: ValueEnum>(name: &str, raw: &str) -> Result<T> {
    T::from_str(raw.trim(), true).map_err(|_| {
        let expected = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        AppError::config(name, raw, format!("one of {expected}"))
    })
}
