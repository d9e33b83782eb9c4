use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::Variant;

/// Clock convention requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClockChoice {
    /// Follow `LC_ALL`, `LC_TIME`, or `LANG`.
    #[default]
    Auto,
    #[value(name = "12h")]
    TwelveHour,
    #[value(name = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "betterrest",
    about = "Find the bedtime that gets you the sleep you actually need",
    version
)]
pub struct Cli {
    /// Screen layout and how the bedtime is shown [env: BETTERREST_VARIANT]
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// JSON model asset to use instead of the bundled one [env: BETTERREST_MODEL]
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Load the model once and reuse it for every calculation.
    #[arg(long)]
    pub cache_model: bool,

    /// Time format [env: BETTERREST_CLOCK]
    #[arg(long, value_enum)]
    pub clock: Option<ClockChoice>,

    /// Initial wake-up time, `HH:MM` or `H:MM AM`.
    #[arg(long, value_name = "HH:MM")]
    pub wake: Option<String>,

    /// Initial sleep goal in hours, 4 to 12 in steps of 0.25.
    #[arg(long, value_name = "HOURS")]
    pub sleep: Option<String>,

    /// Initial cups of coffee per day, 1 to 20.
    #[arg(long, value_name = "CUPS")]
    pub coffee: Option<String>,

    /// Write logs to this file; filter with BETTERREST_LOG.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write log lines as JSON.
    #[arg(long, requires = "log_file")]
    pub log_json: bool,

    /// Print the bedtime for the given inputs and exit without the TUI.
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "betterrest",
            "--variant",
            "live",
            "--model",
            "/tmp/model.json",
            "--cache-model",
            "--clock",
            "12h",
            "--wake",
            "06:30",
            "--sleep",
            "7.5",
            "--coffee",
            "3",
            "--log-file",
            "/tmp/betterrest.log",
            "--log-json",
            "--once",
        ])
        .expect("parses");
        assert_eq!(cli.variant, Some(Variant::Live));
        assert_eq!(cli.model, Some(PathBuf::from("/tmp/model.json")));
        assert!(cli.cache_model);
        assert_eq!(cli.clock, Some(ClockChoice::TwelveHour));
        assert_eq!(cli.wake.as_deref(), Some("06:30"));
        assert_eq!(cli.sleep.as_deref(), Some("7.5"));
        assert_eq!(cli.coffee.as_deref(), Some("3"));
        assert!(cli.log_json);
        assert!(cli.once);
    }

    #[test]
    fn defaults_are_unset() {
        let cli = Cli::try_parse_from(["betterrest"]).expect("parses");
        assert_eq!(cli.variant, None);
        assert_eq!(cli.clock, None);
        assert!(!cli.once);
    }

    #[test]
    fn rejects_unknown_variant_and_orphan_json_flag() {
        assert!(Cli::try_parse_from(["betterrest", "--variant", "grid"]).is_err());
        assert!(Cli::try_parse_from(["betterrest", "--log-json"]).is_err());
    }
}
