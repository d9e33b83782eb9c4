#![forbid(unsafe_code)]

//! Logging setup.
//!
//! Every crate logs through `tracing` macros. Only the binary installs a
//! subscriber. A full-screen app owns stdout, so the subscriber writes to a
//! file, and nothing is installed when no file is given.

use std::path::PathBuf;

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "BETTERREST_LOG";

/// Filter used when [`LOG_FILTER_ENV`] is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Where and how to write log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file, opened in append mode.
    pub path: PathBuf,
    /// Emit one JSON object per line instead of human-readable text.
    pub json: bool,
    /// `EnvFilter` directive, e.g. `info` or `rest_estimator=debug`.
    pub filter: String,
}

impl LogConfig {
    /// Text logs to `path` with [`DEFAULT_FILTER`].
    ///
    /// The caller resolves [`LOG_FILTER_ENV`] and passes it to
    /// [`filter`](Self::filter).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            json: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }

    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// Install the global file-backed subscriber.
///
/// # Errors
///
/// Fails if the filter directive is invalid, the file cannot be opened, or a
/// global subscriber is already installed.
#[cfg(feature = "subscriber")]
pub fn init_file_logging(config: &LogConfig) -> std::io::Result<()> {
    use std::fs::OpenOptions;
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    #[cfg(feature = "subscriber-json")]
    if config.json {
        return builder.json().try_init().map_err(io::Error::other);
    }

    #[cfg(not(feature = "subscriber-json"))]
    if config.json {
        eprintln!("JSON logging not compiled in; writing text logs");
    }

    builder.try_init().map_err(io::Error::other)
}
