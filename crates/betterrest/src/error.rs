use std::path::PathBuf;

use rest_estimator::InputError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid value `{value}` for {name}: expected {expected}")]
    Config {
        name: String,
        value: String,
        expected: String,
    },

    #[error("failed to set up logging to {}: {source}", path.display())]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Usage errors exit with 2, everything else with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::Config { .. } => 2,
            Self::Io(_) | Self::Logging { .. } => 1,
        }
    }

    #[must_use]
    pub fn config(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::Config {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        let error = AppError::config("BETTERREST_VARIANT", "grid", "toolbar, sections, or live");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "invalid value `grid` for BETTERREST_VARIANT: expected toolbar, sections, or live"
        );

        let input = AppError::from(InputError::Coffee {
            value: "0".into(),
            reason: "must be between 1 and 20".into(),
        });
        assert_eq!(input.exit_code(), 2);
        assert_eq!(input.to_string(), "invalid coffee amount `0`: must be between 1 and 20");
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        let io = AppError::from(std::io::Error::other("tty gone"));
        assert_eq!(io.exit_code(), 1);
        assert_eq!(io.to_string(), "I/O error: tty gone");

        let logging = AppError::Logging {
            path: PathBuf::from("/var/log/betterrest.log"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(logging.exit_code(), 1);
        assert!(logging.to_string().contains("/var/log/betterrest.log"));
    }
}
