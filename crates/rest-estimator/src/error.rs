use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Failures loading the regression model or using its prediction.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model asset {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model asset is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model: {reason}")]
    InvalidModel { reason: String },

    #[error("prediction failed: {reason}")]
    Prediction { reason: String },
}

impl ModelError {
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidModel {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn prediction(reason: impl Into<String>) -> Self {
        Self::Prediction {
            reason: reason.into(),
        }
    }
}

/// Rejected text input for one of the three estimator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid wake-up time `{value}`: {reason}")]
    WakeTime { value: String, reason: String },

    #[error("invalid sleep amount `{value}`: {reason}")]
    Sleep { value: String, reason: String },

    #[error("invalid coffee amount `{value}`: {reason}")]
    Coffee { value: String, reason: String },
}
