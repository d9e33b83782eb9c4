//! The regression model seam and the bundled linear model.
//!
//! A model asset is a small JSON document:
//!
//! ```json
//! {
//!   "name": "SleepCalculator",
//!   "version": 1,
//!   "output": { "name": "actualSleep", "units": "seconds" },
//!   "intercept": 1332.0,
//!   "coefficients": { "wake": 0.0043, "estimated_sleep": 3456.0, "coffee": 198.0 }
//! }
//! ```
//!
//! The prediction is `intercept + Σ coefficient × feature`, converted to hours
//! when the asset declares `seconds`.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelError, Result};
use crate::inputs::SleepFeatures;

/// The asset compiled into the binary.
pub const BUNDLED_ASSET: &str = include_str!("../assets/SleepCalculator.json");

/// Only schema version understood by [`LinearSleepModel`].
pub const SUPPORTED_VERSION: u32 = 1;

/// Feature names, in the order the coefficients are applied.
pub const FEATURES: [&str; 3] = ["wake", "estimated_sleep", "coffee"];

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Predicts actual sleep, in hours, from the three input features.
pub trait SleepRegressor: Send + Sync + Debug {
    /// # Errors
    ///
    /// `ModelError::Prediction` when no usable number can be produced.
    fn predict(&self, features: &SleepFeatures) -> Result<f64>;
}

/// Unit of the raw model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnits {
    Hours,
    Seconds,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputBlock {
    #[serde(default)]
    name: Option<String>,
    units: OutputUnits,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelAsset {
    name: String,
    version: u32,
    output: OutputBlock,
    intercept: f64,
    coefficients: BTreeMap<String, f64>,
}

/// Reject a prediction that cannot be subtracted from a wake-up time.
pub(crate) fn check_prediction(hours: f64) -> Result<f64> {
    if !hours.is_finite() {
        return Err(ModelError::prediction(format!("non-finite output {hours}")));
    }
    if hours < 0.0 {
        return Err(ModelError::prediction(format!("negative sleep {hours} h")));
    }
    if hours >= 24.0 {
        return Err(ModelError::prediction(format!("sleep of {hours} h exceeds a day")));
    }
    Ok(hours)
}

/// Linear regressor loaded from a coefficient asset.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSleepModel {
    name: String,
    output_name: Option<String>,
    units: OutputUnits,
    intercept: f64,
    /// Indexed like [`FEATURES`].
    weights: [f64; 3],
}

impl LinearSleepModel {
    /// Parse and validate an asset document.
    ///
    /// # Errors
    ///
    /// `ModelError::Parse` for malformed JSON or unknown units, and
    /// `ModelError::InvalidModel` for an unsupported version, non-finite
    /// numbers, or a coefficient set that is not exactly [`FEATURES`].
    pub fn from_json(text: &str) -> Result<Self> {
        let asset: ModelAsset = serde_json::from_str(text)?;
        Self::from_asset(asset)
    }

    /// # Errors
    ///
    /// `ModelError::Asset` when the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ModelError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), name = %model.name, "model asset loaded");
        Ok(model)
    }

    /// The compiled-in `SleepCalculator` model.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_ASSET)
    }

    fn from_asset(asset: ModelAsset) -> Result<Self> {
        if asset.version != SUPPORTED_VERSION {
            return Err(ModelError::invalid(format!(
                "version {} is not supported (expected {SUPPORTED_VERSION})",
                asset.version
            )));
        }
        if asset.name.trim().is_empty() {
            return Err(ModelError::invalid("model name is empty"));
        }
        if !asset.intercept.is_finite() {
            return Err(ModelError::invalid("intercept is not finite"));
        }
        if let Some(unknown) = asset
            .coefficients
            .keys()
            .find(|key| !FEATURES.contains(&key.as_str()))
        {
            return Err(ModelError::invalid(format!("unknown feature `{unknown}`")));
        }

        let mut weights = [0.0; 3];
        for (slot, feature) in weights.iter_mut().zip(FEATURES) {
            let value = asset
                .coefficients
                .get(feature)
                .copied()
                .ok_or_else(|| ModelError::invalid(format!("missing feature `{feature}`")))?;
            if !value.is_finite() {
                return Err(ModelError::invalid(format!(
                    "coefficient for `{feature}` is not finite"
                )));
            }
            *slot = value;
        }

        Ok(Self {
            name: asset.name,
            output_name: asset.output.name,
            units: asset.output.units,
            intercept: asset.intercept,
            weights,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    pub fn units(&self) -> OutputUnits {
        self.units
    }
}

impl SleepRegressor for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<f64> {
        let inputs = [features.wake, features.estimated_sleep, features.coffee];
        let raw = self.intercept
            + self
                .weights
                .iter()
                .zip(inputs)
                .map(|(weight, x)| weight * x)
                .sum::<f64>();
        let hours = match self.units {
            OutputUnits::Hours => raw,
            OutputUnits::Seconds => raw / SECONDS_PER_HOUR,
        };
        check_prediction(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(units: &str, coefficients: &str) -> String {
        format!(
            r#"{{"name":"Test","version":1,"output":{{"units":"{units}"}},"intercept":1.0,"coefficients":{coefficients}}}"#
        )
    }

    fn features(wake: f64, sleep: f64, coffee: f64) -> SleepFeatures {
        SleepFeatures {
            wake,
            estimated_sleep: sleep,
            coffee,
        }
    }

    #[test]
    fn bundled_model_loads() {
        let model = LinearSleepModel::bundled().expect("bundled asset is valid");
        assert_eq!(model.name(), "SleepCalculator");
        assert_eq!(model.output_name(), Some("actualSleep"));
        assert_eq!(model.units(), OutputUnits::Seconds);
    }

    #[test]
    fn bundled_prediction_is_plausible() {
        let model = LinearSleepModel::bundled().expect("bundled");
        let hours = model.predict(&features(25_200.0, 8.0, 1.0)).expect("predicts");
        assert!((hours - 29_286.36 / 3600.0).abs() < 1e-9, "{hours}");
    }

    #[test]
    fn hours_units_are_not_converted() {
        let text = asset("hours", r#"{"wake":0.0,"estimated_sleep":1.0,"coffee":-0.5}"#);
        let model = LinearSleepModel::from_json(&text).expect("valid");
        let hours = model.predict(&features(25_200.0, 8.0, 2.0)).expect("predicts");
        assert_eq!(hours, 8.0);
    }

    #[test]
    fn rejects_unknown_units() {
        let text = asset("minutes", r#"{"wake":0.0,"estimated_sleep":1.0,"coffee":0.0}"#);
        assert!(matches!(LinearSleepModel::from_json(&text), Err(ModelError::Parse(_))));
    }

    #[test]
    fn rejects_missing_and_unknown_features() {
        let missing = asset("hours", r#"{"wake":0.0,"estimated_sleep":1.0}"#);
        let err = LinearSleepModel::from_json(&missing).expect_err("missing coffee");
        assert!(err.to_string().contains("missing feature `coffee`"), "{err}");

        let extra = asset("hours", r#"{"wake":0.0,"estimated_sleep":1.0,"coffee":0.0,"tea":1.0}"#);
        let err = LinearSleepModel::from_json(&extra).expect_err("unknown tea");
        assert!(err.to_string().contains("unknown feature `tea`"), "{err}");
    }

    #[test]
    fn rejects_other_versions() {
        let text = asset("hours", r#"{"wake":0.0,"estimated_sleep":1.0,"coffee":0.0}"#)
            .replace(r#""version":1"#, r#""version":2"#);
        assert!(matches!(
            LinearSleepModel::from_json(&text),
            Err(ModelError::InvalidModel { .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(LinearSleepModel::from_json("not json"), Err(ModelError::Parse(_))));
        assert!(matches!(LinearSleepModel::from_json("{}"), Err(ModelError::Parse(_))));
    }

    #[test]
    fn missing_file_is_asset_error() {
        let err = LinearSleepModel::from_path("/nonexistent/betterrest/model.json")
            .expect_err("missing file");
        assert!(matches!(err, ModelError::Asset { .. }));
    }

    #[test]
    fn unusable_predictions_fail() {
        let text = asset("hours", r#"{"wake":0.0,"estimated_sleep":10.0,"coffee":0.0}"#);
        let model = LinearSleepModel::from_json(&text).expect("valid");
        assert!(matches!(
            model.predict(&features(0.0, 12.0, 1.0)),
            Err(ModelError::Prediction { .. })
        ));

        let negative = asset("hours", r#"{"wake":0.0,"estimated_sleep":-1.0,"coffee":0.0}"#);
        let model = LinearSleepModel::from_json(&negative).expect("valid");
        assert!(model.predict(&features(0.0, 8.0, 1.0)).is_err());
    }

    #[test]
    fn check_prediction_bounds() {
        assert_eq!(check_prediction(0.0).ok(), Some(0.0));
        assert!(check_prediction(23.99).is_ok());
        assert!(check_prediction(24.0).is_err());
        assert!(check_prediction(-0.1).is_err());
        assert!(check_prediction(f64::NAN).is_err());
        assert!(check_prediction(f64::INFINITY).is_err());
    }
}
