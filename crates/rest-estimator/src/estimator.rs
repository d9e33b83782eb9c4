//! The bedtime computation and its invocation point.

use chrono::TimeDelta;

use crate::error::Result;
use crate::inputs::{CoffeeAmount, EstimateInputs, SleepAmount, SleepFeatures};
use crate::model::{SleepRegressor, check_prediction};
use crate::provider::{ModelConfiguration, ModelProvider};
use crate::result::ResultState;
use crate::time::{Bedtime, TimeOfDay};

/// `wake_up` minus the sleep the model predicts for these inputs.
///
/// The prediction is rounded to whole seconds before subtracting.
///
/// # Errors
///
/// Whatever the regressor returns, or `ModelError::Prediction` when its
/// output is not a usable duration.
pub fn estimate_bedtime(
    wake_up: TimeOfDay,
    sleep: SleepAmount,
    coffee: CoffeeAmount,
    model: &dyn SleepRegressor,
) -> Result<Bedtime> {
    let features = SleepFeatures::from_inputs(wake_up, sleep, coffee);
    let hours = check_prediction(model.predict(&features)?)?;
    let seconds = (hours * 3600.0).round() as i64;
    Ok(Bedtime::before(wake_up, TimeDelta::seconds(seconds)))
}

/// Loads a model per computation and folds every failure into
/// [`ResultState::Failed`].
#[derive(Debug)]
pub struct BedtimeEstimator {
    provider: Box<dyn ModelProvider>,
}

impl BedtimeEstimator {
    pub fn new(provider: impl ModelProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    pub fn from_config(config: ModelConfiguration) -> Self {
        Self {
            provider: config.into_provider(),
        }
    }

    pub fn estimate(&self, inputs: &EstimateInputs) -> ResultState {
        let _span = tracing::info_span!(
            "estimate",
            wake = %inputs.wake_up,
            sleep = inputs.sleep.hours(),
            coffee = inputs.coffee.count()
        )
        .entered();

        let outcome = self.provider.load().and_then(|model| {
            estimate_bedtime(inputs.wake_up, inputs.sleep, inputs.coffee, model.as_ref())
        });
        match outcome {
            Ok(bedtime) => {
                tracing::info!(%bedtime, "bedtime computed");
                ResultState::Computed(bedtime)
            }
            Err(error) => {
                tracing::warn!(%error, "bedtime computation failed");
                ResultState::failed()
            }
        }
    }
}

impl Default for BedtimeEstimator {
    fn default() -> Self {
        Self::from_config(ModelConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::result::ERROR_MESSAGE;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Fixed(f64);

    impl SleepRegressor for Fixed {
        fn predict(&self, _: &SleepFeatures) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl SleepRegressor for Broken {
        fn predict(&self, _: &SleepFeatures) -> Result<f64> {
            Err(ModelError::prediction("broken"))
        }
    }

    #[derive(Debug)]
    struct Serve(f64);

    impl ModelProvider for Serve {
        fn load(&self) -> Result<Arc<dyn SleepRegressor>> {
            Ok(Arc::new(Fixed(self.0)))
        }
    }

    #[derive(Debug)]
    struct Unloadable;

    impl ModelProvider for Unloadable {
        fn load(&self) -> Result<Arc<dyn SleepRegressor>> {
            Err(ModelError::invalid("corrupt"))
        }
    }

    fn t(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute).expect("valid")
    }

    #[test]
    fn seven_thirty_prediction_gives_half_past_eleven() {
        let bedtime = estimate_bedtime(
            t(7, 0),
            SleepAmount::new(8.0),
            CoffeeAmount::new(1),
            &Fixed(7.5),
        )
        .expect("computes");
        assert_eq!(bedtime.time, t(23, 30));
        assert_eq!(bedtime.day_offset, -1);
    }

    #[test]
    fn fractional_prediction_rounds_to_seconds() {
        let bedtime = estimate_bedtime(
            t(7, 0),
            SleepAmount::default(),
            CoffeeAmount::default(),
            &Fixed(1.0 / 3600.0 * 90.4),
        )
        .expect("computes");
        assert_eq!(bedtime.time.seconds_since_midnight(), 7 * 3600 - 90);
    }

    #[test]
    fn regressor_errors_propagate() {
        let err = estimate_bedtime(t(7, 0), SleepAmount::default(), CoffeeAmount::default(), &Broken)
            .expect_err("fails");
        assert!(matches!(err, ModelError::Prediction { .. }));

        let err = estimate_bedtime(t(7, 0), SleepAmount::default(), CoffeeAmount::default(), &Fixed(f64::NAN))
            .expect_err("rejects NaN");
        assert!(matches!(err, ModelError::Prediction { .. }));
    }

    #[test]
    fn estimator_maps_success_and_failure() {
        let ok = BedtimeEstimator::new(Serve(7.5)).estimate(&EstimateInputs::default());
        assert_eq!(ok.bedtime().map(|b| b.time), Some(t(23, 30)));

        let failed = BedtimeEstimator::new(Unloadable).estimate(&EstimateInputs::default());
        assert_eq!(failed, ResultState::Failed(ERROR_MESSAGE.to_string()));
        assert_eq!(failed.title(), "Error");
    }

    #[test]
    fn default_estimator_uses_bundled_model() {
        let state = BedtimeEstimator::default().estimate(&EstimateInputs::default());
        assert!(state.bedtime().is_some(), "{state:?}");
    }
}
