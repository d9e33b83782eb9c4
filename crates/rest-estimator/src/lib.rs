#![forbid(unsafe_code)]

//! Bedtime estimation.
//!
//! Three inputs (wake-up time, desired sleep, daily coffee) feed a regression
//! model that predicts actual sleep; the bedtime is the wake-up time minus
//! that prediction. Nothing here touches the terminal.
//!
//! ```
//! use rest_estimator::{BedtimeEstimator, EstimateInputs, ClockStyle};
//!
//! let state = BedtimeEstimator::default().estimate(&EstimateInputs::default());
//! println!("{}: {}", state.title(), state.message(ClockStyle::TwentyFourHour));
//! ```

pub mod error;
pub mod estimator;
pub mod inputs;
pub mod model;
pub mod provider;
pub mod result;
pub mod time;

pub use error::{InputError, ModelError, Result};
pub use estimator::{BedtimeEstimator, estimate_bedtime};
pub use inputs::{CoffeeAmount, EstimateInputs, SleepAmount, SleepFeatures};
pub use model::{LinearSleepModel, OutputUnits, SleepRegressor};
pub use provider::{AssetProvider, CachedProvider, ModelConfiguration, ModelProvider, ModelSource};
pub use result::{ERROR_MESSAGE, ERROR_TITLE, ResultState, SUCCESS_TITLE};
pub use time::{Bedtime, ClockStyle, TimeOfDay};
