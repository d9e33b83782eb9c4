//! Range-constrained input domains and the feature vector built from them.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::time::TimeOfDay;

/// Desired sleep in hours, on a quarter-hour grid within `[4, 12]`.
///
/// Stored as a count of quarter hours so stepping never accumulates
/// floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SleepAmount {
    quarters: u8,
}

impl SleepAmount {
    pub const MIN_HOURS: f64 = 4.0;
    pub const MAX_HOURS: f64 = 12.0;
    pub const STEP_HOURS: f64 = 0.25;
    pub const DEFAULT_HOURS: f64 = 8.0;

    const MIN_QUARTERS: u8 = 16;
    const MAX_QUARTERS: u8 = 48;
    const DEFAULT_QUARTERS: u8 = 32;

    /// Clamp into range and snap to the nearest quarter hour. NaN yields the
    /// default.
    pub fn new(hours: f64) -> Self {
        if hours.is_nan() {
            return Self::default();
        }
        let clamped = hours.clamp(Self::MIN_HOURS, Self::MAX_HOURS);
        let quarters = (clamped / Self::STEP_HOURS).round() as u8;
        Self { quarters }
    }

    pub fn hours(self) -> f64 {
        f64::from(self.quarters) * Self::STEP_HOURS
    }

    #[must_use]
    pub fn step_up(self) -> Self {
        Self {
            quarters: (self.quarters + 1).min(Self::MAX_QUARTERS),
        }
    }

    #[must_use]
    pub fn step_down(self) -> Self {
        Self {
            quarters: self.quarters.saturating_sub(1).max(Self::MIN_QUARTERS),
        }
    }

    pub fn is_min(self) -> bool {
        self.quarters == Self::MIN_QUARTERS
    }

    pub fn is_max(self) -> bool {
        self.quarters == Self::MAX_QUARTERS
    }

    /// Shortest decimal form: `8`, `8.25`, `8.5`.
    pub fn label(self) -> String {
        format!("{}", self.hours())
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self {
            quarters: Self::DEFAULT_QUARTERS,
        }
    }
}

impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.label())
    }
}

impl FromStr for SleepAmount {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason: &str| InputError::Sleep {
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let hours: f64 = s.trim().parse().map_err(|_| reject("not a number"))?;
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(reject("must be between 4 and 12 hours"));
        }
        if (hours / Self::STEP_HOURS).fract() != 0.0 {
            return Err(reject("must be a multiple of 0.25 hours"));
        }
        Ok(Self::new(hours))
    }
}

/// Cups of coffee per day, within `[1, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoffeeAmount(u8);

impl CoffeeAmount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Clamp into range.
    pub fn new(cups: u32) -> Self {
        let clamped = cups.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    pub fn count(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn step_up(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    #[must_use]
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    pub fn is_min(self) -> bool {
        self.0 == Self::MIN
    }

    pub fn is_max(self) -> bool {
        self.0 == Self::MAX
    }

    /// `1 cup`, `2 cups`.
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

impl Default for CoffeeAmount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for CoffeeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for CoffeeAmount {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason: &str| InputError::Coffee {
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let cups: u32 = s.trim().parse().map_err(|_| reject("not a whole number"))?;
        if !(u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&cups) {
            return Err(reject("must be between 1 and 20"));
        }
        Ok(Self::new(cups))
    }
}

/// The three values a computation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EstimateInputs {
    pub wake_up: TimeOfDay,
    pub sleep: SleepAmount,
    pub coffee: CoffeeAmount,
}

impl EstimateInputs {
    pub fn new(wake_up: TimeOfDay, sleep: SleepAmount, coffee: CoffeeAmount) -> Self {
        Self {
            wake_up,
            sleep,
            coffee,
        }
    }
}

/// Numeric features handed to a regressor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepFeatures {
    /// Seconds since midnight.
    pub wake: f64,
    /// Hours.
    pub estimated_sleep: f64,
    /// Cups.
    pub coffee: f64,
}

impl SleepFeatures {
    pub fn from_inputs(wake_up: TimeOfDay, sleep: SleepAmount, coffee: CoffeeAmount) -> Self {
        Self {
            wake: f64::from(wake_up.hour() * 3600 + wake_up.minute() * 60),
            estimated_sleep: sleep.hours(),
            coffee: f64::from(coffee.count()),
        }
    }
}

impl From<&EstimateInputs> for SleepFeatures {
    fn from(inputs: &EstimateInputs) -> Self {
        Self::from_inputs(inputs.wake_up, inputs.sleep, inputs.coffee)
    }
}
