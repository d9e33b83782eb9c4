//! Clock times without a date, and bedtimes relative to a wake-up day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::error::InputError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Hour convention for displaying times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ClockStyle {
    /// `23:30`
    #[default]
    TwentyFourHour,
    /// `11:30 PM`
    TwelveHour,
}

/// A time of day.
///
/// Built from whole hours and minutes. A [`Bedtime`] may carry seconds left
/// over from subtracting a fractional prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub const DEFAULT_HOUR: u32 = 7;

    /// # Errors
    ///
    /// `InputError::WakeTime` when `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, InputError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| InputError::WakeTime {
                value: format!("{hour}:{minute:02}"),
                reason: "hour must be 0-23 and minute 0-59".to_string(),
            })
    }

    /// Midnight.
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    pub const fn from_naive(time: NaiveTime) -> Self {
        Self(time)
    }

    pub const fn naive(self) -> NaiveTime {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// `hour * 3600 + minute * 60 + second`.
    pub fn seconds_since_midnight(self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Shift by `minutes`, wrapping around midnight in either direction.
    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        let minutes = minutes.rem_euclid(SECONDS_PER_DAY / 60);
        let (time, _) = self.0.overflowing_add_signed(TimeDelta::minutes(minutes));
        Self(time)
    }

    /// Shift by `hours`, keeping the minute and wrapping around midnight.
    #[must_use]
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_minutes(hours.rem_euclid(24) * 60)
    }

    /// `23:30` or `11:30 PM`.
    pub fn format(self, style: ClockStyle) -> String {
        match style {
            ClockStyle::TwentyFourHour => self.0.format("%H:%M").to_string(),
            ClockStyle::TwelveHour => self.0.format("%-I:%M %p").to_string(),
        }
    }

    /// Hour text, minute text, and AM/PM marker for a segmented picker.
    pub fn segments(self, style: ClockStyle) -> (String, String, Option<&'static str>) {
        let minute = format!("{:02}", self.minute());
        match style {
            ClockStyle::TwentyFourHour => (format!("{:02}", self.hour()), minute, None),
            ClockStyle::TwelveHour => {
                let (pm, hour12) = self.0.hour12();
                let marker = if pm { "PM" } else { "AM" };
                (format!("{hour12:>2}"), minute, Some(marker))
            }
        }
    }
}

impl Default for TimeOfDay {
    /// 07:00.
    fn default() -> Self {
        Self(NaiveTime::MIN).add_hours(i64::from(Self::DEFAULT_HOUR))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ClockStyle::TwentyFourHour))
    }
}

impl FromStr for TimeOfDay {
    type Err = InputError;

    /// Accepts `HH:MM`, `H:MM`, and 12-hour forms like `6:30 AM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ["%H:%M", "%I:%M %p", "%I:%M%p"]
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
            .map(Self)
            .ok_or_else(|| InputError::WakeTime {
                value: s.to_string(),
                reason: "expected HH:MM (24-hour) or H:MM AM/PM".to_string(),
            })
    }
}

/// A bedtime and the day it falls on relative to the wake-up day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bedtime {
    pub time: TimeOfDay,
    /// `-1` for the previous day, `0` for the same day.
    pub day_offset: i8,
}

impl Bedtime {
    /// `wake_up - sleep`, wrapping across midnight like date subtraction.
    pub fn before(wake_up: TimeOfDay, sleep: TimeDelta) -> Self {
        let (time, overflow) = wake_up.0.overflowing_sub_signed(sleep);
        let days = overflow / SECONDS_PER_DAY;
        Self {
            time: TimeOfDay(time),
            day_offset: i8::try_from(-days).unwrap_or(i8::MIN),
        }
    }

    pub fn is_previous_day(&self) -> bool {
        self.day_offset < 0
    }

    pub fn format(&self, style: ClockStyle) -> String {
        self.time.format(style)
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        if self.day_offset != 0 {
            write!(f, " ({:+} day)", self.day_offset)?;
        }
        Ok(())
    }
}
