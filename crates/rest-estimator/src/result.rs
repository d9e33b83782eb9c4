use crate::time::{Bedtime, ClockStyle};

/// Title shown above a computed bedtime.
pub const SUCCESS_TITLE: &str = "Your ideal bedtime is…";
/// Title shown when a computation fails.
pub const ERROR_TITLE: &str = "Error";
/// The only failure text a user ever sees.
pub const ERROR_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

/// Outcome of the most recent computation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultState {
    #[default]
    NotComputed,
    Computed(Bedtime),
    Failed(String),
}

impl ResultState {
    /// A failure carrying the user-facing message.
    pub fn failed() -> Self {
        Self::Failed(ERROR_MESSAGE.to_string())
    }

    pub fn title(&self) -> &str {
        match self {
            Self::NotComputed => "",
            Self::Computed(_) => SUCCESS_TITLE,
            Self::Failed(_) => ERROR_TITLE,
        }
    }

    /// The formatted bedtime, the failure text, or nothing.
    pub fn message(&self, clock: ClockStyle) -> String {
        match self {
            Self::NotComputed => String::new(),
            Self::Computed(bedtime) => bedtime.format(clock),
            Self::Failed(message) => message.clone(),
        }
    }

    pub fn bedtime(&self) -> Option<Bedtime> {
        match self {
            Self::Computed(bedtime) => Some(*bedtime),
            _ => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        !matches!(self, Self::NotComputed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeOfDay;

    #[test]
    fn title_and_message_follow_state() {
        assert_eq!(ResultState::default().title(), "");
        assert!(!ResultState::default().is_computed());

        let bedtime = Bedtime {
            time: TimeOfDay::new(23, 30).expect("valid"),
            day_offset: -1,
        };
        let computed = ResultState::Computed(bedtime);
        assert_eq!(computed.title(), "Your ideal bedtime is…");
        assert_eq!(computed.message(ClockStyle::TwentyFourHour), "23:30");
        assert_eq!(computed.message(ClockStyle::TwelveHour), "11:30 PM");
        assert_eq!(computed.bedtime(), Some(bedtime));

        let failed = ResultState::failed();
        assert_eq!(failed.title(), "Error");
        assert_eq!(
            failed.message(ClockStyle::TwelveHour),
            "Sorry, there was a problem calculating your bedtime."
        );
        assert_eq!(failed.bedtime(), None);
    }
}
