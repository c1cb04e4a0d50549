use crate::outcome::Outcome;
use crate::prompt::Prompt;
use crate::trade_date::TradeDate;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WeekendVerdict {
    /// The field is empty or unreadable, there is nothing to guard.
    NoDate,
    Weekday,
    WeekendAccepted,
    WeekendDeclined,
}

impl WeekendVerdict {
    pub fn outcome(&self) -> Outcome {
        match self {
            WeekendVerdict::WeekendDeclined => Outcome::Cancel,
            WeekendVerdict::NoDate | WeekendVerdict::Weekday | WeekendVerdict::WeekendAccepted => {
                Outcome::Proceed
            }
        }
    }

    pub fn should_clear_date(&self) -> bool {
        *self == WeekendVerdict::WeekendDeclined
    }
}

/// Ask the user to confirm a date on which exchanges are normally closed.
pub fn check_weekend(value: &str, prompt: &dyn Prompt, message: &str) -> WeekendVerdict {
    let date = match TradeDate::parse(value) {
        Ok(date) => date,
        Err(error) => {
            log::debug!("Weekend guard skipped: {error}");
            return WeekendVerdict::NoDate;
        }
    };

    if !date.is_weekend() {
        WeekendVerdict::Weekday
    } else if prompt.confirm(message) {
        WeekendVerdict::WeekendAccepted
    } else {
        WeekendVerdict::WeekendDeclined
    }
}
