use crate::error::DateError;
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

/// Format submitted by `<input type="date">`.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A calendar day picked for a trade.
///
/// A bare date is read as the day starting at UTC midnight, so no local timezone
/// can move it to the previous or next day.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a date field value.
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps, the latter being converted to UTC first.
    pub fn parse(value: &str) -> Result<Self, DateError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DateError::Empty);
        }

        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT) {
            return Ok(Self(date));
        }

        DateTime::parse_from_rfc3339(value)
            .map(|date_time| Self(date_time.with_timezone(&Utc).date_naive()))
            .map_err(|_| DateError::Invalid(value.to_owned()))
    }

    pub fn date(&self) -> &NaiveDate {
        &self.0
    }

    /// 0 is Sunday, 6 is Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
