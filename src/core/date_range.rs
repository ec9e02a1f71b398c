use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::core::{AppError, Result};

/// Wire and storage format for calendar days
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that render as exactly four digits
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Half-open day range `[from, to)` expressed as `YYYY-MM-DD` strings.
///
/// The strings are what gets bound into queries; stored dates compare
/// lexically, which only matches chronological order for the padded format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    /// Validate a single calendar day and bracket it with the following day.
    ///
    /// `"2019-08-01"` becomes `from = "2019-08-01"`, `to = "2019-08-02"`.
    /// Malformed input, impossible dates and non-padded forms such as
    /// `"2019-8-1"` all fail with [`AppError::InvalidDate`]. Both days must
    /// fall in years 1 to 9999, so `"9999-12-31"` is rejected as well.
    pub fn for_day(date: &str) -> Result<Self> {
        let day = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| AppError::invalid_date(date))?;

        if !YEARS.contains(&day.year()) || day.format(DATE_FORMAT).to_string() != date {
            return Err(AppError::invalid_date(date));
        }

        let next = day
            .succ_opt()
            .filter(|next| YEARS.contains(&next.year()))
            .ok_or_else(|| AppError::invalid_date(date))?;

        Ok(Self {
            from: date.to_string(),
            to: next.format(DATE_FORMAT).to_string(),
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}
