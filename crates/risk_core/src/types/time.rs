//! Calendar date type.
//!
//! The expiration date of a position is carried for display only; no
//! year-fraction or time-decay computation uses it.
//!
//! # Examples
//!
//! ```
//! use risk_core::types::time::Date;
//!
//! let expiry = Date::from_ymd(2024, 12, 31).unwrap();
//! let next = expiry.add_days(1).unwrap();
//! assert_eq!(next.to_string(), "2025-01-01");
//! assert_eq!(next - expiry, 1);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use risk_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use risk_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Shifts the date by a signed number of calendar days.
    ///
    /// Returns `None` when the result falls outside chrono's supported range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Date)
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of calendar days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_ymd_valid() {
        let date = Date::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        // Non-leap year February 29
        assert!(matches!(
            Date::from_ymd(2023, 2, 29),
            Err(DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_date_parse() {
        let date = Date::parse(" 2024-06-15 ").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 6, 15).unwrap());

        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2024/06/15").is_err());
    }

    #[test]
    fn test_date_display() {
        let date = Date::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(format!("{}", date), "2024-01-05");
    }

    #[test]
    fn test_add_days_crosses_year_boundary() {
        let date = Date::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(date.add_days(1), Some(Date::from_ymd(2025, 1, 1).unwrap()));
        assert_eq!(
            date.add_days(-366),
            Some(Date::from_ymd(2023, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_date_subtraction() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 11).unwrap();
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_date_serde_is_iso_string() {
        let date = Date::from_ymd(2024, 12, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-12-31\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
