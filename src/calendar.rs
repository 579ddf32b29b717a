//! Calendar month keys
//!
//! Budget items, closures and goals are keyed by month. The stored form is the
//! first day of the month (`YYYY-MM-01`); the day is never significant.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// A calendar month identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    /// 1-12
    month: u32,
}

impl MonthKey {
    /// Build a key from year and month (1-12)
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Signed whole-month difference `other - self`
    /// = (other.year - self.year) * 12 + (other.month - self.month)
    pub fn months_until(&self, other: MonthKey) -> i32 {
        (other.year - self.year) * 12 + (other.month as i32 - self.month as i32)
    }

    /// The following calendar month
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }
}

/// Whole calendar-month difference between two dates, ignoring the day of month
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    MonthKey::from_date(from).months_until(MonthKey::from_date(to))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, PlannerError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| PlannerError::InvalidDate(s.to_string()))
}

impl FromStr for MonthKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(MonthKey::from_date)
            .map_err(|_| PlannerError::InvalidMonthKey(s.to_string()))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-01", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_day() {
        let key: MonthKey = "2024-03-17".parse().unwrap();
        assert_eq!(key, MonthKey::new(2024, 3).unwrap());
        assert_eq!(key.to_string(), "2024-03-01");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2024-13-01".parse::<MonthKey>().is_err());
        assert!("march".parse::<MonthKey>().is_err());
        assert!(MonthKey::new(2024, 0).is_none());
    }

    #[test]
    fn test_months_until_crosses_years() {
        let nov = MonthKey::new(2023, 11).unwrap();
        let feb = MonthKey::new(2024, 2).unwrap();
        assert_eq!(nov.months_until(feb), 3);
        assert_eq!(feb.months_until(nov), -3);
        assert_eq!(nov.months_until(nov), 0);
    }

    #[test]
    fn test_months_between_ignores_day() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(months_between(a, b), 1);
    }

    #[test]
    fn test_succ_wraps_december() {
        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.succ(), MonthKey::new(2025, 1).unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let key = MonthKey::new(2024, 5).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-05-01\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
