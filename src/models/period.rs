//! Calendar month periods
//!
//! Every "current month" computation in the dashboard is expressed as a
//! `MonthPeriod` passed in by the caller, never read from the system clock
//! inside the engine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month of a specific year
///
/// Ordering is chronological: by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a period for `month` (1-12) of `year`
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date or date-time
    pub fn containing<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The period containing today's local date
    ///
    /// Only the CLI should call this; library code takes the period as input.
    pub fn current() -> Self {
        Self::containing(&chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 (January) through 12 (December)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month index, 0 (January) through 11 (December)
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    /// Check if a date or date-time falls within this period
    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding calendar month (January wraps to December of the prior year)
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First day of the period
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Chart label: three-letter month plus four-digit year, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        format!("{} {:04}", MONTH_ABBREVIATIONS[self.month0() as usize], self.year)
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-01"
    /// - Any date inside the month: "2025-01-17"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::containing(&date));
        }

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthPeriod {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthPeriod> for String {
    fn from(period: MonthPeriod) -> Self {
        period.to_string()
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
