//! Bi-monthly pay period model.
//!
//! Payroll runs on two periods per month: the 1st through the 15th, and the
//! 16th through the end of the month. [`PayPeriod`] carries the inclusive
//! date range and knows how to enumerate the dates inside it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range covering one payroll cut-off.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// ).unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()));
/// assert_eq!(period.dates().count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period, rejecting ranges whose end precedes the start.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidPeriod {
                start_date,
                end_date,
                message: "end date precedes start date".to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the bi-monthly period that `date` falls in.
    ///
    /// Days 1 through 15 map to the first half of the month; days 16 and
    /// later map to the second half, which runs to the last day of the
    /// month.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::containing(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
    /// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        if date.day() <= 15 {
            Self {
                start_date: date.with_day(1).unwrap_or(date),
                end_date: date.with_day(15).unwrap_or(date),
            }
        } else {
            Self {
                start_date: date.with_day(16).unwrap_or(date),
                end_date: last_day_of_month(date.year(), date.month()),
            }
        }
    }

    /// Checks if a given date falls within this pay period, inclusive of
    /// both endpoints.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every calendar date in the period in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }

    /// Iterates the default working days of the period.
    ///
    /// Saturday is an ordinary workday on the company calendar, so only
    /// Sundays are skipped. Holidays and per-employee rest-day schedules
    /// refine the sequence downstream.
    pub fn working_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.dates().filter(|date| date.weekday() != Weekday::Sun)
    }
}

/// Returns the last day of the given month, saturating at the calendar edge.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
