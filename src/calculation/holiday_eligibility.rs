//! Holiday-pay eligibility.
//!
//! An employee is only paid for an unworked holiday when they either worked
//! the holiday itself, worked their most recent prior regular working day,
//! or carried eligibility over from an eligible holiday the day before.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Holiday, holiday_on};

/// How far back the prior-working-day search reaches, in calendar days.
const LOOKBACK_DAYS: i64 = 7;

/// Why a holiday date qualified for paid hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityBasis {
    /// At least a full day of basic hours was clocked on the holiday itself.
    WorkedHoliday,
    /// A full day was clocked on the most recent prior regular working day.
    WorkedPriorDay(NaiveDate),
    /// The preceding calendar day was itself an eligible holiday.
    PropagatedFrom(NaiveDate),
}

impl fmt::Display for EligibilityBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EligibilityBasis::WorkedHoliday => write!(f, "worked the holiday itself"),
            EligibilityBasis::WorkedPriorDay(date) => {
                write!(f, "worked the prior working day {date}")
            }
            EligibilityBasis::PropagatedFrom(date) => {
                write!(f, "carried over from eligible holiday {date}")
            }
        }
    }
}

/// Assesses every holiday in `holidays` and returns the dates that qualify
/// for paid hours, each with the basis that qualified it.
///
/// `entry_hours` maps dates to entry-derived basic hours (capped per entry,
/// summed per day); the prior-working-day search walks back up to seven
/// calendar days, skips holidays and rest days, and checks only the single
/// working day it lands on. Dates are assessed in ascending order so that a
/// run of consecutive holidays propagates eligibility forward without
/// repeating the lookback.
pub fn assess_holiday_eligibility(
    holidays: &[Holiday],
    entry_hours: &HashMap<NaiveDate, Decimal>,
    is_rest_day: impl Fn(NaiveDate) -> bool,
    full_day_hours: Decimal,
) -> HashMap<NaiveDate, EligibilityBasis> {
    let worked_full_day = |date: NaiveDate| {
        entry_hours
            .get(&date)
            .is_some_and(|hours| *hours >= full_day_hours)
    };

    let dates: BTreeSet<NaiveDate> = holidays.iter().map(|h| h.date).collect();
    let mut eligible: HashMap<NaiveDate, EligibilityBasis> = HashMap::new();

    for &date in &dates {
        if worked_full_day(date) {
            eligible.insert(date, EligibilityBasis::WorkedHoliday);
            continue;
        }

        if let Some(prior) = prior_working_day(date, holidays, &is_rest_day) {
            if worked_full_day(prior) {
                eligible.insert(date, EligibilityBasis::WorkedPriorDay(prior));
                continue;
            }
        }

        let previous = date - Duration::days(1);
        if eligible.contains_key(&previous) {
            eligible.insert(date, EligibilityBasis::PropagatedFrom(previous));
        }
    }

    eligible
}

/// Finds the most recent regular working day before `date`, searching back at
/// most [`LOOKBACK_DAYS`] and skipping holidays and rest days.
fn prior_working_day(
    date: NaiveDate,
    holidays: &[Holiday],
    is_rest_day: &impl Fn(NaiveDate) -> bool,
) -> Option<NaiveDate> {
    (1..=LOOKBACK_DAYS)
        .map(|offset| date - Duration::days(offset))
        .find(|&candidate| holiday_on(holidays, candidate).is_none() && !is_rest_day(candidate))
}
