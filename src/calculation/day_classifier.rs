//! Day classification.
//!
//! Resolves the semantic [`DayType`] of a calendar day for one employee.
//! Classification depends only on the date, the holiday calendar, the
//! employee's rest-day flag and whether the employee is client-based;
//! clock entries, leave and overtime never influence it.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{DayType, Holiday, HolidayKind, holiday_on};

/// Classifies one calendar day.
///
/// Precedence: a proclaimed holiday wins (combined with the rest-day
/// variant when both apply), then the rest-day flag, then the
/// Saturday-as-regular-workday rule for office-based employees.
///
/// For client-based employees Sunday is not automatically a rest day;
/// `is_rest_day` must come from an explicit schedule flag. Office-based
/// callers pass `is_rest_day = true` for Sundays.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_day;
/// use payroll_engine::models::DayType;
/// use chrono::NaiveDate;
///
/// // 2026-01-10 is a Saturday.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// assert_eq!(
///     classify_day(date, &[], false, false),
///     DayType::SaturdayRegularWorkday
/// );
/// assert_eq!(classify_day(date, &[], false, true), DayType::Regular);
/// ```
pub fn classify_day(
    date: NaiveDate,
    holidays: &[Holiday],
    is_rest_day: bool,
    is_client_based: bool,
) -> DayType {
    if let Some(holiday) = holiday_on(holidays, date) {
        return match (holiday.kind, is_rest_day) {
            (HolidayKind::Regular, false) => DayType::RegularHoliday,
            (HolidayKind::Regular, true) => DayType::SundayRegularHoliday,
            (HolidayKind::SpecialNonWorking, false) => DayType::NonWorkingHoliday,
            (HolidayKind::SpecialNonWorking, true) => DayType::SundaySpecialHoliday,
        };
    }

    if is_rest_day {
        return DayType::Sunday;
    }

    if date.weekday() == Weekday::Sat && !is_client_based {
        return DayType::SaturdayRegularWorkday;
    }

    DayType::Regular
}

/// Returns the effective rest-day flag for one date.
///
/// An explicit schedule flag always counts; for office-based employees a
/// literal Sunday counts as well.
pub fn effective_rest_day(date: NaiveDate, explicitly_flagged: bool, is_client_based: bool) -> bool {
    explicitly_flagged || (!is_client_based && date.weekday() == Weekday::Sun)
}
