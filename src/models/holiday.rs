//! Holiday calendar entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The legal category of a proclaimed holiday.
///
/// Regular holidays carry the 200% worked multiplier and the paid-if-eligible
/// guarantee; special non-working days carry the 130% worked multiplier and
/// are unpaid when unworked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A regular holiday (e.g. Araw ng Kagitingan, Labor Day).
    Regular,
    /// A special non-working day (e.g. Ninoy Aquino Day).
    SpecialNonWorking,
}

/// A single proclaimed holiday on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date the holiday falls on.
    pub date: NaiveDate,
    /// The proclaimed name of the holiday.
    pub name: String,
    /// Whether the day is a regular holiday or a special non-working day.
    pub kind: HolidayKind,
}

impl Holiday {
    /// Returns true if this is a regular holiday.
    pub fn is_regular(&self) -> bool {
        self.kind == HolidayKind::Regular
    }
}

/// Looks up the holiday proclaimed on `date`, if any.
///
/// When both a regular holiday and a special day are proclaimed on the same
/// date the regular holiday wins, matching the precedence used by day
/// classification.
pub fn holiday_on(holidays: &[Holiday], date: NaiveDate) -> Option<&Holiday> {
    let mut found: Option<&Holiday> = None;
    for holiday in holidays.iter().filter(|h| h.date == date) {
        if holiday.is_regular() {
            return Some(holiday);
        }
        if found.is_none() {
            found = Some(holiday);
        }
    }
    found
}
