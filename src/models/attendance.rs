//! Derived attendance types: day classification and per-day status.
//!
//! [`AttendanceDay`] is the central unit of computation. The engine builds
//! one per calendar day in the pay period, then folds the collection into a
//! pay breakdown. Both the day type and the status are closed enumerations
//! so precedence rules stay exhaustiveness-checked.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Semantic classification of a calendar day for one employee.
///
/// "Sunday" is the generic designated-rest-day tag regardless of the
/// literal weekday; an account supervisor resting on a Wednesday still gets
/// `Sunday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayType {
    /// An ordinary paid workday.
    Regular,
    /// A Saturday treated as a paid regular workday.
    SaturdayRegularWorkday,
    /// The employee's designated rest day.
    Sunday,
    /// A regular holiday on a workday.
    RegularHoliday,
    /// A special non-working day on a workday.
    NonWorkingHoliday,
    /// A regular holiday falling on the employee's rest day.
    SundayRegularHoliday,
    /// A special non-working day falling on the employee's rest day.
    SundaySpecialHoliday,
}

impl DayType {
    /// Returns true for any holiday classification.
    pub fn is_holiday(&self) -> bool {
        matches!(
            self,
            DayType::RegularHoliday
                | DayType::NonWorkingHoliday
                | DayType::SundayRegularHoliday
                | DayType::SundaySpecialHoliday
        )
    }

    /// Returns true for regular-holiday classifications.
    pub fn is_regular_holiday(&self) -> bool {
        matches!(
            self,
            DayType::RegularHoliday | DayType::SundayRegularHoliday
        )
    }

    /// Returns true for special non-working-day classifications.
    pub fn is_special_holiday(&self) -> bool {
        matches!(
            self,
            DayType::NonWorkingHoliday | DayType::SundaySpecialHoliday
        )
    }

    /// Returns true when the day is the employee's rest day, holiday or not.
    pub fn is_rest_day(&self) -> bool {
        matches!(
            self,
            DayType::Sunday | DayType::SundayRegularHoliday | DayType::SundaySpecialHoliday
        )
    }

    /// Returns true for plain paid workdays.
    pub fn is_regular_workday(&self) -> bool {
        matches!(self, DayType::Regular | DayType::SaturdayRegularWorkday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            DayType::Regular => "regular",
            DayType::SaturdayRegularWorkday => "saturday-regular-workday",
            DayType::Sunday => "sunday",
            DayType::RegularHoliday => "regular-holiday",
            DayType::NonWorkingHoliday => "non-working-holiday",
            DayType::SundayRegularHoliday => "sunday-regular-holiday",
            DayType::SundaySpecialHoliday => "sunday-special-holiday",
        };
        write!(f, "{tag}")
    }
}

/// Resolved attendance status for one day. Exactly one applies per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayStatus {
    /// Worked with complete clock entries.
    Log,
    /// Only an incomplete clock entry exists.
    Inc,
    /// Past or current workday with no record at all.
    Absent,
    /// Covered by paid leave.
    Leave,
    /// Covered by leave without pay.
    Lwop,
    /// Covered by compensatory time off.
    Cto,
    /// Covered by official business.
    Ob,
    /// An approved overtime filing exists for the day.
    Ot,
    /// Unworked rest day.
    Rd,
    /// Regular holiday.
    Rh,
    /// Special non-working day.
    Sh,
    /// Future date; not yet applicable.
    #[serde(rename = "-")]
    Future,
}

impl DayStatus {
    /// Returns true for the leave family of statuses.
    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            DayStatus::Leave | DayStatus::Lwop | DayStatus::Cto | DayStatus::Ob
        )
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            DayStatus::Log => "LOG",
            DayStatus::Inc => "INC",
            DayStatus::Absent => "ABSENT",
            DayStatus::Leave => "LEAVE",
            DayStatus::Lwop => "LWOP",
            DayStatus::Cto => "CTO",
            DayStatus::Ob => "OB",
            DayStatus::Ot => "OT",
            DayStatus::Rd => "RD",
            DayStatus::Rh => "RH",
            DayStatus::Sh => "SH",
            DayStatus::Future => "-",
        };
        write!(f, "{tag}")
    }
}

/// One fully-resolved calendar day for one employee.
///
/// Built fresh for every computation and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Semantic classification of the day.
    pub day_type: DayType,
    /// Resolved attendance status.
    pub status: DayStatus,
    /// Hours credited toward basic pay.
    pub basic_hours: Decimal,
    /// Approved overtime hours.
    pub overtime_hours: Decimal,
    /// Night-differential hours from approved overtime.
    pub night_diff_hours: Decimal,
    /// Minutes short of the scheduled span; zero when not computable.
    pub undertime_minutes: i64,
    /// Earliest clock-in of the day, if any entry exists.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Latest clock-out of the day, if any complete entry exists.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Day type ===

    /// DT-001: serialized tags are the kebab-case classification names
    #[test]
    fn test_day_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DayType::SaturdayRegularWorkday).unwrap(),
            "\"saturday-regular-workday\""
        );
        assert_eq!(
            serde_json::to_string(&DayType::SundaySpecialHoliday).unwrap(),
            "\"sunday-special-holiday\""
        );
        let day_type: DayType = serde_json::from_str("\"non-working-holiday\"").unwrap();
        assert_eq!(day_type, DayType::NonWorkingHoliday);
    }

    /// DT-002: display matches the serialized tag for every variant
    #[test]
    fn test_day_type_display_matches_serde() {
        let all = [
            DayType::Regular,
            DayType::SaturdayRegularWorkday,
            DayType::Sunday,
            DayType::RegularHoliday,
            DayType::NonWorkingHoliday,
            DayType::SundayRegularHoliday,
            DayType::SundaySpecialHoliday,
        ];
        for day_type in all {
            let json = serde_json::to_string(&day_type).unwrap();
            assert_eq!(json, format!("\"{}\"", day_type));
        }
    }

    /// DT-003: holiday predicates partition the holiday variants
    #[test]
    fn test_holiday_predicates() {
        assert!(DayType::RegularHoliday.is_holiday());
        assert!(DayType::SundaySpecialHoliday.is_holiday());
        assert!(!DayType::Sunday.is_holiday());
        assert!(!DayType::Regular.is_holiday());

        assert!(DayType::RegularHoliday.is_regular_holiday());
        assert!(DayType::SundayRegularHoliday.is_regular_holiday());
        assert!(!DayType::NonWorkingHoliday.is_regular_holiday());

        assert!(DayType::NonWorkingHoliday.is_special_holiday());
        assert!(DayType::SundaySpecialHoliday.is_special_holiday());
        assert!(!DayType::SundayRegularHoliday.is_special_holiday());
    }

    /// DT-004: rest-day predicate includes holiday-on-rest-day variants
    #[test]
    fn test_rest_day_predicate() {
        assert!(DayType::Sunday.is_rest_day());
        assert!(DayType::SundayRegularHoliday.is_rest_day());
        assert!(DayType::SundaySpecialHoliday.is_rest_day());
        assert!(!DayType::Regular.is_rest_day());
        assert!(!DayType::SaturdayRegularWorkday.is_rest_day());
    }

    /// DT-005: Saturday counts as a regular workday
    #[test]
    fn test_regular_workday_predicate() {
        assert!(DayType::Regular.is_regular_workday());
        assert!(DayType::SaturdayRegularWorkday.is_regular_workday());
        assert!(!DayType::Sunday.is_regular_workday());
        assert!(!DayType::RegularHoliday.is_regular_workday());
    }

    // === Day status ===

    /// DS-001: future status serializes as a dash
    #[test]
    fn test_future_status_serializes_as_dash() {
        assert_eq!(serde_json::to_string(&DayStatus::Future).unwrap(), "\"-\"");
        let status: DayStatus = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(status, DayStatus::Future);
    }

    /// DS-002: uppercase tags round-trip
    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&DayStatus::Absent).unwrap(), "\"ABSENT\"");
        assert_eq!(serde_json::to_string(&DayStatus::Rd).unwrap(), "\"RD\"");
        let status: DayStatus = serde_json::from_str("\"LWOP\"").unwrap();
        assert_eq!(status, DayStatus::Lwop);
    }

    /// DS-003: leave family predicate
    #[test]
    fn test_is_leave() {
        assert!(DayStatus::Leave.is_leave());
        assert!(DayStatus::Lwop.is_leave());
        assert!(DayStatus::Cto.is_leave());
        assert!(DayStatus::Ob.is_leave());
        assert!(!DayStatus::Log.is_leave());
        assert!(!DayStatus::Rd.is_leave());
    }

    #[test]
    fn test_attendance_day_round_trip() {
        let day = AttendanceDay {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            day_type: DayType::Regular,
            status: DayStatus::Log,
            basic_hours: Decimal::new(8, 0),
            overtime_hours: Decimal::ZERO,
            night_diff_hours: Decimal::ZERO,
            undertime_minutes: 0,
            clock_in: None,
            clock_out: None,
        };
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"status\":\"LOG\""));
        assert!(json.contains("\"day_type\":\"regular\""));
        let deserialized: AttendanceDay = serde_json::from_str(&json).unwrap();
        assert_eq!(day, deserialized);
    }
}
