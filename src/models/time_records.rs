//! Raw time-keeping records fed into the engine.
//!
//! This module defines the upstream record types the engine consumes:
//! clock entries, leave requests, overtime requests, rest-day schedules and
//! the employee's scheduled working hours. Records arrive pre-filtered by
//! the data-access layer, but every type still exposes its own validity
//! checks so the aggregator never counts a rejected or pending record.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::employee::STANDARD_DAY_HOURS;

/// Parses a clock-face time string, accepting `%H:%M:%S` and `%H:%M`.
///
/// Returns `None` for anything unparseable; callers degrade rather than
/// abort on bad schedule strings.
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

/// Lifecycle status of a clock entry.
///
/// Only the first four variants count toward attendance; anything else is
/// ignored by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockStatus {
    /// Closed automatically by the time-clock system.
    AutoApproved,
    /// Reviewed and approved by a supervisor.
    Approved,
    /// Employee clocked out normally.
    ClockedOut,
    /// Entry is still open (no clock-out yet).
    ClockedIn,
    /// Awaiting review; not counted.
    Pending,
    /// Rejected on review; not counted. Unknown statuses map here.
    #[serde(other)]
    Rejected,
}

impl ClockStatus {
    /// Returns true if entries with this status count toward attendance.
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            ClockStatus::AutoApproved
                | ClockStatus::Approved
                | ClockStatus::ClockedOut
                | ClockStatus::ClockedIn
        )
    }
}

/// A single time-clock punch pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEntry {
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out; `None` while the entry is open.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Lifecycle status of the entry.
    pub status: ClockStatus,
}

impl ClockEntry {
    /// The attendance date of this entry, taken from the clock-in side.
    pub fn date(&self) -> NaiveDate {
        self.clock_in.date()
    }

    /// Returns true when the entry has been closed with a clock-out.
    pub fn is_complete(&self) -> bool {
        self.clock_out.is_some()
    }

    /// Returns true when the entry's status counts toward attendance.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// Total span of the entry in hours; zero while open or when the
    /// clock-out precedes the clock-in.
    pub fn worked_hours(&self) -> Decimal {
        let Some(clock_out) = self.clock_out else {
            return Decimal::ZERO;
        };
        let minutes = (clock_out - self.clock_in).num_minutes().max(0);
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Hours credited toward basic pay for this entry, capped at a
    /// standard working day.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{ClockEntry, ClockStatus};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = ClockEntry {
    ///     employee_id: "emp_001".to_string(),
    ///     clock_in: NaiveDateTime::parse_from_str("2026-01-05 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     clock_out: Some(NaiveDateTime::parse_from_str("2026-01-05 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     status: ClockStatus::ClockedOut,
    /// };
    /// assert_eq!(entry.worked_hours(), Decimal::new(10, 0));
    /// assert_eq!(entry.regular_hours(), Decimal::new(8, 0));
    /// ```
    pub fn regular_hours(&self) -> Decimal {
        self.worked_hours().min(STANDARD_DAY_HOURS)
    }
}

/// Approval status shared by leave and overtime requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Approved by a supervisor.
    Approved,
    /// Approved automatically by policy.
    AutoApproved,
    /// Awaiting review.
    Pending,
    /// Declined. Unknown statuses map here.
    #[serde(other)]
    Rejected,
}

impl ApprovalStatus {
    /// Returns true if requests with this status count.
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::AutoApproved)
    }
}

/// Category of a leave request, controlling the hours credited for each
/// covered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveType {
    /// Service incentive leave; paid at a full day.
    #[serde(alias = "SIL")]
    Leave,
    /// Leave without pay; zero hours credited.
    Lwop,
    /// Compensatory time off; paid at a full day.
    Cto,
    /// Official business; paid at a full day.
    Ob,
}

impl LeaveType {
    /// Basic hours credited for a day covered by this leave type.
    pub fn credited_hours(&self) -> Decimal {
        match self {
            LeaveType::Lwop => Decimal::ZERO,
            LeaveType::Leave | LeaveType::Cto | LeaveType::Ob => STANDARD_DAY_HOURS,
        }
    }
}

/// A filed leave request covering one or more dates.
///
/// A request carries either an explicit `selected_dates` list or an
/// inclusive `[start_date, end_date]` range; the list wins when both are
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The kind of leave filed.
    pub leave_type: LeaveType,
    /// Explicitly selected dates, when the request is not a range.
    #[serde(default)]
    pub selected_dates: Vec<NaiveDate>,
    /// Range start, inclusive.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Range end, inclusive.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Approval state of the request.
    pub status: ApprovalStatus,
}

impl LeaveRequest {
    /// Returns true when the request counts toward attendance.
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }

    /// Returns true when this request covers `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        if !self.selected_dates.is_empty() {
            return self.selected_dates.contains(&date);
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => date >= start && date <= end,
            (Some(start), None) => date == start,
            _ => false,
        }
    }
}

/// A filed overtime request.
///
/// Start and end times are kept as raw strings; they are parsed lazily by
/// the night-differential rule, which degrades with a warning instead of
/// failing the computation when a string is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The date the overtime was rendered.
    pub ot_date: NaiveDate,
    /// End date when the overtime spans midnight; same-day when absent.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Clock-face start time, e.g. `"18:00"` or `"18:00:00"`.
    pub start_time: String,
    /// Clock-face end time.
    pub end_time: String,
    /// Total approved overtime hours.
    pub total_hours: Decimal,
    /// Approval state of the request.
    pub status: ApprovalStatus,
}

impl OvertimeRequest {
    /// Returns true when the request counts toward overtime pay.
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }

    /// Returns true when the overtime window crosses midnight.
    pub fn spans_midnight(&self) -> bool {
        self.end_date.is_some_and(|end| end != self.ot_date)
    }
}

/// Explicit rest-day flags for one employee over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestDaySchedule {
    /// Dates flagged as rest days.
    #[serde(default)]
    pub rest_days: Vec<NaiveDate>,
}

impl RestDaySchedule {
    /// Returns true when `date` is flagged as a rest day.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        self.rest_days.contains(&date)
    }

    /// Keeps only the first flagged rest day of each ISO week.
    ///
    /// Account supervisors get exactly one true rest day per week; a second
    /// flag in the same week is treated as a regular workday.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::RestDaySchedule;
    /// use chrono::NaiveDate;
    ///
    /// let schedule = RestDaySchedule {
    ///     rest_days: vec![
    ///         NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(), // Wednesday
    ///         NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(), // Sunday, same ISO week
    ///     ],
    /// };
    /// let normalized = schedule.first_per_week();
    /// assert!(normalized.is_rest_day(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()));
    /// assert!(!normalized.is_rest_day(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
    /// ```
    pub fn first_per_week(&self) -> Self {
        let mut sorted = self.rest_days.clone();
        sorted.sort();
        let mut seen_weeks = HashSet::new();
        let rest_days = sorted
            .into_iter()
            .filter(|date| {
                let week = date.iso_week();
                seen_weeks.insert((week.year(), week.week()))
            })
            .collect();
        Self { rest_days }
    }
}

/// The employee's scheduled daily working hours, as raw clock-face strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Scheduled time in, e.g. `"08:00"`.
    #[serde(default)]
    pub time_in: Option<String>,
    /// Scheduled time out, e.g. `"17:00"`.
    #[serde(default)]
    pub time_out: Option<String>,
}

impl WorkSchedule {
    /// True when at least one schedule time was supplied.
    pub fn is_present(&self) -> bool {
        self.time_in.is_some() || self.time_out.is_some()
    }

    /// The scheduled span in minutes, treating an out-time earlier than the
    /// in-time as an overnight schedule.
    ///
    /// Returns `None` when either time is missing or unparseable.
    pub fn scheduled_minutes(&self) -> Option<i64> {
        let time_in = parse_clock_time(self.time_in.as_deref()?)?;
        let time_out = parse_clock_time(self.time_out.as_deref()?)?;
        let span = (time_out - time_in).num_minutes();
        if span < 0 { Some(span + 24 * 60) } else { Some(span) }
    }
}
