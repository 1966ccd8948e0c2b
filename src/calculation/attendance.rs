//! Attendance resolution.
//!
//! Builds the per-day attendance grid for one employee and one pay period:
//! every calendar day is classified, matched against clock entries, leave
//! and overtime requests, and resolved to a [`DayStatus`] with derived basic
//! hours. Malformed or missing inputs degrade to safe defaults with a
//! warning; the resolution itself never fails.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::json;

use crate::config::PayRulesConfig;
use crate::models::{
    AttendanceDay, AuditStep, AuditWarning, ClockEntry, DayStatus, DayType, EmployeeClass,
    Holiday, LeaveRequest, LeaveType, OvertimeRequest, PayPeriod, RestDaySchedule, WorkSchedule,
    holiday_on,
};

use super::day_classifier::{classify_day, effective_rest_day};
use super::holiday_eligibility::{EligibilityBasis, assess_holiday_eligibility};
use super::night_diff::overtime_night_hours;

/// Everything the attendance resolution needs for one employee and period.
///
/// Clock entries may extend before the period start; the extra days feed the
/// holiday-eligibility lookback and are otherwise ignored.
pub struct AttendanceInput<'a> {
    /// The pay period under computation.
    pub period: PayPeriod,
    /// The as-of date; later dates resolve as future.
    pub today: NaiveDate,
    /// The employee's pay classification.
    pub employee_class: EmployeeClass,
    /// Raw clock entries, any approval status.
    pub clock_entries: &'a [ClockEntry],
    /// Leave requests, any approval status.
    pub leave_requests: &'a [LeaveRequest],
    /// Overtime requests, any approval status.
    pub overtime_requests: &'a [OvertimeRequest],
    /// Holiday calendar, including padding days around the period.
    pub holidays: &'a [Holiday],
    /// Explicit rest-day flags, already normalized where required.
    pub rest_days: &'a RestDaySchedule,
    /// The employee's scheduled daily shift, used for undertime.
    pub work_schedule: &'a WorkSchedule,
}

/// The resolved attendance grid plus everything downstream pay rules need.
pub struct AttendanceOutcome {
    /// One entry per calendar day of the period, in order.
    pub days: Vec<AttendanceDay>,
    /// Entry-derived basic hours per date, complete valid entries only.
    pub entry_hours: HashMap<NaiveDate, Decimal>,
    /// Holiday dates that qualified for paid hours.
    pub eligibility: HashMap<NaiveDate, EligibilityBasis>,
    /// One audit step per resolved day.
    pub steps: Vec<AuditStep>,
    /// Degradations encountered while resolving.
    pub warnings: Vec<AuditWarning>,
}

/// Resolves the attendance grid for the period.
///
/// Status precedence per day: holiday, then approved leave, then approved
/// overtime, then complete entries, then incomplete entries, then rest day,
/// then the Saturday full-day credit, then future, then absent.
pub fn build_attendance(
    input: &AttendanceInput<'_>,
    config: &PayRulesConfig,
    first_step: u32,
) -> AttendanceOutcome {
    let day_hours = config.base_pay().day_hours;
    let is_client_based = input.employee_class.is_client_based();
    let rest_day = |date: NaiveDate| {
        effective_rest_day(date, input.rest_days.is_rest_day(date), is_client_based)
    };

    let mut warnings = Vec::new();
    if input.clock_entries.is_empty() {
        warnings.push(AuditWarning {
            code: "EMPTY_PERIOD".to_string(),
            message: "no clock entries supplied; attendance derived from requests and the calendar only"
                .to_string(),
            date: None,
        });
    }

    let scheduled_minutes = input.work_schedule.scheduled_minutes();
    if input.work_schedule.is_present() && scheduled_minutes.is_none() {
        warnings.push(AuditWarning {
            code: "SCHEDULE_PARSE".to_string(),
            message: "work schedule times could not be parsed; undertime set to 0".to_string(),
            date: None,
        });
    }

    let valid_entries: Vec<&ClockEntry> = input
        .clock_entries
        .iter()
        .filter(|entry| entry.is_valid())
        .collect();

    // Complete-entry hours per date, including pre-period days for the
    // eligibility lookback.
    let mut entry_hours: HashMap<NaiveDate, Decimal> = HashMap::new();
    for entry in valid_entries.iter().filter(|entry| entry.is_complete()) {
        *entry_hours.entry(entry.date()).or_insert(Decimal::ZERO) += entry.regular_hours();
    }

    let eligibility =
        assess_holiday_eligibility(input.holidays, &entry_hours, rest_day, day_hours);

    let mut days = Vec::new();
    let mut steps = Vec::new();

    for date in input.period.dates() {
        let day_type = classify_day(date, input.holidays, rest_day(date), is_client_based);

        let day_entries: Vec<&ClockEntry> = valid_entries
            .iter()
            .copied()
            .filter(|entry| entry.date() == date)
            .collect();
        let complete: Vec<&ClockEntry> = day_entries
            .iter()
            .copied()
            .filter(|entry| entry.is_complete())
            .collect();
        let has_incomplete = day_entries.len() > complete.len();
        let worked = entry_hours.get(&date).copied().unwrap_or(Decimal::ZERO);

        let leave = input
            .leave_requests
            .iter()
            .find(|request| request.status.is_approved() && request.covers(date));

        let day_overtime: Vec<&OvertimeRequest> = input
            .overtime_requests
            .iter()
            .filter(|request| request.status.is_approved() && request.ot_date == date)
            .collect();
        let overtime_hours: Decimal = day_overtime.iter().map(|request| request.total_hours).sum();

        let mut night_diff_hours = Decimal::ZERO;
        for request in &day_overtime {
            let night = overtime_night_hours(request, config.night_window());
            night_diff_hours += night.hours;
            if let Some(warning) = night.warning {
                warnings.push(warning);
            }
        }

        let status = if day_type.is_regular_holiday() {
            DayStatus::Rh
        } else if day_type.is_special_holiday() {
            DayStatus::Sh
        } else if let Some(request) = leave {
            match request.leave_type {
                LeaveType::Lwop => DayStatus::Lwop,
                LeaveType::Cto => DayStatus::Cto,
                LeaveType::Ob => DayStatus::Ob,
                LeaveType::Leave => DayStatus::Leave,
            }
        } else if !day_overtime.is_empty() {
            DayStatus::Ot
        } else if !complete.is_empty() {
            DayStatus::Log
        } else if has_incomplete {
            DayStatus::Inc
        } else if day_type.is_rest_day() {
            DayStatus::Rd
        } else if day_type == DayType::SaturdayRegularWorkday {
            DayStatus::Log
        } else if date > input.today {
            DayStatus::Future
        } else {
            DayStatus::Absent
        };

        let mut basic_hours = if day_type.is_holiday() {
            if eligibility.contains_key(&date) {
                day_hours
            } else {
                Decimal::ZERO
            }
        } else {
            match status {
                DayStatus::Lwop => Decimal::ZERO,
                DayStatus::Leave | DayStatus::Cto | DayStatus::Ob => day_hours,
                DayStatus::Rd => {
                    if input.employee_class == EmployeeClass::RankAndFile {
                        day_hours
                    } else {
                        Decimal::ZERO
                    }
                }
                _ => {
                    if worked.is_zero() && day_type == DayType::SaturdayRegularWorkday {
                        day_hours
                    } else {
                        worked
                    }
                }
            }
        };

        if basic_hours.is_zero() && day_entries.is_empty() {
            if let Some(correction) = config.correction_for(date) {
                basic_hours = correction.basic_hours;
                warnings.push(AuditWarning {
                    code: "CORRECTION_APPLIED".to_string(),
                    message: format!("dated correction applied on {date}: {}", correction.reason),
                    date: Some(date),
                });
            }
        }

        let undertime_minutes = match (status, scheduled_minutes) {
            (DayStatus::Log, Some(scheduled)) if !complete.is_empty() => {
                let worked_minutes: i64 = complete
                    .iter()
                    .filter_map(|entry| {
                        entry
                            .clock_out
                            .map(|out| (out - entry.clock_in).num_minutes().max(0))
                    })
                    .sum();
                (scheduled - worked_minutes).max(0)
            }
            _ => 0,
        };

        let clock_in: Option<NaiveDateTime> =
            day_entries.iter().map(|entry| entry.clock_in).min();
        let clock_out: Option<NaiveDateTime> =
            complete.iter().filter_map(|entry| entry.clock_out).max();

        let detail = match status {
            DayStatus::Rh | DayStatus::Sh => match eligibility.get(&date) {
                Some(basis) => format!("eligible for holiday pay ({basis})"),
                None => "not eligible for holiday pay".to_string(),
            },
            DayStatus::Lwop | DayStatus::Cto | DayStatus::Ob | DayStatus::Leave => {
                format!("covered by an approved {status} request")
            }
            DayStatus::Ot => format!(
                "{} approved overtime hours",
                overtime_hours.normalize()
            ),
            DayStatus::Log if complete.is_empty() => {
                "no entries; Saturday credited as a full day".to_string()
            }
            DayStatus::Log => format!(
                "{} complete entries totalling {} hours",
                complete.len(),
                worked.normalize()
            ),
            DayStatus::Inc => "incomplete clock entry".to_string(),
            DayStatus::Rd => "unworked rest day".to_string(),
            DayStatus::Future => "date is after the as-of date".to_string(),
            DayStatus::Absent => "no entries, leave or overtime".to_string(),
        };

        steps.push(AuditStep {
            step_number: first_step + steps.len() as u32,
            rule_id: "attendance_resolution".to_string(),
            rule_name: "Attendance Resolution".to_string(),
            basis_ref: "policy attendance".to_string(),
            input: json!({
                "date": date.to_string(),
                "day_type": day_type.to_string(),
                "rest_day": day_type.is_rest_day(),
                "holiday": holiday_on(input.holidays, date).map(|h| h.name.clone()),
                "valid_entries": day_entries.len(),
                "complete_entries": complete.len(),
                "leave": leave.map(|request| request.leave_type),
                "overtime_hours": overtime_hours.normalize().to_string(),
            }),
            output: json!({
                "status": status.to_string(),
                "basic_hours": basic_hours.normalize().to_string(),
                "overtime_hours": overtime_hours.normalize().to_string(),
                "night_diff_hours": night_diff_hours.normalize().to_string(),
                "undertime_minutes": undertime_minutes,
            }),
            reasoning: format!(
                "{date} is {day_type}: {detail}; status {status} with {} basic hours",
                basic_hours.normalize()
            ),
        });

        days.push(AttendanceDay {
            date,
            day_type,
            status,
            basic_hours,
            overtime_hours,
            night_diff_hours,
            undertime_minutes,
            clock_in,
            clock_out,
        });
    }

    AttendanceOutcome {
        days,
        entry_hours,
        eligibility,
        steps,
        warnings,
    }
}
