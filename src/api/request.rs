//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure for the `/compute`
//! endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::EngineInput;
use crate::models::{
    ClockEntry, Employee, Holiday, LeaveRequest, OvertimeRequest, PayPeriod, RestDaySchedule,
    WorkSchedule,
};

/// Request body for the `/compute` endpoint.
///
/// Carries the already-fetched records for one employee and one pay
/// period. Collections default to empty so callers only send what they
/// have; `as_of` pins the computation's notion of "today" and defaults
/// to the current UTC time when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The employee under computation.
    pub employee: Employee,
    /// The pay period.
    pub period: PayPeriod,
    /// Clock entries, including any lookback days before the period.
    #[serde(default)]
    pub clock_entries: Vec<ClockEntry>,
    /// Leave requests touching the period.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
    /// Overtime requests touching the period.
    #[serde(default)]
    pub overtime_requests: Vec<OvertimeRequest>,
    /// Holiday calendar for the period, padding included.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Explicit rest-day flags.
    #[serde(default)]
    pub rest_day_schedule: RestDaySchedule,
    /// The employee's scheduled shift, used for undertime.
    #[serde(default)]
    pub work_schedule: WorkSchedule,
    /// Pins the as-of instant for reproducible results.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
}

impl From<ComputeRequest> for EngineInput {
    fn from(request: ComputeRequest) -> Self {
        EngineInput {
            employee: request.employee,
            period: request.period,
            clock_entries: request.clock_entries,
            leave_requests: request.leave_requests,
            overtime_requests: request.overtime_requests,
            holidays: request.holidays,
            rest_day_schedule: request.rest_day_schedule,
            work_schedule: request.work_schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_deserializes() {
        let json = r#"{
            "employee": {
                "id": "EMP-001",
                "position": "Payroll Analyst",
                "rate_per_day": "800",
                "hire_date": "2020-01-01"
            },
            "period": {
                "start_date": "2026-01-01",
                "end_date": "2026-01-15"
            }
        }"#;
        let request: ComputeRequest = serde_json::from_str(json).unwrap();
        assert!(request.clock_entries.is_empty());
        assert!(request.holidays.is_empty());
        assert!(request.as_of.is_none());

        let input: EngineInput = request.into();
        assert_eq!(input.employee.id, "EMP-001");
    }

    #[test]
    fn test_as_of_round_trips() {
        let json = r#"{
            "employee": {
                "id": "EMP-001",
                "position": "Payroll Analyst",
                "rate_per_day": "800",
                "hire_date": "2020-01-01"
            },
            "period": {
                "start_date": "2026-01-01",
                "end_date": "2026-01-15"
            },
            "as_of": "2026-01-20T08:30:00"
        }"#;
        let request: ComputeRequest = serde_json::from_str(json).unwrap();
        let as_of = request.as_of.unwrap();
        assert_eq!(as_of.to_string(), "2026-01-20 08:30:00");
    }
}
