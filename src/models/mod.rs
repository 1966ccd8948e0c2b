//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod computation_result;
mod employee;
mod holiday;
mod pay_period;
mod time_records;

pub use attendance::{AttendanceDay, DayStatus, DayType};
pub use computation_result::{
    AuditStep, AuditTrace, AuditWarning, ComputationResult, EarningCategory, EarningLine,
    PayBreakdown, PayComponent,
};
pub use employee::{Employee, EmployeeClass, STANDARD_DAY_HOURS};
pub use holiday::{Holiday, HolidayKind, holiday_on};
pub use pay_period::PayPeriod;
pub use time_records::{
    ApprovalStatus, ClockEntry, ClockStatus, LeaveRequest, LeaveType, OvertimeRequest,
    RestDaySchedule, WorkSchedule, parse_clock_time,
};
