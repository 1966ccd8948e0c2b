//! Computation result models.
//!
//! This module contains the [`ComputationResult`] type and its associated
//! structures: the per-period pay breakdown, itemized earning lines, and
//! the audit trace recording every rule decision.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attendance::AttendanceDay;
use super::pay_period::PayPeriod;

/// Category of an itemized earning line.
///
/// Rank-and-file overtime is itemized per day-type combination; the
/// flat-allowance classes get the three allowance categories instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningCategory {
    /// Overtime on a regular workday.
    Overtime,
    /// Overtime on a rest day.
    RestDayOvertime,
    /// Overtime on a special non-working day.
    SpecialHolidayOvertime,
    /// Overtime on a regular holiday.
    RegularHolidayOvertime,
    /// Overtime on a special non-working day that is also a rest day.
    RestDaySpecialHolidayOvertime,
    /// Overtime on a regular holiday that is also a rest day.
    RestDayRegularHolidayOvertime,
    /// Fixed-tier overtime allowance (flat-allowance classes).
    OvertimeAllowance,
    /// Worked-hours allowance on a holiday (flat-allowance classes).
    HolidayWorkAllowance,
    /// Worked-hours allowance on a rest day (flat-allowance classes).
    RestDayWorkAllowance,
}

/// A single itemized earning line.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EarningLine, EarningCategory};
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
/// use std::str::FromStr;
///
/// let line = EarningLine {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     category: EarningCategory::Overtime,
///     hours: Decimal::from_str("2.0").unwrap(),
///     rate: Decimal::from_str("125.00").unwrap(),
///     amount: Decimal::from_str("250.00").unwrap(),
///     basis_ref: "Art. 87".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The date this line applies to.
    pub date: NaiveDate,
    /// The earning category.
    pub category: EarningCategory,
    /// Hours covered by this line; zero for pure flat amounts.
    pub hours: Decimal,
    /// The effective hourly rate, or the flat amount for tiered allowances.
    pub rate: Decimal,
    /// The amount payable for this line.
    pub amount: Decimal,
    /// The statute or policy this line is grounded on.
    pub basis_ref: String,
}

/// An hours/amount pair for one fixed breakdown bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayComponent {
    /// Hours attributed to this component.
    pub hours: Decimal,
    /// Amount attributed to this component.
    pub amount: Decimal,
}

impl PayComponent {
    /// Creates a component from its hours and amount.
    pub fn new(hours: Decimal, amount: Decimal) -> Self {
        Self { hours, amount }
    }

    /// Adds hours and amount into this component.
    pub fn accumulate(&mut self, hours: Decimal, amount: Decimal) {
        self.hours += hours;
        self.amount += amount;
    }
}

/// The folded pay breakdown for one employee over one pay period.
///
/// `basic_salary` is the authoritative figure; the fixed components
/// surface where the money came from, and holiday amounts already inside
/// `basic_salary` are display-only (not re-added into the gross total).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Days worked, derived from `max(base hours, actual hours) / 8`.
    pub days_worked: Decimal,
    /// The authoritative basic salary for the period.
    pub basic_salary: Decimal,
    /// Night differential on overtime (rank-and-file only).
    pub night_diff: PayComponent,
    /// Night differential on rest-day overtime (rank-and-file only).
    pub rest_day_night_diff: PayComponent,
    /// Regular-holiday pay.
    pub legal_holiday: PayComponent,
    /// Special non-working-day pay.
    pub special_holiday: PayComponent,
    /// Rest-day pay.
    pub rest_day: PayComponent,
    /// Itemized overtime lines.
    pub overtime_lines: Vec<EarningLine>,
    /// Flat-allowance lines (overtime/holiday/rest-day work allowances).
    pub other_pay_lines: Vec<EarningLine>,
    /// Gross pay for the period.
    pub total_gross_pay: Decimal,
}

impl PayBreakdown {
    /// Sum of all itemized overtime line amounts.
    pub fn overtime_total(&self) -> Decimal {
        self.overtime_lines.iter().map(|l| l.amount).sum()
    }

    /// Sum of all flat-allowance line amounts.
    pub fn other_pay_total(&self) -> Decimal {
        self.other_pay_lines.iter().map(|l| l.amount).sum()
    }
}

/// A single step in the audit trace recording a rule decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or policy the rule is grounded on.
    pub basis_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during computation.
///
/// Warnings record degradations (unparseable schedule strings, applied
/// corrections) that did not prevent the computation from completing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The date the warning relates to, when applicable.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// The complete audit trace for a computation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule decisions.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during computation.
    pub warnings: Vec<AuditWarning>,
    /// The total computation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one attendance-and-pay computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The ID of the employee the computation is for.
    pub employee_id: String,
    /// The pay period computed over.
    pub pay_period: PayPeriod,
    /// One resolved attendance record per calendar day in the period.
    pub attendance: Vec<AttendanceDay>,
    /// The folded pay breakdown.
    pub breakdown: PayBreakdown,
    /// Complete audit trace of rule decisions.
    pub audit_trace: AuditTrace,
}
