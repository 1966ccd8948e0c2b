//! Guaranteed base hours.
//!
//! Pay periods start from a guaranteed block of hours (13 days of 8 hours by
//! default) and lose a day's worth for every absence, rather than summing
//! worked days up from zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use crate::config::PayRulesConfig;
use crate::models::{AttendanceDay, AuditStep, DayStatus, Employee};

/// The guaranteed-hours deduction outcome for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePayResult {
    /// Guaranteed hours after absence deductions, floored at zero.
    pub base_hours: Decimal,
    /// Countable absences inside the employment window.
    pub absences: u32,
    /// The audit record for the deduction.
    pub audit_step: AuditStep,
}

/// Applies the absence deduction to the guaranteed period hours.
///
/// Only `ABSENT` days on or before the as-of date count, and only while the
/// employee was actually employed; days before hire or after termination
/// never deduct.
pub fn compute_base_hours(
    days: &[AttendanceDay],
    employee: &Employee,
    today: NaiveDate,
    config: &PayRulesConfig,
    step_number: u32,
) -> BasePayResult {
    let rules = config.base_pay();
    let guaranteed = rules.guaranteed_hours();

    let absences = days
        .iter()
        .filter(|day| {
            day.status == DayStatus::Absent && day.date <= today && employee.employed_on(day.date)
        })
        .count() as u32;

    let deduction = Decimal::from(absences) * rules.day_hours;
    let base_hours = (guaranteed - deduction).max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "guaranteed_base_hours".to_string(),
        rule_name: "Guaranteed Base Hours".to_string(),
        basis_ref: "policy 104-hour".to_string(),
        input: json!({
            "guaranteed_days": rules.guaranteed_days,
            "day_hours": rules.day_hours.normalize().to_string(),
            "absences": absences,
        }),
        output: json!({
            "base_hours": base_hours.normalize().to_string(),
        }),
        reasoning: format!(
            "Guaranteed base: {} hours - {} absence(s) × {} hours = {} hours",
            guaranteed.normalize(),
            absences,
            rules.day_hours.normalize(),
            base_hours.normalize()
        ),
    };

    BasePayResult {
        base_hours,
        absences,
        audit_step,
    }
}
