//! Flat-allowance pay rules.
//!
//! Client-based, account-supervisor and supervisory/managerial employees are
//! outside the statutory multiplier scheme. Holiday and rest-day pay, when
//! earned, is always the full daily rate with no proration, overtime pays a
//! fixed-tier allowance instead of a multiplier, and worked hours on a
//! holiday or rest day earn a threshold allowance. Night differential is
//! never paid to this class.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use crate::config::PayRulesConfig;
use crate::models::{
    AttendanceDay, AuditStep, DayStatus, EarningCategory, EarningLine, Employee, PayComponent,
};

use super::round_money;

/// One day's pay effects for a flat-allowance employee.
#[derive(Debug, Clone, Default)]
pub struct FlatDayContribution {
    /// Hours counted toward actual basic hours.
    pub countable_hours: Decimal,
    /// Regular-holiday pay, full display value (paid through basic).
    pub legal_holiday: PayComponent,
    /// Special non-working-day pay, full display value (paid through basic).
    pub special_holiday: PayComponent,
    /// Rest-day pay, full display value.
    pub rest_day: PayComponent,
    /// The rest-day top-up actually added to gross, beyond basic.
    pub gross_addition: Decimal,
    /// Itemized allowance lines.
    pub other_pay_lines: Vec<EarningLine>,
    /// Audit records, one per rule fired.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the pay effects of one attendance day under flat-allowance rules.
///
/// An eligible holiday is already worth the full daily rate through its
/// credited basic hours, so holidays add nothing to gross here. A worked
/// rest day is topped up to exactly the daily rate when the worked hours
/// alone fall short. Days after `today` contribute nothing.
pub fn flat_day_contribution(
    day: &AttendanceDay,
    entry_worked: Decimal,
    employee: &Employee,
    config: &PayRulesConfig,
    today: NaiveDate,
    first_step: u32,
) -> FlatDayContribution {
    let mut contribution = FlatDayContribution::default();
    if day.date > today {
        return contribution;
    }

    contribution.countable_hours = match day.status {
        DayStatus::Rd | DayStatus::Lwop | DayStatus::Cto | DayStatus::Ob => Decimal::ZERO,
        _ => day.basic_hours,
    };

    let hourly = employee.rate_per_hour();
    let mut step_number = first_step;

    if day.day_type.is_holiday() {
        if !day.basic_hours.is_zero() {
            let amount = round_money(day.basic_hours * hourly);
            let component = PayComponent::new(day.basic_hours, amount);
            if day.day_type.is_regular_holiday() {
                contribution.legal_holiday = component;
            } else {
                contribution.special_holiday = component;
            }
            contribution.audit_steps.push(AuditStep {
                step_number,
                rule_id: "flat_holiday_pay".to_string(),
                rule_name: "Flat Holiday Pay".to_string(),
                basis_ref: "Art. 94".to_string(),
                input: json!({
                    "date": day.date.to_string(),
                    "day_type": day.day_type.to_string(),
                    "basic_hours": day.basic_hours.normalize().to_string(),
                    "daily_rate": employee.rate_per_day.normalize().to_string(),
                }),
                output: json!({
                    "amount": amount.normalize().to_string(),
                }),
                reasoning: format!(
                    "Flat holiday pay on {}: full daily rate ₱{} paid through basic",
                    day.day_type,
                    amount.normalize()
                ),
            });
            step_number += 1;
        }

        if !entry_worked.is_zero() {
            step_number = push_work_allowance(
                &mut contribution,
                day,
                entry_worked,
                EarningCategory::HolidayWorkAllowance,
                config,
                step_number,
            );
        }
    } else if day.day_type.is_rest_day() && !entry_worked.is_zero() {
        let worked_value = round_money(entry_worked * hourly);
        let top_up = (employee.rate_per_day - worked_value).max(Decimal::ZERO);
        contribution.rest_day = PayComponent::new(entry_worked, worked_value + top_up);
        contribution.gross_addition = top_up;
        contribution.audit_steps.push(AuditStep {
            step_number,
            rule_id: "flat_rest_day_pay".to_string(),
            rule_name: "Flat Rest Day Pay".to_string(),
            basis_ref: "Art. 93".to_string(),
            input: json!({
                "date": day.date.to_string(),
                "worked_hours": entry_worked.normalize().to_string(),
                "daily_rate": employee.rate_per_day.normalize().to_string(),
            }),
            output: json!({
                "amount": (worked_value + top_up).normalize().to_string(),
                "top_up": top_up.normalize().to_string(),
            }),
            reasoning: format!(
                "Flat rest-day pay: {} worked hours topped up to ₱{} (₱{} inside basic pay, ₱{} top-up)",
                entry_worked.normalize(),
                (worked_value + top_up).normalize(),
                worked_value.normalize(),
                top_up.normalize()
            ),
        });
        step_number += 1;

        step_number = push_work_allowance(
            &mut contribution,
            day,
            entry_worked,
            EarningCategory::RestDayWorkAllowance,
            config,
            step_number,
        );
    }

    if !day.overtime_hours.is_zero() {
        let tiers = config.overtime_allowance();
        let amount = tiers.allowance_for(day.overtime_hours);
        if !amount.is_zero() {
            contribution.other_pay_lines.push(EarningLine {
                date: day.date,
                category: EarningCategory::OvertimeAllowance,
                hours: Decimal::ZERO,
                rate: amount,
                amount,
                basis_ref: "policy ot-allowance".to_string(),
            });
        }
        contribution.audit_steps.push(AuditStep {
            step_number,
            rule_id: "overtime_allowance".to_string(),
            rule_name: "Overtime Allowance".to_string(),
            basis_ref: "policy ot-allowance".to_string(),
            input: json!({
                "date": day.date.to_string(),
                "overtime_hours": day.overtime_hours.normalize().to_string(),
                "threshold_hours": tiers.threshold_hours.normalize().to_string(),
            }),
            output: json!({
                "amount": amount.normalize().to_string(),
            }),
            reasoning: format!(
                "Overtime allowance for {} hours = ₱{}",
                day.overtime_hours.normalize(),
                amount.normalize()
            ),
        });
    }

    contribution
}

fn push_work_allowance(
    contribution: &mut FlatDayContribution,
    day: &AttendanceDay,
    entry_worked: Decimal,
    category: EarningCategory,
    config: &PayRulesConfig,
    step_number: u32,
) -> u32 {
    let amount = config.worked_hours_allowance().allowance_for(entry_worked);
    if amount.is_zero() {
        return step_number;
    }
    contribution.other_pay_lines.push(EarningLine {
        date: day.date,
        category,
        hours: Decimal::ZERO,
        rate: amount,
        amount,
        basis_ref: "policy work-allowance".to_string(),
    });
    contribution.audit_steps.push(AuditStep {
        step_number,
        rule_id: "worked_hours_allowance".to_string(),
        rule_name: "Worked Hours Allowance".to_string(),
        basis_ref: "policy work-allowance".to_string(),
        input: json!({
            "date": day.date.to_string(),
            "day_type": day.day_type.to_string(),
            "worked_hours": entry_worked.normalize().to_string(),
        }),
        output: json!({
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "Worked-hours allowance for {} hours on {} = ₱{}",
            entry_worked.normalize(),
            day.day_type,
            amount.normalize()
        ),
    });
    step_number + 1
}
