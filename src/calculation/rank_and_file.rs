//! Rank-and-file pay rules.
//!
//! Statutory multiplier arithmetic for hourly-premium employees: holiday and
//! rest-day premiums, night differential at 10%, and itemized overtime lines
//! at the day-type multiplier.
//!
//! Basic pay already absorbs one base hourly share for every hour counted
//! toward it, so worked premium days contribute only the share above 100%
//! to gross pay; fully excluded days (the unworked rest day) contribute the
//! whole premium. Display components always carry the full value of the day
//! so the breakdown reads like a payslip.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use crate::config::PayRulesConfig;
use crate::models::{
    AttendanceDay, AuditStep, DayStatus, DayType, EarningCategory, EarningLine, Employee,
    PayComponent,
};

use super::round_money;

/// One day's pay effects for a rank-and-file employee.
#[derive(Debug, Clone, Default)]
pub struct DayContribution {
    /// Hours counted toward actual basic hours (and so toward basic pay).
    pub countable_hours: Decimal,
    /// Night differential earned on ordinary days.
    pub night_diff: PayComponent,
    /// Night differential earned on rest days.
    pub rest_day_night_diff: PayComponent,
    /// Regular-holiday pay, full display value.
    pub legal_holiday: PayComponent,
    /// Special non-working-day pay, full display value.
    pub special_holiday: PayComponent,
    /// Rest-day pay, full display value.
    pub rest_day: PayComponent,
    /// The premium share actually added to gross pay, beyond basic.
    pub gross_premium: Decimal,
    /// Itemized overtime lines.
    pub overtime_lines: Vec<EarningLine>,
    /// Audit records, one per rule fired.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the pay effects of one attendance day.
///
/// `entry_worked` is the entry-derived basic hours for the date; premium
/// arithmetic always runs on hours actually worked, never on credited or
/// guaranteed hours, except for the unworked rest day whose guaranteed hours
/// are paid at the rest-day multiplier. Days after `today` contribute
/// nothing.
pub fn day_contribution(
    day: &AttendanceDay,
    entry_worked: Decimal,
    employee: &Employee,
    config: &PayRulesConfig,
    today: NaiveDate,
    first_step: u32,
) -> DayContribution {
    let mut contribution = DayContribution::default();
    if day.date > today {
        return contribution;
    }

    contribution.countable_hours = match day.status {
        DayStatus::Rd | DayStatus::Lwop | DayStatus::Cto | DayStatus::Ob => Decimal::ZERO,
        _ => day.basic_hours,
    };

    let hourly = employee.rate_per_hour();
    let mut step_number = first_step;

    let multiplier = config.premium_multiplier(day.day_type);
    if multiplier > Decimal::ONE {
        let premium_hours = if day.status == DayStatus::Rd {
            day.basic_hours
        } else {
            entry_worked
        };
        let in_basic = !contribution.countable_hours.is_zero();
        let premium_factor = if in_basic {
            multiplier - Decimal::ONE
        } else {
            multiplier
        };
        let premium = round_money(premium_hours * hourly * premium_factor);
        let basic_share = round_money(contribution.countable_hours * hourly);
        let display_hours = day.basic_hours.max(entry_worked);
        let display_amount = basic_share + premium;
        contribution.gross_premium = premium;

        let (component, basis_ref, rule_id, rule_name) = if day.day_type.is_regular_holiday() {
            (
                &mut contribution.legal_holiday,
                "Art. 94",
                "regular_holiday_pay",
                "Regular Holiday Pay",
            )
        } else if day.day_type.is_special_holiday() {
            (
                &mut contribution.special_holiday,
                "Art. 94",
                "special_holiday_pay",
                "Special Holiday Pay",
            )
        } else {
            (
                &mut contribution.rest_day,
                "Art. 93",
                "rest_day_pay",
                "Rest Day Pay",
            )
        };

        let show_component = if day.day_type.is_holiday() {
            !day.basic_hours.is_zero() || !entry_worked.is_zero()
        } else {
            day.status == DayStatus::Rd || !entry_worked.is_zero()
        };

        if show_component {
            *component = PayComponent::new(display_hours, display_amount);
            contribution.audit_steps.push(AuditStep {
                step_number,
                rule_id: rule_id.to_string(),
                rule_name: rule_name.to_string(),
                basis_ref: basis_ref.to_string(),
                input: json!({
                    "date": day.date.to_string(),
                    "day_type": day.day_type.to_string(),
                    "status": day.status.to_string(),
                    "basic_hours": day.basic_hours.normalize().to_string(),
                    "worked_hours": entry_worked.normalize().to_string(),
                    "hourly_rate": hourly.normalize().to_string(),
                    "multiplier": multiplier.normalize().to_string(),
                }),
                output: json!({
                    "display_amount": display_amount.normalize().to_string(),
                    "gross_premium": premium.normalize().to_string(),
                }),
                reasoning: format!(
                    "{}: {} hours × ₱{} × {} = ₱{} (₱{} inside basic pay, ₱{} premium)",
                    rule_name,
                    display_hours.normalize(),
                    hourly.normalize(),
                    multiplier.normalize(),
                    display_amount.normalize(),
                    basic_share.normalize(),
                    premium.normalize()
                ),
            });
            step_number += 1;
        }
    }

    if !day.night_diff_hours.is_zero() {
        let nd_rate = config.multipliers().night_diff;
        let amount = round_money(day.night_diff_hours * hourly * nd_rate);
        let component = PayComponent::new(day.night_diff_hours, amount);
        let on_rest_day = day.day_type.is_rest_day();
        if on_rest_day {
            contribution.rest_day_night_diff = component;
        } else {
            contribution.night_diff = component;
        }
        contribution.audit_steps.push(AuditStep {
            step_number,
            rule_id: "night_differential".to_string(),
            rule_name: "Night Differential".to_string(),
            basis_ref: "Art. 86".to_string(),
            input: json!({
                "date": day.date.to_string(),
                "night_hours": day.night_diff_hours.normalize().to_string(),
                "hourly_rate": hourly.normalize().to_string(),
                "night_diff_rate": nd_rate.normalize().to_string(),
                "rest_day": on_rest_day,
            }),
            output: json!({
                "amount": amount.normalize().to_string(),
            }),
            reasoning: format!(
                "Night differential: {} hours × ₱{} × {} = ₱{}",
                day.night_diff_hours.normalize(),
                hourly.normalize(),
                nd_rate.normalize(),
                amount.normalize()
            ),
        });
        step_number += 1;
    }

    if !day.overtime_hours.is_zero() {
        let multiplier = config.overtime_multiplier(day.day_type);
        let rate = round_money(hourly * multiplier);
        let amount = round_money(day.overtime_hours * hourly * multiplier);
        let category = overtime_category(day.day_type);
        contribution.overtime_lines.push(EarningLine {
            date: day.date,
            category,
            hours: day.overtime_hours,
            rate,
            amount,
            basis_ref: "Art. 87".to_string(),
        });
        contribution.audit_steps.push(AuditStep {
            step_number,
            rule_id: "overtime_pay".to_string(),
            rule_name: "Overtime Pay".to_string(),
            basis_ref: "Art. 87".to_string(),
            input: json!({
                "date": day.date.to_string(),
                "day_type": day.day_type.to_string(),
                "overtime_hours": day.overtime_hours.normalize().to_string(),
                "hourly_rate": hourly.normalize().to_string(),
                "multiplier": multiplier.normalize().to_string(),
            }),
            output: json!({
                "amount": amount.normalize().to_string(),
            }),
            reasoning: format!(
                "Overtime on {}: {} hours × ₱{} × {} = ₱{}",
                day.day_type,
                day.overtime_hours.normalize(),
                hourly.normalize(),
                multiplier.normalize(),
                amount.normalize()
            ),
        });
    }

    contribution
}

fn overtime_category(day_type: DayType) -> EarningCategory {
    match day_type {
        DayType::Regular | DayType::SaturdayRegularWorkday => EarningCategory::Overtime,
        DayType::Sunday => EarningCategory::RestDayOvertime,
        DayType::NonWorkingHoliday => EarningCategory::SpecialHolidayOvertime,
        DayType::RegularHoliday => EarningCategory::RegularHolidayOvertime,
        DayType::SundaySpecialHoliday => EarningCategory::RestDaySpecialHolidayOvertime,
        DayType::SundayRegularHoliday => EarningCategory::RestDayRegularHolidayOvertime,
    }
}
