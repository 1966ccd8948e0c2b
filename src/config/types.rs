//! Configuration types for the payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the aggregate
//! [`PayRulesConfig`] the engine computes against. `Default` carries the
//! statutory constants so the engine runs without any file on disk.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{DayType, Employee, EmployeeClass};

/// Pay multipliers for the rank-and-file rule family.
///
/// Worked-hours multipliers are applied to the hourly rate; the night
/// differential is an additive premium on top of the overtime rate.
#[derive(Debug, Clone, Deserialize)]
pub struct RateMultipliers {
    /// Additive night-differential premium (0.10 = +10%).
    pub night_diff: Decimal,
    /// Worked regular holiday (2.0 = 200%).
    pub regular_holiday: Decimal,
    /// Worked special non-working day (1.3 = 130%).
    pub special_holiday: Decimal,
    /// Worked rest day (1.3 = 130%).
    pub rest_day: Decimal,
    /// Worked special non-working day falling on a rest day.
    pub rest_day_special_holiday: Decimal,
    /// Worked regular holiday falling on a rest day.
    pub rest_day_regular_holiday: Decimal,
    /// Overtime on a regular workday (1.25 = 125%).
    pub overtime: Decimal,
    /// Overtime on a rest day or special non-working day.
    pub overtime_rest_or_special: Decimal,
    /// Overtime on a regular holiday.
    pub overtime_regular_holiday: Decimal,
    /// Overtime on a special non-working day falling on a rest day.
    pub overtime_rest_day_special_holiday: Decimal,
    /// Overtime on a regular holiday falling on a rest day.
    pub overtime_rest_day_regular_holiday: Decimal,
}

impl Default for RateMultipliers {
    fn default() -> Self {
        Self {
            night_diff: Decimal::new(10, 2),
            regular_holiday: Decimal::new(2, 0),
            special_holiday: Decimal::new(13, 1),
            rest_day: Decimal::new(13, 1),
            rest_day_special_holiday: Decimal::new(15, 1),
            rest_day_regular_holiday: Decimal::new(26, 1),
            overtime: Decimal::new(125, 2),
            overtime_rest_or_special: Decimal::new(169, 2),
            overtime_regular_holiday: Decimal::new(26, 1),
            overtime_rest_day_special_holiday: Decimal::new(195, 2),
            overtime_rest_day_regular_holiday: Decimal::new(338, 2),
        }
    }
}

/// Fixed-tier overtime allowance for the flat-allowance classes.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeAllowanceTiers {
    /// Minimum overtime hours before any allowance is paid.
    pub threshold_hours: Decimal,
    /// Flat amount paid once the threshold is reached.
    pub base_amount: Decimal,
    /// Amount paid per hour beyond the threshold.
    pub per_additional_hour: Decimal,
}

impl Default for OvertimeAllowanceTiers {
    fn default() -> Self {
        Self {
            threshold_hours: Decimal::new(2, 0),
            base_amount: Decimal::new(200, 0),
            per_additional_hour: Decimal::new(100, 0),
        }
    }
}

impl OvertimeAllowanceTiers {
    /// The allowance payable for `overtime_hours` of overtime.
    ///
    /// Below the threshold nothing is paid; at or above it the flat base is
    /// paid plus the per-hour amount for every hour beyond the threshold,
    /// fractional hours included.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::OvertimeAllowanceTiers;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let tiers = OvertimeAllowanceTiers::default();
    /// let dec = |s| Decimal::from_str(s).unwrap();
    /// assert_eq!(tiers.allowance_for(dec("1.5")), dec("0"));
    /// assert_eq!(tiers.allowance_for(dec("2.0")), dec("200"));
    /// assert_eq!(tiers.allowance_for(dec("3.5")), dec("350"));
    /// ```
    pub fn allowance_for(&self, overtime_hours: Decimal) -> Decimal {
        if overtime_hours < self.threshold_hours {
            return Decimal::ZERO;
        }
        self.base_amount + (overtime_hours - self.threshold_hours) * self.per_additional_hour
    }
}

/// Worked-hours allowance thresholds for holiday and rest-day work
/// (flat-allowance classes).
#[derive(Debug, Clone, Deserialize)]
pub struct WorkedHoursAllowance {
    /// Hours needed for the half-day allowance.
    pub half_day_hours: Decimal,
    /// Amount paid at the half-day threshold.
    pub half_day_amount: Decimal,
    /// Hours needed for the full-day allowance.
    pub full_day_hours: Decimal,
    /// Amount paid at the full-day threshold.
    pub full_day_amount: Decimal,
}

impl Default for WorkedHoursAllowance {
    fn default() -> Self {
        Self {
            half_day_hours: Decimal::new(4, 0),
            half_day_amount: Decimal::new(350, 0),
            full_day_hours: Decimal::new(8, 0),
            full_day_amount: Decimal::new(700, 0),
        }
    }
}

impl WorkedHoursAllowance {
    /// The allowance payable for `worked_hours` of work; no interpolation
    /// between thresholds.
    pub fn allowance_for(&self, worked_hours: Decimal) -> Decimal {
        if worked_hours >= self.full_day_hours {
            self.full_day_amount
        } else if worked_hours >= self.half_day_hours {
            self.half_day_amount
        } else {
            Decimal::ZERO
        }
    }
}

/// The guaranteed base-pay shape of a bi-monthly period.
#[derive(Debug, Clone, Deserialize)]
pub struct BasePayRules {
    /// Guaranteed paid days per bi-monthly period.
    pub guaranteed_days: u32,
    /// Paid hours per working day.
    pub day_hours: Decimal,
}

impl Default for BasePayRules {
    fn default() -> Self {
        Self {
            guaranteed_days: 13,
            day_hours: Decimal::new(8, 0),
        }
    }
}

impl BasePayRules {
    /// Total guaranteed hours per period (days times hours).
    pub fn guaranteed_hours(&self) -> Decimal {
        Decimal::from(self.guaranteed_days) * self.day_hours
    }
}

/// The night-differential window, running from the evening of one day into
/// the morning of the next.
#[derive(Debug, Clone, Deserialize)]
pub struct NightWindow {
    /// Hour the window opens, on the overtime date itself.
    pub start_hour: u32,
    /// Hour the window closes, on the following day.
    pub end_hour: u32,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start_hour: 17,
            end_hour: 6,
        }
    }
}

impl NightWindow {
    /// The concrete window for overtime dated `date`: `[date start_hour,
    /// date+1 end_hour]`. `None` only at the calendar edge.
    pub fn window_for(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = date.and_hms_opt(self.start_hour, 0, 0)?;
        let end = date.succ_opt()?.and_hms_opt(self.end_hour, 0, 0)?;
        Some((start, end))
    }
}

/// Title-matching rules used to resolve an employee's classification.
#[derive(Debug, Clone, Deserialize)]
pub struct TitlesConfig {
    /// Title keywords marking an office-based employee as supervisory or
    /// managerial; matched as case-insensitive substrings of the position.
    pub supervisory_titles: Vec<String>,
    /// `job_level` value that marks an employee managerial outright.
    pub managerial_job_level: String,
    /// Title keyword marking a client-based employee as account supervisor.
    pub account_supervisor_title: String,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            supervisory_titles: vec![
                "SUPERVISOR".to_string(),
                "MANAGER".to_string(),
                "DIRECTOR".to_string(),
                "TEAM LEADER".to_string(),
            ],
            managerial_job_level: "MANAGERIAL".to_string(),
            account_supervisor_title: "ACCOUNT SUPERVISOR".to_string(),
        }
    }
}

/// A dated basic-hours correction.
///
/// Corrections patch days that would otherwise derive zero basic hours
/// with no clock entries; they exist for payroll migration artifacts and
/// one-off proclamations, not as a general rule.
#[derive(Debug, Clone, Deserialize)]
pub struct DatedCorrection {
    /// The date the correction applies to.
    pub date: NaiveDate,
    /// The basic hours to force for that date.
    pub basic_hours: Decimal,
    /// Why the correction exists.
    pub reason: String,
}

/// Structure of `rules.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesFile {
    /// Rank-and-file pay multipliers.
    #[serde(default)]
    pub multipliers: RateMultipliers,
    /// Flat-allowance overtime tiers.
    #[serde(default)]
    pub overtime_allowance: OvertimeAllowanceTiers,
    /// Flat-allowance worked-hours thresholds.
    #[serde(default)]
    pub worked_hours_allowance: WorkedHoursAllowance,
    /// Guaranteed base-pay shape.
    #[serde(default)]
    pub base_pay: BasePayRules,
    /// Night-differential window.
    #[serde(default)]
    pub night_window: NightWindow,
}

/// Structure of `titles.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitlesFile {
    /// Title-matching rules.
    #[serde(default)]
    pub titles: TitlesConfig,
}

/// Structure of `corrections.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectionsFile {
    /// Dated basic-hours corrections.
    #[serde(default)]
    pub corrections: Vec<DatedCorrection>,
}

/// The complete pay-rules configuration the engine computes against.
///
/// Built either from YAML files via `ConfigLoader` or from `Default`,
/// which embeds the statutory constants.
#[derive(Debug, Clone, Default)]
pub struct PayRulesConfig {
    multipliers: RateMultipliers,
    overtime_allowance: OvertimeAllowanceTiers,
    worked_hours_allowance: WorkedHoursAllowance,
    base_pay: BasePayRules,
    night_window: NightWindow,
    titles: TitlesConfig,
    corrections: Vec<DatedCorrection>,
}

impl PayRulesConfig {
    /// Creates a configuration from its component parts.
    pub fn new(rules: RulesFile, titles: TitlesFile, corrections: CorrectionsFile) -> Self {
        Self {
            multipliers: rules.multipliers,
            overtime_allowance: rules.overtime_allowance,
            worked_hours_allowance: rules.worked_hours_allowance,
            base_pay: rules.base_pay,
            night_window: rules.night_window,
            titles: titles.titles,
            corrections: corrections.corrections,
        }
    }

    /// Returns the rank-and-file pay multipliers.
    pub fn multipliers(&self) -> &RateMultipliers {
        &self.multipliers
    }

    /// Returns the flat-allowance overtime tiers.
    pub fn overtime_allowance(&self) -> &OvertimeAllowanceTiers {
        &self.overtime_allowance
    }

    /// Returns the flat-allowance worked-hours thresholds.
    pub fn worked_hours_allowance(&self) -> &WorkedHoursAllowance {
        &self.worked_hours_allowance
    }

    /// Returns the guaranteed base-pay shape.
    pub fn base_pay(&self) -> &BasePayRules {
        &self.base_pay
    }

    /// Returns the night-differential window.
    pub fn night_window(&self) -> &NightWindow {
        &self.night_window
    }

    /// Returns the title-matching rules.
    pub fn titles(&self) -> &TitlesConfig {
        &self.titles
    }

    /// Returns the dated corrections table.
    pub fn corrections(&self) -> &[DatedCorrection] {
        &self.corrections
    }

    /// Looks up the dated correction for `date`, if one is configured.
    pub fn correction_for(&self, date: NaiveDate) -> Option<&DatedCorrection> {
        self.corrections.iter().find(|c| c.date == date)
    }

    /// Resolves the employee's classification from the raw record.
    ///
    /// Client-based employees are account supervisors when their position
    /// carries the account-supervisor title, otherwise client-regular.
    /// Office-based employees are supervisory when the `job_level` matches
    /// the managerial marker or the position contains any supervisory title
    /// keyword (case-insensitive substring, no fuzzy matching); everyone
    /// else is rank-and-file.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::PayRulesConfig;
    /// use payroll_engine::models::{Employee, EmployeeClass};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let config = PayRulesConfig::default();
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     position: "HR Supervisor".to_string(),
    ///     job_level: String::new(),
    ///     rate_per_day: Decimal::new(1000, 0),
    ///     client_based: false,
    ///     hire_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     termination_date: None,
    /// };
    /// assert_eq!(config.employee_class(&employee), EmployeeClass::Supervisory);
    /// ```
    pub fn employee_class(&self, employee: &Employee) -> EmployeeClass {
        let position = employee.position.trim().to_uppercase();
        if employee.client_based {
            if position.contains(&self.titles.account_supervisor_title.to_uppercase()) {
                EmployeeClass::AccountSupervisor
            } else {
                EmployeeClass::ClientRegular
            }
        } else if employee
            .job_level
            .trim()
            .eq_ignore_ascii_case(&self.titles.managerial_job_level)
            || self
                .titles
                .supervisory_titles
                .iter()
                .any(|title| position.contains(&title.to_uppercase()))
        {
            EmployeeClass::Supervisory
        } else {
            EmployeeClass::RankAndFile
        }
    }

    /// The worked-hours premium multiplier for a day type; `1.0` for plain
    /// workdays.
    pub fn premium_multiplier(&self, day_type: DayType) -> Decimal {
        match day_type {
            DayType::Regular | DayType::SaturdayRegularWorkday => Decimal::ONE,
            DayType::Sunday => self.multipliers.rest_day,
            DayType::RegularHoliday => self.multipliers.regular_holiday,
            DayType::NonWorkingHoliday => self.multipliers.special_holiday,
            DayType::SundayRegularHoliday => self.multipliers.rest_day_regular_holiday,
            DayType::SundaySpecialHoliday => self.multipliers.rest_day_special_holiday,
        }
    }

    /// The overtime multiplier for a day type.
    pub fn overtime_multiplier(&self, day_type: DayType) -> Decimal {
        match day_type {
            DayType::Regular | DayType::SaturdayRegularWorkday => self.multipliers.overtime,
            DayType::Sunday | DayType::NonWorkingHoliday => {
                self.multipliers.overtime_rest_or_special
            }
            DayType::RegularHoliday => self.multipliers.overtime_regular_holiday,
            DayType::SundaySpecialHoliday => self.multipliers.overtime_rest_day_special_holiday,
            DayType::SundayRegularHoliday => self.multipliers.overtime_rest_day_regular_holiday,
        }
    }
}
