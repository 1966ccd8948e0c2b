//! Employee model and classification types.
//!
//! This module defines the Employee record consumed by the engine and the
//! closed `EmployeeClass` variant that selects which pay-rule family
//! applies to a computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The number of paid hours in a standard working day.
pub const STANDARD_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The closed set of employee classifications the pay rules branch on.
///
/// The classification is resolved once per computation from the raw
/// employee record (see `PayRulesConfig::employee_class`) and is immutable
/// for the duration of that computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeClass {
    /// Office-based rank-and-file: standard multiplier law (night
    /// differential, holiday and rest-day multipliers, itemized overtime).
    RankAndFile,
    /// Office-based supervisory or managerial: flat-allowance law.
    Supervisory,
    /// Client-based regular: flat-allowance law; Sunday is not an implicit
    /// rest day.
    ClientRegular,
    /// Client-based account supervisor: flat-allowance law with an explicit
    /// weekly rest-day schedule.
    AccountSupervisor,
}

impl EmployeeClass {
    /// Returns true if this classification is paid under the flat-allowance
    /// rule family instead of the standard multiplier law.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeClass;
    ///
    /// assert!(!EmployeeClass::RankAndFile.is_flat_allowance());
    /// assert!(EmployeeClass::Supervisory.is_flat_allowance());
    /// assert!(EmployeeClass::ClientRegular.is_flat_allowance());
    /// assert!(EmployeeClass::AccountSupervisor.is_flat_allowance());
    /// ```
    pub fn is_flat_allowance(&self) -> bool {
        !matches!(self, EmployeeClass::RankAndFile)
    }

    /// Returns true if this classification is deployed at a client site.
    ///
    /// Client-based employees never get Sunday as an implicit rest day;
    /// only an explicit schedule flag makes a date a rest day for them.
    pub fn is_client_based(&self) -> bool {
        matches!(
            self,
            EmployeeClass::ClientRegular | EmployeeClass::AccountSupervisor
        )
    }
}

impl std::fmt::Display for EmployeeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeClass::RankAndFile => write!(f, "rank-and-file"),
            EmployeeClass::Supervisory => write!(f, "supervisory"),
            EmployeeClass::ClientRegular => write!(f, "client-regular"),
            EmployeeClass::AccountSupervisor => write!(f, "account-supervisor"),
        }
    }
}

/// An employee record as provided by the external HR system.
///
/// The engine only reads this record; classification is derived from the
/// position title, job level and client-based flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's position title (e.g. "HR Assistant").
    pub position: String,
    /// The employee's job level (e.g. "MANAGERIAL"); empty when not set.
    #[serde(default)]
    pub job_level: String,
    /// The agreed daily rate of pay.
    pub rate_per_day: Decimal,
    /// Whether the employee is deployed at a client site.
    #[serde(default)]
    pub client_based: bool,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date employment ended, if it has.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns the hourly rate derived from the daily rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     position: "Billing Associate".to_string(),
    ///     job_level: String::new(),
    ///     rate_per_day: Decimal::new(800, 0),
    ///     client_based: false,
    ///     hire_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     termination_date: None,
    /// };
    /// assert_eq!(employee.rate_per_hour(), Decimal::new(100, 0));
    /// ```
    pub fn rate_per_hour(&self) -> Decimal {
        self.rate_per_day / STANDARD_DAY_HOURS
    }

    /// Returns true if `date` falls within the employment window.
    ///
    /// The window starts at the hire date and ends at the termination date
    /// when one is set, both inclusive.
    pub fn employed_on(&self, date: NaiveDate) -> bool {
        if date < self.hire_date {
            return false;
        }
        match self.termination_date {
            Some(end) => date <= end,
            None => true,
        }
    }
}
