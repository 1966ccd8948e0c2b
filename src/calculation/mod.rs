//! Calculation logic for the attendance and payroll engine.
//!
//! This module contains the pure computation pipeline: day classification,
//! holiday-pay eligibility, night-differential derivation, attendance
//! resolution, the guaranteed-base-hours rule, the two pay-rule families
//! (statutory multipliers for rank-and-file, flat allowances for everyone
//! else), and the engine that folds them into a single result.

use rust_decimal::{Decimal, RoundingStrategy};

mod attendance;
mod base_pay;
mod day_classifier;
mod engine;
mod flat_allowance;
mod holiday_eligibility;
mod night_diff;
mod rank_and_file;

pub use attendance::{AttendanceInput, AttendanceOutcome, build_attendance};
pub use base_pay::{BasePayResult, compute_base_hours};
pub use day_classifier::{classify_day, effective_rest_day};
pub use engine::{EngineInput, compute};
pub use flat_allowance::{FlatDayContribution, flat_day_contribution};
pub use holiday_eligibility::{EligibilityBasis, assess_holiday_eligibility};
pub use night_diff::{NightDiffResult, overtime_night_hours};
pub use rank_and_file::{DayContribution, day_contribution};

/// Rounds a money amount to centavos, away from zero at the midpoint.
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
