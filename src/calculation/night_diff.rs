//! Night-differential hours.
//!
//! Night hours are derived from approved overtime requests, never from raw
//! clock entries. Each request is intersected with the statutory night
//! window anchored to the request's `ot_date` (17:00 that evening until
//! 06:00 the next morning), splitting at midnight as needed.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::config::NightWindow;
use crate::models::{AuditWarning, OvertimeRequest, parse_clock_time};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Night hours carved out of a single overtime request.
#[derive(Debug, Clone, PartialEq)]
pub struct NightDiffResult {
    /// Hours inside the night window, in decimal hours.
    pub hours: Decimal,
    /// Set when the request's time strings could not be parsed.
    pub warning: Option<AuditWarning>,
}

impl NightDiffResult {
    fn zero() -> Self {
        NightDiffResult {
            hours: Decimal::ZERO,
            warning: None,
        }
    }
}

/// Computes the night-differential hours contributed by one overtime request.
///
/// The request interval runs from `start_time` on `ot_date` to `end_time` on
/// `end_date` (or on `ot_date` when no end date is given; an end time at or
/// before the start time is taken to mean the next morning). The interval is
/// clipped to the night window for `ot_date` and the overlap is returned in
/// decimal hours.
///
/// Unparseable time strings degrade to zero hours with a warning rather than
/// failing the whole computation.
pub fn overtime_night_hours(request: &OvertimeRequest, window: &NightWindow) -> NightDiffResult {
    let Some((window_start, window_end)) = window.window_for(request.ot_date) else {
        return NightDiffResult::zero();
    };

    let (Some(start_time), Some(end_time)) = (
        parse_clock_time(&request.start_time),
        parse_clock_time(&request.end_time),
    ) else {
        return NightDiffResult {
            hours: Decimal::ZERO,
            warning: Some(AuditWarning {
                code: "OT_TIME_PARSE".to_string(),
                message: format!(
                    "overtime request on {} has unparseable times '{}'..'{}'; night hours set to 0",
                    request.ot_date, request.start_time, request.end_time
                ),
                date: Some(request.ot_date),
            }),
        };
    };

    let start = request.ot_date.and_time(start_time);
    let mut end = request.end_date.unwrap_or(request.ot_date).and_time(end_time);
    if end <= start {
        end += Duration::days(1);
    }

    let overlap_start = start.max(window_start);
    let overlap_end = end.min(window_end);
    let minutes = (overlap_end - overlap_start).num_minutes().max(0);

    NightDiffResult {
        hours: Decimal::new(minutes, 0) / MINUTES_PER_HOUR,
        warning: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApprovalStatus;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn request(start: &str, end: &str, end_date: Option<&str>) -> OvertimeRequest {
        OvertimeRequest {
            ot_date: make_date("2026-01-05"),
            end_date: end_date.map(make_date),
            start_time: start.to_string(),
            end_time: end.to_string(),
            total_hours: dec("4"),
            status: ApprovalStatus::Approved,
        }
    }

    // ==========================================================================
    // ND-001: evening overtime fully inside the window
    // ==========================================================================
    #[test]
    fn test_nd_001_evening_overtime() {
        let result = overtime_night_hours(&request("18:00", "22:00", None), &NightWindow::default());
        assert_eq!(result.hours, dec("4"));
        assert!(result.warning.is_none());
    }

    // ==========================================================================
    // ND-002: overtime straddling the window start
    // ==========================================================================
    #[test]
    fn test_nd_002_straddles_window_start() {
        let result = overtime_night_hours(&request("14:00", "18:30", None), &NightWindow::default());
        assert_eq!(result.hours, dec("1.5"));
    }

    // ==========================================================================
    // ND-003: overtime entirely before the window
    // ==========================================================================
    #[test]
    fn test_nd_003_daytime_overtime() {
        let result = overtime_night_hours(&request("09:00", "12:00", None), &NightWindow::default());
        assert_eq!(result.hours, Decimal::ZERO);
    }

    // ==========================================================================
    // ND-004: explicit end date spanning midnight
    // ==========================================================================
    #[test]
    fn test_nd_004_spans_midnight() {
        let result = overtime_night_hours(
            &request("22:00", "02:00", Some("2026-01-06")),
            &NightWindow::default(),
        );
        assert_eq!(result.hours, dec("4"));
    }

    // ==========================================================================
    // ND-005: inverted times without an end date roll to the next morning
    // ==========================================================================
    #[test]
    fn test_nd_005_implied_overnight() {
        let result = overtime_night_hours(&request("22:00", "02:00", None), &NightWindow::default());
        assert_eq!(result.hours, dec("4"));
    }

    // ==========================================================================
    // ND-006: morning spill past 06:00 is clipped
    // ==========================================================================
    #[test]
    fn test_nd_006_clipped_at_window_end() {
        let result = overtime_night_hours(
            &request("21:00", "07:00", Some("2026-01-06")),
            &NightWindow::default(),
        );
        // 21:00..06:00 inside the window
        assert_eq!(result.hours, dec("9"));
    }

    // ==========================================================================
    // ND-007: full window coverage is 13 hours
    // ==========================================================================
    #[test]
    fn test_nd_007_full_window() {
        let result = overtime_night_hours(
            &request("16:00", "08:00", Some("2026-01-06")),
            &NightWindow::default(),
        );
        assert_eq!(result.hours, dec("13"));
    }

    // ==========================================================================
    // ND-008: unparseable times degrade to zero with a warning
    // ==========================================================================
    #[test]
    fn test_nd_008_unparseable_times() {
        let result = overtime_night_hours(&request("25:77", "26:00", None), &NightWindow::default());
        assert_eq!(result.hours, Decimal::ZERO);
        let warning = result.warning.expect("expected a parse warning");
        assert_eq!(warning.code, "OT_TIME_PARSE");
        assert_eq!(warning.date, Some(make_date("2026-01-05")));
        assert!(warning.message.contains("25:77"));
    }

    // ==========================================================================
    // ND-009: partial minutes convert exactly
    // ==========================================================================
    #[test]
    fn test_nd_009_partial_minutes() {
        let result = overtime_night_hours(&request("17:00", "18:45", None), &NightWindow::default());
        assert_eq!(result.hours, dec("1.75"));
    }

    // ==========================================================================
    // ND-010: early-morning request on its own date falls outside the window
    // ==========================================================================
    #[test]
    fn test_nd_010_morning_hours_belong_to_prior_window() {
        // 04:00..06:00 on the ot_date itself precedes that date's window,
        // which only opens at 17:00 the same evening.
        let result = overtime_night_hours(&request("04:00", "06:00", None), &NightWindow::default());
        assert_eq!(result.hours, Decimal::ZERO);
    }
}
