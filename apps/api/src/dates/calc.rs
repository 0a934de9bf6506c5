//! Calendar arithmetic over `YYYY-MM-DD` strings.
//!
//! All results are relative to the `today` argument. Nothing here reads the
//! wall clock, so every function is deterministic under test.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage format for every configured date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Share of calendar days assumed to be working days (weekends and holidays
/// take the remaining ~30%).
const WORKING_DAY_RATIO: f64 = 0.7;
const HOURS_PER_WORKING_DAY: i64 = 8;

#[derive(Debug, Error)]
pub enum DateMathError {
    #[error("invalid date '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid timeline event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}

/// Calendar-aware difference between a date and today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub total_months: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityStats {
    pub total_days: i64,
    pub total_months: i64,
    pub total_years: i64,
    pub working_days_estimate: i64,
    pub working_hours_estimate: i64,
    pub weeks: i64,
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateMathError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| DateMathError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Whole anniversaries elapsed between `since` and `today`. Can be negative.
fn anniversaries(since: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - since.year();
    if (today.month(), today.day()) < (since.month(), since.day()) {
        years - 1
    } else {
        years
    }
}

/// Age in completed years. No clamping: a future birth date yields a negative age.
pub fn age_in_years(birth_date: &str, today: NaiveDate) -> Result<i32, DateMathError> {
    let birth = parse_date(birth_date)?;
    Ok(anniversaries(birth, today))
}

/// Years of experience, never less than 1.
pub fn experience_years(start_date: &str, today: NaiveDate) -> Result<i32, DateMathError> {
    let start = parse_date(start_date)?;
    Ok(anniversaries(start, today).max(1))
}

/// Whole days from `date` to `today`; negative when `date` is in the future.
pub fn days_since(date: &str, today: NaiveDate) -> Result<i64, DateMathError> {
    let date = parse_date(date)?;
    Ok((today - date).num_days())
}

/// Completed months from `date` to `today`, clamped to 0.
pub fn months_since(date: &str, today: NaiveDate) -> Result<i64, DateMathError> {
    let date = parse_date(date)?;
    let mut months = i64::from(today.year() - date.year()) * 12
        + (i64::from(today.month()) - i64::from(date.month()));
    if today.day() < date.day() {
        months -= 1;
    }
    Ok(months.max(0))
}

fn days_in_month(year: i32, month: u32) -> i32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as i32,
        _ => 31,
    }
}

/// Years, months and days elapsed since `date`.
///
/// A negative day component borrows the length of the month preceding
/// today's month (31 when today is in January), whichever month the gap
/// actually spans.
pub fn detailed_breakdown(date: &str, today: NaiveDate) -> Result<Breakdown, DateMathError> {
    let since = parse_date(date)?;

    let mut years = today.year() - since.year();
    let mut months = today.month() as i32 - since.month() as i32;
    let mut days = today.day() as i32 - since.day() as i32;

    if days < 0 {
        months -= 1;
        let borrowed = if today.month() == 1 {
            31
        } else {
            days_in_month(today.year(), today.month() - 1)
        };
        days += borrowed;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Breakdown {
        years,
        months,
        days,
        total_days: (today - since).num_days(),
        total_months: years * 12 + months,
    })
}

pub fn detailed_age(birth_date: &str, today: NaiveDate) -> Result<Breakdown, DateMathError> {
    detailed_breakdown(birth_date, today)
}

pub fn detailed_experience(start_date: &str, today: NaiveDate) -> Result<Breakdown, DateMathError> {
    detailed_breakdown(start_date, today)
}

/// Heuristic working-time figures derived from elapsed calendar days.
pub fn productivity_stats(
    start_date: &str,
    today: NaiveDate,
) -> Result<ProductivityStats, DateMathError> {
    let total_days = days_since(start_date, today)?;
    let total_months = months_since(start_date, today)?;
    let working_days_estimate = (total_days as f64 * WORKING_DAY_RATIO).floor() as i64;

    Ok(ProductivityStats {
        total_days,
        total_months,
        total_years: total_months / 12,
        working_days_estimate,
        working_hours_estimate: working_days_estimate * HOURS_PER_WORKING_DAY,
        weeks: total_days.div_euclid(7),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_in_years("2005-05-21", day("2024-05-20")).unwrap(), 18);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_in_years("2005-05-21", day("2024-05-21")).unwrap(), 19);
    }

    #[test]
    fn test_age_future_birth_is_negative() {
        assert_eq!(age_in_years("2030-01-01", day("2024-06-01")).unwrap(), -6);
    }

    #[test]
    fn test_age_leap_day_birth() {
        // Feb 29 birthday counts as reached on Mar 1 in non-leap years.
        assert_eq!(age_in_years("2004-02-29", day("2023-02-28")).unwrap(), 18);
        assert_eq!(age_in_years("2004-02-29", day("2023-03-01")).unwrap(), 19);
    }

    #[test]
    fn test_experience_floored_before_first_anniversary() {
        assert_eq!(experience_years("2021-02-05", day("2022-01-01")).unwrap(), 1);
    }

    #[test]
    fn test_experience_floor_for_today_and_future() {
        let today = day("2024-03-10");
        assert_eq!(experience_years("2024-03-10", today).unwrap(), 1);
        assert_eq!(experience_years("2027-01-01", today).unwrap(), 1);
    }

    #[test]
    fn test_experience_counts_anniversaries() {
        assert_eq!(experience_years("2021-02-05", day("2024-02-05")).unwrap(), 3);
        assert_eq!(experience_years("2021-02-05", day("2024-02-04")).unwrap(), 2);
    }

    #[test]
    fn test_days_since_sign() {
        let today = day("2024-05-20");
        assert!(days_since("2024-05-01", today).unwrap() > 0);
        assert_eq!(days_since("2024-05-20", today).unwrap(), 0);
        assert_eq!(days_since("2024-05-22", today).unwrap(), -2);
    }

    #[test]
    fn test_months_since_partial_month_not_counted() {
        let today = day("2024-02-04");
        assert_eq!(months_since("2021-02-05", today).unwrap(), 35);
        assert_eq!(months_since("2021-02-04", today).unwrap(), 36);
    }

    #[test]
    fn test_months_since_future_clamped() {
        assert_eq!(months_since("2030-12-31", day("2024-01-01")).unwrap(), 0);
    }

    #[test]
    fn test_breakdown_borrow_case() {
        let b = detailed_breakdown("2021-02-05", day("2024-02-04")).unwrap();
        assert_eq!((b.years, b.months, b.days), (2, 11, 30));
        assert_eq!(b.total_months, 35);
        assert_eq!(b.total_days, 1094);
    }

    #[test]
    fn test_breakdown_january_borrows_31() {
        let b = detailed_breakdown("2023-12-15", day("2024-01-10")).unwrap();
        assert_eq!((b.years, b.months, b.days), (0, 0, 26));
    }

    #[test]
    fn test_breakdown_borrows_previous_month_of_today() {
        // Today is March in a leap year: the borrow adds February's 29 days,
        // which is not enough to cover a 31st-of-month start.
        let b = detailed_breakdown("2024-01-31", day("2024-03-01")).unwrap();
        assert_eq!((b.years, b.months, b.days), (0, 1, -1));
        assert_eq!(b.total_days, 30);
    }

    #[test]
    fn test_breakdown_total_months_invariant() {
        let today = day("2026-10-16");
        for date in ["2005-05-21", "2021-02-05", "2019-12-31", "2026-10-17", "2026-01-01"] {
            let b = detailed_breakdown(date, today).unwrap();
            assert_eq!(b.total_months, b.years * 12 + b.months, "date {date}");
        }
    }

    #[test]
    fn test_detailed_aliases_match_breakdown() {
        let today = day("2025-07-09");
        let base = detailed_breakdown("2005-05-21", today).unwrap();
        assert_eq!(detailed_age("2005-05-21", today).unwrap(), base);
        assert_eq!(detailed_experience("2005-05-21", today).unwrap(), base);
    }

    #[test]
    fn test_productivity_stats() {
        // 2021-02-05 .. 2024-02-04 is 1094 days.
        let stats = productivity_stats("2021-02-05", day("2024-02-04")).unwrap();
        assert_eq!(stats.total_days, 1094);
        assert_eq!(stats.total_months, 35);
        assert_eq!(stats.total_years, 2);
        assert_eq!(stats.working_days_estimate, 765);
        assert_eq!(stats.working_hours_estimate, 765 * 8);
        assert_eq!(stats.weeks, 156);
    }

    #[test]
    fn test_productivity_stats_future_start() {
        let stats = productivity_stats("2024-01-10", day("2024-01-01")).unwrap();
        assert_eq!(stats.total_days, -9);
        assert_eq!(stats.total_months, 0);
        assert_eq!(stats.working_days_estimate, -7);
        assert_eq!(stats.weeks, -2);
    }

    #[test]
    fn test_malformed_dates_rejected() {
        let today = day("2024-01-01");
        for bad in ["", "2024/01/01", "2024-13-01", "2023-02-29", "yesterday"] {
            let err = age_in_years(bad, today).unwrap_err();
            assert!(matches!(err, DateMathError::Parse { .. }), "input {bad:?}");
        }
    }
}
