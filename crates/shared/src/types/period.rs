//! Reporting periods: inclusive calendar date ranges.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range `[start, end]`.
///
/// All reporting windows are calendar dates without time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range. The caller is responsible for `start <= end`;
    /// generators reject inverted ranges explicitly.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The calendar year-to-date window ending at `as_of` (January 1 through
    /// `as_of`, inclusive).
    #[must_use]
    pub fn year_to_date(as_of: NaiveDate) -> Self {
        // January 1 exists in every year.
        let start = NaiveDate::from_ymd_opt(as_of.year(), 1, 1).unwrap_or(as_of);
        Self { start, end: as_of }
    }

    /// Returns true if the range is inverted (start after end).
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days in the range, inclusive of both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The immediately preceding window of equal length: it ends the day
    /// before `start` and spans the same number of days.
    #[must_use]
    pub fn prior_period(&self) -> Self {
        let end = self.start.pred_opt().unwrap_or(self.start);
        let span = self.end - self.start;
        Self {
            start: end - span,
            end,
        }
    }

    /// The same month/day range shifted back one calendar year.
    ///
    /// February 29 clamps to February 28 in the non-leap year.
    #[must_use]
    pub fn prior_year(&self) -> Self {
        Self {
            start: shift_back_one_year(self.start),
            end: shift_back_one_year(self.end),
        }
    }
}

/// Shifts a date back exactly one calendar year, clamping Feb 29 to Feb 28.
#[must_use]
pub fn shift_back_one_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() - 1, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(date.year() - 1, date.month(), date.day() - 1))
        .unwrap_or_else(|| date - Days::new(365))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(d(2026, 3, 1), d(2026, 3, 31));
        assert!(range.contains(d(2026, 3, 1)));
        assert!(range.contains(d(2026, 3, 31)));
        assert!(!range.contains(d(2026, 4, 1)));
        assert!(!range.contains(d(2026, 2, 28)));
    }

    #[test]
    fn test_days_inclusive() {
        assert_eq!(DateRange::new(d(2026, 3, 1), d(2026, 3, 31)).days(), 31);
        assert_eq!(DateRange::new(d(2026, 3, 1), d(2026, 3, 1)).days(), 1);
    }

    #[test]
    fn test_year_to_date() {
        let ytd = DateRange::year_to_date(d(2026, 6, 30));
        assert_eq!(ytd.start, d(2026, 1, 1));
        assert_eq!(ytd.end, d(2026, 6, 30));
    }

    #[test]
    fn test_prior_period_month() {
        // March 1-31 (31 days) -> the 31 days ending Feb 28
        let prior = DateRange::new(d(2026, 3, 1), d(2026, 3, 31)).prior_period();
        assert_eq!(prior.end, d(2026, 2, 28));
        assert_eq!(prior.days(), 31);
        assert_eq!(prior.start, d(2026, 1, 29));
    }

    #[test]
    fn test_prior_period_single_day() {
        let prior = DateRange::new(d(2026, 1, 1), d(2026, 1, 1)).prior_period();
        assert_eq!(prior, DateRange::new(d(2025, 12, 31), d(2025, 12, 31)));
    }

    #[test]
    fn test_prior_year_same_month_day() {
        let prior = DateRange::new(d(2026, 3, 1), d(2026, 3, 31)).prior_year();
        assert_eq!(prior, DateRange::new(d(2025, 3, 1), d(2025, 3, 31)));
    }

    #[rstest]
    #[case(d(2024, 2, 29), d(2023, 2, 28))]
    #[case(d(2024, 2, 28), d(2023, 2, 28))]
    #[case(d(2026, 12, 31), d(2025, 12, 31))]
    fn test_shift_back_one_year(#[case] input: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(shift_back_one_year(input), expected);
    }

    #[test]
    fn test_is_inverted() {
        assert!(DateRange::new(d(2026, 2, 1), d(2026, 1, 1)).is_inverted());
        assert!(!DateRange::new(d(2026, 1, 1), d(2026, 1, 1)).is_inverted());
    }
}
