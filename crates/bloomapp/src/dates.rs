//! # Date Math
//!
//! Bloom works in **calendar days**. A watering schedule never cares about the
//! hour a plant was watered, only the day, so every date in the model is a
//! [`NaiveDate`]: a year/month/day triple with no time-of-day and no zone.
//!
//! ## Why no instants
//!
//! Mixing instants with day arithmetic is where off-by-one-day bugs come from:
//! midnight in one zone is the previous evening in another, and a "date" parsed
//! as UTC can land on yesterday once shifted to local time. Keeping dates
//! date-only removes the whole class of problems. The only place a zone enters
//! is [`SystemClock`], which asks for the *local* calendar date once and drops
//! everything else.
//!
//! ## The Clock seam
//!
//! "Today" is never read implicitly. Callers obtain it from a [`Clock`] once per
//! logical operation and pass it down, which keeps the status engine
//! deterministic and lets tests pin the date with [`FixedClock`].

use chrono::{Days, Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Returns today's date according to `clock`.
pub fn today<C: Clock + ?Sized>(clock: &C) -> NaiveDate {
    clock.today()
}

/// Offsets `date` by `n` calendar days, rolling over months and years.
///
/// Saturates at the representable range instead of panicking.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(if n >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Whole calendar days from `b` to `a` (`a - b`).
///
/// Positive when `a` is later. Date-only values always differ by an exact
/// number of days, so no rounding is involved.
pub fn day_difference(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_days_rolls_over_month_end() {
        assert_eq!(add_days(date(2024, 1, 30), 3), date(2024, 2, 2));
    }

    #[test]
    fn add_days_handles_leap_day() {
        assert_eq!(add_days(date(2024, 2, 28), 1), date(2024, 2, 29));
        assert_eq!(add_days(date(2023, 2, 28), 1), date(2023, 3, 1));
    }

    #[test]
    fn add_days_rolls_over_year_end() {
        assert_eq!(add_days(date(2024, 12, 30), 5), date(2025, 1, 4));
    }

    #[test]
    fn add_days_negative() {
        assert_eq!(add_days(date(2024, 3, 1), -1), date(2024, 2, 29));
        assert_eq!(add_days(date(2024, 1, 1), -1), date(2023, 12, 31));
    }

    #[test]
    fn add_days_zero_is_identity() {
        assert_eq!(add_days(date(2024, 6, 10), 0), date(2024, 6, 10));
    }

    #[test]
    fn add_days_saturates() {
        assert_eq!(add_days(NaiveDate::MAX, 10), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -10), NaiveDate::MIN);
    }

    #[test]
    fn day_difference_is_signed() {
        assert_eq!(day_difference(date(2024, 6, 11), date(2024, 6, 10)), 1);
        assert_eq!(day_difference(date(2024, 6, 9), date(2024, 6, 10)), -1);
        assert_eq!(day_difference(date(2024, 6, 10), date(2024, 6, 10)), 0);
    }

    #[test]
    fn day_difference_across_dst_and_years() {
        // Spring-forward weekends must still count as whole days.
        assert_eq!(day_difference(date(2024, 3, 11), date(2024, 3, 9)), 2);
        assert_eq!(day_difference(date(2025, 1, 1), date(2024, 1, 1)), 366);
    }

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let clock = FixedClock(date(2024, 6, 10));
        assert_eq!(today(&clock), date(2024, 6, 10));
    }
}
