//! Numeric operations: duration units, date offsets and rounding.
//!
//! This module provides:
//! - [`NumericExt`], turning a count into a millisecond duration (`3.0_f64.seconds()`) and applying a
//!   duration to a date (`2.0_f64.days().before(None)`).
//! - Free functions [`round`], [`ceil`], [`floor`], [`abs`], [`pow`] taking the receiver explicitly,
//!   since `f64` already has inherent methods with most of these names.
//!
//! ## Examples
//!
//! ```rust
//! use agave_runtime::num::NumericExt;
//!
//! assert_eq!(3.0_f64.seconds(), 3000.0);
//! assert_eq!(2.0_f64.days(), 172_800_000.0);
//! assert_eq!(1.0_f64.hours() + 30.0_f64.minutes(), 5_400_000.0);
//! ```

use agave_core::numbers::{DAYS, HOURS, MINUTES, SECONDS, WEEKS, js_pow, js_round};
use chrono::{DateTime, Utc};

/// Duration and date-offset methods for `f64`.
pub trait NumericExt {
    fn seconds(self) -> f64;
    fn minutes(self) -> f64;
    fn hours(self) -> f64;
    fn days(self) -> f64;
    fn weeks(self) -> f64;

    /// Return the instant this many milliseconds before `date` (default: now).
    ///
    /// Returns `None` when the result is outside the representable date range or the duration is
    /// not finite.
    fn before(self, date: Option<DateTime<Utc>>) -> Option<DateTime<Utc>>;

    /// Return the instant this many milliseconds after `date` (default: now).
    fn after(self, date: Option<DateTime<Utc>>) -> Option<DateTime<Utc>>;
}

impl NumericExt for f64 {
    fn seconds(self) -> f64 {
        self * SECONDS
    }

    fn minutes(self) -> f64 {
        self * MINUTES
    }

    fn hours(self) -> f64 {
        self * HOURS
    }

    fn days(self) -> f64 {
        self * DAYS
    }

    fn weeks(self) -> f64 {
        self * WEEKS
    }

    fn before(self, date: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        offset(date, -self)
    }

    fn after(self, date: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        offset(date, self)
    }
}

/// Shift `date` (or now) by `millis`, truncating the result to whole milliseconds.
fn offset(date: Option<DateTime<Utc>>, millis: f64) -> Option<DateTime<Utc>> {
    let base = date.unwrap_or_else(Utc::now).timestamp_millis() as f64;
    let time = (base + millis).trunc();
    if !time.is_finite() || time.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(time as i64)
}

/// Round to the nearest integer; halves round toward positive infinity.
pub fn round(n: f64) -> f64 {
    js_round(n)
}

pub fn ceil(n: f64) -> f64 {
    n.ceil()
}

pub fn floor(n: f64) -> f64 {
    n.floor()
}

pub fn abs(n: f64) -> f64 {
    n.abs()
}

pub fn pow(n: f64, exponent: f64) -> f64 {
    js_pow(n, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch_plus(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).expect("in range")
    }

    #[test]
    fn units() {
        assert_eq!(3.0_f64.seconds(), 3000.0);
        assert_eq!(2.0_f64.minutes(), 120_000.0);
        assert_eq!(1.0_f64.weeks(), 604_800_000.0);
        assert_eq!(0.5_f64.hours(), 1_800_000.0);
    }

    #[test]
    fn before_and_after_shift_from_given_date() {
        let date = epoch_plus(1_000_000);
        assert_eq!(1.0_f64.seconds().before(Some(date)), Some(epoch_plus(999_000)));
        assert_eq!(1.0_f64.seconds().after(Some(date)), Some(epoch_plus(1_001_000)));
    }

    #[test]
    fn fractional_milliseconds_truncate() {
        let date = epoch_plus(1_000);
        assert_eq!(0.6_f64.after(Some(date)), Some(epoch_plus(1_000)));
        assert_eq!(0.6_f64.before(Some(date)), Some(epoch_plus(999)));
    }

    #[test]
    fn before_defaults_to_now() {
        let earlier = 1.0_f64.hours().before(None).expect("in range");
        let now = Utc::now();
        let delta = now.timestamp_millis() - earlier.timestamp_millis();
        assert!((3_600_000..3_660_000).contains(&delta), "delta was {delta}");
    }

    #[test]
    fn out_of_range_dates_are_none() {
        assert_eq!(f64::INFINITY.after(Some(epoch_plus(0))), None);
        assert_eq!(f64::NAN.before(Some(epoch_plus(0))), None);
        assert_eq!(1e300_f64.after(Some(epoch_plus(0))), None);
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(ceil(1.2), 2.0);
        assert_eq!(floor(-1.2), -2.0);
        assert_eq!(abs(-4.0), 4.0);
        assert_eq!(pow(2.0, 3.0), 8.0);
    }
}
