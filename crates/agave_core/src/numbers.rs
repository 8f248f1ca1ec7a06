//! Duration units and JS-compatible numeric transforms.
//!
//! Durations are plain `f64` millisecond counts, so they compose with ordinary arithmetic:
//! `hours(1.0) + minutes(30.0)` is a valid duration.

/// Milliseconds per second.
pub const SECONDS: f64 = 1000.0;
/// Milliseconds per minute.
pub const MINUTES: f64 = 60.0 * SECONDS;
/// Milliseconds per hour.
pub const HOURS: f64 = 60.0 * MINUTES;
/// Milliseconds per day.
pub const DAYS: f64 = 24.0 * HOURS;
/// Milliseconds per week.
pub const WEEKS: f64 = 7.0 * DAYS;

/// Round to the nearest integer, with halves rounding toward positive infinity.
///
/// This differs from [`f64::round`], which rounds halves away from zero: `js_round(-2.5)` is `-2`.
///
/// ## Examples
/// ```rust
/// use agave_core::numbers::js_round;
///
/// assert_eq!(js_round(2.5), 3.0);
/// assert_eq!(js_round(-2.5), -2.0);
/// assert_eq!(js_round(0.49999999999999994), 0.0);
/// ```
pub fn js_round(n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let floor = n.floor();
    if n - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Raise `base` to `exponent`.
///
/// Delegates to [`f64::powf`], except where IEEE `pow` and the host disagree: a NaN exponent and
/// `(±1) ** ±Infinity` both yield NaN.
pub fn js_pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_compose_multiplicatively() {
        assert_eq!(MINUTES, 60_000.0);
        assert_eq!(HOURS, 3_600_000.0);
        assert_eq!(DAYS, 86_400_000.0);
        assert_eq!(WEEKS, 604_800_000.0);
    }

    #[test]
    fn round_non_finite_passes_through() {
        assert!(js_round(f64::NAN).is_nan());
        assert_eq!(js_round(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn pow_edge_cases() {
        assert_eq!(js_pow(2.0, 10.0), 1024.0);
        assert!(js_pow(1.0, f64::NAN).is_nan());
        assert!(js_pow(-1.0, f64::INFINITY).is_nan());
        assert_eq!(js_pow(f64::NAN, 0.0), 1.0);
    }
}
