//! Time-to-expiry conversions.
//!
//! Option models take time in years. Callers usually hold either a day
//! count or a calendar expiration date; both convert on a 365-day year
//! (ACT/365).
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_core::types::time::{days_to_years, time_to_expiry};
//!
//! assert!((days_to_years(182.5) - 0.5).abs() < 1e-12);
//!
//! let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expiration = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
//! let t = time_to_expiry(valuation, expiration);
//! assert!((t - 182.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::NaiveDate;

/// Calendar days per year used for every day-to-year conversion.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a number of calendar days into years.
#[inline]
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Converts a year fraction back into calendar days.
#[inline]
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Calendar days between valuation and expiration (negative once expired).
pub fn days_until(valuation: NaiveDate, expiration: NaiveDate) -> i64 {
    (expiration - valuation).num_days()
}

/// Time to expiry in years (ACT/365).
///
/// Unlike a raw year fraction this never goes negative: a contract past
/// its expiration date is at the terminal boundary, `T = 0`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::time::time_to_expiry;
///
/// let expired = time_to_expiry(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
/// );
/// assert_eq!(expired, 0.0);
/// ```
pub fn time_to_expiry(valuation: NaiveDate, expiration: NaiveDate) -> f64 {
    let days = days_until(valuation, expiration).max(0);
    days_to_years(days as f64)
}
