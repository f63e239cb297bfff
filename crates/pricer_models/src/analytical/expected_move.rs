//! Expected move of the underlying over a horizon.
//!
//! One standard deviation of the price change under the same normal
//! approximation as [`probability`](super::probability):
//!
//! move = S·σ·√(days / 365)

use pricer_core::types::time::days_to_years;

/// One and two standard deviation price moves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedMove {
    /// S·σ·√T
    pub one_std_dev: f64,
    /// Exactly twice `one_std_dev`
    pub two_std_dev: f64,
}

impl ExpectedMove {
    /// `(spot - move, spot + move)` at one standard deviation.
    #[inline]
    pub fn one_std_dev_range(&self, spot: f64) -> (f64, f64) {
        (spot - self.one_std_dev, spot + self.one_std_dev)
    }

    /// `(spot - move, spot + move)` at two standard deviations.
    #[inline]
    pub fn two_std_dev_range(&self, spot: f64) -> (f64, f64) {
        (spot - self.two_std_dev, spot + self.two_std_dev)
    }
}

/// Expected move over `days_to_expiry` calendar days.
///
/// Negative day counts give NaN moves.
///
/// # Examples
/// ```
/// use pricer_models::analytical::expected_move;
///
/// let m = expected_move(100.0, 0.3, 30.0);
/// assert!((m.one_std_dev - 8.6007).abs() < 1e-4);
/// assert_eq!(m.two_std_dev, 2.0 * m.one_std_dev);
/// ```
pub fn expected_move(spot: f64, volatility: f64, days_to_expiry: f64) -> ExpectedMove {
    let one_std_dev = spot * volatility * days_to_years(days_to_expiry).sqrt();
    ExpectedMove {
        one_std_dev,
        two_std_dev: 2.0 * one_std_dev,
    }
}
