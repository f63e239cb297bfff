//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Input validation failures for analytical models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised by the validating constructors of
/// [`PricingInputs`](super::PricingInputs) and
/// [`ImpliedVolQuery`](super::ImpliedVolQuery). The pricing formulas
/// themselves never fail.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidExpiry`: Negative or non-finite time to expiry (zero as well for implied volatility)
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidDividendYield`: Negative or non-finite dividend yield
/// - `InvalidRate`: Non-finite interest rate
/// - `InvalidMarketPrice`: Non-positive or non-finite observed price
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid continuous dividend yield.
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield
        dividend_yield: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate
        rate: f64,
    },

    /// Invalid observed option price.
    #[error("Invalid market price: {price}")]
    InvalidMarketPrice {
        /// The invalid price
        price: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(
    value: f64,
    err: impl FnOnce(f64) -> AnalyticalError,
) -> Result<f64, AnalyticalError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn ensure_non_negative(
    value: f64,
    err: impl FnOnce(f64) -> AnalyticalError,
) -> Result<f64, AnalyticalError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}
