//! Probability of profit at expiration.
//!
//! Treats the terminal underlying price as normally distributed around the
//! current spot with standard deviation S·σ·√T, and measures how likely it
//! is to finish on the profitable side of the strike:
//!
//! z = (K - S) / (S·σ·√T)
//!
//! | Option | Buyer     | Seller    |
//! |--------|-----------|-----------|
//! | Call   | 1 - Φ(z)  | Φ(z)      |
//! | Put    | Φ(z)      | 1 - Φ(z)  |
//!
//! Premium is ignored: "profit" means finishing beyond the strike, not
//! beyond the break-even.

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{OptionType, PositionSide};

/// Probability in `[0, 1]` that a position is profitable at expiration.
///
/// When the dispersion S·σ·√T is zero or not finite (`T = 0`, `σ = 0`)
/// the terminal price is the spot itself, so `z` is `+∞` for `K > S`,
/// `-∞` for `K < S` and `0` at the money.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, PositionSide};
/// use pricer_models::analytical::probability_of_profit;
///
/// let sell = probability_of_profit(100.0, 105.0, 30.0 / 365.0, 0.25, OptionType::Call, PositionSide::Short);
/// let buy = probability_of_profit(100.0, 105.0, 30.0 / 365.0, 0.25, OptionType::Call, PositionSide::Long);
///
/// assert!((sell - 0.7573).abs() < 1e-4);
/// assert!((sell + buy - 1.0).abs() < 1e-12);
/// ```
pub fn probability_of_profit(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    option_type: OptionType,
    side: PositionSide,
) -> f64 {
    let std_dev = spot * volatility * expiry.sqrt();

    let z = if std_dev.is_finite() && std_dev > 0.0 {
        (strike - spot) / std_dev
    } else if strike > spot {
        f64::INFINITY
    } else if strike < spot {
        f64::NEG_INFINITY
    } else {
        0.0
    };

    // Probability the underlying finishes below the strike
    let below = norm_cdf(z);

    let probability = match (option_type, side) {
        (OptionType::Call, PositionSide::Short) | (OptionType::Put, PositionSide::Long) => below,
        (OptionType::Call, PositionSide::Long) | (OptionType::Put, PositionSide::Short) => {
            1.0 - below
        }
    };

    probability.clamp(0.0, 1.0)
}
