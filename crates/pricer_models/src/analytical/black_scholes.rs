//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices and Greeks for European calls
//! and puts on an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Greek Units
//!
//! - Theta is per calendar day (annual theta / 365)
//! - Vega is per one percentage point of volatility (∂V/∂σ / 100)
//! - Rho is per one percentage point of the rate (∂V/∂r / 100)

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::time::DAYS_PER_YEAR;
use pricer_core::types::OptionType;

use super::inputs::PricingInputs;

/// Scale from per-unit sensitivities to per-percentage-point.
const PERCENT: f64 = 100.0;

/// Theoretical price and first-order sensitivities of one option.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// Theoretical price, never negative
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// Value lost per calendar day
    pub theta: f64,
    /// Value change per one point of volatility
    pub vega: f64,
    /// Value change per one point of the risk-free rate
    pub rho: f64,
}

impl GreeksResult {
    /// Payoff at the expiration instant.
    ///
    /// Price is the intrinsic value. Delta is a step function of moneyness
    /// and the remaining sensitivities are zero.
    pub fn terminal(spot: f64, strike: f64, option_type: OptionType) -> Self {
        let delta = match option_type {
            OptionType::Call if spot > strike => 1.0,
            OptionType::Put if spot < strike => -1.0,
            _ => 0.0,
        };

        Self {
            price: option_type.intrinsic_value(spot, strike),
            delta,
            ..Self::default()
        }
    }
}

/// Stateless Black-Scholes pricer.
///
/// A unit type so the model can be passed around and named explicitly; all
/// state lives in [`PricingInputs`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{BlackScholes, PricingInputs};
///
/// let call = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = PricingInputs { option_type: OptionType::Put, ..call };
///
/// let c = BlackScholes.price(&call);
/// let p = BlackScholes.price(&put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl BlackScholes {
    /// Price and Greeks; see [`price_and_greeks`].
    #[inline]
    pub fn price_and_greeks(&self, inputs: &PricingInputs) -> GreeksResult {
        price_and_greeks(inputs)
    }

    /// Theoretical price only.
    #[inline]
    pub fn price(&self, inputs: &PricingInputs) -> f64 {
        price_and_greeks(inputs).price
    }
}

/// Computes the d₁ and d₂ terms of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
///
/// Only meaningful for `T > 0` and `σ > 0`; otherwise the terms are
/// infinite or NaN.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{d1_d2, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let (d1, d2) = d1_d2(&inputs);
/// assert!((d1 - 0.35).abs() < 1e-12);
/// assert!((d2 - 0.15).abs() < 1e-12);
/// ```
#[inline]
pub fn d1_d2(inputs: &PricingInputs) -> (f64, f64) {
    let vol_sqrt_t = inputs.volatility * inputs.expiry.sqrt();
    let drift = inputs.rate - inputs.dividend_yield + 0.5 * inputs.volatility * inputs.volatility;
    let d1 = ((inputs.spot / inputs.strike).ln() + drift * inputs.expiry) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black-Scholes price and Greeks for a European option.
///
/// Total over its inputs: `T <= 0` returns [`GreeksResult::terminal`],
/// everything else goes through the closed form. The price is floored at
/// zero to absorb rounding in the normal CDF approximation.
///
/// Gamma and vega are shared by calls and puts:
/// - Γ = e^(-qT)·φ(d₁) / (S·σ·√T)
/// - ν = S·e^(-qT)·φ(d₁)·√T
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{price_and_greeks, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.25, 0.05, 0.2, OptionType::Call).unwrap();
/// let greeks = price_and_greeks(&inputs);
///
/// assert!((greeks.price - 4.615).abs() < 0.01);
/// assert!(greeks.delta > 0.5 && greeks.delta < 0.6);
/// ```
pub fn price_and_greeks(inputs: &PricingInputs) -> GreeksResult {
    let PricingInputs {
        spot,
        strike,
        expiry,
        rate,
        volatility,
        option_type,
        dividend_yield,
    } = *inputs;

    if expiry <= 0.0 {
        return GreeksResult::terminal(spot, strike, option_type);
    }

    let sqrt_t = expiry.sqrt();
    let (d1, d2) = d1_d2(inputs);

    let discount = (-rate * expiry).exp();
    let carry = (-dividend_yield * expiry).exp();
    let density = norm_pdf(d1);

    let gamma = carry * density / (spot * volatility * sqrt_t);
    let vega = spot * carry * density * sqrt_t;
    let decay = -(spot * volatility * carry * density) / (2.0 * sqrt_t);

    let (price, delta, theta, rho) = match option_type {
        OptionType::Call => {
            let n_d1 = norm_cdf(d1);
            let n_d2 = norm_cdf(d2);
            (
                spot * carry * n_d1 - strike * discount * n_d2,
                carry * n_d1,
                decay - rate * strike * discount * n_d2 + dividend_yield * spot * carry * n_d1,
                strike * expiry * discount * n_d2,
            )
        }
        OptionType::Put => {
            let n_minus_d1 = norm_cdf(-d1);
            let n_minus_d2 = norm_cdf(-d2);
            (
                strike * discount * n_minus_d2 - spot * carry * n_minus_d1,
                -carry * n_minus_d1,
                decay + rate * strike * discount * n_minus_d2
                    - dividend_yield * spot * carry * n_minus_d1,
                -strike * expiry * discount * n_minus_d2,
            )
        }
    };

    GreeksResult {
        price: price.max(0.0),
        delta,
        gamma,
        theta: theta / DAYS_PER_YEAR,
        vega: vega / PERCENT,
        rho: rho / PERCENT,
    }
}
