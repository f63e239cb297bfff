//! Input records for the analytical models.
//!
//! Both records are plain `Copy` values with public fields. Struct
//! literals skip validation; the `new` constructors and `validate` apply it.

use pricer_core::types::OptionType;

use super::black_scholes::{price_and_greeks, GreeksResult};
use super::error::{ensure_non_negative, ensure_positive, AnalyticalError};

/// Contract and market parameters for a single European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::PricingInputs;
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.25, 0.05, 0.2, OptionType::Call)
///     .unwrap()
///     .with_dividend_yield(0.01)
///     .unwrap();
/// assert_eq!(inputs.dividend_yield, 0.01);
///
/// assert!(PricingInputs::new(100.0, -5.0, 0.25, 0.05, 0.2, OptionType::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T); zero is the expiration instant
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Continuous dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
}

impl PricingInputs {
    /// Creates validated inputs with a zero dividend yield.
    ///
    /// # Errors
    /// - `InvalidSpot` if `spot <= 0` or non-finite
    /// - `InvalidStrike` if `strike <= 0` or non-finite
    /// - `InvalidExpiry` if `expiry < 0` or non-finite
    /// - `InvalidRate` if `rate` is non-finite
    /// - `InvalidVolatility` if `volatility <= 0` or non-finite
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let inputs = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            dividend_yield: 0.0,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Sets the continuous dividend yield.
    ///
    /// # Errors
    /// `InvalidDividendYield` if `dividend_yield < 0` or non-finite.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Result<Self, AnalyticalError> {
        self.dividend_yield = ensure_non_negative(dividend_yield, |dividend_yield| {
            AnalyticalError::InvalidDividendYield { dividend_yield }
        })?;
        Ok(self)
    }

    /// Re-checks every field, reporting the first violation.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        ensure_positive(self.spot, |spot| AnalyticalError::InvalidSpot { spot })?;
        ensure_positive(self.strike, |strike| AnalyticalError::InvalidStrike {
            strike,
        })?;
        ensure_non_negative(self.expiry, |expiry| AnalyticalError::InvalidExpiry {
            expiry,
        })?;
        if !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: self.rate });
        }
        ensure_positive(self.volatility, |volatility| {
            AnalyticalError::InvalidVolatility { volatility }
        })?;
        ensure_non_negative(self.dividend_yield, |dividend_yield| {
            AnalyticalError::InvalidDividendYield { dividend_yield }
        })?;
        Ok(())
    }

    /// Returns a copy with a different volatility, unvalidated.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Black-Scholes price and Greeks for these inputs.
    #[inline]
    pub fn greeks(&self) -> GreeksResult {
        price_and_greeks(self)
    }
}

/// An observed option price together with the contract it belongs to.
///
/// Input to [`ImpliedVolSolver::solve`](super::ImpliedVolSolver::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolQuery {
    /// Observed option price
    pub market_price: f64,
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl ImpliedVolQuery {
    /// Creates a validated query with a zero dividend yield.
    ///
    /// Unlike pricing, the expiration instant itself is rejected: at
    /// `T = 0` the price carries no volatility information.
    ///
    /// # Errors
    /// - `InvalidMarketPrice` if `market_price <= 0` or non-finite
    /// - `InvalidSpot`, `InvalidStrike` as for [`PricingInputs::new`]
    /// - `InvalidExpiry` if `expiry <= 0` or non-finite
    /// - `InvalidRate` if `rate` is non-finite
    pub fn new(
        market_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let query = Self {
            market_price,
            spot,
            strike,
            expiry,
            rate,
            dividend_yield: 0.0,
            option_type,
        };
        query.validate()?;
        Ok(query)
    }

    /// Sets the continuous dividend yield.
    ///
    /// # Errors
    /// `InvalidDividendYield` if `dividend_yield < 0` or non-finite.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Result<Self, AnalyticalError> {
        self.dividend_yield = ensure_non_negative(dividend_yield, |dividend_yield| {
            AnalyticalError::InvalidDividendYield { dividend_yield }
        })?;
        Ok(self)
    }

    /// Re-checks every field, reporting the first violation.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        ensure_positive(self.market_price, |price| {
            AnalyticalError::InvalidMarketPrice { price }
        })?;
        ensure_positive(self.spot, |spot| AnalyticalError::InvalidSpot { spot })?;
        ensure_positive(self.strike, |strike| AnalyticalError::InvalidStrike {
            strike,
        })?;
        ensure_positive(self.expiry, |expiry| AnalyticalError::InvalidExpiry {
            expiry,
        })?;
        if !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: self.rate });
        }
        ensure_non_negative(self.dividend_yield, |dividend_yield| {
            AnalyticalError::InvalidDividendYield { dividend_yield }
        })?;
        Ok(())
    }

    /// Pricing inputs for this contract at a trial volatility.
    #[inline]
    pub fn pricing_inputs(&self, volatility: f64) -> PricingInputs {
        PricingInputs {
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            volatility,
            option_type: self.option_type,
            dividend_yield: self.dividend_yield,
        }
    }
}
