//! Implied volatility by Newton-Raphson inversion of Black-Scholes.
//!
//! The solver drives the generic [`NewtonRaphsonSolver`] from `pricer_core`
//! with price as the objective and vega as its derivative. Iterates are
//! clamped to a volatility band after every step, and the search is seeded
//! with the Brenner-Subrahmanyam at-the-money approximation:
//!
//! σ₀ = √(2π/T) · C/S
//!
//! The solver never fails. A search that stops short of the tolerance
//! returns its last iterate tagged with a [`ConvergenceStatus`] other than
//! `Converged`.

use std::f64::consts::PI;

use pricer_core::math::solvers::{NewtonRaphsonSolver, RootStatus, SolverConfig};
use pricer_core::types::OptionType;
use tracing::debug;

use super::black_scholes::price_and_greeks;
use super::error::AnalyticalError;
use super::inputs::ImpliedVolQuery;

/// Price tolerance used by [`ImpliedVolSolver::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Iteration budget used by [`ImpliedVolSolver::default`].
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Lowest volatility an iterate may take.
pub const MIN_VOLATILITY: f64 = 0.01;

/// Highest volatility an iterate may take.
pub const MAX_VOLATILITY: f64 = 5.0;

/// How an implied volatility search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConvergenceStatus {
    /// Model price matched the market price within tolerance.
    Converged,
    /// The iteration budget ran out.
    MaxIterationsExceeded,
    /// Vega vanished, so no Newton step was possible.
    DegenerateVega,
}

impl std::fmt::Display for ConvergenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConvergenceStatus::Converged => "converged",
            ConvergenceStatus::MaxIterationsExceeded => "max_iterations_exceeded",
            ConvergenceStatus::DegenerateVega => "degenerate_vega",
        };
        f.write_str(name)
    }
}

/// Solver output: the best volatility found and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolatility {
    /// Implied volatility, or the last iterate if not converged
    pub volatility: f64,
    /// Pricer evaluations performed
    pub iterations: usize,
    /// Why the search stopped
    pub status: ConvergenceStatus,
}

impl ImpliedVolatility {
    /// True when the market price was matched within tolerance.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

/// Newton-Raphson implied volatility solver.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{ImpliedVolQuery, ImpliedVolSolver};
///
/// let query = ImpliedVolQuery::new(4.614990, 100.0, 100.0, 0.25, 0.05, OptionType::Call).unwrap();
/// let result = ImpliedVolSolver::default().solve(&query);
///
/// assert!(result.is_converged());
/// assert!((result.volatility - 0.2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    solver: NewtonRaphsonSolver<f64>,
}

impl Default for ImpliedVolSolver {
    /// Tolerance 1e-4 on price, 100 iterations, volatility band `[0.01, 5.0]`.
    fn default() -> Self {
        Self::new(SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS))
    }
}

impl ImpliedVolSolver {
    /// Creates a solver with the given tolerance and iteration budget and
    /// the default volatility band.
    pub fn new(config: SolverConfig<f64>) -> Self {
        Self {
            solver: NewtonRaphsonSolver::new(config).with_bounds(MIN_VOLATILITY, MAX_VOLATILITY),
        }
    }

    /// Replaces the volatility band iterates are clamped to.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    pub fn with_bounds(self, lower: f64, upper: f64) -> Self {
        Self {
            solver: self.solver.with_bounds(lower, upper),
        }
    }

    /// Returns the tolerance and iteration budget.
    pub fn config(&self) -> &SolverConfig<f64> {
        self.solver.config()
    }

    /// Returns the volatility band.
    pub fn bounds(&self) -> (f64, f64) {
        self.solver
            .bounds()
            .unwrap_or((MIN_VOLATILITY, MAX_VOLATILITY))
    }

    /// Brenner-Subrahmanyam starting point, √(2π/T) · price / spot.
    ///
    /// Not clamped to the volatility band.
    #[inline]
    pub fn initial_guess(query: &ImpliedVolQuery) -> f64 {
        (2.0 * PI / query.expiry).sqrt() * (query.market_price / query.spot)
    }

    /// Recovers the volatility that reproduces `query.market_price`.
    ///
    /// Expects a query that passes [`ImpliedVolQuery::validate`]; at
    /// `T <= 0` the pricer has no vega and the search ends immediately
    /// with [`ConvergenceStatus::DegenerateVega`].
    pub fn solve(&self, query: &ImpliedVolQuery) -> ImpliedVolatility {
        let seed = Self::initial_guess(query);

        let outcome = self.solver.search(
            |volatility| {
                let greeks = price_and_greeks(&query.pricing_inputs(volatility));
                // Vega is reported per point; the Newton step needs ∂V/∂σ.
                (greeks.price - query.market_price, greeks.vega * 100.0)
            },
            seed,
        );

        let status = match outcome.status {
            RootStatus::Converged => ConvergenceStatus::Converged,
            RootStatus::MaxIterationsExceeded => ConvergenceStatus::MaxIterationsExceeded,
            RootStatus::DerivativeVanished | RootStatus::NonFinite => {
                ConvergenceStatus::DegenerateVega
            }
        };

        if status != ConvergenceStatus::Converged {
            debug!(
                market_price = query.market_price,
                spot = query.spot,
                strike = query.strike,
                expiry = query.expiry,
                volatility = outcome.root,
                iterations = outcome.iterations,
                %status,
                "implied volatility search stopped before convergence"
            );
        }

        ImpliedVolatility {
            volatility: outcome.root,
            iterations: outcome.iterations,
            status,
        }
    }
}

/// Implied volatility with the default solver settings.
///
/// Returns the best estimate even when the search does not converge; use
/// [`ImpliedVolSolver::solve`] to see the [`ConvergenceStatus`].
///
/// # Errors
///
/// Only input validation errors from [`ImpliedVolQuery::new`] and
/// [`ImpliedVolQuery::with_dividend_yield`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::implied_volatility;
///
/// let iv = implied_volatility(10.450575, 100.0, 100.0, 1.0, 0.05, OptionType::Call, 0.0).unwrap();
/// assert!((iv - 0.2).abs() < 1e-4);
///
/// assert!(implied_volatility(-1.0, 100.0, 100.0, 1.0, 0.05, OptionType::Call, 0.0).is_err());
/// ```
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    option_type: OptionType,
    dividend_yield: f64,
) -> Result<f64, AnalyticalError> {
    let query = ImpliedVolQuery::new(market_price, spot, strike, expiry, rate, option_type)?
        .with_dividend_yield(dividend_yield)?;
    Ok(ImpliedVolSolver::default().solve(&query).volatility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::inputs::PricingInputs;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn market_price(
        volatility: f64,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
        dividend_yield: f64,
    ) -> f64 {
        price_and_greeks(&PricingInputs {
            spot: 100.0,
            strike,
            expiry,
            rate: 0.05,
            volatility,
            option_type,
            dividend_yield,
        })
        .price
    }

    // ==========================================================
    // Round-trip tests
    // ==========================================================

    #[test]
    fn test_round_trip_atm() {
        let solver = ImpliedVolSolver::default();
        for option_type in [OptionType::Call, OptionType::Put] {
            for sigma in [0.1, 0.2, 0.35, 0.5, 0.8] {
                let price = market_price(sigma, 100.0, 0.5, option_type, 0.0);
                let query = ImpliedVolQuery::new(price, 100.0, 100.0, 0.5, 0.05, option_type).unwrap();
                let result = solver.solve(&query);

                assert!(result.is_converged(), "{:?} σ = {}", option_type, sigma);
                assert_abs_diff_eq!(result.volatility, sigma, epsilon = 1e-4);
                assert!(result.iterations <= 10);
            }
        }
    }

    #[test]
    fn test_round_trip_with_dividend_yield() {
        let solver = ImpliedVolSolver::default();
        for option_type in [OptionType::Call, OptionType::Put] {
            let query = ImpliedVolQuery {
                market_price: 0.0,
                spot: 100.0,
                strike: 110.0,
                expiry: 0.5,
                rate: 0.03,
                dividend_yield: 0.02,
                option_type,
            };
            let price = price_and_greeks(&query.pricing_inputs(0.25)).price;
            let result = solver.solve(&ImpliedVolQuery {
                market_price: price,
                ..query
            });

            assert_eq!(result.status, ConvergenceStatus::Converged);
            assert_abs_diff_eq!(result.volatility, 0.25, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_high_volatility_price() {
        let query = ImpliedVolQuery::new(50.0, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap();
        let result = ImpliedVolSolver::default().solve(&query);

        assert!(result.is_converged());
        assert_abs_diff_eq!(result.volatility, 1.30895, epsilon = 1e-4);
    }

    // ==========================================================
    // Non-convergence tests
    // ==========================================================

    #[test]
    fn test_degenerate_vega_returns_seed() {
        // Far out of the money with almost no time left: vega underflows to zero
        let query = ImpliedVolQuery::new(0.05, 100.0, 200.0, 0.01, 0.05, OptionType::Call).unwrap();
        let result = ImpliedVolSolver::default().solve(&query);

        assert_eq!(result.status, ConvergenceStatus::DegenerateVega);
        assert_eq!(result.iterations, 1);
        assert_relative_eq!(
            result.volatility,
            ImpliedVolSolver::initial_guess(&query),
            epsilon = 1e-15
        );
        assert_relative_eq!(result.volatility, 0.012533141373155, epsilon = 1e-12);
        assert!(!result.is_converged());
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        // The seed overshoots far enough that one step lands on the lower bound
        let query = ImpliedVolQuery::new(0.5, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap();
        let result = ImpliedVolSolver::new(SolverConfig::new(1e-4, 1)).solve(&query);

        assert_eq!(result.status, ConvergenceStatus::MaxIterationsExceeded);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.volatility, MIN_VOLATILITY);
    }

    #[test]
    fn test_custom_bounds_clamp_iterates() {
        let query = ImpliedVolQuery::new(0.5, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap();
        let solver = ImpliedVolSolver::new(SolverConfig::new(1e-4, 1)).with_bounds(0.05, 3.0);
        let result = solver.solve(&query);

        assert_eq!(solver.bounds(), (0.05, 3.0));
        assert_eq!(result.volatility, 0.05);
    }

    #[test]
    fn test_expired_literal_query_is_degenerate() {
        let query = ImpliedVolQuery {
            market_price: 6.0,
            spot: 105.0,
            strike: 100.0,
            expiry: 0.0,
            rate: 0.05,
            dividend_yield: 0.0,
            option_type: OptionType::Call,
        };
        let result = ImpliedVolSolver::default().solve(&query);
        assert_eq!(result.status, ConvergenceStatus::DegenerateVega);
    }

    // ==========================================================
    // Configuration tests
    // ==========================================================

    #[test]
    fn test_default_configuration() {
        let solver = ImpliedVolSolver::default();
        assert_eq!(solver.config().tolerance, DEFAULT_TOLERANCE);
        assert_eq!(solver.config().max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(solver.bounds(), (MIN_VOLATILITY, MAX_VOLATILITY));
    }

    #[test]
    fn test_initial_guess_brenner_subrahmanyam() {
        let query = ImpliedVolQuery::new(8.0, 100.0, 100.0, 1.0, 0.0, OptionType::Call).unwrap();
        let expected = (2.0 * PI).sqrt() * 0.08;
        assert_relative_eq!(ImpliedVolSolver::initial_guess(&query), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ConvergenceStatus::Converged.to_string(), "converged");
        assert_eq!(
            ConvergenceStatus::MaxIterationsExceeded.to_string(),
            "max_iterations_exceeded"
        );
        assert_eq!(ConvergenceStatus::DegenerateVega.to_string(), "degenerate_vega");
    }

    // ==========================================================
    // Free function tests
    // ==========================================================

    #[test]
    fn test_implied_volatility_matches_solver() {
        let price = market_price(0.3, 95.0, 1.0, OptionType::Put, 0.01);
        let iv = implied_volatility(price, 100.0, 95.0, 1.0, 0.05, OptionType::Put, 0.01).unwrap();

        let query = ImpliedVolQuery::new(price, 100.0, 95.0, 1.0, 0.05, OptionType::Put)
            .unwrap()
            .with_dividend_yield(0.01)
            .unwrap();
        assert_eq!(iv, ImpliedVolSolver::default().solve(&query).volatility);
        assert_abs_diff_eq!(iv, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_implied_volatility_silent_on_non_convergence() {
        let iv = implied_volatility(0.05, 100.0, 200.0, 0.01, 0.05, OptionType::Call, 0.0);
        assert!(iv.is_ok());
    }

    #[test]
    fn test_implied_volatility_validation_errors() {
        assert_eq!(
            implied_volatility(0.0, 100.0, 100.0, 1.0, 0.05, OptionType::Call, 0.0),
            Err(AnalyticalError::InvalidMarketPrice { price: 0.0 })
        );
        assert_eq!(
            implied_volatility(5.0, 100.0, 100.0, 0.0, 0.05, OptionType::Call, 0.0),
            Err(AnalyticalError::InvalidExpiry { expiry: 0.0 })
        );
        assert_eq!(
            implied_volatility(5.0, 100.0, 100.0, 1.0, 0.05, OptionType::Call, -0.02),
            Err(AnalyticalError::InvalidDividendYield {
                dividend_yield: -0.02
            })
        );
    }
}
