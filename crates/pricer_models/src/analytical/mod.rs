//! Analytical formulas for single-leg European options.
//!
//! This module provides:
//! - [`black_scholes`]: price and Greeks under lognormal dynamics
//! - [`implied_vol`]: implied volatility from an observed price
//! - [`probability`]: probability of profit at expiration
//! - [`expected_move`]: one and two standard deviation moves
//! - [`inputs`]: validated input records
//! - [`error`]: the analytical error type
//!
//! ## Units
//!
//! Time is in years everywhere except [`expected_move()`], which takes days.
//! Rates and volatilities are decimals (`0.05` = 5%). Theta is per calendar
//! day; vega and rho are per one percentage point.

pub mod black_scholes;
pub mod error;
pub mod expected_move;
pub mod implied_vol;
pub mod inputs;
pub mod probability;

// Re-export main types at module level
pub use black_scholes::{d1_d2, price_and_greeks, BlackScholes, GreeksResult};
pub use error::AnalyticalError;
pub use expected_move::{expected_move, ExpectedMove};
pub use implied_vol::{
    implied_volatility, ConvergenceStatus, ImpliedVolSolver, ImpliedVolatility,
};
pub use inputs::{ImpliedVolQuery, PricingInputs};
pub use probability::probability_of_profit;
