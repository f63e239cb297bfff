//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `SolverError`: Errors from root-finding solvers
//! - `ParseError`: Errors from parsing option type and position side names

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// The common currency between layers: model-specific errors convert into
/// this type so callers can handle failures without knowing which model
/// produced them.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation failed to converge
/// - `ModelFailure`: Model assumptions violated
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce valid result
    ModelFailure(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Root-finding solver errors.
///
/// Returned by the strict [`find_root`](crate::math::solvers::NewtonRaphsonSolver::find_root)
/// entry point.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative vanished (division by zero in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}

/// Failure to parse an enum from its textual name.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, ParseError};
///
/// let err = "straddle".parse::<OptionType>().unwrap_err();
/// assert_eq!(
///     err,
///     ParseError::UnknownVariant { kind: "option type", value: "straddle".to_string() }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text did not match any known name.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant {
        /// What was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::InvalidInput("bad spot".to_string()).to_string(),
            "Invalid input: bad spot"
        );
        assert_eq!(
            PricingError::NumericalInstability("NaN".to_string()).to_string(),
            "Numerical instability: NaN"
        );
        assert_eq!(
            PricingError::ModelFailure("d1 undefined".to_string()).to_string(),
            "Model failure: d1 undefined"
        );
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(err.to_string(), "Failed to converge after 100 iterations");

        let err = SolverError::DerivativeNearZero { x: 0.5 };
        assert_eq!(err.to_string(), "Derivative near zero at x = 0.5");
    }

    #[test]
    fn test_solver_error_to_pricing_error() {
        let err: PricingError = SolverError::MaxIterationsExceeded { iterations: 7 }.into();
        match err {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("7 iterations")),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnknownVariant {
            kind: "position side",
            value: "flat".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown position side: 'flat'");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
        let err = SolverError::NumericalInstability("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
