//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use chrono::NaiveDate;

/// Test that distribution functions are accessible via absolute path.
#[test]
fn test_distribution_exports() {
    use pricer_core::math::distributions::norm_cdf;
    use pricer_core::math::distributions::norm_pdf;

    assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
    assert!(norm_pdf(0.0_f64) > 0.39);
}

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solver_exports() {
    use pricer_core::math::solvers::{NewtonRaphsonSolver, RootStatus, SolverConfig};

    let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50)).with_bounds(0.0, 10.0);
    let outcome = solver.search(|x: f64| (x * x - 16.0, 2.0 * x), 1.0);

    assert_eq!(outcome.status, RootStatus::Converged);
    assert!((outcome.root - 4.0).abs() < 1e-10);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{PricingError, SolverError};
    use pricer_core::types::option::{OptionType, PositionSide};
    use pricer_core::types::time::{days_to_years, time_to_expiry, DAYS_PER_YEAR};

    assert_eq!(DAYS_PER_YEAR, 365.0);
    assert!((days_to_years(73.0) - 0.2).abs() < 1e-12);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    assert!((time_to_expiry(start, end) - 0.4986).abs() < 0.001);

    assert!(OptionType::Call.is_call());
    assert!(PositionSide::Short.is_selling());

    let err: PricingError = SolverError::MaxIterationsExceeded { iterations: 3 }.into();
    assert!(err.to_string().contains("3 iterations"));
}

/// Test that re-exports at the types level resolve to the same items.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{OptionType, ParseError, PositionSide};

    let parsed: Result<OptionType, ParseError> = "put".parse();
    assert_eq!(parsed, Ok(OptionType::Put));

    let side: Result<PositionSide, ParseError> = "buy".parse();
    assert_eq!(side, Ok(PositionSide::Long));
}
