//! Numerical primitives.
//!
//! - [`distributions`]: standard normal CDF and PDF
//! - [`solvers`]: Newton-Raphson root finding

pub mod distributions;
pub mod solvers;
