//! Root-finding solvers for numerical computation.
//!
//! Designed for inverting pricing formulas, such as recovering implied
//! volatility from an observed option price.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: quadratic convergence using derivatives, with
//!   optional clamping bounds and a best-effort [`search`](NewtonRaphsonSolver::search)
//!   mode that reports a [`RootStatus`] instead of failing
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let root = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::SolverConfig;
pub use newton_raphson::{NewtonRaphsonSolver, RootSearch, RootStatus};
