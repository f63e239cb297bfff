//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// How a Newton-Raphson search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RootStatus {
    /// `|f(x)| < tolerance` was reached.
    Converged,
    /// The iteration budget ran out first.
    MaxIterationsExceeded,
    /// `f'(x)` was exactly zero, so no Newton step could be taken.
    DerivativeVanished,
    /// An update produced a non-finite iterate; `root` holds the last finite one.
    NonFinite,
}

/// Outcome of [`NewtonRaphsonSolver::search`].
///
/// The search never fails: `root` is always the best available estimate,
/// and `status` says whether it satisfies the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSearch<T: Float> {
    /// Last iterate.
    pub root: T,
    /// Number of function evaluations performed.
    pub iterations: usize,
    /// Why the search stopped.
    pub status: RootStatus,
}

impl<T: Float> RootSearch<T> {
    /// True when the tolerance was met.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == RootStatus::Converged
    }
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root. It may fail if:
/// - The derivative vanishes
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
    bounds: Option<(T, T)>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            bounds: None,
        }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Clamp every iterate into `[lower, upper]` after each Newton update.
    ///
    /// The initial guess is not clamped.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    pub fn with_bounds(mut self, lower: T, upper: T) -> Self {
        assert!(lower <= upper, "lower bound must not exceed upper bound");
        self.bounds = Some((lower, upper));
        self
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Returns the clamping bounds, if any.
    pub fn bounds(&self) -> Option<(T, T)> {
        self.bounds
    }

    /// Best-effort root search.
    ///
    /// `fdf` returns `(f(x), f'(x))` in one call, which suits models that
    /// produce a value and its sensitivity together.
    ///
    /// Each iteration:
    /// 1. evaluates `fdf(x)` and stops with [`RootStatus::Converged`] if `|f(x)| < tolerance`;
    /// 2. stops with [`RootStatus::DerivativeVanished`] if `f'(x) == 0`;
    /// 3. updates `x ← x - f(x)/f'(x)` and clamps to the bounds.
    ///
    /// When the budget runs out the last iterate is returned with
    /// [`RootStatus::MaxIterationsExceeded`].
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, RootStatus, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
    /// let outcome = solver.search(|x: f64| (x * x - 9.0, 2.0 * x), 1.0);
    ///
    /// assert_eq!(outcome.status, RootStatus::Converged);
    /// assert!((outcome.root - 3.0).abs() < 1e-10);
    /// ```
    pub fn search<F>(&self, mut fdf: F, x0: T) -> RootSearch<T>
    where
        F: FnMut(T) -> (T, T),
    {
        let mut x = x0;

        for iteration in 1..=self.config.max_iterations {
            let (f_val, f_prime_val) = fdf(x);

            if f_val.abs() < self.config.tolerance {
                return RootSearch {
                    root: x,
                    iterations: iteration,
                    status: RootStatus::Converged,
                };
            }

            if f_prime_val == T::zero() {
                return RootSearch {
                    root: x,
                    iterations: iteration,
                    status: RootStatus::DerivativeVanished,
                };
            }

            let mut next = x - f_val / f_prime_val;
            if let Some((lower, upper)) = self.bounds {
                if next <= lower {
                    next = lower;
                }
                if next > upper {
                    next = upper;
                }
            }

            if !next.is_finite() {
                return RootSearch {
                    root: x,
                    iterations: iteration,
                    status: RootStatus::NonFinite,
                };
            }

            x = next;
        }

        RootSearch {
            root: x,
            iterations: self.config.max_iterations,
            status: RootStatus::MaxIterationsExceeded,
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// Strict variant of [`search`](Self::search): anything short of
    /// convergence is an error.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative vanished
    /// * `Err(SolverError::NumericalInstability)` - Non-finite iterate
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!((f(root)).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let outcome = self.search(|x| (f(x), f_prime(x)), x0);

        match outcome.status {
            RootStatus::Converged => Ok(outcome.root),
            RootStatus::MaxIterationsExceeded => Err(SolverError::MaxIterationsExceeded {
                iterations: outcome.iterations,
            }),
            RootStatus::DerivativeVanished => Err(SolverError::DerivativeNearZero {
                x: outcome.root.to_f64().unwrap_or(f64::NAN),
            }),
            RootStatus::NonFinite => Err(SolverError::NumericalInstability(
                "Newton iteration produced non-finite value".to_string(),
            )),
        }
    }
}
