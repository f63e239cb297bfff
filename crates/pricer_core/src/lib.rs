//! # pricer_core: Numerical Foundation for the Greeks Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal CDF and PDF (`math::distributions`)
//! - Newton-Raphson root finding with convergence reporting (`math::solvers`)
//! - Option type and position side enums (`types::option`)
//! - Time-to-expiry conversions on a 365-day year (`types::time`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Calendar dates for expiry conversion
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{days_to_years, OptionType};
//!
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//!
//! let t = days_to_years(73.0);
//! assert!((t - 0.2).abs() < 1e-12);
//!
//! let kind: OptionType = "put".parse().unwrap();
//! assert!(kind.is_put());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`, `PositionSide` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
