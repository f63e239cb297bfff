//! Core financial types.
//!
//! This module provides:
//! - `option`: Option type (call/put) and position side (long/short)
//! - `time`: Day and calendar-date conversions to years on a 365-day basis
//! - `error`: Structured error types for pricing, solver and parsing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`], [`PositionSide`] from `option`
//! - [`days_to_years`], [`time_to_expiry`], [`DAYS_PER_YEAR`] from `time`
//! - [`PricingError`], [`SolverError`], [`ParseError`] from `error`

pub mod error;
pub mod option;
pub mod time;

pub use error::{ParseError, PricingError, SolverError};
pub use option::{OptionType, PositionSide};
pub use time::{days_to_years, time_to_expiry, DAYS_PER_YEAR};
