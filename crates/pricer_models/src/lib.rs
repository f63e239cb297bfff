//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option analytics built on the numerical primitives of
//! `pricer_core`.
//!
//! This crate provides:
//! - Black-Scholes price and Greeks (delta, gamma, theta, vega, rho) with a
//!   continuous dividend yield
//! - Implied volatility by Newton-Raphson inversion of the pricer
//! - Probability of profit under a normal approximation
//! - Expected move of the underlying over a horizon in days
//!
//! ## Design Principles
//!
//! - **Total pricer**: pricing never fails; `T <= 0` falls back to the
//!   terminal payoff
//! - **Validate at construction**: typed [`AnalyticalError`](analytical::AnalyticalError)
//!   values come from constructors, not from the numeric core
//! - **Plain value types**: every input and output is `Copy`, so calls are
//!   independent and thread-safe

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
