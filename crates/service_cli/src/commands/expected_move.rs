//! Expected move command implementation

use clap::Args;
use pricer_models::analytical::{expected_move, AnalyticalError};
use serde::Serialize;
use tracing::info;

use super::{fmt_num, render, OutputFormat, TableReport};
use crate::{CliError, Result};

/// Arguments for `greeks move`
#[derive(Debug, Clone, Args)]
pub struct ExpectedMoveArgs {
    /// Underlying price
    #[arg(long)]
    pub spot: f64,

    /// Annualised volatility as a decimal
    #[arg(long)]
    pub volatility: f64,

    /// Horizon in calendar days
    #[arg(long)]
    pub days: f64,
}

/// One and two standard deviation moves with their price bands
#[derive(Debug, Clone, Serialize)]
pub struct ExpectedMoveReport {
    pub spot: f64,
    pub volatility: f64,
    pub days: f64,
    pub one_std_dev: f64,
    pub two_std_dev: f64,
    pub one_std_dev_range: (f64, f64),
    pub two_std_dev_range: (f64, f64),
}

impl TableReport for ExpectedMoveReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let band = |(low, high): (f64, f64)| format!("{} - {}", fmt_num(low, 2), fmt_num(high, 2));
        vec![
            ("Spot", fmt_num(self.spot, 4)),
            ("Volatility", fmt_num(self.volatility, 4)),
            ("Days", fmt_num(self.days, 1)),
            ("1σ move", fmt_num(self.one_std_dev, 4)),
            ("2σ move", fmt_num(self.two_std_dev, 4)),
            ("1σ range", band(self.one_std_dev_range)),
            ("2σ range", band(self.two_std_dev_range)),
        ]
    }
}

/// Validate inputs and compute the expected move.
pub fn compute(args: &ExpectedMoveArgs) -> Result<ExpectedMoveReport> {
    if !(args.spot.is_finite() && args.spot > 0.0) {
        return Err(AnalyticalError::InvalidSpot { spot: args.spot }.into());
    }
    if !(args.volatility.is_finite() && args.volatility >= 0.0) {
        return Err(AnalyticalError::InvalidVolatility {
            volatility: args.volatility,
        }
        .into());
    }
    if !(args.days.is_finite() && args.days >= 0.0) {
        return Err(CliError::invalid_argument(format!(
            "--days must be a non-negative number, got {}",
            args.days
        )));
    }

    let estimate = expected_move(args.spot, args.volatility, args.days);

    Ok(ExpectedMoveReport {
        spot: args.spot,
        volatility: args.volatility,
        days: args.days,
        one_std_dev: estimate.one_std_dev,
        two_std_dev: estimate.two_std_dev,
        one_std_dev_range: estimate.one_std_dev_range(args.spot),
        two_std_dev_range: estimate.two_std_dev_range(args.spot),
    })
}

/// Run the expected move command
pub fn run(args: &ExpectedMoveArgs, format: OutputFormat) -> Result<String> {
    let report = compute(args)?;
    info!(
        days = report.days,
        one_std_dev = report.one_std_dev,
        "Expected move estimated"
    );
    render(&report, format)
}
