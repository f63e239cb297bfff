//! Implied volatility command implementation
//!
//! Recovers the volatility implied by an observed option price.

use chrono::NaiveDate;
use clap::Args;
use pricer_models::analytical::{ImpliedVolQuery, ImpliedVolatility};
use serde::Serialize;
use tracing::{info, warn};

use super::price::ContractArgs;
use super::{fmt_num, render, OutputFormat, TableReport};
use crate::config::GreeksConfig;
use crate::Result;

/// Arguments for `greeks iv`
#[derive(Debug, Clone, Args)]
pub struct ImpliedVolArgs {
    /// Observed option price
    #[arg(long)]
    pub market_price: f64,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Solver result for one query
#[derive(Debug, Clone, Serialize)]
pub struct ImpliedVolReport {
    pub query: ImpliedVolQuery,
    pub result: ImpliedVolatility,
}

impl TableReport for ImpliedVolReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.query.option_type.to_string()),
            ("Market price", fmt_num(self.query.market_price, 4)),
            ("Spot", fmt_num(self.query.spot, 4)),
            ("Strike", fmt_num(self.query.strike, 4)),
            ("Expiry (years)", fmt_num(self.query.expiry, 6)),
            ("Rate", fmt_num(self.query.rate, 4)),
            ("Dividend yield", fmt_num(self.query.dividend_yield, 4)),
            ("Implied volatility", fmt_num(self.result.volatility, 6)),
            ("Iterations", self.result.iterations.to_string()),
            ("Status", self.result.status.to_string()),
        ]
    }
}

/// Validate the query and solve it with the configured solver.
pub fn compute(
    args: &ImpliedVolArgs,
    config: &GreeksConfig,
    today: NaiveDate,
) -> Result<ImpliedVolReport> {
    let contract = &args.contract;
    let expiry = contract.expiry.years(today)?;

    let query = ImpliedVolQuery::new(
        args.market_price,
        contract.spot,
        contract.strike,
        expiry,
        contract.rate(config),
        contract.option_type,
    )?
    .with_dividend_yield(contract.dividend_yield(config))?;

    let result = config.solver.solver().solve(&query);

    Ok(ImpliedVolReport { query, result })
}

/// Run the implied volatility command
pub fn run(
    args: &ImpliedVolArgs,
    config: &GreeksConfig,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let report = compute(args, config, today)?;

    if report.result.is_converged() {
        info!(
            volatility = report.result.volatility,
            iterations = report.result.iterations,
            "Implied volatility converged"
        );
    } else {
        warn!(
            volatility = report.result.volatility,
            iterations = report.result.iterations,
            status = %report.result.status,
            "Implied volatility did not converge; reporting last iterate"
        );
    }

    render(&report, format)
}
