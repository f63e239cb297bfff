//! Price command implementation
//!
//! Prices one European option and reports its Greeks.

use chrono::NaiveDate;
use clap::Args;
use pricer_core::types::OptionType;
use pricer_models::analytical::{GreeksResult, PricingInputs};
use serde::Serialize;
use tracing::info;

use super::{fmt_num, render, ExpiryArgs, OutputFormat, TableReport};
use crate::config::GreeksConfig;
use crate::Result;

/// Contract terms shared by the pricing commands.
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Underlying price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    #[command(flatten)]
    pub expiry: ExpiryArgs,

    /// Option type (call, put)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub option_type: OptionType,

    /// Risk-free rate as a decimal (defaults to the configured rate)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Continuous dividend yield as a decimal (defaults to the configured yield)
    #[arg(long)]
    pub dividend_yield: Option<f64>,
}

impl ContractArgs {
    /// Rate from the flag, else from configuration.
    pub fn rate(&self, config: &GreeksConfig) -> f64 {
        self.rate.unwrap_or(config.market.risk_free_rate)
    }

    /// Dividend yield from the flag, else from configuration.
    pub fn dividend_yield(&self, config: &GreeksConfig) -> f64 {
        self.dividend_yield.unwrap_or(config.market.dividend_yield)
    }
}

/// Arguments for `greeks price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Annualised volatility as a decimal
    #[arg(long)]
    pub volatility: f64,
}

/// Priced contract with its Greeks
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub inputs: PricingInputs,
    pub greeks: GreeksResult,
}

impl TableReport for PriceReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.inputs.option_type.to_string()),
            ("Spot", fmt_num(self.inputs.spot, 4)),
            ("Strike", fmt_num(self.inputs.strike, 4)),
            ("Expiry (years)", fmt_num(self.inputs.expiry, 6)),
            ("Volatility", fmt_num(self.inputs.volatility, 4)),
            ("Rate", fmt_num(self.inputs.rate, 4)),
            ("Dividend yield", fmt_num(self.inputs.dividend_yield, 4)),
            ("Price", fmt_num(self.greeks.price, 4)),
            ("Delta", fmt_num(self.greeks.delta, 4)),
            ("Gamma", fmt_num(self.greeks.gamma, 6)),
            ("Theta (per day)", fmt_num(self.greeks.theta, 6)),
            ("Vega (per 1%)", fmt_num(self.greeks.vega, 6)),
            ("Rho (per 1%)", fmt_num(self.greeks.rho, 6)),
        ]
    }
}

/// Validate the contract and price it.
pub fn compute(args: &PriceArgs, config: &GreeksConfig, today: NaiveDate) -> Result<PriceReport> {
    let contract = &args.contract;
    let expiry = contract.expiry.years(today)?;

    let inputs = PricingInputs::new(
        contract.spot,
        contract.strike,
        expiry,
        contract.rate(config),
        args.volatility,
        contract.option_type,
    )?
    .with_dividend_yield(contract.dividend_yield(config))?;

    Ok(PriceReport {
        inputs,
        greeks: inputs.greeks(),
    })
}

/// Run the price command
pub fn run(
    args: &PriceArgs,
    config: &GreeksConfig,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let report = compute(args, config, today)?;
    info!(
        option_type = %report.inputs.option_type,
        expiry = report.inputs.expiry,
        price = report.greeks.price,
        "Option priced"
    );
    render(&report, format)
}
