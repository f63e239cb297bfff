//! Probability of profit command implementation

use chrono::NaiveDate;
use clap::Args;
use pricer_core::types::{OptionType, PositionSide};
use pricer_models::analytical::{probability_of_profit, PricingInputs};
use serde::Serialize;
use tracing::info;

use super::{fmt_num, render, ExpiryArgs, OutputFormat, TableReport};
use crate::config::GreeksConfig;
use crate::Result;

/// Arguments for `greeks pop`
#[derive(Debug, Clone, Args)]
pub struct ProbabilityArgs {
    /// Underlying price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    #[command(flatten)]
    pub expiry: ExpiryArgs,

    /// Annualised volatility as a decimal
    #[arg(long)]
    pub volatility: f64,

    /// Option type (call, put)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub option_type: OptionType,

    /// Position side (long/buy, short/sell)
    #[arg(long, default_value = "long")]
    pub side: PositionSide,
}

/// Probability of finishing on the profitable side of the strike
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityReport {
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub volatility: f64,
    pub option_type: OptionType,
    pub side: PositionSide,
    pub probability: f64,
}

impl TableReport for ProbabilityReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.option_type.to_string()),
            ("Side", self.side.to_string()),
            ("Spot", fmt_num(self.spot, 4)),
            ("Strike", fmt_num(self.strike, 4)),
            ("Expiry (years)", fmt_num(self.expiry, 6)),
            ("Volatility", fmt_num(self.volatility, 4)),
            ("Probability of profit", format!("{:.2}%", self.probability * 100.0)),
        ]
    }
}

/// Validate the contract as for pricing, then estimate.
pub fn compute(
    args: &ProbabilityArgs,
    config: &GreeksConfig,
    today: NaiveDate,
) -> Result<ProbabilityReport> {
    let expiry = args.expiry.years(today)?;
    let contract = PricingInputs::new(
        args.spot,
        args.strike,
        expiry,
        config.market.risk_free_rate,
        args.volatility,
        args.option_type,
    )?;

    let probability = probability_of_profit(
        contract.spot,
        contract.strike,
        contract.expiry,
        contract.volatility,
        contract.option_type,
        args.side,
    );

    Ok(ProbabilityReport {
        spot: contract.spot,
        strike: contract.strike,
        expiry: contract.expiry,
        volatility: contract.volatility,
        option_type: contract.option_type,
        side: args.side,
        probability,
    })
}

/// Run the probability of profit command
pub fn run(
    args: &ProbabilityArgs,
    config: &GreeksConfig,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let report = compute(args, config, today)?;
    info!(
        side = %report.side,
        probability = report.probability,
        "Probability of profit estimated"
    );
    render(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_abs_diff_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    fn short_call() -> ProbabilityArgs {
        ProbabilityArgs {
            spot: 100.0,
            strike: 105.0,
            expiry: ExpiryArgs {
                days: Some(30.0),
                ..Default::default()
            },
            volatility: 0.25,
            option_type: OptionType::Call,
            side: PositionSide::Short,
        }
    }

    #[test]
    fn test_short_call() {
        let report = compute(&short_call(), &GreeksConfig::default(), today()).unwrap();
        assert_abs_diff_eq!(report.probability, 0.7572911, epsilon = 1e-6);
    }

    #[test]
    fn test_long_side_complements_short() {
        let mut args = short_call();
        args.side = PositionSide::Long;
        let report = compute(&args, &GreeksConfig::default(), today()).unwrap();
        assert_abs_diff_eq!(report.probability, 0.2427089, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_negative_strike() {
        let mut args = short_call();
        args.strike = -5.0;
        let err = compute(&args, &GreeksConfig::default(), today()).unwrap_err();
        assert!(matches!(err, CliError::Analytical(_)));
    }

    #[test]
    fn test_render_percentage() {
        let output = run(
            &short_call(),
            &GreeksConfig::default(),
            today(),
            OutputFormat::Table,
        )
        .unwrap();
        assert!(output.contains("75.73%"));
        assert!(output.contains("short"));
    }
}
