//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands compute a
//! serialisable report and render it as a table or as JSON.

pub mod expected_move;
pub mod implied_vol;
pub mod price;
pub mod probability;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use pricer_core::types::time::{days_to_years, time_to_expiry};
use serde::Serialize;

use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Time to expiry, given exactly one way.
#[derive(Debug, Clone, Default, Args)]
pub struct ExpiryArgs {
    /// Time to expiry in years
    #[arg(long, conflicts_with_all = ["days", "expiration"])]
    pub expiry: Option<f64>,

    /// Calendar days to expiry (365-day year)
    #[arg(long, conflicts_with = "expiration")]
    pub days: Option<f64>,

    /// Expiration date (YYYY-MM-DD)
    #[arg(long)]
    pub expiration: Option<NaiveDate>,

    /// Valuation date for --expiration (YYYY-MM-DD, defaults to today)
    #[arg(long, requires = "expiration")]
    pub valuation_date: Option<NaiveDate>,
}

impl ExpiryArgs {
    /// Resolve to years, using `today` when no valuation date is given.
    pub fn years(&self, today: NaiveDate) -> Result<f64> {
        match (self.expiry, self.days, self.expiration) {
            (Some(years), None, None) => Ok(years),
            (None, Some(days), None) => Ok(days_to_years(days)),
            (None, None, Some(expiration)) => {
                let valuation = self.valuation_date.unwrap_or(today);
                Ok(time_to_expiry(valuation, expiration))
            }
            (None, None, None) => Err(CliError::invalid_argument(
                "one of --expiry, --days or --expiration is required",
            )),
            _ => Err(CliError::invalid_argument(
                "--expiry, --days and --expiration are mutually exclusive",
            )),
        }
    }
}

/// Report that can be shown as a table.
pub trait TableReport {
    /// Label/value rows in display order.
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Render a report in the requested format.
pub fn render<R: Serialize + TableReport>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(table(&report.rows())),
    }
}

/// Two-column box table.
fn table(rows: &[(&'static str, String)]) -> String {
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(label_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = vec![rule("┌", "┬", "┐")];
    for (label, value) in rows {
        lines.push(format!(
            "│ {:<lw$} │ {:>vw$} │",
            label,
            value,
            lw = label_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Fixed-precision number for table cells.
pub(crate) fn fmt_num(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
