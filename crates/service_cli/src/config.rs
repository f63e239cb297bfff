//! CLI configuration management
//!
//! Handles loading configuration from a TOML file and environment variables.
//! Command-line flags are applied on top by each command.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`GREEKS_*`)
//! 3. Config file
//! 4. Default values
//!
//! ```toml
//! log_level = "info"
//!
//! [market]
//! risk_free_rate = 0.05
//! dividend_yield = 0.0
//!
//! [solver]
//! tolerance = 0.0001
//! max_iterations = 100
//! min_volatility = 0.01
//! max_volatility = 5.0
//! ```

use pricer_core::math::solvers::SolverConfig;
use pricer_models::analytical::implied_vol::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, MAX_VOLATILITY, MIN_VOLATILITY,
};
use pricer_models::analytical::ImpliedVolSolver;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "greeks.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {name}: cannot parse '{value}'")]
    EnvError { name: &'static str, value: String },

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Market defaults used when a command does not set them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
        }
    }
}

/// Implied volatility solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Price tolerance for convergence
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
    /// Lower clamp for volatility iterates
    pub min_volatility: f64,
    /// Upper clamp for volatility iterates
    pub max_volatility: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_volatility: MIN_VOLATILITY,
            max_volatility: MAX_VOLATILITY,
        }
    }
}

impl SolverSettings {
    /// Build the solver these settings describe.
    ///
    /// Call only on validated settings.
    pub fn solver(&self) -> ImpliedVolSolver {
        ImpliedVolSolver::new(SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        })
        .with_bounds(self.min_volatility, self.max_volatility)
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GreeksConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Market defaults
    pub market: MarketConfig,
    /// Solver settings
    pub solver: SolverSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            market: MarketConfig::default(),
            solver: SolverSettings::default(),
        }
    }
}

impl GreeksConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Load from an explicit path, or from [`DEFAULT_CONFIG_FILE`] when it
    /// exists, or fall back to defaults.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Recognised names: `GREEKS_RISK_FREE_RATE`, `GREEKS_DIVIDEND_YIELD`,
    /// `GREEKS_LOG_LEVEL`, `GREEKS_SOLVER_TOLERANCE`,
    /// `GREEKS_SOLVER_MAX_ITERATIONS`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup("GREEKS_RISK_FREE_RATE") {
            self.market.risk_free_rate = parse_env("GREEKS_RISK_FREE_RATE", rate)?;
        }

        if let Some(dividend_yield) = lookup("GREEKS_DIVIDEND_YIELD") {
            self.market.dividend_yield = parse_env("GREEKS_DIVIDEND_YIELD", dividend_yield)?;
        }

        if let Some(log_level) = lookup("GREEKS_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(tolerance) = lookup("GREEKS_SOLVER_TOLERANCE") {
            self.solver.tolerance = parse_env("GREEKS_SOLVER_TOLERANCE", tolerance)?;
        }

        if let Some(max_iterations) = lookup("GREEKS_SOLVER_MAX_ITERATIONS") {
            self.solver.max_iterations =
                parse_env("GREEKS_SOLVER_MAX_ITERATIONS", max_iterations)?;
        }

        Ok(self)
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.market.risk_free_rate.is_finite() {
            errors.push(format!(
                "market.risk_free_rate must be finite, got {}",
                self.market.risk_free_rate
            ));
        }

        let q = self.market.dividend_yield;
        if !q.is_finite() || q < 0.0 {
            errors.push(format!("market.dividend_yield must be >= 0, got {}", q));
        }

        let tolerance = self.solver.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            errors.push(format!("solver.tolerance must be > 0, got {}", tolerance));
        }

        if self.solver.max_iterations == 0 {
            errors.push("solver.max_iterations must be greater than 0".to_string());
        }

        let (lower, upper) = (self.solver.min_volatility, self.solver.max_volatility);
        if !(lower.is_finite() && upper.is_finite() && lower > 0.0 && lower <= upper) {
            errors.push(format!(
                "solver volatility bounds must satisfy 0 < min <= max, got [{}, {}]",
                lower, upper
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn parse_env<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError { name, value })
}

/// Build configuration from file and environment, then validate.
pub fn build_config(path: Option<&Path>) -> Result<GreeksConfig, ConfigError> {
    let config = GreeksConfig::load(path)?.with_env_override()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GreeksConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.market.risk_free_rate, 0.05);
        assert_eq!(config.market.dividend_yield, 0.0);
        assert_eq!(config.solver.tolerance, 1e-4);
        assert_eq!(config.solver.max_iterations, 100);
        assert_eq!(config.solver.min_volatility, 0.01);
        assert_eq!(config.solver.max_volatility, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
    }

    #[test]
    fn test_full_toml() {
        let config = GreeksConfig::from_toml(
            r#"
            log_level = "debug"

            [market]
            risk_free_rate = 0.03
            dividend_yield = 0.015

            [solver]
            tolerance = 1e-6
            max_iterations = 50
            min_volatility = 0.02
            max_volatility = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.market.risk_free_rate, 0.03);
        assert_eq!(config.market.dividend_yield, 0.015);
        assert_eq!(config.solver.tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, 50);
        assert_eq!(config.solver.min_volatility, 0.02);
        assert_eq!(config.solver.max_volatility, 3.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GreeksConfig::from_toml("[market]\nrisk_free_rate = 0.04\n").unwrap();
        assert_eq!(config.market.risk_free_rate, 0.04);
        assert_eq!(config.market.dividend_yield, 0.0);
        assert_eq!(config.solver, SolverSettings::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_rejects_unknown_log_level() {
        let err = GreeksConfig::from_toml("log_level = \"chatty\"").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[solver]\nmax_iterations = 25").unwrap();

        let config = GreeksConfig::from_file(file.path()).unwrap();
        assert_eq!(config.solver.max_iterations, 25);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = GreeksConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_overrides_applied() {
        let config = GreeksConfig::default()
            .with_overrides(lookup_from(&[
                ("GREEKS_RISK_FREE_RATE", "0.045"),
                ("GREEKS_DIVIDEND_YIELD", " 0.01 "),
                ("GREEKS_LOG_LEVEL", "WARN"),
                ("GREEKS_SOLVER_TOLERANCE", "1e-8"),
                ("GREEKS_SOLVER_MAX_ITERATIONS", "200"),
            ]))
            .unwrap();

        assert_eq!(config.market.risk_free_rate, 0.045);
        assert_eq!(config.market.dividend_yield, 0.01);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.solver.tolerance, 1e-8);
        assert_eq!(config.solver.max_iterations, 200);
    }

    #[test]
    fn test_no_overrides_is_identity() {
        let config = GreeksConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(config, GreeksConfig::default());
    }

    #[test]
    fn test_unparseable_override() {
        let err = GreeksConfig::default()
            .with_overrides(lookup_from(&[("GREEKS_SOLVER_MAX_ITERATIONS", "many")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable GREEKS_SOLVER_MAX_ITERATIONS: cannot parse 'many'"
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = GreeksConfig {
            market: MarketConfig {
                risk_free_rate: f64::NAN,
                dividend_yield: -0.01,
            },
            solver: SolverSettings {
                tolerance: 0.0,
                max_iterations: 0,
                min_volatility: 2.0,
                max_volatility: 1.0,
            },
            ..Default::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_solver_settings_build_solver() {
        let settings = SolverSettings {
            tolerance: 1e-6,
            max_iterations: 42,
            min_volatility: 0.05,
            max_volatility: 2.5,
        };
        let solver = settings.solver();
        assert_eq!(solver.config().tolerance, 1e-6);
        assert_eq!(solver.config().max_iterations, 42);
        assert_eq!(solver.bounds(), (0.05, 2.5));
    }
}
