//! Contract direction enums.
//!
//! - [`OptionType`]: call or put
//! - [`PositionSide`]: long (bought) or short (sold)

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// European option type.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "CALL".parse().unwrap();
/// assert!(call.is_call());
/// assert_eq!(call.to_string(), "call");
/// assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// True for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// True for [`OptionType::Put`].
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Payoff at expiry for a terminal underlying price.
    ///
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic_value(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic_value(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic_value(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ParseError::UnknownVariant {
                kind: "option type",
                value: s.to_string(),
            }),
        }
    }
}

/// Which side of the contract a position holds.
///
/// `Short` means the option was sold (written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PositionSide {
    /// Bought the option.
    #[default]
    Long,
    /// Sold the option.
    Short,
}

impl PositionSide {
    /// True when the option was sold.
    #[inline]
    pub fn is_selling(&self) -> bool {
        matches!(self, PositionSide::Short)
    }

    /// Side from the seller flag used by order tickets.
    #[inline]
    pub fn from_selling(is_selling: bool) -> Self {
        if is_selling {
            PositionSide::Short
        } else {
            PositionSide::Long
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => write!(f, "long"),
            PositionSide::Short => write!(f, "short"),
        }
    }
}

impl FromStr for PositionSide {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(PositionSide::Long),
            "short" | "sell" => Ok(PositionSide::Short),
            _ => Err(ParseError::UnknownVariant {
                kind: "position side",
                value: s.to_string(),
            }),
        }
    }
}
