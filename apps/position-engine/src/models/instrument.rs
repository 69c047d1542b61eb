//! Instrument, risk-method, and direction enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tradable asset class a calculation targets.
///
/// Fixed for the lifetime of one calculation request; selected externally
/// (tab selection in the front-ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    /// Stocks and ETFs, sized in shares.
    Equity,
    /// Option contracts, sized in contracts with a multiplier.
    Options,
    /// Futures contracts, sized in contracts with tick-based risk.
    Futures,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equity => write!(f, "EQUITY"),
            Self::Options => write!(f, "OPTIONS"),
            Self::Futures => write!(f, "FUTURES"),
        }
    }
}

/// Strategy for bounding the risk of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskMethod {
    /// Risk a percentage of account size.
    Percentage,
    /// Risk a fixed dollar amount.
    FixedAmount,
    /// Risk derived from the distance to a support/resistance level.
    LevelBased,
}

impl fmt::Display for RiskMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "PERCENTAGE"),
            Self::FixedAmount => write!(f, "FIXED_AMOUNT"),
            Self::LevelBased => write!(f, "LEVEL_BASED"),
        }
    }
}

/// Direction of the trade, parsed from the `trade_direction` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    /// Long position: stop loss sits below the entry price.
    Long,
    /// Short position: stop loss sits above the entry price.
    Short,
}

impl TradeDirection {
    /// Parse a raw field value, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LONG" => Some(Self::Long),
            "SHORT" => Some(Self::Short),
            _ => None,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}
