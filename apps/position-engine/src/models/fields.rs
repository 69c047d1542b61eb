//! Canonical field identifiers.
//!
//! These names are the stable contract between the front-ends and the engine:
//! front-ends key their input maps with them and must not invent names the
//! registry does not know.

/// Total account equity in dollars.
pub const ACCOUNT_SIZE: &str = "account_size";
/// Ticker symbol of the traded instrument.
pub const SYMBOL: &str = "symbol";
/// Planned entry price.
pub const ENTRY_PRICE: &str = "entry_price";
/// Trade direction, `LONG` or `SHORT`.
pub const TRADE_DIRECTION: &str = "trade_direction";
/// Percentage of account size to risk.
pub const RISK_PERCENTAGE: &str = "risk_percentage";
/// Fixed dollar amount to risk.
pub const FIXED_RISK_AMOUNT: &str = "fixed_risk_amount";
/// Stop loss price.
pub const STOP_LOSS_PRICE: &str = "stop_loss_price";
/// Support (long) or resistance (short) level.
pub const SUPPORT_RESISTANCE_LEVEL: &str = "support_resistance_level";
/// Option premium per share.
pub const PREMIUM: &str = "premium";
/// Shares controlled per option contract.
pub const CONTRACT_MULTIPLIER: &str = "contract_multiplier";
/// Minimum price increment of a futures contract.
pub const TICK_SIZE: &str = "tick_size";
/// Dollar value of one tick.
pub const TICK_VALUE: &str = "tick_value";
/// Margin reserved per futures contract.
pub const MARGIN_REQUIREMENT: &str = "margin_requirement";

/// Every field name known to the engine.
pub const ALL: &[&str] = &[
    ACCOUNT_SIZE,
    SYMBOL,
    ENTRY_PRICE,
    TRADE_DIRECTION,
    RISK_PERCENTAGE,
    FIXED_RISK_AMOUNT,
    STOP_LOSS_PRICE,
    SUPPORT_RESISTANCE_LEVEL,
    PREMIUM,
    CONTRACT_MULTIPLIER,
    TICK_SIZE,
    TICK_VALUE,
    MARGIN_REQUIREMENT,
];

/// Human-readable label for a field, used in validation messages.
#[must_use]
pub fn label(field: &str) -> &'static str {
    match field {
        ACCOUNT_SIZE => "Account size",
        SYMBOL => "Symbol",
        ENTRY_PRICE => "Entry price",
        TRADE_DIRECTION => "Trade direction",
        RISK_PERCENTAGE => "Risk percentage",
        FIXED_RISK_AMOUNT => "Fixed risk amount",
        STOP_LOSS_PRICE => "Stop loss price",
        SUPPORT_RESISTANCE_LEVEL => "Support/resistance level",
        PREMIUM => "Premium",
        CONTRACT_MULTIPLIER => "Contract multiplier",
        TICK_SIZE => "Tick size",
        TICK_VALUE => "Tick value",
        MARGIN_REQUIREMENT => "Margin requirement",
        _ => "Field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_have_labels() {
        for field in ALL {
            assert_ne!(label(field), "Field", "missing label for {field}");
        }
    }

    #[test]
    fn test_unknown_field_gets_generic_label() {
        assert_eq!(label("made_up"), "Field");
    }
}
