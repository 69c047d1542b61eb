//! Cross-field relationship checks.

use rust_decimal::Decimal;

use super::parse;
use crate::models::{FieldValues, TradeDirection, fields};
use crate::registry::RelationshipKind;

/// Evaluate a relationship constraint for a parsed field value.
///
/// Returns the violation message, or `None` when the constraint holds.
/// A missing or unparseable depended-on value also returns `None`: judgment
/// is deferred until the sibling field is usable, and the sibling reports its
/// own parse problems.
pub(crate) fn evaluate(
    kind: RelationshipKind,
    value: Decimal,
    context: &FieldValues,
) -> Option<String> {
    match kind {
        RelationshipKind::StopVsEntry => {
            let entry = context_decimal(context, fields::ENTRY_PRICE)?;
            let direction = context_direction(context)?;
            protective_side_violation(value, entry, direction, "Stop loss")
        }
        RelationshipKind::LevelVsEntry => {
            let entry = context_decimal(context, fields::ENTRY_PRICE)?;
            let direction = context_direction(context)?;
            match direction {
                TradeDirection::Long if value >= entry => Some(format!(
                    "Support level must be below the entry price for {direction} trades"
                )),
                TradeDirection::Short if value <= entry => Some(format!(
                    "Resistance level must be above the entry price for {direction} trades"
                )),
                TradeDirection::Long | TradeDirection::Short => None,
            }
        }
        RelationshipKind::RiskWithinAccount => {
            let account = context_decimal(context, fields::ACCOUNT_SIZE)?;
            (value > account)
                .then(|| "Fixed risk amount cannot exceed the account size".to_string())
        }
    }
}

fn protective_side_violation(
    value: Decimal,
    entry: Decimal,
    direction: TradeDirection,
    what: &str,
) -> Option<String> {
    match direction {
        TradeDirection::Long if value >= entry => Some(format!(
            "{what} must be below the entry price for {direction} trades"
        )),
        TradeDirection::Short if value <= entry => Some(format!(
            "{what} must be above the entry price for {direction} trades"
        )),
        TradeDirection::Long | TradeDirection::Short => None,
    }
}

fn context_decimal(context: &FieldValues, field: &str) -> Option<Decimal> {
    context.get(field).map(String::as_str).and_then(parse::decimal)
}

fn context_direction(context: &FieldValues) -> Option<TradeDirection> {
    context
        .get(fields::TRADE_DIRECTION)
        .map(String::as_str)
        .and_then(TradeDirection::parse)
}
