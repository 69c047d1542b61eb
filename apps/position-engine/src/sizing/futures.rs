//! Futures contract sizing in tick terms.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::SizingError;
use super::types::SizedPosition;

/// Numeric inputs for futures sizing.
#[derive(Debug, Clone, Copy)]
pub struct FuturesInputs {
    /// Planned entry price.
    pub entry_price: Decimal,
    /// Stop loss price, or support/resistance level for level-based sizing.
    pub protective_price: Decimal,
    /// Minimum price increment of the contract.
    pub tick_size: Decimal,
    /// Dollar value of one tick.
    pub tick_value: Decimal,
    /// Margin reserved per contract.
    pub margin_requirement: Decimal,
}

/// Size a futures position from a risk budget.
///
/// The entry-to-stop distance is converted to ticks, each worth
/// `tick_value` dollars per contract. Position value is the margin the
/// contracts reserve, not notional exposure.
///
/// # Errors
///
/// Returns `ZeroRiskPerUnit` when the per-contract risk resolves to zero
/// (protective price equals entry), and `InvalidInput` for a non-positive
/// tick size or a negative risk budget.
pub fn size_futures(
    risk_amount: Decimal,
    inputs: &FuturesInputs,
) -> Result<SizedPosition, SizingError> {
    if risk_amount < Decimal::ZERO {
        return Err(SizingError::InvalidInput(
            "Risk budget cannot be negative".to_string(),
        ));
    }
    if inputs.tick_size <= Decimal::ZERO {
        return Err(SizingError::InvalidInput(
            "Tick size must be positive".to_string(),
        ));
    }

    let distance_in_ticks =
        (inputs.entry_price - inputs.protective_price).abs() / inputs.tick_size;
    let per_contract_risk = distance_in_ticks * inputs.tick_value;
    if per_contract_risk.is_zero() {
        return Err(SizingError::ZeroRiskPerUnit);
    }

    let position_size = (risk_amount / per_contract_risk)
        .floor()
        .to_u64()
        .unwrap_or(0);
    let size = Decimal::from(position_size);

    Ok(SizedPosition {
        position_size,
        position_value: size * inputs.margin_requirement,
        estimated_risk: size * per_contract_risk,
    })
}
