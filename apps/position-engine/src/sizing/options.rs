//! Options contract sizing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::SizingError;
use super::types::SizedPosition;
use crate::models::{OptionsStopDetail, StopLossExit};

/// Optional stop-loss prices for the stop-aware sizing path.
///
/// Both prices are for the option itself, not the underlying.
#[derive(Debug, Clone, Copy)]
pub struct OptionsStopInputs {
    /// Option entry price.
    pub entry_price: Decimal,
    /// Option stop loss price.
    pub stop_loss_price: Decimal,
}

/// Size an options position from a risk budget.
///
/// Without a stop, the premium paid is the maximum loss: contracts are
/// bounded by the per-contract premium cost and the estimated risk equals the
/// position value. With a stop, contracts are bounded by the smaller of the
/// premium cost and the stop-loss distance per contract, and the stop-aware
/// figures are attached.
///
/// # Errors
///
/// Returns `ZeroRiskPerUnit` when the per-contract loss bound resolves to
/// zero, and `InvalidInput` for a zero multiplier or negative risk budget.
pub fn size_options(
    risk_amount: Decimal,
    premium: Decimal,
    contract_multiplier: u64,
    stop: Option<&OptionsStopInputs>,
) -> Result<(SizedPosition, Option<OptionsStopDetail>), SizingError> {
    if risk_amount < Decimal::ZERO {
        return Err(SizingError::InvalidInput(
            "Risk budget cannot be negative".to_string(),
        ));
    }
    if contract_multiplier == 0 {
        return Err(SizingError::InvalidInput(
            "Contract multiplier must be at least 1".to_string(),
        ));
    }

    let multiplier = Decimal::from(contract_multiplier);
    let per_contract_cost = premium * multiplier;

    let Some(stop) = stop else {
        if per_contract_cost.is_zero() {
            return Err(SizingError::ZeroRiskPerUnit);
        }
        let position_size = (risk_amount / per_contract_cost)
            .floor()
            .to_u64()
            .unwrap_or(0);
        let size = Decimal::from(position_size);
        let position_value = size * per_contract_cost;
        return Ok((
            SizedPosition {
                position_size,
                position_value,
                // Premium paid is the whole loss if the option expires worthless
                estimated_risk: position_value,
            },
            None,
        ));
    };

    let stop_distance = (stop.entry_price - stop.stop_loss_price).abs();
    let per_contract_bound = premium.min(stop_distance) * multiplier;
    if per_contract_bound.is_zero() {
        return Err(SizingError::ZeroRiskPerUnit);
    }

    let position_size = (risk_amount / per_contract_bound)
        .floor()
        .to_u64()
        .unwrap_or(0);
    let size = Decimal::from(position_size);

    let premium_cost = size * per_contract_cost;
    let stop_loss_risk = size * stop_distance * multiplier;
    let max_loss = premium_cost.min(stop_loss_risk);

    Ok((
        SizedPosition {
            position_size,
            position_value: premium_cost,
            estimated_risk: max_loss,
        },
        Some(OptionsStopDetail {
            stop_loss_risk,
            max_loss,
            exit: stop_loss_exit_value(
                position_size,
                premium,
                stop.entry_price,
                stop.stop_loss_price,
                contract_multiplier,
            ),
        }),
    ))
}

/// Dollar figures for exiting an options position at its stop price.
///
/// Decoupled from sizing so front-ends can recompute the exit for any
/// contract count without re-running the full calculation.
#[must_use]
pub fn stop_loss_exit_value(
    contracts: u64,
    premium: Decimal,
    entry_price: Decimal,
    stop_loss_price: Decimal,
    contract_multiplier: u64,
) -> StopLossExit {
    let quantity = Decimal::from(contracts) * Decimal::from(contract_multiplier);
    let realized_loss = quantity * (entry_price - stop_loss_price);
    StopLossExit {
        exit_value: quantity * stop_loss_price,
        realized_loss,
        remaining_premium: quantity * premium - realized_loss,
    }
}
