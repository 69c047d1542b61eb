//! Calculation results returned to the front-ends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::FormValidationState;
use super::{InstrumentType, RiskMethod};

/// A sized position.
///
/// Constructed once per successful calculation and returned immediately; the
/// engine retains nothing between calls. A `position_size` of zero is a valid
/// result (the risk budget buys less than one unit), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Instrument the calculation targeted.
    pub instrument: InstrumentType,
    /// Risk method used for sizing.
    pub method: RiskMethod,
    /// Whole shares or contracts, floored.
    pub position_size: u64,
    /// Dollar value of the position. For futures this is margin required,
    /// not notional.
    pub position_value: Decimal,
    /// Dollars lost if the stop (or level, or full premium) is hit.
    pub estimated_risk: Decimal,
    /// The risk budget the sizing was derived from.
    pub risk_amount: Decimal,
    /// Stop-loss-aware detail, present only for options sized with a stop.
    pub options_stop: Option<OptionsStopDetail>,
}

/// Extra figures for an options position sized against a stop loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsStopDetail {
    /// Loss if the stop is hit: contracts × |entry − stop| × multiplier.
    pub stop_loss_risk: Decimal,
    /// Smaller of premium paid and stop-loss risk.
    pub max_loss: Decimal,
    /// Exit figures at the stop price.
    pub exit: StopLossExit,
}

/// Dollar figures for exiting an options position at its stop price.
///
/// Decoupled from sizing: computable for any contract count without
/// re-running the full calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopLossExit {
    /// Proceeds from selling at the stop price.
    pub exit_value: Decimal,
    /// Loss realized between entry and stop.
    pub realized_loss: Decimal,
    /// Premium value remaining after the realized loss.
    pub remaining_premium: Decimal,
}

/// Outcome of an explicit calculate action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationOutcome {
    /// Inputs were submittable and a position was sized.
    Sized(CalculationResult),
    /// Inputs were not submittable; the full per-field state explains why.
    Rejected(FormValidationState),
}

impl CalculationOutcome {
    /// The sized result, if the calculation succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Self::Sized(result) => Some(result),
            Self::Rejected(_) => None,
        }
    }

    /// The validation state, if the calculation was rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<&FormValidationState> {
        match self {
            Self::Sized(_) => None,
            Self::Rejected(state) => Some(state),
        }
    }
}
