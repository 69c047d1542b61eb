//! Core types for sizing calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sized position before instrument-specific detail is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizedPosition {
    /// Whole shares or contracts, floored.
    pub position_size: u64,
    /// Dollar value of the position (margin for futures, premium for options).
    pub position_value: Decimal,
    /// Dollars at risk for the floored size.
    pub estimated_risk: Decimal,
}
