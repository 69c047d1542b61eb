//! Error types for sizing calculations.

use thiserror::Error;

/// Error during position sizing.
///
/// These never reach front-ends as errors: the orchestrator recovers them
/// into a synthetic field error on the responsible field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizingError {
    /// Per-unit risk resolved to zero (stop or level equals the entry price).
    /// Sizing would divide by zero.
    #[error("Risk per unit is zero")]
    ZeroRiskPerUnit,

    /// Invalid sizing input (non-numeric after validation, negative budget).
    #[error("Invalid sizing input: {0}")]
    InvalidInput(String),
}
