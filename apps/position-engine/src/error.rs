//! Engine error taxonomy.
//!
//! Only programmer-level mistakes surface as `Err` values: referencing a
//! field the registry does not know, or requesting a method/instrument pair
//! the product does not offer. Ordinary validation failures are data
//! (`FieldValidationResult`), never errors, and arithmetic degeneracy is
//! recovered into a synthetic field error before it reaches a caller.

use thiserror::Error;

use crate::models::{InstrumentType, RiskMethod};

/// Errors surfaced to callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Caller referenced a field name absent from the registry.
    ///
    /// This is a front-end defect: recognized field names are the stable
    /// contract and are never invented at runtime.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// The method is not offered for the instrument.
    ///
    /// Only (OPTIONS, LEVEL_BASED) is unsupported; front-ends use this to
    /// disable the combination rather than submitting it.
    #[error("{method} sizing is not supported for {instrument} instruments")]
    UnsupportedMethod {
        /// The selected instrument.
        instrument: InstrumentType,
        /// The rejected method.
        method: RiskMethod,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::UnknownField("zeta".to_string()).to_string(),
            "Unknown field 'zeta'"
        );
        let err = EngineError::UnsupportedMethod {
            instrument: InstrumentType::Options,
            method: RiskMethod::LevelBased,
        };
        assert_eq!(
            err.to_string(),
            "LEVEL_BASED sizing is not supported for OPTIONS instruments"
        );
    }
}
