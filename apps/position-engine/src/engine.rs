//! Calculation orchestrator.
//!
//! `PositionEngine` is the single entry point the front-ends call: raw field
//! values in, validation state or a sized position out. It holds only the
//! immutable rule registry and configuration; nothing is retained between
//! calls.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{
    CalculationOutcome, CalculationResult, FieldValidationResult, FieldValues,
    FormValidationState, InstrumentType, RiskMethod, fields,
};
use crate::registry::FieldRuleRegistry;
use crate::sizing::{
    FuturesInputs, OptionsStopInputs, SizingError, size_equity, size_futures, size_options,
};
use crate::validation;

/// The calculation and validation engine behind the calculator front-ends.
#[derive(Debug, Clone)]
pub struct PositionEngine {
    registry: FieldRuleRegistry,
    config: EngineConfig,
}

impl Default for PositionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PositionEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: FieldRuleRegistry::new(&config),
            config,
        }
    }

    /// The rule registry this engine validates against.
    #[must_use]
    pub fn registry(&self) -> &FieldRuleRegistry {
        &self.registry
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a single field for live-typing feedback.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` for unknown fields or an unsupported
    /// (instrument, method) pair.
    pub fn validate_field(
        &self,
        field: &str,
        raw_value: &str,
        values: &FieldValues,
        instrument: InstrumentType,
        method: RiskMethod,
    ) -> Result<FieldValidationResult, EngineError> {
        validation::validate_field(&self.registry, field, raw_value, values, instrument, method)
    }

    /// Validate a full form snapshot; drives button enable/disable.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnsupportedMethod` for (OPTIONS, LEVEL_BASED).
    pub fn validate_form(
        &self,
        values: &FieldValues,
        instrument: InstrumentType,
        method: RiskMethod,
    ) -> Result<FormValidationState, EngineError> {
        validation::validate_form(&self.registry, values, instrument, method)
    }

    /// Run the explicit calculate action.
    ///
    /// Re-validates defensively even though front-ends gate the action on
    /// `is_submittable`; a non-submittable snapshot comes back as
    /// `CalculationOutcome::Rejected` carrying the full per-field state.
    /// Arithmetic degeneracy (stop equal to entry) is trapped into a
    /// synthetic field error rather than surfacing as a computation fault.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` only for unknown fields or an unsupported
    /// (instrument, method) pair.
    pub fn calculate_position(
        &self,
        values: &FieldValues,
        instrument: InstrumentType,
        method: RiskMethod,
    ) -> Result<CalculationOutcome, EngineError> {
        let state = self.validate_form(values, instrument, method)?;
        if !state.is_submittable() {
            debug!(%instrument, %method, "calculation rejected by validation");
            return Ok(CalculationOutcome::Rejected(state));
        }

        match self.size(values, instrument, method) {
            Ok(result) => {
                debug!(
                    %instrument,
                    %method,
                    position_size = result.position_size,
                    "position sized"
                );
                Ok(CalculationOutcome::Sized(result))
            }
            Err(err) => {
                let (field, message) = Self::degeneracy_error(method, &err);
                warn!(%instrument, %method, %err, field, "sizing recovered as field error");
                let raw = values.get(field).map_or("", String::as_str);
                let is_required = self
                    .registry
                    .required_fields(instrument, method)?
                    .contains(&field);
                let synthetic =
                    FieldValidationResult::invalid(field, raw, is_required, message);
                Ok(CalculationOutcome::Rejected(state.with_field(synthetic)))
            }
        }
    }

    fn size(
        &self,
        values: &FieldValues,
        instrument: InstrumentType,
        method: RiskMethod,
    ) -> Result<CalculationResult, SizingError> {
        let risk_amount = self.risk_amount(values, method)?;

        let (sized, options_stop) = match instrument {
            InstrumentType::Equity => {
                let entry = required_decimal(values, fields::ENTRY_PRICE)?;
                let protective = required_decimal(values, Self::protective_field(method))?;
                (size_equity(risk_amount, entry, protective)?, None)
            }
            InstrumentType::Futures => {
                let inputs = FuturesInputs {
                    entry_price: required_decimal(values, fields::ENTRY_PRICE)?,
                    protective_price: required_decimal(
                        values,
                        Self::protective_field(method),
                    )?,
                    tick_size: required_decimal(values, fields::TICK_SIZE)?,
                    tick_value: required_decimal(values, fields::TICK_VALUE)?,
                    margin_requirement: required_decimal(values, fields::MARGIN_REQUIREMENT)?,
                };
                (size_futures(risk_amount, &inputs)?, None)
            }
            InstrumentType::Options => {
                let premium = required_decimal(values, fields::PREMIUM)?;
                let multiplier = required_integer(values, fields::CONTRACT_MULTIPLIER)?;
                let stop = match (
                    optional_decimal(values, fields::ENTRY_PRICE),
                    optional_decimal(values, fields::STOP_LOSS_PRICE),
                ) {
                    (Some(entry_price), Some(stop_loss_price)) => Some(OptionsStopInputs {
                        entry_price,
                        stop_loss_price,
                    }),
                    _ => None,
                };
                size_options(risk_amount, premium, multiplier, stop.as_ref())?
            }
        };

        Ok(CalculationResult {
            instrument,
            method,
            position_size: sized.position_size,
            position_value: sized.position_value,
            estimated_risk: sized.estimated_risk,
            risk_amount,
            options_stop,
        })
    }

    fn risk_amount(
        &self,
        values: &FieldValues,
        method: RiskMethod,
    ) -> Result<Decimal, SizingError> {
        match method {
            RiskMethod::Percentage => {
                let account = required_decimal(values, fields::ACCOUNT_SIZE)?;
                let pct = required_decimal(values, fields::RISK_PERCENTAGE)?;
                Ok(account * pct / dec!(100))
            }
            RiskMethod::FixedAmount => required_decimal(values, fields::FIXED_RISK_AMOUNT),
            RiskMethod::LevelBased => {
                let account = required_decimal(values, fields::ACCOUNT_SIZE)?;
                let pct = Decimal::try_from(self.config.sizing.level_risk_pct)
                    .unwrap_or_else(|_| dec!(1));
                Ok(account * pct / dec!(100))
            }
        }
    }

    const fn protective_field(method: RiskMethod) -> &'static str {
        match method {
            RiskMethod::LevelBased => fields::SUPPORT_RESISTANCE_LEVEL,
            RiskMethod::Percentage | RiskMethod::FixedAmount => fields::STOP_LOSS_PRICE,
        }
    }

    fn degeneracy_error(method: RiskMethod, err: &SizingError) -> (&'static str, String) {
        let field = Self::protective_field(method);
        let message = match err {
            SizingError::ZeroRiskPerUnit => match method {
                RiskMethod::LevelBased => {
                    "Support/resistance level cannot equal the entry price".to_string()
                }
                RiskMethod::Percentage | RiskMethod::FixedAmount => {
                    "Stop loss cannot equal the entry price".to_string()
                }
            },
            SizingError::InvalidInput(message) => message.clone(),
        };
        (field, message)
    }
}

fn required_decimal(values: &FieldValues, field: &str) -> Result<Decimal, SizingError> {
    optional_decimal(values, field).ok_or_else(|| {
        SizingError::InvalidInput(format!("{} is not a usable number", fields::label(field)))
    })
}

fn required_integer(values: &FieldValues, field: &str) -> Result<u64, SizingError> {
    values
        .get(field)
        .map(String::as_str)
        .and_then(crate::validation::parse_integer)
        .ok_or_else(|| {
            SizingError::InvalidInput(format!(
                "{} is not a usable whole number",
                fields::label(field)
            ))
        })
}

fn optional_decimal(values: &FieldValues, field: &str) -> Option<Decimal> {
    values
        .get(field)
        .map(String::as_str)
        .and_then(crate::validation::parse_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn engine() -> PositionEngine {
        PositionEngine::default()
    }

    #[test]
    fn test_equity_percentage_scenario() {
        let form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::ENTRY_PRICE, "50.00"),
            (fields::TRADE_DIRECTION, "LONG"),
            (fields::RISK_PERCENTAGE, "2.0"),
            (fields::STOP_LOSS_PRICE, "47.00"),
        ]);
        let outcome = engine()
            .calculate_position(&form, InstrumentType::Equity, RiskMethod::Percentage)
            .unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.position_size, 66);
        assert_eq!(result.risk_amount, dec!(200.000));
        assert_eq!(result.estimated_risk, dec!(198.00));
    }

    #[test]
    fn test_missing_field_rejected_with_state() {
        let form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::ENTRY_PRICE, "50.00"),
            (fields::TRADE_DIRECTION, "LONG"),
            (fields::RISK_PERCENTAGE, "2.0"),
        ]);
        let outcome = engine()
            .calculate_position(&form, InstrumentType::Equity, RiskMethod::Percentage)
            .unwrap();
        let state = outcome.rejection().unwrap();
        assert!(!state.is_submittable());
        assert!(!state.field(fields::STOP_LOSS_PRICE).unwrap().is_filled);
    }

    #[test]
    fn test_degenerate_stop_becomes_field_error() {
        // The equity relationship rule already rejects stop == entry when the
        // direction is known, so degeneracy is reachable through the options
        // stop path, where no direction is supplied and judgment defers.
        let form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::PREMIUM, "2.50"),
            (fields::CONTRACT_MULTIPLIER, "100"),
            (fields::RISK_PERCENTAGE, "2.0"),
            (fields::ENTRY_PRICE, "2.50"),
            (fields::STOP_LOSS_PRICE, "2.50"),
        ]);

        let outcome = engine()
            .calculate_position(&form, InstrumentType::Options, RiskMethod::Percentage)
            .unwrap();
        let state = outcome.rejection().unwrap();
        let stop = state.field(fields::STOP_LOSS_PRICE).unwrap();
        assert!(!stop.is_valid);
        assert_eq!(
            stop.error.as_deref(),
            Some("Stop loss cannot equal the entry price")
        );
    }

    #[test]
    fn test_level_based_uses_configured_budget() {
        let mut config = EngineConfig::default();
        config.sizing.level_risk_pct = 2.0;
        let engine = PositionEngine::new(config);

        let form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::ENTRY_PRICE, "50.00"),
            (fields::TRADE_DIRECTION, "LONG"),
            (fields::SUPPORT_RESISTANCE_LEVEL, "48.00"),
        ]);
        let outcome = engine
            .calculate_position(&form, InstrumentType::Equity, RiskMethod::LevelBased)
            .unwrap();
        let result = outcome.result().unwrap();
        // 2% of 10000 = 200 budget over $2 per-share risk
        assert_eq!(result.position_size, 100);
        assert_eq!(result.risk_amount, dec!(200.0));
    }

    #[test]
    fn test_unsupported_method_propagates() {
        let err = engine()
            .calculate_position(
                &FieldValues::new(),
                InstrumentType::Options,
                RiskMethod::LevelBased,
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedMethod { .. }));
    }

    #[test]
    fn test_stateless_across_calls() {
        let engine = engine();
        let form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::ENTRY_PRICE, "50.00"),
            (fields::TRADE_DIRECTION, "LONG"),
            (fields::RISK_PERCENTAGE, "2.0"),
            (fields::STOP_LOSS_PRICE, "47.00"),
        ]);
        let first = engine
            .calculate_position(&form, InstrumentType::Equity, RiskMethod::Percentage)
            .unwrap();
        let second = engine
            .calculate_position(&form, InstrumentType::Equity, RiskMethod::Percentage)
            .unwrap();
        assert_eq!(first, second);
    }
}
