//! Form-level validation and submittability.

use tracing::debug;

use super::field::validate_field;
use crate::error::EngineError;
use crate::models::{FormValidationState, FieldValues, InstrumentType, RiskMethod};
use crate::registry::FieldRuleRegistry;

/// Validate a full form snapshot for the active (instrument, method) pair.
///
/// Every required field is evaluated with the full snapshot as relationship
/// context; filled optional fields (the options stop-loss extras) are
/// evaluated too, so a malformed optional value cannot slip through to the
/// calculator. Unknown extra keys in `values` are ignored entirely.
///
/// The state is recomputed from scratch on every call; nothing is cached
/// between snapshots.
///
/// # Errors
///
/// Returns `EngineError::UnsupportedMethod` for (OPTIONS, LEVEL_BASED); the
/// front-ends disable that combination, and this is the defensive backstop.
pub fn validate_form(
    registry: &FieldRuleRegistry,
    values: &FieldValues,
    instrument: InstrumentType,
    method: RiskMethod,
) -> Result<FormValidationState, EngineError> {
    let required = registry.required_fields(instrument, method)?;

    let mut results = Vec::with_capacity(required.len());
    for field in required {
        let raw = values.get(*field).map_or("", String::as_str);
        results.push(validate_field(
            registry, field, raw, values, instrument, method,
        )?);
    }

    for field in registry.optional_fields(instrument, method) {
        let raw = values.get(*field).map_or("", String::as_str);
        if raw.trim().is_empty() {
            continue;
        }
        results.push(validate_field(
            registry, field, raw, values, instrument, method,
        )?);
    }

    let state = FormValidationState::from_fields(results);
    debug!(
        %instrument,
        %method,
        submittable = state.is_submittable(),
        has_errors = state.has_errors,
        "form validated"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields;
    use proptest::prelude::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn equity_percentage_values() -> FieldValues {
        values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::ENTRY_PRICE, "50.00"),
            (fields::TRADE_DIRECTION, "LONG"),
            (fields::RISK_PERCENTAGE, "2.0"),
            (fields::STOP_LOSS_PRICE, "47.00"),
        ])
    }

    #[test]
    fn test_complete_valid_form_is_submittable() {
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &equity_percentage_values(),
            InstrumentType::Equity,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(state.is_submittable());
        assert_eq!(state.fields.len(), 6);
    }

    #[test]
    fn test_missing_field_blocks_submission() {
        let mut form = equity_percentage_values();
        form.remove(fields::STOP_LOSS_PRICE);
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &form,
            InstrumentType::Equity,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(!state.is_submittable());
        assert!(!state.all_required_filled);
    }

    #[test]
    fn test_unknown_extra_keys_ignored() {
        let mut form = equity_percentage_values();
        form.insert("window_width".to_string(), "1280".to_string());
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &form,
            InstrumentType::Equity,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(state.is_submittable());
        assert!(state.field("window_width").is_none());
    }

    #[test]
    fn test_inapplicable_field_value_ignored() {
        // A leftover premium value from the options tab must not affect equity
        let mut form = equity_percentage_values();
        form.insert(fields::PREMIUM.to_string(), "not-a-number".to_string());
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &form,
            InstrumentType::Equity,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(state.is_submittable());
    }

    #[test]
    fn test_options_level_based_rejected() {
        let err = validate_form(
            FieldRuleRegistry::shared(),
            &FieldValues::new(),
            InstrumentType::Options,
            RiskMethod::LevelBased,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedMethod { .. }));
    }

    #[test]
    fn test_filled_optional_options_field_is_validated() {
        let mut form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::PREMIUM, "2.50"),
            (fields::CONTRACT_MULTIPLIER, "100"),
            (fields::RISK_PERCENTAGE, "2.0"),
        ]);
        // Optional stop loss filled with garbage must block
        form.insert(fields::STOP_LOSS_PRICE.to_string(), "oops".to_string());
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &form,
            InstrumentType::Options,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(!state.is_submittable());
        let stop = state.field(fields::STOP_LOSS_PRICE).unwrap();
        assert!(!stop.is_required);
        assert!(!stop.is_valid);
    }

    #[test]
    fn test_empty_optional_options_fields_absent_from_state() {
        let form = values(&[
            (fields::ACCOUNT_SIZE, "10000"),
            (fields::SYMBOL, "AAPL"),
            (fields::PREMIUM, "2.50"),
            (fields::CONTRACT_MULTIPLIER, "100"),
            (fields::RISK_PERCENTAGE, "2.0"),
        ]);
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &form,
            InstrumentType::Options,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(state.is_submittable());
        assert!(state.field(fields::STOP_LOSS_PRICE).is_none());
    }

    #[test]
    fn test_relationship_violation_blocks() {
        let mut form = equity_percentage_values();
        form.insert(fields::STOP_LOSS_PRICE.to_string(), "55.00".to_string());
        let state = validate_form(
            FieldRuleRegistry::shared(),
            &form,
            InstrumentType::Equity,
            RiskMethod::Percentage,
        )
        .unwrap();
        assert!(!state.is_submittable());
        let stop = state.field(fields::STOP_LOSS_PRICE).unwrap();
        assert!(
            stop.error
                .as_deref()
                .unwrap()
                .contains("below the entry price for LONG")
        );
    }

    proptest! {
        #[test]
        fn prop_validation_is_idempotent(
            account in "[0-9]{1,7}",
            entry in "[0-9]{1,4}(\\.[0-9]{1,2})?",
            stop in "[0-9]{1,4}(\\.[0-9]{1,2})?",
            pct in "[0-9]{1,2}(\\.[0-9])?",
        ) {
            let form = values(&[
                (fields::ACCOUNT_SIZE, &account),
                (fields::SYMBOL, "ES"),
                (fields::ENTRY_PRICE, &entry),
                (fields::TRADE_DIRECTION, "LONG"),
                (fields::RISK_PERCENTAGE, &pct),
                (fields::STOP_LOSS_PRICE, &stop),
            ]);
            let registry = FieldRuleRegistry::shared();
            let first = validate_form(registry, &form, InstrumentType::Equity, RiskMethod::Percentage).unwrap();
            let second = validate_form(registry, &form, InstrumentType::Equity, RiskMethod::Percentage).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_clearing_any_required_field_blocks(idx in 0usize..6) {
            let registry = FieldRuleRegistry::shared();
            let required = registry
                .required_fields(InstrumentType::Equity, RiskMethod::Percentage)
                .unwrap();
            let mut form = equity_percentage_values();
            let before = validate_form(registry, &form, InstrumentType::Equity, RiskMethod::Percentage).unwrap();
            prop_assert!(before.is_submittable());

            form.insert(required[idx].to_string(), String::new());
            let after = validate_form(registry, &form, InstrumentType::Equity, RiskMethod::Percentage).unwrap();
            prop_assert!(!after.is_submittable());
        }
    }
}
