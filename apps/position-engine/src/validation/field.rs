//! Single-field validation.

use rust_decimal::Decimal;

use super::{parse, relationship};
use crate::error::EngineError;
use crate::models::{
    FieldValidationResult, FieldValues, InstrumentType, RiskMethod, TradeDirection, fields,
};
use crate::registry::{FieldRuleRegistry, ValidationRule, ValueKind};

/// Validate one field's raw value against its declared rules.
///
/// `context` carries the sibling raw values for relationship checks. Fields
/// that are neither required for the active pair nor filled pass untouched:
/// an empty value for an inapplicable field never produces an error.
///
/// # Errors
///
/// Returns `EngineError` if the field is unknown to the registry or the
/// (instrument, method) pair is unsupported.
pub fn validate_field(
    registry: &FieldRuleRegistry,
    field: &str,
    raw_value: &str,
    context: &FieldValues,
    instrument: InstrumentType,
    method: RiskMethod,
) -> Result<FieldValidationResult, EngineError> {
    let requirement = registry.requirement(field)?;
    let is_required = registry
        .required_fields(instrument, method)?
        .iter()
        .any(|f| *f == field);

    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        if is_required {
            return Ok(FieldValidationResult::invalid(
                field,
                raw_value,
                true,
                format!("{} is required", fields::label(field)),
            ));
        }
        return Ok(FieldValidationResult::valid(field, raw_value, false));
    }

    // Parse step: failures are data, not errors.
    let numeric: Option<Decimal> = match requirement.kind {
        ValueKind::Decimal => match parse::decimal(trimmed) {
            Some(value) => Some(value),
            None => {
                return Ok(FieldValidationResult::invalid(
                    field,
                    raw_value,
                    is_required,
                    format!("{} must be a number", fields::label(field)),
                ));
            }
        },
        ValueKind::Integer => match parse::integer(trimmed) {
            Some(value) => Some(Decimal::from(value)),
            None => {
                return Ok(FieldValidationResult::invalid(
                    field,
                    raw_value,
                    is_required,
                    format!("{} must be a whole number", fields::label(field)),
                ));
            }
        },
        ValueKind::Direction => {
            if TradeDirection::parse(trimmed).is_none() {
                return Ok(FieldValidationResult::invalid(
                    field,
                    raw_value,
                    is_required,
                    format!("{} must be LONG or SHORT", fields::label(field)),
                ));
            }
            None
        }
        ValueKind::Text => None,
    };

    let mut warning: Option<String> = None;

    for rule in &requirement.rules {
        match rule {
            ValidationRule::Positive { min, exclusive } => {
                if let Some(value) = numeric {
                    let holds = if *exclusive { value > *min } else { value >= *min };
                    if !holds {
                        return Ok(FieldValidationResult::invalid(
                            field,
                            raw_value,
                            is_required,
                            rule.violation_message(field),
                        ));
                    }
                }
            }
            ValidationRule::Range { min, max, warning: advisory } => {
                if let Some(value) = numeric
                    && (value < *min || value > *max)
                {
                    if *advisory {
                        warning.get_or_insert_with(|| rule.violation_message(field));
                    } else {
                        return Ok(FieldValidationResult::invalid(
                            field,
                            raw_value,
                            is_required,
                            rule.violation_message(field),
                        ));
                    }
                }
            }
            ValidationRule::Length { min, max } => {
                let len = trimmed.chars().count();
                if len < *min || len > *max {
                    return Ok(FieldValidationResult::invalid(
                        field,
                        raw_value,
                        is_required,
                        rule.violation_message(field),
                    ));
                }
            }
            ValidationRule::Relationship(kind) => {
                if let Some(value) = numeric
                    && let Some(message) = relationship::evaluate(*kind, value, context)
                {
                    return Ok(FieldValidationResult::invalid(
                        field,
                        raw_value,
                        is_required,
                        message,
                    ));
                }
            }
        }
    }

    let mut result = FieldValidationResult::valid(field, raw_value, is_required);
    if let Some(message) = warning {
        result = result.with_warning(message);
    }
    Ok(result)
}
