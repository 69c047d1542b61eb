//! Declarative validation rules for calculator fields.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::fields;

/// How a field's raw string is parsed before rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    /// A decimal number (money, price, or percentage).
    Decimal,
    /// A non-negative whole number.
    Integer,
    /// A trade direction, `LONG` or `SHORT`.
    Direction,
    /// Free text.
    Text,
}

/// A named cross-field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    /// Stop loss sits on the protective side of the entry price:
    /// below for LONG, above for SHORT.
    StopVsEntry,
    /// Support/resistance level sits on the protective side of the entry
    /// price, same polarity as `StopVsEntry`.
    LevelVsEntry,
    /// Fixed risk amount does not exceed the account size.
    RiskWithinAccount,
}

/// One validation rule, with its parameters.
///
/// Rules are applied in declaration order after the required and parse
/// checks. A `Range` with `warning: true` is advisory: a violation surfaces
/// as a warning string and never blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationRule {
    /// Parsed value must clear `min`; `exclusive` selects strict `>` over `>=`.
    Positive {
        /// Lower bound.
        min: Decimal,
        /// Whether the bound itself is excluded.
        exclusive: bool,
    },
    /// Parsed value must fall within `[min, max]`.
    Range {
        /// Inclusive lower bound.
        min: Decimal,
        /// Inclusive upper bound.
        max: Decimal,
        /// Advisory rather than blocking.
        warning: bool,
    },
    /// Trimmed text length must fall within `[min, max]` characters.
    Length {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },
    /// Cross-field constraint, evaluated against sibling values.
    Relationship(RelationshipKind),
}

impl ValidationRule {
    /// Message template for a violation of this rule.
    #[must_use]
    pub fn violation_message(&self, field: &str) -> String {
        let label = fields::label(field);
        match self {
            Self::Positive { min, exclusive: true } => {
                format!("{label} must be greater than {min}")
            }
            Self::Positive { min, exclusive: false } => {
                format!("{label} must be at least {min}")
            }
            Self::Range { min, max, warning: false } => {
                format!("{label} must be between {min} and {max}")
            }
            Self::Range { min, max, warning: true } => {
                format!("{label} is outside the typical range of {min} to {max}")
            }
            Self::Length { min, max } => {
                format!("{label} must be between {min} and {max} characters")
            }
            // Relationship messages depend on the sibling values and are
            // produced by the relationship evaluator.
            Self::Relationship(_) => format!("{label} conflicts with a related field"),
        }
    }
}

/// Requirement entry for one field: parse kind plus its ordered rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRequirement {
    /// Canonical field name.
    pub field: String,
    /// How the raw value parses.
    pub kind: ValueKind,
    /// Rules applied in order after the parse check.
    pub rules: Vec<ValidationRule>,
}

impl FieldRequirement {
    fn new(field: &str, kind: ValueKind, rules: Vec<ValidationRule>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            rules,
        }
    }
}

/// Build the full requirement table from configuration.
///
/// Bounds that product owners tune (risk-percentage bands, symbol length)
/// come from `EngineConfig`; everything else is fixed.
pub(crate) fn build_requirements(config: &EngineConfig) -> Vec<FieldRequirement> {
    let positive = |min: Decimal, exclusive: bool| ValidationRule::Positive { min, exclusive };

    let risk_pct_hard_max = Decimal::try_from(config.validation.risk_pct_hard_max)
        .unwrap_or_else(|_| dec!(100));
    let warn_min =
        Decimal::try_from(config.validation.risk_pct_warn_min).unwrap_or_else(|_| dec!(0.25));
    let warn_max =
        Decimal::try_from(config.validation.risk_pct_warn_max).unwrap_or_else(|_| dec!(5));

    vec![
        FieldRequirement::new(
            fields::ACCOUNT_SIZE,
            ValueKind::Decimal,
            vec![positive(Decimal::ZERO, true)],
        ),
        FieldRequirement::new(
            fields::SYMBOL,
            ValueKind::Text,
            vec![ValidationRule::Length {
                min: 1,
                max: config.validation.symbol_max_length,
            }],
        ),
        FieldRequirement::new(
            fields::ENTRY_PRICE,
            ValueKind::Decimal,
            vec![positive(dec!(0.01), true)],
        ),
        FieldRequirement::new(fields::TRADE_DIRECTION, ValueKind::Direction, vec![]),
        FieldRequirement::new(
            fields::RISK_PERCENTAGE,
            ValueKind::Decimal,
            vec![
                positive(Decimal::ZERO, true),
                ValidationRule::Range {
                    min: Decimal::ZERO,
                    max: risk_pct_hard_max,
                    warning: false,
                },
                ValidationRule::Range {
                    min: warn_min,
                    max: warn_max,
                    warning: true,
                },
            ],
        ),
        FieldRequirement::new(
            fields::FIXED_RISK_AMOUNT,
            ValueKind::Decimal,
            vec![
                positive(Decimal::ZERO, true),
                ValidationRule::Relationship(RelationshipKind::RiskWithinAccount),
            ],
        ),
        FieldRequirement::new(
            fields::STOP_LOSS_PRICE,
            ValueKind::Decimal,
            vec![
                positive(Decimal::ZERO, true),
                ValidationRule::Relationship(RelationshipKind::StopVsEntry),
            ],
        ),
        FieldRequirement::new(
            fields::SUPPORT_RESISTANCE_LEVEL,
            ValueKind::Decimal,
            vec![
                positive(Decimal::ZERO, true),
                ValidationRule::Relationship(RelationshipKind::LevelVsEntry),
            ],
        ),
        FieldRequirement::new(
            fields::PREMIUM,
            ValueKind::Decimal,
            vec![positive(dec!(0.01), true)],
        ),
        FieldRequirement::new(
            fields::CONTRACT_MULTIPLIER,
            ValueKind::Integer,
            vec![
                positive(Decimal::ONE, false),
                ValidationRule::Range {
                    min: Decimal::ONE,
                    max: dec!(1000),
                    warning: true,
                },
            ],
        ),
        FieldRequirement::new(
            fields::TICK_SIZE,
            ValueKind::Decimal,
            vec![positive(Decimal::ZERO, true)],
        ),
        FieldRequirement::new(
            fields::TICK_VALUE,
            ValueKind::Decimal,
            vec![positive(Decimal::ZERO, true)],
        ),
        FieldRequirement::new(
            fields::MARGIN_REQUIREMENT,
            ValueKind::Decimal,
            vec![positive(Decimal::ZERO, true)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_field_has_a_requirement() {
        let requirements = build_requirements(&EngineConfig::default());
        for field in fields::ALL {
            assert!(
                requirements.iter().any(|r| r.field == *field),
                "no requirement for {field}"
            );
        }
    }

    #[test]
    fn test_exclusive_and_inclusive_messages_differ() {
        let exclusive = ValidationRule::Positive {
            min: Decimal::ZERO,
            exclusive: true,
        };
        let inclusive = ValidationRule::Positive {
            min: Decimal::ONE,
            exclusive: false,
        };
        assert!(
            exclusive
                .violation_message(fields::ACCOUNT_SIZE)
                .contains("greater than")
        );
        assert!(
            inclusive
                .violation_message(fields::CONTRACT_MULTIPLIER)
                .contains("at least")
        );
    }

    #[test]
    fn test_warn_band_reflects_config() {
        let mut config = EngineConfig::default();
        config.validation.risk_pct_warn_max = 3.0;
        let requirements = build_requirements(&config);
        let risk_pct = requirements
            .iter()
            .find(|r| r.field == fields::RISK_PERCENTAGE)
            .unwrap();
        assert!(risk_pct.rules.iter().any(|rule| matches!(
            rule,
            ValidationRule::Range { max, warning: true, .. } if *max == dec!(3)
        )));
    }
}
