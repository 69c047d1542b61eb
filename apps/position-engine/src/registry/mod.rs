//! Field rule registry.
//!
//! The single declarative authority for which fields exist, how each one is
//! validated, and which fields are required for every (instrument, method)
//! pair. Centralizing this table is what keeps the calculator front-ends
//! consistent; none of them re-derives required-field logic.
//!
//! The registry is populated once and never mutated afterwards, so a single
//! instance is safely shared read-only across callers.

mod rules;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use rules::{FieldRequirement, RelationshipKind, ValidationRule, ValueKind};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::fields;
use crate::models::{InstrumentType, RiskMethod};

const EQUITY_PERCENTAGE: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::ENTRY_PRICE,
    fields::TRADE_DIRECTION,
    fields::RISK_PERCENTAGE,
    fields::STOP_LOSS_PRICE,
];

const EQUITY_FIXED_AMOUNT: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::ENTRY_PRICE,
    fields::TRADE_DIRECTION,
    fields::FIXED_RISK_AMOUNT,
    fields::STOP_LOSS_PRICE,
];

const EQUITY_LEVEL_BASED: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::ENTRY_PRICE,
    fields::TRADE_DIRECTION,
    fields::SUPPORT_RESISTANCE_LEVEL,
];

const FUTURES_PERCENTAGE: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::ENTRY_PRICE,
    fields::TRADE_DIRECTION,
    fields::RISK_PERCENTAGE,
    fields::STOP_LOSS_PRICE,
    fields::TICK_SIZE,
    fields::TICK_VALUE,
    fields::MARGIN_REQUIREMENT,
];

const FUTURES_FIXED_AMOUNT: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::ENTRY_PRICE,
    fields::TRADE_DIRECTION,
    fields::FIXED_RISK_AMOUNT,
    fields::STOP_LOSS_PRICE,
    fields::TICK_SIZE,
    fields::TICK_VALUE,
    fields::MARGIN_REQUIREMENT,
];

const FUTURES_LEVEL_BASED: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::ENTRY_PRICE,
    fields::TRADE_DIRECTION,
    fields::SUPPORT_RESISTANCE_LEVEL,
    fields::TICK_SIZE,
    fields::TICK_VALUE,
    fields::MARGIN_REQUIREMENT,
];

const OPTIONS_PERCENTAGE: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::PREMIUM,
    fields::CONTRACT_MULTIPLIER,
    fields::RISK_PERCENTAGE,
];

const OPTIONS_FIXED_AMOUNT: &[&str] = &[
    fields::ACCOUNT_SIZE,
    fields::SYMBOL,
    fields::PREMIUM,
    fields::CONTRACT_MULTIPLIER,
    fields::FIXED_RISK_AMOUNT,
];

/// Optional stop-loss fields recognized for options.
///
/// Validated when filled, never required; when entry and stop are both
/// present the calculator produces the stop-loss-aware figures.
const OPTIONS_STOP_FIELDS: &[&str] = &[
    fields::ENTRY_PRICE,
    fields::STOP_LOSS_PRICE,
    fields::TRADE_DIRECTION,
];

/// Declarative table of field requirements and required-field sets.
#[derive(Debug, Clone)]
pub struct FieldRuleRegistry {
    requirements: HashMap<String, FieldRequirement>,
}

impl Default for FieldRuleRegistry {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl FieldRuleRegistry {
    /// Build the registry from configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let requirements = rules::build_requirements(config)
            .into_iter()
            .map(|r| (r.field.clone(), r))
            .collect();
        Self { requirements }
    }

    /// Process-wide registry built from default configuration.
    #[must_use]
    pub fn shared() -> &'static Self {
        static REGISTRY: OnceLock<FieldRuleRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::default)
    }

    /// Whether the method is offered for the instrument.
    ///
    /// False only for (OPTIONS, LEVEL_BASED): an option's premium already
    /// bounds its loss, so level-distance sizing is not offered there.
    #[must_use]
    pub fn is_method_supported(&self, instrument: InstrumentType, method: RiskMethod) -> bool {
        !matches!(
            (instrument, method),
            (InstrumentType::Options, RiskMethod::LevelBased)
        )
    }

    /// Canonical ordered list of required field names for a pair.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnsupportedMethod` for (OPTIONS, LEVEL_BASED).
    pub fn required_fields(
        &self,
        instrument: InstrumentType,
        method: RiskMethod,
    ) -> Result<&'static [&'static str], EngineError> {
        match (instrument, method) {
            (InstrumentType::Equity, RiskMethod::Percentage) => Ok(EQUITY_PERCENTAGE),
            (InstrumentType::Equity, RiskMethod::FixedAmount) => Ok(EQUITY_FIXED_AMOUNT),
            (InstrumentType::Equity, RiskMethod::LevelBased) => Ok(EQUITY_LEVEL_BASED),
            (InstrumentType::Futures, RiskMethod::Percentage) => Ok(FUTURES_PERCENTAGE),
            (InstrumentType::Futures, RiskMethod::FixedAmount) => Ok(FUTURES_FIXED_AMOUNT),
            (InstrumentType::Futures, RiskMethod::LevelBased) => Ok(FUTURES_LEVEL_BASED),
            (InstrumentType::Options, RiskMethod::Percentage) => Ok(OPTIONS_PERCENTAGE),
            (InstrumentType::Options, RiskMethod::FixedAmount) => Ok(OPTIONS_FIXED_AMOUNT),
            (InstrumentType::Options, RiskMethod::LevelBased) => {
                Err(EngineError::UnsupportedMethod { instrument, method })
            }
        }
    }

    /// Optional fields recognized for a pair, beyond the required set.
    #[must_use]
    pub fn optional_fields(
        &self,
        instrument: InstrumentType,
        _method: RiskMethod,
    ) -> &'static [&'static str] {
        match instrument {
            InstrumentType::Options => OPTIONS_STOP_FIELDS,
            InstrumentType::Equity | InstrumentType::Futures => &[],
        }
    }

    /// The requirement entry for one field.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownField` if the field is not registered.
    pub fn requirement(&self, field: &str) -> Result<&FieldRequirement, EngineError> {
        self.requirements
            .get(field)
            .ok_or_else(|| EngineError::UnknownField(field.to_string()))
    }
}
