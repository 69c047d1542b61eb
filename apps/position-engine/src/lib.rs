// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::field_reassign_with_default
    )
)]

//! Position Engine - Core Library
//!
//! Deterministic calculation and validation core for the position-sizing
//! calculator. The GUI front-ends are thin presentation adapters over this
//! crate: they submit raw string field values plus the selected instrument
//! and risk method, and render back the validation state or sized position.
//!
//! # Architecture (leaf to root)
//!
//! - `registry`: declarative field rules and required-field sets per
//!   (instrument, method) pair - the single source the front-ends share
//! - `validation`: single-field rule application and form-level aggregation
//!   into a submittable/not-submittable state
//! - `sizing`: decimal position arithmetic for equity, options, and futures
//! - `engine`: the orchestrator front-ends call (`PositionEngine`)
//! - `config`: tunable rule bounds and sizing defaults, loaded from YAML
//!
//! Everything is synchronous and side-effect free; the registry is built once
//! and shared read-only, so the engine is safe to call from any UI callback.
//!
//! # Example
//!
//! ```rust,ignore
//! use position_engine::{InstrumentType, PositionEngine, RiskMethod};
//!
//! let engine = PositionEngine::default();
//! let outcome = engine.calculate_position(&values, InstrumentType::Equity, RiskMethod::Percentage)?;
//! match outcome {
//!     CalculationOutcome::Sized(result) => render(result),
//!     CalculationOutcome::Rejected(state) => show_errors(state),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Engine configuration loading and defaults.
pub mod config;

/// The calculation orchestrator.
pub mod engine;

/// Engine error taxonomy.
pub mod error;

/// Core data model shared with the front-ends.
pub mod models;

/// Declarative field rules and required-field sets.
pub mod registry;

/// Position sizing arithmetic.
pub mod sizing;

/// Field- and form-level validation.
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, EngineConfig, load_config, load_config_from_string};
pub use engine::PositionEngine;
pub use error::EngineError;
pub use models::{
    CalculationOutcome, CalculationResult, FieldValidationResult, FieldValues,
    FormValidationState, InstrumentType, OptionsStopDetail, RiskMethod, StopLossExit,
    TradeDirection, fields,
};
pub use registry::{
    FieldRequirement, FieldRuleRegistry, RelationshipKind, ValidationRule, ValueKind,
};
pub use sizing::{SizedPosition, SizingError, stop_loss_exit_value};
pub use validation::{validate_field, validate_form};
