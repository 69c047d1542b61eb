//! Field- and form-level validation state.

use serde::{Deserialize, Serialize};

/// Outcome of validating a single field.
///
/// Computed fresh per validation call and never mutated afterwards. A warning
/// is advisory only: it never clears `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidationResult {
    /// Canonical field name.
    pub field: String,
    /// The raw string value that was validated.
    pub raw_value: String,
    /// Whether the value passes every blocking rule.
    pub is_valid: bool,
    /// Blocking failure message, if any.
    pub error: Option<String>,
    /// Advisory message from a non-blocking rule, if any.
    pub warning: Option<String>,
    /// Whether the field is required for the active instrument/method pair.
    pub is_required: bool,
    /// Whether the raw value is non-empty after trimming.
    pub is_filled: bool,
}

impl FieldValidationResult {
    /// A passing result.
    #[must_use]
    pub fn valid(field: &str, raw_value: &str, is_required: bool) -> Self {
        Self {
            field: field.to_string(),
            raw_value: raw_value.to_string(),
            is_valid: true,
            error: None,
            warning: None,
            is_required,
            is_filled: !raw_value.trim().is_empty(),
        }
    }

    /// A failing result with a blocking message.
    #[must_use]
    pub fn invalid(field: &str, raw_value: &str, is_required: bool, message: String) -> Self {
        Self {
            error: Some(message),
            is_valid: false,
            ..Self::valid(field, raw_value, is_required)
        }
    }

    /// Attach an advisory warning.
    #[must_use]
    pub fn with_warning(mut self, message: String) -> Self {
        self.warning = Some(message);
        self
    }
}

/// Aggregated validation state for a full form snapshot.
///
/// `is_submittable` is the single authority front-ends use to enable or
/// disable the calculate action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidationState {
    /// Per-field results, in the registry's declared field order.
    pub fields: Vec<FieldValidationResult>,
    /// True iff any evaluated field failed a blocking rule.
    pub has_errors: bool,
    /// True iff every required field is filled.
    pub all_required_filled: bool,
}

impl FormValidationState {
    /// Build the aggregate state from per-field results.
    #[must_use]
    pub fn from_fields(fields: Vec<FieldValidationResult>) -> Self {
        let has_errors = fields.iter().any(|f| !f.is_valid);
        let all_required_filled = fields.iter().filter(|f| f.is_required).all(|f| f.is_filled);
        Self {
            fields,
            has_errors,
            all_required_filled,
        }
    }

    /// Whether the calculate action may run on this snapshot.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.has_errors && self.all_required_filled
    }

    /// Look up the result for one field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValidationResult> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// First blocking failure, if any. Front-ends surface this inline.
    #[must_use]
    pub fn first_error(&self) -> Option<&FieldValidationResult> {
        self.fields.iter().find(|f| !f.is_valid)
    }

    /// Replace (or append) one field's result and recompute the aggregates.
    #[must_use]
    pub fn with_field(mut self, result: FieldValidationResult) -> Self {
        if let Some(existing) = self.fields.iter_mut().find(|f| f.field == result.field) {
            *existing = result;
        } else {
            self.fields.push(result);
        }
        Self::from_fields(self.fields)
    }
}
