//! Field- and form-level validation.
//!
//! Rule checks follow the registry's declared order: required → parse →
//! positive → range → relationship. The first blocking failure wins; advisory
//! (`warning: true`) rules never block. Cross-field relationship checks defer
//! judgment until every value they depend on is present and parseable.

mod field;
mod form;
pub(crate) mod parse;
mod relationship;

pub use field::validate_field;
pub use form::validate_form;

pub(crate) use parse::{decimal as parse_decimal, integer as parse_integer};
