//! User input handling: field types, parsing and range validation.
//!
//! Raw text from a form, the command line or a field store is turned into
//! [`UserValues`] by [`parse_fields`]; [`validate`] then checks every value
//! against its [`FieldLimits`]. Both steps report through the same
//! [`Violations`] set so the user sees one count covering malformed and
//! out-of-range fields alike.

mod parse;
mod types;
mod validate;

pub use parse::{parse_field, parse_fields};
pub use types::*;
pub use validate::{
    check, validate, FieldLimits, ValidatedValues, Violation, ViolationKind, Violations,
};
