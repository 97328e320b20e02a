//! Parsing raw field text into numbers.

use super::{Field, RawFields, Violation, ViolationKind, Violations};

/// Parse the text of a single field.
///
/// Surrounding whitespace is ignored. Empty, unparseable and non-finite
/// input (`inf`, `NaN`) is rejected.
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse all five fields independently.
///
/// Returns one slot per field (in canonical order) plus a `Malformed`
/// violation for every field that was absent or could not be parsed. Parsing
/// never stops at the first bad field.
pub fn parse_fields(raw: &RawFields) -> ([Option<f64>; 5], Violations) {
    let mut parsed = [None; 5];
    let mut violations = Violations::new();

    for (slot, field) in parsed.iter_mut().zip(Field::ALL) {
        let text = raw.get(field).unwrap_or("");
        match parse_field(text) {
            Some(value) => *slot = Some(value),
            None => violations.push(Violation::new(
                field,
                ViolationKind::Malformed {
                    raw: text.to_string(),
                },
            )),
        }
    }

    (parsed, violations)
}
