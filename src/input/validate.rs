//! Range validation of the operating parameters.
//!
//! Every field is checked against a fixed range and all violations are
//! collected, never just the first one. Only values that pass end up in a
//! [`ValidatedValues`], which is the sole input the regulator models accept.

use std::fmt;

use super::{parse_fields, Field, RawFields, UserValues};

/// Inclusive range a field must lie in, with an optional excluded open
/// interval inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub min: f64,
    pub max: f64,
    /// Open interval `(lo, hi)` that is rejected even though it lies in range
    pub exclude: Option<(f64, f64)>,
}

impl FieldLimits {
    const fn range(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            exclude: None,
        }
    }

    /// Limits for a field.
    pub const fn of(field: Field) -> Self {
        match field {
            Field::Vin => Self::range(5.0, 40.0),
            Field::Vout => Self {
                min: -40.0,
                max: 40.0,
                exclude: Some((-3.0, 3.0)),
            },
            Field::Iout => Self::range(5.0, 1000.0),
            Field::Freq => Self::range(20.0, 100.0),
            Field::Res1 => Self::range(1.0, 50.0),
        }
    }

    /// Check a value. NaN is never accepted.
    pub fn contains(&self, value: f64) -> bool {
        let in_range = (self.min..=self.max).contains(&value);
        let excluded = self
            .exclude
            .is_some_and(|(lo, hi)| value > lo && value < hi);
        in_range && !excluded
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// The value parsed but lies outside its limits
    OutOfRange { value: f64 },
    /// The text could not be read as a number
    Malformed { raw: String },
}

impl ViolationKind {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ViolationKind::Malformed { .. })
    }
}

/// A rejected field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::OutOfRange { value } => {
                let limits = FieldLimits::of(self.field);
                write!(
                    f,
                    "{}: {} {} is outside {} .. {} {}",
                    self.field,
                    value,
                    self.field.unit(),
                    limits.min,
                    limits.max,
                    self.field.unit()
                )?;
                if let Some((lo, hi)) = limits.exclude {
                    write!(f, " (excluding {} .. {})", lo, hi)?;
                }
                Ok(())
            }
            ViolationKind::Malformed { raw } if raw.trim().is_empty() => {
                write!(f, "{}: no value given", self.field)
            }
            ViolationKind::Malformed { raw } => {
                write!(f, "{}: '{}' is not a number", self.field, raw)
            }
        }
    }
}

/// The set of rejected fields, at most one entry per field, kept in
/// canonical field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations {
    entries: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation. A field that is already present keeps its first
    /// violation.
    pub fn push(&mut self, violation: Violation) {
        if self.get(violation.field).is_some() {
            return;
        }
        let at = self
            .entries
            .partition_point(|v| v.field < violation.field);
        self.entries.insert(at, violation);
    }

    /// Merge another set into this one.
    pub fn extend(&mut self, other: Violations) {
        for violation in other.entries {
            self.push(violation);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&Violation> {
        self.entries.iter().find(|v| v.field == field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Rejected fields in canonical order.
    pub fn fields(&self) -> Vec<Field> {
        self.entries.iter().map(|v| v.field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.entries.iter()
    }

    /// Count-based summary shown to the user.
    pub fn message(&self) -> String {
        let n = self.len();
        if n == 1 {
            format!("{} field is out of limits", n)
        } else {
            format!("{} fields are out of limits", n)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Values that passed validation.
///
/// Can only be built by [`ValidatedValues::new`] or [`check`], so holding one
/// proves every field is within its limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedValues(UserValues);

impl ValidatedValues {
    /// Validate `values`, returning every violation on failure.
    pub fn new(values: UserValues) -> Result<Self, Violations> {
        let violations = validate(&values);
        if violations.is_empty() {
            Ok(Self(values))
        } else {
            Err(violations)
        }
    }

    pub fn values(&self) -> &UserValues {
        &self.0
    }
}

impl std::ops::Deref for ValidatedValues {
    type Target = UserValues;

    fn deref(&self) -> &UserValues {
        &self.0
    }
}

/// Check every field against its limits.
///
/// Returns an empty set when the values are valid.
pub fn validate(values: &UserValues) -> Violations {
    let mut violations = Violations::new();
    for field in Field::ALL {
        let value = values.get(field);
        if !FieldLimits::of(field).contains(value) {
            violations.push(Violation::new(field, ViolationKind::OutOfRange { value }));
        }
    }
    violations
}

/// Parse and validate raw field text in one step.
///
/// Malformed fields and range violations are merged into the same set. A
/// malformed field is not range-checked as well.
pub fn check(raw: &RawFields) -> Result<ValidatedValues, Violations> {
    let (parsed, mut violations) = parse_fields(raw);

    for (field, value) in Field::ALL.into_iter().zip(parsed) {
        if let Some(value) = value {
            if !FieldLimits::of(field).contains(value) {
                violations.push(Violation::new(field, ViolationKind::OutOfRange { value }));
            }
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    let [vin, vout, iout, freq, res1] = parsed.map(|v| v.unwrap_or_default());
    ValidatedValues::new(UserValues::new(vin, vout, iout, freq, res1))
}
