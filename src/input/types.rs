//! Core types for the calculator inputs.

use std::fmt;

/// One of the five user-supplied operating parameters.
///
/// The declaration order is the canonical order used for iteration and
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Input voltage (V)
    Vin,
    /// Output voltage (V, negative for the inverter)
    Vout,
    /// Output current (mA)
    Iout,
    /// Switching frequency (kHz)
    Freq,
    /// Feedback resistor R1 (kΩ)
    Res1,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 5] = [Field::Vin, Field::Vout, Field::Iout, Field::Freq, Field::Res1];

    /// Storage key and form identifier.
    pub fn key(self) -> &'static str {
        match self {
            Field::Vin => "vin",
            Field::Vout => "vout",
            Field::Iout => "iout",
            Field::Freq => "freq",
            Field::Res1 => "res1",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Vin => "Input voltage",
            Field::Vout => "Output voltage",
            Field::Iout => "Output current",
            Field::Freq => "Switching frequency",
            Field::Res1 => "Feedback resistor R1",
        }
    }

    /// Unit the field is entered in.
    pub fn unit(self) -> &'static str {
        match self {
            Field::Vin | Field::Vout => "V",
            Field::Iout => "mA",
            Field::Freq => "kHz",
            Field::Res1 => "KΩ",
        }
    }

    /// Look a field up by its storage key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Numeric operating parameters for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserValues {
    /// Input voltage in volts
    pub vin: f64,
    /// Output voltage in volts (signed)
    pub vout: f64,
    /// Output current in milliamps
    pub iout: f64,
    /// Switching frequency in kilohertz
    pub freq: f64,
    /// Feedback resistor R1 in kilohms
    pub res1: f64,
}

impl UserValues {
    /// Create a new set of values.
    pub fn new(vin: f64, vout: f64, iout: f64, freq: f64, res1: f64) -> Self {
        Self {
            vin,
            vout,
            iout,
            freq,
            res1,
        }
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Vin => self.vin,
            Field::Vout => self.vout,
            Field::Iout => self.iout,
            Field::Freq => self.freq,
            Field::Res1 => self.res1,
        }
    }
}

/// The five fields exactly as the user typed them.
///
/// Absent entries are allowed here; they are reported as malformed when the
/// fields are parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    values: [Option<String>; 5],
}

impl RawFields {
    /// Create an empty set of raw fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw text of a field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Set the raw text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    /// Fill every absent field from `other`.
    pub fn or(mut self, other: &RawFields) -> Self {
        for field in Field::ALL {
            if self.get(field).is_none() {
                if let Some(value) = other.get(field) {
                    self.set(field, value);
                }
            }
        }
        self
    }

    /// Iterate over the present fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }
}

impl From<UserValues> for RawFields {
    fn from(values: UserValues) -> Self {
        Field::ALL
            .into_iter()
            .fold(RawFields::new(), |raw, f| raw.with(f, values.get(f).to_string()))
    }
}
