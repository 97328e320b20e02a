//! Persistence of raw field values between sessions.
//!
//! A [`FieldStore`] is an opaque key/value store holding the five raw field
//! strings under their [`Field::key`]. The calculation itself never touches
//! a store; front ends restore fields before calculating and save them when
//! the user asks to.

mod memory;

#[cfg(feature = "cli")]
mod file;

pub use memory::MemoryStore;

#[cfg(feature = "cli")]
pub use file::FileStore;

use crate::error::Result;
use crate::input::{Field, RawFields};

/// Key/value storage of raw field text.
pub trait FieldStore {
    /// Stored text for a field, if any.
    fn get(&self, field: Field) -> Result<Option<String>>;

    /// Store the text of a field.
    fn set(&mut self, field: Field, value: &str) -> Result<()>;

    /// Store every present field.
    fn save(&mut self, fields: &RawFields) -> Result<()> {
        for (field, value) in fields.iter() {
            self.set(field, value)?;
        }
        Ok(())
    }

    /// Load all stored fields.
    fn restore(&self) -> Result<RawFields> {
        let mut fields = RawFields::new();
        for field in Field::ALL {
            if let Some(value) = self.get(field)? {
                fields.set(field, value);
            }
        }
        Ok(fields)
    }
}
