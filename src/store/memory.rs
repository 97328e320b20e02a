//! In-memory field store.

use std::collections::HashMap;

use crate::error::Result;
use crate::input::Field;

use super::FieldStore;

/// Field store backed by a `HashMap`, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    fields: HashMap<Field, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldStore for MemoryStore {
    fn get(&self, field: Field) -> Result<Option<String>> {
        Ok(self.fields.get(&field).cloned())
    }

    fn set(&mut self, field: Field, value: &str) -> Result<()> {
        self.fields.insert(field, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawFields;

    #[test]
    fn test_save_and_restore() {
        let mut store = MemoryStore::new();
        let fields = RawFields::new()
            .with(Field::Vin, "12")
            .with(Field::Res1, "4.7");

        store.save(&fields).unwrap();
        assert_eq!(store.get(Field::Vin).unwrap().as_deref(), Some("12"));
        assert_eq!(store.get(Field::Vout).unwrap(), None);
        assert_eq!(store.restore().unwrap(), fields);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set(Field::Freq, "50").unwrap();
        store.set(Field::Freq, "75").unwrap();
        assert_eq!(store.get(Field::Freq).unwrap().as_deref(), Some("75"));
    }
}
