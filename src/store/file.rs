//! JSON file field store used by the CLI.
//!
//! The file is a flat object of raw strings:
//!
//! ```json
//! { "vin": "12", "vout": "5", "iout": "500", "freq": "50", "res1": "10" }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CalcError, Result};
use crate::input::{Field, RawFields};

use super::FieldStore;

/// On-disk layout of the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    freq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    res1: Option<String>,
}

impl StoredFields {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Vin => &mut self.vin,
            Field::Vout => &mut self.vout,
            Field::Iout => &mut self.iout,
            Field::Freq => &mut self.freq,
            Field::Res1 => &mut self.res1,
        }
    }

    fn get(&self, field: Field) -> Option<&String> {
        match field {
            Field::Vin => self.vin.as_ref(),
            Field::Vout => self.vout.as_ref(),
            Field::Iout => self.iout.as_ref(),
            Field::Freq => self.freq.as_ref(),
            Field::Res1 => self.res1.as_ref(),
        }
    }
}

/// Field store persisted as a JSON file.
///
/// The file is read once when the store is opened and rewritten on every
/// change. A missing file is an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    fields: StoredFields,
}

impl FileStore {
    /// Open the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let shown = path.display().to_string();

        let fields = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| CalcError::store_format(&shown, e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %shown, "field store not found, starting empty");
                StoredFields::default()
            }
            Err(e) => return Err(CalcError::store_read(&shown, e)),
        };

        Ok(Self { path, fields })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let shown = self.path.display().to_string();
        let content = serde_json::to_string_pretty(&self.fields)
            .map_err(|e| CalcError::store_format(&shown, e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| CalcError::store_write(&shown, e))?;
        debug!(path = %shown, "field store written");
        Ok(())
    }
}

impl FieldStore for FileStore {
    fn get(&self, field: Field) -> Result<Option<String>> {
        Ok(self.fields.get(field).cloned())
    }

    fn set(&mut self, field: Field, value: &str) -> Result<()> {
        *self.fields.slot(field) = Some(value.to_string());
        self.flush()
    }

    fn save(&mut self, fields: &RawFields) -> Result<()> {
        for (field, value) in fields.iter() {
            *self.fields.slot(field) = Some(value.to_string());
        }
        self.flush()?;
        info!(path = %self.path.display(), "fields have been saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("fields.json")).unwrap();
        assert_eq!(store.restore().unwrap(), RawFields::new());
    }

    #[test]
    fn test_save_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.json");
        let fields = RawFields::new()
            .with(Field::Vin, "12")
            .with(Field::Vout, "-5")
            .with(Field::Iout, "500");

        let mut store = FileStore::open(&path).unwrap();
        store.save(&fields).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.restore().unwrap(), fields);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["vout"], "-5");
        assert!(json.get("freq").is_none());
    }

    #[test]
    fn test_raw_text_is_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(Field::Res1, " 4.7k ").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(Field::Res1).unwrap().as_deref(), Some(" 4.7k "));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.json");
        fs::write(&path, "{ \"vin\": 12 }").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, CalcError::StoreFormat { .. }));
    }

    #[test]
    fn test_unreadable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, CalcError::StoreRead { .. }));
    }

    #[test]
    fn test_set_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(Field::Freq, "50").unwrap();
        store.set(Field::Freq, "75").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(Field::Freq).unwrap().as_deref(), Some("75"));
    }
}
