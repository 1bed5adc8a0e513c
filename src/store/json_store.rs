//! JSON-backed ledger persistence
//!
//! Provides the [`JsonStore`], the engine's only storage collaborator. The
//! whole ledger lives in one JSON file; `load` reads it in full and `save`
//! rewrites it in full.
//!
//! # Atomicity
//!
//! `save` serializes to a sibling `<path>.tmp` file and then renames it over
//! the target. From the engine's perspective a save either lands completely
//! or the previous file contents survive; no reader ever observes a partial
//! write.
//!
//! # Error Handling
//!
//! A missing, unreadable, or syntactically invalid file yields
//! [`AtmError::StorageUnavailable`]. Whether to treat that as fatal or to
//! seed a fresh ledger is the caller's policy decision, not the store's; the
//! CLI seeds [`Ledger::demo`] when the file does not exist.

use crate::core::Ledger;
use crate::types::AtmError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Ledger store over a single JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store for the given file path
    ///
    /// No I/O happens until [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore { path: path.into() }
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the full ledger from disk
    ///
    /// # Errors
    ///
    /// [`AtmError::StorageUnavailable`] if the file is missing, unreadable,
    /// or not valid JSON.
    pub fn load(&self) -> Result<Ledger, AtmError> {
        let file = File::open(&self.path).map_err(|e| {
            AtmError::storage_unavailable(format!("cannot open {}: {}", self.path.display(), e))
        })?;

        let ledger = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            AtmError::storage_unavailable(format!("cannot parse {}: {}", self.path.display(), e))
        })?;

        Ok(ledger)
    }

    /// Write the full ledger to disk atomically
    ///
    /// Serializes to `<path>.tmp` and renames over the target, so a failure
    /// at any point leaves the previous file contents intact.
    ///
    /// # Errors
    ///
    /// [`AtmError::StorageUnavailable`] on any I/O or serialization failure.
    pub fn save(&self, ledger: &Ledger) -> Result<(), AtmError> {
        let tmp_path = self.tmp_path();

        {
            let file = File::create(&tmp_path).map_err(|e| {
                AtmError::storage_unavailable(format!(
                    "cannot create {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, ledger)?;
            writer.flush()?;
        }

        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            AtmError::storage_unavailable(format!(
                "cannot replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::io::Write as _;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("accounts.json"));

        let ledger = Ledger::demo(today());
        store.save(&ledger).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nope.json"));

        let result = store.load();
        assert!(matches!(
            result.unwrap_err(),
            AtmError::StorageUnavailable { .. }
        ));
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"{not valid json").unwrap();

        let store = JsonStore::new(&path);
        let result = store.load();
        assert!(matches!(
            result.unwrap_err(),
            AtmError::StorageUnavailable { .. }
        ));
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("accounts.json"));

        let mut ledger = Ledger::demo(today());
        store.save(&ledger).unwrap();

        ledger.insert(Account::new("1003", "Carol", "9999", dec!(7), today()));
        store.save(&ledger).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.get("1003").unwrap().holder_name, "Carol");
    }

    #[test]
    fn test_save_leaves_no_tmp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        let store = JsonStore::new(&path);

        store.save(&Ledger::demo(today())).unwrap();

        assert!(path.exists());
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("no/such/dir/accounts.json"));

        let result = store.save(&Ledger::demo(today()));
        assert!(matches!(
            result.unwrap_err(),
            AtmError::StorageUnavailable { .. }
        ));
    }

    #[test]
    fn test_exists_reflects_file_presence() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("accounts.json"));

        assert!(!store.exists());
        store.save(&Ledger::new()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_amounts_persist_as_strings_not_floats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        let store = JsonStore::new(&path);

        store.save(&Ledger::demo(today())).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"100000.00\""));
        assert!(raw.contains("\"50000.00\""));
    }
}
