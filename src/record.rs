//! Persistent best-score storage.

use crate::constants::RECORD_FILE;
use crate::utils::persistence;
use std::io;
use std::path::PathBuf;

/// Reads and writes the record file.
///
/// The file's entire content is the decimal encoding of the best score, e.g.
/// `5`. A missing or unparseable file counts as no record.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Store under the per-user data directory (`~/.serpent/record.json`).
    pub fn open() -> io::Result<Self> {
        Ok(Self {
            path: persistence::save_path(RECORD_FILE)?,
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the record, defaulting to 0 when the file is missing or invalid.
    pub fn load(&self) -> u32 {
        persistence::load_json_or_default(&self.path)
    }

    /// Persist a new record.
    pub fn save(&self, record: u32) -> io::Result<()> {
        persistence::save_json(&self.path, &record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store(name: &str) -> RecordStore {
        let path = std::env::temp_dir().join(format!("serpent_record_{}.json", name));
        let _ = fs::remove_file(&path);
        RecordStore::at(path)
    }

    #[test]
    fn test_missing_file_loads_zero() {
        assert_eq!(store("missing").load(), 0);
    }

    #[test]
    fn test_save_writes_decimal_string() {
        let store = store("decimal");
        store.save(5).expect("save should succeed");
        let content = fs::read_to_string(store.path()).expect("file should exist");
        assert_eq!(content, "5");
        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_roundtrip() {
        let store = store("roundtrip");
        store.save(42).expect("save should succeed");
        assert_eq!(store.load(), 42);
        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_unparseable_file_loads_zero() {
        let store = store("garbage");
        fs::write(store.path(), "not a number").expect("write should succeed");
        assert_eq!(store.load(), 0);
        fs::remove_file(store.path()).ok();
    }
}
