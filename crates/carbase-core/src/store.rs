//! The in-memory record store.
//!
//! `RecordStore` owns the ordered collection of vehicle records. Insertion
//! order is display order and persisted order. The store is mutated only by
//! [`RecordStore::append`] and [`RecordStore::remove_at`]; everything else is
//! a read-only view.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::codec::{self, ParseInterrupted};
use crate::error::{CarbaseError, Result};
use crate::fs::write_atomic;
use crate::record::VehicleRecord;

/// Outcome of a load: how many records were read and whether parsing
/// stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub interrupted: Option<ParseInterrupted>,
}

/// Ordered, exclusively owned collection of vehicle records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<VehicleRecord>,
    dirty: bool,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records already in memory.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        Self {
            records,
            dirty: false,
        }
    }

    /// Load records from the data file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `CarbaseError::Io` if the file cannot be opened or read. The
    /// caller may continue with an empty store.
    pub fn load(path: &Path) -> Result<(Self, LoadReport)> {
        let file = std::fs::File::open(path).map_err(|e| CarbaseError::io(path, e))?;
        let (store, report) = Self::from_reader(file).map_err(|e| match e {
            CarbaseError::Io { source, .. } => CarbaseError::io(path, source),
            other => other,
        })?;
        debug!(path = %path.display(), loaded = report.loaded, "loaded data file");
        Ok((store, report))
    }

    /// Load records from any text source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<(Self, LoadReport)> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| CarbaseError::io("<reader>", e))?;

        let (records, interrupted) = codec::decode(&text);
        if let Some(stop) = &interrupted {
            debug!(kept = records.len(), "stopped loading early: {}", stop);
        }
        let report = LoadReport {
            loaded: records.len(),
            interrupted,
        };
        Ok((Self::from_records(records), report))
    }

    /// Persist every record to `path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns `CarbaseError::UnsavableRecord` before touching the file if a
    /// text field is empty or holds whitespace, and `CarbaseError::Io` if the
    /// file cannot be written. The in-memory records are untouched either way.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let unsavable = self
            .records
            .iter()
            .enumerate()
            .find_map(|(index, record)| record.unsavable_field().map(|field| (index + 1, field)));
        if let Some((ordinal, field)) = unsavable {
            return Err(CarbaseError::UnsavableRecord { ordinal, field });
        }

        let text = codec::encode(&self.records);
        write_atomic(path, text.as_bytes()).map_err(|e| CarbaseError::io(path, e))?;
        self.dirty = false;
        debug!(path = %path.display(), saved = self.records.len(), "saved data file");
        Ok(())
    }

    /// Append a record and return its 1-based ordinal.
    pub fn append(&mut self, record: VehicleRecord) -> usize {
        self.records.push(record);
        self.dirty = true;
        self.records.len()
    }

    /// Remove the record at a 1-based ordinal, shifting later records down.
    ///
    /// # Errors
    ///
    /// Returns `CarbaseError::OutOfRange` unless `1 <= ordinal <= len`; the
    /// store is left unchanged.
    pub fn remove_at(&mut self, ordinal: usize) -> Result<VehicleRecord> {
        if !self.contains_ordinal(ordinal) {
            return Err(CarbaseError::OutOfRange {
                ordinal,
                len: self.records.len(),
            });
        }
        self.dirty = true;
        Ok(self.records.remove(ordinal - 1))
    }

    /// Whether `ordinal` names an existing record.
    pub fn contains_ordinal(&self, ordinal: usize) -> bool {
        (1..=self.records.len()).contains(&ordinal)
    }

    /// Read-only view of all records in order.
    pub fn all(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Record at a 1-based ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&VehicleRecord> {
        ordinal.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the store changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn car(brand: &str, reg: &str) -> VehicleRecord {
        VehicleRecord::new(brand, "Model", 2010, 1600, "Petrol", "Sedan", reg)
    }

    fn abc() -> RecordStore {
        RecordStore::from_records(vec![car("A", "R1"), car("B", "R2"), car("C", "R3")])
    }

    #[test]
    fn test_append_returns_ordinal() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(car("A", "R1")), 1);
        assert_eq!(store.append(car("A", "R1")), 2);
        assert_eq!(store.len(), 2);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_append_then_remove_last_restores() {
        let mut store = abc();
        let before = store.all().to_vec();

        let ordinal = store.append(car("D", "R4"));
        let removed = store.remove_at(ordinal).unwrap();

        assert_eq!(removed.brand, "D");
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_remove_first_twice_leaves_last() {
        let mut store = abc();
        assert_eq!(store.remove_at(1).unwrap().brand, "A");
        assert_eq!(store.remove_at(1).unwrap().brand, "B");
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].brand, "C");
    }

    #[test]
    fn test_remove_out_of_range_leaves_store() {
        let mut store = abc();
        let before = store.clone();

        for ordinal in [0, 4, usize::MAX] {
            match store.remove_at(ordinal) {
                Err(CarbaseError::OutOfRange { ordinal: o, len }) => {
                    assert_eq!(o, ordinal);
                    assert_eq!(len, 3);
                }
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_only_record_empties_store() {
        let mut store = RecordStore::from_records(vec![car("A", "R1")]);
        store.remove_at(1).unwrap();
        assert!(store.is_empty());
        assert!(store.remove_at(1).is_err());
    }

    #[test]
    fn test_get_by_ordinal() {
        let store = abc();
        assert_eq!(store.get(2).map(|r| r.brand.as_str()), Some("B"));
        assert!(store.get(0).is_none());
        assert!(store.get(4).is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.txt");
        let mut store = abc();
        store.append(car("D", "R4"));

        store.save(&path).unwrap();
        assert!(!store.is_dirty());

        let (loaded, report) = RecordStore::load(&path).unwrap();
        assert_eq!(loaded.all(), store.all());
        assert_eq!(report.loaded, 4);
        assert!(report.interrupted.is_none());
        assert!(!loaded.is_dirty());
    }

    #[test]
    fn test_empty_store_saves_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.txt");

        RecordStore::new().save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        let (loaded, report) = RecordStore::load(&path).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(report.loaded, 0);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = RecordStore::load(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(CarbaseError::Io { .. })));
    }

    #[test]
    fn test_failed_save_keeps_records_and_dirty_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("base.txt");
        let mut store = abc();
        store.append(car("D", "R4"));

        assert!(matches!(store.save(&path), Err(CarbaseError::Io { .. })));
        assert_eq!(store.len(), 4);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_save_refuses_records_that_would_not_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.txt");
        std::fs::write(&path, "untouched").unwrap();

        let mut store = abc();
        store.append(VehicleRecord::new(
            "Alfa Romeo",
            "Giulia",
            2019,
            2000,
            "Petrol",
            "Sedan",
            "PO1",
        ));
        store.append(VehicleRecord::new("", "Panda", 2009, 1100, "LPG", "Hatchback", "WA9876"));

        match store.save(&path) {
            Err(CarbaseError::UnsavableRecord { ordinal, field }) => {
                assert_eq!(ordinal, 4);
                assert_eq!(field, crate::record::Field::Brand);
            }
            other => panic!("expected UnsavableRecord, got {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "untouched");
        assert!(store.is_dirty());

        store.remove_at(5).unwrap();
        store.remove_at(4).unwrap();
        store.save(&path).unwrap();
        let (loaded, report) = RecordStore::load(&path).unwrap();
        assert_eq!(loaded.all(), store.all());
        assert!(report.interrupted.is_none());
    }

    #[test]
    fn test_from_reader_keeps_records_before_interruption() {
        let text = "A M 2001 1000 Petrol Sedan R1\nB M 2002 1100 Diesel";
        let (store, report) = RecordStore::from_reader(text.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(report.loaded, 1);
        assert!(report.interrupted.is_some());
    }
}
