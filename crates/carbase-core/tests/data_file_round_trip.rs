use std::fs;

use carbase_core::{search, CarbaseError, Criterion, Field, RecordStore, VehicleRecord};
use tempfile::tempdir;

fn fleet() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord::new("Toyota", "Corolla", 2020, 1800, "Petrol", "Sedan", "AB123CD"),
        VehicleRecord::new("Toyota", "Auris", 2015, 1600, "Hybrid", "Hatchback", "AB777KK"),
        VehicleRecord::new("Volvo", "V70", 2008, 2400, "Diesel", "Combi", "ZS40421"),
    ]
}

#[test]
fn test_save_load_round_trip_preserves_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("base.txt");

    let mut store = RecordStore::new();
    for record in fleet() {
        store.append(record);
    }
    store.save(&path).expect("save should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    assert_eq!(on_disk.lines().count(), 21);
    assert!(on_disk.ends_with("ZS40421"));

    let (loaded, report) = RecordStore::load(&path).expect("load should succeed");
    assert_eq!(report.loaded, 3);
    assert_eq!(loaded.all(), fleet().as_slice());
}

#[test]
fn test_load_truncated_file_keeps_complete_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("base.txt");

    let full = fleet();
    let mut text = carbase_core::codec::encode(&full[..2]);
    // Third record without its registration: 20 tokens, the 21st missing.
    text.push_str("\nVolvo\nV70\n2008\n2400\nDiesel\nCombi\n");
    fs::write(&path, text).expect("write should succeed");

    let (loaded, report) = RecordStore::load(&path).expect("load should succeed");
    assert_eq!(loaded.len(), 2);
    assert!(report.interrupted.is_some());
}

#[test]
fn test_load_fourteen_tokens_yields_two_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("base.txt");
    fs::write(&path, carbase_core::codec::encode(&fleet()[..2])).expect("write");

    let (loaded, report) = RecordStore::load(&path).expect("load should succeed");
    assert_eq!(loaded.len(), 2);
    assert!(report.interrupted.is_none());
}

#[test]
fn test_remove_then_save_then_search() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("base.txt");

    let mut store = RecordStore::from_records(fleet());
    store.remove_at(1).expect("remove should succeed");
    assert!(matches!(
        store.remove_at(3),
        Err(CarbaseError::OutOfRange { ordinal: 3, len: 2 })
    ));
    store.save(&path).expect("save should succeed");

    let (loaded, _) = RecordStore::load(&path).expect("load should succeed");
    let hits = search(&loaded, Field::Brand, &Criterion::Exact("Toyota".into()))
        .expect("search should succeed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ordinal, 1);
    assert_eq!(hits[0].record.model, "Auris");
}
