use super::*;
use crate::color::Rgba;
use crate::pattern::{PaletteEntry, Pattern, PickerSelection, Point};

fn sample_pattern() -> Pattern {
    let mut pattern = Pattern::new(5, 5);
    pattern.grid.set_cell(0, 0, Some("3".to_string()));
    pattern.grid.set_cell(4, 4, Some("0".to_string()));
    pattern.palette.set(
        "3",
        PaletteEntry {
            color: Rgba::opaque(10, 20, 30),
            selection: PickerSelection {
                plane: Point { x: 55.0, y: 21.0 },
                bar: Point { x: 8.0, y: 0.0 },
            },
        },
    );
    pattern
}

// =============================================================================
// naming
// =============================================================================

#[test]
fn first_save_is_pattern_0000_then_0001() {
    let mut library = PatternLibrary::new(MemStore::default());
    let name = library.save(&mut sample_pattern()).unwrap();
    assert_eq!(name, "pattern-0000");
    let name = library.save(&mut sample_pattern()).unwrap();
    assert_eq!(name, "pattern-0001");
}

#[test]
fn next_name_skips_past_the_largest_suffix() {
    let mut store = MemStore::default();
    let json = serde_json::to_string(&sample_pattern()).unwrap();
    store.set("pattern-0000", &json).unwrap();
    store.set("pattern-0017", &json).unwrap();
    // Non-numeric suffixes and unrelated keys are ignored.
    store.set("pattern-final", &json).unwrap();
    store.set("settings", "{}").unwrap();

    let library = PatternLibrary::new(store);
    assert_eq!(library.next_name().unwrap(), "pattern-0018");
}

#[test]
fn save_writes_the_assigned_name_into_the_pattern() {
    let mut library = PatternLibrary::new(MemStore::default());
    let mut pattern = sample_pattern();
    assert_eq!(pattern.name, None);
    let name = library.save(&mut pattern).unwrap();
    assert_eq!(pattern.name.as_deref(), Some(name.as_str()));
}

// =============================================================================
// round trip
// =============================================================================

#[test]
fn save_then_load_round_trips_grid_and_palette() {
    let mut library = PatternLibrary::new(MemStore::default());
    let mut pattern = sample_pattern();
    let name = library.save(&mut pattern).unwrap();

    let loaded = library.load(&name).unwrap();
    assert_eq!(loaded, pattern);
}

#[test]
fn saved_names_lists_only_pattern_keys() {
    let mut library = PatternLibrary::new(MemStore::default());
    library.save(&mut sample_pattern()).unwrap();
    library.save(&mut sample_pattern()).unwrap();

    let mut names = library.saved_names().unwrap();
    names.sort();
    assert_eq!(names, vec!["pattern-0000", "pattern-0001"]);
}

// =============================================================================
// failure modes
// =============================================================================

#[test]
fn load_of_missing_name_is_not_found() {
    let library = PatternLibrary::new(MemStore::default());
    match library.load("pattern-0042") {
        Err(StoreError::NotFound(name)) => assert_eq!(name, "pattern-0042"),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn load_of_unparseable_json_is_corrupt() {
    let mut store = MemStore::default();
    store.set("pattern-0000", "{ this is not json").unwrap();
    let library = PatternLibrary::new(store);
    assert!(matches!(
        library.load("pattern-0000"),
        Err(StoreError::CorruptPattern { .. })
    ));
}

#[test]
fn load_of_wrong_shape_is_corrupt() {
    let mut store = MemStore::default();
    store.set("pattern-0000", r#"{"layers": [1, 2, 3]}"#).unwrap();
    let library = PatternLibrary::new(store);
    assert!(matches!(
        library.load("pattern-0000"),
        Err(StoreError::CorruptPattern { .. })
    ));
}

#[test]
fn load_of_inconsistent_grid_is_corrupt() {
    // Parses fine, but the cell buffer is shorter than rows × cols.
    let json = r#"{
        "name": "pattern-0000",
        "palette": { "slots": [["0", {
            "color": {"r":0,"g":0,"b":0,"a":255},
            "selection": {"plane":{"x":120.0,"y":50.0},"bar":{"x":100.0,"y":0.0}}
        }]] },
        "grid": { "rows": 3, "cols": 3, "cells": [null, null] }
    }"#;
    let mut store = MemStore::default();
    store.set("pattern-0000", json).unwrap();
    let library = PatternLibrary::new(store);
    assert!(matches!(
        library.load("pattern-0000"),
        Err(StoreError::CorruptPattern { .. })
    ));
}

#[test]
fn delete_of_absent_name_is_a_noop() {
    let mut library = PatternLibrary::new(MemStore::default());
    assert!(library.delete("pattern-9999").is_ok());
}

#[test]
fn delete_removes_the_snapshot() {
    let mut library = PatternLibrary::new(MemStore::default());
    let name = library.save(&mut sample_pattern()).unwrap();
    library.delete(&name).unwrap();
    assert!(library.saved_names().unwrap().is_empty());
    assert!(matches!(library.load(&name), Err(StoreError::NotFound(_))));
}

// =============================================================================
// FsStore
// =============================================================================

#[test]
fn fs_store_set_get_list_remove() {
    let dir = std::env::temp_dir().join(format!("stitchpad-store-test-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut store = FsStore::open(dir.clone()).unwrap();
    assert!(store.list_keys().unwrap().is_empty());
    assert_eq!(store.get("pattern-0000").unwrap(), None);

    store.set("pattern-0000", "{}").unwrap();
    assert_eq!(store.get("pattern-0000").unwrap().as_deref(), Some("{}"));
    assert_eq!(store.list_keys().unwrap(), vec!["pattern-0000"]);

    store.remove("pattern-0000").unwrap();
    store.remove("pattern-0000").unwrap(); // absent: still fine
    assert!(store.list_keys().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
