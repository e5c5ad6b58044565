use super::*;

#[test]
fn default_palette_has_thirteen_black_slots_in_order() {
    let palette = Palette::with_default_slots();
    assert_eq!(palette.len(), PALETTE_SLOTS);

    let keys: Vec<&PaletteKey> = palette.keys().collect();
    let expected: Vec<String> = (0..PALETTE_SLOTS).map(|i| i.to_string()).collect();
    assert_eq!(keys, expected.iter().collect::<Vec<_>>());

    for (_, entry) in palette.iter() {
        assert_eq!(entry.color, Rgba::BLACK);
        assert_eq!(entry.selection.plane, Point { x: 120.0, y: 50.0 });
        assert_eq!(entry.selection.bar, Point { x: 100.0, y: 0.0 });
    }
}

#[test]
fn palette_keys_keep_insertion_order_not_lexicographic_order() {
    let palette = Palette::with_default_slots();
    let keys: Vec<&PaletteKey> = palette.keys().collect();
    // "2" must come before "10" even though it sorts after it as a string.
    let two = keys.iter().position(|k| k.as_str() == "2").unwrap();
    let ten = keys.iter().position(|k| k.as_str() == "10").unwrap();
    assert!(two < ten);
}

#[test]
fn palette_set_replaces_in_place_and_appends_unknown_keys() {
    let mut palette = Palette::with_default_slots();
    let entry = PaletteEntry {
        color: Rgba::opaque(9, 8, 7),
        selection: PickerSelection::default_slot(),
    };

    palette.set("4", entry.clone());
    assert_eq!(palette.len(), PALETTE_SLOTS);
    assert_eq!(palette.get("4"), Some(&entry));
    let keys: Vec<&PaletteKey> = palette.keys().collect();
    assert_eq!(keys[4].as_str(), "4");

    palette.set("extra", entry.clone());
    assert_eq!(palette.len(), PALETTE_SLOTS + 1);
    assert_eq!(palette.keys().last().unwrap().as_str(), "extra");
}

#[test]
fn pattern_json_round_trip() {
    let mut pattern = Pattern::new(4, 4);
    pattern.name = Some("pattern-0002".to_string());
    pattern.grid.set_cell(0, 3, Some("5".to_string()));
    pattern.palette.set(
        "5",
        PaletteEntry {
            color: Rgba::opaque(10, 20, 30),
            selection: PickerSelection {
                plane: Point { x: 13.0, y: 170.0 },
                bar: Point { x: 44.0, y: 0.0 },
            },
        },
    );

    let json = serde_json::to_string(&pattern).unwrap();
    let back: Pattern = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pattern);
    assert!(back.is_consistent());
}

#[test]
fn fresh_pattern_is_unnamed_and_consistent() {
    let pattern = Pattern::new(10, 12);
    assert_eq!(pattern.name, None);
    assert!(pattern.grid.is_blank());
    assert!(pattern.is_consistent());
}
