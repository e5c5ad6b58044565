use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::grid::Grid;

/// Stable palette slot identifier (a numeric index rendered as a string).
pub type PaletteKey = String;

/// Number of color slots a fresh pattern starts with.
pub const PALETTE_SLOTS: usize = 13;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Last committed pointer positions on the picker's two sub-surfaces.
/// Together with the surface geometry these reconstruct the displayed color
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickerSelection {
    pub plane: Point,
    pub bar: Point,
}

impl PickerSelection {
    /// Selection every fresh slot starts from.
    pub fn default_slot() -> Self {
        Self {
            plane: Point { x: 120.0, y: 50.0 },
            bar: Point { x: 100.0, y: 0.0 },
        }
    }
}

/// One user-assignable palette color plus the picker state that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgba,
    pub selection: PickerSelection,
}

impl PaletteEntry {
    pub fn default_slot() -> Self {
        Self {
            color: Rgba::BLACK,
            selection: PickerSelection::default_slot(),
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Keyed color slots.  Stored as a vector so insertion order is display
/// order — a map keyed by "0".."12" would shuffle "10" ahead of "2".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    slots: Vec<(PaletteKey, PaletteEntry)>,
}

impl Palette {
    /// The default palette: `PALETTE_SLOTS` black slots keyed "0", "1", ….
    pub fn with_default_slots() -> Self {
        Self {
            slots: (0..PALETTE_SLOTS)
                .map(|i| (i.to_string(), PaletteEntry::default_slot()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PaletteEntry> {
        self.slots.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Replace the entry for `key`, or append a new slot if the key is not
    /// present yet.  Existing slots keep their position.
    pub fn set(&mut self, key: &str, entry: PaletteEntry) {
        if let Some(slot) = self.slots.iter_mut().find(|(k, _)| k == key) {
            slot.1 = entry;
        } else {
            self.slots.push((key.to_string(), entry));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PaletteKey, &PaletteEntry)> {
        self.slots.iter().map(|(k, e)| (k, e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &PaletteKey> {
        self.slots.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// A complete document: display name (assigned on first save), palette, and
/// grid.  Persisted as a JSON snapshot; replaced wholesale on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: Option<String>,
    pub palette: Palette,
    pub grid: Grid,
}

impl Pattern {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            name: None,
            palette: Palette::with_default_slots(),
            grid: Grid::new(rows, cols),
        }
    }

    /// Invariants a deserialized snapshot must satisfy before it may replace
    /// the live pattern.
    pub fn is_consistent(&self) -> bool {
        self.grid.is_consistent() && !self.palette.is_empty()
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
