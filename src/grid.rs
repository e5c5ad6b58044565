use serde::{Deserialize, Serialize};

use crate::pattern::PaletteKey;

/// Rectangular stitch grid, indexed `[row][col]`.  A cell holds the palette
/// key painted into it, or `None` for the no-draw state.  Dimensions are
/// fixed at creation; there is no resize path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<PaletteKey>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Grid sized to a drawing area: `floor(height/cell)` rows by
    /// `floor(width/cell)` columns.
    pub fn from_canvas(width: f32, height: f32, cell_size: f32) -> Self {
        Self::new(
            (height / cell_size).floor() as usize,
            (width / cell_size).floor() as usize,
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Write a cell.  Out-of-range indices are ignored — callers hand us
    /// pointer-derived coordinates that routinely land past the edges.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Option<PaletteKey>) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
        }
    }

    /// The key painted into a cell; `None` for empty or out-of-range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&PaletteKey> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col].as_ref()
        } else {
            None
        }
    }

    /// Reset every cell to the no-draw state.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Number of painted (non-empty) cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Structural invariant check for deserialized grids: the cell buffer
    /// must match the declared dimensions.
    pub fn is_consistent(&self) -> bool {
        self.cells.len() == self.rows * self.cols
    }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
