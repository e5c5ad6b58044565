use eframe::egui;
use egui::{Color32, Pos2, Sense, Vec2};

use crate::color::Rgba;
use crate::grid::Grid;
use crate::pattern::{Palette, PaletteKey};
use crate::surface::{DrawSurface, PainterSurface, RasterSurface};

/// Logical drawing area and cell geometry — the tool's fixed layout.
pub const CANVAS_WIDTH: f32 = 1000.0;
pub const CANVAS_HEIGHT: f32 = 1000.0;
pub const CELL_SIZE: f32 = 18.0;

/// Gridline stroke color.
const LINE_COLOR: Rgba = Rgba::opaque(60, 60, 60);

// ============================================================================
// Pointer state machine
// ============================================================================

/// Painting is armed by pointer-down on the canvas and disarmed by release
/// or by the pointer leaving the widget.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Painting,
}

// ============================================================================
// GridCanvas widget
// ============================================================================

/// Owns the grid model, maps pointer positions to cell writes, and renders
/// cells plus gridlines.
pub struct GridCanvas {
    grid: Grid,
    cell_size: f32,
    /// Key painted on pointer contact; `None` erases.
    active_key: Option<PaletteKey>,
    state: PaintState,
}

impl GridCanvas {
    pub fn new() -> Self {
        Self {
            grid: Grid::from_canvas(CANVAS_WIDTH, CANVAS_HEIGHT, CELL_SIZE),
            cell_size: CELL_SIZE,
            active_key: None,
            state: PaintState::Idle,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Swap in a loaded grid wholesale (pattern load).
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.state = PaintState::Idle;
    }

    pub fn set_active_key(&mut self, key: Option<PaletteKey>) {
        self.active_key = key;
    }

    pub fn active_key(&self) -> Option<&PaletteKey> {
        self.active_key.as_ref()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Write `key` into the cell under `pointer`, given the canvas's
    /// on-screen origin: canvas-local coordinates, then integer
    /// floor-division by the cell size.  Positions that resolve outside the
    /// grid are ignored — drags routinely sample past the edges.
    pub fn paint_at(&mut self, pointer: Pos2, origin: Pos2, key: Option<PaletteKey>) {
        let local = pointer - origin;
        let col = (local.x / self.cell_size).floor();
        let row = (local.y / self.cell_size).floor();
        if row < 0.0 || col < 0.0 || row >= self.grid.rows() as f32 || col >= self.grid.cols() as f32
        {
            return;
        }
        self.grid.set_cell(row as usize, col as usize, key);
    }

    /// PNG-encoded snapshot of the current rendering, pixel-exact against
    /// what the widget draws on screen.
    pub fn export_image(&self, palette: &Palette) -> Result<Vec<u8>, crate::export::ExportError> {
        let mut surface = RasterSurface::new(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
        render_grid(&self.grid, palette, self.cell_size, &mut surface);
        crate::export::encode_png(&surface.into_image())
    }

    /// Paint the widget and run the pointer state machine.
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &Palette) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            Sense::click_and_drag(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            // Page backdrop behind the (transparent-cleared) grid rendering.
            painter.rect_filled(rect, 0.0, Color32::WHITE);
            let mut surface = PainterSurface::new(&painter, rect.min);
            render_grid(&self.grid, palette, self.cell_size, &mut surface);
        }

        // IDLE → PAINTING on pointer-down, with an immediate paint at the
        // down position; repaint at every sampled move while held.  Cells
        // between samples are not interpolated, so fast drags may skip
        // cells.
        let pressed = response.drag_started() || response.clicked();
        if pressed {
            self.state = PaintState::Painting;
        }
        if self.state == PaintState::Painting
            && (pressed || response.dragged())
            && let Some(pos) = response.interact_pointer_pos()
        {
            let key = self.active_key.clone();
            self.paint_at(pos, rect.min, key);
        }
        if !pressed && !response.dragged() {
            self.state = PaintState::Idle;
        }

        response
    }
}

impl Default for GridCanvas {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Full redraw: clear, fill every painted cell from the palette, then
/// overlay gridlines.  Fills must come first so lines stay visible.
pub fn render_grid(grid: &Grid, palette: &Palette, cell_size: f32, surface: &mut dyn DrawSurface) {
    surface.clear(Rgba::TRANSPARENT);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if let Some(key) = grid.cell(row, col)
                && let Some(entry) = palette.get(key)
            {
                surface.fill_rect(
                    col as f32 * cell_size,
                    row as f32 * cell_size,
                    cell_size,
                    cell_size,
                    entry.color,
                );
            }
        }
    }

    let width = grid.cols() as f32 * cell_size;
    let height = grid.rows() as f32 * cell_size;
    for index in 0..=grid.cols() {
        let w = line_width(index);
        surface.fill_rect(index as f32 * cell_size - w / 2.0, 0.0, w, height, LINE_COLOR);
    }
    for index in 0..=grid.rows() {
        let w = line_width(index);
        surface.fill_rect(0.0, index as f32 * cell_size - w / 2.0, width, w, LINE_COLOR);
    }
}

/// Stroke width for gridline `index`: heavier marks at every 10th line and
/// heavier still at every 30th.
fn line_width(index: usize) -> f32 {
    if index % 30 == 0 {
        2.5
    } else if index % 10 == 0 {
        2.0
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "grid_canvas_test.rs"]
mod grid_canvas_test;
