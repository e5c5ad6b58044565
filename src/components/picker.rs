use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use crate::color::{Rgba, bar_color, plane_color, HUE_BAR_STOPS, hue_color};
use crate::pattern::{PaletteEntry, PaletteKey, PickerSelection, Point};

/// Sub-surface geometry — the widget's fixed layout.
pub const PLANE_WIDTH: f32 = 200.0;
pub const PLANE_HEIGHT: f32 = 200.0;
pub const BAR_WIDTH: f32 = 200.0;
pub const BAR_HEIGHT: f32 = 30.0;

const SWATCH_HEIGHT: f32 = 55.0;
const INDICATOR_RADIUS: f32 = 10.0;
const INDICATOR_STROKE: f32 = 1.5;

// ============================================================================
// Model — analytic selection state
// ============================================================================

/// Selection points plus the committed color.  The displayed color is
/// always derived bar-first from the two points in one pass, so a bar
/// change can never pair with a stale plane hue.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerModel {
    plane_point: Point,
    bar_point: Point,
    committed: Rgba,
}

impl PickerModel {
    pub fn new(color: Rgba, selection: PickerSelection) -> Self {
        Self {
            plane_point: selection.plane,
            bar_point: selection.bar,
            committed: color,
        }
    }

    pub fn selection(&self) -> PickerSelection {
        PickerSelection {
            plane: self.plane_point,
            bar: self.bar_point,
        }
    }

    pub fn committed(&self) -> Rgba {
        self.committed
    }

    /// Hue under the bar's selection point.
    pub fn bar_hue(&self) -> Rgba {
        bar_color(self.bar_point.x / BAR_WIDTH)
    }

    /// Color under the plane's selection point, derived bar-first.  An
    /// exactly opaque-black derivation counts as "no valid sample" and
    /// yields the committed color instead; pure black cannot be picked
    /// from the plane.
    pub fn current_color(&self) -> Rgba {
        let derived = plane_color(
            self.bar_hue(),
            self.plane_point.x / PLANE_WIDTH,
            self.plane_point.y / PLANE_HEIGHT,
        );
        if derived == Rgba::BLACK {
            self.committed
        } else {
            derived
        }
    }

    /// Move the plane point (sub-surface-local coordinates, clamped in).
    pub fn select_on_plane(&mut self, x: f32, y: f32) {
        self.plane_point = Point {
            x: x.clamp(0.0, PLANE_WIDTH),
            y: y.clamp(0.0, PLANE_HEIGHT),
        };
    }

    /// Move the bar point; the bar selects on x only.
    pub fn select_on_bar(&mut self, x: f32) {
        self.bar_point.x = x.clamp(0.0, BAR_WIDTH);
    }

    /// Finalize: the current color becomes the committed color and is
    /// returned with the points that produced it.
    pub fn commit(&mut self) -> (Rgba, PickerSelection) {
        self.committed = self.current_color();
        (self.committed, self.selection())
    }

    /// Parent-authoritative overwrite (pattern load): replace both points
    /// and the committed color.
    pub fn reset(&mut self, color: Rgba, selection: PickerSelection) {
        self.committed = color;
        self.plane_point = selection.plane;
        self.bar_point = selection.bar;
    }
}

// ============================================================================
// ColorPicker widget
// ============================================================================

/// Payload delivered to the parent when a picker confirms a color.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerCommit {
    pub key: PaletteKey,
    pub color: Rgba,
    pub selection: PickerSelection,
}

/// Swatch + Edit/Close toggle, expanding to the plane and hue-bar
/// sub-surfaces.  Emits a `PickerCommit` when the user confirms: clicking
/// the swatch, toggling the picker closed, or pressing anywhere outside it
/// while open.
pub struct ColorPicker {
    key: PaletteKey,
    model: PickerModel,
    open: bool,
    dragging_plane: bool,
    dragging_bar: bool,
}

impl ColorPicker {
    pub fn new(key: PaletteKey, entry: &PaletteEntry) -> Self {
        Self {
            key,
            model: PickerModel::new(entry.color, entry.selection),
            open: false,
            dragging_plane: false,
            dragging_bar: false,
        }
    }

    pub fn key(&self) -> &PaletteKey {
        &self.key
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn model(&self) -> &PickerModel {
        &self.model
    }

    /// Parent-authoritative reset (pattern load): overwrite local state and
    /// abandon any in-progress drag.
    pub fn reset(&mut self, entry: &PaletteEntry) {
        self.model.reset(entry.color, entry.selection);
        self.dragging_plane = false;
        self.dragging_bar = false;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PickerCommit> {
        let mut commit = None;

        // -- swatch + Edit/Close toggle --------------------------------
        let header = ui.horizontal(|ui| {
            let (rect, resp) =
                ui.allocate_exact_size(Vec2::new(PLANE_WIDTH - 58.0, SWATCH_HEIGHT), Sense::click());
            if ui.is_rect_visible(rect) {
                let p = ui.painter();
                p.rect_filled(rect, 0.0, self.model.current_color().to_color32());
                p.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_black_alpha(40)));
            }
            if resp.clicked() {
                commit = Some(self.commit());
            }

            let label = if self.open { "Close" } else { "Edit" };
            if ui.button(label).clicked() {
                if self.open {
                    commit = Some(self.commit());
                }
                self.open = !self.open;
            }
        });
        let mut widget_rect = header.response.rect;

        // -- expanded sub-surfaces -------------------------------------
        if self.open {
            let hue = self.model.bar_hue();

            // Plane: white→hue across, black overlay down.
            let (plane_rect, plane_resp) = ui.allocate_exact_size(
                Vec2::new(PLANE_WIDTH, PLANE_HEIGHT),
                Sense::click_and_drag(),
            );
            if ui.is_rect_visible(plane_rect) {
                draw_plane(ui.painter(), plane_rect, hue, self.model.selection().plane);
            }
            let plane_pressed = plane_resp.drag_started() || plane_resp.clicked();
            if plane_pressed {
                self.dragging_plane = true;
            }
            if self.dragging_plane
                && (plane_pressed || plane_resp.dragged())
                && let Some(mp) = plane_resp.interact_pointer_pos()
            {
                self.model
                    .select_on_plane(mp.x - plane_rect.min.x, mp.y - plane_rect.min.y);
            }
            if !plane_resp.dragged() {
                self.dragging_plane = false;
            }
            widget_rect = widget_rect.union(plane_rect);

            // Hue bar: x-only selection.
            let (bar_rect, bar_resp) = ui
                .allocate_exact_size(Vec2::new(BAR_WIDTH, BAR_HEIGHT), Sense::click_and_drag());
            if ui.is_rect_visible(bar_rect) {
                draw_bar(ui.painter(), bar_rect, self.model.selection().bar);
            }
            let bar_pressed = bar_resp.drag_started() || bar_resp.clicked();
            if bar_pressed {
                self.dragging_bar = true;
            }
            if self.dragging_bar
                && (bar_pressed || bar_resp.dragged())
                && let Some(mp) = bar_resp.interact_pointer_pos()
            {
                self.model.select_on_bar(mp.x - bar_rect.min.x);
            }
            if !bar_resp.dragged() {
                self.dragging_bar = false;
            }
            widget_rect = widget_rect.union(bar_rect);

            // A press anywhere outside the widget commits the selection and
            // closes the picker.
            let outside_press = ui.input(|i| {
                i.pointer.any_pressed()
                    && i.pointer
                        .interact_pos()
                        .is_some_and(|pos| !widget_rect.contains(pos))
            });
            if outside_press {
                commit = Some(self.commit());
                self.open = false;
            }
        }

        commit
    }

    fn commit(&mut self) -> PickerCommit {
        let (color, selection) = self.model.commit();
        PickerCommit {
            key: self.key.clone(),
            color,
            selection,
        }
    }
}

// ============================================================================
// Sub-surface rendering — a view of the analytic gradients
// ============================================================================

/// Column-strip mesh of the plane gradient.  Vertical interpolation is
/// exact per column; 32 columns keep the horizontal step invisible.
fn draw_plane(painter: &egui::Painter, rect: Rect, hue: Rgba, point: Point) {
    let cols = 32;
    let mut mesh = egui::Mesh::default();
    for i in 0..=cols {
        let fx = i as f32 / cols as f32;
        let x = rect.min.x + fx * rect.width();
        let top = plane_color(hue, fx, 0.0).to_color32();
        let bottom = plane_color(hue, fx, 1.0).to_color32();
        mesh.colored_vertex(Pos2::new(x, rect.min.y), top);
        mesh.colored_vertex(Pos2::new(x, rect.max.y), bottom);
    }
    for i in 0..cols {
        let b = (i * 2) as u32;
        mesh.add_triangle(b, b + 1, b + 3);
        mesh.add_triangle(b, b + 3, b + 2);
    }
    painter.add(egui::Shape::mesh(mesh));

    painter.circle_stroke(
        rect.min + Vec2::new(point.x, point.y),
        INDICATOR_RADIUS,
        Stroke::new(INDICATOR_STROKE, Color32::WHITE),
    );
}

/// The seven-stop hue gradient, one quad per segment, plus the selection
/// ring at the bar's vertical center.
fn draw_bar(painter: &egui::Painter, rect: Rect, point: Point) {
    let mut mesh = egui::Mesh::default();
    for (offset, hue) in HUE_BAR_STOPS {
        let x = rect.min.x + offset * rect.width();
        let color = hue_color(hue).to_color32();
        mesh.colored_vertex(Pos2::new(x, rect.min.y), color);
        mesh.colored_vertex(Pos2::new(x, rect.max.y), color);
    }
    for i in 0..HUE_BAR_STOPS.len() - 1 {
        let b = (i * 2) as u32;
        mesh.add_triangle(b, b + 1, b + 3);
        mesh.add_triangle(b, b + 3, b + 2);
    }
    painter.add(egui::Shape::mesh(mesh));

    painter.circle_stroke(
        Pos2::new(rect.min.x + point.x, rect.center().y),
        INDICATOR_RADIUS,
        Stroke::new(INDICATOR_STROKE, Color32::BLACK),
    );
}

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;
