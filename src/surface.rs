use eframe::egui;
use egui::{Pos2, Rect, Vec2};
use image::RgbaImage;

use crate::color::Rgba;

/// Minimal immediate-mode drawing surface — the capability set the grid
/// renderer needs.  The egui painter adapts it for the screen;
/// `RasterSurface` backs the PNG export and the render tests, so both paths
/// share one drawing routine.
pub trait DrawSurface {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
}

// ============================================================================
// Raster backend
// ============================================================================

/// CPU raster target over an `image::RgbaImage`.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl DrawSurface for RasterSurface {
    fn clear(&mut self, color: Rgba) {
        let px = color.to_image();
        for pixel in self.image.pixels_mut() {
            *pixel = px;
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        // Round edges to whole pixels; fills are opaque overwrites.
        let x0 = x.round().max(0.0) as u32;
        let y0 = y.round().max(0.0) as u32;
        let x1 = (x + w).round().min(self.image.width() as f32).max(0.0) as u32;
        let y1 = (y + h).round().min(self.image.height() as f32).max(0.0) as u32;
        let px = color.to_image();
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.image.put_pixel(xx, yy, px);
            }
        }
    }
}

// ============================================================================
// egui painter adapter
// ============================================================================

/// Routes surface draws to an egui painter, offset to the widget's
/// on-screen origin.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self, _color: Rgba) {
        // egui repaints the whole widget every frame; there is nothing to
        // erase.
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(w, h));
        self.painter.rect_filled(rect, 0.0, color.to_color32());
    }
}
