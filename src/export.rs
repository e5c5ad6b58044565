use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbaImage};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::components::grid_canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, render_grid};
use crate::pattern::Pattern;
use crate::surface::RasterSurface;

/// Error type for PNG export.
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Encode(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Encode(e) => write!(f, "PNG encode error: {}", e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

/// Rasterize a pattern at its on-screen geometry — the same drawing routine
/// the canvas widget runs, so the snapshot is pixel-exact.
pub fn render_pattern_image(pattern: &Pattern) -> RgbaImage {
    let mut surface = RasterSurface::new(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
    render_grid(&pattern.grid, &pattern.palette, CELL_SIZE, &mut surface);
    surface.into_image()
}

/// Encode an RGBA raster as a PNG byte buffer.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Render and write a pattern snapshot as a PNG file.
pub fn write_png(pattern: &Pattern, path: &Path) -> Result<(), ExportError> {
    let image = render_pattern_image(pattern);
    let writer = BufWriter::new(File::create(path)?);
    PngEncoder::new(writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| ExportError::Encode(e.to_string()))
}

/// Default download name: `pattern-<ISO 8601 timestamp>.png`.
pub fn default_export_name() -> String {
    let stamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown-time".to_string());
    format!("pattern-{}.png", stamp)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
