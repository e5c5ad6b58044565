use egui::Color32;
use serde::{Deserialize, Serialize};

// ============================================================================
// RGBA color value
// ============================================================================

/// Straight (un-premultiplied) 8-bit RGBA.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }

    pub fn to_image(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

// ============================================================================
// Analytic picker gradients
// ============================================================================
//
// The picker never reads rendered pixels back; the gradients drawn on
// screen are a view of these closed-form functions, and the selected color
// is computed from the pointer's fractional position within each surface.

/// Hue-bar gradient stops: (offset fraction, hue in degrees).  The offsets
/// are sevenths, not sixths; the bar's appearance depends on these exact
/// fractions.
pub const HUE_BAR_STOPS: [(f32, f32); 7] = [
    (0.0, 0.0),
    (2.0 / 7.0, 60.0),
    (3.0 / 7.0, 120.0),
    (4.0 / 7.0, 180.0),
    (5.0 / 7.0, 240.0),
    (6.0 / 7.0, 300.0),
    (1.0, 360.0),
];

/// Fully saturated, half-lightness hue → RGB (`hsl(deg, 100%, 50%)`).
pub fn hue_color(deg: f32) -> Rgba {
    let h = deg.rem_euclid(360.0) / 60.0;
    let x = (255.0 * (1.0 - ((h % 2.0) - 1.0).abs())).round() as u8;
    match h as i32 {
        0 => Rgba::opaque(255, x, 0),
        1 => Rgba::opaque(x, 255, 0),
        2 => Rgba::opaque(0, 255, x),
        3 => Rgba::opaque(0, x, 255),
        4 => Rgba::opaque(x, 0, 255),
        _ => Rgba::opaque(255, 0, x),
    }
}

/// Color of the hue bar at fractional position `t` (0 = left edge):
/// piecewise-linear RGB interpolation between the stops, the same result a
/// linear gradient rasterizer produces.
pub fn bar_color(t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    for pair in HUE_BAR_STOPS.windows(2) {
        let (f0, h0) = pair[0];
        let (f1, h1) = pair[1];
        if t <= f1 {
            let u = (t - f0) / (f1 - f0);
            return lerp_rgb(hue_color(h0), hue_color(h1), u);
        }
    }
    hue_color(360.0)
}

/// Color of the plane at fractional position (`fx` rightward, `fy`
/// downward): a white→hue horizontal gradient under a transparent→opaque
/// black vertical overlay, composited source-over.
pub fn plane_color(hue: Rgba, fx: f32, fy: f32) -> Rgba {
    let fx = fx.clamp(0.0, 1.0);
    let fy = fy.clamp(0.0, 1.0);
    let horiz = lerp_rgb(Rgba::WHITE, hue, fx);
    let lit = 1.0 - fy;
    Rgba::opaque(
        (horiz.r as f32 * lit).round() as u8,
        (horiz.g as f32 * lit).round() as u8,
        (horiz.b as f32 * lit).round() as u8,
    )
}

/// Channelwise linear interpolation (opaque result).
pub fn lerp_rgb(from: Rgba, to: Rgba, u: f32) -> Rgba {
    Rgba::opaque(
        lerp_channel(from.r, to.r, u),
        lerp_channel(from.g, to.g, u),
        lerp_channel(from.b, to.b, u),
    )
}

fn lerp_channel(a: u8, b: u8, u: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * u).round() as u8
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
