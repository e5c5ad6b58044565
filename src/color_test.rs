use super::*;

// =============================================================================
// hue_color
// =============================================================================

#[test]
fn hue_color_primaries_and_secondaries() {
    assert_eq!(hue_color(0.0), Rgba::opaque(255, 0, 0));
    assert_eq!(hue_color(60.0), Rgba::opaque(255, 255, 0));
    assert_eq!(hue_color(120.0), Rgba::opaque(0, 255, 0));
    assert_eq!(hue_color(180.0), Rgba::opaque(0, 255, 255));
    assert_eq!(hue_color(240.0), Rgba::opaque(0, 0, 255));
    assert_eq!(hue_color(300.0), Rgba::opaque(255, 0, 255));
    assert_eq!(hue_color(360.0), Rgba::opaque(255, 0, 0));
}

// =============================================================================
// hue-bar gradient
// =============================================================================

#[test]
fn bar_stop_offsets_are_the_sevenths_sequence() {
    let offsets: Vec<f32> = HUE_BAR_STOPS.iter().map(|s| s.0).collect();
    assert_eq!(
        offsets,
        vec![
            0.0,
            2.0 / 7.0,
            3.0 / 7.0,
            4.0 / 7.0,
            5.0 / 7.0,
            6.0 / 7.0,
            1.0
        ]
    );
    let hues: Vec<f32> = HUE_BAR_STOPS.iter().map(|s| s.1).collect();
    assert_eq!(hues, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0]);
}

#[test]
fn bar_color_hits_every_stop_exactly() {
    for (offset, hue) in HUE_BAR_STOPS {
        assert_eq!(bar_color(offset), hue_color(hue), "stop at {offset}");
    }
}

#[test]
fn bar_color_interpolates_within_a_segment() {
    // 0.25 sits 7/8 of the way through the red→yellow segment.
    assert_eq!(bar_color(0.25), Rgba::opaque(255, 223, 0));
}

#[test]
fn bar_color_clamps_out_of_range_positions() {
    assert_eq!(bar_color(-0.5), bar_color(0.0));
    assert_eq!(bar_color(1.5), bar_color(1.0));
}

// =============================================================================
// plane gradient
// =============================================================================

#[test]
fn plane_corners() {
    let hue = Rgba::opaque(0, 128, 255);
    assert_eq!(plane_color(hue, 0.0, 0.0), Rgba::WHITE);
    assert_eq!(plane_color(hue, 1.0, 0.0), hue);
    assert_eq!(plane_color(hue, 0.0, 1.0), Rgba::BLACK);
    assert_eq!(plane_color(hue, 1.0, 1.0), Rgba::BLACK);
}

#[test]
fn plane_black_overlay_scales_the_horizontal_color() {
    let hue = Rgba::opaque(255, 0, 0);
    // Half-way down the plane: exactly half the horizontal gradient value.
    assert_eq!(plane_color(hue, 1.0, 0.5), Rgba::opaque(128, 0, 0));
    assert_eq!(plane_color(hue, 0.0, 0.5), Rgba::opaque(128, 128, 128));
}

#[test]
fn plane_clamps_out_of_range_positions() {
    let hue = Rgba::opaque(10, 200, 30);
    assert_eq!(plane_color(hue, -1.0, -1.0), plane_color(hue, 0.0, 0.0));
    assert_eq!(plane_color(hue, 2.0, 2.0), plane_color(hue, 1.0, 1.0));
}
