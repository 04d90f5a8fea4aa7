//! ROI rendering
//!
//! Draws the rotated ROI as a filled quad with an outline, corner markers
//! and the bottom-right resize handle. All drawing works from the four
//! rotated corner points; nothing here mutates the ROI.

use macroquad::prelude::*;

use crate::gesture::{handle_bounds, GestureMode};
use crate::roi::Roi;

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// ROI fill while idle
pub const ROI_FILL: Color = Color::new(0.235, 0.314, 0.392, 0.35);

/// ROI fill while a gesture is changing it
pub const ROI_FILL_ACTIVE: Color = Color::new(0.235, 0.392, 0.314, 0.45);

/// ROI outline
pub const ROI_OUTLINE: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Corner marker color
pub const CORNER_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);

/// Resize handle fill
pub const HANDLE_COLOR: Color = Color::new(1.0, 0.78, 0.39, 1.0);

/// Status line text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Status line text size
pub const FONT_SIZE_STATUS: f32 = 16.0;

const OUTLINE_THICKNESS: f32 = 2.0;
const CORNER_RADIUS: f32 = 4.0;

/// Draw the ROI quad, its outline and corners, and the resize handle
pub fn draw_roi(roi: &Roi, handle_size: f32, active_mode: Option<GestureMode>) {
    let [tl, tr, br, bl] = roi.corners();
    let to_vec2 = |p: crate::geometry::Point| vec2(p.x, p.y);
    let (v0, v1, v2, v3) = (to_vec2(tl), to_vec2(tr), to_vec2(br), to_vec2(bl));

    let fill = if active_mode.is_some() { ROI_FILL_ACTIVE } else { ROI_FILL };
    draw_triangle(v0, v1, v2, fill);
    draw_triangle(v0, v2, v3, fill);

    draw_line(v0.x, v0.y, v1.x, v1.y, OUTLINE_THICKNESS, ROI_OUTLINE);
    draw_line(v1.x, v1.y, v2.x, v2.y, OUTLINE_THICKNESS, ROI_OUTLINE);
    draw_line(v2.x, v2.y, v3.x, v3.y, OUTLINE_THICKNESS, ROI_OUTLINE);
    draw_line(v3.x, v3.y, v0.x, v0.y, OUTLINE_THICKNESS, ROI_OUTLINE);

    for v in [v0, v1, v3] {
        draw_circle(v.x, v.y, CORNER_RADIUS, CORNER_COLOR);
    }

    // The bottom-right corner carries the handle instead of a plain marker
    let bounds = handle_bounds(roi, handle_size);
    let color = if active_mode == Some(GestureMode::Handle) {
        WHITE
    } else {
        HANDLE_COLOR
    };
    draw_rectangle_ex(
        bounds.center().x,
        bounds.center().y,
        handle_size,
        handle_size,
        DrawRectangleParams {
            offset: vec2(0.5, 0.5),
            rotation: roi.rotation_degrees.to_radians(),
            color,
        },
    );
}

/// Draw the one-line status readout at the top of the screen
pub fn draw_status(roi: &Roi, active_mode: Option<GestureMode>) {
    let mode = match active_mode {
        Some(GestureMode::Surface) => "surface",
        Some(GestureMode::Handle) => "handle",
        None => "idle",
    };
    let text = format!(
        "{} | {:.0}x{:.0} at ({:.0}, {:.0}) | {:.1} deg | R resets",
        mode,
        roi.rect.width(),
        roi.rect.height(),
        roi.rect.center().x,
        roi.rect.center().y,
        roi.rotation_degrees,
    );
    draw_text(&text, 10.0, 22.0, FONT_SIZE_STATUS, TEXT_COLOR);
}
