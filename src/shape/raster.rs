//! Outline rasterization
//!
//! Every pixel of the scan window is tested against the outline of the
//! shape; matching pixels are overwritten with the color. Drawing is a pure
//! overwrite, so drawing the same shape twice gives the same frame as
//! drawing it once.

use super::color::Yuv;
use super::geometry::{BoundingWindow, Geometry};
use crate::frame::VideoFrameMap;

/// Test whether pixel `(x, y)` lies on the outline of `geometry`.
pub fn is_on_outline(geometry: &Geometry, x: i64, y: i64) -> bool {
    match *geometry {
        Geometry::Box { x1, y1, x2, y2 } => on_box_edge(x, y, x1, y1, x2, y2),
        Geometry::Circle { cx, cy, radius } => on_ring(x, y, cx, cy, radius),
        Geometry::Triangle {
            apex_x,
            apex_y,
            base_y,
            left_x,
            right_x,
        } => on_triangle_edge(x, y, apex_x, apex_y, base_y, left_x, right_x),
    }
}

/// Hollow box with 1 pixel edges; `x2`/`y2` are exclusive.
#[inline]
fn on_box_edge(x: i64, y: i64, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
    let vertical = (x == x1 || x == x2 - 1) && (y1..y2).contains(&y);
    let horizontal = (y == y1 || y == y2 - 1) && (x1..x2).contains(&x);
    vertical || horizontal
}

/// Squared distance from the center within `[(r - 1)^2, r^2]`.
#[inline]
fn on_ring(x: i64, y: i64, cx: i64, cy: i64, radius: i64) -> bool {
    // i128: centers and radii come straight from i32 properties
    let dx = (x - cx) as i128;
    let dy = (y - cy) as i128;
    let distance_squared = dx * dx + dy * dy;
    let outer = radius as i128 * radius as i128;
    let inner = (radius as i128 - 1) * (radius as i128 - 1);
    distance_squared <= outer && distance_squared >= inner
}

/// The two 45 degree sides meeting at the apex plus a solid base line.
#[inline]
fn on_triangle_edge(
    x: i64,
    y: i64,
    apex_x: i64,
    apex_y: i64,
    base_y: i64,
    left_x: i64,
    right_x: i64,
) -> bool {
    let within_span = (apex_y..=base_y).contains(&y)
        && ((left_x..=apex_x).contains(&x) || (apex_x..=right_x).contains(&x));
    let on_side = x + y == apex_x + apex_y || x - y == apex_x - apex_y;
    let on_base = y == base_y && (left_x..=right_x).contains(&x);
    (within_span && on_side) || on_base
}

/// Scan `window` and write `color` on every outline pixel.
///
/// The window is clamped to the frame first, so nothing outside
/// `[0, width) x [0, height)` is ever touched. With `color == None` the
/// outline is still evaluated but nothing is written.
///
/// Returns the number of pixels written.
pub fn rasterize(
    map: &mut VideoFrameMap<'_>,
    geometry: &Geometry,
    window: BoundingWindow,
    color: Option<Yuv>,
) -> usize {
    let Some(window) = window.clamp_to(map.width(), map.height()) else {
        return 0;
    };

    let mut written = 0;
    for y in window.min_y..=window.max_y {
        for x in window.min_x..=window.max_x {
            if !is_on_outline(geometry, x, y) {
                continue;
            }
            if let Some(color) = color {
                // clamp_to keeps both coordinates in [0, dimension)
                map.put_pixel(x as u32, y as u32, color);
                written += 1;
            }
        }
    }
    written
}
