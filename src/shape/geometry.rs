//! Shape placement and the scan window
//!
//! Without explicit coordinates every shape is centered on the frame and
//! sized from the frame dimensions. With explicit coordinates the shape is
//! centered on `(x, y)` and sized from its own property.
//!
//! All arithmetic is done in `i64`, so any `i32` property value is safe.
//! Negative sizes produce an inverted window that scans nothing. A zero size
//! collapses the shape: a zero radius or square draws nothing, a zero
//! triangle draws its apex pixel, and a box with one zero side draws a
//! single line along the other.

use super::{ShapeKind, ShapeSettings};

/// Vertical distance from the frame center up to the apex of the auto triangle
pub const AUTO_TRIANGLE_APEX_OFFSET: i64 = 25;

/// Height and base half-width of the auto triangle
pub const AUTO_TRIANGLE_HALF_SIZE: i64 = 50;

/// Coordinates of the shape being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Axis aligned box, used for both rectangles and squares.
    /// `x2`/`y2` are exclusive: the right and bottom edges sit at `x2 - 1`
    /// and `y2 - 1`.
    Box { x1: i64, y1: i64, x2: i64, y2: i64 },
    /// One pixel thick ring
    Circle { cx: i64, cy: i64, radius: i64 },
    /// Isosceles triangle pointing up, with 45 degree sides
    Triangle {
        apex_x: i64,
        apex_y: i64,
        base_y: i64,
        left_x: i64,
        right_x: i64,
    },
}

/// Inclusive range of pixel coordinates that must be scanned.
///
/// The window may extend past the frame or be inverted (min > max), in which
/// case nothing is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingWindow {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl BoundingWindow {
    /// True if the window covers no pixel
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Intersect with `[0, width) x [0, height)`.
    ///
    /// Returns `None` when nothing of the window lies inside the frame.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<BoundingWindow> {
        if width == 0 || height == 0 {
            return None;
        }
        let clamped = BoundingWindow {
            min_x: self.min_x.max(0),
            max_x: self.max_x.min(width as i64 - 1),
            min_y: self.min_y.max(0),
            max_y: self.max_y.min(height as i64 - 1),
        };
        if clamped.is_empty() {
            None
        } else {
            Some(clamped)
        }
    }
}

impl Geometry {
    /// The tightest window containing every pixel the outline can touch
    pub fn window(&self) -> BoundingWindow {
        match *self {
            Geometry::Box { x1, y1, x2, y2 } => BoundingWindow {
                min_x: x1,
                max_x: x2,
                min_y: y1,
                max_y: y2,
            },
            Geometry::Circle { cx, cy, radius } => BoundingWindow {
                min_x: cx - radius,
                max_x: cx + radius,
                min_y: cy - radius,
                max_y: cy + radius,
            },
            Geometry::Triangle {
                apex_y,
                base_y,
                left_x,
                right_x,
                ..
            } => BoundingWindow {
                min_x: left_x,
                max_x: right_x,
                min_y: apex_y,
                max_y: base_y,
            },
        }
    }
}

/// Compute the shape geometry and its scan window for a frame of the given size.
pub fn resolve(settings: &ShapeSettings, width: u32, height: u32) -> (Geometry, BoundingWindow) {
    let geometry = if settings.coordinate {
        explicit_geometry(settings)
    } else {
        auto_geometry(settings.shape, width as i64, height as i64)
    };
    (geometry, geometry.window())
}

fn auto_geometry(shape: ShapeKind, width: i64, height: i64) -> Geometry {
    match shape {
        ShapeKind::Square => {
            let size = width.min(height) / 4;
            let x1 = (width - size) / 2;
            let y1 = (height - size) / 2;
            Geometry::Box {
                x1,
                y1,
                x2: x1 + size,
                y2: y1 + size,
            }
        }
        ShapeKind::Rectangle => {
            let rect_width = width / 2;
            let rect_height = height / 2;
            let x1 = (width - rect_width) / 2;
            let y1 = (height - rect_height) / 2;
            Geometry::Box {
                x1,
                y1,
                x2: x1 + rect_width,
                y2: y1 + rect_height,
            }
        }
        ShapeKind::Circle => Geometry::Circle {
            cx: width / 2,
            cy: height / 2,
            radius: width.min(height) / 4,
        },
        ShapeKind::Triangle => {
            let apex_x = width / 2;
            let apex_y = height / 2 - AUTO_TRIANGLE_APEX_OFFSET;
            Geometry::Triangle {
                apex_x,
                apex_y,
                base_y: apex_y + AUTO_TRIANGLE_HALF_SIZE,
                left_x: apex_x - AUTO_TRIANGLE_HALF_SIZE,
                right_x: apex_x + AUTO_TRIANGLE_HALF_SIZE,
            }
        }
    }
}

fn explicit_geometry(settings: &ShapeSettings) -> Geometry {
    let cx = settings.x as i64;
    let cy = settings.y as i64;

    match settings.shape {
        ShapeKind::Square => {
            let size = settings.square_size as i64;
            let x1 = cx - size / 2;
            let y1 = cy - size / 2;
            Geometry::Box {
                x1,
                y1,
                x2: x1 + size,
                y2: y1 + size,
            }
        }
        ShapeKind::Rectangle => {
            let rect_width = settings.rect_l as i64;
            let rect_height = settings.rect_h as i64;
            let x1 = cx - rect_width / 2;
            let y1 = cy - rect_height / 2;
            Geometry::Box {
                x1,
                y1,
                x2: x1 + rect_width,
                y2: y1 + rect_height,
            }
        }
        ShapeKind::Circle => Geometry::Circle {
            cx,
            cy,
            radius: settings.circle_radius as i64,
        },
        ShapeKind::Triangle => {
            let size = settings.triangle_size as i64;
            let apex_y = cy - size / 2;
            Geometry::Triangle {
                apex_x: cx,
                apex_y,
                base_y: apex_y + size,
                left_x: cx - size,
                right_x: cx + size,
            }
        }
    }
}
