//! Shape configuration

use serde::{Deserialize, Serialize};

use super::{ShapeColor, ShapeKind};

/// Everything that decides what gets drawn on a frame.
///
/// The filter copies this out once per frame, so a property change made
/// while a frame is being drawn only shows up on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// Shape to outline
    pub shape: ShapeKind,
    /// Outline color
    pub color: ShapeColor,
    /// Center x, used when `coordinate` is set
    pub x: i32,
    /// Center y, used when `coordinate` is set
    pub y: i32,
    /// Use `x`/`y` and the per-shape sizes instead of centering on the frame
    pub coordinate: bool,
    /// Rectangle width
    pub rect_l: i32,
    /// Rectangle height
    pub rect_h: i32,
    /// Triangle height; the base spans twice this
    pub triangle_size: i32,
    /// Square side
    pub square_size: i32,
    /// Circle radius
    pub circle_radius: i32,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        ShapeSettings {
            shape: ShapeKind::Square,
            color: ShapeColor::Red,
            x: 200,
            y: 200,
            coordinate: false,
            rect_l: 200,
            rect_h: 100,
            triangle_size: 200,
            square_size: 200,
            circle_radius: 100,
        }
    }
}
