//! Shape outlines drawn onto NV12 frames
//!
//! Drawing a shape is split into three steps:
//!
//! - `color`: maps a named color to the luma/chroma triple that gets written
//! - `geometry`: turns [`ShapeSettings`] and the frame size into shape
//!   coordinates and the window of pixels to scan
//! - `raster`: tests every pixel of the window against the shape's outline
//!   and writes the color where it matches
//!
//! ```rust
//! use testshape::frame::VideoFrame;
//! use testshape::filter::caps::VideoInfo;
//! use testshape::shape::{draw, ShapeKind, ShapeSettings};
//!
//! let info = VideoInfo::nv12(640, 480);
//! let mut frame = VideoFrame::new_nv12(640, 480);
//! let settings = ShapeSettings {
//!     shape: ShapeKind::Circle,
//!     ..ShapeSettings::default()
//! };
//!
//! let mut map = frame.map_writable(&info).unwrap();
//! let written = draw(&mut map, &settings);
//! assert!(written > 0);
//! ```

pub mod color;
pub mod geometry;
pub mod raster;
pub mod settings;

pub use color::{color_triple_for, ShapeColor, Yuv};
pub use geometry::{resolve, BoundingWindow, Geometry};
pub use raster::rasterize;
pub use settings::ShapeSettings;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frame::VideoFrameMap;

/// Which outline gets drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    #[default]
    Square,
    Triangle,
    Circle,
}

impl ShapeKind {
    /// All drawable shapes
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Circle,
    ];

    /// Property string for this shape
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::property(format!(
                    "unknown shape '{}', expected rectangle, square, triangle or circle",
                    s
                ))
            })
    }
}

/// Resolve the configured shape against the mapped frame and draw it.
///
/// Returns the number of pixels written.
pub fn draw(map: &mut VideoFrameMap<'_>, settings: &ShapeSettings) -> usize {
    let (geometry, window) = resolve(settings, map.width(), map.height());
    rasterize(map, &geometry, window, Some(settings.color.yuv()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
        assert_eq!("Circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
    }

    #[test]
    fn test_unknown_shape() {
        let err = "hexagon".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, Error::Property(_)));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ShapeKind::Triangle).unwrap();
        assert_eq!(json, "\"triangle\"");
        let kind: ShapeKind = serde_json::from_str("\"rectangle\"").unwrap();
        assert_eq!(kind, ShapeKind::Rectangle);
    }
}
