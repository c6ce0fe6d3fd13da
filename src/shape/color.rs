//! Named outline colors and their YUV values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A luma/chroma triple as written into an NV12 frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Yuv {
    pub const fn new(y: u8, u: u8, v: u8) -> Self {
        Yuv { y, u, v }
    }
}

/// Outline color selectable through the `color` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl ShapeColor {
    /// All selectable colors
    pub const ALL: [ShapeColor; 3] = [ShapeColor::Red, ShapeColor::Green, ShapeColor::Blue];

    /// Property string for this color
    pub fn name(&self) -> &'static str {
        match self {
            ShapeColor::Red => "red",
            ShapeColor::Green => "green",
            ShapeColor::Blue => "blue",
        }
    }

    /// The triple written for this color
    pub const fn yuv(&self) -> Yuv {
        match self {
            ShapeColor::Red => Yuv::new(76, 84, 255),
            ShapeColor::Green => Yuv::new(149, 43, 21),
            ShapeColor::Blue => Yuv::new(29, 255, 107),
        }
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::property(format!(
                    "unknown color '{}', expected red, green or blue",
                    s
                ))
            })
    }
}

/// Look up the triple for a color name.
///
/// Returns `None` for names outside the table; callers that get `None` draw
/// nothing.
pub fn color_triple_for(name: &str) -> Option<Yuv> {
    name.parse::<ShapeColor>().ok().map(|c| c.yuv())
}
