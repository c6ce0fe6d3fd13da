//! Pixel format definitions

use std::fmt;

/// Pixel format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// NV12 - Y plane followed by an interleaved UV plane, 4:2:0
    NV12,
    /// I420 / YUV420P - Planar YUV 4:2:0 with separate U and V planes
    YUV420P,
}

impl PixelFormat {
    /// Get the number of planes in this pixel format
    pub fn num_planes(&self) -> usize {
        match self {
            PixelFormat::NV12 => 2,
            PixelFormat::YUV420P => 3,
        }
    }

    /// Caps-style name of the format
    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::NV12 => "NV12",
            PixelFormat::YUV420P => "I420",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
