//! Video filtering

pub mod caps;
pub mod chain;
pub mod property;
pub mod testshape;

pub use caps::{negotiate, Caps, PadDirection, PadTemplate, VideoInfo};
pub use chain::FilterChain;
pub use property::{PropertySpec, PropertyType, PropertyValue, PROPERTIES};
pub use testshape::{SettingsHandle, TestShapeFilter};

use serde::Serialize;

use crate::error::Result;
use crate::frame::VideoFrame;

/// Filter trait for processing frames
pub trait Filter {
    /// Accept the format of the frames that will follow
    fn set_caps(&mut self, info: &VideoInfo) -> Result<()>;

    /// Process an input frame and produce output frame(s)
    fn filter(&mut self, input: VideoFrame) -> Result<Vec<VideoFrame>>;

    /// Flush any buffered frames
    fn flush(&mut self) -> Result<Vec<VideoFrame>>;
}

/// Descriptive details of a filter element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementMetadata {
    /// Factory name
    pub name: &'static str,

    /// Human readable name
    pub long_name: &'static str,

    /// Slash separated classification
    pub classification: &'static str,

    /// Filter description
    pub description: &'static str,

    /// Author
    pub author: &'static str,
}
