//! Format description and negotiation
//!
//! The filter only ever sees NV12. Both pads carry the same template and the
//! filter proxies caps: whatever is accepted upstream is produced downstream
//! unchanged.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};
use crate::util::{PixelFormat, Rational};

/// Media type carried on both pads
pub const MEDIA_TYPE: &str = "video/x-raw";

/// Largest accepted frame width
pub const MAX_WIDTH: u32 = 3840;

/// Largest accepted frame height
pub const MAX_HEIGHT: u32 = 2160;

/// Highest accepted frame rate
pub const MAX_FRAMERATE: i64 = 30;

/// A fixed (fully specified) video format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoInfo {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    /// Frames per second; 0/1 means variable
    pub framerate: Rational,
}

impl VideoInfo {
    /// NV12 of the given size with a variable frame rate
    pub fn nv12(width: u32, height: u32) -> Self {
        VideoInfo {
            format: PixelFormat::NV12,
            width,
            height,
            framerate: Rational::new(0, 1),
        }
    }

    /// Replace the frame rate
    pub fn with_framerate(mut self, framerate: Rational) -> Self {
        self.framerate = framerate;
        self
    }
}

impl fmt::Display for VideoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, format=(string){}, width=(int){}, height=(int){}, framerate=(fraction){}",
            MEDIA_TYPE, self.format, self.width, self.height, self.framerate
        )
    }
}

/// The set of formats a pad can carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caps {
    pub format: PixelFormat,
    pub width: RangeInclusive<u32>,
    pub height: RangeInclusive<u32>,
    pub framerate: RangeInclusive<Rational>,
}

impl Caps {
    /// NV12 up to 3840x2160 at up to 30 frames per second
    pub fn nv12_template() -> Self {
        Caps {
            format: PixelFormat::NV12,
            width: 1..=MAX_WIDTH,
            height: 1..=MAX_HEIGHT,
            framerate: Rational::new(0, 1)..=Rational::from_int(MAX_FRAMERATE),
        }
    }

    /// Check whether a fixed format falls inside these caps
    pub fn accepts(&self, info: &VideoInfo) -> bool {
        info.format == self.format
            && self.width.contains(&info.width)
            && self.height.contains(&info.height)
            && info.framerate.den > 0
            && self.framerate.contains(&info.framerate)
    }

    /// Explain why a format is rejected
    fn check(&self, info: &VideoInfo) -> Result<()> {
        if self.accepts(info) {
            Ok(())
        } else {
            Err(Error::negotiation(format!("{} not accepted by {}", info, self)))
        }
    }
}

impl fmt::Display for Caps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, format=(string){}, width=(int)[{}, {}], height=(int)[{}, {}], framerate=(fraction)[{}, {}]",
            MEDIA_TYPE,
            self.format,
            self.width.start(),
            self.width.end(),
            self.height.start(),
            self.height.end(),
            self.framerate.start(),
            self.framerate.end()
        )
    }
}

/// Direction of a pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadDirection {
    Sink,
    Src,
}

impl fmt::Display for PadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadDirection::Sink => write!(f, "sink"),
            PadDirection::Src => write!(f, "src"),
        }
    }
}

/// Description of a pad the filter always has
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadTemplate {
    pub name: &'static str,
    pub direction: PadDirection,
    pub caps: Caps,
}

impl PadTemplate {
    /// The always-present sink pad
    pub fn sink() -> Self {
        PadTemplate {
            name: "sink",
            direction: PadDirection::Sink,
            caps: Caps::nv12_template(),
        }
    }

    /// The always-present src pad
    pub fn src() -> Self {
        PadTemplate {
            name: "src",
            direction: PadDirection::Src,
            caps: Caps::nv12_template(),
        }
    }
}

/// Agree on a format between the upstream producer and the downstream consumer.
///
/// The filter does not convert, so both sides must offer the same format and
/// both pad templates must accept it.
pub fn negotiate(upstream: &VideoInfo, downstream: &VideoInfo) -> Result<VideoInfo> {
    PadTemplate::sink().caps.check(upstream)?;
    PadTemplate::src().caps.check(downstream)?;
    if upstream != downstream {
        return Err(Error::negotiation(format!(
            "passthrough needs identical formats, upstream offers {} but downstream wants {}",
            upstream, downstream
        )));
    }
    Ok(*upstream)
}
