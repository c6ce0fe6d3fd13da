//! The testshape filter
//!
//! Draws the outline of a rectangle, square, triangle or circle onto every
//! NV12 frame passing through it and forwards the frame unchanged otherwise.
//! Frames are drawn on in place; the filter never allocates a frame and never
//! drops one.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use super::caps::{PadTemplate, VideoInfo};
use super::property::PropertyValue;
use super::{ElementMetadata, Filter};
use crate::error::{Error, Result};
use crate::frame::VideoFrame;
use crate::shape::{self, ShapeSettings};

/// Element details of the testshape filter
pub static METADATA: ElementMetadata = ElementMetadata {
    name: "testshape",
    long_name: "Test shape overlay",
    classification: "Filter/Effect/Video",
    description: "Draws a rectangle, square, triangle or circle outline onto NV12 video frames in red, green or blue",
    author: "testshape developers",
};

/// Shared handle to the filter's settings.
///
/// Clones refer to the same settings, so a controller thread can change
/// properties while frames are flowing. Changes take effect on the next frame.
#[derive(Debug, Clone, Default)]
pub struct SettingsHandle {
    inner: Arc<RwLock<ShapeSettings>>,
}

impl SettingsHandle {
    /// Wrap initial settings
    pub fn new(settings: ShapeSettings) -> Self {
        SettingsHandle {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> ShapeSettings {
        *self.inner.read()
    }

    /// Set a property by name; rejected values leave the settings unchanged
    pub fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        let mut settings = self.inner.write();
        match settings.set_property(name, value.clone()) {
            Ok(()) => {
                debug!("testshape: {} set to {}", name, value);
                Ok(())
            }
            Err(e) => {
                warn!("testshape: ignoring {} = {}: {}", name, value, e);
                Err(e)
            }
        }
    }

    /// Read a property by name
    pub fn property(&self, name: &str) -> Result<PropertyValue> {
        self.inner.read().property(name)
    }
}

/// Filter that outlines a shape on every frame
#[derive(Debug, Default)]
pub struct TestShapeFilter {
    settings: SettingsHandle,
    info: Option<VideoInfo>,
    frames: u64,
}

impl TestShapeFilter {
    /// Create a filter with default settings and no negotiated format
    pub fn new() -> Self {
        Self::with_settings(ShapeSettings::default())
    }

    /// Create a filter with the given settings
    pub fn with_settings(settings: ShapeSettings) -> Self {
        TestShapeFilter {
            settings: SettingsHandle::new(settings),
            info: None,
            frames: 0,
        }
    }

    /// Element details
    pub fn metadata() -> &'static ElementMetadata {
        &METADATA
    }

    /// The sink and src pad templates
    pub fn pad_templates() -> [PadTemplate; 2] {
        [PadTemplate::src(), PadTemplate::sink()]
    }

    /// Handle for changing properties from elsewhere
    pub fn settings_handle(&self) -> SettingsHandle {
        self.settings.clone()
    }

    /// Set a property by name
    pub fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        self.settings.set_property(name, value)
    }

    /// Read a property by name
    pub fn property(&self, name: &str) -> Result<PropertyValue> {
        self.settings.property(name)
    }

    /// Accept a format from upstream. The same format is produced downstream.
    pub fn set_caps(&mut self, info: &VideoInfo) -> Result<()> {
        let template = PadTemplate::sink();
        if !template.caps.accepts(info) {
            return Err(Error::negotiation(format!(
                "{} not accepted by {}",
                info, template.caps
            )));
        }
        debug!("testshape: negotiated {}", info);
        self.info = Some(*info);
        Ok(())
    }

    /// Draw the configured shape onto `frame` and hand the same frame back.
    pub fn chain(&mut self, mut frame: VideoFrame) -> VideoFrame {
        self.frames += 1;
        // one copy per frame: property changes never tear a single draw
        let settings = self.settings.snapshot();
        let pts = frame.pts;

        let Some(info) = self.info else {
            trace!(
                "testshape: no format negotiated, passing frame #{} (pts {}) through",
                self.frames,
                pts
            );
            return frame;
        };

        match frame.map_writable(&info) {
            Ok(mut map) => {
                let written = shape::draw(&mut map, &settings);
                trace!(
                    "testshape: drew {} on frame #{} (pts {}, {} pixels)",
                    settings.shape,
                    self.frames,
                    pts,
                    written
                );
            }
            Err(e) => {
                warn!(
                    "testshape: cannot map frame #{} (pts {}), passing through: {}",
                    self.frames, pts, e
                );
            }
        }

        frame
    }
}

impl Filter for TestShapeFilter {
    fn set_caps(&mut self, info: &VideoInfo) -> Result<()> {
        TestShapeFilter::set_caps(self, info)
    }

    fn filter(&mut self, input: VideoFrame) -> Result<Vec<VideoFrame>> {
        Ok(vec![self.chain(input)])
    }

    fn flush(&mut self) -> Result<Vec<VideoFrame>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_passthrough_without_caps() {
        let mut filter = TestShapeFilter::new();
        let frame = VideoFrame::new_nv12(64, 48);
        let out = filter.chain(frame.clone());
        assert_eq!(out, frame);
    }

    #[test]
    fn test_draws_after_negotiation() {
        let mut filter = TestShapeFilter::new();
        filter.set_caps(&VideoInfo::nv12(64, 48)).unwrap();
        let frame = VideoFrame::new_nv12(64, 48);
        let out = filter.chain(frame.clone());
        assert_ne!(out, frame);
    }

    #[test]
    fn test_rejects_unsupported_caps() {
        let mut filter = TestShapeFilter::new();
        assert!(filter.set_caps(&VideoInfo::nv12(4000, 48)).is_err());
        // nothing negotiated, so frames still pass through untouched
        let frame = VideoFrame::new_nv12(64, 48);
        assert_eq!(filter.chain(frame.clone()), frame);
    }

    #[test]
    fn test_frame_size_mismatch_passes_through() {
        let mut filter = TestShapeFilter::new();
        filter.set_caps(&VideoInfo::nv12(64, 48)).unwrap();
        let frame = VideoFrame::new_nv12(32, 24);
        assert_eq!(filter.chain(frame.clone()), frame);
    }

    #[test]
    fn test_properties_through_handle() {
        let filter = TestShapeFilter::new();
        let handle = filter.settings_handle();
        handle.set_property("shape", "circle".into()).unwrap();
        assert_eq!(handle.snapshot().shape, ShapeKind::Circle);
        assert_eq!(filter.property("shape").unwrap(), PropertyValue::from("circle"));

        assert!(filter.set_property("shape", "blob".into()).is_err());
        assert_eq!(handle.snapshot().shape, ShapeKind::Circle);
    }

    #[test]
    fn test_filter_trait_is_one_to_one() {
        let mut filter = TestShapeFilter::new();
        Filter::set_caps(&mut filter, &VideoInfo::nv12(16, 16)).unwrap();
        let out = filter.filter(VideoFrame::new_nv12(16, 16)).unwrap();
        assert_eq!(out.len(), 1);
        assert!(filter.flush().unwrap().is_empty());
    }
}
