//! Common test utilities for testshape integration tests
//!
//! Helpers for building NV12 frames, running the filter over them and
//! collecting the pixels a draw changed.

#![allow(dead_code)]

use std::collections::BTreeSet;

use testshape::filter::{TestShapeFilter, VideoInfo};
use testshape::frame::{chroma_height, chroma_width, VideoFrame};
use testshape::shape::{ShapeColor, ShapeKind, ShapeSettings};
use testshape::util::{Buffer, PixelFormat, Timestamp};

// ============================================================================
// Frame Generation
// ============================================================================

/// Black NV12 frame with the given pts
pub fn black_nv12(width: u32, height: u32, pts: i64) -> VideoFrame {
    let mut frame = VideoFrame::new_nv12(width, height);
    frame.pts = Timestamp::new(pts);
    frame
}

/// NV12 frame whose luma is a diagonal gradient over 160..=209, above every
/// color's luma, so no pixel starts out at the value a draw would write
pub fn gradient_nv12(width: u32, height: u32) -> VideoFrame {
    let mut frame = VideoFrame::new_nv12(width, height);
    let stride = frame.linesize[0];
    let luma = frame.data[0].as_mut_slice();
    for y in 0..height as usize {
        for x in 0..width as usize {
            luma[y * stride + x] = (160 + (x + y) % 50) as u8;
        }
    }
    frame
}

/// I420 frame with flat planes, as read from a Y4M file
pub fn flat_i420(width: u32, height: u32, luma: u8, pts: i64) -> VideoFrame {
    let cw = chroma_width(width);
    let ch = chroma_height(height);
    let mut frame = VideoFrame::new(width, height, PixelFormat::YUV420P);
    frame.data = vec![
        Buffer::filled(width as usize * height as usize, luma),
        Buffer::filled(cw * ch, 128),
        Buffer::filled(cw * ch, 128),
    ];
    frame.linesize = vec![width as usize, cw, cw];
    frame.pts = Timestamp::new(pts);
    frame.duration = 1;
    frame
}

// ============================================================================
// Drawing
// ============================================================================

/// Filter with the given settings, negotiated for `width` x `height`
pub fn negotiated_filter(settings: ShapeSettings, width: u32, height: u32) -> TestShapeFilter {
    let mut filter = TestShapeFilter::with_settings(settings);
    filter
        .set_caps(&VideoInfo::nv12(width, height))
        .expect("size within caps");
    filter
}

/// Run one black frame through a freshly negotiated filter
pub fn draw_once(settings: ShapeSettings, width: u32, height: u32) -> (VideoFrame, VideoFrame) {
    let before = black_nv12(width, height, 0);
    let mut filter = negotiated_filter(settings, width, height);
    let after = filter.chain(before.clone());
    (before, after)
}

/// Default settings with another shape
pub fn auto(shape: ShapeKind) -> ShapeSettings {
    ShapeSettings {
        shape,
        ..ShapeSettings::default()
    }
}

/// Explicit-coordinate settings for a shape
pub fn explicit(shape: ShapeKind, x: i32, y: i32) -> ShapeSettings {
    ShapeSettings {
        shape,
        x,
        y,
        coordinate: true,
        ..ShapeSettings::default()
    }
}

/// Settings with another color
pub fn colored(settings: ShapeSettings, color: ShapeColor) -> ShapeSettings {
    ShapeSettings { color, ..settings }
}

// ============================================================================
// Inspection
// ============================================================================

/// Luma sample at `(x, y)`
pub fn luma(frame: &VideoFrame, x: u32, y: u32) -> u8 {
    frame.data[0].as_slice()[y as usize * frame.linesize[0] + x as usize]
}

/// Chroma pair covering pixel `(x, y)`
pub fn chroma(frame: &VideoFrame, x: u32, y: u32) -> (u8, u8) {
    let offset = (y as usize / 2) * frame.linesize[1] + (x as usize / 2) * 2;
    let uv = frame.data[1].as_slice();
    (uv[offset], uv[offset + 1])
}

/// Every pixel whose luma differs between two frames of equal size
pub fn changed_luma(before: &VideoFrame, after: &VideoFrame) -> BTreeSet<(u32, u32)> {
    let mut changed = BTreeSet::new();
    for y in 0..before.height {
        for x in 0..before.width {
            if luma(before, x, y) != luma(after, x, y) {
                changed.insert((x, y));
            }
        }
    }
    changed
}

/// Every pixel of a `width` x `height` frame that satisfies `predicate`
pub fn pixels_where<F>(width: u32, height: u32, predicate: F) -> BTreeSet<(u32, u32)>
where
    F: Fn(i64, i64) -> bool,
{
    let mut set = BTreeSet::new();
    for y in 0..height {
        for x in 0..width {
            if predicate(x as i64, y as i64) {
                set.insert((x, y));
            }
        }
    }
    set
}
