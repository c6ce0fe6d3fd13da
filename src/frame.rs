//! Frame representation for uncompressed video data

use crate::error::{Error, Result};
use crate::filter::caps::VideoInfo;
use crate::shape::color::Yuv;
use crate::util::{Buffer, PixelFormat, Timestamp};

/// Luma value of black in limited range
pub const BLACK_LUMA: u8 = 16;
/// Neutral chroma value
pub const NEUTRAL_CHROMA: u8 = 128;

/// A video frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    /// Frame data, one buffer per plane
    pub data: Vec<Buffer>,

    /// Line sizes (row strides in bytes) for each plane
    pub linesize: Vec<usize>,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Pixel format
    pub format: PixelFormat,

    /// Presentation timestamp
    pub pts: Timestamp,

    /// Duration in time base units
    pub duration: i64,
}

impl VideoFrame {
    /// Create a new video frame with no planes attached
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        VideoFrame {
            data: Vec::new(),
            linesize: Vec::new(),
            width,
            height,
            format,
            pts: Timestamp::none(),
            duration: 0,
        }
    }

    /// Allocate a black NV12 frame with tightly packed rows
    pub fn new_nv12(width: u32, height: u32) -> Self {
        let chroma_stride = chroma_width(width) * 2;
        Self::new_nv12_with_strides(width, height, width as usize, chroma_stride)
    }

    /// Allocate a black NV12 frame whose rows are padded to the given strides
    pub fn new_nv12_with_strides(
        width: u32,
        height: u32,
        luma_stride: usize,
        chroma_stride: usize,
    ) -> Self {
        let mut frame = VideoFrame::new(width, height, PixelFormat::NV12);
        frame.data = vec![
            Buffer::filled(luma_stride * height as usize, BLACK_LUMA),
            Buffer::filled(chroma_stride * chroma_height(height), NEUTRAL_CHROMA),
        ];
        frame.linesize = vec![luma_stride, chroma_stride];
        frame
    }

    /// Get the number of planes
    pub fn num_planes(&self) -> usize {
        self.data.len()
    }

    /// Map the luma and chroma planes of an NV12 frame for in-place writing.
    ///
    /// Dimensions come from the negotiated `info`; the frame must agree with
    /// them and its planes must be large enough for every addressed row.
    pub fn map_writable(&mut self, info: &VideoInfo) -> Result<VideoFrameMap<'_>> {
        if self.format != PixelFormat::NV12 || info.format != PixelFormat::NV12 {
            return Err(Error::unsupported(format!(
                "cannot map {} frame as NV12",
                self.format
            )));
        }
        if self.width != info.width || self.height != info.height {
            return Err(Error::invalid_input(format!(
                "frame is {}x{} but negotiated format is {}x{}",
                self.width, self.height, info.width, info.height
            )));
        }
        if self.data.len() < 2 || self.linesize.len() < 2 {
            return Err(Error::invalid_input("NV12 frame must have 2 planes"));
        }

        let width = info.width as usize;
        let height = info.height as usize;
        let luma_stride = self.linesize[0];
        let chroma_stride = self.linesize[1];
        let chroma_row = chroma_width(info.width) * 2;

        if luma_stride < width || chroma_stride < chroma_row {
            return Err(Error::invalid_input(format!(
                "strides {}/{} too small for width {}",
                luma_stride, chroma_stride, width
            )));
        }

        let luma_need = required_len(luma_stride, width, height);
        let chroma_need = required_len(chroma_stride, chroma_row, chroma_height(info.height));

        let (luma, rest) = self.data.split_at_mut(1);
        let luma = luma[0].as_mut_slice();
        let chroma = rest[0].as_mut_slice();

        if luma.len() < luma_need {
            return Err(Error::BufferTooSmall {
                need: luma_need,
                have: luma.len(),
            });
        }
        if chroma.len() < chroma_need {
            return Err(Error::BufferTooSmall {
                need: chroma_need,
                have: chroma.len(),
            });
        }

        Ok(VideoFrameMap {
            width: info.width,
            height: info.height,
            luma,
            luma_stride,
            chroma,
            chroma_stride,
        })
    }
}

/// Number of chroma samples per row for a 4:2:0 frame of this width
pub fn chroma_width(width: u32) -> usize {
    (width as usize + 1) / 2
}

/// Number of chroma rows for a 4:2:0 frame of this height
pub fn chroma_height(height: u32) -> usize {
    (height as usize + 1) / 2
}

fn required_len(stride: usize, row: usize, rows: usize) -> usize {
    if rows == 0 {
        0
    } else {
        stride * (rows - 1) + row
    }
}

/// Exclusive read/write view of an NV12 frame's planes.
///
/// The view borrows the frame mutably and releases it when dropped, so
/// nothing else can touch the planes while a filter draws.
#[derive(Debug)]
pub struct VideoFrameMap<'a> {
    width: u32,
    height: u32,
    luma: &'a mut [u8],
    luma_stride: usize,
    chroma: &'a mut [u8],
    chroma_stride: usize,
}

impl<'a> VideoFrameMap<'a> {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write a color at luma pixel `(x, y)` and into the chroma pair shared
    /// by its 2x2 block.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Yuv) {
        debug_assert!(x < self.width && y < self.height);
        self.luma[y as usize * self.luma_stride + x as usize] = color.y;
        let offset = self.chroma_offset(x, y);
        self.chroma[offset] = color.u;
        self.chroma[offset + 1] = color.v;
    }

    #[inline]
    fn chroma_offset(&self, x: u32, y: u32) -> usize {
        (y as usize / 2) * self.chroma_stride + (x as usize / 2) * 2
    }
}
