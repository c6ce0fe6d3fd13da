//! Pixel format conversion between planar I420 and semi-planar NV12
//!
//! Raw video files carry I420 (separate U and V planes) while the filter
//! draws on NV12 (one interleaved UV plane). Both are 4:2:0, so conversion
//! only reorders chroma bytes.

use crate::error::{Error, Result};
use crate::frame::{chroma_height, chroma_width, VideoFrame};
use crate::util::{Buffer, PixelFormat};

/// Converter context for one frame size and one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConverter {
    width: u32,
    height: u32,
    src_format: PixelFormat,
    dst_format: PixelFormat,
}

impl FormatConverter {
    /// Create a new converter
    pub fn new(
        width: u32,
        height: u32,
        src_format: PixelFormat,
        dst_format: PixelFormat,
    ) -> Result<Self> {
        match (src_format, dst_format) {
            (PixelFormat::YUV420P, PixelFormat::NV12) | (PixelFormat::NV12, PixelFormat::YUV420P) => {
                Ok(FormatConverter {
                    width,
                    height,
                    src_format,
                    dst_format,
                })
            }
            _ => Err(Error::unsupported(format!(
                "conversion from {} to {}",
                src_format, dst_format
            ))),
        }
    }

    /// Convert a frame, keeping its timing
    pub fn convert(&self, src: &VideoFrame) -> Result<VideoFrame> {
        if src.format != self.src_format || src.width != self.width || src.height != self.height {
            return Err(Error::invalid_input(format!(
                "converter expects {}x{} {}, got {}x{} {}",
                self.width, self.height, self.src_format, src.width, src.height, src.format
            )));
        }
        if src.num_planes() != self.src_format.num_planes()
            || src.linesize.len() != src.num_planes()
        {
            return Err(Error::invalid_input(format!(
                "{} frame must have {} planes",
                self.src_format,
                self.src_format.num_planes()
            )));
        }

        let mut dst = match self.dst_format {
            PixelFormat::NV12 => self.i420_to_nv12(src)?,
            _ => self.nv12_to_i420(src)?,
        };
        dst.pts = src.pts;
        dst.duration = src.duration;
        Ok(dst)
    }

    fn i420_to_nv12(&self, src: &VideoFrame) -> Result<VideoFrame> {
        let cw = chroma_width(self.width);
        let ch = chroma_height(self.height);
        let mut dst = VideoFrame::new_nv12(self.width, self.height);

        copy_plane(
            src.data[0].as_slice(),
            src.linesize[0],
            dst.data[0].as_mut_slice(),
            dst.linesize[0],
            self.width as usize,
            self.height as usize,
        )?;

        let (u, u_stride) = (src.data[1].as_slice(), src.linesize[1]);
        let (v, v_stride) = (src.data[2].as_slice(), src.linesize[2]);
        check_len(u, u_stride, cw, ch)?;
        check_len(v, v_stride, cw, ch)?;

        let uv_stride = dst.linesize[1];
        let uv = dst.data[1].as_mut_slice();
        for row in 0..ch {
            let out = &mut uv[row * uv_stride..row * uv_stride + cw * 2];
            let u_row = &u[row * u_stride..row * u_stride + cw];
            let v_row = &v[row * v_stride..row * v_stride + cw];
            for (pair, (&cb, &cr)) in out.chunks_exact_mut(2).zip(u_row.iter().zip(v_row)) {
                pair[0] = cb;
                pair[1] = cr;
            }
        }

        Ok(dst)
    }

    fn nv12_to_i420(&self, src: &VideoFrame) -> Result<VideoFrame> {
        let width = self.width as usize;
        let height = self.height as usize;
        let cw = chroma_width(self.width);
        let ch = chroma_height(self.height);

        let mut luma = vec![0u8; width * height];
        copy_plane(src.data[0].as_slice(), src.linesize[0], &mut luma, width, width, height)?;

        let (uv, uv_stride) = (src.data[1].as_slice(), src.linesize[1]);
        check_len(uv, uv_stride, cw * 2, ch)?;

        let mut u = Vec::with_capacity(cw * ch);
        let mut v = Vec::with_capacity(cw * ch);
        for row in 0..ch {
            let line = &uv[row * uv_stride..row * uv_stride + cw * 2];
            for pair in line.chunks_exact(2) {
                u.push(pair[0]);
                v.push(pair[1]);
            }
        }

        let mut dst = VideoFrame::new(self.width, self.height, PixelFormat::YUV420P);
        dst.data = vec![Buffer::from_vec(luma), Buffer::from_vec(u), Buffer::from_vec(v)];
        dst.linesize = vec![width, cw, cw];
        Ok(dst)
    }
}

fn check_len(plane: &[u8], stride: usize, row: usize, rows: usize) -> Result<()> {
    if stride < row {
        return Err(Error::invalid_input(format!(
            "stride {} shorter than row of {} bytes",
            stride, row
        )));
    }
    let need = if rows == 0 { 0 } else { stride * (rows - 1) + row };
    if plane.len() < need {
        return Err(Error::BufferTooSmall {
            need,
            have: plane.len(),
        });
    }
    Ok(())
}

fn copy_plane(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    row: usize,
    rows: usize,
) -> Result<()> {
    check_len(src, src_stride, row, rows)?;
    check_len(dst, dst_stride, row, rows)?;
    for r in 0..rows {
        dst[r * dst_stride..r * dst_stride + row]
            .copy_from_slice(&src[r * src_stride..r * src_stride + row]);
    }
    Ok(())
}
