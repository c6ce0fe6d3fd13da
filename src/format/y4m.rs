//! Y4M (YUV4MPEG2) reading and writing
//!
//! Only 8-bit 4:2:0 streams are handled; frames come out and go in as
//! planar I420 [`VideoFrame`]s.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bytes::BytesMut;

use crate::error::{Error, Result};
use crate::filter::caps::VideoInfo;
use crate::frame::{chroma_height, chroma_width, VideoFrame};
use crate::util::{Buffer, PixelFormat, Rational, Timestamp};

fn is_8bit_420(colorspace: y4m::Colorspace) -> bool {
    matches!(
        colorspace,
        y4m::Colorspace::C420
            | y4m::Colorspace::C420jpeg
            | y4m::Colorspace::C420paldv
            | y4m::Colorspace::C420mpeg2
    )
}

/// Stream parameters shared by a reader and the writer that mirrors it
#[derive(Debug, Clone, Copy)]
pub struct Y4mHeader {
    pub width: u32,
    pub height: u32,
    pub framerate: Rational,
    pub colorspace: y4m::Colorspace,
}

impl Y4mHeader {
    /// The NV12 format frames of this stream are drawn on
    pub fn nv12_info(&self) -> VideoInfo {
        VideoInfo::nv12(self.width, self.height).with_framerate(self.framerate)
    }
}

/// Reads I420 frames from a Y4M stream
pub struct Y4mReader<R: Read> {
    decoder: y4m::Decoder<R>,
    header: Y4mHeader,
    frame_number: u64,
}

impl Y4mReader<BufReader<File>> {
    /// Open a Y4M file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read> Y4mReader<R> {
    /// Parse the stream header
    pub fn new(reader: R) -> Result<Self> {
        let decoder = y4m::decode(reader)
            .map_err(|e| Error::format(format!("Failed to decode Y4M header: {}", e)))?;

        let colorspace = decoder.get_colorspace();
        if !is_8bit_420(colorspace) {
            return Err(Error::unsupported(format!(
                "Y4M colorspace {:?}, only 8-bit 4:2:0 is supported",
                colorspace
            )));
        }

        let framerate = decoder.get_framerate();
        let header = Y4mHeader {
            width: decoder.get_width() as u32,
            height: decoder.get_height() as u32,
            framerate: Rational::new(framerate.num as i64, framerate.den as i64),
            colorspace,
        };

        Ok(Y4mReader {
            decoder,
            header,
            frame_number: 0,
        })
    }

    /// Stream parameters
    pub fn header(&self) -> &Y4mHeader {
        &self.header
    }

    /// Read the next frame, or `None` at end of stream
    pub fn read_frame(&mut self) -> Result<Option<VideoFrame>> {
        let frame = match self.decoder.read_frame() {
            Ok(frame) => frame,
            Err(y4m::Error::EOF) => return Ok(None),
            Err(e) => return Err(Error::format(format!("Failed to read frame: {}", e))),
        };

        let width = self.header.width;
        let height = self.header.height;
        let cw = chroma_width(width);

        let mut out = VideoFrame::new(width, height, PixelFormat::YUV420P);
        out.data = vec![
            Buffer::new(BytesMut::from(frame.get_y_plane())),
            Buffer::new(BytesMut::from(frame.get_u_plane())),
            Buffer::new(BytesMut::from(frame.get_v_plane())),
        ];
        out.linesize = vec![width as usize, cw, cw];
        out.pts = Timestamp::new(self.frame_number as i64);
        out.duration = 1;

        self.frame_number += 1;
        Ok(Some(out))
    }
}

/// Writes I420 frames to a Y4M stream
pub struct Y4mWriter<W: Write> {
    encoder: y4m::Encoder<W>,
    header: Y4mHeader,
}

impl Y4mWriter<BufWriter<File>> {
    /// Create a Y4M file
    pub fn create(path: &Path, header: Y4mHeader) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), header)
    }
}

impl<W: Write> Y4mWriter<W> {
    /// Write the stream header
    pub fn new(writer: W, header: Y4mHeader) -> Result<Self> {
        if header.framerate.num < 0 || header.framerate.den <= 0 {
            return Err(Error::invalid_input(format!(
                "frame rate {} cannot be written to Y4M",
                header.framerate
            )));
        }
        let framerate = y4m::Ratio::new(header.framerate.num as usize, header.framerate.den as usize);
        let encoder = y4m::encode(header.width as usize, header.height as usize, framerate)
            .with_colorspace(header.colorspace)
            .write_header(writer)
            .map_err(|e| Error::format(format!("Failed to write Y4M header: {}", e)))?;

        Ok(Y4mWriter { encoder, header })
    }

    /// Write one tightly packed I420 frame
    pub fn write_frame(&mut self, frame: &VideoFrame) -> Result<()> {
        if frame.format != PixelFormat::YUV420P
            || frame.width != self.header.width
            || frame.height != self.header.height
            || frame.num_planes() != 3
        {
            return Err(Error::invalid_input(format!(
                "expected {}x{} I420 frame, got {}x{} {}",
                self.header.width, self.header.height, frame.width, frame.height, frame.format
            )));
        }

        let luma_size = self.header.width as usize * self.header.height as usize;
        let chroma_size = chroma_width(self.header.width) * chroma_height(self.header.height);
        let y = plane_prefix(frame, 0, luma_size)?;
        let u = plane_prefix(frame, 1, chroma_size)?;
        let v = plane_prefix(frame, 2, chroma_size)?;

        self.encoder
            .write_frame(&y4m::Frame::new([y, u, v], None))
            .map_err(|e| Error::format(format!("Failed to write frame: {}", e)))
    }
}

fn plane_prefix(frame: &VideoFrame, index: usize, len: usize) -> Result<&[u8]> {
    let plane = frame.data[index].as_slice();
    plane.get(..len).ok_or(Error::BufferTooSmall {
        need: len,
        have: plane.len(),
    })
}
