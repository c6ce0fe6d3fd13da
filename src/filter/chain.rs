//! Filter chain for sequential filter application
//!
//! Frames go through each filter in order; whatever one filter produces is
//! fed to the next. Stacking several testshape filters draws several shapes.

use tracing::debug;

use super::caps::VideoInfo;
use super::Filter;
use crate::error::Result;
use crate::frame::VideoFrame;

/// A chain of filters applied sequentially
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter + Send>>,
}

impl FilterChain {
    /// Create a new empty filter chain
    pub fn new() -> Self {
        FilterChain {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the chain
    pub fn add(mut self, filter: Box<dyn Filter + Send>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Hand the format to every filter. Filters here never change the format,
    /// so all of them see the same one.
    pub fn set_caps(&mut self, info: &VideoInfo) -> Result<()> {
        for filter in &mut self.filters {
            filter.set_caps(info)?;
        }
        debug!("filter chain of {} negotiated {}", self.filters.len(), info);
        Ok(())
    }

    /// Process a frame through all filters in the chain
    pub fn process(&mut self, frame: VideoFrame) -> Result<Vec<VideoFrame>> {
        Self::run_from(&mut self.filters, vec![frame])
    }

    /// Flush all filters, passing each filter's leftovers through the rest
    pub fn flush(&mut self) -> Result<Vec<VideoFrame>> {
        let mut output = Vec::new();
        for index in 0..self.filters.len() {
            let (head, tail) = self.filters.split_at_mut(index + 1);
            let flushed = head[index].flush()?;
            output.extend(Self::run_from(tail, flushed)?);
        }
        Ok(output)
    }

    fn run_from(
        filters: &mut [Box<dyn Filter + Send>],
        frames: Vec<VideoFrame>,
    ) -> Result<Vec<VideoFrame>> {
        let mut current = frames;
        for filter in filters.iter_mut() {
            let mut next = Vec::with_capacity(current.len());
            for frame in current {
                next.extend(filter.filter(frame)?);
            }
            current = next;
        }
        Ok(current)
    }
}
