//! Buffer management for frame planes

use bytes::BytesMut;

/// A uniquely owned, writable buffer holding one plane of a frame.
///
/// Filters draw into the bytes in place; a buffer is never reallocated
/// while it travels through a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: BytesMut,
}

impl Buffer {
    /// Create a new buffer from bytes
    pub fn new(data: BytesMut) -> Self {
        Buffer { data }
    }

    /// Create a buffer from a vector
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Buffer {
            data: BytesMut::from(&vec[..]),
        }
    }

    /// Create a buffer of `len` bytes all set to `value`
    pub fn filled(len: usize, value: u8) -> Self {
        let mut data = BytesMut::with_capacity(len);
        data.resize(len, value);
        Buffer { data }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a slice of the buffer data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the buffer
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
