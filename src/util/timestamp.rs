//! Timestamp handling for frames

use std::fmt;

/// A presentation timestamp, in frame-rate ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// Timestamp value in time base units
    pub value: i64,
}

impl Timestamp {
    /// Create a new timestamp
    pub fn new(value: i64) -> Self {
        Timestamp { value }
    }

    /// No timestamp / unknown timestamp
    pub fn none() -> Self {
        Timestamp { value: i64::MIN }
    }

    /// Check if timestamp is valid
    pub fn is_valid(&self) -> bool {
        self.value != i64::MIN
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "NOPTS")
        }
    }
}
