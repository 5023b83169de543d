//! Configuration for comparisons.
//!
//! - [`CompareConfig`] - Per-side read buffer size

use crate::error::CompareError;

/// Default per-side buffer size (8 KiB), in line with typical file-system reads.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Configuration for a comparison.
///
/// The buffer size is the capacity of each side's read buffer, so a
/// comparison never holds more than `2 * buffer_size` bytes of input at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareConfig {
    buffer_size: usize,
}

impl CompareConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `buffer_size` is zero.
    pub fn new(buffer_size: usize) -> Result<Self, CompareError> {
        if buffer_size == 0 {
            return Err(CompareError::InvalidConfig {
                message: "buffer size must be non-zero",
            });
        }

        Ok(Self { buffer_size })
    }

    /// Sets the buffer size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Returns the buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), CompareError> {
        Self::new(self.buffer_size).map(|_| ())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
