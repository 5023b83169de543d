//! The result of a single read from a [`ByteSource`](super::ByteSource).

use std::io;

/// What a source reports alongside the bytes it delivered.
#[derive(Debug)]
pub enum ReadStatus {
    /// More data may follow.
    Continue,
    /// No more data will follow. Not an error.
    EndOfData,
    /// The source failed. Bytes delivered in the same call are not trusted.
    Failed(io::Error),
}

impl ReadStatus {
    /// Returns `true` for [`ReadStatus::EndOfData`].
    pub fn is_end(&self) -> bool {
        matches!(self, ReadStatus::EndOfData)
    }

    /// Returns `true` for [`ReadStatus::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, ReadStatus::Failed(_))
    }
}

/// Bytes written by one read, plus the status of the source after it.
#[derive(Debug)]
pub struct Fill {
    /// Number of bytes written to the front of the buffer.
    pub filled: usize,
    /// Status reported with those bytes.
    pub status: ReadStatus,
}

impl Fill {
    /// `n` bytes were written and more may follow.
    pub fn more(n: usize) -> Self {
        Self {
            filled: n,
            status: ReadStatus::Continue,
        }
    }

    /// `n` final bytes were written.
    pub fn end(n: usize) -> Self {
        Self {
            filled: n,
            status: ReadStatus::EndOfData,
        }
    }

    /// `n` bytes were written and then the source failed with `err`.
    pub fn failed(n: usize, err: io::Error) -> Self {
        Self {
            filled: n,
            status: ReadStatus::Failed(err),
        }
    }
}
