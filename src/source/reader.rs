//! Adapter from [`std::io::Read`] to [`ByteSource`].

use std::io::{ErrorKind, Read};

use super::{ByteSource, Fill};

/// Wraps any [`Read`] as a [`ByteSource`].
///
/// `Read` cannot attach a status to a nonzero read, so the end of the stream
/// shows up as a separate `Ok(0)` call. The mapping is:
///
/// - `Ok(0)` for a non-empty buffer: [`Fill::end`]
/// - `Ok(n)`: [`Fill::more`]
/// - `Err` of kind [`ErrorKind::Interrupted`]: `Fill::more(0)`
/// - any other `Err`: [`Fill::failed`] with the error untouched
///
/// # Example
///
/// ```
/// use streameq::{ByteSource, ReadSource};
///
/// let mut source = ReadSource::new(&b"abc"[..]);
/// let mut buf = [0u8; 8];
///
/// let fill = source.fill(&mut buf);
/// assert_eq!(fill.filled, 3);
/// assert!(!fill.status.is_end());
///
/// let fill = source.fill(&mut buf);
/// assert_eq!(fill.filled, 0);
/// assert!(fill.status.is_end());
/// ```
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
}

impl<R: Read> ReadSource<R> {
    /// Creates a new adapter around `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps the adapter, returning the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Fill {
        match self.reader.read(buf) {
            Ok(0) if !buf.is_empty() => Fill::end(0),
            Ok(n) => Fill::more(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => Fill::more(0),
            Err(e) => Fill::failed(0, e),
        }
    }
}
