//! Byte sources consumed by the comparator.
//!
//! - [`ByteSource`] - The read capability the comparator depends on
//! - [`Fill`] / [`ReadStatus`] - Result of one read: a byte count plus a status
//! - [`ReadSource`] - Adapter from [`std::io::Read`]
//! - `ScriptedSource` - In-memory source replaying a fixed read sequence, for tests

mod fill;
mod reader;
mod scripted;

pub use fill::{Fill, ReadStatus};
pub use reader::ReadSource;
#[doc(hidden)]
pub use scripted::ScriptedSource;

/// A producer of bytes read through a caller-provided buffer.
///
/// Each call to [`fill`](ByteSource::fill) writes between `0` and `buf.len()`
/// bytes to the front of `buf` and reports how many it wrote together with a
/// status. A call may:
///
/// - return fewer bytes than requested while more data follows (short read),
/// - return zero bytes with [`ReadStatus::Continue`], which is not the end,
/// - attach [`ReadStatus::EndOfData`] or [`ReadStatus::Failed`] to a final
///   nonzero byte count.
///
/// # Example
///
/// ```
/// use streameq::{ByteSource, Fill};
///
/// struct Zeros(usize);
///
/// impl ByteSource for Zeros {
///     fn fill(&mut self, buf: &mut [u8]) -> Fill {
///         let n = self.0.min(buf.len());
///         buf[..n].fill(0);
///         self.0 -= n;
///         if self.0 == 0 { Fill::end(n) } else { Fill::more(n) }
///     }
/// }
/// ```
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes into `buf`.
    fn fill(&mut self, buf: &mut [u8]) -> Fill;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn fill(&mut self, buf: &mut [u8]) -> Fill {
        (**self).fill(buf)
    }
}
