//! One side's read buffer and the overlap comparison between two sides.

use std::io;

use crate::source::{ByteSource, Fill, ReadStatus};

#[cfg(feature = "async-io")]
use std::pin::Pin;
#[cfg(feature = "async-io")]
use std::task::{Context, Poll};

#[cfg(feature = "async-io")]
use futures_io::AsyncRead;

/// Most recent chunk read from one side, plus a cursor into its unconsumed part.
#[derive(Debug)]
pub(crate) struct Window {
    data: Vec<u8>,
    start: usize,
    end: usize,
    at_end: bool,
    consumed: u64,
}

impl Window {
    /// Creates an empty window with `capacity` bytes of buffer.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            start: 0,
            end: 0,
            at_end: false,
            consumed: 0,
        }
    }

    /// Bytes read but not yet compared.
    pub(crate) fn pending(&self) -> &[u8] {
        &self.data[self.start..self.end]
    }

    /// Nothing is pending and the source may still have data.
    pub(crate) fn needs_fill(&self) -> bool {
        self.start == self.end && !self.at_end
    }

    /// Nothing is pending and the source has signaled end of data.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.start == self.end && self.at_end
    }

    /// Total bytes compared on this side so far.
    pub(crate) fn consumed(&self) -> u64 {
        self.consumed
    }

    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.end - self.start);
        self.start += n;
        self.consumed += n as u64;
    }

    fn reset(&mut self, filled: usize) {
        self.start = 0;
        self.end = filled;
    }

    /// Refills the window with one read from `source`.
    ///
    /// Bytes delivered alongside a failure are discarded with it. A source
    /// that reports more bytes than the buffer holds is treated as failed.
    pub(crate) fn fill_from<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> io::Result<usize> {
        let Fill { filled, status } = source.fill(&mut self.data);
        match status {
            ReadStatus::Continue => {}
            ReadStatus::EndOfData => self.at_end = true,
            ReadStatus::Failed(e) => {
                self.reset(0);
                return Err(e);
            }
        }
        if filled > self.data.len() {
            self.reset(0);
            return Err(overfilled(filled, self.data.len()));
        }
        self.reset(filled);
        Ok(self.end)
    }

    /// Async counterpart of [`Window::fill_from`].
    ///
    /// `Ok(0)` from the reader is end of data. `Interrupted` counts as an empty read.
    #[cfg(feature = "async-io")]
    pub(crate) fn poll_fill<R: AsyncRead + ?Sized>(
        &mut self,
        reader: Pin<&mut R>,
        cx: &mut Context<'_>,
    ) -> Poll<io::Result<usize>> {
        match reader.poll_read(cx, &mut self.data) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(0)) => {
                self.reset(0);
                self.at_end = true;
                Poll::Ready(Ok(0))
            }
            Poll::Ready(Ok(n)) if n > self.data.len() => {
                self.reset(0);
                Poll::Ready(Err(overfilled(n, self.data.len())))
            }
            Poll::Ready(Ok(n)) => {
                self.reset(n);
                Poll::Ready(Ok(self.end))
            }
            Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => {
                self.reset(0);
                Poll::Ready(Ok(0))
            }
            Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
        }
    }
}

fn overfilled(filled: usize, capacity: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{} bytes reported for a {} byte buffer", filled, capacity),
    )
}

/// Compares the overlapping pending bytes of both windows and consumes them.
///
/// Returns `Some(verdict)` once the answer is known, or `None` when at least
/// one side has to be read again.
pub(crate) fn settle(left: &mut Window, right: &mut Window) -> Option<bool> {
    let n = left.pending().len().min(right.pending().len());
    let (a, b) = (&left.pending()[..n], &right.pending()[..n]);

    if a != b {
        let at = a.iter().zip(b).position(|(x, y)| x != y).unwrap_or(0);
        log::debug!("streams differ at byte {}", left.consumed() + at as u64);
        return Some(false);
    }

    left.consume(n);
    right.consume(n);

    match (left.is_exhausted(), right.is_exhausted()) {
        (true, true) => {
            log::debug!("streams equal after {} bytes", left.consumed());
            Some(true)
        }
        (true, false) => longer_side(right, left.consumed()),
        (false, true) => longer_side(left, right.consumed()),
        (false, false) => None,
    }
}

// The other side ended; `open` is the one that has not. It is longer if it
// still holds bytes, otherwise it has to be read once more.
fn longer_side(open: &Window, ended_at: u64) -> Option<bool> {
    if open.pending().is_empty() {
        return None;
    }
    log::debug!("streams differ in length: one side ended after {} bytes", ended_at);
    Some(false)
}
