//! A [`ByteSource`] that replays a scripted sequence of reads.

use std::collections::VecDeque;
use std::io;

use bytes::{Buf, Bytes};

use super::{ByteSource, Fill, ReadStatus};

#[derive(Debug)]
struct Step {
    data: Bytes,
    status: ReadStatus,
}

/// An in-memory source that answers reads from a fixed script.
///
/// Each step is a chunk of bytes plus the status to report with it. A read
/// copies as much of the current chunk as fits in the caller's buffer. If the
/// chunk does not fit, the rest is delivered by the next read and the
/// status is held back until the last byte of the chunk goes out. After the
/// script runs out every read reports [`ReadStatus::EndOfData`] with no bytes.
///
/// The source counts reads and delivered bytes, which makes it useful for
/// checking how far a consumer read before stopping.
///
/// This is a test helper shared with the benches and fuzz targets. It is not
/// part of the documented API.
///
/// # Example
///
/// ```
/// use streameq::{ScriptedSource, compare};
///
/// let mut a = ScriptedSource::new().then(vec![b'v'; 45]).then_end(vec![b'v'; 55]);
/// let mut b = ScriptedSource::chunked(vec![b'v'; 100], &[31, 27]);
///
/// assert!(compare(&mut a, &mut b, 64)?);
/// # Ok::<(), streameq::CompareError>(())
/// ```
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    reads: usize,
    delivered: u64,
}

impl ScriptedSource {
    /// Creates a source with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `data` into reads of the given sizes, followed by one read with
    /// whatever is left over. Zero sizes produce empty reads.
    ///
    /// Sizes beyond the end of `data` are clamped.
    pub fn chunked(data: impl Into<Bytes>, sizes: &[usize]) -> Self {
        let mut data = data.into();
        let mut source = Self::new();
        for &size in sizes {
            let piece = data.split_to(size.min(data.len()));
            source.push(piece, ReadStatus::Continue);
        }
        if !data.is_empty() {
            source.push(data, ReadStatus::Continue);
        }
        source
    }

    /// Appends a chunk reported with [`ReadStatus::Continue`].
    pub fn then(mut self, data: impl Into<Bytes>) -> Self {
        self.push(data, ReadStatus::Continue);
        self
    }

    /// Appends a chunk reported with [`ReadStatus::EndOfData`].
    pub fn then_end(mut self, data: impl Into<Bytes>) -> Self {
        self.push(data, ReadStatus::EndOfData);
        self
    }

    /// Appends a chunk reported with [`ReadStatus::Failed`].
    pub fn then_fail(mut self, data: impl Into<Bytes>, err: io::Error) -> Self {
        self.push(data, ReadStatus::Failed(err));
        self
    }

    /// Appends a step to the script.
    pub fn push(&mut self, data: impl Into<Bytes>, status: ReadStatus) {
        self.steps.push_back(Step {
            data: data.into(),
            status,
        });
    }

    /// Returns the number of reads issued so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Returns the number of bytes handed out so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Returns `true` once every scripted step has been delivered.
    pub fn is_drained(&self) -> bool {
        self.steps.is_empty()
    }
}

impl ByteSource for ScriptedSource {
    fn fill(&mut self, buf: &mut [u8]) -> Fill {
        self.reads += 1;

        let Some(step) = self.steps.front_mut() else {
            return Fill::end(0);
        };

        let n = step.data.len().min(buf.len());
        buf[..n].copy_from_slice(&step.data[..n]);
        step.data.advance(n);
        self.delivered += n as u64;

        if !step.data.is_empty() {
            return Fill::more(n);
        }

        match self.steps.pop_front() {
            Some(step) => Fill {
                filled: n,
                status: step.status,
            },
            None => Fill::more(n),
        }
    }
}
