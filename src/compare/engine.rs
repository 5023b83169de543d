//! Core comparison engine.
//!
//! Both sources are read independently into a bounded [`Window`] each. Every
//! step compares only the bytes that are pending on both sides, so the two
//! sources never have to agree on chunk boundaries:
//!
//! ```text
//! left : |--45--|-----100-----|--51--|
//! right: |-31-|-27-|-----138-----|
//!              ^ compared up to min(pending left, pending right)
//! ```
//!
//! A side is read again only once its window is empty. The first differing
//! byte, a length difference, or a read failure ends the comparison with no
//! further reads.

use std::io::Read;

use crate::buffer::{Window, settle};
use crate::compare::Outcome;
use crate::config::CompareConfig;
use crate::error::{CompareError, Side};
use crate::source::{ByteSource, ReadSource};

/// A comparison engine for byte sources.
///
/// `Comparator` only holds a configuration. All buffers are allocated per
/// call, so one instance can serve any number of comparisons, including
/// concurrent ones on different threads.
///
/// # Example
///
/// ```
/// use streameq::{Comparator, CompareConfig, Outcome, ReadSource};
///
/// let comparator = Comparator::new(CompareConfig::new(64)?);
///
/// let mut a = ReadSource::new(&[b'v'; 100][..]);
/// let mut b = ReadSource::new(&[b'v'; 80][..]);
///
/// assert!(matches!(comparator.run(&mut a, &mut b), Outcome::NotEqual));
/// # Ok::<(), streameq::CompareError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    /// Creates a new comparator with the given configuration.
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compares two sources and reports the [`Outcome`].
    pub fn run<A, B>(&self, left: &mut A, right: &mut B) -> Outcome
    where
        A: ByteSource + ?Sized,
        B: ByteSource + ?Sized,
    {
        self.compare(left, right).into()
    }

    /// Compares two sources.
    ///
    /// Returns `Ok(true)` only after both sources have ended with every byte
    /// matched, `Ok(false)` on the first differing byte or when one source
    /// ends before the other, and `Err` as soon as either source fails.
    pub fn compare<A, B>(&self, left: &mut A, right: &mut B) -> Result<bool, CompareError>
    where
        A: ByteSource + ?Sized,
        B: ByteSource + ?Sized,
    {
        self.config.validate()?;

        let size = self.config.buffer_size();
        let mut lw = Window::new(size);
        let mut rw = Window::new(size);

        loop {
            if lw.needs_fill() {
                let n = lw.fill_from(left).map_err(|source| CompareError::Read {
                    side: Side::Left,
                    source,
                })?;
                log::trace!("left read {} bytes at {}", n, lw.consumed());
            }
            if rw.needs_fill() {
                let n = rw.fill_from(right).map_err(|source| CompareError::Read {
                    side: Side::Right,
                    source,
                })?;
                log::trace!("right read {} bytes at {}", n, rw.consumed());
            }

            if let Some(equal) = settle(&mut lw, &mut rw) {
                return Ok(equal);
            }
        }
    }
}

/// Compares two byte sources using `buffer_size` bytes of buffer per side.
///
/// # Errors
///
/// [`CompareError::InvalidConfig`] if `buffer_size` is zero, and
/// [`CompareError::Read`] with the original error if either source fails.
///
/// # Example
///
/// ```
/// use streameq::{ReadSource, compare};
///
/// let mut a = ReadSource::new(&[b'x'; 100][..]);
/// let mut b = ReadSource::new(&[b'v'; 100][..]);
///
/// assert!(!compare(&mut a, &mut b, 64)?);
/// # Ok::<(), streameq::CompareError>(())
/// ```
pub fn compare<A, B>(left: &mut A, right: &mut B, buffer_size: usize) -> Result<bool, CompareError>
where
    A: ByteSource + ?Sized,
    B: ByteSource + ?Sized,
{
    Comparator::new(CompareConfig::new(buffer_size)?).compare(left, right)
}

/// Compares two [`Read`]ers using `buffer_size` bytes of buffer per side.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use streameq::compare_readers;
///
/// let equal = compare_readers(Cursor::new(b"same"), &b"same"[..], 2)?;
/// assert!(equal);
/// # Ok::<(), streameq::CompareError>(())
/// ```
pub fn compare_readers<A: Read, B: Read>(
    left: A,
    right: B,
    buffer_size: usize,
) -> Result<bool, CompareError> {
    compare(
        &mut ReadSource::new(left),
        &mut ReadSource::new(right),
        buffer_size,
    )
}
