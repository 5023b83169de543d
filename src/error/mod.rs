//! Error types for streameq.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which of the two compared inputs an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first input handed to the comparison.
    Left,
    /// The second input handed to the comparison.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur while comparing two inputs.
///
/// A comparison that fails gives no verdict. The underlying I/O error is kept
/// unmodified and is reachable through [`std::error::Error::source`] or
/// [`CompareError::io_error`].
#[derive(Debug)]
pub enum CompareError {
    /// A path could not be opened, so the comparison never started.
    Open {
        /// Input the path was given for.
        side: Side,
        /// The path that failed to open.
        path: PathBuf,
        /// The error reported by the file system.
        source: io::Error,
    },

    /// A source reported a failure while being read.
    Read {
        /// Input that failed.
        side: Side,
        /// The error reported by the source.
        source: io::Error,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl CompareError {
    /// Returns the side the error belongs to, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            CompareError::Open { side, .. } | CompareError::Read { side, .. } => Some(*side),
            CompareError::InvalidConfig { .. } => None,
        }
    }

    /// Returns the originating I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            CompareError::Open { source, .. } | CompareError::Read { source, .. } => Some(source),
            CompareError::InvalidConfig { .. } => None,
        }
    }

    /// Converts into an [`io::Error`], passing the original cause through untouched.
    pub fn into_io_error(self) -> io::Error {
        match self {
            CompareError::Open { source, .. } | CompareError::Read { source, .. } => source,
            CompareError::InvalidConfig { message } => {
                io::Error::new(io::ErrorKind::InvalidInput, message)
            }
        }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::Open { side, path, source } => {
                write!(
                    f,
                    "cannot open {} input {}: {}",
                    side,
                    path.display(),
                    source
                )
            }
            CompareError::Read { side, source } => {
                write!(f, "read error on {} input: {}", side, source)
            }
            CompareError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for CompareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompareError::Open { source, .. } | CompareError::Read { source, .. } => Some(source),
            CompareError::InvalidConfig { .. } => None,
        }
    }
}
