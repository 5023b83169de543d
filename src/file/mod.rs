//! File comparison.
//!
//! Opens two paths and hands them to the [`Comparator`]. The files are closed
//! when this function returns, on every path out of it.

use std::fs::File;
use std::path::Path;

use crate::compare::Comparator;
use crate::config::CompareConfig;
use crate::error::{CompareError, Side};
use crate::source::ReadSource;

/// Compares the contents of two files using the default buffer size.
///
/// No size check is done up front; a length difference is found by the
/// streaming comparison itself.
///
/// # Errors
///
/// [`CompareError::Open`] if either path cannot be opened (the comparison
/// never starts), [`CompareError::Read`] if reading fails part way.
///
/// # Example
///
/// ```no_run
/// let same = streameq::files_equal("backup/a.bin", "restore/a.bin")?;
/// println!("identical: {}", same);
/// # Ok::<(), streameq::CompareError>(())
/// ```
pub fn files_equal(left: impl AsRef<Path>, right: impl AsRef<Path>) -> Result<bool, CompareError> {
    files_equal_with(left, right, &CompareConfig::default())
}

/// Compares the contents of two files with an explicit configuration.
pub fn files_equal_with(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    config: &CompareConfig,
) -> Result<bool, CompareError> {
    config.validate()?;

    let left_file = open(left.as_ref(), Side::Left)?;
    let right_file = open(right.as_ref(), Side::Right)?;

    Comparator::new(*config).compare(
        &mut ReadSource::new(left_file),
        &mut ReadSource::new(right_file),
    )
}

fn open(path: &Path, side: Side) -> Result<File, CompareError> {
    log::debug!("opening {} input {}", side, path.display());
    File::open(path).map_err(|source| CompareError::Open {
        side,
        path: path.to_path_buf(),
        source,
    })
}
