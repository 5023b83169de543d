//! The result of a comparison.

use crate::error::CompareError;

/// Result of comparing two sources.
///
/// `Equal` and `NotEqual` are verdicts. `Failed` means an I/O error stopped
/// the comparison and no verdict exists.
#[derive(Debug)]
pub enum Outcome {
    /// Both sources produced the same bytes and then ended.
    Equal,
    /// The sources differ in content or in length.
    NotEqual,
    /// The comparison could not be completed.
    Failed(CompareError),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Equal`].
    pub fn is_equal(&self) -> bool {
        matches!(self, Outcome::Equal)
    }

    /// Returns `true` for [`Outcome::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Converts into the `(equal, error)` form: `Ok(verdict)` or the failure.
    pub fn into_result(self) -> Result<bool, CompareError> {
        match self {
            Outcome::Equal => Ok(true),
            Outcome::NotEqual => Ok(false),
            Outcome::Failed(e) => Err(e),
        }
    }
}

impl From<Result<bool, CompareError>> for Outcome {
    fn from(result: Result<bool, CompareError>) -> Self {
        match result {
            Ok(true) => Outcome::Equal,
            Ok(false) => Outcome::NotEqual,
            Err(e) => Outcome::Failed(e),
        }
    }
}
