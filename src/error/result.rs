//! Result type alias for Study Monk operations.

use super::study_error::StudyError;

/// Result with [`StudyError`] as the error type.
pub type StudyResult<T> = Result<T, StudyError>;
