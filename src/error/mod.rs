//! Error types for Study Monk.
//!
//! - **Lead capture errors**: form validation failures shown inline in the modal
//! - **Unified error type**: `StudyError` for everything that can fail outside the form
//! - **Categories**: coarse classification used to decide how a failure is surfaced
//! - **Result alias**: `StudyResult<T>`
//!
//! The mock search has no error path; it cannot fail.

mod category;
mod lead;
mod result;
mod study_error;

pub use category::ErrorCategory;
pub use lead::LeadCaptureError;
pub use result::StudyResult;
pub use study_error::StudyError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_lead_error_converts_and_categorizes() {
        let err: StudyError = LeadCaptureError::EmptyEmail.into();
        assert_eq!(err.category(), ErrorCategory::User);
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> StudyResult<()> {
            std::fs::File::open("/definitely/not/here")?;
            Ok(())
        }
        let err = open_missing().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
