use thiserror::Error;

/// Lead-capture form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadCaptureError {
    #[error("Please fill out this field.")]
    EmptyEmail,

    #[error("Please include an '@' and a domain in the email address. '{email}' is incomplete.")]
    InvalidEmail { email: String },
}
