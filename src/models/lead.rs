//! Lead-capture form model for the "Get App" modal.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LeadCaptureError;

/// Loose `local@host.tld` shape, roughly what a browser's email input accepts.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Which panel of the modal is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadStep {
    #[default]
    Capture,
    /// Submitted, waiting on the simulated send
    Sending,
    Download,
}

/// Form state. Survives closing and reopening the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadCapture {
    pub step: LeadStep,
    pub email: String,
    /// Validation message from the last rejected submit
    pub error: Option<String>,
}

impl LeadCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character. Ignored once the form has been submitted.
    pub fn push_char(&mut self, c: char) {
        if self.step == LeadStep::Capture {
            self.email.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if self.step == LeadStep::Capture {
            self.email.pop();
            self.error = None;
        }
    }

    /// Validate and move to `Sending`.
    ///
    /// On failure the step stays at `Capture` and the message is kept for display.
    pub fn submit(&mut self) -> Result<(), LeadCaptureError> {
        if self.step != LeadStep::Capture {
            return Ok(());
        }
        match validate_email(&self.email) {
            Ok(()) => {
                self.email = self.email.trim().to_string();
                self.step = LeadStep::Sending;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Finish the simulated send. No-op unless a send is pending.
    pub fn complete(&mut self) {
        if self.step == LeadStep::Sending {
            self.step = LeadStep::Download;
        }
    }
}

/// Required-field plus email-shape check
pub fn validate_email(email: &str) -> Result<(), LeadCaptureError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LeadCaptureError::EmptyEmail);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(LeadCaptureError::InvalidEmail {
            email: email.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LeadCapture {
        let mut form = LeadCapture::new();
        s.chars().for_each(|c| form.push_char(c));
        form
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("student@university.edu").is_ok());
        assert!(matches!(validate_email("   "), Err(LeadCaptureError::EmptyEmail)));
        assert!(matches!(
            validate_email("student"),
            Err(LeadCaptureError::InvalidEmail { .. })
        ));
        assert!(validate_email("a b@c.d").is_err());
    }

    #[test]
    fn test_empty_submit_stays_on_capture() {
        let mut form = LeadCapture::new();
        assert!(form.submit().is_err());
        assert_eq!(form.step, LeadStep::Capture);
        assert!(form.error.is_some());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = typed("nope");
        let _ = form.submit();
        assert!(form.error.is_some());
        form.push_char('x');
        assert!(form.error.is_none());
    }

    #[test]
    fn test_valid_submit_then_complete() {
        let mut form = typed("student@university.edu");
        form.submit().unwrap();
        assert_eq!(form.step, LeadStep::Sending);
        form.complete();
        assert_eq!(form.step, LeadStep::Download);
    }

    #[test]
    fn test_input_frozen_after_submit() {
        let mut form = typed("a@b.co");
        form.submit().unwrap();
        form.push_char('z');
        form.backspace();
        assert_eq!(form.email, "a@b.co");
    }

    #[test]
    fn test_complete_without_submit_is_noop() {
        let mut form = LeadCapture::new();
        form.complete();
        assert_eq!(form.step, LeadStep::Capture);
    }
}
