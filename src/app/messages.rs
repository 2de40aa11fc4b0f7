//! AppMessage enum for async communication within the application.

use crate::view_state::SearchRequest;

/// Messages sent back by the simulated-latency timers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The search delay for this request has elapsed
    SearchCompleted(SearchRequest),
    /// The lead-capture send delay has elapsed
    LeadCaptured,
}
