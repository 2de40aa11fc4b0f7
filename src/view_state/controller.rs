//! View controller operations.

use crate::error::LeadCaptureError;
use crate::models::{generate_mock_results, BlogPost, LeadCapture, LeadStep};

use super::view::{View, ViewKind};

/// A submitted search waiting for its simulated delay.
///
/// Carries the query captured at submit time; later edits to the input
/// buffer do not change what the completion generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonic per-controller counter, for logging
    pub ticket: u64,
    pub query: String,
}

/// Finite-state store for the session.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view: View,
    /// Search input buffer
    query: String,
    modal_open: bool,
    menu_open: bool,
    lead: LeadCapture,
    next_ticket: u64,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn lead(&self) -> &LeadCapture {
        &self.lead
    }

    // ------------------------------------------------------------------
    // Query input
    // ------------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Submit the current input buffer.
    pub fn submit_current_query(&mut self) -> Option<SearchRequest> {
        let query = self.query.clone();
        self.submit_search(&query)
    }

    /// Enter SEARCH_RESULTS in the loading state.
    ///
    /// Empty or whitespace-only queries are rejected and nothing changes.
    /// The returned request must be handed back to [`complete_search`]
    /// once the delay has elapsed.
    ///
    /// [`complete_search`]: ViewController::complete_search
    pub fn submit_search(&mut self, query: &str) -> Option<SearchRequest> {
        if query.trim().is_empty() {
            tracing::debug!("Search rejected: empty query");
            return None;
        }

        self.next_ticket += 1;
        let request = SearchRequest {
            ticket: self.next_ticket,
            query: query.to_string(),
        };
        self.query = query.to_string();
        self.view = View::SearchResults {
            query: request.query.clone(),
            results: Vec::new(),
            loading: true,
        };
        tracing::info!(ticket = request.ticket, query = %request.query, "Search submitted");
        Some(request)
    }

    /// Populate results for a finished search.
    ///
    /// Completions are applied in arrival order with no cancellation, so when
    /// two searches overlap the one that finishes last wins. A completion that
    /// arrives after the user has left SEARCH_RESULTS is dropped.
    pub fn complete_search(&mut self, request: &SearchRequest) -> bool {
        match &mut self.view {
            View::SearchResults {
                results, loading, ..
            } => {
                *results = generate_mock_results(&request.query);
                *loading = false;
                tracing::info!(ticket = request.ticket, "Search completed");
                true
            }
            other => {
                tracing::debug!(
                    ticket = request.ticket,
                    view = %other.kind(),
                    "Dropping search completion outside results view"
                );
                false
            }
        }
    }

    /// Clear query and results and return to HOME
    pub fn reset(&mut self) {
        self.query.clear();
        self.transition(View::Home);
    }

    /// Show the resources archive
    pub fn open_blog(&mut self) {
        self.transition(View::BlogList);
    }

    /// Show an article
    pub fn open_post(&mut self, post: &BlogPost) {
        self.transition(View::BlogPost { post: post.clone() });
    }

    /// Leave an article for the archive.
    ///
    /// Returns false when there is no article to leave.
    pub fn go_back(&mut self) -> bool {
        if self.view.kind() != ViewKind::BlogPost {
            return false;
        }
        self.transition(View::BlogList);
        true
    }

    fn transition(&mut self, next: View) {
        let from = self.view.kind();
        self.view = next;
        tracing::debug!(from = %from, to = %self.view.kind(), "View transition");
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    // ------------------------------------------------------------------
    // Lead capture
    // ------------------------------------------------------------------

    pub fn lead_push_char(&mut self, c: char) {
        self.lead.push_char(c);
    }

    pub fn lead_backspace(&mut self) {
        self.lead.backspace();
    }

    /// Validate the e-mail and start the simulated send
    pub fn submit_lead(&mut self) -> Result<bool, LeadCaptureError> {
        let was_capture = self.lead.step == LeadStep::Capture;
        self.lead.submit()?;
        let started = was_capture && self.lead.step == LeadStep::Sending;
        if started {
            tracing::info!("Lead capture submitted");
        }
        Ok(started)
    }

    pub fn complete_lead(&mut self) {
        self.lead.complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    fn searched(query: &str) -> (ViewController, SearchRequest) {
        let mut vc = ViewController::new();
        let req = vc.submit_search(query).expect("non-empty query");
        (vc, req)
    }

    #[test]
    fn test_initial_state() {
        let vc = ViewController::new();
        assert_eq!(vc.kind(), ViewKind::Home);
        assert!(vc.query().is_empty());
        assert!(!vc.is_modal_open());
        assert!(!vc.is_menu_open());
    }

    #[test]
    fn test_empty_and_whitespace_queries_rejected() {
        let mut vc = ViewController::new();
        assert!(vc.submit_search("").is_none());
        assert!(vc.submit_search("   \t").is_none());
        assert_eq!(vc.kind(), ViewKind::Home);
    }

    #[test]
    fn test_submit_enters_loading() {
        let (vc, req) = searched("Calc II final");
        assert_eq!(vc.kind(), ViewKind::SearchResults);
        assert!(vc.view().is_loading());
        assert!(vc.view().results().is_empty());
        assert_eq!(req.query, "Calc II final");
    }

    #[test]
    fn test_completion_populates_three_results() {
        let (mut vc, req) = searched("Bio 101 Exam in 12 hours");
        assert!(vc.complete_search(&req));
        assert!(!vc.view().is_loading());
        let results = vc.view().results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "The 12-Hour hours Cram");
    }

    #[test]
    fn test_later_completion_wins() {
        let mut vc = ViewController::new();
        let first = vc.submit_search("Chem midterm").unwrap();
        let second = vc.submit_search("Physics final").unwrap();
        assert!(second.ticket > first.ticket);

        vc.complete_search(&second);
        vc.complete_search(&first);
        assert_eq!(vc.view().results()[0].title, "The 12-Hour midterm Cram");
    }

    #[test]
    fn test_completion_after_reset_is_dropped() {
        let (mut vc, req) = searched("Stats");
        vc.reset();
        assert!(!vc.complete_search(&req));
        assert_eq!(vc.kind(), ViewKind::Home);
    }

    #[test]
    fn test_reset_clears_query_and_results() {
        let (mut vc, req) = searched("Stats");
        vc.complete_search(&req);
        vc.reset();
        assert_eq!(vc.view(), &View::Home);
        assert!(vc.query().is_empty());
        assert!(vc.view().results().is_empty());
    }

    #[test]
    fn test_submit_current_query_uses_buffer() {
        let mut vc = ViewController::new();
        "Art".chars().for_each(|c| vc.push_query_char(c));
        vc.pop_query_char();
        let req = vc.submit_current_query().unwrap();
        assert_eq!(req.query, "Ar");
    }

    #[test]
    fn test_open_post_carries_exact_post() {
        let mut vc = ViewController::new();
        vc.open_blog();
        for post in catalog() {
            vc.open_post(post);
            assert_eq!(vc.view().active_post(), Some(post));
            assert!(vc.go_back());
            assert_eq!(vc.kind(), ViewKind::BlogList);
        }
    }

    #[test]
    fn test_go_back_only_from_post() {
        let mut vc = ViewController::new();
        assert!(!vc.go_back());
        vc.open_blog();
        assert!(!vc.go_back());
        assert_eq!(vc.kind(), ViewKind::BlogList);
    }

    #[test]
    fn test_modal_is_idempotent_and_view_independent() {
        let (mut vc, _) = searched("Law");
        vc.open_modal();
        vc.open_modal();
        assert!(vc.is_modal_open());
        assert_eq!(vc.kind(), ViewKind::SearchResults);
        vc.close_modal();
        vc.close_modal();
        assert!(!vc.is_modal_open());
        assert_eq!(vc.kind(), ViewKind::SearchResults);
    }

    #[test]
    fn test_menu_toggle_independent_of_view() {
        let mut vc = ViewController::new();
        vc.open_blog();
        vc.toggle_menu();
        assert!(vc.is_menu_open());
        assert_eq!(vc.kind(), ViewKind::BlogList);
        vc.toggle_menu();
        assert!(!vc.is_menu_open());
    }

    #[test]
    fn test_lead_flow() {
        let mut vc = ViewController::new();
        vc.open_modal();
        assert!(vc.submit_lead().is_err());
        "me@school.edu".chars().for_each(|c| vc.lead_push_char(c));
        assert_eq!(vc.submit_lead(), Ok(true));
        assert_eq!(vc.submit_lead(), Ok(false));
        vc.complete_lead();
        assert_eq!(vc.lead().step, LeadStep::Download);
    }

    #[test]
    fn test_lead_state_survives_modal_close() {
        let mut vc = ViewController::new();
        vc.open_modal();
        vc.lead_push_char('x');
        vc.close_modal();
        vc.open_modal();
        assert_eq!(vc.lead().email, "x");
    }
}
