//! Navigation methods for the App.

use crate::models::{archive, catalog};
use crate::ui::article_lines;
use crate::view_state::ViewKind;

use super::{App, AppMessage, Focus, MenuItem};

impl App {
    /// Submit the search box. Returns false when the query was rejected.
    pub fn submit_search(&mut self) -> bool {
        match self.controller.submit_current_query() {
            Some(request) => {
                self.schedule(
                    self.config.search_delay,
                    AppMessage::SearchCompleted(request),
                );
                true
            }
            None => false,
        }
    }

    /// Logo / "New Subject": back to an empty Home screen
    pub fn go_home(&mut self) {
        self.controller.reset();
        self.focus = Focus::SearchInput;
        self.selected_post = 0;
    }

    /// "Resources" / "View Archive"
    pub fn open_blog(&mut self) {
        if self.controller.kind() != ViewKind::BlogList {
            self.selected_post = 0;
        }
        self.controller.open_blog();
    }

    /// Open the selected card of the current post list
    pub fn open_selected_post(&mut self) {
        let post = match self.controller.kind() {
            ViewKind::Home => catalog().get(self.selected_post),
            ViewKind::BlogList => archive().get(self.selected_post).copied(),
            _ => None,
        };
        if let Some(post) = post {
            self.controller.open_post(post);
            self.article_scroll = 0;
        }
    }

    /// Scroll the open article, stopping at its last line
    pub fn scroll_article(&mut self, delta: i32) {
        let Some(post) = self.view().active_post() else {
            return;
        };
        let max = article_lines(post, self.terminal_width)
            .len()
            .saturating_sub(1)
            .min(u16::MAX as usize) as i32;
        self.article_scroll = (self.article_scroll as i32 + delta).clamp(0, max) as u16;
    }

    /// "Back to Library"
    pub fn go_back(&mut self) {
        self.controller.go_back();
    }

    /// Number of selectable cards in the current view
    pub fn post_count(&self) -> usize {
        match self.controller.kind() {
            ViewKind::Home => catalog().len(),
            ViewKind::BlogList => archive().len(),
            _ => 0,
        }
    }

    pub fn select_next_post(&mut self) {
        let count = self.post_count();
        if count > 0 && self.selected_post + 1 < count {
            self.selected_post += 1;
        }
    }

    pub fn select_prev_post(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// "Get App" and the article CTAs
    pub fn open_modal(&mut self) {
        self.controller.open_modal();
    }

    pub fn close_modal(&mut self) {
        self.controller.close_modal();
    }

    /// Submit the lead form, scheduling the send on success.
    ///
    /// Validation failures are kept on the form for display.
    pub fn submit_lead(&mut self) {
        match self.controller.submit_lead() {
            Ok(true) => self.schedule(self.config.lead_delay, AppMessage::LeadCaptured),
            Ok(false) => {}
            Err(e) => tracing::debug!("Lead capture rejected: {}", e),
        }
    }

    pub fn toggle_menu(&mut self) {
        self.controller.toggle_menu();
        self.menu_index = 0;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    /// Activate the highlighted menu entry.
    ///
    /// Resources closes the menu; Get App leaves it open behind the modal.
    pub fn activate_menu_item(&mut self) {
        match MenuItem::ALL[self.menu_index % MenuItem::ALL.len()] {
            MenuItem::Resources => {
                self.open_blog();
                self.controller.close_menu();
            }
            MenuItem::GetApp => self.open_modal(),
        }
    }
}
