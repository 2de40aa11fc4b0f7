//! Key handling for the App.
//!
//! Overlays take keys first: the modal, then the collapsed menu. Otherwise
//! global shortcuts apply, then the active view's bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view_state::ViewKind;

use super::{App, Focus};

impl App {
    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.controller.is_modal_open() {
            self.handle_modal_key(key);
            return;
        }

        if self.controller.is_menu_open() {
            self.handle_menu_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => self.open_blog(),
                KeyCode::Char('g') => self.open_modal(),
                KeyCode::Char('n') => self.toggle_menu(),
                KeyCode::Char('l') => self.go_home(),
                _ => {}
            }
            return;
        }

        match self.controller.kind() {
            ViewKind::Home => self.handle_home_key(key),
            ViewKind::SearchResults => self.handle_results_key(key),
            ViewKind::BlogList => self.handle_blog_list_key(key),
            ViewKind::BlogPost => self.handle_blog_post_key(key),
        }
    }

    /// Handle bracketed paste into whichever text field has focus.
    ///
    /// Line breaks are dropped; both fields are single-line.
    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        let chars = text.chars().filter(|c| !c.is_control());
        if self.controller.is_modal_open() {
            chars.for_each(|c| self.controller.lead_push_char(c));
        } else if !self.controller.is_menu_open()
            && self.controller.kind() == ViewKind::Home
            && self.focus == Focus::SearchInput
        {
            chars.for_each(|c| self.controller.push_query_char(c));
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_modal(),
            KeyCode::Enter => self.submit_lead(),
            KeyCode::Backspace => self.controller.lead_backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.lead_push_char(c)
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.controller.close_menu(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_menu()
            }
            KeyCode::Up | KeyCode::Char('k') => self.menu_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.menu_next(),
            KeyCode::Enter => self.activate_menu_item(),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::SearchInput => match key.code {
                KeyCode::Enter => {
                    self.submit_search();
                }
                KeyCode::Backspace => self.controller.pop_query_char(),
                KeyCode::Tab | KeyCode::Down => self.focus = Focus::Posts,
                KeyCode::Char(c) => self.controller.push_query_char(c),
                _ => {}
            },
            Focus::Posts => match key.code {
                KeyCode::Tab | KeyCode::Esc | KeyCode::Up => self.focus = Focus::SearchInput,
                KeyCode::Left | KeyCode::Char('h') => self.select_prev_post(),
                KeyCode::Right | KeyCode::Char('l') => self.select_next_post(),
                KeyCode::Enter => self.open_selected_post(),
                KeyCode::Char('a') => self.open_blog(),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            },
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => self.go_home(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_blog_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.select_prev_post(),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.select_next_post(),
            KeyCode::Enter => self.open_selected_post(),
            KeyCode::Esc => self.go_home(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_blog_post_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.go_back(),
            KeyCode::Char('d') => self.open_modal(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_article(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_article(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_article(10),
            KeyCode::PageUp => self.scroll_article(-10),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::assets::AssetCatalog;
    use crate::models::LeadStep;

    fn app() -> App {
        App::with_config_and_assets(AppConfig::default(), AssetCatalog::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        s.chars().for_each(|c| app.handle_key(key(KeyCode::Char(c))));
    }

    #[test]
    fn test_ctrl_c_quits_even_with_modal() {
        let mut app = app();
        app.open_modal();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_on_empty_search_stays_home() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.kind(), ViewKind::Home);
    }

    #[test]
    fn test_typing_q_on_search_input_does_not_quit() {
        let mut app = app();
        type_str(&mut app, "quiz");
        assert!(!app.should_quit);
        assert_eq!(app.controller.query(), "quiz");
    }

    #[test]
    fn test_home_post_selection_opens_post() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Posts);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selected_post, 2);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.view().active_post().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_blog_post_back_returns_to_list() {
        let mut app = app();
        app.handle_key(ctrl('r'));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.kind(), ViewKind::BlogPost);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.controller.kind(), ViewKind::BlogList);
        assert_eq!(app.selected_post, 1);
    }

    #[test]
    fn test_modal_captures_typing() {
        let mut app = app();
        app.handle_key(ctrl('g'));
        type_str(&mut app, "qa");
        assert_eq!(app.controller.lead().email, "qa");
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.lead().step, LeadStep::Capture);
        assert!(app.controller.lead().error.is_some());
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.controller.is_modal_open());
    }

    #[test]
    fn test_menu_resources_closes_menu() {
        let mut app = app();
        app.handle_key(ctrl('n'));
        assert!(app.controller.is_menu_open());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.kind(), ViewKind::BlogList);
        assert!(!app.controller.is_menu_open());
    }

    #[test]
    fn test_menu_get_app_keeps_menu_open() {
        let mut app = app();
        app.handle_key(ctrl('n'));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.controller.is_modal_open());
        assert!(app.controller.is_menu_open());
        assert_eq!(app.controller.kind(), ViewKind::Home);
    }

    #[test]
    fn test_article_scroll_clamps() {
        let mut app = app();
        app.open_blog();
        app.open_selected_post();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.article_scroll, 0);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.article_scroll, 2);
        for _ in 0..500 {
            app.handle_key(key(KeyCode::PageDown));
        }
        assert!(app.article_scroll < 500);
        app.handle_key(key(KeyCode::Esc));
        app.open_selected_post();
        assert_eq!(app.article_scroll, 0);
    }

    #[test]
    fn test_paste_into_search_strips_newlines() {
        let mut app = app();
        app.handle_paste("Bio 101\nExam");
        assert_eq!(app.controller.query(), "Bio 101Exam");
        app.open_blog();
        app.handle_paste("ignored");
        assert_eq!(app.controller.query(), "Bio 101Exam");
    }

    #[test]
    fn test_blog_post_cta_opens_modal() {
        let mut app = app();
        app.open_blog();
        app.open_selected_post();
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.controller.is_modal_open());
        assert_eq!(app.controller.kind(), ViewKind::BlogPost);
    }
}
