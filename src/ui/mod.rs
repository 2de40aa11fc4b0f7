//! UI rendering for the Study Monk landing page
//!
//! Screen structure, top to bottom:
//! - Promo banner
//! - Navigation bar (collapses into a `☰` menu below 80 columns)
//! - The active view, chosen by a single match on [`View`]
//! - Footer
//! - Sticky footer ad (when there is height for it)
//!
//! The lead-capture modal and the collapsed menu draw over everything.
//! Rendering is a pure function of `&App`.

mod ads;
mod blog;
mod chrome;
pub mod components;
mod helpers;
mod home;
mod layout;
mod modal;
mod results;
pub mod theme;

pub use blog::article_lines;
pub use helpers::{lines_to_string, truncate_to_width};
pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::models::ads::STICKY_FOOTER;
use crate::view_state::View;

use theme::COLOR_BG;

/// Render the whole screen for the current state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    frame.render_widget(Block::default().style(Style::default().bg(COLOR_BG)), area);

    let sticky_height = if ctx.show_sticky_ad() {
        STICKY_FOOTER.preferred_height()
    } else {
        0
    };

    let [banner, nav, main, footer, sticky] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(sticky_height),
    ])
    .areas(area);

    chrome::render_top_banner(frame, banner);
    chrome::render_nav(frame, nav, app, &ctx);

    let main = helpers::inner_rect_horizontal(main, if ctx.is_narrow() { 1 } else { 2 });
    render_view(frame, main, app, &ctx);

    chrome::render_footer(frame, footer);
    if sticky_height > 0 {
        ads::render_ad(frame, sticky, &STICKY_FOOTER);
    }

    if app.controller.is_menu_open() {
        chrome::render_menu(frame, main, app);
    }
    if app.controller.is_modal_open() {
        modal::render_modal(frame, area, app, &ctx);
    }
}

/// Dispatch on the active view
fn render_view(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    match app.view() {
        View::Home => home::render_home(frame, area, app, ctx),
        View::SearchResults {
            query,
            results,
            loading,
        } => results::render_search_results(frame, area, app, query, results, *loading, ctx),
        View::BlogList => blog::render_blog_list(frame, area, app, ctx),
        View::BlogPost { post } => blog::render_blog_post(frame, area, app, post, ctx),
    }
}
