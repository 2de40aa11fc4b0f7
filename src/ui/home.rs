//! Home screen: hero, search box, banner ad and the latest posts.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::models::{ads, catalog};

use super::ads::render_ad;
use super::blog::{render_blog_card, BLOG_CARD_HEIGHT, MIN_BLOG_CARD_HEIGHT};
use super::helpers::{fit_cell_height, grid_cells};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS, COLOR_TEXT};

const SEARCH_PLACEHOLDER: &str = "e.g. Bio 101 Exam in 12 hours...";

fn hero_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                "ZEN MODE ACTIVE • NO DISTRACTIONS",
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Turn Panic into ",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Deep Focus.",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "Don't cram. Strategize. Tell us your subject and deadline. We generate a ",
                Style::default().fg(COLOR_TEXT),
            ),
            Span::styled("Crisis Study Plan", Style::default().fg(COLOR_ACCENT)),
            Span::styled(" in seconds.", Style::default().fg(COLOR_TEXT)),
        ]),
    ]
}

pub fn render_home(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let [hero, search, image, rest] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let posts = catalog();
    let columns = ctx.card_columns();
    let rows = posts.len().div_ceil(columns as usize) as u16;
    let full_cards = rows.saturating_mul(BLOG_CARD_HEIGHT) + 1;

    // The hero ad gives way before the post cards are squeezed
    let ad_height = ads::HOME_HERO.preferred_height();
    let ad_height = if rest.height >= full_cards + ad_height {
        ad_height
    } else {
        0
    };

    let [ad, heading, cards] = Layout::vertical([
        Constraint::Length(ad_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(rest);

    frame.render_widget(
        Paragraph::new(hero_lines())
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        hero,
    );

    render_search_box(frame, search, app);
    render_hero_image(frame, image, app);
    if ad_height > 0 {
        render_ad(frame, ad, &ads::HOME_HERO);
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "STUDY HACKS",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   view archive: a", Style::default().fg(COLOR_DIM)),
        ])),
        heading,
    );

    let card_height = fit_cell_height(cards.height, rows, BLOG_CARD_HEIGHT, MIN_BLOG_CARD_HEIGHT);
    let cells = grid_cells(cards, columns, posts.len(), card_height);
    for (i, (post, cell)) in posts.iter().zip(cells).enumerate() {
        let selected = app.focus == Focus::Posts && i == app.selected_post;
        render_blog_card(frame, cell, post, selected);
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::SearchInput;
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title_bottom(
            Line::from(Span::styled(
                " Enter: Focus ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query = app.controller.query();
    let text = if query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(query.to_string(), Style::default().fg(COLOR_HEADER))
    };
    let prefix = Span::styled("📖 ", Style::default().fg(COLOR_DIM));

    // Keep the tail of long queries visible. Pasted text can be arbitrarily
    // wide, so widths stay in usize until clamped for the u16 scroll offset.
    let prefix_width = prefix.content.width();
    let query_width = query.width();
    let available = (inner.width as usize).saturating_sub(prefix_width + 1);
    let scroll = query_width
        .saturating_sub(available)
        .min(u16::MAX as usize) as u16;

    frame.render_widget(
        Paragraph::new(Line::from(vec![prefix, text])).scroll((0, scroll)),
        inner,
    );

    let modal_open = app.controller.is_modal_open() || app.controller.is_menu_open();
    if focused && !modal_open && inner.height > 0 {
        let offset = prefix_width
            .saturating_add(query_width)
            .saturating_sub(scroll as usize)
            .min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(inner.x.saturating_add(offset), inner.y));
    }
}

fn render_hero_image(frame: &mut Frame, area: Rect, app: &App) {
    let caption = match &app.assets.hero {
        Some(hero) => format!("[ Study Desk · {} ]", hero.caption()),
        None => "[ Study Desk ]".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(caption, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        area,
    );
}
