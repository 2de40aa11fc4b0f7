//! Page chrome: promo banner, navigation bar, collapsed menu and footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, MenuItem};
use crate::models::ads::TOP_BANNER;

use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BG, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_TEXT,
};

pub fn render_top_banner(frame: &mut Frame, area: Rect) {
    let para = Paragraph::new(Line::from(Span::styled(
        TOP_BANNER,
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(COLOR_DIALOG_BG));
    frame.render_widget(para, area);
}

/// "Study Monk" wordmark with the logo caption when the asset exists
fn logo_spans(app: &App) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(
            "Study",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Monk",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  FOCUS ENGINE", Style::default().fg(COLOR_DIM)),
    ];
    if let Some(logo) = &app.assets.logo {
        spans.insert(
            0,
            Span::styled(format!("[{}] ", logo.caption()), Style::default().fg(COLOR_DIM)),
        );
    }
    spans
}

pub fn render_nav(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(Line::from(logo_spans(app))), inner);

    let right = if ctx.is_narrow() {
        let icon = if app.controller.is_menu_open() { "✕" } else { "☰" };
        Line::from(vec![
            Span::styled(icon, Style::default().fg(COLOR_HEADER)),
            Span::styled(" ^N", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        let resources_style = if app.view().is_blog() {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        Line::from(vec![
            Span::styled("RESOURCES", resources_style),
            Span::styled(" ^R   ", Style::default().fg(COLOR_DIM)),
            Span::styled("MUSIC   ", Style::default().fg(COLOR_TEXT)),
            Span::styled(
                " Get App ",
                Style::default()
                    .fg(COLOR_BG)
                    .bg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ^G", Style::default().fg(COLOR_DIM)),
        ])
    };
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), inner);
}

/// Dropdown under the nav bar
pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let height = (MenuItem::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect { height, ..area };
    frame.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.menu_index {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_TEXT)
            };
            let marker = if i == app.menu_index { "› " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, item.label().to_uppercase()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .style(Style::default().bg(COLOR_DIALOG_BG)),
    );
    frame.render_widget(list, menu_area);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("© 2025 Study Monk AI. ", Style::default().fg(COLOR_DIM)),
        Span::styled("Focus Systems Active. ", Style::default().fg(COLOR_DIM)),
        Span::styled("Turn off your phone.", Style::default().fg(COLOR_TEXT)),
        Span::styled("   ^L home  ^C quit", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
