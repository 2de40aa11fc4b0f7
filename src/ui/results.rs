//! Search results screen: loading spinner, then the three plan cards.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{ads, PlanKind, SearchResult};

use super::ads::render_ad;
use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::{fit_cell_height, grid_cells};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CRISIS, COLOR_DEEP_DIVE, COLOR_DIM, COLOR_HEADER,
    COLOR_MINIMALIST, COLOR_TEXT,
};

const HEADING_HEIGHT: u16 = 3;
const PLAN_CARD_HEIGHT: u16 = 12;
/// Badge border, title, bottom border
const MIN_PLAN_CARD_HEIGHT: u16 = 3;

pub fn badge_color(kind: PlanKind) -> Color {
    match kind {
        PlanKind::CrisisMode => COLOR_CRISIS,
        PlanKind::DeepDive => COLOR_DEEP_DIVE,
        PlanKind::Minimalist => COLOR_MINIMALIST,
    }
}

pub fn render_search_results(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    query: &str,
    results: &[SearchResult],
    loading: bool,
    ctx: &LayoutContext,
) {
    if loading {
        render_loading(frame, area, app);
        return;
    }

    let columns = ctx.plan_columns();
    let rows = results.len().div_ceil(columns as usize) as u16;
    let full_cards = rows.saturating_mul(PLAN_CARD_HEIGHT);

    // The ad gives way before the plans are squeezed
    let ad_height = ads::SEARCH_RESULTS_BOTTOM.preferred_height();
    let ad_height = if area.height.saturating_sub(HEADING_HEIGHT) >= full_cards + ad_height {
        ad_height
    } else {
        0
    };

    let [heading, cards, ad] = Layout::vertical([
        Constraint::Length(HEADING_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(ad_height),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "SCHEDULE OPTIMIZED",
                Style::default().fg(COLOR_ACCENT),
            )),
            Line::from(Span::styled(
                format!("Target: \"{}\"", query),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "New Subject: n / Esc",
                Style::default().fg(COLOR_DIM),
            )),
        ]),
        heading,
    );

    let card_height = fit_cell_height(cards.height, rows, PLAN_CARD_HEIGHT, MIN_PLAN_CARD_HEIGHT);
    let cells = grid_cells(cards, columns, results.len(), card_height);
    for (result, cell) in results.iter().zip(cells) {
        render_plan_card(frame, cell, result);
    }

    if ad_height > 0 {
        render_ad(frame, ad, &ads::SEARCH_RESULTS_BOTTOM);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let indicator = StatusIndicatorType::spinner("Building Crisis Plan...", app.tick_count)
        .with_detail("Filtering High-Yield Concepts");
    let lines = render_status_indicator(&indicator);
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let [_, center] =
        Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
}

fn render_plan_card(frame: &mut Frame, area: Rect, result: &SearchResult) {
    let color = badge_color(result.kind);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", result.kind),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title(
            Line::from(Span::styled(
                format!(" Score: {} ", result.score),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );

    let lines = vec![
        Line::from(Span::styled(
            result.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.description.clone(),
            Style::default().fg(COLOR_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("⏱ TIME REQUIRED", Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(
            result.time.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(
            result
                .tools
                .iter()
                .flat_map(|t| {
                    [
                        Span::styled(format!("[{}]", t), Style::default().fg(COLOR_TEXT)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
        Line::from(Span::styled(
            "Start Timer",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
