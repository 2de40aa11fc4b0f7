//! "Get the Cheat Sheet" lead-capture modal.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::LeadStep;

use super::components::{
    get_spinner_char, render_dialog_frame, render_status_indicator, DialogFrameConfig,
    StatusIndicatorType,
};
use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

const EMAIL_PLACEHOLDER: &str = "student@university.edu";
const MODAL_HEIGHT: u16 = 13;

pub fn render_modal(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let config = DialogFrameConfig::new("Get the Cheat Sheet 📝", MODAL_HEIGHT)
        .min_width(40)
        .max_width(64);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    let lead = app.controller.lead();

    let mut lines = vec![
        Line::from(Span::styled(
            "Unlock the printable summary and flashcards.",
            Style::default().fg(COLOR_TEXT),
        )),
        Line::from(""),
    ];

    match lead.step {
        LeadStep::Capture | LeadStep::Sending => {
            lines.push(Line::from(Span::styled(
                "STUDENT EMAIL",
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
            )));
            let field = if lead.email.is_empty() {
                Span::styled(EMAIL_PLACEHOLDER, Style::default().fg(COLOR_DIM))
            } else {
                Span::styled(
                    truncate_to_width(&lead.email, inner.width.saturating_sub(4) as usize),
                    Style::default().fg(COLOR_HEADER),
                )
            };
            lines.push(Line::from(vec![Span::raw("> "), field]));
            lines.push(Line::from(""));

            if lead.step == LeadStep::Sending {
                lines.push(Line::from(Span::styled(
                    format!("{} Sending...", get_spinner_char(app.tick_count)),
                    Style::default().fg(COLOR_ACCENT),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    " Download Notes → (Enter) ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            if let Some(error) = &lead.error {
                lines.extend(render_status_indicator(&StatusIndicatorType::error(
                    error.clone(),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Join 2 Million+ Students",
                Style::default().fg(COLOR_DIM),
            )));
        }
        LeadStep::Download => {
            lines.extend(render_status_indicator(&StatusIndicatorType::success(
                "Study Mode: ON. 🧠",
            )));
            lines.push(Line::from(vec![
                Span::styled("Notes sent to ", Style::default().fg(COLOR_TEXT)),
                Span::styled(
                    lead.email.clone(),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                ),
                Span::styled(".", Style::default().fg(COLOR_TEXT)),
            ]));
            lines.push(Line::from(Span::styled(
                "Download the app for Pomodoro timer:",
                Style::default().fg(COLOR_TEXT),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Download on the App Store ",
                Style::default().fg(Color::White).bg(Color::Black),
            )));
            lines.push(Line::from(Span::styled(
                " Get it on Google Play ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );

    if lead.step == LeadStep::Capture && inner.height > 3 {
        // "> " plus the typed email, centered on row 3
        let typed = if lead.email.is_empty() {
            0
        } else {
            lead.email.width().min(inner.width.saturating_sub(4) as usize)
        };
        let line_width = 2 + if lead.email.is_empty() {
            EMAIL_PLACEHOLDER.width()
        } else {
            typed
        };
        let left = inner.width.saturating_sub(line_width as u16) / 2;
        let x = (inner.x + left + 2 + typed as u16).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y + 3));
    }
}
