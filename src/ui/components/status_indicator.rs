//! Status Indicator Component
//!
//! Spinner, success and error lines used by the loading screen and the
//! lead-capture modal.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame at the 16ms event-loop tick
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    Spinner {
        message: String,
        /// Optional second line, e.g. "Filtering High-Yield Concepts"
        detail: Option<String>,
        tick: u64,
    },
    Success { message: String },
    Error { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            detail: None,
            tick,
        }
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        match self {
            Self::Spinner { message, tick, .. } => Self::Spinner {
                message,
                detail: Some(detail.into()),
                tick,
            },
            other => other,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Spinner glyph for an animation tick
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner {
            message,
            detail,
            tick,
        } => {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{} ", get_spinner_char(*tick)),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];
            if let Some(detail) = detail {
                lines.push(Line::from(Span::styled(
                    detail.to_uppercase(),
                    Style::default().fg(COLOR_DIM),
                )));
            }
            lines
        }
        StatusIndicatorType::Success { message } => vec![Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],
        StatusIndicatorType::Error { message } => vec![Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ])],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(TICKS_PER_FRAME), '◓');
        assert_eq!(get_spinner_char(TICKS_PER_FRAME * 4), '◐');
    }

    #[test]
    fn test_spinner_with_detail() {
        let ind = StatusIndicatorType::spinner("Building Crisis Plan...", 0)
            .with_detail("Filtering High-Yield Concepts");
        let out = text(&render_status_indicator(&ind));
        assert!(out.contains("Building Crisis Plan..."));
        assert!(out.contains("FILTERING HIGH-YIELD CONCEPTS"));
    }

    #[test]
    fn test_with_detail_ignored_on_success() {
        let ind = StatusIndicatorType::success("Done").with_detail("x");
        assert_eq!(ind, StatusIndicatorType::success("Done"));
    }

    #[test]
    fn test_error_line() {
        let out = text(&render_status_indicator(&StatusIndicatorType::error("bad")));
        assert_eq!(out, "\u{2717} bad");
    }
}
