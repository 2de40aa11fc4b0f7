//! Dialog Frame Component
//!
//! A centered, background-clearing frame with rounded borders.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Width for the dialog: most of a narrow terminal, half of a wide one
fn dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig) -> u16 {
    let margin = ctx.width.saturating_sub(4);
    if ctx.is_narrow() {
        margin.min(config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width).min(margin)
    }
}

/// Clear a centered box, draw its border and return the inner area
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let width = dialog_width(ctx, config);
    let height = (config.content_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(" Esc close ", Style::default().fg(COLOR_ACCENT)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_config_builder() {
        let config = DialogFrameConfig::new("Get App", 10).min_width(40).max_width(70);
        assert_eq!(config.content_height, 10);
        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
    }

    #[test]
    fn test_width_on_narrow_terminal_leaves_margin() {
        let ctx = LayoutContext::new(40, 20);
        assert_eq!(dialog_width(&ctx, &DialogFrameConfig::new("x", 5)), 36);
    }

    #[test]
    fn test_width_on_wide_terminal_is_half() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(dialog_width(&ctx, &DialogFrameConfig::new("x", 5)), 50);
    }

    #[test]
    fn test_inner_area_is_inside_borders() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::new(100, 40);
                inner = render_dialog_frame(f, f.area(), &ctx, &DialogFrameConfig::new("T", 10));
            })
            .unwrap();
        assert_eq!(inner.height, 10);
        assert_eq!(inner.width, 48);
        assert_eq!(inner.x, 26);
    }
}
