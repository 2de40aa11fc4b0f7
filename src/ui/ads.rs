//! Ad placeholder rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{AdFormat, AdUnit};

use super::theme::{COLOR_ACCENT, COLOR_AD_BORDER, COLOR_DIM, COLOR_TEXT};

const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

/// Draw a dashed placeholder box for an ad slot
pub fn render_ad(frame: &mut Frame, area: Rect, ad: &AdUnit) {
    if area.height < 3 || area.width < 4 {
        return;
    }

    let headline_style = match ad.format {
        AdFormat::Sticky => Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        _ => Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(DASHED)
        .border_style(Style::default().fg(COLOR_AD_BORDER));

    let lines = vec![
        Line::from(Span::styled(ad.headline(), headline_style)),
        Line::from(Span::styled(ad.caption(), Style::default().fg(COLOR_DIM))),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(para, area);
}

/// Ad slot as three text lines, for embedding in scrolling text
pub fn ad_lines(ad: &AdUnit, width: u16) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2) as usize;
    let border = Style::default().fg(COLOR_AD_BORDER);
    let center = |text: String, style: Style| {
        let text = super::helpers::truncate_to_width(&text, inner);
        let pad = inner.saturating_sub(unicode_width::UnicodeWidthStr::width(text.as_str()));
        let left = pad / 2;
        Line::from(vec![
            Span::styled(DASHED.vertical_left, border),
            Span::raw(" ".repeat(left)),
            Span::styled(text, style),
            Span::raw(" ".repeat(pad - left)),
            Span::styled(DASHED.vertical_right, border),
        ])
    };
    vec![
        Line::from(Span::styled(
            format!(
                "{}{}{}",
                DASHED.top_left,
                DASHED.horizontal_top.repeat(inner),
                DASHED.top_right
            ),
            border,
        )),
        center(
            format!("{} · {}", ad.headline(), ad.caption()),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(Span::styled(
            format!(
                "{}{}{}",
                DASHED.bottom_left,
                DASHED.horizontal_bottom.repeat(inner),
                DASHED.bottom_right
            ),
            border,
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ads::{IN_ARTICLE_TOP, STICKY_FOOTER};
    use crate::ui::helpers::lines_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_ad_lines_have_requested_width() {
        let lines = ad_lines(&IN_ARTICLE_TOP, 60);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.width(), 60);
        }
        assert!(lines_to_string(&lines).contains("SPONSORED (In-Article Top)"));
    }

    #[test]
    fn test_ad_lines_truncate_when_narrow() {
        let lines = ad_lines(&IN_ARTICLE_TOP, 20);
        assert_eq!(lines[1].width(), 20);
    }

    #[test]
    fn test_render_sticky_ad() {
        let mut terminal = Terminal::new(TestBackend::new(80, 4)).unwrap();
        terminal
            .draw(|f| render_ad(f, f.area(), &STICKY_FOOTER))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("CHEGG STUDY"));
        assert!(text.contains("┄"));
    }

    #[test]
    fn test_render_ad_skips_tiny_area() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        terminal
            .draw(|f| render_ad(f, f.area(), &STICKY_FOOTER))
            .unwrap();
        assert!(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .all(|c| c.symbol() == " "));
    }
}
