//! Blog archive, blog cards and the article reader.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{ads, archive, generate_mock_results, sidebar_tips, BlogPost};

use super::ads::{ad_lines, render_ad};
use super::helpers::{grid_cells, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

/// Rows per blog card, borders included
pub const BLOG_CARD_HEIGHT: u16 = 7;

/// Smallest card that still shows its title
pub const MIN_BLOG_CARD_HEIGHT: u16 = 3;

/// Width of the article sidebar
const SIDEBAR_WIDTH: u16 = 32;

pub fn render_blog_card(frame: &mut Frame, area: Rect, post: &BlogPost, selected: bool) {
    let border_color = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", post.category.to_uppercase()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let title_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    };

    // Squeezed cards keep only the title
    if inner.height < 3 {
        frame.render_widget(
            Paragraph::new(Span::styled(truncate_to_width(&post.title, width), title_style)),
            inner,
        );
        return;
    }

    let [title, excerpt, byline] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(truncate_to_width(&post.title, width), title_style)),
        title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(post.excerpt.clone(), Style::default().fg(COLOR_TEXT)))
            .wrap(Wrap { trim: true }),
        excerpt,
    );
    let byline_text = format!("{} · {}", post.author, post.display_date());
    frame.render_widget(
        Paragraph::new(Span::styled(
            truncate_to_width(&byline_text, width),
            Style::default().fg(COLOR_DIM),
        )),
        byline,
    );
}

pub fn render_blog_list(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let [heading, cards, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Knowledge Base",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "How to learn faster, retain more, and panic less.",
                Style::default().fg(COLOR_TEXT),
            )),
        ])
        .alignment(Alignment::Center),
        heading,
    );

    let posts = archive();
    let columns = ctx.card_columns();
    let visible_rows = (cards.height / BLOG_CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected_post / columns as usize;
    // Scroll whole rows so the selection stays on screen
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let skip = first_row * columns as usize;

    let shown = &posts[skip.min(posts.len())..];
    let cells = grid_cells(cards, columns, shown.len(), BLOG_CARD_HEIGHT);
    for (offset, (post, cell)) in shown.iter().zip(cells).enumerate() {
        render_blog_card(frame, cell, post, skip + offset == app.selected_post);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "↑↓ select · Enter read · Esc home",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
        footer,
    );
}

/// Full article text, ads and plan cards included
pub fn article_lines(post: &BlogPost, width: u16) -> Vec<Line<'static>> {
    let heading = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(COLOR_TEXT);

    let mut lines = vec![
        Line::from(Span::styled(
            "‹ BACK TO LIBRARY (Esc)",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("[{}] ", post.author_initials()),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(
                format!("By {} • {}", post.author, post.display_date()),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            format!("[ image: {} ]", post.image),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your brain is not a hard drive. It is a processor. The key to passing this exam \
             isn't reading the textbook for 12 hours. It's structured, active recall.",
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(""),
    ];

    lines.extend(ad_lines(&ads::IN_ARTICLE_TOP, width));
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("1. The Pomodoro Variation", heading)),
        Line::from(Span::styled(
            "Standard Pomodoro is 25/5. For crisis studying, we recommend the \"Flow Block\": \
             50 minutes of deep work, followed by 10 minutes of physical movement.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled("2. Your Custom Plan", heading)),
        Line::from(Span::styled(
            "Based on your deadline, here are the optimized schedules:",
            body,
        )),
        Line::from(""),
    ]);

    for plan in generate_mock_results("Blog Context") {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", plan.kind),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(
                plan.time.clone(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            plan.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(plan.description.clone(), body)));
        lines.push(Line::from(Span::styled(
            "Start This Plan ↗",
            Style::default().fg(COLOR_ACCENT),
        )));
        lines.push(Line::from(""));
    }

    lines.extend(ad_lines(&ads::IN_ARTICLE_MIDDLE, width));
    lines.extend([
        Line::from(""),
        Line::from(Span::styled(
            "Need the Flashcards?",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Download the app to auto-generate flashcards from your notes.",
            body,
        )),
        Line::from(Span::styled(
            " Download App (d) ",
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    lines
}

pub fn render_blog_post(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    post: &BlogPost,
    ctx: &LayoutContext,
) {
    let (article, sidebar) = if ctx.show_sidebar() {
        let [a, s] = Layout::horizontal([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
            .spacing(2)
            .areas(area);
        (a, Some(s))
    } else {
        (area, None)
    };

    frame.render_widget(
        Paragraph::new(article_lines(post, article.width))
            .wrap(Wrap { trim: false })
            .scroll((app.article_scroll, 0)),
        article,
    );

    if let Some(sidebar) = sidebar {
        render_sidebar(frame, sidebar);
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " 🎓 Student Life ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tips = sidebar_tips();
    let [tips_area, ad_area, cta_area] = Layout::vertical([
        Constraint::Length(tips.len() as u16 * 2),
        Constraint::Length(ads::SIDEBAR.preferred_height()),
        Constraint::Length(1),
    ])
    .spacing(1)
    .areas(inner);

    let mut lines = Vec::new();
    for tip in &tips {
        lines.push(Line::from(Span::styled(
            truncate_to_width(tip.title, inner.width as usize),
            Style::default().fg(COLOR_TEXT),
        )));
        lines.push(Line::from(Span::styled(tip.read_time, Style::default().fg(COLOR_DIM))));
    }
    frame.render_widget(Paragraph::new(lines), tips_area);
    render_ad(frame, ad_area, &ads::SIDEBAR);
    frame.render_widget(
        Paragraph::new(Span::styled(
            " Get Study Monk (d) ",
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        cta_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;
    use crate::ui::helpers::lines_to_string;

    #[test]
    fn test_article_contains_post_and_plans() {
        let post = &catalog()[1];
        let text = lines_to_string(&article_lines(post, 80));
        assert!(text.contains("Stop Highlighting: It Doesn't Work"));
        assert!(text.contains("By Study Coach • Dec 03, 2025"));
        assert!(text.contains("The 12-Hour Context Cram"));
        assert!(text.contains("SPONSORED (In-Article Middle)"));
    }
}
