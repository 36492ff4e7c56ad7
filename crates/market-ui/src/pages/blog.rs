//! Blog page: post list with an article reader.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use market_core::formatting::format_post_date;
use market_core::models::BlogPost;
use market_data::Catalog;

use crate::components::centered_rect;
use crate::pages::{heading_lines, render_empty, step_index};
use crate::themes::Theme;

const READER_FILLER: [&str; 2] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt \
     ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation \
     ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat \
     nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia \
     deserunt mollit anim id est laborum.",
];

#[derive(Debug, Clone, Default)]
pub struct BlogState {
    pub selected: usize,
    /// Index of the post open in the reader.
    pub reading: Option<usize>,
}

impl BlogState {
    pub fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        self.selected = step_index(self.selected, delta, catalog.blog_posts().len());
    }

    pub fn open(&mut self, catalog: &Catalog) {
        if self.selected < catalog.blog_posts().len() {
            self.reading = Some(self.selected);
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &BlogState, theme: &Theme) {
    let [head, list] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(heading_lines(
            "Latest Insights",
            "News, trends, and stories from the world of luxury and design.",
            theme,
        )),
        head,
    );

    let posts = catalog.blog_posts();
    if posts.is_empty() {
        render_empty(frame, list, "No posts yet", "Check back soon.", theme);
        return;
    }

    let mut lines = Vec::new();
    for (i, post) in posts.iter().enumerate() {
        let selected = i == state.selected;
        lines.push(Line::from(vec![
            Span::styled(if selected { "▸ " } else { "  " }, theme.row(selected)),
            Span::styled(post.title.clone(), theme.row(selected)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("📅 {}", format_post_date(post.date)), theme.dim),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(post.excerpt.clone(), theme.text),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("Read More →", theme.info),
        ]));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), list);

    if let Some(post) = state.reading.and_then(|i| posts.get(i)) {
        render_reader(frame, area, post, theme);
    }
}

fn render_reader(frame: &mut Frame, area: Rect, post: &BlogPost, theme: &Theme) {
    let popup = centered_rect(area.width.saturating_sub(6), area.height.saturating_sub(2), area);
    frame.render_widget(Clear, popup);

    let mut text = vec![
        Line::from(Span::styled(post.title.clone(), theme.heading)),
        Line::from(Span::styled(format_post_date(post.date), theme.dim)),
        Line::from(""),
        Line::from(Span::styled(post.content.clone(), theme.text)),
    ];
    for paragraph in READER_FILLER {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(paragraph, theme.dim)));
    }

    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focus)
                .title_bottom(Span::styled(" Esc: back ", theme.dim)),
        ),
        popup,
    );
}
