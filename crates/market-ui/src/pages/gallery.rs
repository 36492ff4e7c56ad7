//! Gallery page: image tiles with a lightbox.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use market_data::Catalog;

use crate::components::{centered_rect, fit_width};
use crate::pages::{heading_lines, step_index};
use crate::themes::Theme;

/// Tiles per row.
pub const COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub selected: usize,
    pub lightbox: bool,
}

impl GalleryState {
    pub fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        self.selected = step_index(self.selected, delta, catalog.gallery_images().len());
    }

    pub fn open(&mut self, catalog: &Catalog) {
        self.lightbox = !catalog.gallery_images().is_empty();
    }
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &GalleryState, theme: &Theme) {
    let [head, grid] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(heading_lines(
            "Our Gallery",
            "A visual journey through our premium collections and lifestyle shots.",
            theme,
        )),
        head,
    );

    let images = catalog.gallery_images();
    let rows = images.len().div_ceil(COLUMNS).max(1);
    let row_areas = Layout::vertical(vec![Constraint::Length(5); rows]).split(grid);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS]).split(*row_area);
        for (col_idx, cell) in cols.iter().enumerate() {
            let idx = row_idx * COLUMNS + col_idx;
            let Some(image) = images.get(idx) else {
                continue;
            };
            let selected = idx == state.selected;
            let label = fit_width(&image.src, cell.width.saturating_sub(2) as usize);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(format!("🖼  Gallery {idx}"), theme.row(selected))),
                    Line::from(Span::styled(label, theme.dim)),
                    Line::from(Span::styled("Enter: zoom", theme.dim)),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border_for(selected)),
                ),
                *cell,
            );
        }
    }

    if state.lightbox {
        if let Some(image) = images.get(state.selected) {
            let popup = centered_rect(area.width.saturating_sub(8), 9, area);
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(format!("Gallery {}", state.selected), theme.heading)),
                    Line::from(""),
                    Line::from(Span::styled(image.src.clone(), theme.info)),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border_focus)
                        .title(" Selected ")
                        .title_bottom(Span::styled(" Esc: close  ←/→: browse ", theme.dim)),
                ),
                popup,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_move_selection_wraps() {
        let catalog = Catalog::builtin();
        let mut state = GalleryState::default();
        state.move_selection(-1, catalog);
        assert_eq!(state.selected, 5);
        state.move_selection(COLUMNS as isize, catalog);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_render_lightbox_shows_source() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::dark();
        let mut state = GalleryState::default();
        state.move_selection(1, Catalog::builtin());
        state.open(Catalog::builtin());
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, Catalog::builtin(), &state, &theme);
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("random=21"));
    }
}
