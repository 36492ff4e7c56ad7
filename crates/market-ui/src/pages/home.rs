//! Home page: hero banner, featured products and store perks.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use market_core::models::Product;
use market_data::Catalog;

use crate::pages::shop::product_row;
use crate::pages::step_index;
use crate::themes::Theme;

const PERKS: [(&str, &str); 3] = [
    ("Free Shipping", "On all orders over $50. Global delivery available."),
    ("Secure Payment", "100% secure payment processing with top-tier encryption."),
    ("24/7 Support", "Our dedicated team is here to help you anytime."),
];

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// Index into the featured products.
    pub selected: usize,
}

impl HomeState {
    pub fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        self.selected = step_index(self.selected, delta, catalog.featured_products().len());
    }

    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        catalog.featured_products().get(self.selected)
    }
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &HomeState, theme: &Theme) {
    let [hero, featured, perks] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(6),
        Constraint::Length(5),
    ])
    .areas(area);

    let hero_text = vec![
        Line::from(Span::styled("New Collection 2024", theme.category)),
        Line::from(vec![
            Span::styled("Discover Luxury ", theme.brand),
            Span::styled("Redefined", theme.brand_accent),
        ]),
        Line::from(Span::styled(
            "Shop the latest trends in electronics, fashion, and home decor. \
             Curated for the modern lifestyle.",
            theme.text,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" 2: Shop Now ", theme.button),
            Span::raw("  "),
            Span::styled(" 3: View Gallery ", theme.nav),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(hero_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM).border_style(theme.separator)),
        hero,
    );

    let width = featured.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled("Featured Products", theme.heading)),
        Line::from(Span::styled("Hand-picked selection just for you", theme.dim)),
        Line::from(""),
    ];
    for (i, product) in catalog.featured_products().iter().enumerate() {
        lines.push(product_row(product, i == state.selected, width, theme));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("View All Products → press 2", theme.info)));
    frame.render_widget(Paragraph::new(lines), featured);

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(perks);
    for ((title, body), column) in PERKS.iter().zip(columns.iter()) {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(*title, theme.bold)),
                Line::from(Span::styled(*body, theme.dim)),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(theme.border)),
            *column,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_selection_stays_within_featured() {
        let catalog = Catalog::builtin();
        let mut state = HomeState::default();
        state.move_selection(-1, catalog);
        assert_eq!(state.selected, 3);
        assert_eq!(state.selected_product(catalog).map(|p| p.id), Some(4));
        state.move_selection(1, catalog);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_render_home_shows_featured_titles() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::dark();
        let state = HomeState::default();
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
        assert!(content.contains("Featured Products"));
        assert!(content.contains("Ergonomic Office Chair"));
        assert!(!content.contains("Mechanical Keyboard"));
    }
}
