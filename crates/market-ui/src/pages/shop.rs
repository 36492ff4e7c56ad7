//! Shop page: searchable, category-filtered product list with quick view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use market_core::filter::ShopFilter;
use market_core::formatting::format_rating;
use market_core::models::Product;
use market_data::Catalog;

use crate::components::{centered_rect, fit_width, pad_to_width};
use crate::pages::{heading_lines, render_empty, step_index};
use crate::themes::Theme;

const QUICK_VIEW_FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
     Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

#[derive(Debug, Clone, Default)]
pub struct ShopState {
    pub filter: ShopFilter,
    /// Index into the filtered list.
    pub selected: usize,
    /// Keystrokes go to the search box.
    pub searching: bool,
    /// Product id shown in the quick-view overlay.
    pub quick_view: Option<u32>,
}

impl ShopState {
    /// Products matching the current filter, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.filter.apply(catalog.products())
    }

    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.visible(catalog).get(self.selected).copied()
    }

    pub fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        let len = self.visible(catalog).len();
        self.selected = step_index(self.selected, delta, len);
    }

    pub fn push_query(&mut self, ch: char) {
        self.filter.query.push(ch);
        self.selected = 0;
    }

    pub fn pop_query(&mut self) {
        self.filter.query.pop();
        self.selected = 0;
    }

    pub fn cycle_category(&mut self, catalog: &Catalog) {
        self.filter.cycle_category(&catalog.categories());
        self.selected = 0;
    }

    /// Open the quick view for the selected product.
    pub fn open_quick_view(&mut self, catalog: &Catalog) {
        self.quick_view = self.selected_product(catalog).map(|p| p.id);
    }
}

/// One product as a single list row: title, rating, price.
pub(crate) fn product_row<'a>(
    product: &Product,
    selected: bool,
    width: usize,
    theme: &Theme,
) -> Line<'a> {
    let marker = if selected { "▸ " } else { "  " };
    let price = product.price.to_string();
    let rating = format_rating(product.rating);
    // marker + rating + price + spacing
    let fixed = 2 + rating.chars().count() + price.len() + 4;
    let title_width = width.saturating_sub(fixed).max(8);
    let row_style = theme.row(selected);

    Line::from(vec![
        Span::styled(marker, row_style),
        Span::styled(pad_to_width(&product.title, title_width), row_style),
        Span::raw("  "),
        Span::styled(rating, theme.rating),
        Span::raw("  "),
        Span::styled(price, theme.price),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &ShopState, theme: &Theme) {
    let [head, controls, list] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(heading_lines("Shop All Products", "Find exactly what you need", theme)),
        head,
    );

    render_controls(frame, controls, catalog, state, theme);

    let visible = state.visible(catalog);
    if visible.is_empty() {
        render_empty(
            frame,
            list,
            "No products found",
            "Try adjusting your search or filters.",
            theme,
        );
    } else {
        let width = list.width as usize;
        let mut lines = Vec::with_capacity(visible.len() * 2);
        for (i, product) in visible.iter().enumerate() {
            let selected = i == state.selected;
            lines.push(product_row(product, selected, width, theme));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(product.category.clone(), theme.category),
                Span::styled(" · ", theme.dim),
                Span::styled(
                    fit_width(&product.description, width.saturating_sub(8 + product.category.len())),
                    theme.dim,
                ),
            ]));
        }
        // Keep the selection on screen.
        let row_height = 2u16;
        let selected_bottom = (state.selected as u16 + 1) * row_height;
        let scroll = selected_bottom.saturating_sub(list.height);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list);
    }

    if let Some(product) = state.quick_view.and_then(|id| catalog.product(id)) {
        render_quick_view(frame, area, product, theme);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &ShopState, theme: &Theme) {
    let [search, categories] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    let query = if state.filter.query.is_empty() && !state.searching {
        Span::styled("Search products...", theme.placeholder)
    } else {
        let cursor = if state.searching { "▏" } else { "" };
        Span::styled(format!("{}{cursor}", state.filter.query), theme.input)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled("/ ", theme.dim), query])).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_for(state.searching)),
        ),
        search,
    );

    let mut spans = Vec::new();
    for cat in catalog.categories() {
        let style = if cat == state.filter.category {
            theme.button
        } else {
            theme.nav
        };
        spans.push(Span::styled(format!(" {cat} "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(Span::styled(" Tab: category ", theme.dim)),
        ),
        categories,
    );
}

fn render_quick_view(frame: &mut Frame, area: Rect, product: &Product, theme: &Theme) {
    let popup = centered_rect(64, 16, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(product.category.to_uppercase(), theme.category)),
        Line::from(Span::styled(product.title.clone(), theme.heading)),
        Line::from(vec![
            Span::styled(format_rating(product.rating), theme.rating),
            Span::styled(format!(" ({:.1} / 5.0)", product.rating), theme.dim),
        ]),
        Line::from(""),
        Line::from(Span::styled(product.description.clone(), theme.text)),
        Line::from(""),
        Line::from(Span::styled(QUICK_VIEW_FILLER, theme.dim)),
        Line::from(""),
        Line::from(vec![
            Span::styled(product.price.to_string(), theme.price),
            Span::raw("   "),
            Span::styled(" a: Add to Cart ", theme.button),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focus)
                .title(" Quick View ")
                .title_bottom(Span::styled(" Esc: close ", theme.dim)),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_typing_resets_selection() {
        let catalog = Catalog::builtin();
        let mut state = ShopState::default();
        state.move_selection(3, catalog);
        assert_eq!(state.selected, 3);
        state.push_query('s');
        assert_eq!(state.selected, 0);
        assert_eq!(state.filter.query, "s");
        state.pop_query();
        assert!(state.filter.query.is_empty());
    }

    #[test]
    fn test_selection_wraps_within_filtered_list() {
        let catalog = Catalog::builtin();
        let mut state = ShopState::default();
        for ch in "smart".chars() {
            state.push_query(ch);
        }
        // Minimalist Smart Watch, Smart Home Hub
        assert_eq!(state.visible(catalog).len(), 2);
        state.move_selection(1, catalog);
        state.move_selection(1, catalog);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_product(catalog).map(|p| p.id), Some(2));
    }

    #[test]
    fn test_cycle_category_filters_list() {
        let catalog = Catalog::builtin();
        let mut state = ShopState::default();
        state.cycle_category(catalog);
        assert_eq!(state.filter.category, "Electronics");
        assert!(state
            .visible(catalog)
            .iter()
            .all(|p| p.category == "Electronics"));
    }

    #[test]
    fn test_quick_view_targets_selected_product() {
        let catalog = Catalog::builtin();
        let mut state = ShopState::default();
        state.move_selection(2, catalog);
        state.open_quick_view(catalog);
        assert_eq!(state.quick_view, Some(3));
    }

    #[test]
    fn test_product_row_contains_price_and_title() {
        let theme = Theme::dark();
        let product = &Catalog::builtin().products()[0];
        let line = product_row(product, true, 80, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Premium Wireless Headphones"));
        assert!(text.contains("$299.99"));
        assert!(text.starts_with("▸ "));
    }

    #[test]
    fn test_render_shop_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::dark();
        let mut state = ShopState::default();
        state.open_quick_view(Catalog::builtin());
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, Catalog::builtin(), &state, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_shop_empty_result() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::light();
        let mut state = ShopState::default();
        for ch in "zzz".chars() {
            state.push_query(ch);
        }
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, Catalog::builtin(), &state, &theme);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("No products found"));
    }
}
