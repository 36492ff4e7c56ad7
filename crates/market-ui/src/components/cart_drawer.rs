//! Cart drawer docked at the right edge of the screen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use market_core::cart::Cart;
use market_core::formatting::format_item_count;
use market_core::models::{CartLine, Money};

use crate::components::pad_to_width;
use crate::pages::step_index;
use crate::themes::Theme;

/// Drawer width in columns, before clamping to the screen.
pub const DRAWER_WIDTH: u16 = 46;

#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    /// Index of the highlighted cart line.
    pub selected: usize,
}

impl DrawerState {
    pub fn move_selection(&mut self, delta: isize, cart: &Cart) {
        self.selected = step_index(self.selected, delta, cart.len());
    }

    /// Keep the highlight on an existing line after removals.
    pub fn clamp(&mut self, cart: &Cart) {
        self.selected = self.selected.min(cart.len().saturating_sub(1));
    }

    pub fn selected_line<'a>(&self, cart: &'a Cart) -> Option<&'a CartLine> {
        cart.lines().get(self.selected)
    }
}

/// Screen region occupied by the drawer.
pub fn drawer_area(area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

fn line_rows<'a>(line: &CartLine, selected: bool, width: usize, theme: &Theme) -> [Line<'a>; 2] {
    let subtotal = line.subtotal().to_string();
    let title_width = width.saturating_sub(subtotal.len() + 3);
    let marker = if selected { "▸ " } else { "  " };
    [
        Line::from(vec![
            Span::styled(marker, theme.row(selected)),
            Span::styled(pad_to_width(&line.title, title_width), theme.row(selected)),
            Span::raw(" "),
            Span::styled(subtotal, theme.value),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", line.category), theme.dim),
            Span::styled("[-] ", theme.dim),
            Span::styled(line.quantity.to_string(), theme.bold),
            Span::styled(" [+]", theme.dim),
            Span::styled(format!("  × {}", line.price), theme.dim),
        ]),
    ]
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    cart: &Cart,
    total: Money,
    state: &DrawerState,
    theme: &Theme,
) {
    let drawer = drawer_area(area);
    frame.render_widget(Clear, drawer);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focus)
        .title(Span::styled(" Shopping Cart ", theme.heading))
        .title_bottom(Span::styled(" Esc: close ", theme.dim));
    let inner = block.inner(drawer);
    frame.render_widget(block, drawer);

    if cart.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("🗑", theme.dim)),
                Line::from(Span::styled("Your cart is empty.", theme.dim)),
                Line::from(""),
                Line::from(Span::styled("Continue Shopping (Esc)", theme.info)),
            ])
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [list, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).areas(inner);

    let width = list.width as usize;
    let mut lines = Vec::with_capacity(cart.len() * 3);
    for (i, line) in cart.lines().iter().enumerate() {
        lines.extend(line_rows(line, i == state.selected, width, theme));
        lines.push(Line::from(""));
    }
    let selected_bottom = (state.selected as u16 + 1) * 3;
    let scroll = selected_bottom.saturating_sub(list.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list);

    let total_str = total.to_string();
    let label = format!("Subtotal ({})", format_item_count(cart.item_count()));
    let gap = width.saturating_sub(label.len() + total_str.len());
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("─".repeat(width), theme.separator)),
            Line::from(vec![
                Span::styled(label, theme.bold),
                Span::raw(" ".repeat(gap)),
                Span::styled(total_str, theme.price),
            ]),
            Line::from(Span::styled("Shipping and taxes calculated at checkout.", theme.dim)),
            Line::from(""),
            Line::from(Span::styled(" x: Checkout ", theme.button)),
            Line::from(Span::styled("+/-: quantity  d: remove", theme.dim)),
        ]),
        footer,
    );
}
