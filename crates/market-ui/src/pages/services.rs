//! Services page.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use market_data::Catalog;

use crate::pages::heading_lines;
use crate::themes::Theme;

/// Always listed after the catalog's services.
const HOUSE_SERVICES: [(&str, &str, &str); 2] = [
    (
        "Globe",
        "Global Shipping",
        "We ship to over 100 countries worldwide with tracked delivery.",
    ),
    (
        "Award",
        "Quality Guarantee",
        "Every item is authenticated and quality checked before shipping.",
    ),
];

/// Terminal glyph for a service icon name.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "Truck" => "🚚",
        "Headphones" => "🎧",
        "ShieldCheck" => "🛡",
        "RefreshCw" => "🔄",
        "Globe" => "🌐",
        "CreditCard" => "💳",
        "Award" => "🏆",
        _ => "📦",
    }
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
    let [head, grid] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(heading_lines(
            "Our Premium Services",
            "We go beyond just selling products. We provide a complete luxury experience.",
            theme,
        )),
        head,
    );

    let mut entries: Vec<(&str, &str, &str)> = catalog
        .services()
        .iter()
        .map(|s| (s.icon.as_str(), s.title.as_str(), s.description.as_str()))
        .collect();
    for (icon, title, description) in HOUSE_SERVICES {
        entries.push((icon, title, description));
    }

    let rows = entries.len().div_ceil(2);
    let row_areas = Layout::vertical(vec![Constraint::Length(5); rows]).split(grid);
    for (i, (icon, title, description)) in entries.iter().enumerate() {
        let Some(row) = row_areas.get(i / 2) else {
            break;
        };
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(*row);
        let cell = if i % 2 == 0 { left } else { right };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::raw(icon_glyph(icon)),
                    Span::raw(" "),
                    Span::styled(*title, theme.bold),
                ]),
                Line::from(Span::styled(*description, theme.dim)),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(theme.border)),
            cell,
        );
    }
}
