//! Pricing page: membership plan cards.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use market_core::models::PricingPlan;
use market_data::Catalog;

use crate::pages::{heading_lines, step_index};
use crate::themes::Theme;

#[derive(Debug, Clone, Default)]
pub struct PricingState {
    pub selected: usize,
}

impl PricingState {
    pub fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        self.selected = step_index(self.selected, delta, catalog.pricing_plans().len());
    }
}

/// `"/mo"` suffix is shown for every plan that is not free.
fn price_suffix(plan: &PricingPlan) -> &'static str {
    if plan.price.contains("$0") || plan.price.ends_with("/mo") {
        ""
    } else {
        "/mo"
    }
}

fn plan_lines<'a>(plan: &'a PricingPlan, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(plan.features.len() + 5);
    if plan.recommended {
        lines.push(Line::from(Span::styled("★ Recommended", theme.recommended)));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(plan.name.as_str(), theme.heading)));
    lines.push(Line::from(vec![
        Span::styled(plan.price.as_str(), theme.price),
        Span::styled(price_suffix(plan), theme.dim),
    ]));
    lines.push(Line::from(""));
    for feature in &plan.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", theme.success),
            Span::styled(feature.as_str(), theme.text),
        ]));
    }
    lines.push(Line::from(""));
    let button = if plan.recommended { theme.button } else { theme.nav };
    lines.push(Line::from(Span::styled(format!(" Choose {} ", plan.name), button)));
    lines
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &PricingState, theme: &Theme) {
    let [head, cards] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(heading_lines(
            "Simple, Transparent Pricing",
            "Choose the membership plan that fits your shopping habits.",
            theme,
        )),
        head,
    );

    let plans = catalog.pricing_plans();
    if plans.is_empty() {
        return;
    }
    let columns =
        Layout::horizontal(vec![Constraint::Ratio(1, plans.len() as u32); plans.len()]).split(cards);
    for (i, (plan, column)) in plans.iter().zip(columns.iter()).enumerate() {
        let border = if plan.recommended {
            theme.recommended
        } else {
            theme.border_for(i == state.selected)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let block = if i == state.selected {
            block.title(Span::styled(" ▸ ", theme.border_focus))
        } else {
            block
        };
        frame.render_widget(
            Paragraph::new(plan_lines(plan, theme))
                .wrap(Wrap { trim: true })
                .block(block),
            *column,
        );
    }
}
