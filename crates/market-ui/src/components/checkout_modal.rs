//! Secure checkout modal drawn over the current page.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use market_core::checkout::{CheckoutField, CheckoutFlow, CheckoutStep};
use market_core::models::Money;
use market_runtime::{RuntimeEvent, TaskHandle};

use crate::components::centered_rect;
use crate::themes::Theme;

/// Shown when Pay Now is pressed with a blank field.
pub const INCOMPLETE_HINT: &str = "Please fill in every payment field.";

const MODAL_WIDTH: u16 = 52;
const MODAL_HEIGHT: u16 = 20;

/// One opening of the checkout modal. Dropping it cancels a pending payment.
#[derive(Debug)]
pub struct CheckoutModal {
    pub flow: CheckoutFlow,
    pub focus: CheckoutField,
    /// Pending payment timer while processing.
    pub task: Option<TaskHandle>,
    pub hint: Option<&'static str>,
}

impl Default for CheckoutModal {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutModal {
    pub fn new() -> Self {
        Self {
            flow: CheckoutFlow::new(),
            focus: CheckoutField::Name,
            task: None,
            hint: None,
        }
    }

    /// Whether `event` was scheduled by this modal's payment timer.
    pub fn owns(&self, event: &RuntimeEvent) -> bool {
        self.task.as_ref().is_some_and(|t| t.owns(event))
    }

    /// Type into the focused field; ignored outside the form step.
    pub fn type_char(&mut self, ch: char) {
        if self.flow.step() != CheckoutStep::Form {
            return;
        }
        self.hint = None;
        self.flow.form_mut().push_char(self.focus, ch);
    }

    pub fn backspace(&mut self) {
        if self.flow.step() == CheckoutStep::Form {
            self.flow.form_mut().pop_char(self.focus);
        }
    }

    /// Validate field presence and start processing. Returns `true` when the
    /// caller should schedule payment settlement.
    pub fn pay(&mut self) -> bool {
        if self.flow.step() != CheckoutStep::Form {
            return false;
        }
        if !self.flow.form().is_complete() {
            self.hint = Some(INCOMPLETE_HINT);
            return false;
        }
        self.hint = None;
        self.flow.submit()
    }
}

fn field_lines<'a>(modal: &'a CheckoutModal, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(CheckoutField::ALL.len() * 2);
    for field in CheckoutField::ALL {
        let focused = modal.focus == field;
        let value = modal.flow.form().value(field);
        let marker = if focused { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme.border_focus),
            Span::styled(field.label(), theme.label),
        ]));
        let body = if value.is_empty() {
            Span::styled(field.placeholder(), theme.placeholder)
        } else {
            Span::styled(value, theme.input)
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::raw("  "),
            body,
            Span::styled(cursor, theme.input),
        ]));
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, modal: &CheckoutModal, live_total: Money, theme: &Theme) {
    let popup = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let title = match modal.flow.step() {
        CheckoutStep::Success => " Order Confirmed! ",
        CheckoutStep::Form | CheckoutStep::Processing => " Secure Checkout ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focus)
        .title(Span::styled(title, theme.heading))
        .title_bottom(Span::styled(" Esc: close ", theme.dim));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    match modal.flow.step() {
        CheckoutStep::Form => render_form(frame, inner, modal, live_total, theme),
        CheckoutStep::Processing => frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled("⟳", theme.warning)),
                Line::from(Span::styled("Processing payment...", theme.bold)),
                Line::from(Span::styled(live_total.to_string(), theme.price)),
            ])
            .alignment(Alignment::Center),
            inner,
        ),
        CheckoutStep::Success => render_success(frame, inner, modal, theme),
    }
}

fn render_form(frame: &mut Frame, area: Rect, modal: &CheckoutModal, total: Money, theme: &Theme) {
    let [amount, fields, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Total Amount", theme.dim)),
            Line::from(Span::styled(total.to_string(), theme.price)),
        ])
        .alignment(Alignment::Center),
        amount,
    );
    frame.render_widget(Paragraph::new(field_lines(modal, theme)), fields);

    let mut tail = vec![
        Line::from(Span::styled(format!(" Pay Now {total} "), theme.button)),
        Line::from(Span::styled("Tab: next field  Enter: pay", theme.dim)),
    ];
    if let Some(hint) = modal.hint {
        tail.insert(0, Line::from(Span::styled(hint, theme.error)));
    }
    frame.render_widget(Paragraph::new(tail).alignment(Alignment::Center), footer);
}

fn render_success(frame: &mut Frame, area: Rect, modal: &CheckoutModal, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓", theme.success)),
        Line::from(Span::styled("Payment Successful!", theme.heading)),
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for your purchase. A confirmation email has been sent to you.",
            theme.dim,
        )),
        Line::from(""),
    ];
    if let Some(receipt) = modal.flow.confirmation() {
        lines.push(Line::from(vec![
            Span::styled("Order ", theme.label),
            Span::styled(receipt.order_number.as_str(), theme.value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Charged ", theme.label),
            Span::styled(receipt.total.to_string(), theme.price),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(" Close ", theme.button)));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::session::SessionStore;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(modal: &CheckoutModal, total: Money) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, modal, total, &theme);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn filled() -> CheckoutModal {
        let mut modal = CheckoutModal::new();
        for (field, text) in [
            (CheckoutField::Name, "Ada"),
            (CheckoutField::Card, "4242 4242 4242 4242"),
            (CheckoutField::Expiry, "12/30"),
            (CheckoutField::Cvv, "123"),
        ] {
            modal.focus = field;
            text.chars().for_each(|c| modal.type_char(c));
        }
        modal
    }

    #[test]
    fn test_pay_requires_every_field() {
        let mut modal = CheckoutModal::new();
        "Ada".chars().for_each(|c| modal.type_char(c));
        assert!(!modal.pay());
        assert_eq!(modal.hint, Some(INCOMPLETE_HINT));
        assert_eq!(modal.flow.step(), CheckoutStep::Form);
    }

    #[test]
    fn test_pay_enters_processing() {
        let mut modal = filled();
        assert!(modal.pay());
        assert_eq!(modal.flow.step(), CheckoutStep::Processing);
        assert!(!modal.pay());
    }

    #[test]
    fn test_cvv_capped_at_three_digits() {
        let mut modal = CheckoutModal::new();
        modal.focus = CheckoutField::Cvv;
        "12345".chars().for_each(|c| modal.type_char(c));
        assert_eq!(modal.flow.form().cvv, "123");
    }

    #[test]
    fn test_typing_ignored_while_processing() {
        let mut modal = filled();
        modal.pay();
        modal.focus = CheckoutField::Name;
        modal.type_char('x');
        modal.backspace();
        assert_eq!(modal.flow.form().name, "Ada");
    }

    #[test]
    fn test_render_each_step() {
        let total = Money::from_cents(2_500);
        let mut modal = CheckoutModal::new();
        let content = draw(&modal, total);
        assert!(content.contains("Secure Checkout"));
        assert!(content.contains("Total Amount"));
        assert!(content.contains("0000 0000 0000 0000"));
        assert!(content.contains("$25.00"));

        modal = filled();
        modal.pay();
        assert!(draw(&modal, total).contains("Processing payment..."));

        let mut store = SessionStore::new();
        modal.flow.complete(&mut store);
        let content = draw(&modal, Money::ZERO);
        assert!(content.contains("Order Confirmed!"));
        assert!(content.contains("Payment Successful!"));
        assert!(content.contains("Close"));
    }
}
