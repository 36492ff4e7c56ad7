//! Contact page: company details and the message form.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use market_core::contact::{ContactField, ContactFlow, ContactStatus, VALIDATION_MESSAGE};
use market_runtime::TaskHandle;

use crate::themes::Theme;

const DETAILS: [(&str, &str, [&str; 2]); 3] = [
    ("✉", "Email Us", ["hello@luxemarket.com", "support@luxemarket.com"]),
    ("☎", "Call Us", ["+1 (555) 123-4567", "Mon - Fri: 9am - 6pm EST"]),
    ("⌂", "Visit Us", ["123 Fashion Street", "Design District, NY 10012"]),
];

/// Keyboard focus within the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(ContactField),
    Send,
}

impl ContactFocus {
    pub fn next(self) -> Self {
        match self {
            ContactFocus::Field(ContactField::Message) => ContactFocus::Send,
            ContactFocus::Field(f) => ContactFocus::Field(f.next()),
            ContactFocus::Send => ContactFocus::Field(ContactField::Name),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactFocus::Field(ContactField::Name) => ContactFocus::Send,
            ContactFocus::Field(f) => ContactFocus::Field(f.prev()),
            ContactFocus::Send => ContactFocus::Field(ContactField::Message),
        }
    }
}

/// View-local state of the contact page. Dropped when the page is left,
/// which also cancels any pending delivery or reset timer.
#[derive(Debug)]
pub struct ContactState {
    pub flow: ContactFlow,
    pub focus: ContactFocus,
    /// Keystrokes go to the focused field.
    pub editing: bool,
    /// Pending delivery or reset timer.
    pub task: Option<TaskHandle>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            flow: ContactFlow::new(),
            focus: ContactFocus::Field(ContactField::Name),
            editing: false,
            task: None,
        }
    }
}

impl ContactState {
    pub fn focused_field(&self) -> Option<ContactField> {
        match self.focus {
            ContactFocus::Field(f) => Some(f),
            ContactFocus::Send => None,
        }
    }
}

fn send_label(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::Submitting => " Sending... ",
        ContactStatus::Success => " Sent Successfully ✓ ",
        ContactStatus::Idle | ContactStatus::Error => " Send Message ➤ ",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &ContactState, theme: &Theme) {
    let [info, form] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    let mut lines = vec![
        Line::from(Span::styled("Get in Touch", theme.heading)),
        Line::from(""),
        Line::from(Span::styled(
            "Have questions about our products or your order? We're here to help. \
             Fill out the form or reach us via email or phone.",
            theme.dim,
        )),
        Line::from(""),
    ];
    for (glyph, title, detail) in DETAILS {
        lines.push(Line::from(vec![
            Span::styled(format!("{glyph} "), theme.info),
            Span::styled(title, theme.bold),
        ]));
        for d in detail {
            lines.push(Line::from(Span::styled(format!("  {d}"), theme.text)));
        }
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), info);

    render_form(frame, form, state, theme);
}

fn render_form(frame: &mut Frame, area: Rect, state: &ContactState, theme: &Theme) {
    let [name, email, message, send, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(area);

    for (field, rect) in ContactField::ALL.into_iter().zip([name, email, message]) {
        let focused = state.focus == ContactFocus::Field(field);
        let value = state.flow.form().value(field);
        let body = if value.is_empty() && !(focused && state.editing) {
            Span::styled(field.placeholder(), theme.placeholder)
        } else {
            let cursor = if focused && state.editing { "▏" } else { "" };
            Span::styled(format!("{value}{cursor}"), theme.input)
        };
        frame.render_widget(
            Paragraph::new(Line::from(body)).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_for(focused))
                    .title(Span::styled(format!(" {} ", field.label()), theme.label)),
            ),
            rect,
        );
    }

    let status_now = state.flow.status();
    let button_style = match status_now {
        ContactStatus::Success => theme.success,
        _ if state.focus == ContactFocus::Send => theme.button,
        _ => theme.nav,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(send_label(status_now), button_style))),
        send,
    );

    if status_now == ContactStatus::Error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("⚠ {VALIDATION_MESSAGE}"),
                theme.error,
            ))),
            status,
        );
    }
}
