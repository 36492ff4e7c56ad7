//! Contact form and its simulated submission.
//!
//! `Idle → Submitting → Success → Idle`, with `Error` reachable from `Idle`
//! when a field is blank or the email address is malformed. Delivery never
//! fails; the runtime drives `complete` and `reset` on timers.

use std::sync::OnceLock;

use regex::Regex;

/// Shown under the form when validation fails.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields correctly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Message => "How can we help you?",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Fields that would block submission, in form order.
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| {
                let v = self.value(*f).trim();
                v.is_empty() || (*f == ContactField::Email && !is_valid_email(v))
            })
            .collect()
    }
}

/// `local@domain.tld` shape check; no whitespace, one `@`, a dotted domain.
pub fn is_valid_email(candidate: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("regex is valid"))
        .is_match(candidate)
}

/// State of the contact page form.
#[derive(Debug, Clone)]
pub struct ContactFlow {
    status: ContactStatus,
    form: ContactForm,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFlow {
    pub fn new() -> Self {
        Self {
            status: ContactStatus::Idle,
            form: ContactForm::default(),
        }
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Whether the send action is currently available.
    pub fn can_submit(&self) -> bool {
        matches!(self.status, ContactStatus::Idle | ContactStatus::Error)
    }

    /// Type a character into `field`. Clears a previous validation error.
    pub fn type_char(&mut self, field: ContactField, ch: char) {
        self.form.value_mut(field).push(ch);
        self.clear_error();
    }

    pub fn backspace(&mut self, field: ContactField) {
        self.form.value_mut(field).pop();
        self.clear_error();
    }

    fn clear_error(&mut self) {
        if self.status == ContactStatus::Error {
            self.status = ContactStatus::Idle;
        }
    }

    /// Validate and start sending.
    ///
    /// Returns `true` when the flow entered [`ContactStatus::Submitting`] and
    /// the caller should schedule delivery. On a validation failure the
    /// status becomes [`ContactStatus::Error`] and `false` is returned.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        let invalid = self.form.invalid_fields();
        if !invalid.is_empty() {
            tracing::debug!(?invalid, "contact form rejected");
            self.status = ContactStatus::Error;
            return false;
        }
        self.status = ContactStatus::Submitting;
        true
    }

    /// `Submitting → Success`; the form is emptied.
    pub fn complete(&mut self) -> bool {
        if self.status != ContactStatus::Submitting {
            return false;
        }
        tracing::info!("contact message delivered (simulated)");
        self.status = ContactStatus::Success;
        self.form = ContactForm::default();
        true
    }

    /// `Success → Idle`.
    pub fn reset(&mut self) -> bool {
        if self.status != ContactStatus::Success {
            return false;
        }
        self.status = ContactStatus::Idle;
        true
    }
}
