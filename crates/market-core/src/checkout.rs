//! Simulated checkout flow.
//!
//! `Form → Processing → Success`. There is no failure transition: the payment
//! step is a fixed delay driven by the runtime, after which
//! [`CheckoutFlow::complete`] empties the cart exactly once.

use chrono::{DateTime, Utc};

use crate::models::Money;
use crate::session::SessionStore;

/// Where a checkout currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Form,
    Processing,
    Success,
}

/// Input fields of the payment form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutField {
    Name,
    Card,
    Expiry,
    Cvv,
}

impl CheckoutField {
    pub const ALL: [CheckoutField; 4] = [
        CheckoutField::Name,
        CheckoutField::Card,
        CheckoutField::Expiry,
        CheckoutField::Cvv,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CheckoutField::Name => "Cardholder Name",
            CheckoutField::Card => "Card Number",
            CheckoutField::Expiry => "Expiry",
            CheckoutField::Cvv => "CVV",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CheckoutField::Name => "John Doe",
            CheckoutField::Card => "0000 0000 0000 0000",
            CheckoutField::Expiry => "MM/YY",
            CheckoutField::Cvv => "123",
        }
    }

    /// Maximum number of characters accepted, if capped.
    pub fn max_len(self) -> Option<usize> {
        match self {
            CheckoutField::Name => None,
            CheckoutField::Card => Some(19),
            CheckoutField::Expiry => Some(5),
            CheckoutField::Cvv => Some(3),
        }
    }

    /// Next field, wrapping around.
    pub fn next(self) -> Self {
        match self {
            CheckoutField::Name => CheckoutField::Card,
            CheckoutField::Card => CheckoutField::Expiry,
            CheckoutField::Expiry => CheckoutField::Cvv,
            CheckoutField::Cvv => CheckoutField::Name,
        }
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            CheckoutField::Name => CheckoutField::Cvv,
            CheckoutField::Card => CheckoutField::Name,
            CheckoutField::Expiry => CheckoutField::Card,
            CheckoutField::Cvv => CheckoutField::Expiry,
        }
    }
}

/// Raw payment form contents. Nothing here is validated beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub card: String,
    pub expiry: String,
    pub cvv: String,
}

impl CheckoutForm {
    pub fn value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Name => &self.name,
            CheckoutField::Card => &self.card,
            CheckoutField::Expiry => &self.expiry,
            CheckoutField::Cvv => &self.cvv,
        }
    }

    fn value_mut(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::Name => &mut self.name,
            CheckoutField::Card => &mut self.card,
            CheckoutField::Expiry => &mut self.expiry,
            CheckoutField::Cvv => &mut self.cvv,
        }
    }

    /// Append `ch` to `field` unless that would exceed the field's cap.
    pub fn push_char(&mut self, field: CheckoutField, ch: char) -> bool {
        let value = self.value_mut(field);
        if let Some(max) = field.max_len() {
            if value.chars().count() >= max {
                return false;
            }
        }
        value.push(ch);
        true
    }

    pub fn pop_char(&mut self, field: CheckoutField) {
        self.value_mut(field).pop();
    }

    /// Every field has at least one non-whitespace character.
    pub fn is_complete(&self) -> bool {
        CheckoutField::ALL
            .iter()
            .all(|f| !self.value(*f).trim().is_empty())
    }
}

/// Receipt produced when a checkout reaches [`CheckoutStep::Success`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_number: String,
    /// Cart total at the moment payment settled.
    pub total: Money,
    /// Number of units purchased.
    pub items: u32,
    pub confirmed_at: DateTime<Utc>,
}

/// One run of the checkout modal. A fresh flow starts in
/// [`CheckoutStep::Form`] every time the modal opens.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    form: CheckoutForm,
    confirmation: Option<OrderConfirmation>,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Form,
            form: CheckoutForm::default(),
            confirmation: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Mutable form access; only meaningful while in [`CheckoutStep::Form`].
    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// `Form → Processing`. Returns `false` from any other step.
    pub fn submit(&mut self) -> bool {
        if self.step != CheckoutStep::Form {
            return false;
        }
        self.step = CheckoutStep::Processing;
        tracing::info!("checkout submitted; awaiting simulated payment");
        true
    }

    /// `Processing → Success`, clearing the cart in `store`.
    ///
    /// Returns `false` (and leaves the cart alone) from any other step, so a
    /// duplicate completion can never clear a second time.
    pub fn complete(&mut self, store: &mut SessionStore) -> bool {
        if self.step != CheckoutStep::Processing {
            return false;
        }
        let confirmed_at = Utc::now();
        let confirmation = OrderConfirmation {
            order_number: format!("LM-{}", confirmed_at.format("%Y%m%d-%H%M%S")),
            total: store.cart_total(),
            items: store.item_count(),
            confirmed_at,
        };
        tracing::info!(
            order = %confirmation.order_number,
            total = %confirmation.total,
            "payment settled"
        );
        self.confirmation = Some(confirmation);
        self.step = CheckoutStep::Success;
        store.clear_cart();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::session::SessionEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with_items() -> SessionStore {
        let mut store = SessionStore::new();
        let p = Product {
            id: 5,
            title: "Mechanical Keyboard".to_string(),
            price: Money::from_cents(12_999),
            category: "Electronics".to_string(),
            image: String::new(),
            description: String::new(),
            rating: 4.6,
        };
        store.add_to_cart(&p);
        store.add_to_cart(&p);
        store
    }

    #[test]
    fn test_new_flow_starts_in_form() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Form);
        assert!(flow.confirmation().is_none());
    }

    #[test]
    fn test_submit_moves_to_processing_immediately() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.submit());
        assert_eq!(flow.step(), CheckoutStep::Processing);
        assert!(!flow.submit(), "second submit is ignored");
    }

    #[test]
    fn test_complete_clears_cart_exactly_once() {
        let mut store = store_with_items();
        let clears = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&clears);
        store.subscribe(move |event, _| {
            if matches!(event, SessionEvent::CartCleared { .. }) {
                *sink.borrow_mut() += 1;
            }
        });

        let mut flow = CheckoutFlow::new();
        flow.submit();
        assert!(flow.complete(&mut store));
        assert!(!flow.complete(&mut store));

        assert_eq!(flow.step(), CheckoutStep::Success);
        assert!(store.cart().is_empty());
        assert_eq!(*clears.borrow(), 1);
    }

    #[test]
    fn test_complete_records_confirmation() {
        let mut store = store_with_items();
        let mut flow = CheckoutFlow::new();
        flow.submit();
        flow.complete(&mut store);

        let receipt = flow.confirmation().unwrap();
        assert_eq!(receipt.total, Money::from_cents(25_998));
        assert_eq!(receipt.items, 2);
        assert!(receipt.order_number.starts_with("LM-"));
    }

    #[test]
    fn test_complete_from_form_is_noop() {
        let mut store = store_with_items();
        let mut flow = CheckoutFlow::new();
        assert!(!flow.complete(&mut store));
        assert_eq!(flow.step(), CheckoutStep::Form);
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_form_field_caps() {
        let mut form = CheckoutForm::default();
        for ch in "12345".chars() {
            form.push_char(CheckoutField::Cvv, ch);
        }
        assert_eq!(form.cvv, "123");

        for ch in "12/345".chars() {
            form.push_char(CheckoutField::Expiry, ch);
        }
        assert_eq!(form.expiry, "12/34");

        let long_name = "A".repeat(80);
        for ch in long_name.chars() {
            assert!(form.push_char(CheckoutField::Name, ch));
        }
        assert_eq!(form.name.len(), 80);
    }

    #[test]
    fn test_form_completeness() {
        let mut form = CheckoutForm::default();
        assert!(!form.is_complete());
        form.name = "Jane Roe".to_string();
        form.card = "4242 4242 4242 4242".to_string();
        form.expiry = "12/29".to_string();
        assert!(!form.is_complete());
        form.cvv = "   ".to_string();
        assert!(!form.is_complete(), "whitespace does not count");
        form.cvv = "321".to_string();
        assert!(form.is_complete());
        form.pop_char(CheckoutField::Cvv);
        assert_eq!(form.cvv, "32");
    }

    #[test]
    fn test_field_cycle() {
        let mut f = CheckoutField::Name;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, CheckoutField::Name);
        assert_eq!(CheckoutField::Name.prev(), CheckoutField::Cvv);
    }
}
