//! Ordered cart of product lines.
//!
//! Lines keep insertion order and are unique per product id. The total is
//! always derived from the lines; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::models::{CartLine, Money, Product};

/// Outcome of [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,
    /// An existing line's quantity went up by one; carries the new quantity.
    Incremented(u32),
}

/// An ordered collection of [`CartLine`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for `product_id`.
    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).fold(0, u32::saturating_add)
    }

    /// Σ price × quantity, recomputed on every call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Increment the line for `product` or append a new one with quantity 1.
    pub fn add(&mut self, product: &Product) -> AddOutcome {
        match self.lines.iter_mut().find(|l| l.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                AddOutcome::Incremented(line.quantity)
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                AddOutcome::Inserted
            }
        }
    }

    /// Remove the line for `product_id`. Returns the removed line, if any.
    pub fn remove(&mut self, product_id: u32) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.id == product_id)?;
        Some(self.lines.remove(idx))
    }

    /// Set the quantity of an existing line to exactly `quantity`.
    ///
    /// Requests below 1 are ignored rather than removing the line; unknown
    /// ids are ignored too. Returns `true` when the stored quantity changed.
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|l| l.id == product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Drop every line. Returns how many lines were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.lines.len();
        self.lines.clear();
        n
    }
}
