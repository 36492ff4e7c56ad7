use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative monetary amount held as whole cents.
///
/// Serialised as a decimal number (`299.99`) so catalog documents read the
/// same way prices are written on a price tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(u64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Construct from a whole number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Amount in cents.
    pub fn cents(self) -> u64 {
        self.0
    }

    /// Amount as a decimal number of currency units.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by a line quantity.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("price must be a non-negative number, got {value}"));
        }
        Ok(Money((value * 100.0).round() as u64))
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> f64 {
        m.as_f64()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formatting::format_currency(*self))
    }
}

/// A catalog product. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: u32,
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Category label, e.g. `"Electronics"`.
    pub category: String,
    /// Image reference (URL).
    pub image: String,
    pub description: String,
    /// Average customer rating, 0.0 to 5.0.
    pub rating: f64,
}

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identifier of the product this line was created from.
    pub id: u32,
    pub title: String,
    pub price: Money,
    pub category: String,
    pub image: String,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line for `product` with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// A blog article shown on the blog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Publication date.
    pub date: NaiveDate,
    pub image: String,
    pub content: String,
}

/// A service advertised on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Symbolic icon name (e.g. `"Truck"`); mapped to a glyph by the UI.
    pub icon: String,
}

/// A membership plan shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    /// Display label such as `"$9.99/mo"`.
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
}

/// A gallery image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryImage {
    pub src: String,
}
