//! Domain core for the LuxeMarket storefront.
//!
//! Holds the catalog record types, the cart and session state manager, the
//! simulated checkout and contact flows, the shop filter, formatting helpers,
//! CLI settings and the shared error type.

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod error;
pub mod filter;
pub mod formatting;
pub mod models;
pub mod session;
pub mod settings;

pub use error::{MarketError, Result};
