//! Catalog layer for Luxe Market.
//!
//! Holds the read-only product, blog, service, pricing and gallery content
//! shown by the storefront, either built in or loaded from a JSON file.

pub mod catalog;
mod fixtures;

pub use catalog::Catalog;
pub use market_core as core;
