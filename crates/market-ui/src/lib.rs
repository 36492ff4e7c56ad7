//! Terminal UI layer for LuxeMarket.
//!
//! Provides the theme palettes, navbar, cart drawer and checkout modal
//! components, the seven storefront pages, and the main application event
//! loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod pages;
pub mod themes;

pub use market_core as core;
