//! Runtime layer for Luxe Market.
//!
//! Runs the simulated payment and contact delays as cancellable tokio tasks
//! and reports back to the UI loop through a channel.

pub mod scheduler;

pub use market_core as core;
pub use scheduler::{FlowTimings, RuntimeEvent, Scheduler, TaskHandle, Ticket};
