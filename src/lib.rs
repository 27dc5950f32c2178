//! Inbox Pilot — email productivity agent core.

pub mod config;
pub mod error;
pub mod inbox;
pub mod pipeline;
pub mod state;
pub mod store;
