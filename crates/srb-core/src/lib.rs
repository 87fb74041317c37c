//! Core domain + application logic for the support relay bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! messaging port (trait) implemented in the adapter crate.

pub mod admins;
pub mod config;
pub mod domain;
pub mod errors;
pub mod history;
pub mod logging;
pub mod messaging;
pub mod relay;

pub use errors::{Error, Result};
