//! Router API integration
//!
//! Client and wire models for the router under test.

pub mod client;
pub mod models;

pub use client::RouterClient;
pub use models::*;
