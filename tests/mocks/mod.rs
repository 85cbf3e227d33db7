//! Mock infrastructure for testing against a router
//!
//! Provides a wiremock-backed stand-in for the router under test, with
//! helpers for each response scenario the probes care about.

pub mod router;

pub use router::*;
