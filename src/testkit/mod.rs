//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for solver inputs and solved results.
//! - [`config`]: Canonical scenario and configuration documents.

pub mod config;
pub mod domain;
