//! Outbound adapters (driven side).

pub mod export;
