//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Application settings and scenario files

pub mod config;
