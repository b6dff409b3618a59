//! Domain validation errors for core domain types.
//!
//! These errors are returned when text or configuration cannot be mapped
//! onto a domain value, for example an unknown connection variant label.
//!
//! # Examples
//!
//! ```
//! use breakeven::domain::connection::ConnectionVariant;
//! use breakeven::domain::error::DomainError;
//!
//! let result = "40mm".parse::<ConnectionVariant>();
//! assert!(matches!(result, Err(DomainError::UnknownVariant { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The label does not name one of the supported connection variants.
    #[error("unknown connection variant '{label}' (expected one of: 25mm, 32mm, mainline, manhole)")]
    UnknownVariant {
        /// The label that was provided.
        label: String,
    },
}
