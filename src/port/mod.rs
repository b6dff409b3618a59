//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Adapters implement them to hand results to the outside world.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                           ┌───────────┐
//! │   CLI   │                                           │  Export   │
//! │ Adapter │                                           │  Adapter  │
//! └─────────┘                                           └───────────┘
//! ```

pub mod outbound;
