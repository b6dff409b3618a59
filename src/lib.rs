//! Breakeven - break-even analysis for utility connection contracts.
//!
//! A contractor paid per completed water or sewer connection carries
//! accumulated expenses and monthly overhead. This crate works out when the
//! contract pays for itself at a given completion rate, or which rate is
//! needed to break even by a target date.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Fee schedules, material cost formulas, inputs and results
//! - **`application`** - The solver and the revenue/expense projection
//! - **`port`** - Traits for exporting results
//! - **`adapter`** - The CLI (inbound) and CSV/JSON exporters (outbound)
//! - **`infrastructure`** - TOML configuration and scenario files
//!
//! # Modules
//!
//! - [`domain`] - Connection variants, cost models, inputs and results
//! - [`application`] - Break-even solver and projection
//! - [`port`] - Outbound export port
//! - [`adapter`] - CLI and exporters
//! - [`infrastructure`] - Configuration loading
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose sample inputs and documents to integration tests
//!
//! # Example
//!
//! ```
//! use breakeven::application::solver::BreakEvenSolver;
//! use breakeven::domain::params::{
//!     BreakEvenInputs, LengthRange, MonthlyCosts, Probabilities, ProjectFinancials,
//!     SewerParams, SolveMode, WaterParams,
//! };
//! use rust_decimal_macros::dec;
//!
//! let lengths = LengthRange::new(dec!(4), dec!(16));
//! let inputs = BreakEvenInputs {
//!     financials: ProjectFinancials {
//!         current_expenses: dec!(100000),
//!         invoices_received: dec!(20000),
//!         store_stock_value: dec!(10000),
//!     },
//!     water: WaterParams { lengths, ..WaterParams::default() },
//!     sewer: SewerParams { lengths, ..SewerParams::default() },
//!     monthly: MonthlyCosts { direct: dec!(60000), indirect: dec!(25000) },
//!     mode: SolveMode::ConnectionRate(dec!(30)),
//!     probabilities: Probabilities::default(),
//! };
//!
//! let result = BreakEvenSolver::default().solve(&inputs).unwrap();
//! assert!(result.break_even_connections > dec!(0));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
