//! Contract economics: connection variants, cost models and solve inputs.
//!
//! Everything here is a pure value or a pure function; the solver in
//! [`crate::application`] composes them.

pub mod connection;
pub mod error;
pub mod material;
pub mod money;
pub mod params;
pub mod result;
pub mod schedule;

pub use connection::{connection_value, ConnectionVariant, SewerType, Utility, WaterSize};
pub use material::{sewer_material_cost, water_material_cost, TrenchRates};
pub use money::{Amount, Length, Months, Rate};
pub use params::{
    BreakEvenInputs, LengthRange, MonthlyCosts, Probabilities, ProjectFinancials, SewerParams,
    SolveMode, WaterParams,
};
pub use result::{BreakEvenResult, FeasibilityFloor, SolvedFor};
