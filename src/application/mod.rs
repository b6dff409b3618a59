//! Application services built on the domain models.

pub mod projection;
pub mod solver;

pub use projection::{BreakEvenMarker, CurvePoint, Projection};
pub use solver::{validate, BreakEvenSolver, ConnectionAverages, SolverSettings};
