//! Builders for solver inputs used across tests.
//!
//! The sample project: 70,000 of net expenses, 4 to 16 metre runs for both
//! utilities and 85,000 of monthly overhead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::application::solver::BreakEvenSolver;
use crate::domain::params::{
    BreakEvenInputs, LengthRange, MonthlyCosts, Probabilities, ProjectFinancials, SewerParams,
    SolveMode, WaterParams,
};
use crate::domain::result::BreakEvenResult;
use crate::error::SolveError;

/// Sample inputs solved with `mode`.
pub fn sample_inputs(mode: SolveMode) -> BreakEvenInputs {
    BreakEvenInputs {
        financials: ProjectFinancials {
            current_expenses: dec!(100000),
            invoices_received: dec!(20000),
            store_stock_value: dec!(10000),
        },
        water: WaterParams {
            lengths: LengthRange::new(dec!(4), dec!(16)),
            pipe_cost_25: dec!(12),
            pipe_cost_32: dec!(15),
            meter_cost_25: dec!(300),
            meter_cost_32: dec!(420),
            asphalt_cost: dec!(90),
            bedding_cost: dec!(30),
        },
        sewer: SewerParams {
            lengths: LengthRange::new(dec!(4), dec!(16)),
            pipe_cost: dec!(40),
            asphalt_cost: dec!(90),
            bedding_cost: dec!(30),
        },
        monthly: MonthlyCosts {
            direct: dec!(60000),
            indirect: dec!(25000),
        },
        mode,
        probabilities: Probabilities {
            prob_water: dec!(50),
            prob_25mm: dec!(70),
            prob_mainline: dec!(60),
        },
    }
}

/// Sample inputs at a fixed connection rate.
pub fn by_rate(rate: Decimal) -> BreakEvenInputs {
    sample_inputs(SolveMode::ConnectionRate(rate))
}

/// Sample inputs with a fixed duration.
pub fn by_duration(months: Decimal) -> BreakEvenInputs {
    sample_inputs(SolveMode::Duration(months))
}

/// Solve `inputs` with default settings.
pub fn solve(inputs: &BreakEvenInputs) -> Result<BreakEvenResult, SolveError> {
    BreakEvenSolver::default().solve(inputs)
}

/// The sample project solved at 30 connections per month.
///
/// # Panics
///
/// Panics if the sample stops being feasible, which would be a bug in the
/// fixture itself.
pub fn sample_result() -> BreakEvenResult {
    solve(&by_rate(dec!(30))).expect("sample project is feasible at 30/month")
}
