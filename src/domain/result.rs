//! Output record of a break-even calculation.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::{Amount, Months, Rate};
use rust_decimal::Decimal;

/// Which unknown a result was solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvedFor {
    /// The rate was given; months to break even were derived.
    Duration,
    /// The duration was given; the required rate was derived.
    ConnectionRate,
}

/// Every metric derived by one solve.
///
/// Built once by the solver and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakEvenResult {
    pub solved_for: SolvedFor,
    pub current_expenses: Amount,
    pub invoices_received: Amount,
    pub store_stock_value: Amount,
    pub net_current_expenses: Amount,
    pub avg_water_value: Amount,
    pub avg_sewer_value: Amount,
    pub avg_value_per_connection: Amount,
    pub avg_water_material_cost: Amount,
    pub avg_sewer_material_cost: Amount,
    pub avg_material_cost_per_connection: Amount,
    pub direct_cost_per_connection: Amount,
    pub indirect_cost_per_connection: Amount,
    pub total_cost_per_connection: Amount,
    pub net_revenue_per_connection: Amount,
    pub connection_rate: Rate,
    pub break_even_connections: Decimal,
    pub break_even_connections_rounded: Decimal,
    pub break_even_months: Months,
    /// Month and year of break-even, e.g. `March 2026`.
    pub break_even_date: String,
    /// Calendar day the break-even date was derived from.
    pub break_even_day: NaiveDate,
    pub total_expenses_at_break_even: Amount,
    pub total_revenue_at_break_even: Amount,
}

impl BreakEvenResult {
    /// Profit (or loss) at the rounded break-even connection count.
    ///
    /// Rounding the connection count makes this slightly off zero.
    #[must_use]
    pub fn margin_at_break_even(&self) -> Amount {
        self.total_revenue_at_break_even - self.total_expenses_at_break_even
    }
}

/// Best achievable timeline at the maximum connection rate.
///
/// Reported alongside infeasibility errors so the caller knows how far off
/// the inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeasibilityFloor {
    /// Rate ceiling the floor was computed at.
    pub max_rate: Rate,
    /// Months to break even at `max_rate`; `None` when no rate can recover
    /// the per-connection cost.
    pub months: Option<Months>,
}

impl std::fmt::Display for FeasibilityFloor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "minimum feasible duration with {} connections/month: ",
            self.max_rate.normalize()
        )?;
        match self.months {
            Some(months) => write!(f, "{:.2} months", months.round_dp(2)),
            None => write!(f, "infeasible at any rate"),
        }
    }
}
