//! Break-even solver.
//!
//! Validates the inputs, blends the four connection variants into expected
//! per-connection economics and solves for whichever of duration or rate is
//! unknown. Every call is independent: the solver holds only immutable
//! settings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use crate::domain::connection::{blend, connection_value, ConnectionVariant, SewerType, WaterSize};
use crate::domain::material::{sewer_material_cost, water_material_cost};
use crate::domain::money::{Amount, Months, Rate};
use crate::domain::params::{
    BreakEvenInputs, MonthlyCosts, Probabilities, SewerParams, SolveMode, WaterParams,
};
use crate::domain::result::{BreakEvenResult, FeasibilityFloor, SolvedFor};
use crate::domain::schedule::{self, MONTH_YEAR_FORMAT};
use crate::domain::Utility;
use crate::error::{InfeasibilityError, SolveError, ValidationError};

/// Immutable solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverSettings {
    /// Highest completion rate the crew can sustain; used for the
    /// minimum-feasible-duration reference.
    pub max_connection_rate: Rate,
    /// Date the break-even timeline starts from.
    pub anchor_date: NaiveDate,
}

/// Default ceiling of 50 connections per month.
pub const DEFAULT_MAX_CONNECTION_RATE: Rate = dec!(50);

/// Default timeline start, 1 August 2025.
#[must_use]
pub fn default_anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap_or_default()
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_connection_rate: DEFAULT_MAX_CONNECTION_RATE,
            anchor_date: default_anchor_date(),
        }
    }
}

/// Expected per-connection value and material cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionAverages {
    pub water_value: Amount,
    pub sewer_value: Amount,
    pub value: Amount,
    pub water_material_cost: Amount,
    pub sewer_material_cost: Amount,
    pub material_cost: Amount,
}

impl ConnectionAverages {
    /// Blend the four variants evaluated at each utility's average length.
    ///
    /// `None` when a value or cost leaves the Decimal range.
    #[must_use]
    pub fn compute(
        water: &WaterParams,
        sewer: &SewerParams,
        probabilities: &Probabilities,
    ) -> Option<Self> {
        let water_length = water.lengths.average()?;
        let sewer_length = sewer.lengths.average()?;

        let p_25mm = probabilities.size_25mm();
        let water_value = blend(
            p_25mm,
            connection_value(ConnectionVariant::Water(WaterSize::Mm25), water_length)?,
            connection_value(ConnectionVariant::Water(WaterSize::Mm32), water_length)?,
        );
        let cost_25 = water_material_cost(
            WaterSize::Mm25,
            water_length,
            &water.rates_25(),
            water.meter_cost_25,
        )?;
        let cost_32 = water_material_cost(
            WaterSize::Mm32,
            water_length,
            &water.rates_32(),
            water.meter_cost_32,
        )?;
        let water_material_cost = blend(p_25mm, cost_25, cost_32);

        let p_mainline = probabilities.mainline();
        let sewer_value = blend(
            p_mainline,
            connection_value(ConnectionVariant::Sewer(SewerType::Mainline), sewer_length)?,
            connection_value(ConnectionVariant::Sewer(SewerType::Manhole), sewer_length)?,
        );
        // Mainline and manhole share one material cost.
        let sewer_cost = sewer_material_cost(sewer_length, &sewer.rates())?;
        let sewer_material_cost = blend(p_mainline, sewer_cost, sewer_cost);

        let p_water = probabilities.water();
        Some(Self {
            water_value,
            sewer_value,
            value: blend(p_water, water_value, sewer_value),
            water_material_cost,
            sewer_material_cost,
            material_cost: blend(p_water, water_material_cost, sewer_material_cost),
        })
    }

    /// Per-connection cost breakdown when overhead is spread over `rate`
    /// connections per month.
    fn costs_at(&self, rate: Rate, monthly: &MonthlyCosts) -> Option<ConnectionCosts> {
        let direct = monthly.direct.checked_div(rate)?;
        let indirect = monthly.indirect.checked_div(rate)?;
        let total = self
            .material_cost
            .checked_add(direct)?
            .checked_add(indirect)?;
        Some(ConnectionCosts {
            direct,
            indirect,
            total,
            net_revenue: self.value.checked_sub(total)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct ConnectionCosts {
    direct: Amount,
    indirect: Amount,
    total: Amount,
    net_revenue: Amount,
}

/// Outcome of one solve branch before the date and totals are derived.
struct Solution {
    solved_for: SolvedFor,
    rate: Rate,
    costs: ConnectionCosts,
    connections: Decimal,
    months: Months,
}

/// Validate a full input set, failing on the first violation.
///
/// Checks run in a fixed order: probabilities, non-negative amounts, solve
/// mode, length bounds, cost rates and finally net current expenses. A
/// scenario file that sets both or neither solve mode is rejected earlier,
/// when it is turned into inputs, so that error can mask the others.
pub fn validate(inputs: &BreakEvenInputs) -> Result<(), ValidationError> {
    let hundred = dec!(100);
    for (field, value) in inputs.probabilities.fields() {
        if value < Decimal::ZERO || value > hundred {
            return Err(ValidationError::ProbabilityOutOfRange { field, value });
        }
    }

    let financials = &inputs.financials;
    let amounts = [
        ("current_expenses", financials.current_expenses),
        ("invoices_received", financials.invoices_received),
        ("store_stock_value", financials.store_stock_value),
        ("monthly_direct_cost", inputs.monthly.direct),
        ("monthly_indirect_cost", inputs.monthly.indirect),
    ];
    check_non_negative(&amounts)?;

    match inputs.mode {
        SolveMode::ConnectionRate(rate) if rate <= Decimal::ZERO => {
            return Err(ValidationError::NonPositiveRate { rate });
        }
        SolveMode::Duration(months) if months <= Decimal::ZERO => {
            return Err(ValidationError::NonPositiveDuration { months });
        }
        _ => {}
    }

    for (utility, lengths) in [
        (Utility::Water, inputs.water.lengths),
        (Utility::Sewer, inputs.sewer.lengths),
    ] {
        if !lengths.is_valid() {
            return Err(ValidationError::InvalidLengthBounds {
                utility,
                min: lengths.min,
                max: lengths.max,
            });
        }
    }

    check_non_negative(&inputs.water.cost_fields())?;
    check_non_negative(&inputs.sewer.cost_fields())?;

    // Both sides are non-negative here, so the subtraction cannot overflow.
    if financials.current_expenses - financials.invoices_received < financials.store_stock_value {
        return Err(ValidationError::RecoveredExceedsExpenses {
            current: financials.current_expenses,
            recovered: financials
                .invoices_received
                .saturating_add(financials.store_stock_value),
        });
    }

    Ok(())
}

fn check_non_negative(fields: &[(&'static str, Amount)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
        Some(&(field, value)) => Err(ValidationError::NegativeAmount { field, value }),
        None => Ok(()),
    }
}

fn ratio(
    numerator: Decimal,
    denominator: Decimal,
    quantity: &'static str,
) -> Result<Decimal, InfeasibilityError> {
    numerator
        .checked_div(denominator)
        .ok_or(InfeasibilityError::OutOfRange { quantity })
}

/// Break-even calculation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakEvenSolver {
    settings: SolverSettings,
}

impl BreakEvenSolver {
    /// Create a solver with the given settings.
    #[must_use]
    pub const fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Settings this solver was built with.
    #[must_use]
    pub const fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solve one break-even problem.
    ///
    /// Returns either a complete result or the first validation or
    /// infeasibility error; no partial result is produced.
    pub fn solve(&self, inputs: &BreakEvenInputs) -> Result<BreakEvenResult, SolveError> {
        validate(inputs)?;

        let net_expenses = inputs.financials.net_current_expenses().ok_or(
            InfeasibilityError::OutOfRange {
                quantity: "net current expenses",
            },
        )?;
        let averages =
            ConnectionAverages::compute(&inputs.water, &inputs.sewer, &inputs.probabilities)
                .ok_or(InfeasibilityError::OutOfRange {
                    quantity: "average connection value",
                })?;
        debug!(
            avg_value = %averages.value,
            avg_material_cost = %averages.material_cost,
            net_expenses = %net_expenses,
            "Blended connection averages"
        );

        let floor = self.feasibility_floor(&averages, &inputs.monthly, net_expenses);
        let solution = match inputs.mode {
            SolveMode::ConnectionRate(rate) => {
                Self::solve_for_duration(&averages, &inputs.monthly, net_expenses, rate, floor)
            }
            SolveMode::Duration(months) => {
                Self::solve_for_rate(&averages, &inputs.monthly, net_expenses, months, floor)
            }
        }
        .map_err(|e| {
            warn!(error = %e, "Break-even infeasible");
            e
        })?;

        let result = self.finish(inputs, net_expenses, &averages, solution)?;
        info!(
            connections = %result.break_even_connections_rounded,
            months = %result.break_even_months.round_dp(2),
            rate = %result.connection_rate.round_dp(2),
            date = %result.break_even_date,
            "Break-even solved"
        );
        Ok(result)
    }

    /// Months to break even at the maximum connection rate.
    fn feasibility_floor(
        &self,
        averages: &ConnectionAverages,
        monthly: &MonthlyCosts,
        net_expenses: Amount,
    ) -> FeasibilityFloor {
        let max_rate = self.settings.max_connection_rate;
        let months = averages
            .costs_at(max_rate, monthly)
            .filter(|costs| costs.net_revenue > Decimal::ZERO)
            .and_then(|costs| net_expenses.checked_div(costs.net_revenue))
            .and_then(|connections| connections.checked_div(max_rate));
        FeasibilityFloor { max_rate, months }
    }

    fn solve_for_duration(
        averages: &ConnectionAverages,
        monthly: &MonthlyCosts,
        net_expenses: Amount,
        rate: Rate,
        floor: FeasibilityFloor,
    ) -> Result<Solution, InfeasibilityError> {
        let costs = averages
            .costs_at(rate, monthly)
            .ok_or(InfeasibilityError::OutOfRange {
                quantity: "cost per connection",
            })?;
        if costs.net_revenue <= Decimal::ZERO {
            return Err(InfeasibilityError::UnprofitableRate {
                avg_value: averages.value,
                total_cost: costs.total,
                rate,
                monthly_direct: monthly.direct,
                monthly_indirect: monthly.indirect,
                floor,
            });
        }

        let connections = ratio(net_expenses, costs.net_revenue, "break-even connections")?;
        let months = ratio(connections, rate, "break-even months")?;
        Ok(Solution {
            solved_for: SolvedFor::Duration,
            rate,
            costs,
            connections,
            months,
        })
    }

    fn solve_for_rate(
        averages: &ConnectionAverages,
        monthly: &MonthlyCosts,
        net_expenses: Amount,
        duration: Months,
        floor: FeasibilityFloor,
    ) -> Result<Solution, InfeasibilityError> {
        let margin = averages.value - averages.material_cost;
        if margin.is_zero() {
            return Err(InfeasibilityError::NoMaterialMargin {
                avg_value: averages.value,
                avg_material_cost: averages.material_cost,
                duration,
                floor,
            });
        }

        let to_recover = monthly
            .total()
            .and_then(|total| total.checked_mul(duration))
            .and_then(|overhead| overhead.checked_add(net_expenses))
            .ok_or(InfeasibilityError::OutOfRange {
                quantity: "expenses to recover",
            })?;
        let connections = ratio(to_recover, margin, "break-even connections")?;
        let implied_rate = ratio(connections, duration, "connection rate")?;
        if implied_rate <= Decimal::ZERO {
            let best = averages.costs_at(floor.max_rate, monthly).ok_or(
                InfeasibilityError::OutOfRange {
                    quantity: "cost per connection",
                },
            )?;
            return Err(InfeasibilityError::RateInfeasible {
                implied_rate,
                duration,
                avg_value: averages.value,
                total_cost: best.total,
                monthly_direct: monthly.direct,
                monthly_indirect: monthly.indirect,
                floor,
            });
        }

        let costs = averages
            .costs_at(implied_rate, monthly)
            .ok_or(InfeasibilityError::OutOfRange {
                quantity: "cost per connection",
            })?;
        if costs.net_revenue <= Decimal::ZERO {
            return Err(InfeasibilityError::UnprofitableDuration {
                avg_value: averages.value,
                total_cost: costs.total,
                duration,
                monthly_direct: monthly.direct,
                monthly_indirect: monthly.indirect,
                floor,
            });
        }

        Ok(Solution {
            solved_for: SolvedFor::ConnectionRate,
            rate: implied_rate,
            costs,
            connections,
            months: duration,
        })
    }

    fn finish(
        &self,
        inputs: &BreakEvenInputs,
        net_expenses: Amount,
        averages: &ConnectionAverages,
        solution: Solution,
    ) -> Result<BreakEvenResult, InfeasibilityError> {
        // Half-to-even, so 12.5 connections round to 12.
        let rounded = solution.connections.round();
        let day = schedule::advance(self.settings.anchor_date, solution.months).ok_or(
            InfeasibilityError::OutOfRange {
                quantity: "break-even date",
            },
        )?;
        let financials = &inputs.financials;
        let total_expenses = rounded
            .checked_mul(solution.costs.total)
            .and_then(|cost| cost.checked_add(net_expenses))
            .ok_or(InfeasibilityError::OutOfRange {
                quantity: "total expenses at break even",
            })?;
        let total_revenue = rounded.checked_mul(averages.value).ok_or(
            InfeasibilityError::OutOfRange {
                quantity: "total revenue at break even",
            },
        )?;

        Ok(BreakEvenResult {
            solved_for: solution.solved_for,
            current_expenses: financials.current_expenses,
            invoices_received: financials.invoices_received,
            store_stock_value: financials.store_stock_value,
            net_current_expenses: net_expenses,
            avg_water_value: averages.water_value,
            avg_sewer_value: averages.sewer_value,
            avg_value_per_connection: averages.value,
            avg_water_material_cost: averages.water_material_cost,
            avg_sewer_material_cost: averages.sewer_material_cost,
            avg_material_cost_per_connection: averages.material_cost,
            direct_cost_per_connection: solution.costs.direct,
            indirect_cost_per_connection: solution.costs.indirect,
            total_cost_per_connection: solution.costs.total,
            net_revenue_per_connection: solution.costs.net_revenue,
            connection_rate: solution.rate,
            break_even_connections: solution.connections,
            break_even_connections_rounded: rounded,
            break_even_months: solution.months,
            break_even_date: day.format(MONTH_YEAR_FORMAT).to_string(),
            break_even_day: day,
            total_expenses_at_break_even: total_expenses,
            total_revenue_at_break_even: total_revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::{LengthRange, ProjectFinancials};

    fn assert_close(actual: Decimal, expected: Decimal) {
        let diff = (actual - expected).abs();
        assert!(
            diff < dec!(0.000001),
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    fn inputs(mode: SolveMode) -> BreakEvenInputs {
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

    fn by_rate(rate: Decimal) -> BreakEvenInputs {
        inputs(SolveMode::ConnectionRate(rate))
    }

    fn by_duration(months: Decimal) -> BreakEvenInputs {
        inputs(SolveMode::Duration(months))
    }

    fn solve(inputs: &BreakEvenInputs) -> Result<BreakEvenResult, SolveError> {
        BreakEvenSolver::default().solve(inputs)
    }

    #[test]
    fn rate_mode_recovers_net_expenses() {
        let result = solve(&by_rate(dec!(30))).expect("feasible");

        assert_eq!(result.solved_for, SolvedFor::Duration);
        assert_eq!(result.net_current_expenses, dec!(70000));
        assert_eq!(result.connection_rate, dec!(30));
        assert_close(
            result.break_even_connections * result.net_revenue_per_connection,
            result.net_current_expenses,
        );
        assert_close(
            result.break_even_months * result.connection_rate,
            result.break_even_connections,
        );
    }

    #[test]
    fn rate_mode_cost_breakdown_is_consistent() {
        let result = solve(&by_rate(dec!(25))).expect("feasible");

        assert_eq!(result.direct_cost_per_connection, dec!(2400));
        assert_eq!(result.indirect_cost_per_connection, dec!(1000));
        assert_eq!(
            result.total_cost_per_connection,
            result.avg_material_cost_per_connection + dec!(3400)
        );
        assert_eq!(
            result.net_revenue_per_connection,
            result.avg_value_per_connection - result.total_cost_per_connection
        );
    }

    #[test]
    fn duration_mode_satisfies_break_even_equation() {
        let input = by_duration(dec!(12));
        let result = solve(&input).expect("feasible");

        assert_eq!(result.solved_for, SolvedFor::ConnectionRate);
        assert_eq!(result.break_even_months, dec!(12));
        let margin = result.avg_value_per_connection - result.avg_material_cost_per_connection;
        assert_close(
            result.break_even_connections * margin - dec!(85000) * dec!(12),
            result.net_current_expenses,
        );
        assert_close(
            result.connection_rate * dec!(12),
            result.break_even_connections,
        );
    }

    #[test]
    fn duration_mode_reports_costs_at_implied_rate() {
        let result = solve(&by_duration(dec!(6))).expect("feasible");

        assert_close(
            result.direct_cost_per_connection * result.connection_rate,
            dec!(60000),
        );
        assert_close(
            result.indirect_cost_per_connection * result.connection_rate,
            dec!(25000),
        );
        assert!(result.net_revenue_per_connection > Decimal::ZERO);
    }

    #[test]
    fn solve_is_deterministic() {
        let input = by_rate(dec!(18));
        assert_eq!(solve(&input), solve(&input));

        let input = by_duration(dec!(9.5));
        assert_eq!(solve(&input), solve(&input));
    }

    #[test]
    fn size_probability_boundaries_select_single_variant() {
        let mut input = by_rate(dec!(30));

        input.probabilities.prob_25mm = dec!(0);
        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_water_value, dec!(4395));

        input.probabilities.prob_25mm = dec!(100);
        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_water_value, dec!(4070));
    }

    #[test]
    fn sewer_probability_boundaries_select_single_type() {
        let mut input = by_rate(dec!(30));

        input.probabilities.prob_mainline = dec!(0);
        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_sewer_value, dec!(7600));

        input.probabilities.prob_mainline = dec!(100);
        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_sewer_value, dec!(8100));
    }

    #[test]
    fn utility_probability_boundaries_select_single_utility() {
        let mut input = by_rate(dec!(30));

        input.probabilities.prob_water = dec!(100);
        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_value_per_connection, result.avg_water_value);
        assert_eq!(
            result.avg_material_cost_per_connection,
            result.avg_water_material_cost
        );

        input.probabilities.prob_water = dec!(0);
        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_value_per_connection, result.avg_sewer_value);
        assert_eq!(
            result.avg_material_cost_per_connection,
            result.avg_sewer_material_cost
        );
    }

    #[test]
    fn sewer_material_cost_ignores_connection_type() {
        let mut input = by_rate(dec!(30));
        input.probabilities.prob_mainline = dec!(0);
        let manhole = solve(&input).expect("feasible");
        input.probabilities.prob_mainline = dec!(100);
        let mainline = solve(&input).expect("feasible");

        assert_eq!(
            manhole.avg_sewer_material_cost,
            mainline.avg_sewer_material_cost
        );
        assert_ne!(manhole.avg_sewer_value, mainline.avg_sewer_value);
    }

    #[test]
    fn length_of_exactly_five_has_no_overage() {
        let mut input = by_rate(dec!(30));
        input.water.lengths = LengthRange::new(dec!(5), dec!(5));
        input.sewer.lengths = LengthRange::new(dec!(3), dec!(7));
        input.probabilities.prob_25mm = dec!(100);
        input.probabilities.prob_mainline = dec!(100);

        let result = solve(&input).expect("feasible");
        assert_eq!(result.avg_water_value, dec!(3120));
        assert_eq!(result.avg_sewer_value, dec!(6300));
    }

    #[test]
    fn totals_use_rounded_connection_count() {
        let result = solve(&by_rate(dec!(30))).expect("feasible");
        let rounded = result.break_even_connections_rounded;

        assert_eq!(rounded, result.break_even_connections.round());
        assert!((rounded - result.break_even_connections).abs() <= dec!(0.5));
        assert_eq!(
            result.total_revenue_at_break_even,
            rounded * result.avg_value_per_connection
        );
        assert_eq!(
            result.total_expenses_at_break_even,
            result.net_current_expenses + rounded * result.total_cost_per_connection
        );
    }

    #[test]
    fn break_even_date_follows_anchor() {
        let result = solve(&by_rate(dec!(30))).expect("feasible");
        let expected = schedule::advance(default_anchor_date(), result.break_even_months)
            .expect("in range");

        assert_eq!(result.break_even_day, expected);
        assert_eq!(
            result.break_even_date,
            expected.format(MONTH_YEAR_FORMAT).to_string()
        );
    }

    #[test]
    fn duration_mode_date_uses_requested_duration() {
        let result = solve(&by_duration(dec!(7))).expect("feasible");
        assert_eq!(result.break_even_date, "March 2026");
    }

    #[test]
    fn custom_anchor_moves_the_date() {
        let solver = BreakEvenSolver::new(SolverSettings {
            anchor_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            ..SolverSettings::default()
        });
        let result = solver.solve(&by_duration(dec!(2))).expect("feasible");
        assert_eq!(result.break_even_date, "March 2026");
    }

    #[test]
    fn zero_net_expenses_break_even_immediately_at_given_rate() {
        let mut input = by_rate(dec!(30));
        input.financials.invoices_received = dec!(90000);

        let result = solve(&input).expect("feasible");
        assert_eq!(result.break_even_connections, Decimal::ZERO);
        assert_eq!(result.break_even_date, "August 2025");
    }

    #[test]
    fn recovered_value_cannot_exceed_expenses() {
        let mut input = by_rate(dec!(30));
        input.financials.invoices_received = dec!(95000);

        assert_eq!(
            solve(&input),
            Err(SolveError::Validation(
                ValidationError::RecoveredExceedsExpenses {
                    current: dec!(100000),
                    recovered: dec!(105000),
                }
            ))
        );
    }

    #[test]
    fn probability_outside_range_is_rejected_first() {
        let mut input = by_rate(dec!(-1));
        input.probabilities.prob_25mm = dec!(101);
        input.financials.current_expenses = dec!(-5);

        assert_eq!(
            solve(&input),
            Err(SolveError::Validation(
                ValidationError::ProbabilityOutOfRange {
                    field: "prob_25mm",
                    value: dec!(101),
                }
            ))
        );
    }

    #[test]
    fn negative_monthly_cost_is_rejected() {
        let mut input = by_rate(dec!(30));
        input.monthly.indirect = dec!(-1);

        assert_eq!(
            validate(&input),
            Err(ValidationError::NegativeAmount {
                field: "monthly_indirect_cost",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn non_positive_solve_inputs_are_rejected() {
        assert_eq!(
            validate(&by_rate(dec!(0))),
            Err(ValidationError::NonPositiveRate { rate: dec!(0) })
        );
        assert_eq!(
            validate(&by_duration(dec!(-3))),
            Err(ValidationError::NonPositiveDuration { months: dec!(-3) })
        );
    }

    #[test]
    fn inverted_length_bounds_are_rejected() {
        let mut input = by_rate(dec!(30));
        input.sewer.lengths = LengthRange::new(dec!(10), dec!(4));

        assert_eq!(
            validate(&input),
            Err(ValidationError::InvalidLengthBounds {
                utility: Utility::Sewer,
                min: dec!(10),
                max: dec!(4),
            })
        );
    }

    #[test]
    fn negative_cost_rate_is_rejected() {
        let mut input = by_rate(dec!(30));
        input.water.meter_cost_32 = dec!(-20);

        assert_eq!(
            validate(&input),
            Err(ValidationError::NegativeAmount {
                field: "water.meter_cost_32",
                value: dec!(-20),
            })
        );
    }

    #[test]
    fn slow_rate_is_infeasible_with_finite_floor() {
        let err = solve(&by_rate(dec!(1))).unwrap_err();

        match err {
            SolveError::Infeasible(InfeasibilityError::UnprofitableRate { floor, rate, .. }) => {
                assert_eq!(rate, dec!(1));
                assert_eq!(floor.max_rate, dec!(50));
                let months = floor.months.expect("finite floor");
                assert!(months > Decimal::ZERO);
            }
            other => panic!("expected unprofitable rate, got {other:?}"),
        }
    }

    #[test]
    fn floor_matches_solving_at_max_rate() {
        let floor_months = match solve(&by_rate(dec!(1))) {
            Err(SolveError::Infeasible(InfeasibilityError::UnprofitableRate { floor, .. })) => {
                floor.months.expect("finite floor")
            }
            other => panic!("expected unprofitable rate, got {other:?}"),
        };
        let at_max = solve(&by_rate(dec!(50))).expect("feasible");
        assert_eq!(floor_months, at_max.break_even_months);
    }

    #[test]
    fn material_cost_above_value_is_infeasible_at_any_rate() {
        let mut input = by_rate(dec!(30));
        input.water.pipe_cost_25 = dec!(1000);
        input.water.pipe_cost_32 = dec!(1000);
        input.sewer.pipe_cost = dec!(1000);

        let err = solve(&input).unwrap_err();
        match &err {
            SolveError::Infeasible(InfeasibilityError::UnprofitableRate { floor, .. }) => {
                assert_eq!(floor.months, None);
            }
            other => panic!("expected unprofitable rate, got {other:?}"),
        }
        assert!(err.to_string().contains("infeasible at any rate"));
    }

    #[test]
    fn negative_margin_makes_duration_infeasible() {
        let mut input = by_duration(dec!(12));
        input.water.pipe_cost_25 = dec!(1000);
        input.water.pipe_cost_32 = dec!(1000);
        input.sewer.pipe_cost = dec!(1000);

        let averages =
            ConnectionAverages::compute(&input.water, &input.sewer, &input.probabilities)
                .expect("in range");

        let err = solve(&input).unwrap_err();
        match &err {
            SolveError::Infeasible(InfeasibilityError::RateInfeasible {
                implied_rate,
                duration,
                avg_value,
                total_cost,
                ..
            }) => {
                assert!(*implied_rate < Decimal::ZERO);
                assert_eq!(*duration, dec!(12));
                assert_eq!(*avg_value, averages.value);
                // 85000 of monthly overhead spread over 50 connections
                assert_eq!(*total_cost, averages.material_cost + dec!(1700));
            }
            other => panic!("expected infeasible rate, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("average value per connection"));
        assert!(message.contains("total cost per connection at the maximum rate"));
        assert!(message.contains("infeasible at any rate"));
    }

    #[test]
    fn zero_material_margin_is_infeasible_for_any_duration() {
        // 25mm water only at 14 m: value 3120 + 190 * 9 = 4830, and
        // (4113.76 meter + 86.24 bedding) * 1.15 = 4830 of material.
        let mut input = by_duration(dec!(12));
        input.probabilities.prob_water = dec!(100);
        input.probabilities.prob_25mm = dec!(100);
        input.water.lengths = LengthRange::new(dec!(14), dec!(14));
        input.water.pipe_cost_25 = Decimal::ZERO;
        input.water.asphalt_cost = Decimal::ZERO;
        input.water.meter_cost_25 = dec!(4113.76);

        let err = solve(&input).unwrap_err();
        match &err {
            SolveError::Infeasible(InfeasibilityError::NoMaterialMargin {
                avg_value,
                avg_material_cost,
                duration,
                floor,
            }) => {
                assert_eq!(*avg_value, dec!(4830));
                assert_eq!(*avg_material_cost, dec!(4830));
                assert_eq!(*duration, dec!(12));
                assert_eq!(floor.months, None);
            }
            other => panic!("expected no material margin, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("minimum feasible duration with 50 connections/month"));
        assert!(message.contains("infeasible at any rate"));
    }

    #[test]
    fn overhead_equal_to_margin_is_unprofitable_for_duration() {
        // 25mm water only at 0 m: value 3120, material 1000 * 1.15 = 1150.
        // With nothing left to recover, the implied rate of 10/month spreads
        // exactly the 1970 margin as overhead, leaving zero net revenue.
        let mut input = by_duration(dec!(12));
        input.financials.invoices_received = dec!(90000);
        input.probabilities.prob_water = dec!(100);
        input.probabilities.prob_25mm = dec!(100);
        input.water.lengths = LengthRange::new(Decimal::ZERO, Decimal::ZERO);
        input.water.pipe_cost_25 = Decimal::ZERO;
        input.water.asphalt_cost = Decimal::ZERO;
        input.water.meter_cost_25 = dec!(1000);
        input.monthly.direct = dec!(19700);
        input.monthly.indirect = Decimal::ZERO;

        let err = solve(&input).unwrap_err();
        match &err {
            SolveError::Infeasible(InfeasibilityError::UnprofitableDuration {
                avg_value,
                total_cost,
                duration,
                floor,
                ..
            }) => {
                assert_eq!(*avg_value, dec!(3120));
                assert_eq!(*total_cost, dec!(3120));
                assert_eq!(*duration, dec!(12));
                assert_eq!(floor.months, Some(Decimal::ZERO));
            }
            other => panic!("expected unprofitable duration, got {other:?}"),
        }
        assert!(err
            .to_string()
            .contains("minimum feasible duration with 50 connections/month"));
    }

    fn huge(mantissa: i128, exponent: u32) -> Decimal {
        Decimal::from_i128_with_scale(mantissa * 10_i128.pow(exponent), 0)
    }

    #[test]
    fn oversized_monthly_costs_are_out_of_range() {
        let mut input = by_duration(dec!(12));
        input.monthly.direct = huge(5, 28);
        input.monthly.indirect = huge(5, 28);

        assert_eq!(
            solve(&input),
            Err(SolveError::Infeasible(InfeasibilityError::OutOfRange {
                quantity: "expenses to recover",
            }))
        );
    }

    #[test]
    fn oversized_lengths_are_out_of_range() {
        let mut input = by_rate(dec!(30));
        input.water.lengths = LengthRange::new(Decimal::ZERO, huge(1, 27));

        assert_eq!(
            solve(&input),
            Err(SolveError::Infeasible(InfeasibilityError::OutOfRange {
                quantity: "average connection value",
            }))
        );
    }

    #[test]
    fn recovered_value_past_decimal_range_is_still_a_validation_error() {
        let mut input = by_rate(dec!(30));
        input.financials.invoices_received = huge(7, 28);
        input.financials.store_stock_value = huge(7, 28);

        assert!(matches!(
            solve(&input),
            Err(SolveError::Validation(
                ValidationError::RecoveredExceedsExpenses { .. }
            ))
        ));
    }

    #[test]
    fn infeasibility_message_carries_diagnostics() {
        let message = solve(&by_rate(dec!(1))).unwrap_err().to_string();

        assert!(message.contains("average value per connection"));
        assert!(message.contains("total cost per connection"));
        assert!(message.contains("minimum feasible duration with 50 connections/month"));
    }
}
