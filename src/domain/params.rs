//! Inputs of a break-even calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::material::TrenchRates;
use super::money::{Amount, Length, Months, Rate};
use crate::error::ValidationError;

/// Accumulated project position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectFinancials {
    /// Expenses incurred so far.
    pub current_expenses: Amount,
    /// Value already invoiced and received.
    pub invoices_received: Amount,
    /// Usable material held in the store.
    pub store_stock_value: Amount,
}

impl ProjectFinancials {
    /// Incurred cost not yet offset by received invoices or stock.
    ///
    /// `None` when the difference leaves the Decimal range.
    #[must_use]
    pub fn net_current_expenses(&self) -> Option<Amount> {
        self.current_expenses
            .checked_sub(self.invoices_received)?
            .checked_sub(self.store_stock_value)
    }
}

/// Connection length range shared by both variants of a utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthRange {
    pub min: Length,
    pub max: Length,
}

impl LengthRange {
    #[must_use]
    pub const fn new(min: Length, max: Length) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range, used as the expected connection length.
    #[must_use]
    pub fn average(&self) -> Option<Length> {
        self.min.checked_add(self.max).map(|sum| sum / dec!(2))
    }

    /// True when `min >= 0` and `max >= min`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min >= Decimal::ZERO && self.max >= self.min
    }
}

/// Water connection cost inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaterParams {
    pub lengths: LengthRange,
    pub pipe_cost_25: Amount,
    pub pipe_cost_32: Amount,
    pub meter_cost_25: Amount,
    pub meter_cost_32: Amount,
    pub asphalt_cost: Amount,
    pub bedding_cost: Amount,
}

impl WaterParams {
    /// Trench rates for 25mm connections.
    #[must_use]
    pub fn rates_25(&self) -> TrenchRates {
        TrenchRates {
            pipe: self.pipe_cost_25,
            asphalt: self.asphalt_cost,
            bedding: self.bedding_cost,
        }
    }

    /// Trench rates for 32mm connections.
    #[must_use]
    pub fn rates_32(&self) -> TrenchRates {
        TrenchRates {
            pipe: self.pipe_cost_32,
            asphalt: self.asphalt_cost,
            bedding: self.bedding_cost,
        }
    }

    pub(crate) fn cost_fields(&self) -> [(&'static str, Amount); 6] {
        [
            ("water.pipe_cost_25", self.pipe_cost_25),
            ("water.pipe_cost_32", self.pipe_cost_32),
            ("water.meter_cost_25", self.meter_cost_25),
            ("water.meter_cost_32", self.meter_cost_32),
            ("water.asphalt_cost", self.asphalt_cost),
            ("water.bedding_cost", self.bedding_cost),
        ]
    }
}

/// Sewer connection cost inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SewerParams {
    pub lengths: LengthRange,
    pub pipe_cost: Amount,
    pub asphalt_cost: Amount,
    pub bedding_cost: Amount,
}

impl SewerParams {
    /// Trench rates shared by mainline and manhole connections.
    #[must_use]
    pub fn rates(&self) -> TrenchRates {
        TrenchRates {
            pipe: self.pipe_cost,
            asphalt: self.asphalt_cost,
            bedding: self.bedding_cost,
        }
    }

    pub(crate) fn cost_fields(&self) -> [(&'static str, Amount); 3] {
        [
            ("sewer.pipe_cost", self.pipe_cost),
            ("sewer.asphalt_cost", self.asphalt_cost),
            ("sewer.bedding_cost", self.bedding_cost),
        ]
    }
}

/// Monthly site overhead, amortised over the connections completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyCosts {
    /// Labour, equipment and other direct cost.
    pub direct: Amount,
    /// Overhead.
    pub indirect: Amount,
}

impl MonthlyCosts {
    #[must_use]
    pub fn total(&self) -> Option<Amount> {
        self.direct.checked_add(self.indirect)
    }
}

/// Connection mix as percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probabilities {
    /// Share of water connections; the rest are sewer.
    pub prob_water: Decimal,
    /// Share of 25mm among water connections; the rest are 32mm.
    pub prob_25mm: Decimal,
    /// Share of mainline among sewer connections; the rest are manhole.
    pub prob_mainline: Decimal,
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            prob_water: dec!(50),
            prob_25mm: dec!(50),
            prob_mainline: dec!(50),
        }
    }
}

impl Probabilities {
    /// Fraction of water connections.
    #[must_use]
    pub fn water(&self) -> Decimal {
        self.prob_water / dec!(100)
    }

    /// Fraction of 25mm connections among water connections.
    #[must_use]
    pub fn size_25mm(&self) -> Decimal {
        self.prob_25mm / dec!(100)
    }

    /// Fraction of mainline connections among sewer connections.
    #[must_use]
    pub fn mainline(&self) -> Decimal {
        self.prob_mainline / dec!(100)
    }

    pub(crate) fn fields(&self) -> [(&'static str, Decimal); 3] {
        [
            ("prob_water", self.prob_water),
            ("prob_25mm", self.prob_25mm),
            ("prob_mainline", self.prob_mainline),
        ]
    }
}

/// Unknown the solver is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    /// Completion rate is known; solve for the time to break even.
    ConnectionRate(Rate),
    /// Target duration is known; solve for the required rate.
    Duration(Months),
}

impl SolveMode {
    /// Build a mode from two optional inputs, exactly one of which must be set.
    pub fn from_options(
        connection_rate: Option<Rate>,
        duration_months: Option<Months>,
    ) -> Result<Self, ValidationError> {
        match (connection_rate, duration_months) {
            (Some(rate), None) => Ok(Self::ConnectionRate(rate)),
            (None, Some(months)) => Ok(Self::Duration(months)),
            _ => Err(ValidationError::AmbiguousSolveMode),
        }
    }
}

/// Complete argument set of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakEvenInputs {
    pub financials: ProjectFinancials,
    pub water: WaterParams,
    pub sewer: SewerParams,
    pub monthly: MonthlyCosts,
    pub mode: SolveMode,
    pub probabilities: Probabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_current_expenses_subtracts_recovered_value() {
        let financials = ProjectFinancials {
            current_expenses: dec!(100000),
            invoices_received: dec!(20000),
            store_stock_value: dec!(10000),
        };
        assert_eq!(financials.net_current_expenses(), Some(dec!(70000)));
    }

    #[test]
    fn length_range_average_and_bounds() {
        let range = LengthRange::new(dec!(4), dec!(15));
        assert_eq!(range.average(), Some(dec!(9.5)));
        assert!(range.is_valid());
        assert!(LengthRange::new(dec!(0), dec!(0)).is_valid());
        assert!(!LengthRange::new(dec!(6), dec!(5)).is_valid());
        assert!(!LengthRange::new(dec!(-1), dec!(5)).is_valid());
    }

    #[test]
    fn sums_past_decimal_range_are_none() {
        let huge = Decimal::MAX;
        assert_eq!(LengthRange::new(huge, huge).average(), None);
        assert_eq!(
            MonthlyCosts {
                direct: huge,
                indirect: huge,
            }
            .total(),
            None
        );
        let financials = ProjectFinancials {
            current_expenses: Decimal::ZERO,
            invoices_received: huge,
            store_stock_value: huge,
        };
        assert_eq!(financials.net_current_expenses(), None);
    }

    #[test]
    fn probabilities_convert_to_fractions() {
        let probabilities = Probabilities {
            prob_water: dec!(40),
            prob_25mm: dec!(100),
            prob_mainline: dec!(0),
        };
        assert_eq!(probabilities.water(), dec!(0.4));
        assert_eq!(probabilities.size_25mm(), dec!(1));
        assert_eq!(probabilities.mainline(), dec!(0));
    }

    #[test]
    fn solve_mode_requires_exactly_one_input() {
        assert_eq!(
            SolveMode::from_options(Some(dec!(20)), None),
            Ok(SolveMode::ConnectionRate(dec!(20)))
        );
        assert_eq!(
            SolveMode::from_options(None, Some(dec!(12))),
            Ok(SolveMode::Duration(dec!(12)))
        );
        assert_eq!(
            SolveMode::from_options(None, None),
            Err(ValidationError::AmbiguousSolveMode)
        );
        assert_eq!(
            SolveMode::from_options(Some(dec!(20)), Some(dec!(12))),
            Err(ValidationError::AmbiguousSolveMode)
        );
    }
}
