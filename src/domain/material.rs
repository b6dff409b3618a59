//! Material and installation cost of a single connection.
//!
//! Both utilities share the same trench model: pipe with a 1.5 m allowance
//! for fittings and overlap, 20% fittings on top of pipe, asphalt
//! reinstatement over a 0.8 m wide trench and bedding. The sum carries
//! a 15% contingency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::connection::WaterSize;
use super::money::{Amount, Length};

/// Extra pipe length per connection for fittings and overlap.
const PIPE_ALLOWANCE: Length = dec!(1.5);
/// Fittings priced as a share of pipe cost.
const FITTING_SHARE: Decimal = dec!(0.2);
/// Trench width in metres.
const TRENCH_WIDTH: Decimal = dec!(0.8);
/// Asphalt reinstatement factors.
const ASPHALT_SURFACED_SHARE: Decimal = dec!(0.85);
const ASPHALT_THICKNESS: Decimal = dec!(0.417);
/// Bedding allowance added to the pipe diameter, in metres.
const BEDDING_ALLOWANCE: Decimal = dec!(0.15);
/// Fixed bedding multiplier.
const BEDDING_MULTIPLIER: Amount = dec!(44);
/// Contingency applied to the whole material bill.
const CONTINGENCY: Decimal = dec!(1.15);

/// Cost rates shared by every connection of a utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrenchRates {
    /// Pipe price per metre.
    pub pipe: Amount,
    /// Asphalt reinstatement price per unit.
    pub asphalt: Amount,
    /// Bedding rate as entered. The bedding term is priced with a fixed
    /// multiplier, so the rate is carried for reporting only.
    pub bedding: Amount,
}

fn pipe_cost(length: Length, rates: &TrenchRates) -> Option<Amount> {
    length.checked_add(PIPE_ALLOWANCE)?.checked_mul(rates.pipe)
}

fn asphalt_cost(length: Length, rates: &TrenchRates) -> Option<Amount> {
    (TRENCH_WIDTH * ASPHALT_SURFACED_SHARE * ASPHALT_THICKNESS)
        .checked_mul(length)?
        .checked_mul(rates.asphalt)
}

fn bedding_cost(allowance: Decimal, length: Length) -> Option<Amount> {
    (allowance * TRENCH_WIDTH * BEDDING_MULTIPLIER).checked_mul(length)
}

/// Sum the bill items and apply the contingency.
fn with_contingency(items: &[Amount]) -> Option<Amount> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(*item))?
        .checked_mul(CONTINGENCY)
}

/// Material cost of one water connection of the given size.
///
/// The bedding allowance grows with the pipe diameter. `None` when the bill
/// leaves the Decimal range.
#[must_use]
pub fn water_material_cost(
    size: WaterSize,
    length: Length,
    rates: &TrenchRates,
    meter_cost: Amount,
) -> Option<Amount> {
    let pipe = pipe_cost(length, rates)?;
    let fitting = FITTING_SHARE * pipe;
    let asphalt = asphalt_cost(length, rates)?;
    let allowance = Decimal::from(size.diameter_mm()) / dec!(1000) + BEDDING_ALLOWANCE;
    let bedding = bedding_cost(allowance, length)?;

    with_contingency(&[pipe, meter_cost, fitting, asphalt, bedding])
}

/// Material cost of one sewer connection.
///
/// Mainline and manhole connections share this cost; the type only affects
/// the billed value.
#[must_use]
pub fn sewer_material_cost(length: Length, rates: &TrenchRates) -> Option<Amount> {
    let pipe = pipe_cost(length, rates)?;
    let fitting = FITTING_SHARE * pipe;
    let asphalt = asphalt_cost(length, rates)?;
    let bedding = bedding_cost(BEDDING_ALLOWANCE, length)?;

    with_contingency(&[pipe, fitting, asphalt, bedding])
}
