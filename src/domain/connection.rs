//! Connection variants and their contract value.
//!
//! A connection is billed as a fixed base (connection fee plus fittings such
//! as the meter or cleanout) and an overage charge for every metre beyond
//! [`OVERAGE_THRESHOLD`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{Amount, Length};

/// Length included in the base price of every connection.
pub const OVERAGE_THRESHOLD: Length = dec!(5);

/// Utility a connection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utility {
    Water,
    Sewer,
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water => write!(f, "water"),
            Self::Sewer => write!(f, "sewer"),
        }
    }
}

/// Water service pipe diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterSize {
    #[serde(rename = "25mm")]
    Mm25,
    #[serde(rename = "32mm")]
    Mm32,
}

impl WaterSize {
    /// Nominal diameter in millimetres.
    #[must_use]
    pub const fn diameter_mm(self) -> u32 {
        match self {
            Self::Mm25 => 25,
            Self::Mm32 => 32,
        }
    }
}

/// Sewer connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SewerType {
    Mainline,
    Manhole,
}

/// One of the four billable connection variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionVariant {
    Water(WaterSize),
    Sewer(SewerType),
}

impl ConnectionVariant {
    /// Utility this variant belongs to.
    #[must_use]
    pub const fn utility(self) -> Utility {
        match self {
            Self::Water(_) => Utility::Water,
            Self::Sewer(_) => Utility::Sewer,
        }
    }

    /// Fee schedule billed for this variant.
    #[must_use]
    pub const fn fees(self) -> FeeSchedule {
        match self {
            Self::Water(WaterSize::Mm25) => FeeSchedule {
                connection: dec!(2200),
                // meter 750, meter box 170
                fitting: dec!(920),
                overage_rate: dec!(190),
            },
            Self::Water(WaterSize::Mm32) => FeeSchedule {
                connection: dec!(2300),
                // meter 950, meter box 170
                fitting: dec!(1120),
                overage_rate: dec!(195),
            },
            Self::Sewer(SewerType::Mainline) => FeeSchedule {
                connection: dec!(4700),
                fitting: dec!(1600),
                overage_rate: dec!(360),
            },
            Self::Sewer(SewerType::Manhole) => FeeSchedule {
                connection: dec!(4200),
                fitting: dec!(1600),
                overage_rate: dec!(360),
            },
        }
    }
}

impl fmt::Display for ConnectionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water(WaterSize::Mm25) => write!(f, "water 25mm"),
            Self::Water(WaterSize::Mm32) => write!(f, "water 32mm"),
            Self::Sewer(SewerType::Mainline) => write!(f, "sewer mainline"),
            Self::Sewer(SewerType::Manhole) => write!(f, "sewer manhole"),
        }
    }
}

impl FromStr for ConnectionVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "25" | "25mm" | "water-25mm" => Ok(Self::Water(WaterSize::Mm25)),
            "32" | "32mm" | "water-32mm" => Ok(Self::Water(WaterSize::Mm32)),
            "mainline" | "sewer-mainline" => Ok(Self::Sewer(SewerType::Mainline)),
            "manhole" | "sewer-manhole" => Ok(Self::Sewer(SewerType::Manhole)),
            _ => Err(DomainError::UnknownVariant {
                label: s.to_string(),
            }),
        }
    }
}

/// Billing schedule of a single variant.
///
/// `fitting` groups the fixed extras billed with every connection: meter and
/// meter box for water, cleanout for sewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub connection: Amount,
    pub fitting: Amount,
    pub overage_rate: Amount,
}

impl FeeSchedule {
    /// Fixed portion of the connection value.
    #[must_use]
    pub fn base(&self) -> Amount {
        self.connection + self.fitting
    }
}

/// Contract value of one connection of `variant` with the given length.
///
/// The overage applies strictly above [`OVERAGE_THRESHOLD`]; a connection of
/// exactly 5 metres is billed at its base value. `None` when the overage
/// leaves the Decimal range.
#[must_use]
pub fn connection_value(variant: ConnectionVariant, length: Length) -> Option<Amount> {
    let fees = variant.fees();
    if length <= OVERAGE_THRESHOLD {
        return Some(fees.base());
    }
    (length - OVERAGE_THRESHOLD)
        .checked_mul(fees.overage_rate)?
        .checked_add(fees.base())
}

/// Probability-weighted blend of two values.
///
/// `weight` is the fraction attributed to `first`; `1 - weight` goes to
/// `second`.
#[must_use]
pub fn blend(weight: Decimal, first: Amount, second: Amount) -> Amount {
    weight * first + (Decimal::ONE - weight) * second
}
