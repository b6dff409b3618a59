use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::connection::Utility;
use crate::domain::error::DomainError;
use crate::domain::result::FeasibilityFloor;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to parse {name}: {source}")]
    ParseFile {
        name: String,
        content: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Malformed or out-of-range calculation input.
///
/// Detected before any computation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between 0 and 100, got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: Decimal },

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("provide either a connection rate or a duration, not both or neither")]
    AmbiguousSolveMode,

    #[error("connection rate must be positive, got {rate}")]
    NonPositiveRate { rate: Decimal },

    #[error("duration must be positive, got {months}")]
    NonPositiveDuration { months: Decimal },

    #[error(
        "{utility} connection lengths must be non-negative and max_length ({max}) must be at least min_length ({min})"
    )]
    InvalidLengthBounds {
        utility: Utility,
        min: Decimal,
        max: Decimal,
    },

    #[error(
        "invoices received and store stock value ({recovered}) cannot exceed current expenses ({current})"
    )]
    RecoveredExceedsExpenses { current: Decimal, recovered: Decimal },
}

/// Well-formed input that admits no positive break-even solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InfeasibilityError {
    #[error(
        "average value per connection ({avg_value:.2}) must exceed total cost per connection ({total_cost:.2}) at {rate} connections/month; {floor}; try reducing monthly costs (direct: {monthly_direct:.2}, indirect: {monthly_indirect:.2}) or increasing connection value"
    )]
    UnprofitableRate {
        avg_value: Decimal,
        total_cost: Decimal,
        rate: Decimal,
        monthly_direct: Decimal,
        monthly_indirect: Decimal,
        floor: FeasibilityFloor,
    },

    #[error(
        "required connection rate ({implied_rate:.2} connections/month) is infeasible for the given duration ({duration} months); average value per connection ({avg_value:.2}) against total cost per connection at the maximum rate ({total_cost:.2}); {floor}; try increasing duration, reducing monthly costs (direct: {monthly_direct:.2}, indirect: {monthly_indirect:.2}) or increasing connection value"
    )]
    RateInfeasible {
        implied_rate: Decimal,
        duration: Decimal,
        avg_value: Decimal,
        /// Material cost plus overhead spread at the maximum rate, the
        /// lowest per-connection cost reachable.
        total_cost: Decimal,
        monthly_direct: Decimal,
        monthly_indirect: Decimal,
        floor: FeasibilityFloor,
    },

    #[error(
        "average value per connection ({avg_value:.2}) equals average material cost ({avg_material_cost:.2}); no connection rate can recover expenses within {duration} months; {floor}"
    )]
    NoMaterialMargin {
        avg_value: Decimal,
        avg_material_cost: Decimal,
        duration: Decimal,
        floor: FeasibilityFloor,
    },

    #[error(
        "average value per connection ({avg_value:.2}) must exceed total cost per connection ({total_cost:.2}) for the given duration ({duration} months); {floor}; try increasing duration, reducing monthly costs (direct: {monthly_direct:.2}, indirect: {monthly_indirect:.2}) or increasing connection value"
    )]
    UnprofitableDuration {
        avg_value: Decimal,
        total_cost: Decimal,
        duration: Decimal,
        monthly_direct: Decimal,
        monthly_indirect: Decimal,
        floor: FeasibilityFloor,
    },

    #[error("{quantity} is outside the representable range")]
    OutOfRange { quantity: &'static str },
}

/// Terminal failure of a solve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Infeasible(#[from] InfeasibilityError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Solve(SolveError::Validation(err))
    }
}

impl From<InfeasibilityError> for Error {
    fn from(err: InfeasibilityError) -> Self {
        Error::Solve(SolveError::Infeasible(err))
    }
}
