//! Handler for `value`: contract value of one connection.

use rust_decimal::Decimal;
use serde_json::json;

use crate::adapter::inbound::cli::command::ValueArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::connection::{connection_value, ConnectionVariant, OVERAGE_THRESHOLD};
use crate::domain::money::format_amount;
use crate::error::{InfeasibilityError, Result, ValidationError};
use crate::infrastructure::config::settings::Config;

/// Execute `value`.
pub fn execute(args: &ValueArgs, config: &Config) -> Result<()> {
    let variant: ConnectionVariant = args.variant.parse()?;
    if args.length < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            field: "length",
            value: args.length,
        }
        .into());
    }

    let fees = variant.fees();
    let value =
        connection_value(variant, args.length).ok_or(InfeasibilityError::OutOfRange {
            quantity: "connection value",
        })?;
    let overage = value - fees.base();

    if output::is_json() {
        output::json_output(json!({
            "command": "value",
            "variant": variant.to_string(),
            "length": args.length.normalize().to_string(),
            "connection_fee": fees.connection.normalize().to_string(),
            "fitting_fee": fees.fitting.normalize().to_string(),
            "overage": overage.normalize().to_string(),
            "value": value.normalize().to_string(),
        }));
        return Ok(());
    }

    let currency = config.report.currency.as_str();
    let money = |amount: Decimal| format!("{currency} {}", format_amount(amount));
    output::section(&format!("{variant} at {} m", args.length.normalize()));
    output::field("Connection fee", money(fees.connection));
    output::field("Fitting", money(fees.fitting));
    if overage > Decimal::ZERO {
        output::field(
            &format!("Overage beyond {} m", OVERAGE_THRESHOLD),
            format!("{} ({}/m)", money(overage), format_amount(fees.overage_rate)),
        );
    }
    output::field("Connection value", output::highlight(money(value)));
    Ok(())
}
