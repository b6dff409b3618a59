//! File exporters for solved results and projections.
//!
//! CSV and JSON share one column list so a result exported either way
//! carries the same field names in the same order.

pub mod csv;
pub mod json;

pub use csv::{projection_csv, CsvExporter};
pub use json::JsonExporter;

use crate::domain::result::BreakEvenResult;
use crate::port::outbound::export::{ExportFormat, ResultExporter};

/// Exporter for `format`.
#[must_use]
pub fn exporter(format: ExportFormat) -> Box<dyn ResultExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Json => Box::new(JsonExporter::default()),
    }
}

/// Result fields as `(column, value)` pairs in export order.
pub(crate) fn columns(result: &BreakEvenResult) -> Vec<(&'static str, String)> {
    let decimal = |value: rust_decimal::Decimal| value.normalize().to_string();
    vec![
        ("current_expenses", decimal(result.current_expenses)),
        ("invoices_received", decimal(result.invoices_received)),
        ("store_stock_value", decimal(result.store_stock_value)),
        ("net_current_expenses", decimal(result.net_current_expenses)),
        ("avg_water_value", decimal(result.avg_water_value)),
        ("avg_sewer_value", decimal(result.avg_sewer_value)),
        ("avg_value_per_connection", decimal(result.avg_value_per_connection)),
        ("avg_water_material_cost", decimal(result.avg_water_material_cost)),
        ("avg_sewer_material_cost", decimal(result.avg_sewer_material_cost)),
        (
            "avg_material_cost_per_connection",
            decimal(result.avg_material_cost_per_connection),
        ),
        ("direct_cost_per_connection", decimal(result.direct_cost_per_connection)),
        (
            "indirect_cost_per_connection",
            decimal(result.indirect_cost_per_connection),
        ),
        ("total_cost_per_connection", decimal(result.total_cost_per_connection)),
        ("net_revenue_per_connection", decimal(result.net_revenue_per_connection)),
        ("connection_rate", decimal(result.connection_rate)),
        ("break_even_connections", decimal(result.break_even_connections)),
        (
            "break_even_connections_rounded",
            decimal(result.break_even_connections_rounded),
        ),
        ("break_even_months", decimal(result.break_even_months)),
        ("break_even_date", result.break_even_date.clone()),
        (
            "total_expenses_at_break_even",
            decimal(result.total_expenses_at_break_even),
        ),
        (
            "total_revenue_at_break_even",
            decimal(result.total_revenue_at_break_even),
        ),
    ]
}
