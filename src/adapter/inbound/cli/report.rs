//! Human-readable break-even reports.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::money::{format_amount, Amount};
use crate::domain::result::{BreakEvenResult, SolvedFor};

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Labelled report lines in display order.
pub fn metrics(result: &BreakEvenResult, currency: &str) -> Vec<(&'static str, String)> {
    let money = |amount: Amount| format!("{currency} {}", format_amount(amount));
    vec![
        ("Current Project Expenses", money(result.current_expenses)),
        ("Invoices Already Received", money(result.invoices_received)),
        ("Store Stock Value", money(result.store_stock_value)),
        ("Net Current Expenses", money(result.net_current_expenses)),
        ("Average Water Connection Value", money(result.avg_water_value)),
        ("Average Sewer Connection Value", money(result.avg_sewer_value)),
        (
            "Average Value per Connection",
            money(result.avg_value_per_connection),
        ),
        (
            "Average Water Material Cost per Connection",
            money(result.avg_water_material_cost),
        ),
        (
            "Average Sewer Material Cost per Connection",
            money(result.avg_sewer_material_cost),
        ),
        (
            "Average Material Cost per Connection",
            money(result.avg_material_cost_per_connection),
        ),
        (
            "Direct Cost per Connection",
            money(result.direct_cost_per_connection),
        ),
        (
            "Indirect Cost per Connection",
            money(result.indirect_cost_per_connection),
        ),
        (
            "Total Cost per Connection",
            money(result.total_cost_per_connection),
        ),
        (
            "Net Revenue per Connection",
            money(result.net_revenue_per_connection),
        ),
        (
            "Connection Rate",
            format!("{} connections/month", format_amount(result.connection_rate)),
        ),
        (
            "Connections Needed to Break Even",
            format!(
                "{} ({} unrounded)",
                result.break_even_connections_rounded.normalize(),
                format_amount(result.break_even_connections)
            ),
        ),
        (
            "Time to Break Even",
            format!("{} months", format_amount(result.break_even_months)),
        ),
        ("Break-Even Date", result.break_even_date.clone()),
        (
            "Total Expenses at Break Even",
            money(result.total_expenses_at_break_even),
        ),
        (
            "Total Revenue at Break Even",
            money(result.total_revenue_at_break_even),
        ),
    ]
}

fn title(result: &BreakEvenResult) -> &'static str {
    match result.solved_for {
        SolvedFor::Duration => "Break-Even Analysis (solved for duration)",
        SolvedFor::ConnectionRate => "Break-Even Analysis (solved for connection rate)",
    }
}

/// Plain-text report for files.
pub fn render_text(result: &BreakEvenResult, currency: &str) -> String {
    let mut text = format!("{}\n\n", title(result));
    for (label, value) in metrics(result, currency) {
        text.push_str(&format!("{label}: {value}\n"));
    }
    text
}

/// Two-column table of every metric.
pub fn render_table(result: &BreakEvenResult, currency: &str) -> String {
    let rows = metrics(result, currency)
        .into_iter()
        .map(|(label, value)| MetricRow { label, value });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print the report to the terminal.
pub fn print(result: &BreakEvenResult, currency: &str) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(title(result));
    for (label, value) in metrics(result, currency) {
        match label {
            "Break-Even Date" => output::field(label, output::highlight(value)),
            _ => output::field(label, value),
        }
    }

    let margin = result.margin_at_break_even();
    let margin_text = format!("{currency} {}", format_amount(margin));
    if margin.is_sign_negative() {
        output::field("Margin at Rounded Break Even", output::negative(margin_text));
        output::warning(&format!(
            "rounding to {} connections leaves a shortfall of {currency} {}",
            result.break_even_connections_rounded.normalize(),
            format_amount(margin.abs())
        ));
    } else {
        output::field("Margin at Rounded Break Even", output::positive(margin_text));
    }
}
