//! CSV export: one header row and one data row per result.

use crate::application::projection::Projection;
use crate::domain::result::BreakEvenResult;
use crate::error::Result;
use crate::port::outbound::export::{ExportFormat, ResultExporter};

use super::columns;

/// Writes a result as a single CSV row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ResultExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(&self, result: &BreakEvenResult) -> Result<String> {
        let (names, values): (Vec<_>, Vec<_>) = columns(result).into_iter().unzip();

        let mut csv = names.join(",");
        csv.push('\n');
        csv.push_str(&values.iter().map(|v| escape(v)).collect::<Vec<_>>().join(","));
        csv.push('\n');
        Ok(csv)
    }
}

/// Projection series as CSV, one row per sampled connection count.
///
/// Points past the calendar range have an empty `month` column.
#[must_use]
pub fn projection_csv(projection: &Projection) -> String {
    let mut csv = String::from("connections,months,month,revenue,expenses\n");
    for point in &projection.points {
        csv.push_str(&format!(
            "{},{:.4},{},{:.2},{:.2}\n",
            point.connections,
            point.months,
            point.month_label.as_deref().unwrap_or_default(),
            point.revenue,
            point.expenses,
        ));
    }
    csv
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::solver::default_anchor_date;
    use crate::testkit::domain::sample_result;

    #[test]
    fn header_and_row_align() {
        let csv = CsvExporter.export(&sample_result()).expect("csv");
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].split(',').count(),
            lines[1].split(',').count(),
            "one value per column"
        );
        assert!(lines[0].starts_with("current_expenses,invoices_received,"));
        assert!(lines[1].starts_with("100000,20000,10000,70000,"));
    }

    #[test]
    fn date_column_is_human_readable() {
        let result = sample_result();
        let csv = CsvExporter.export(&result).expect("csv");

        assert!(csv.contains(&result.break_even_date));
    }

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape("March 2026"), "March 2026");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn projection_rows_follow_points() {
        let projection =
            Projection::build(&sample_result(), default_anchor_date(), 2000).expect("projection");
        let csv = projection_csv(&projection);
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("connections,months,month,revenue,expenses"));
        assert_eq!(lines.clone().count(), projection.points.len());
        assert!(lines
            .next()
            .is_some_and(|row| row.starts_with("0,0.0000,Aug 2025,0.00,70000.00")));
    }
}
