//! Cumulative revenue and expense curves around the break-even point.
//!
//! The curves run from zero connections to 1.5 times the rounded break-even
//! count so the crossing sits roughly two thirds along the axis. Each point
//! carries both axes: connections and the month they are reached at the
//! solved rate.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::domain::money::{Amount, Months};
use crate::domain::result::BreakEvenResult;
use crate::domain::schedule::{self, SHORT_MONTH_YEAR_FORMAT};
use crate::error::InfeasibilityError;

/// How far past the break-even count the curves extend.
const AXIS_EXTENT: Decimal = dec!(1.5);

/// Number of labelled ticks targeted on the time axis.
const TIME_AXIS_TICKS: usize = 5;

/// One sample of the cumulative curves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurvePoint {
    pub connections: u64,
    pub months: Months,
    /// Month reached, e.g. `Mar 2026`; `None` past the calendar range.
    pub month_label: Option<String>,
    pub revenue: Amount,
    pub expenses: Amount,
}

/// Where the two curves cross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakEvenMarker {
    /// Unrounded connection count.
    pub connections: Decimal,
    pub months: Months,
    /// Revenue at the crossing.
    pub value: Amount,
    pub date: String,
}

/// Sampled curves plus the break-even marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub points: Vec<CurvePoint>,
    pub marker: BreakEvenMarker,
    /// Label every `tick_stride`-th point on the time axis.
    pub tick_stride: usize,
}

impl Projection {
    /// Sample the curves of `result`, keeping at most `max_points` points.
    ///
    /// When the axis holds more connections than `max_points`, points are
    /// taken at a fixed step and the last connection is always included.
    pub fn build(
        result: &BreakEvenResult,
        anchor: NaiveDate,
        max_points: usize,
    ) -> Result<Self, InfeasibilityError> {
        let last = (result.break_even_connections_rounded * AXIS_EXTENT)
            .trunc()
            .to_u64()
            .ok_or(InfeasibilityError::OutOfRange {
                quantity: "projection length",
            })?;

        let max_points = max_points.max(2) as u64;
        let step = if last >= max_points {
            last.div_ceil(max_points - 1)
        } else {
            1
        };

        let mut counts: Vec<u64> = (0..=last).step_by(step as usize).collect();
        if counts.last() != Some(&last) {
            counts.push(last);
        }

        let points = counts
            .into_iter()
            .map(|connections| point(result, anchor, connections))
            .collect::<Result<Vec<_>, _>>()?;

        let tick_stride = (points.len() / TIME_AXIS_TICKS).max(1);
        let marker = BreakEvenMarker {
            connections: result.break_even_connections,
            months: result.break_even_months,
            value: result.break_even_connections * result.avg_value_per_connection,
            date: result.break_even_date.clone(),
        };

        Ok(Self {
            points,
            marker,
            tick_stride,
        })
    }

    /// Points that carry a time-axis label.
    pub fn ticks(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter().step_by(self.tick_stride)
    }
}

fn point(
    result: &BreakEvenResult,
    anchor: NaiveDate,
    connections: u64,
) -> Result<CurvePoint, InfeasibilityError> {
    let count = Decimal::from(connections);
    let months = count
        .checked_div(result.connection_rate)
        .ok_or(InfeasibilityError::OutOfRange {
            quantity: "projection months",
        })?;
    let month_label = schedule::advance_whole_months(anchor, months)
        .map(|day| day.format(SHORT_MONTH_YEAR_FORMAT).to_string());

    let out_of_range = InfeasibilityError::OutOfRange {
        quantity: "projection amounts",
    };
    let revenue = count
        .checked_mul(result.avg_value_per_connection)
        .ok_or(out_of_range.clone())?;
    let expenses = count
        .checked_mul(result.total_cost_per_connection)
        .and_then(|cost| cost.checked_add(result.net_current_expenses))
        .ok_or(out_of_range)?;

    Ok(CurvePoint {
        connections,
        months,
        month_label,
        revenue,
        expenses,
    })
}
