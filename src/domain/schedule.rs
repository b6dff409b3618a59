//! Calendar arithmetic for break-even dates.

use chrono::{Days, Months as CalendarMonths, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::money::Months;

/// Days counted for a fractional month.
const DAYS_PER_MONTH: Decimal = dec!(30);

/// Format used for the reported break-even date.
pub const MONTH_YEAR_FORMAT: &str = "%B %Y";

/// Format used for time-axis labels.
pub const SHORT_MONTH_YEAR_FORMAT: &str = "%b %Y";

/// Advance `anchor` by a fractional number of months.
///
/// Whole months are added as calendar months (clamping to month end), then
/// the fraction is converted at 30 days per month and rounded half to even.
/// Returns `None` for negative input or a date outside the calendar range.
#[must_use]
pub fn advance(anchor: NaiveDate, months: Months) -> Option<NaiveDate> {
    if months.is_sign_negative() {
        return None;
    }
    let whole = months.trunc().to_u32()?;
    let days = (months.fract() * DAYS_PER_MONTH).round().to_u64()?;

    anchor
        .checked_add_months(CalendarMonths::new(whole))?
        .checked_add_days(Days::new(days))
}

/// Advance `anchor` by whole months only, dropping the fraction.
#[must_use]
pub fn advance_whole_months(anchor: NaiveDate, months: Months) -> Option<NaiveDate> {
    if months.is_sign_negative() {
        return None;
    }
    anchor.checked_add_months(CalendarMonths::new(months.trunc().to_u32()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn whole_months_move_the_calendar() {
        assert_eq!(advance(date(2025, 8, 1), dec!(0)), Some(date(2025, 8, 1)));
        assert_eq!(advance(date(2025, 8, 1), dec!(7)), Some(date(2026, 3, 1)));
    }

    #[test]
    fn fraction_becomes_days() {
        // 0.5 * 30 = 15 days
        assert_eq!(advance(date(2025, 8, 1), dec!(2.5)), Some(date(2025, 10, 16)));
    }

    #[test]
    fn day_rounding_is_half_to_even() {
        // 0.05 * 30 = 1.5 -> 2, 0.15 * 30 = 4.5 -> 4
        assert_eq!(advance(date(2025, 8, 1), dec!(0.05)), Some(date(2025, 8, 3)));
        assert_eq!(advance(date(2025, 8, 1), dec!(0.15)), Some(date(2025, 8, 5)));
    }

    #[test]
    fn month_end_is_clamped() {
        assert_eq!(advance(date(2025, 1, 31), dec!(1)), Some(date(2025, 2, 28)));
    }

    #[test]
    fn formats_month_and_year() {
        let day = advance(date(2025, 8, 1), dec!(7.2)).expect("in range");
        assert_eq!(day.format(MONTH_YEAR_FORMAT).to_string(), "March 2026");
        assert_eq!(day.format(SHORT_MONTH_YEAR_FORMAT).to_string(), "Mar 2026");
    }

    #[test]
    fn rejects_negative_and_out_of_range() {
        assert_eq!(advance(date(2025, 8, 1), dec!(-1)), None);
        assert_eq!(advance(date(2025, 8, 1), dec!(100000000000)), None);
    }

    #[test]
    fn whole_months_ignore_fraction() {
        assert_eq!(
            advance_whole_months(date(2025, 8, 1), dec!(1.9)),
            Some(date(2025, 9, 1))
        );
    }
}
