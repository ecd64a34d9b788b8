//! Exact integer splitting of the fixed-point fields.
//!
//! Both functions expect a non-negative magnitude; take [`Period::abs`](crate::Period::abs) first.

use super::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLI_MONTHS_PER_YEAR};

/// Splits thousandths of a month into whole years and the remaining thousandths of a month.
pub fn split_years_months(months_milli: i64) -> (i64, i64) {
    debug_assert!(months_milli >= 0, "negative months field: {}", months_milli);
    let years = months_milli / MILLI_MONTHS_PER_YEAR;
    (years, months_milli - years * MILLI_MONTHS_PER_YEAR)
}

/// Splits milliseconds into whole hours, whole minutes and the remaining milliseconds.
pub fn split_hours_minutes_seconds(millis: i64) -> (i64, i64, i64) {
    debug_assert!(millis >= 0, "negative millis field: {}", millis);
    let hours = millis / MILLIS_PER_HOUR;
    let rest = millis - hours * MILLIS_PER_HOUR;
    let minutes = rest / MILLIS_PER_MINUTE;
    (hours, minutes, rest - minutes * MILLIS_PER_MINUTE)
}
