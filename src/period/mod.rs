//! The `Period` value type.
//!
//! A period holds three fixed-point fields:
//! - `months`: thousandths of a calendar month (years fold in at 12 months each)
//! - `days`: thousandths of a day (weeks fold in at 7 days each)
//! - `millis`: milliseconds (hours, minutes and seconds fold in)
//!
//! Calendar fields are never normalised into clock fields because months and
//! days have no fixed length. All three fields share one sign.

pub mod decompose;
mod format;
mod iso;

use crate::utils::error::{PeriodError, Result};
use std::ops::Neg;

pub(crate) const MILLI_MONTHS_PER_YEAR: i64 = 12_000;
pub(crate) const MILLI_DAYS_PER_WEEK: i64 = 7_000;
pub(crate) const MILLIS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60_000;
pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;

/// An elapsed time with separate calendar and clock magnitudes and a single sign.
///
/// ```
/// use period::Period;
///
/// let p = Period::new(1, 2, 25, 5, 6, 7).unwrap();
/// assert_eq!(p.to_string(), "P1Y2M25DT5H6M7S");
/// assert_eq!((-p).to_string(), "-P1Y2M25DT5H6M7S");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    months: i64,
    days: i64,
    millis: i64,
}

impl Period {
    pub const ZERO: Period = Period {
        months: 0,
        days: 0,
        millis: 0,
    };

    /// Builds a period from whole units. All non-zero arguments must share one sign.
    pub fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Result<Self> {
        let months = scaled_sum(
            &[(years, MILLI_MONTHS_PER_YEAR), (months, 1_000)],
            "Period::new",
        )?;
        let days = scaled_sum(&[(days, 1_000)], "Period::new")?;
        let millis = scaled_sum(
            &[
                (hours, MILLIS_PER_HOUR),
                (minutes, MILLIS_PER_MINUTE),
                (seconds, MILLIS_PER_SECOND),
            ],
            "Period::new",
        )?;
        Self::from_parts(months, days, millis)
    }

    pub fn new_ymd(years: i64, months: i64, days: i64) -> Result<Self> {
        Self::new(years, months, days, 0, 0, 0)
    }

    pub fn new_hms(hours: i64, minutes: i64, seconds: i64) -> Result<Self> {
        Self::new(0, 0, 0, hours, minutes, seconds)
    }

    /// Builds a period from its raw fields: thousandths of a month, thousandths
    /// of a day and milliseconds.
    ///
    /// ```
    /// use period::Period;
    ///
    /// let p = Period::from_parts(1_500, 0, 7_500).unwrap();
    /// assert_eq!(p.to_string(), "P1.5MT7.5S");
    /// assert!(Period::from_parts(1_000, -1_000, 0).is_err());
    /// ```
    pub fn from_parts(months: i64, days: i64, millis: i64) -> Result<Self> {
        if months == i64::MIN || days == i64::MIN || millis == i64::MIN {
            return Err(PeriodError::Overflow {
                operation: "Period::from_parts",
            });
        }
        let period = Period {
            months,
            days,
            millis,
        };
        if !period.is_sign_consistent() {
            return Err(PeriodError::MixedSign {
                months,
                days,
                millis,
            });
        }
        Ok(period)
    }

    fn is_sign_consistent(&self) -> bool {
        let fields = [self.months, self.days, self.millis];
        fields.iter().all(|&v| v >= 0) || fields.iter().all(|&v| v <= 0)
    }

    /// Thousandths of a month, years included.
    pub fn months_milli(&self) -> i64 {
        self.months
    }

    /// Thousandths of a day, weeks included.
    pub fn days_milli(&self) -> i64 {
        self.days
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }

    pub fn years(&self) -> i64 {
        self.months / MILLI_MONTHS_PER_YEAR
    }

    /// Whole months left after removing whole years.
    pub fn months(&self) -> i64 {
        (self.months % MILLI_MONTHS_PER_YEAR) / 1_000
    }

    pub fn weeks(&self) -> i64 {
        self.days / MILLI_DAYS_PER_WEEK
    }

    /// Total whole days, weeks included.
    pub fn days(&self) -> i64 {
        self.days / 1_000
    }

    /// Whole days left after removing whole weeks.
    pub fn modulo_days(&self) -> i64 {
        (self.days % MILLI_DAYS_PER_WEEK) / 1_000
    }

    pub fn hours(&self) -> i64 {
        self.millis / MILLIS_PER_HOUR
    }

    pub fn minutes(&self) -> i64 {
        (self.millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> i64 {
        (self.millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.millis == 0
    }

    pub fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    /// -1, 0 or 1.
    pub fn sign(&self) -> i32 {
        if self.months > 0 || self.days > 0 || self.millis > 0 {
            1
        } else if self.months < 0 || self.days < 0 || self.millis < 0 {
            -1
        } else {
            0
        }
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self
        }
    }

    pub fn negate(self) -> Self {
        Period {
            months: -self.months,
            days: -self.days,
            millis: -self.millis,
        }
    }

    /// Field-wise sum. Fails on overflow or if the result mixes signs.
    pub fn checked_add(self, other: Period) -> Result<Self> {
        let overflow = || PeriodError::Overflow {
            operation: "Period::checked_add",
        };
        Self::from_parts(
            self.months.checked_add(other.months).ok_or_else(overflow)?,
            self.days.checked_add(other.days).ok_or_else(overflow)?,
            self.millis.checked_add(other.millis).ok_or_else(overflow)?,
        )
    }

    pub fn checked_sub(self, other: Period) -> Result<Self> {
        self.checked_add(other.negate())
    }

    /// The non-negative magnitude that decomposition works on.
    fn magnitude(self) -> Self {
        debug_assert!(
            self.is_sign_consistent(),
            "period fields have mixed signs: {:?}",
            self
        );
        self.abs()
    }
}

impl Neg for Period {
    type Output = Period;

    fn neg(self) -> Period {
        self.negate()
    }
}

impl TryFrom<std::time::Duration> for Period {
    type Error = PeriodError;

    /// The whole duration goes into the clock field; sub-millisecond parts are dropped.
    fn try_from(duration: std::time::Duration) -> Result<Self> {
        let millis = i64::try_from(duration.as_millis()).map_err(|_| PeriodError::Overflow {
            operation: "Period::try_from(Duration)",
        })?;
        Self::from_parts(0, 0, millis)
    }
}

impl From<chrono::TimeDelta> for Period {
    /// The whole delta goes into the clock field, truncated toward zero to milliseconds.
    fn from(delta: chrono::TimeDelta) -> Self {
        Period {
            months: 0,
            days: 0,
            millis: delta.num_milliseconds(),
        }
    }
}

fn scaled_sum(terms: &[(i64, i64)], operation: &'static str) -> Result<i64> {
    terms
        .iter()
        .try_fold(0i64, |acc, &(value, factor)| {
            value.checked_mul(factor).and_then(|v| acc.checked_add(v))
        })
        .ok_or(PeriodError::Overflow { operation })
}
