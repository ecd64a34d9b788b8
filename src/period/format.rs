use super::decompose::{split_hours_minutes_seconds, split_years_months};
use super::{Period, MILLI_DAYS_PER_WEEK};
use crate::config::PeriodNames;
use crate::plural::Milli;

const SEPARATOR: &str = ", ";

impl Period {
    /// Human-readable form using the default English names.
    ///
    /// ```
    /// use period::Period;
    ///
    /// let p = Period::parse("P1Y2M25DT5H6M7.5S").unwrap();
    /// assert_eq!(
    ///     p.format(),
    ///     "1 year, 2 months, 3 weeks, 4 days, 5 hours, 6 minutes, 7.5 seconds"
    /// );
    /// ```
    pub fn format(&self) -> String {
        self.format_with_names(PeriodNames::english())
    }

    /// Human-readable form with the given unit names. The sign is dropped.
    ///
    /// A unit is left out whenever its templates produce an empty string.
    pub fn format_with_names(&self, names: &PeriodNames) -> String {
        let period = self.magnitude();
        let mut parts: Vec<String> = Vec::new();

        let (years, months) = split_years_months(period.months);
        push_non_blank(&mut parts, names.years.format(whole(years)));
        push_non_blank(&mut parts, names.months.format(milli(months)));

        if period.days > 0 || period.is_zero() {
            if names.weeks.is_empty() {
                push_non_blank(&mut parts, names.days.format(milli(period.days)));
            } else {
                let weeks = period.days / MILLI_DAYS_PER_WEEK;
                let days = period.days % MILLI_DAYS_PER_WEEK;
                if weeks > 0 {
                    push_non_blank(&mut parts, names.weeks.format_int(weeks));
                }
                if days > 0 || weeks == 0 {
                    push_non_blank(&mut parts, names.days.format(milli(days)));
                }
            }
        }

        let (hours, minutes, seconds) = split_hours_minutes_seconds(period.millis);
        push_non_blank(&mut parts, names.hours.format(whole(hours)));
        push_non_blank(&mut parts, names.minutes.format(whole(minutes)));
        push_non_blank(&mut parts, names.seconds.format(milli(seconds)));

        parts.join(SEPARATOR)
    }
}

fn milli(thousandths: i64) -> Milli {
    Milli::from_thousandths(thousandths)
}

// years and hours are bounded well below i64::MAX / 1000 by the field scale
fn whole(value: i64) -> Milli {
    milli(value * 1_000)
}

fn push_non_blank(parts: &mut Vec<String>, fragment: String) {
    if !fragment.is_empty() {
        parts.push(fragment);
    }
}
