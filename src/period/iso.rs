use super::decompose::{split_hours_minutes_seconds, split_years_months};
use super::{Period, MILLI_DAYS_PER_WEEK};
use crate::plural::Milli;
use crate::utils::error::{ParseErrorKind, PeriodError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Writes the canonical ISO-8601 form, e.g. `P1Y2M25DT5H6M7.5S`. The zero period is `P0D`.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        let period = self.magnitude();

        f.write_str("P")?;

        if period.months != 0 {
            let (years, months) = split_years_months(period.months);
            if years != 0 {
                write!(f, "{}Y", years)?;
            }
            if months != 0 {
                write!(f, "{}M", Milli::from_thousandths(months))?;
            }
        }

        if period.days != 0 {
            // whole weeks only; a remainder prints everything as days
            if period.days % MILLI_DAYS_PER_WEEK == 0 {
                write!(f, "{}W", Milli::from_thousandths(period.days / 7))?;
            } else {
                write!(f, "{}D", Milli::from_thousandths(period.days))?;
            }
        }

        if period.millis != 0 {
            let (hours, minutes, seconds) = split_hours_minutes_seconds(period.millis);
            f.write_str("T")?;
            if hours != 0 {
                write!(f, "{}H", hours)?;
            }
            if minutes != 0 {
                write!(f, "{}M", minutes)?;
            }
            if seconds != 0 {
                write!(f, "{}S", Milli::from_thousandths(seconds))?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Months,
    Days,
    Millis,
}

/// Each designator with the field it feeds and the factor from thousandths of the unit.
const DATE_UNITS: [(char, Field, i64); 4] = [
    ('Y', Field::Months, 12),
    ('M', Field::Months, 1),
    ('W', Field::Days, 7),
    ('D', Field::Days, 1),
];

const TIME_UNITS: [(char, Field, i64); 3] = [
    ('H', Field::Millis, 3_600),
    ('M', Field::Millis, 60),
    ('S', Field::Millis, 1),
];

#[derive(Default)]
struct Fields {
    months: i64,
    days: i64,
    millis: i64,
}

impl Fields {
    fn add(&mut self, field: Field, value: i64) -> Option<()> {
        let slot = match field {
            Field::Months => &mut self.months,
            Field::Days => &mut self.days,
            Field::Millis => &mut self.millis,
        };
        *slot = slot.checked_add(value)?;
        Some(())
    }
}

impl Period {
    /// Parses `[+|-]P[nY][nM][nW][nD][T[nH][nM][nS]]`.
    ///
    /// Numbers may carry up to three fractional digits after `.` or `,`.
    /// Weeks and days add together into the day field.
    ///
    /// ```
    /// use period::Period;
    ///
    /// let p = Period::parse("P1W3DT1.5H").unwrap();
    /// assert_eq!(p.to_string(), "P10DT1H30M");
    /// assert!(Period::parse("P1M1Y").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        parse_iso(input).map_err(|kind| {
            tracing::debug!("Rejected period {:?}: {}", input, kind);
            PeriodError::parse(input, kind)
        })
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self> {
        Period::parse(s)
    }
}

fn parse_iso(input: &str) -> std::result::Result<Period, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let (negative, rest) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    let rest = rest
        .strip_prefix('P')
        .ok_or(ParseErrorKind::MissingDesignator)?;
    if rest.is_empty() {
        return Err(ParseErrorKind::NoComponents);
    }

    let mut fields = Fields::default();
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    scan_components(date_part, &DATE_UNITS, &mut fields)?;
    if let Some(time) = time_part {
        if time.is_empty() {
            return Err(ParseErrorKind::EmptyTimePart);
        }
        scan_components(time, &TIME_UNITS, &mut fields)?;
    }

    let Fields {
        months,
        days,
        millis,
    } = fields;
    let period = Period::from_parts(months, days, millis).map_err(|_| ParseErrorKind::Overflow)?;
    Ok(if negative { period.negate() } else { period })
}

fn scan_components(
    mut text: &str,
    units: &[(char, Field, i64)],
    fields: &mut Fields,
) -> std::result::Result<(), ParseErrorKind> {
    let mut next_unit = 0;
    while !text.is_empty() {
        let number_len = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .ok_or(ParseErrorKind::MissingUnit)?;
        let (number, tail) = text.split_at(number_len);
        let mut chars = tail.chars();
        let designator = chars.next().ok_or(ParseErrorKind::MissingUnit)?;

        let offset = units[next_unit..]
            .iter()
            .position(|&(d, _, _)| d == designator)
            .ok_or(ParseErrorKind::UnexpectedDesignator(designator))?;
        if number.is_empty() {
            return Err(ParseErrorKind::InvalidNumber);
        }
        let (_, field, factor) = units[next_unit + offset];
        next_unit += offset + 1;

        let value = parse_thousandths(number)?
            .checked_mul(factor)
            .ok_or(ParseErrorKind::Overflow)?;
        fields.add(field, value).ok_or(ParseErrorKind::Overflow)?;

        text = chars.as_str();
    }
    Ok(())
}

/// Reads `digits[(.|,)digits]` as thousandths.
fn parse_thousandths(number: &str) -> std::result::Result<i64, ParseErrorKind> {
    let (whole, frac) = match number.split_once(['.', ',']) {
        Some((whole, frac)) => (whole, frac),
        None => (number, ""),
    };
    let has_separator = whole.len() != number.len();
    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !frac.bytes().all(|b| b.is_ascii_digit())
        || (has_separator && frac.is_empty())
    {
        return Err(ParseErrorKind::InvalidNumber);
    }
    if frac.len() > 3 {
        return Err(ParseErrorKind::ExcessPrecision);
    }

    let whole: i64 = whole.parse().map_err(|_| ParseErrorKind::Overflow)?;
    let frac: i64 = if frac.is_empty() {
        0
    } else {
        let digits: i64 = frac.parse().map_err(|_| ParseErrorKind::InvalidNumber)?;
        digits * 10i64.pow(3 - frac.len() as u32)
    };

    whole
        .checked_mul(1_000)
        .and_then(|v| v.checked_add(frac))
        .ok_or(ParseErrorKind::Overflow)
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Period::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(months: i64, days: i64, millis: i64) -> Period {
        Period::from_parts(months, days, millis).unwrap()
    }

    #[test]
    fn test_zero_is_p0d() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::default().to_string(), "P0D");
    }

    #[test]
    fn test_omits_zero_components() {
        assert_eq!(p(12_000, 0, 0).to_string(), "P1Y");
        assert_eq!(p(2_000, 0, 0).to_string(), "P2M");
        assert_eq!(p(0, 3_000, 0).to_string(), "P3D");
        assert_eq!(p(0, 0, 3_600_000).to_string(), "PT1H");
        assert_eq!(p(0, 0, 60_000).to_string(), "PT1M");
        assert_eq!(p(0, 0, 1_000).to_string(), "PT1S");
        assert_eq!(p(0, 0, 3_601_000).to_string(), "PT1H1S");
    }

    #[test]
    fn test_weeks_only_when_divisible() {
        assert_eq!(p(0, 7_000, 0).to_string(), "P1W");
        assert_eq!(p(0, 21_000, 0).to_string(), "P3W");
        assert_eq!(p(0, 25_000, 0).to_string(), "P25D");
        assert_eq!(p(0, 7_500, 0).to_string(), "P7.5D");
    }

    #[test]
    fn test_fractions_print_exactly() {
        assert_eq!(p(1_500, 0, 0).to_string(), "P1.5M");
        assert_eq!(p(100, 0, 0).to_string(), "P0.1M");
        assert_eq!(p(12_001, 0, 0).to_string(), "P1Y0.001M");
        assert_eq!(p(0, 1_250, 0).to_string(), "P1.25D");
        assert_eq!(p(0, 0, 7_500).to_string(), "PT7.5S");
        assert_eq!(p(0, 0, 1).to_string(), "PT0.001S");
    }

    #[test]
    fn test_full_period() {
        let period = Period::new_ymd(1, 2, 25)
            .unwrap()
            .checked_add(Period::from_parts(0, 0, 5 * 3_600_000 + 6 * 60_000 + 7_500).unwrap())
            .unwrap();
        assert_eq!(period.to_string(), "P1Y2M25DT5H6M7.5S");
    }

    #[test]
    fn test_negative_prefix() {
        assert_eq!(p(-14_000, -3_000, -1_000).to_string(), "-P1Y2M3DT1S");
        assert_eq!(p(0, -14_000, 0).to_string(), "-P2W");
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(Period::parse("P1Y").unwrap(), p(12_000, 0, 0));
        assert_eq!(Period::parse("P2M").unwrap(), p(2_000, 0, 0));
        assert_eq!(Period::parse("P3W").unwrap(), p(0, 21_000, 0));
        assert_eq!(Period::parse("P4D").unwrap(), p(0, 4_000, 0));
        assert_eq!(Period::parse("PT5H").unwrap(), p(0, 0, 18_000_000));
        assert_eq!(Period::parse("PT6M").unwrap(), p(0, 0, 360_000));
        assert_eq!(Period::parse("PT7.5S").unwrap(), p(0, 0, 7_500));
        assert_eq!(Period::parse("PT7,5S").unwrap(), p(0, 0, 7_500));
    }

    #[test]
    fn test_parse_folds_units() {
        assert_eq!(Period::parse("P1.5Y").unwrap().to_string(), "P1Y6M");
        assert_eq!(Period::parse("P1W3D").unwrap().to_string(), "P10D");
        assert_eq!(Period::parse("P0.5W").unwrap().to_string(), "P3.5D");
        assert_eq!(Period::parse("PT0.5H").unwrap().to_string(), "PT30M");
        assert_eq!(Period::parse("PT90M").unwrap().to_string(), "PT1H30M");
        assert_eq!(Period::parse("P14M").unwrap().to_string(), "P1Y2M");
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(Period::parse("-P1D").unwrap(), p(0, -1_000, 0));
        assert_eq!(Period::parse("+P1D").unwrap(), p(0, 1_000, 0));
        assert_eq!(Period::parse("-P0D").unwrap(), Period::ZERO);
        assert_eq!(Period::parse("P0D").unwrap(), Period::ZERO);
        assert_eq!(Period::parse("PT0S").unwrap(), Period::ZERO);
    }

    #[test]
    fn test_parse_errors() {
        let kind = |s: &str| match Period::parse(s) {
            Err(PeriodError::Parse { kind, .. }) => kind,
            other => panic!("expected parse error for {:?}, got {:?}", s, other),
        };
        assert_eq!(kind(""), ParseErrorKind::Empty);
        assert_eq!(kind("1Y"), ParseErrorKind::MissingDesignator);
        assert_eq!(kind("P"), ParseErrorKind::NoComponents);
        assert_eq!(kind("-P"), ParseErrorKind::NoComponents);
        assert_eq!(kind("PT"), ParseErrorKind::EmptyTimePart);
        assert_eq!(kind("P1DT"), ParseErrorKind::EmptyTimePart);
        assert_eq!(kind("P1M1Y"), ParseErrorKind::UnexpectedDesignator('Y'));
        assert_eq!(kind("P1Y1Y"), ParseErrorKind::UnexpectedDesignator('Y'));
        assert_eq!(kind("P1H"), ParseErrorKind::UnexpectedDesignator('H'));
        assert_eq!(kind("PT1D"), ParseErrorKind::UnexpectedDesignator('D'));
        assert_eq!(kind("PT1HT1M"), ParseErrorKind::UnexpectedDesignator('T'));
        assert_eq!(kind("P1"), ParseErrorKind::MissingUnit);
        assert_eq!(kind("PY"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("P1.D"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("P.5D"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("P1.2.3D"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("P1.2345D"), ParseErrorKind::ExcessPrecision);
        assert_eq!(kind("P99999999999999999999D"), ParseErrorKind::Overflow);
        assert_eq!(kind("P9223372036854775Y"), ParseErrorKind::Overflow);
    }

    #[test]
    fn test_from_str() {
        let period: Period = "P1Y2M25DT5H6M7.5S".parse().unwrap();
        assert_eq!(period.to_string(), "P1Y2M25DT5H6M7.5S");
    }

    #[test]
    fn test_serde_as_string() {
        let period = Period::parse("-P2WT1.5S").unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"-P2WT1.5S\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
        assert!(serde_json::from_str::<Period>("\"P1X\"").is_err());
    }
}
