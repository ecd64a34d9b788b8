use anyhow::Result;
use period::{Period, PeriodError, PeriodNames, Plurals};
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_period() -> Result<Period> {
    // 1 year, 2 months, 3 weeks + 4 days, 5h 6m 7.5s
    let calendar = Period::new_ymd(1, 2, 3 * 7 + 4)?;
    let clock = Period::from_parts(0, 0, 5 * 3_600_000 + 6 * 60_000 + 7_500)?;
    Ok(calendar.checked_add(clock)?)
}

#[test]
fn test_end_to_end_iso() -> Result<()> {
    let period = sample_period()?;

    // 25 days is not a whole number of weeks, so days are printed
    assert_eq!(period.to_string(), "P1Y2M25DT5H6M7.5S");
    assert_eq!(period.negate().to_string(), "-P1Y2M25DT5H6M7.5S");
    assert_eq!(period.to_string().parse::<Period>()?, period);
    Ok(())
}

#[test]
fn test_end_to_end_human_readable() -> Result<()> {
    let period = sample_period()?;

    assert_eq!(
        period.format(),
        "1 year, 2 months, 3 weeks, 4 days, 5 hours, 6 minutes, 7.5 seconds"
    );
    assert_eq!(
        period.format_with_names(&PeriodNames::default().without_weeks()),
        "1 year, 2 months, 25 days, 5 hours, 6 minutes, 7.5 seconds"
    );
    Ok(())
}

#[test]
fn test_zero_period() {
    assert_eq!(Period::ZERO.to_string(), "P0D");
    assert_eq!(Period::ZERO.format(), "0 days");
}

#[test]
fn test_one_and_a_half_months() -> Result<()> {
    let period = Period::from_parts(1_500, 0, 0)?;
    assert_eq!(period.to_string(), "P1.5M");
    assert_eq!(period.format(), "1.5 months");
    Ok(())
}

#[test]
fn test_year_templates_delegate() -> Result<()> {
    let names = PeriodNames {
        years: Plurals::from_zero(["", "%v year", "%v years"]),
        ..PeriodNames::default()
    };
    let one_day = Period::new_ymd(0, 0, 1)?;

    assert_eq!(one_day.format_with_names(&names), "1 day");
    let one_year = Period::new_ymd(1, 0, 1)?;
    assert_eq!(one_year.format_with_names(&names), "1 year, 1 day");
    let two_years = Period::new_ymd(2, 0, 1)?;
    assert_eq!(two_years.format_with_names(&names), "2 years, 1 day");
    Ok(())
}

#[test]
fn test_names_file_drives_format() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[names]
years = ["", "%v an", "%v ans"]
weeks = []
days = ["%v jours", "%v jour", "%v jours"]
"#,
    )?;

    let names = PeriodNames::from_file(file.path())?;
    let period: Period = "P1Y10DT1H".parse()?;
    assert_eq!(period.format_with_names(&names), "1 an, 10 jours, 1 hour");
    Ok(())
}

#[test]
fn test_parse_error_reports_input() {
    let err = "P1X".parse::<Period>().unwrap_err();
    assert!(matches!(err, PeriodError::Parse { ref input, .. } if input == "P1X"));
    assert!(err.user_friendly_message().contains("P1X"));
}
