#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::plural::Plurals;
use crate::utils::error::Result;
use crate::utils::validation::{validate_fallback_placeholder, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// 單一樣板清單的最大長度
pub const MAX_TEMPLATES: usize = 16;

pub static PERIOD_YEAR_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["", "%v year", "%v years"]));
pub static PERIOD_MONTH_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["", "%v month", "%v months"]));
pub static PERIOD_WEEK_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["", "%v week", "%v weeks"]));
pub static PERIOD_DAY_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["%v days", "%v day", "%v days"]));
pub static PERIOD_HOUR_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["", "%v hour", "%v hours"]));
pub static PERIOD_MINUTE_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["", "%v minute", "%v minutes"]));
pub static PERIOD_SECOND_NAMES: LazyLock<Plurals> =
    LazyLock::new(|| Plurals::from_zero(["", "%v second", "%v seconds"]));

static ENGLISH: LazyLock<PeriodNames> = LazyLock::new(PeriodNames::english_with_weeks);

/// Unit names used by [`Period::format_with_names`](crate::Period::format_with_names).
///
/// Missing keys in a deserialized table take the English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodNames {
    #[serde(default = "default_years")]
    pub years: Plurals,
    #[serde(default = "default_months")]
    pub months: Plurals,
    #[serde(default = "default_weeks")]
    pub weeks: Plurals,
    #[serde(default = "default_days")]
    pub days: Plurals,
    #[serde(default = "default_hours")]
    pub hours: Plurals,
    #[serde(default = "default_minutes")]
    pub minutes: Plurals,
    #[serde(default = "default_seconds")]
    pub seconds: Plurals,
}

fn default_years() -> Plurals {
    PERIOD_YEAR_NAMES.clone()
}

fn default_months() -> Plurals {
    PERIOD_MONTH_NAMES.clone()
}

fn default_weeks() -> Plurals {
    PERIOD_WEEK_NAMES.clone()
}

fn default_days() -> Plurals {
    PERIOD_DAY_NAMES.clone()
}

fn default_hours() -> Plurals {
    PERIOD_HOUR_NAMES.clone()
}

fn default_minutes() -> Plurals {
    PERIOD_MINUTE_NAMES.clone()
}

fn default_seconds() -> Plurals {
    PERIOD_SECOND_NAMES.clone()
}

impl PeriodNames {
    /// 共用的英文預設表
    pub fn english() -> &'static PeriodNames {
        &ENGLISH
    }

    pub fn english_with_weeks() -> Self {
        Self {
            years: default_years(),
            months: default_months(),
            weeks: default_weeks(),
            days: default_days(),
            hours: default_hours(),
            minutes: default_minutes(),
            seconds: default_seconds(),
        }
    }

    /// Days are no longer folded into weeks when formatting.
    pub fn without_weeks(mut self) -> Self {
        self.weeks = Plurals::none();
        self
    }

    fn units(&self) -> [(&'static str, &Plurals); 7] {
        [
            ("names.years", &self.years),
            ("names.months", &self.months),
            ("names.weeks", &self.weeks),
            ("names.days", &self.days),
            ("names.hours", &self.hours),
            ("names.minutes", &self.minutes),
            ("names.seconds", &self.seconds),
        ]
    }
}

impl Default for PeriodNames {
    fn default() -> Self {
        Self::english_with_weeks()
    }
}

impl Validate for PeriodNames {
    fn validate(&self) -> Result<()> {
        for (field, plurals) in self.units() {
            validate_range(field, plurals.len(), 0, MAX_TEMPLATES)?;
            validate_fallback_placeholder(field, plurals.templates())?;
        }
        Ok(())
    }
}
