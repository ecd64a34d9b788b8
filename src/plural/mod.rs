//! Plural-aware template selection.
//!
//! A [`Plurals`] value is an ordered list of templates. Entry `i` is used when
//! the value is exactly `i`; any other value uses the last entry. Every `%v`
//! in the chosen template is replaced by the number.

mod milli;

pub use milli::Milli;

use serde::{Deserialize, Serialize};

/// 數字佔位符
pub const PLACEHOLDER: &str = "%v";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plurals(Vec<String>);

impl Plurals {
    /// Templates matched against 0, 1, 2, ... with the last as fallback.
    pub fn from_zero<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Plurals(templates.into_iter().map(Into::into).collect())
    }

    /// An empty list. Formatting always yields `""`.
    pub fn none() -> Self {
        Plurals(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn templates(&self) -> &[String] {
        &self.0
    }

    pub fn format(&self, value: Milli) -> String {
        let Some(template) = self.select(value.as_whole()) else {
            return String::new();
        };
        template.replace(PLACEHOLDER, &value.to_string())
    }

    pub fn format_int(&self, value: i64) -> String {
        let Some(template) = self.select(Some(value)) else {
            return String::new();
        };
        template.replace(PLACEHOLDER, &value.to_string())
    }

    fn select(&self, whole: Option<i64>) -> Option<&str> {
        let last = self.0.last()?;
        let chosen = whole
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|i| self.0.get(i))
            .unwrap_or(last);
        Some(chosen.as_str())
    }
}
