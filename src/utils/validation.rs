use crate::plural::PLACEHOLDER;
use crate::utils::error::{PeriodError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 最後一個樣板是後備樣板，必須帶有數字佔位符
pub fn validate_fallback_placeholder(field_name: &str, templates: &[String]) -> Result<()> {
    match templates.last() {
        None => Ok(()),
        Some(last) if last.contains(PLACEHOLDER) => Ok(()),
        Some(last) => Err(PeriodError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!(
                "last template {:?} must contain the {} placeholder",
                last, PLACEHOLDER
            ),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PeriodError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}
