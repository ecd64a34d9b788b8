use thiserror::Error;

/// ISO-8601 解析失敗的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    MissingDesignator,
    NoComponents,
    EmptyTimePart,
    UnexpectedDesignator(char),
    MissingUnit,
    InvalidNumber,
    ExcessPrecision,
    Overflow,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Empty => f.write_str("input is empty"),
            ParseErrorKind::MissingDesignator => f.write_str("expected 'P' designator"),
            ParseErrorKind::NoComponents => f.write_str("no components after 'P'"),
            ParseErrorKind::EmptyTimePart => f.write_str("no components after 'T'"),
            ParseErrorKind::UnexpectedDesignator(c) => {
                write!(f, "unexpected or out-of-order designator '{}'", c)
            }
            ParseErrorKind::MissingUnit => f.write_str("number without a unit designator"),
            ParseErrorKind::InvalidNumber => f.write_str("malformed number"),
            ParseErrorKind::ExcessPrecision => f.write_str("more than three fractional digits"),
            ParseErrorKind::Overflow => f.write_str("value out of range"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PeriodError {
    #[error("Cannot parse period {input:?}: {kind}")]
    Parse { input: String, kind: ParseErrorKind },

    #[error("Mixed signs in period fields (months={months}, days={days}, millis={millis})")]
    MixedSign { months: i64, days: i64, millis: i64 },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Configuration validation error in field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PeriodError {
    pub(crate) fn parse(input: &str, kind: ParseErrorKind) -> Self {
        PeriodError::Parse {
            input: input.to_string(),
            kind,
        }
    }

    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PeriodError::Parse { input, .. } => {
                format!("'{}' is not an ISO-8601 period such as P1Y2M3DT4H5M6S", input)
            }
            PeriodError::MixedSign { .. } => {
                "A period cannot mix positive and negative components".to_string()
            }
            PeriodError::Overflow { .. } => "The period is too large".to_string(),
            PeriodError::ConfigValidationError { field, .. } => {
                format!("Invalid names configuration in '{}'", field)
            }
            PeriodError::IoError(e) => format!("Cannot read file: {}", e),
            PeriodError::TomlError(_) => "The names file is not valid TOML".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PeriodError>;
