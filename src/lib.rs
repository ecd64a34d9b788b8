pub mod config;
pub mod period;
pub mod plural;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::PeriodNames;
pub use period::Period;
pub use plural::{Milli, Plurals};
pub use utils::error::{ParseErrorKind, PeriodError, Result};
