//! Logger variants and the factories that build them

pub mod color;
pub mod combined;
pub mod format;

pub use color::{ColorLogger, ColorLoggerFactory};
pub use combined::{CombinedLogger, CombinedLoggerFactory};
pub use format::{FormatLogger, FormatLoggerFactory};

use crate::core::{FormatTemplate, LoggerError, Result};

/// Parse a configured format, reporting failures against `component`
fn parse_template(component: &str, format: &str) -> Result<FormatTemplate> {
    FormatTemplate::parse(format).map_err(|e| {
        LoggerError::config(component, format!("invalid format '{}': {}", format, e))
    })
}
