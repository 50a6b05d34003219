//! Declarative logger configuration
//!
//! A [`LoggerConfig`] names one logger variant and carries the same optional
//! fields as its factory. Turning it into a factory never validates anything;
//! that still happens in [`LoggerFactory::create_logger`].
//!
//! ```json
//! {"kind": "combined", "format": "Error: {0}", "color": "Red"}
//! ```

use super::{
    color::ConsoleColor,
    console::Console,
    error::{LoggerError, Result},
    logger::LoggerFactory,
};
use crate::loggers::{ColorLoggerFactory, CombinedLoggerFactory, FormatLoggerFactory};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One logger variant and its optional settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LoggerConfig {
    Format {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    Color {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<ConsoleColor>,
    },
    Combined {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<ConsoleColor>,
    },
}

impl LoggerConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                path.display().to_string(),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Serialize back to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Factory for this variant, writing to `console`
    pub fn into_factory(self, console: Console) -> Box<dyn LoggerFactory> {
        match self {
            LoggerConfig::Format { format } => {
                let mut factory = FormatLoggerFactory::new().with_console(console);
                if let Some(format) = format {
                    factory = factory.with_format(format);
                }
                Box::new(factory)
            }
            LoggerConfig::Color { color } => {
                let mut factory = ColorLoggerFactory::new().with_console(console);
                if let Some(color) = color {
                    factory = factory.with_color(color);
                }
                Box::new(factory)
            }
            LoggerConfig::Combined { format, color } => {
                let mut factory = CombinedLoggerFactory::new().with_console(console);
                if let Some(format) = format {
                    factory = factory.with_format(format);
                }
                if let Some(color) = color {
                    factory = factory.with_color(color);
                }
                Box::new(factory)
            }
        }
    }
}
