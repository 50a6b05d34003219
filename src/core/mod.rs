//! Core types and traits

pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod template;

pub use color::ConsoleColor;
pub use config::LoggerConfig;
pub use console::{CapturedOutput, ColorCursor, ColorMode, Console, RESET_SEQUENCE};
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerFactory};
pub use metrics::ConsoleMetrics;
pub use template::{FormatTemplate, TemplateError, MAX_ALIGNMENT};
