//! # Console Logger Factory
//!
//! Console message loggers produced through matching abstract factories.
//!
//! ## Variants
//!
//! - **Format**: renders each message through a `{0}` template
//! - **Color**: writes the message in a fixed foreground color
//! - **Combined**: both, with defaults for anything left unset
//!
//! The format and color factories refuse to build without their required
//! field; the combined factory never does.
//!
//! ```
//! use console_logger_factory::prelude::*;
//!
//! let (console, output) = Console::captured(ColorMode::Never);
//! let factory: Box<dyn LoggerFactory> = Box::new(
//!     CombinedLoggerFactory::new()
//!         .with_format("Error: {0}")
//!         .with_color(ConsoleColor::Red)
//!         .with_console(console),
//! );
//!
//! factory.create_logger()?.log("Test message")?;
//! assert_eq!(output.contents(), "Error: Test message\n");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CapturedOutput, ColorMode, Console, ConsoleColor, ConsoleMetrics, FormatTemplate, Logger,
        LoggerConfig, LoggerError, LoggerFactory, Result,
    };
    pub use crate::loggers::{
        ColorLogger, ColorLoggerFactory, CombinedLogger, CombinedLoggerFactory, FormatLogger,
        FormatLoggerFactory,
    };
}

pub use core::{
    CapturedOutput, ColorCursor, ColorMode, Console, ConsoleColor, ConsoleMetrics, FormatTemplate,
    Logger, LoggerConfig, LoggerError, LoggerFactory, Result, TemplateError, MAX_ALIGNMENT,
    RESET_SEQUENCE,
};
pub use loggers::{
    ColorLogger, ColorLoggerFactory, CombinedLogger, CombinedLoggerFactory, FormatLogger,
    FormatLoggerFactory,
};
