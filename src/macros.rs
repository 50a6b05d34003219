//! Logging macro with `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use console_logger_factory::prelude::*;
//! use console_logger_factory::log;
//!
//! let (console, output) = Console::captured(ColorMode::Never);
//! let logger = FormatLoggerFactory::new()
//!     .with_format("[srv] {0}")
//!     .with_console(console)
//!     .build()?;
//!
//! let port = 8080;
//! log!(logger, "listening on port {}", port)?;
//! assert_eq!(output.contents(), "[srv] listening on port 8080\n");
//! # Ok::<(), LoggerError>(())
//! ```

/// Format the arguments and log the result, returning the logger's `Result`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::log(&$logger, &format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ColorMode, Console, ConsoleColor};
    use crate::loggers::ColorLoggerFactory;

    #[test]
    fn test_log_macro_formats() {
        let (console, output) = Console::captured(ColorMode::Never);
        let logger = ColorLoggerFactory::new()
            .with_color(ConsoleColor::Green)
            .with_console(console)
            .build()
            .unwrap();

        log!(logger, "{} + {} = {}", 1, 2, 1 + 2).unwrap();
        assert_eq!(output.contents(), "1 + 2 = 3\n");
    }

    #[test]
    fn test_log_macro_on_boxed_logger() {
        use crate::core::LoggerFactory;

        let (console, output) = Console::captured(ColorMode::Never);
        let logger = ColorLoggerFactory::new()
            .with_color(ConsoleColor::Green)
            .with_console(console)
            .create_logger()
            .unwrap();

        log!(*logger, "boxed {}", "call").unwrap();
        assert_eq!(output.lines(), vec!["boxed call"]);
    }
}
