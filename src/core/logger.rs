//! Logger and factory abstractions

use super::{
    console::Console,
    error::{LoggerError, Result},
};

/// A console message logger
///
/// Implementors only provide [`Logger::emit`]; null-message rejection lives
/// in [`Logger::log_opt`] so every variant applies it the same way.
pub trait Logger: Send + Sync {
    /// Render an accepted message to the console
    fn emit(&self, message: &str) -> Result<()>;

    /// Console this logger writes to
    fn console(&self) -> &Console;

    /// Variant name, for diagnostics
    fn name(&self) -> &str;

    /// Log a message that may be absent
    ///
    /// `None` fails with [`LoggerError::InvalidArgument`] and writes nothing.
    fn log_opt(&self, message: Option<&str>) -> Result<()> {
        match message {
            Some(message) => self.emit(message),
            None => {
                self.console().metrics().record_rejected();
                Err(LoggerError::invalid_argument(
                    "message",
                    "Value cannot be null",
                ))
            }
        }
    }

    /// Log a message
    fn log(&self, message: &str) -> Result<()> {
        self.log_opt(Some(message))
    }
}

/// Builds a [`Logger`] after validating its configuration
pub trait LoggerFactory: Send + Sync {
    /// Validate the configuration and build a boxed logger
    fn create_logger(&self) -> Result<Box<dyn Logger>>;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::ColorMode;

    struct EchoLogger {
        console: Console,
    }

    impl Logger for EchoLogger {
        fn emit(&self, message: &str) -> Result<()> {
            self.console.write_line(message)
        }

        fn console(&self) -> &Console {
            &self.console
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_log_forwards_to_emit() {
        let (console, output) = Console::captured(ColorMode::Never);
        let logger = EchoLogger { console };
        logger.log("hello").unwrap();
        logger.log_opt(Some("")).unwrap();
        assert_eq!(output.contents(), "hello\n\n");
    }

    #[test]
    fn test_null_message_rejected() {
        let (console, output) = Console::captured(ColorMode::Never);
        let logger = EchoLogger { console };
        let err = logger.log_opt(None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(output.contents().is_empty());
        assert_eq!(logger.console().metrics().rejected_count(), 1);
    }

    #[test]
    fn test_trait_objects() {
        let (console, output) = Console::captured(ColorMode::Never);
        let logger: Box<dyn Logger> = Box::new(EchoLogger { console });
        logger.log("boxed").unwrap();
        assert_eq!(logger.name(), "echo");
        assert_eq!(output.lines(), vec!["boxed"]);
    }
}
