//! Format-only logger

use super::parse_template;
use crate::core::{Console, FormatTemplate, Logger, LoggerError, LoggerFactory, Result};

/// Writes each message through a [`FormatTemplate`], without color
#[derive(Debug, Clone)]
pub struct FormatLogger {
    template: FormatTemplate,
    console: Console,
}

impl FormatLogger {
    /// Logger rendering through an already parsed template
    pub fn new(template: FormatTemplate, console: Console) -> Self {
        Self { template, console }
    }

    /// Template every message goes through
    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }
}

impl Logger for FormatLogger {
    fn emit(&self, message: &str) -> Result<()> {
        self.console.write_line(&self.template.render(message))
    }

    fn console(&self) -> &Console {
        &self.console
    }

    fn name(&self) -> &str {
        "FormatLogger"
    }
}

/// Factory for [`FormatLogger`]; the format is required
///
/// # Example
///
/// ```
/// use console_logger_factory::prelude::*;
///
/// let (console, output) = Console::captured(ColorMode::Never);
/// let logger = FormatLoggerFactory::new()
///     .with_format("[app] {0}")
///     .with_console(console)
///     .create_logger()?;
///
/// logger.log("started")?;
/// assert_eq!(output.contents(), "[app] started\n");
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatLoggerFactory {
    format: Option<String>,
    console: Console,
}

impl FormatLoggerFactory {
    /// Component named in configuration errors
    pub const NAME: &'static str = "FormatLoggerFactory";

    /// Factory with no format; building fails until one is set
    pub fn new() -> Self {
        Self::default()
    }

    /// Template applied to every message
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Console the built loggers write to
    #[must_use]
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Configured format, if any
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Validate the configuration and build the concrete logger
    pub fn build(&self) -> Result<FormatLogger> {
        let format = self
            .format
            .as_deref()
            .ok_or_else(|| LoggerError::config(Self::NAME, "Format not specified"))?;
        let template = parse_template(Self::NAME, format)?;
        Ok(FormatLogger::new(template, self.console.clone()))
    }
}

impl LoggerFactory for FormatLoggerFactory {
    fn create_logger(&self) -> Result<Box<dyn Logger>> {
        Ok(Box::new(self.build()?))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
