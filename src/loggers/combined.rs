//! Format + color logger
//!
//! Unlike the single-purpose variants, missing configuration here is not an
//! error: the format falls back to `{0}` and the color to white. Defaults are
//! resolved once, when the logger is constructed.

use super::parse_template;
use crate::core::{Console, ConsoleColor, FormatTemplate, Logger, LoggerFactory, Result};

/// Color used when none is configured
pub const DEFAULT_COLOR: ConsoleColor = ConsoleColor::White;

/// Writes each message through a template, in a foreground color
#[derive(Debug, Clone)]
pub struct CombinedLogger {
    template: FormatTemplate,
    color: ConsoleColor,
    console: Console,
}

impl CombinedLogger {
    /// Name reported by [`Logger::name`]
    pub const NAME: &'static str = "CombinedLogger";

    /// Build directly, filling in defaults for anything unset
    ///
    /// # Example
    ///
    /// ```
    /// use console_logger_factory::prelude::*;
    ///
    /// let (console, output) = Console::captured(ColorMode::Never);
    /// let logger = CombinedLogger::new(Some("Hello {0}"), Some(ConsoleColor::Red), console)?;
    /// logger.log("world")?;
    /// assert_eq!(output.contents(), "Hello world\n");
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn new(format: Option<&str>, color: Option<ConsoleColor>, console: Console) -> Result<Self> {
        Self::resolve(Self::NAME, format, color, console)
    }

    /// The one place defaults are applied; errors are reported against `component`
    fn resolve(
        component: &str,
        format: Option<&str>,
        color: Option<ConsoleColor>,
        console: Console,
    ) -> Result<Self> {
        let template = match format {
            Some(format) => parse_template(component, format)?,
            None => FormatTemplate::identity(),
        };
        Ok(Self {
            template,
            color: color.unwrap_or(DEFAULT_COLOR),
            console,
        })
    }

    /// Resolved template (`{0}` when none was configured)
    pub fn format(&self) -> &FormatTemplate {
        &self.template
    }

    /// Resolved color (white when none was configured)
    pub fn color(&self) -> ConsoleColor {
        self.color
    }
}

impl Logger for CombinedLogger {
    fn emit(&self, message: &str) -> Result<()> {
        self.console
            .write_colored_line(self.color, &self.template.render(message))
    }

    fn console(&self) -> &Console {
        &self.console
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Factory for [`CombinedLogger`]; every field is optional
#[derive(Debug, Clone, Default)]
pub struct CombinedLoggerFactory {
    format: Option<String>,
    color: Option<ConsoleColor>,
    console: Console,
}

impl CombinedLoggerFactory {
    /// Component named in configuration errors
    pub const NAME: &'static str = "CombinedLoggerFactory";

    /// Factory with nothing configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Template applied to every message
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Foreground color for every message
    #[must_use]
    pub fn with_color(mut self, color: ConsoleColor) -> Self {
        self.color = Some(color);
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

    /// Configured color, if any
    pub fn color(&self) -> Option<ConsoleColor> {
        self.color
    }

    /// Fails only for a malformed format; unset fields get defaults
    pub fn build(&self) -> Result<CombinedLogger> {
        CombinedLogger::resolve(
            Self::NAME,
            self.format.as_deref(),
            self.color,
            self.console.clone(),
        )
    }
}

impl LoggerFactory for CombinedLoggerFactory {
    fn create_logger(&self) -> Result<Box<dyn Logger>> {
        Ok(Box::new(self.build()?))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
