//! Color-only logger

use crate::core::{Console, ConsoleColor, Logger, LoggerError, LoggerFactory, Result};

/// Writes each message verbatim in a fixed foreground color
#[derive(Debug, Clone)]
pub struct ColorLogger {
    color: ConsoleColor,
    console: Console,
}

impl ColorLogger {
    /// Logger writing in `color`
    pub fn new(color: ConsoleColor, console: Console) -> Self {
        Self { color, console }
    }

    /// Color every message is written in
    pub fn color(&self) -> ConsoleColor {
        self.color
    }
}

impl Logger for ColorLogger {
    fn emit(&self, message: &str) -> Result<()> {
        self.console.write_colored_line(self.color, message)
    }

    fn console(&self) -> &Console {
        &self.console
    }

    fn name(&self) -> &str {
        "ColorLogger"
    }
}

/// Factory for [`ColorLogger`]; the color is required
#[derive(Debug, Clone, Default)]
pub struct ColorLoggerFactory {
    color: Option<ConsoleColor>,
    console: Console,
}

impl ColorLoggerFactory {
    /// Component named in configuration errors
    pub const NAME: &'static str = "ColorLoggerFactory";

    /// Factory with no color; building fails until one is set
    pub fn new() -> Self {
        Self::default()
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

    /// Configured color, if any
    pub fn color(&self) -> Option<ConsoleColor> {
        self.color
    }

    /// Validate the configuration and build the concrete logger
    pub fn build(&self) -> Result<ColorLogger> {
        let color = self
            .color
            .ok_or_else(|| LoggerError::config(Self::NAME, "Color not specified"))?;
        Ok(ColorLogger::new(color, self.console.clone()))
    }
}

impl LoggerFactory for ColorLoggerFactory {
    fn create_logger(&self) -> Result<Box<dyn Logger>> {
        Ok(Box::new(self.build()?))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
