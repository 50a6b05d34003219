//! Console output resource
//!
//! A [`Console`] owns the writer every logger renders to. The foreground
//! color is treated as state of that resource: it is only changed through a
//! [`ColorCursor`], which puts the default color back when released or
//! dropped, and the whole set/write/reset sequence runs under the console
//! lock so concurrent loggers cannot interleave colors.

use super::{
    color::ConsoleColor,
    error::{LoggerError, Result},
    metrics::ConsoleMetrics,
};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// SGR sequence restoring the terminal's default attributes
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// Whether a console emits color escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Follow `NO_COLOR` / `CLICOLOR` / `CLICOLOR_FORCE` and the target's tty status
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide for a target that is (or is not) attached to a terminal
    pub fn resolve(&self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => resolve_auto(|key| std::env::var(key).ok(), is_terminal),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// `"0"` means off, any other value means on
fn env_flag(value: Option<String>) -> Option<bool> {
    value.map(|v| v != "0")
}

/// Same precedence as `colored`'s environment handling, but against the
/// target stream instead of always stdout: `CLICOLOR_FORCE` beats `NO_COLOR`,
/// which beats `CLICOLOR` and tty detection.
fn resolve_auto(env: impl Fn(&str) -> Option<String>, is_terminal: bool) -> bool {
    if env_flag(env("CLICOLOR_FORCE")) == Some(true) {
        return true;
    }
    if env("NO_COLOR").is_some() {
        return false;
    }
    env_flag(env("CLICOLOR")).unwrap_or(true) && is_terminal
}

/// In-memory console target, readable after the fact
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written text split into lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Holds a foreground color on a writer until released
///
/// Dropping the cursor without calling [`ColorCursor::release`] still writes
/// the reset sequence; only the error is lost.
pub struct ColorCursor<'a, W: Write + ?Sized> {
    writer: &'a mut W,
    active: bool,
}

impl<'a, W: Write + ?Sized> ColorCursor<'a, W> {
    /// Switch `writer` to `color`. With `enabled == false` nothing is emitted.
    pub fn acquire(writer: &'a mut W, color: ConsoleColor, enabled: bool) -> io::Result<Self> {
        if enabled {
            writer.write_all(color.ansi_foreground().as_bytes())?;
        }
        Ok(Self {
            writer,
            active: enabled,
        })
    }

    /// Write the reset now, reporting any error
    pub fn release(mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            self.writer.write_all(RESET_SEQUENCE.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write + ?Sized> Write for ColorCursor<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + ?Sized> Drop for ColorCursor<'_, W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.writer.write_all(RESET_SEQUENCE.as_bytes());
        }
    }
}

/// Shared handle to a console writer
///
/// Cloning is cheap; clones write to the same target, share the lock and
/// the metrics.
#[derive(Clone)]
pub struct Console {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    use_colors: bool,
    is_terminal: bool,
    target: &'static str,
    metrics: Arc<ConsoleMetrics>,
}

impl Console {
    /// Console on standard output, colored when stdout is a terminal
    pub fn stdout() -> Self {
        let is_terminal = io::stdout().is_terminal();
        Self::with_terminal("stdout", io::stdout(), ColorMode::Auto, is_terminal)
    }

    /// Console on standard error, colored when stderr is a terminal
    pub fn stderr() -> Self {
        let is_terminal = io::stderr().is_terminal();
        Self::with_terminal("stderr", io::stderr(), ColorMode::Auto, is_terminal)
    }

    /// Console writing into memory, with the handle to read it back
    ///
    /// # Example
    ///
    /// ```
    /// use console_logger_factory::{ColorMode, Console};
    ///
    /// let (console, output) = Console::captured(ColorMode::Never);
    /// console.write_line("hello").unwrap();
    /// assert_eq!(output.contents(), "hello\n");
    /// ```
    pub fn captured(mode: ColorMode) -> (Self, CapturedOutput) {
        let output = CapturedOutput::new();
        (Self::from_writer("captured", output.clone(), mode), output)
    }

    /// Console on an arbitrary writer, which is never treated as a terminal
    pub fn from_writer<W: Write + Send + 'static>(
        target: &'static str,
        writer: W,
        mode: ColorMode,
    ) -> Self {
        Self::with_terminal(target, writer, mode, false)
    }

    fn with_terminal<W: Write + Send + 'static>(
        target: &'static str,
        writer: W,
        mode: ColorMode,
        is_terminal: bool,
    ) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self {
            writer: Arc::new(Mutex::new(writer)),
            use_colors: mode.resolve(is_terminal),
            is_terminal,
            target,
            metrics: Arc::new(ConsoleMetrics::new()),
        }
    }

    /// Override the color decision made at construction
    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.use_colors = mode.resolve(self.is_terminal);
        self
    }

    /// Whether color escape sequences are written
    pub fn colors_enabled(&self) -> bool {
        self.use_colors
    }

    /// Whether the target stream is attached to a terminal
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Counters shared by every clone of this console
    pub fn metrics(&self) -> &ConsoleMetrics {
        &self.metrics
    }

    /// Target name (`stdout`, `stderr`, `captured`, ...)
    pub fn name(&self) -> &str {
        self.target
    }

    /// Write `text` and a newline without touching the color
    pub fn write_line(&self, text: &str) -> Result<()> {
        self.write_line_with(None, text)
    }

    /// Write `text` in `color`, reset the color, then end the line
    pub fn write_colored_line(&self, color: ConsoleColor, text: &str) -> Result<()> {
        self.write_line_with(Some(color), text)
    }

    fn write_line_with(&self, color: Option<ConsoleColor>, text: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        match Self::write_locked(&mut **writer, color, text, self.use_colors) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed_write();
                Err(LoggerError::io_operation(
                    format!("writing to {}", self.target),
                    "console write failed",
                    e,
                ))
            }
        }
    }

    fn write_locked<W: Write + ?Sized>(
        writer: &mut W,
        color: Option<ConsoleColor>,
        text: &str,
        use_colors: bool,
    ) -> io::Result<()> {
        match color {
            Some(color) => {
                let mut cursor = ColorCursor::acquire(&mut *writer, color, use_colors)?;
                cursor.write_all(text.as_bytes())?;
                cursor.release()?;
            }
            None => writer.write_all(text.as_bytes())?,
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("target", &self.target)
            .field("use_colors", &self.use_colors)
            .field("is_terminal", &self.is_terminal)
            .finish_non_exhaustive()
    }
}
