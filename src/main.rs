//! Demonstration entry point
//!
//! With no arguments, logs `world ♥` through a red `Hello {0}` combined
//! logger. With `<config.json> [message]`, builds the factory described by
//! the configuration file instead.

use console_logger_factory::prelude::*;
use std::process::ExitCode;

const DEFAULT_MESSAGE: &str = "world ♥";

/// Build one logger from `args` (already past the program name) and log one
/// message to `console`
fn run(mut args: impl Iterator<Item = String>, console: Console) -> Result<()> {
    let factory: Box<dyn LoggerFactory> = match args.next() {
        Some(path) => LoggerConfig::from_file(path)?.into_factory(console),
        None => Box::new(
            CombinedLoggerFactory::new()
                .with_format("Hello {0}")
                .with_color(ConsoleColor::Red)
                .with_console(console),
        ),
    };
    let message = args.next().unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    let logger = factory.create_logger()?;
    logger.log(&message)
}

fn main() -> ExitCode {
    match run(std::env::args().skip(1), Console::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn write_config(dir: &Path, json: &str) -> String {
        let path = dir.join("logger.json");
        fs::write(&path, json).expect("Failed to write config");
        path.display().to_string()
    }

    #[test]
    fn test_default_logs_red_greeting() {
        let (console, output) = Console::captured(ColorMode::Always);
        run(args(&[]), console).unwrap();
        assert_eq!(output.contents(), "\x1b[91mHello world ♥\x1b[0m\n");
    }

    #[test]
    fn test_config_file_with_custom_message() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(temp_dir.path(), r#"{"kind":"format","format":"> {0}"}"#);

        let (console, output) = Console::captured(ColorMode::Always);
        run(args(&[&path, "custom"]), console).unwrap();
        assert_eq!(output.contents(), "> custom\n");
    }

    #[test]
    fn test_config_file_without_message_uses_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(temp_dir.path(), r#"{"kind":"color","color":"Blue"}"#);

        let (console, output) = Console::captured(ColorMode::Always);
        run(args(&[&path]), console).unwrap();
        assert_eq!(output.contents(), "\x1b[94mworld ♥\x1b[0m\n");
    }

    #[test]
    fn test_incomplete_config_is_configuration_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(temp_dir.path(), r#"{"kind":"color"}"#);

        let (console, output) = Console::captured(ColorMode::Always);
        let err = run(args(&[&path, "ignored"]), console).unwrap_err();
        assert!(err.is_configuration());
        assert!(output.contents().is_empty());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("absent.json").display().to_string();

        let (console, _output) = Console::captured(ColorMode::Never);
        let err = run(args(&[&path]), console).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
