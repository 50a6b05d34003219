//! Integration tests for the logger factories
//!
//! These tests verify:
//! - Strict factories refuse missing configuration
//! - Every logger rejects a null message
//! - Console output for each variant
//! - Combined defaults
//! - Color state is reset between calls
//! - Configuration files

use console_logger_factory::prelude::*;
use std::fs;
use tempfile::TempDir;

fn all_factories(console: &Console) -> Vec<Box<dyn LoggerFactory>> {
    vec![
        Box::new(
            FormatLoggerFactory::new()
                .with_format("{0}")
                .with_console(console.clone()),
        ),
        Box::new(
            ColorLoggerFactory::new()
                .with_color(ConsoleColor::Red)
                .with_console(console.clone()),
        ),
        Box::new(CombinedLoggerFactory::new().with_console(console.clone())),
    ]
}

#[test]
fn test_strict_factories_require_configuration() {
    let format_err = FormatLoggerFactory::new().create_logger().err().unwrap();
    assert!(format_err.is_configuration());

    let color_err = ColorLoggerFactory::new().create_logger().err().unwrap();
    assert!(color_err.is_configuration());

    // The combined factory defaults instead
    assert!(CombinedLoggerFactory::new().create_logger().is_ok());
}

#[test]
fn test_null_message_rejected_by_every_logger() {
    let (console, output) = Console::captured(ColorMode::Always);

    for factory in all_factories(&console) {
        let logger = factory.create_logger().expect("factory should build");
        let err = logger.log_opt(None).unwrap_err();
        assert!(
            matches!(err, LoggerError::InvalidArgument { .. }),
            "{} accepted a null message",
            logger.name()
        );
    }

    assert!(output.contents().is_empty());
    assert_eq!(console.metrics().rejected_count(), 3);
    assert_eq!(console.metrics().lines_written(), 0);
}

#[test]
fn test_format_logger_output() {
    let (console, output) = Console::captured(ColorMode::Always);
    let logger = FormatLoggerFactory::new()
        .with_format("{0}")
        .with_console(console)
        .create_logger()
        .unwrap();

    logger.log("Test").unwrap();
    assert_eq!(output.contents(), "Test\n");
}

#[test]
fn test_color_logger_output() {
    let (console, output) = Console::captured(ColorMode::Always);
    let logger = ColorLoggerFactory::new()
        .with_color(ConsoleColor::Red)
        .with_console(console)
        .create_logger()
        .unwrap();

    logger.log("Test").unwrap();
    assert_eq!(output.contents(), "\x1b[91mTest\x1b[0m\n");
}

#[test]
fn test_combined_logger_output() {
    let (console, output) = Console::captured(ColorMode::Always);
    let logger = CombinedLoggerFactory::new()
        .with_format("Error: {0}")
        .with_color(ConsoleColor::Red)
        .with_console(console)
        .create_logger()
        .unwrap();

    logger.log("Test message").unwrap();
    assert!(output.contents().contains("Error: Test message"));
}

#[test]
fn test_combined_with_null_format_succeeds() {
    let (console, output) = Console::captured(ColorMode::Never);
    let logger = CombinedLoggerFactory::new()
        .with_color(ConsoleColor::Red)
        .with_console(console)
        .create_logger()
        .expect("missing format must not be an error");

    logger.log("Test").expect("defaults must apply");
    assert_eq!(output.contents(), "Test\n");
}

#[test]
fn test_logging_twice_is_idempotent() {
    let (console, output) = Console::captured(ColorMode::Always);
    let logger = CombinedLoggerFactory::new()
        .with_format("> {0}")
        .with_color(ConsoleColor::Magenta)
        .with_console(console.clone())
        .create_logger()
        .unwrap();

    logger.log("again").unwrap();
    logger.log("again").unwrap();

    let lines = output.lines();
    assert_eq!(lines, vec!["\x1b[95m> again\x1b[0m", "\x1b[95m> again\x1b[0m"]);

    // Nothing written afterwards inherits the color
    console.write_line("plain").unwrap();
    assert!(output.contents().ends_with("\x1b[0m\nplain\n"));
    assert_eq!(console.metrics().lines_written(), 3);
}

#[test]
fn test_no_escape_sequences_when_colors_disabled() {
    let (console, output) = Console::captured(ColorMode::Never);

    for factory in all_factories(&console) {
        factory.create_logger().unwrap().log("quiet").unwrap();
    }

    assert!(!output.contents().contains('\x1b'));
    assert_eq!(output.lines(), vec!["quiet", "quiet", "quiet"]);
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("logger.json");
    fs::write(
        &config_file,
        r#"{ "kind": "combined", "format": "[{0,-5}]", "color": "DarkYellow" }"#,
    )
    .expect("Failed to write config");

    let (console, output) = Console::captured(ColorMode::Always);
    let logger = LoggerConfig::from_file(&config_file)
        .expect("Failed to load config")
        .into_factory(console)
        .create_logger()
        .unwrap();

    logger.log("ok").unwrap();
    assert_eq!(output.contents(), "\x1b[33m[ok   ]\x1b[0m\n");
}

#[test]
fn test_config_file_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let missing = temp_dir.path().join("missing.json");
    let err = LoggerConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));

    let strict = temp_dir.path().join("strict.json");
    fs::write(&strict, r#"{ "kind": "color" }"#).expect("Failed to write config");
    let err = LoggerConfig::from_file(&strict)
        .unwrap()
        .into_factory(Console::stdout())
        .create_logger()
        .err()
        .unwrap();
    assert!(err.is_configuration());
}

#[test]
fn test_combined_exposes_resolved_configuration() {
    let logger = CombinedLoggerFactory::new()
        .with_format("{0}")
        .with_color(ConsoleColor::Blue)
        .build()
        .unwrap();

    assert_eq!(logger.format().as_str(), "{0}");
    assert_eq!(logger.color(), ConsoleColor::Blue);
}
