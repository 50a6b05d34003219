//! Building loggers from JSON configuration
//!
//! Run with: cargo run --example config_file

use console_logger_factory::prelude::*;

const CONFIGS: &[&str] = &[
    r#"{"kind": "format", "format": "[{0,-7}] ready"}"#,
    r#"{"kind": "color", "color": "darkcyan"}"#,
    r#"{"kind": "color", "color": "purple"}"#,
    r#"{"kind": "color"}"#,
    r#"{"kind": "combined", "color": "Magenta"}"#,
];

fn main() -> Result<()> {
    println!("=== Console Logger Factory - Config File Example ===\n");

    for json in CONFIGS {
        println!("{}", json);
        let config = match LoggerConfig::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                println!("   rejected: {}\n", e);
                continue;
            }
        };

        let factory = config.into_factory(Console::stdout());
        match factory.create_logger() {
            Ok(logger) => logger.log("service")?,
            Err(e) => println!("   {}", e),
        }
        println!();
    }

    println!("=== Example completed successfully! ===");

    Ok(())
}
