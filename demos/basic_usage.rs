//! Basic factory usage
//!
//! Builds each logger variant through its factory and shows the missing
//! configuration policies side by side.
//!
//! Run with: cargo run --example basic_usage

use console_logger_factory::prelude::*;

fn main() -> Result<()> {
    println!("=== Console Logger Factory - Basic Usage Example ===\n");

    println!("1. One logger per factory:");
    let factories: Vec<Box<dyn LoggerFactory>> = vec![
        Box::new(FormatLoggerFactory::new().with_format("   [format] {0}")),
        Box::new(ColorLoggerFactory::new().with_color(ConsoleColor::Green)),
        Box::new(
            CombinedLoggerFactory::new()
                .with_format("   [combined] {0}")
                .with_color(ConsoleColor::Yellow),
        ),
    ];
    for factory in &factories {
        factory
            .create_logger()?
            .log(&format!("built by {}", factory.name()))?;
    }

    println!("\n2. Missing configuration:");
    match FormatLoggerFactory::new().create_logger() {
        Ok(_) => println!("   unexpected: format logger built without a format"),
        Err(e) => println!("   FormatLoggerFactory: {}", e),
    }
    match ColorLoggerFactory::new().create_logger() {
        Ok(_) => println!("   unexpected: color logger built without a color"),
        Err(e) => println!("   ColorLoggerFactory: {}", e),
    }
    let combined = CombinedLoggerFactory::new().build()?;
    println!(
        "   CombinedLoggerFactory: defaults to format '{}' and color {}",
        combined.format(),
        combined.color()
    );
    combined.log("   logged with defaults")?;

    println!("\n3. Null messages:");
    if let Err(e) = combined.log_opt(None) {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
