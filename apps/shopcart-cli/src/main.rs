//! # Shopcart Demo
//!
//! Builds a cart and prints its ticket.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from the environment
//! 3. Read items (built-in sample, or `SHOPCART_ITEMS_PATH`)
//! 4. Validate them into a cart
//! 5. Print the ticket, or its JSON summary, to stdout
//!
//! ## Usage
//! ```bash
//! cargo run -p shopcart-cli
//!
//! SHOPCART_ITEMS_PATH=./items.json SHOPCART_OUTPUT=json cargo run -p shopcart-cli
//!
//! RUST_LOG=shopcart=debug cargo run -p shopcart-cli
//! ```

mod config;
mod items;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, ShopcartConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = ShopcartConfig::load()?;
    info!(
        items_path = ?config.items_path,
        output = ?config.output,
        "Configuration loaded"
    );

    let specs = match &config.items_path {
        Some(path) => items::load_items(path)?,
        None => items::sample_items(),
    };
    let cart = items::build_cart(&specs)?;

    match config.output {
        OutputFormat::Table => println!("{}", cart.format_ticket()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cart.summary())?),
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=shopcart=debug` - Show every accepted item and the render
/// - Default: warnings, plus info from the shopcart crates
///
/// Logs go to stderr so stdout carries only the ticket.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shopcart=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
