//! Storefront agent binary
//!
//! Local stand-in for the hosting invocation mechanism: reads one
//! invocation event as JSON (stdin by default), handles it against
//! the seeded catalog, and prints the response envelope to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Event on stdin
//! echo '{"apiPath": "/searchProducts", "parameters": []}' | storefront-agent
//!
//! # Event from a file, pretty-printed response
//! storefront-agent --event invocation.json --pretty
//!
//! # Verbose dispatch logging
//! RUST_LOG=info storefront-agent --event invocation.json
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use storefront_core::Catalog;

#[derive(Debug, Parser)]
#[command(
    name = "storefront-agent",
    about = "Product catalog action group for an orchestration agent",
    after_help = "Examples:\n  echo '{\"apiPath\": \"/getProductDetails\", \"parameters\": [{\"name\": \"productId\", \"value\": \"prod-001\"}]}' | storefront-agent"
)]
struct Cli {
    #[arg(long, help = "Read the invocation event from a file instead of stdin")]
    event: Option<PathBuf>,
    #[arg(long, help = "Pretty-print the response envelope")]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let raw = match &cli.event {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading invocation event from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading invocation event from stdin")?;
            buffer
        }
    };

    let catalog = Catalog::seeded();
    let response = storefront_agent::handle_raw_invocation(&catalog, &raw);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    Ok(())
}
