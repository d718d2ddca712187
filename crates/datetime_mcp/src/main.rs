use clap::Parser;
use tracing_subscriber::{self, EnvFilter};

mod cli;
mod core;
mod server;
mod transport;

use cli::Cli;
use server::DateTimeService;

/// Datetime MCP Server
///
/// Exposes current date/time and timezone queries as MCP tools and resources:
/// - Tools: get-current-time, get-current-timezone, get-time-in-timezone, list-timezones
/// - Resources: datetime://list and datetime://{timezone}
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-datetime
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging only if RUST_LOG is set; diagnostics go to stderr so
    // they never mix into the stdio protocol channel.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();

        tracing::info!(
            "Starting Datetime MCP server ({} transport)",
            if cli.sse { "sse" } else { "stdio" }
        );
    }

    let service = DateTimeService::new();
    let result = if cli.sse {
        transport::run_sse(service, cli.port, &cli.prefix).await
    } else {
        transport::run_stdio(service).await
    };

    if let Err(e) = result {
        if std::env::var("RUST_LOG").is_ok() {
            tracing::error!("Error running Datetime MCP server: {}", e);
        }
        return Err(e);
    }

    Ok(())
}
