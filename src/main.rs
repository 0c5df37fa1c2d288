//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration once, and serves the Arcjet
//! tools over stdio. Any startup failure is fatal.

use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use arcjet_mcp_server::core::{Config, McpServer, Result, StdioTransport};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    if let Err(e) = run(config).await {
        error!("Fatal error in main(): {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config)?;

    info!("Server initialized with {} tools", server.list_tools().len());

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
