use dotenvy::dotenv;

mod commands;
mod config;
mod error_mapper;
mod setup;

use commands::Command;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Inventory console entry point
///
/// Loads configuration, wires the adapters, and runs one command against the inventory API.
///
/// Layout:
/// - config/: API location and image limits
/// - setup/: Dependency injection
/// - commands/: Argument parsing and console output per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Parse the command line
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 6. Run command
    tracing::debug!(?command, "Running command");
    commands::run(command, &container).await
}
