//! Occupancy bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p occupancy-bot
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use occupancy_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so load it first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Bot stopped with an error");
        std::process::exit(e.exit_code());
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        roster = %config.roster.path.display(),
        "Starting occupancy bot..."
    );

    occupancy_bot::app::run(config).await?;

    info!("Occupancy bot stopped");
    Ok(())
}
