// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use scout_portraits::config::Config;
use scout_portraits::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.version {
        return commands::handle_version_command();
    }

    // Config updates must work even when the saved file no longer validates
    if args.new_backend_url.is_some() || args.clear_backend_url {
        return commands::handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;

    // Maintenance commands print their own output and skip the log file
    let _guard = if args.is_maintenance() {
        None
    } else {
        let (log_file_path, guard) = logging::setup_logging(&args, Some(&config)).await?;
        tracing::info!("Logs are being written to: {log_file_path}");
        Some(guard)
    };

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.clear_cache {
        return commands::handle_clear_cache_command(&config).await;
    }

    commands::handle_lookup_command(&args, &config).await
}
