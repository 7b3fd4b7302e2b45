// src/main.rs
mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;
mod teletext_ui;
mod ui;

use clap::Parser;
use cli::Args;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging to console and/or file depending on mode.
    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly.
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations before anything touches the network
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let _config = Config::load().await?;

    if args.once {
        // Quick view mode - just show the standings once and exit
        return commands::handle_once_command(&args).await;
    }

    app::run_interactive(&args).await
}
