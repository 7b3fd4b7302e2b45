use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::http_client::create_http_client_with_timeout;
use crate::data_fetcher::models::StandingsState;
use crate::data_fetcher::fetch_standings_model;
use crate::error::AppError;
use crate::teletext_ui::{is_wide_terminal, standings_page};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;

/// Handles the --list-config command.
///
/// Displays current configuration settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await?;

    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// Runs one fetch cycle, renders the standings (or an error page) to stdout,
/// and exits. The output stays in terminal history.
pub async fn handle_once_command(_args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    execute!(stdout(), SetTitle("MLB STANDINGS"))?;

    match fetch_standings_model(&client, &config).await {
        Ok((american_league, national_league)) => {
            let mut state = StandingsState::default();
            state.update(american_league, national_league);

            let mut page = standings_page(&state, None, is_wide_terminal());
            page.set_show_footer(false);
            page.render_buffered(&mut stdout())?;
        }
        Err(e) => {
            let state = StandingsState::default();
            let mut error_page = standings_page(
                &state,
                Some(&format!("Error fetching standings: {e}")),
                false,
            );
            error_page.set_show_footer(false);
            error_page.render_buffered(&mut stdout())?;
        }
    }
    println!();

    Ok(())
}
