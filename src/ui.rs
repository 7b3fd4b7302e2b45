//! Interactive UI for the standings board
//!
//! Owns the `StandingsState` container and the keyboard loop. The state is
//! replaced wholesale after a successful fetch cycle and left untouched on
//! failure, so the screen always shows the last good standings (or the empty
//! initial page before the first success).

use crate::config::Config;
use crate::constants::EVENT_POLL_MS;
use crate::data_fetcher::http_client::create_http_client_with_timeout;
use crate::data_fetcher::models::StandingsState;
use crate::data_fetcher::fetch_standings_model;
use crate::error::AppError;
use crate::teletext_ui::{is_wide_terminal, standings_page};
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{Clear, ClearType},
};
use reqwest::Client;
use std::io::stdout;
use std::time::Duration;
use tracing::{error, info};

/// Runs one fetch cycle against the standings service.
///
/// On success the state is replaced wholesale and any stale error banner is
/// cleared. On failure the state is left exactly as it was and the error is
/// recorded for display.
async fn run_fetch_cycle(
    client: &Client,
    config: &Config,
    state: &mut StandingsState,
    last_error: &mut Option<String>,
) {
    match fetch_standings_model(client, config).await {
        Ok((american_league, national_league)) => {
            state.update(american_league, national_league);
            *last_error = None;
            info!("Standings updated");
        }
        Err(e) => {
            error!("Error fetching standings data: {e}");
            *last_error = Some(format!("Error fetching standings: {e}"));
        }
    }
}

/// Runs the interactive standings UI.
///
/// Keys:
/// - `r` starts a new fetch cycle
/// - `q` quits
///
/// There is no automatic refresh; cycles run only at startup and on demand.
pub async fn run_interactive_ui(debug_mode: bool) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let mut state = StandingsState::default();
    let mut last_error: Option<String> = None;

    run_fetch_cycle(&client, &config, &mut state, &mut last_error).await;

    let mut needs_render = true;
    loop {
        if needs_render {
            let mut out = stdout();
            if !debug_mode {
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            let page = standings_page(&state, last_error.as_deref(), is_wide_terminal());
            page.render_buffered(&mut out)?;
            needs_render = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => break,
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        run_fetch_cycle(&client, &config, &mut state, &mut last_error).await;
                        needs_render = true;
                    }
                    _ => {}
                },
                Event::Resize(_, _) => needs_render = true,
                _ => {}
            }
        }
    }

    Ok(())
}
