//! MLB Standings Teletext Viewer Library
//!
//! This library provides functionality for fetching Major League Baseball
//! division standings and displaying them in a teletext-style format.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mlb_teletext::config::Config;
//! use mlb_teletext::data_fetcher::http_client::create_http_client_with_timeout;
//! use mlb_teletext::data_fetcher::{StandingsState, fetch_standings_model};
//! use mlb_teletext::error::AppError;
//! use mlb_teletext::teletext_ui::standings_page;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Fetch and transform both leagues in one cycle
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let (american_league, national_league) = fetch_standings_model(&client, &config).await?;
//!
//!     // Replace the render state wholesale
//!     let mut state = StandingsState::default();
//!     state.update(american_league, national_league);
//!
//!     // Render the standings board to stdout
//!     let page = standings_page(&state, None, true);
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod teletext_ui;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{fetch_standings, fetch_standings_model};
pub use data_fetcher::models::{
    DivisionStandings, LeagueStandings, StandingsResponse, StandingsState, TeamRecord,
};
pub use data_fetcher::processors::process_standings;
pub use error::AppError;
pub use teletext_ui::{TeletextPage, TeletextRow, standings_page};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
