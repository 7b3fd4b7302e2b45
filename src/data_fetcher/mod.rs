pub mod api;
pub mod divisions;
pub mod http_client;
pub mod models;
pub mod processors;
pub mod urls;

pub use api::{fetch_standings, fetch_standings_model};
pub use http_client::create_http_client_with_timeout;
pub use models::{DivisionStandings, LeagueStandings, StandingsState, TeamRecord};
pub use processors::process_standings;
pub use urls::build_standings_url;
