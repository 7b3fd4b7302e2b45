//! Standings transformation
//!
//! Pure mapping from a raw league payload to the render model. The only
//! reordering applied anywhere in the pipeline happens here: teams inside a
//! division are sorted descending by winning percentage, divisions keep
//! payload order.

use std::cmp::Ordering;

use tracing::info;

use crate::constants::UNKNOWN_DIVISION;
use crate::data_fetcher::divisions::division_name;
use crate::data_fetcher::models::{
    DivisionStandings, LeagueStandings, StandingsResponse, TeamRecord,
};

/// Transforms one league's raw payload into render-ready standings.
///
/// - Divisions are emitted in payload order, never resorted.
/// - Team records are extracted verbatim (the service's `winPercentage` is
///   authoritative; it is not recomputed from wins/losses).
/// - Teams are sorted by winning percentage descending. `sort_by` is stable,
///   so teams with equal percentages keep their payload order; there is no
///   secondary sort key.
/// - A division id missing from the name table resolves to the
///   "Unknown Division" sentinel and is logged at info level.
pub fn process_standings(response: &StandingsResponse) -> LeagueStandings {
    response
        .records
        .iter()
        .map(|record| {
            let division_name = match division_name(&record.division.id) {
                Some(name) => name.to_string(),
                None => {
                    info!(
                        "Division id {} not in name table, using sentinel label",
                        record.division.id
                    );
                    UNKNOWN_DIVISION.to_string()
                }
            };

            let mut teams: Vec<TeamRecord> = record
                .team_records
                .iter()
                .map(|team| TeamRecord {
                    name: team.team.name.clone(),
                    wins: team.wins,
                    losses: team.losses,
                    win_pct: team.win_percentage,
                })
                .collect();

            // NaN (which a broken feed could produce) compares as equal here,
            // so it can never panic the sort or reorder valid entries.
            teams.sort_by(|a, b| b.win_pct.partial_cmp(&a.win_pct).unwrap_or(Ordering::Equal));

            DivisionStandings {
                division_name,
                teams,
            }
        })
        .collect()
}
