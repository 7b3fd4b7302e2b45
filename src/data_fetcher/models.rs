use serde::{Deserialize, Deserializer, Serialize};

/// Raw payload returned by the standings service for one league.
///
/// Divisions arrive in service order and are kept in that order all the way
/// to the render model. Required fields are denied-by-default: a record
/// missing `wins`, `losses`, `winPercentage`, or `team.name` fails the whole
/// league's deserialization instead of producing a half-populated model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub records: Vec<DivisionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionRecord {
    pub division: DivisionRef,
    #[serde(rename = "teamRecords")]
    pub team_records: Vec<TeamRecordRaw>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionRef {
    /// Division identifier. The service has been observed sending this both
    /// as a JSON number and as a string; either form normalizes to a string.
    #[serde(deserialize_with = "deserialize_division_id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecordRaw {
    pub team: TeamRef,
    pub wins: u32,
    pub losses: u32,
    /// Winning percentage as reported by the service, in [0,1].
    /// Taken verbatim; never recomputed from wins/losses.
    #[serde(rename = "winPercentage")]
    pub win_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

fn deserialize_division_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(u64),
        Text(String),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Text(s) => s,
    })
}

/// One team's line in the render model.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
}

/// One division in the render model, teams ordered descending by `win_pct`.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionStandings {
    pub division_name: String,
    pub teams: Vec<TeamRecord>,
}

/// All divisions of one league, in the order the raw payload listed them.
pub type LeagueStandings = Vec<DivisionStandings>;

/// Render-ready standings for both leagues.
///
/// Starts empty and is replaced wholesale by [`StandingsState::update`] once
/// per successful fetch cycle. There is no partial update path: a failed
/// cycle leaves the previous contents untouched.
#[derive(Debug, Clone, Default)]
pub struct StandingsState {
    pub american_league: LeagueStandings,
    pub national_league: LeagueStandings,
}

impl StandingsState {
    /// Replaces both leagues together. The only mutation point of the state.
    pub fn update(&mut self, american_league: LeagueStandings, national_league: LeagueStandings) {
        self.american_league = american_league;
        self.national_league = national_league;
    }

    /// True until the first successful fetch cycle.
    pub fn is_empty(&self) -> bool {
        self.american_league.is_empty() && self.national_league.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_response_deserialization() {
        let json = r#"{
            "records": [
                {
                    "division": { "id": "201" },
                    "teamRecords": [
                        {
                            "team": { "name": "New York Yankees" },
                            "wins": 55,
                            "losses": 35,
                            "winPercentage": 0.611
                        }
                    ]
                }
            ]
        }"#;

        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].division.id, "201");
        assert_eq!(response.records[0].team_records.len(), 1);

        let team = &response.records[0].team_records[0];
        assert_eq!(team.team.name, "New York Yankees");
        assert_eq!(team.wins, 55);
        assert_eq!(team.losses, 35);
        assert_eq!(team.win_percentage, 0.611);
    }

    #[test]
    fn test_division_id_accepts_numbers_and_strings() {
        let from_number: DivisionRef = serde_json::from_str(r#"{ "id": 201 }"#).unwrap();
        let from_string: DivisionRef = serde_json::from_str(r#"{ "id": "201" }"#).unwrap();

        assert_eq!(from_number.id, "201");
        assert_eq!(from_string.id, "201");
    }

    #[test]
    fn test_missing_wins_fails_deserialization() {
        let json = r#"{
            "records": [
                {
                    "division": { "id": "201" },
                    "teamRecords": [
                        {
                            "team": { "name": "New York Yankees" },
                            "losses": 35,
                            "winPercentage": 0.611
                        }
                    ]
                }
            ]
        }"#;

        let result: Result<StandingsResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_win_percentage_fails_deserialization() {
        let json = r#"{
            "records": [
                {
                    "division": { "id": "201" },
                    "teamRecords": [
                        {
                            "team": { "name": "New York Yankees" },
                            "wins": 55,
                            "losses": 35
                        }
                    ]
                }
            ]
        }"#;

        let result: Result<StandingsResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_team_name_fails_deserialization() {
        let json = r#"{
            "records": [
                {
                    "division": { "id": "201" },
                    "teamRecords": [
                        {
                            "team": {},
                            "wins": 55,
                            "losses": 35,
                            "winPercentage": 0.611
                        }
                    ]
                }
            ]
        }"#;

        let result: Result<StandingsResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_records_field_fails_deserialization() {
        let result: Result<StandingsResponse, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_standings_state_starts_empty() {
        let state = StandingsState::default();
        assert!(state.is_empty());
        assert!(state.american_league.is_empty());
        assert!(state.national_league.is_empty());
    }

    #[test]
    fn test_standings_state_update_replaces_both_leagues() {
        let mut state = StandingsState::default();

        let al = vec![DivisionStandings {
            division_name: "AL East".to_string(),
            teams: vec![],
        }];
        let nl = vec![DivisionStandings {
            division_name: "NL West".to_string(),
            teams: vec![],
        }];
        state.update(al, nl);
        assert!(!state.is_empty());
        assert_eq!(state.american_league[0].division_name, "AL East");
        assert_eq!(state.national_league[0].division_name, "NL West");

        // A later cycle replaces prior contents wholesale, no merging
        state.update(
            vec![DivisionStandings {
                division_name: "AL Central".to_string(),
                teams: vec![],
            }],
            vec![],
        );
        assert_eq!(state.american_league.len(), 1);
        assert_eq!(state.american_league[0].division_name, "AL Central");
        assert!(state.national_league.is_empty());
    }
}
