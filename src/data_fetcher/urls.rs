//! URL building utilities for API endpoints

/// Builds a standings URL for one league.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `league_id` - The numeric league identifier (103 = American, 104 = National)
///
/// # Returns
/// * `String` - The complete standings URL
///
/// # Example
/// ```
/// use mlb_teletext::data_fetcher::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 103);
/// assert_eq!(url, "https://api.example.com/standings?ver=v1&leagueId=103");
/// ```
pub fn build_standings_url(api_domain: &str, league_id: u32) -> String {
    format!("{api_domain}/standings?ver=v1&leagueId={league_id}")
}
