//! Fetch orchestration for the standings service
//!
//! One fetch cycle issues both league requests concurrently, waits for both
//! to settle, and only then builds the render model. There is no retry and no
//! response caching: a cycle either produces a complete pair of league
//! payloads or fails as a unit.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::{AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID};
use crate::data_fetcher::models::{LeagueStandings, StandingsResponse};
use crate::data_fetcher::processors::process_standings;
use crate::data_fetcher::urls::build_standings_url;
use crate::error::AppError;

/// Generic fetch with comprehensive error handling for HTTP status codes and
/// payload shape.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            500..=599 => {
                if status_code == 502 || status_code == 503 {
                    AppError::api_service_unavailable(status_code, reason, url)
                } else {
                    AppError::api_server_error(status_code, reason, url)
                }
            }
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            // Distinguish malformed JSON from an unexpected shape
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches the raw standings payload for a single league.
#[instrument(skip(client, config))]
pub async fn fetch_league_standings(
    client: &Client,
    config: &Config,
    league_id: u32,
) -> Result<StandingsResponse, AppError> {
    let url = build_standings_url(&config.api_domain, league_id);
    fetch(client, &url).await
}

/// Fetches both league payloads for one cycle.
///
/// Both requests are started before either is awaited and the cycle does not
/// resolve until both have settled. The first encountered failure (American
/// checked first) fails the cycle; no partial pair is ever returned.
///
/// # Returns
/// * `Result<(StandingsResponse, StandingsResponse), AppError>` - Payload
///   pair in (American, National) order, or the cycle's error
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
) -> Result<(StandingsResponse, StandingsResponse), AppError> {
    info!(
        "Starting fetch cycle for leagues {} and {}",
        AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID
    );

    let american = fetch_league_standings(client, config, AMERICAN_LEAGUE_ID);
    let national = fetch_league_standings(client, config, NATIONAL_LEAGUE_ID);
    let (american, national) = futures::future::join(american, national).await;

    let american = american?;
    let national = national?;

    info!(
        "Fetch cycle complete: {} AL divisions, {} NL divisions",
        american.records.len(),
        national.records.len()
    );
    Ok((american, national))
}

/// Runs one complete fetch-and-transform cycle.
///
/// # Returns
/// * `Result<(LeagueStandings, LeagueStandings), AppError>` - Render-ready
///   standings in (American, National) order, or the cycle's error
#[instrument(skip(client, config))]
pub async fn fetch_standings_model(
    client: &Client,
    config: &Config,
) -> Result<(LeagueStandings, LeagueStandings), AppError> {
    let (american, national) = fetch_standings(client, config).await?;
    Ok((process_standings(&american), process_standings(&national)))
}
