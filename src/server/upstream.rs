//! Upstream Riot API URL builders and request forwarding
//!
//! Each proxy route maps to exactly one of these URLs. Account and match
//! lookups go to the region-routed domain; summoner, league and mastery
//! lookups go to the platform-routed domain. The API key travels in the
//! `X-Riot-Token` header and never appears in a URL.

use reqwest::Client;

use crate::constants::RECENT_MATCH_COUNT;
use crate::error::AppError;

/// Header carrying the API key on every upstream call.
pub const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Account lookup by Riot ID. The name segment may contain spaces and
/// non-ASCII characters; URL parsing percent-encodes them on send.
pub fn account_url(regional_domain: &str, game_name: &str, tag_line: &str) -> String {
    format!("{regional_domain}/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}")
}

/// Summoner lookup by PUUID.
pub fn summoner_by_puuid_url(platform_domain: &str, puuid: &str) -> String {
    format!("{platform_domain}/lol/summoner/v4/summoners/by-puuid/{puuid}")
}

/// Summoner lookup by encrypted summoner id.
pub fn summoner_url(platform_domain: &str, summoner_id: &str) -> String {
    format!("{platform_domain}/lol/summoner/v4/summoners/{summoner_id}")
}

/// Ranked entries lookup by encrypted summoner id.
pub fn league_url(platform_domain: &str, summoner_id: &str) -> String {
    format!("{platform_domain}/lol/league/v4/entries/by-summoner/{summoner_id}")
}

/// Recent match id list by PUUID. The window is pinned here so clients
/// cannot widen it.
pub fn match_ids_url(regional_domain: &str, puuid: &str) -> String {
    format!(
        "{regional_domain}/lol/match/v5/matches/by-puuid/{puuid}/ids?start=0&count={RECENT_MATCH_COUNT}"
    )
}

/// Match detail lookup by match id.
pub fn match_url(regional_domain: &str, match_id: &str) -> String {
    format!("{regional_domain}/lol/match/v5/matches/{match_id}")
}

/// Champion mastery lookup by PUUID.
pub fn mastery_url(platform_domain: &str, puuid: &str) -> String {
    format!("{platform_domain}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}")
}

/// Raw upstream response: the status to mirror and the body to relay.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Forwards one GET to the upstream API with the key attached. The body is
/// returned untouched whatever the status; transport failures surface as
/// errors for the handler to collapse to 500.
pub async fn forward(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<UpstreamResponse, AppError> {
    let response = client
        .get(url)
        .header(RIOT_TOKEN_HEADER, api_key)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            }
        })?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(AppError::ApiFetch)?;

    Ok(UpstreamResponse { status, body })
}
