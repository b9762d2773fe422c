//! Proxy route handlers
//!
//! Seven stateless GET handlers. Each validates its query parameters,
//! forwards exactly one upstream call with the API key attached, and either
//! relays the JSON body or mirrors the upstream status with a generic
//! `{"message": ...}` payload. No retries, no caching, no batching.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::server::ProxyState;
use crate::server::upstream::{self, UpstreamResponse};

/// Error payload shape shared by every handler.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProxyMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AccountQuery {
    #[serde(rename = "userNickname")]
    user_nickname: Option<String>,
    #[serde(rename = "tagLine")]
    tag_line: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PuuidQuery {
    puuid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummonerIdQuery {
    #[serde(rename = "summonerId")]
    summoner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchIdQuery {
    #[serde(rename = "matchId")]
    match_id: Option<String>,
}

/// Registers every proxy route on the actix service config.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/getPuuid", web::get().to(get_puuid))
        .route("/api/getSummonerInfo", web::get().to(get_summoner_info))
        .route("/api/getSummoner", web::get().to(get_summoner))
        .route("/api/getLeagueInfo", web::get().to(get_league_info))
        .route("/api/getRecentMatches", web::get().to(get_recent_matches))
        .route("/api/getMatchDetails", web::get().to(get_match_details))
        .route(
            "/api/getChampionMastery",
            web::get().to(get_champion_mastery),
        );
}

async fn get_puuid(
    state: web::Data<ProxyState>,
    query: web::Query<AccountQuery>,
) -> HttpResponse {
    let (Some(user_nickname), Some(tag_line)) =
        (query.user_nickname.as_deref(), query.tag_line.as_deref())
    else {
        return missing_parameter("Missing required parameters");
    };

    let url = upstream::account_url(&state.config.regional_domain, user_nickname, tag_line);
    relay(&state, &url, "PUUID").await
}

async fn get_summoner_info(
    state: web::Data<ProxyState>,
    query: web::Query<PuuidQuery>,
) -> HttpResponse {
    let Some(puuid) = query.puuid.as_deref() else {
        return missing_parameter("Missing PUUID parameter");
    };

    let url = upstream::summoner_by_puuid_url(&state.config.platform_domain, puuid);
    relay(&state, &url, "summoner info").await
}

async fn get_summoner(
    state: web::Data<ProxyState>,
    query: web::Query<SummonerIdQuery>,
) -> HttpResponse {
    let Some(summoner_id) = query.summoner_id.as_deref() else {
        return missing_parameter("Missing Summoner ID parameter");
    };

    let url = upstream::summoner_url(&state.config.platform_domain, summoner_id);
    relay(&state, &url, "summoner").await
}

async fn get_league_info(
    state: web::Data<ProxyState>,
    query: web::Query<SummonerIdQuery>,
) -> HttpResponse {
    let Some(summoner_id) = query.summoner_id.as_deref() else {
        return missing_parameter("Missing Summoner ID parameter");
    };

    let url = upstream::league_url(&state.config.platform_domain, summoner_id);
    relay(&state, &url, "league info").await
}

async fn get_recent_matches(
    state: web::Data<ProxyState>,
    query: web::Query<PuuidQuery>,
) -> HttpResponse {
    let Some(puuid) = query.puuid.as_deref() else {
        return missing_parameter("Missing PUUID parameter");
    };

    let url = upstream::match_ids_url(&state.config.regional_domain, puuid);
    relay(&state, &url, "recent matches").await
}

async fn get_match_details(
    state: web::Data<ProxyState>,
    query: web::Query<MatchIdQuery>,
) -> HttpResponse {
    let Some(match_id) = query.match_id.as_deref() else {
        return missing_parameter("Missing Match ID parameter");
    };

    let url = upstream::match_url(&state.config.regional_domain, match_id);
    relay(&state, &url, "match details").await
}

async fn get_champion_mastery(
    state: web::Data<ProxyState>,
    query: web::Query<PuuidQuery>,
) -> HttpResponse {
    let Some(puuid) = query.puuid.as_deref() else {
        return missing_parameter("Missing PUUID parameter");
    };

    let url = upstream::mastery_url(&state.config.platform_domain, puuid);
    relay(&state, &url, "champion mastery").await
}

fn missing_parameter(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ProxyMessage {
        message: message.to_string(),
    })
}

/// Forwards the upstream call and shapes the response:
/// - upstream 2xx: relay the body verbatim as JSON
/// - upstream non-2xx: mirror the status with a generic message
/// - transport failure: 500
async fn relay(state: &ProxyState, url: &str, what: &str) -> HttpResponse {
    match upstream::forward(&state.client, url, &state.config.api_key).await {
        Ok(UpstreamResponse { status, body }) if (200..300).contains(&status) => {
            info!("Relaying {what} response");
            HttpResponse::Ok()
                .content_type("application/json")
                .body(body)
        }
        Ok(UpstreamResponse { status, .. }) => {
            error!("Error fetching {what}: upstream returned {status} (URL: {url})");
            let mirrored =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(mirrored).json(ProxyMessage {
                message: format!("Error fetching {what}"),
            })
        }
        Err(e) => {
            error!("Error fetching {what}: {e} (URL: {url})");
            let mirrored = StatusCode::from_u16(e.mirrored_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(mirrored).json(ProxyMessage {
                message: format!("Error fetching {what}"),
            })
        }
    }
}
