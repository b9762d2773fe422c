//! The search pipeline: a strictly ordered chain of proxy calls
//!
//! Each gating stage either produces the input the next stage needs or the
//! whole search aborts with the stage's error. Two stages fan out
//! concurrently (match details and participant ranks) and silently discard
//! individual failures; two stages are cosmetic (mastery, champion
//! metadata) and fall back to empty data instead of aborting.

use std::collections::HashMap;

use futures::future::join_all;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::constants::FALLBACK_DDRAGON_VERSION;
use crate::data_fetcher::fetch_utils::fetch;
use crate::data_fetcher::models::{
    Account, ChampionCatalog, ChampionList, ChampionMastery, LeagueEntry, Match, PlayerReport,
    RankSummary, RealmInfo, Summoner,
};
use crate::data_fetcher::processors::unique_summoner_ids;
use crate::data_fetcher::urls::{
    build_account_url, build_champion_data_url, build_league_url, build_mastery_url,
    build_realm_url, build_recent_matches_url, build_summoner_url,
};
use crate::error::AppError;

/// Splits a `"Name#TAG"` input into its halves. Whitespace around the whole
/// input is trimmed; the name may itself contain spaces.
pub fn parse_riot_id(input: &str) -> Result<(String, String), AppError> {
    let trimmed = input.trim();
    match trimmed.split_once('#') {
        Some((game_name, tag_line)) if !game_name.is_empty() && !tag_line.is_empty() => {
            Ok((game_name.to_string(), tag_line.to_string()))
        }
        _ => Err(AppError::invalid_riot_id(trimmed)),
    }
}

/// Runs the full search pipeline for one Riot ID and returns everything the
/// renderer needs. Stage order is load-bearing: the PUUID gates the profile,
/// the profile gates the ranked lookup, the match id list gates the detail
/// fan-out.
#[instrument(skip(client, config))]
pub async fn fetch_player_report(
    client: &Client,
    config: &Config,
    riot_id: &str,
) -> Result<PlayerReport, AppError> {
    let (game_name, tag_line) = parse_riot_id(riot_id)?;
    let proxy_base = config.proxy_base_url();

    info!("Resolving Riot ID {game_name}#{tag_line}");
    let account: Account =
        fetch(client, &build_account_url(&proxy_base, &game_name, &tag_line)).await?;

    info!("Fetching profile for PUUID {}", account.puuid);
    let summoner: Summoner =
        fetch(client, &build_summoner_url(&proxy_base, &account.puuid)).await?;

    info!("Fetching ranked entries for summoner {}", summoner.id);
    let league_entries: Vec<LeagueEntry> =
        fetch(client, &build_league_url(&proxy_base, &summoner.id)).await?;

    info!("Fetching recent match ids");
    let match_ids: Vec<String> =
        fetch(client, &build_recent_matches_url(&proxy_base, &account.puuid)).await?;

    let matches = fetch_match_details(client, &proxy_base, &match_ids).await;
    info!(
        "Fetched {} of {} match details",
        matches.len(),
        match_ids.len()
    );

    // Cosmetic stages from here on: failures degrade the page, not the search
    let mastery = fetch_champion_mastery(client, &proxy_base, &account.puuid).await;
    let player_ranks =
        fetch_participant_ranks(client, &proxy_base, &unique_summoner_ids(&matches)).await;
    let ddragon_version = fetch_ddragon_version(client, &config.ddragon_domain).await;
    let champions = fetch_champion_catalog(client, &config.ddragon_domain, &ddragon_version).await;

    Ok(PlayerReport {
        account,
        summoner,
        league_entries,
        matches,
        mastery,
        player_ranks,
        champions,
        ddragon_version,
    })
}

/// Fetches match details concurrently and joins on all of them. Failed
/// lookups are logged and dropped; the result never contains a placeholder.
pub async fn fetch_match_details(
    client: &Client,
    proxy_base: &str,
    match_ids: &[String],
) -> Vec<Match> {
    let futures = match_ids.iter().map(|match_id| {
        let url = crate::data_fetcher::urls::build_match_details_url(proxy_base, match_id);
        async move {
            match fetch::<Match>(client, &url).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    warn!("Discarding match {match_id}: {e}");
                    None
                }
            }
        }
    });

    join_all(futures).await.into_iter().flatten().collect()
}

/// Fetches the solo-queue standing for every roster member concurrently.
/// Failed lookups are dropped; the renderer falls back to Unranked for
/// missing keys.
async fn fetch_participant_ranks(
    client: &Client,
    proxy_base: &str,
    summoner_ids: &[String],
) -> HashMap<String, RankSummary> {
    let futures = summoner_ids.iter().map(|summoner_id| {
        let url = build_league_url(proxy_base, summoner_id);
        async move {
            match fetch::<Vec<LeagueEntry>>(client, &url).await {
                Ok(entries) => Some((summoner_id.clone(), RankSummary::from_entries(&entries))),
                Err(e) => {
                    warn!("Discarding rank lookup for {summoner_id}: {e}");
                    None
                }
            }
        }
    });

    join_all(futures).await.into_iter().flatten().collect()
}

async fn fetch_champion_mastery(
    client: &Client,
    proxy_base: &str,
    puuid: &str,
) -> Vec<ChampionMastery> {
    match fetch::<Vec<ChampionMastery>>(client, &build_mastery_url(proxy_base, puuid)).await {
        Ok(mastery) => mastery,
        Err(e) => {
            warn!("Champion mastery unavailable: {e}");
            Vec::new()
        }
    }
}

/// Resolves the current Data Dragon version, falling back to a pinned
/// version when the realm lookup fails.
async fn fetch_ddragon_version(client: &Client, ddragon_domain: &str) -> String {
    match fetch::<RealmInfo>(client, &build_realm_url(ddragon_domain)).await {
        Ok(realm) => realm.version,
        Err(e) => {
            warn!("Realm version unavailable, using {FALLBACK_DDRAGON_VERSION}: {e}");
            FALLBACK_DDRAGON_VERSION.to_string()
        }
    }
}

async fn fetch_champion_catalog(
    client: &Client,
    ddragon_domain: &str,
    version: &str,
) -> ChampionCatalog {
    match fetch::<ChampionList>(client, &build_champion_data_url(ddragon_domain, version)).await {
        Ok(list) => ChampionCatalog::from_list(&list),
        Err(e) => {
            warn!("Champion metadata unavailable, using raw champion ids: {e}");
            ChampionCatalog::default()
        }
    }
}
