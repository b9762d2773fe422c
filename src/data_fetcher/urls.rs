//! URL building utilities for the proxy endpoints and Data Dragon
//!
//! The dashboard speaks the proxy's wire protocol; these builders mirror
//! the query parameters the proxy validates. Data Dragon is public and
//! fetched directly.

/// Builds the account resolution URL for a Riot ID.
///
/// # Example
/// ```
/// use rift_teletext::data_fetcher::urls::build_account_url;
///
/// let url = build_account_url("http://127.0.0.1:8980", "Faker", "KR1");
/// assert_eq!(
///     url,
///     "http://127.0.0.1:8980/api/getPuuid?userNickname=Faker&tagLine=KR1"
/// );
/// ```
pub fn build_account_url(proxy_base: &str, game_name: &str, tag_line: &str) -> String {
    format!("{proxy_base}/api/getPuuid?userNickname={game_name}&tagLine={tag_line}")
}

/// Builds the profile URL for a resolved PUUID.
pub fn build_summoner_url(proxy_base: &str, puuid: &str) -> String {
    format!("{proxy_base}/api/getSummonerInfo?puuid={puuid}")
}

/// Builds the profile URL for an encrypted summoner id.
pub fn build_summoner_by_id_url(proxy_base: &str, summoner_id: &str) -> String {
    format!("{proxy_base}/api/getSummoner?summonerId={summoner_id}")
}

/// Builds the ranked entries URL for an encrypted summoner id.
pub fn build_league_url(proxy_base: &str, summoner_id: &str) -> String {
    format!("{proxy_base}/api/getLeagueInfo?summonerId={summoner_id}")
}

/// Builds the recent match id list URL for a PUUID. The match count is
/// pinned server-side.
pub fn build_recent_matches_url(proxy_base: &str, puuid: &str) -> String {
    format!("{proxy_base}/api/getRecentMatches?puuid={puuid}")
}

/// Builds the match detail URL for one match id.
///
/// # Example
/// ```
/// use rift_teletext::data_fetcher::urls::build_match_details_url;
///
/// let url = build_match_details_url("http://127.0.0.1:8980", "KR_7013199572");
/// assert_eq!(
///     url,
///     "http://127.0.0.1:8980/api/getMatchDetails?matchId=KR_7013199572"
/// );
/// ```
pub fn build_match_details_url(proxy_base: &str, match_id: &str) -> String {
    format!("{proxy_base}/api/getMatchDetails?matchId={match_id}")
}

/// Builds the champion mastery URL for a PUUID.
pub fn build_mastery_url(proxy_base: &str, puuid: &str) -> String {
    format!("{proxy_base}/api/getChampionMastery?puuid={puuid}")
}

/// Builds the realm URL carrying the current Data Dragon version.
pub fn build_realm_url(ddragon_domain: &str) -> String {
    format!("{ddragon_domain}/realms/kr.json")
}

/// Builds the champion metadata URL for a Data Dragon version.
///
/// # Example
/// ```
/// use rift_teletext::data_fetcher::urls::build_champion_data_url;
///
/// let url = build_champion_data_url("https://ddragon.leagueoflegends.com", "14.23.1");
/// assert_eq!(
///     url,
///     "https://ddragon.leagueoflegends.com/cdn/14.23.1/data/en_US/champion.json"
/// );
/// ```
pub fn build_champion_data_url(ddragon_domain: &str, version: &str) -> String {
    format!("{ddragon_domain}/cdn/{version}/data/en_US/champion.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_account_url() {
        assert_eq!(
            build_account_url("http://localhost:8980", "Hide on bush", "KR1"),
            "http://localhost:8980/api/getPuuid?userNickname=Hide on bush&tagLine=KR1"
        );
    }

    #[test]
    fn test_build_summoner_urls() {
        assert_eq!(
            build_summoner_url("http://localhost:8980", "puuid-1"),
            "http://localhost:8980/api/getSummonerInfo?puuid=puuid-1"
        );
        assert_eq!(
            build_summoner_by_id_url("http://localhost:8980", "summ-1"),
            "http://localhost:8980/api/getSummoner?summonerId=summ-1"
        );
    }

    #[test]
    fn test_build_league_url() {
        assert_eq!(
            build_league_url("http://localhost:8980", "summ-1"),
            "http://localhost:8980/api/getLeagueInfo?summonerId=summ-1"
        );
    }

    #[test]
    fn test_build_match_urls() {
        assert_eq!(
            build_recent_matches_url("http://localhost:8980", "puuid-1"),
            "http://localhost:8980/api/getRecentMatches?puuid=puuid-1"
        );
        assert_eq!(
            build_match_details_url("http://localhost:8980", "KR_7013"),
            "http://localhost:8980/api/getMatchDetails?matchId=KR_7013"
        );
    }

    #[test]
    fn test_build_mastery_url() {
        assert_eq!(
            build_mastery_url("http://localhost:8980", "puuid-1"),
            "http://localhost:8980/api/getChampionMastery?puuid=puuid-1"
        );
    }

    #[test]
    fn test_build_ddragon_urls() {
        assert_eq!(
            build_realm_url("https://ddragon.leagueoflegends.com"),
            "https://ddragon.leagueoflegends.com/realms/kr.json"
        );
        assert_eq!(
            build_champion_data_url("https://ddragon.leagueoflegends.com", "14.23.1"),
            "https://ddragon.leagueoflegends.com/cdn/14.23.1/data/en_US/champion.json"
        );
    }
}
