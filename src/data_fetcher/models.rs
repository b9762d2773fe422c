//! Pass-through mirrors of the upstream API's JSON shapes, plus the
//! aggregate report one search produces.
//!
//! All entities are ephemeral: fetched per search, held in memory for
//! rendering, and discarded. Fields the renderer must tolerate missing
//! carry `#[serde(default)]`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::queues;

/// Account-V1 record resolved from a Riot ID. The `puuid` is the persistent
/// identifier every later lookup is keyed by.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

/// Summoner-V4 record: the profile behind a PUUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub revision_date: i64,
}

/// League-V4 entry: one queue-specific ranked standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    #[serde(default)]
    pub summoner_id: String,
    #[serde(default)]
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
}

/// Champion-Mastery-V4 entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMastery {
    pub champion_id: i64,
    #[serde(default)]
    pub champion_level: i32,
    #[serde(default)]
    pub champion_points: i64,
}

/// Match-V5 record: a complete snapshot of one finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub game_mode: String,
    /// Game length in seconds.
    #[serde(default)]
    pub game_duration: i64,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub summoner_id: String,
    #[serde(default)]
    pub champion_name: String,
    #[serde(default)]
    pub team_id: i64,
    /// TOP, JUNGLE, MIDDLE, BOTTOM or UTILITY; empty in non-rift modes.
    #[serde(default)]
    pub team_position: String,
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub gold_earned: i64,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(default)]
    pub win: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub team_id: i64,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub objectives: Objectives,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Objectives {
    #[serde(default)]
    pub baron: ObjectiveStat,
    #[serde(default)]
    pub champion: ObjectiveStat,
    #[serde(default)]
    pub dragon: ObjectiveStat,
    #[serde(default)]
    pub inhibitor: ObjectiveStat,
    #[serde(default)]
    pub tower: ObjectiveStat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveStat {
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub kills: i32,
}

/// Data Dragon realm record; only the version field is of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmInfo {
    #[serde(rename = "v")]
    pub version: String,
}

/// Data Dragon champion listing, keyed by champion identifier ("Aatrox").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChampionList {
    #[serde(default)]
    pub data: HashMap<String, ChampionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionEntry {
    pub id: String,
    /// Numeric champion key as a string, e.g. "266".
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
}

/// Champion name lookups built from the Data Dragon listing. Resolves both
/// the numeric ids mastery entries carry and the identifier strings match
/// participants carry.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    by_numeric: HashMap<i64, String>,
    by_id: HashMap<String, String>,
}

impl ChampionCatalog {
    pub fn from_list(list: &ChampionList) -> Self {
        let mut by_numeric = HashMap::new();
        let mut by_id = HashMap::new();
        for entry in list.data.values() {
            if let Ok(numeric) = entry.key.parse::<i64>() {
                by_numeric.insert(numeric, entry.name.clone());
            }
            by_id.insert(entry.id.clone(), entry.name.clone());
        }
        ChampionCatalog { by_numeric, by_id }
    }

    /// Display name for a numeric champion id (mastery entries).
    pub fn name_by_numeric(&self, key: i64) -> Option<&str> {
        self.by_numeric.get(&key).map(String::as_str)
    }

    /// Display name for a champion identifier, falling back to the raw
    /// identifier when the catalog is empty or the champion is unknown.
    pub fn display_name<'a>(&'a self, champion_id: &'a str) -> &'a str {
        self.by_id
            .get(champion_id)
            .map(String::as_str)
            .unwrap_or(champion_id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_numeric.is_empty() && self.by_id.is_empty()
    }
}

/// Solo-queue standing used for roster table rows. Players without a solo
/// entry render as Unranked, mirroring the missing-data fallback upstream.
#[derive(Debug, Clone)]
pub struct RankSummary {
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
}

impl Default for RankSummary {
    fn default() -> Self {
        RankSummary {
            tier: "Unranked".to_string(),
            rank: String::new(),
            league_points: 0,
        }
    }
}

impl RankSummary {
    /// Picks the solo-queue entry out of a player's league entries.
    pub fn from_entries(entries: &[LeagueEntry]) -> Self {
        entries
            .iter()
            .find(|entry| entry.queue_type == queues::RANKED_SOLO)
            .map(|entry| RankSummary {
                tier: entry.tier.clone(),
                rank: entry.rank.clone(),
                league_points: entry.league_points,
            })
            .unwrap_or_default()
    }

    /// Compact "TIER RANK NN LP" label for table cells.
    pub fn label(&self) -> String {
        if self.rank.is_empty() {
            self.tier.clone()
        } else {
            format!("{} {} {} LP", self.tier, self.rank, self.league_points)
        }
    }
}

/// Everything one search fetches, handed to the renderer as-is.
#[derive(Debug, Clone)]
pub struct PlayerReport {
    pub account: Account,
    pub summoner: Summoner,
    pub league_entries: Vec<LeagueEntry>,
    pub matches: Vec<Match>,
    pub mastery: Vec<ChampionMastery>,
    /// Solo-queue standing per participant summoner id, from the roster
    /// fan-out. Missing entries mean the lookup failed and was discarded.
    pub player_ranks: HashMap<String, RankSummary>,
    pub champions: ChampionCatalog,
    pub ddragon_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(entries: &[(&str, &str, &str)]) -> ChampionCatalog {
        let mut list = ChampionList::default();
        for (id, key, name) in entries {
            list.data.insert(
                id.to_string(),
                ChampionEntry {
                    id: id.to_string(),
                    key: key.to_string(),
                    name: name.to_string(),
                },
            );
        }
        ChampionCatalog::from_list(&list)
    }

    #[test]
    fn test_account_deserializes_camel_case() {
        let json = r#"{"puuid":"abc-123","gameName":"Faker","tagLine":"KR1"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.puuid, "abc-123");
        assert_eq!(account.game_name, "Faker");
        assert_eq!(account.tag_line, "KR1");
    }

    #[test]
    fn test_participant_tolerates_missing_fields() {
        // The renderer is defensive: absent stats become zero values
        let json = r#"{"puuid":"p1","championName":"Ahri","teamId":100}"#;
        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.kills, 0);
        assert_eq!(participant.deaths, 0);
        assert_eq!(participant.gold_earned, 0);
        assert_eq!(participant.team_position, "");
        assert!(!participant.win);
    }

    #[test]
    fn test_team_tolerates_missing_objectives() {
        let json = r#"{"teamId":200,"win":true}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.objectives.champion.kills, 0);
        assert!(!team.objectives.baron.first);
    }

    #[test]
    fn test_realm_info_version_field() {
        let json = r#"{"n":{"champion":"14.23.1"},"v":"14.23.1","cdn":"https://ddragon.leagueoflegends.com/cdn"}"#;
        let realm: RealmInfo = serde_json::from_str(json).unwrap();
        assert_eq!(realm.version, "14.23.1");
    }

    #[test]
    fn test_champion_catalog_lookups() {
        let catalog = catalog_with(&[
            ("Aatrox", "266", "Aatrox"),
            ("MonkeyKing", "62", "Wukong"),
        ]);

        assert_eq!(catalog.name_by_numeric(62), Some("Wukong"));
        assert_eq!(catalog.name_by_numeric(999), None);
        assert_eq!(catalog.display_name("MonkeyKing"), "Wukong");
        // Unknown champions fall back to the raw identifier
        assert_eq!(catalog.display_name("Ahri"), "Ahri");
    }

    #[test]
    fn test_champion_catalog_skips_bad_keys() {
        let catalog = catalog_with(&[("Aatrox", "not-a-number", "Aatrox")]);
        assert_eq!(catalog.name_by_numeric(266), None);
        assert_eq!(catalog.display_name("Aatrox"), "Aatrox");
    }

    #[test]
    fn test_rank_summary_picks_solo_queue() {
        let entries = vec![
            LeagueEntry {
                queue_type: "RANKED_FLEX_SR".to_string(),
                tier: "GOLD".to_string(),
                rank: "II".to_string(),
                league_points: 10,
                ..flex_entry()
            },
            LeagueEntry {
                queue_type: "RANKED_SOLO_5x5".to_string(),
                tier: "CHALLENGER".to_string(),
                rank: "I".to_string(),
                league_points: 1024,
                ..flex_entry()
            },
        ];

        let summary = RankSummary::from_entries(&entries);
        assert_eq!(summary.tier, "CHALLENGER");
        assert_eq!(summary.label(), "CHALLENGER I 1024 LP");
    }

    #[test]
    fn test_rank_summary_unranked_fallback() {
        let summary = RankSummary::from_entries(&[]);
        assert_eq!(summary.tier, "Unranked");
        assert_eq!(summary.label(), "Unranked");
    }

    fn flex_entry() -> LeagueEntry {
        LeagueEntry {
            summoner_id: "summ-1".to_string(),
            queue_type: String::new(),
            tier: String::new(),
            rank: String::new(),
            league_points: 0,
            wins: 0,
            losses: 0,
        }
    }
}
