//! Derived statistics computed from fetched match records
//!
//! Everything here is a pure function over one `Match`; nothing is stored.
//! Division-by-zero cases follow the upstream display conventions: zero team
//! kills means 0% participation, zero deaths means a "Perfect" ratio.

use std::collections::HashMap;
use std::fmt;

use crate::constants::{positions, teams};
use crate::data_fetcher::models::{Match, Participant, Team};

/// Title badge for the participant with the most kills.
pub const TITLE_MOST_KILLS: &str = "RAMPAGE";
/// Title badge for the participant with the most deaths.
pub const TITLE_MOST_DEATHS: &str = "CANNONBALL";
/// Title badge for the participant with the most assists.
pub const TITLE_MOST_ASSISTS: &str = "TEAM SPIRIT";

/// Kill participation as a whole percentage:
/// `round((kills + assists) / team_champion_kills * 100)`, 0 when the team
/// recorded no champion kills.
pub fn kill_participation(kills: i32, assists: i32, team_champion_kills: i32) -> u32 {
    if team_champion_kills <= 0 {
        return 0;
    }
    let ratio = f64::from(kills + assists) / f64::from(team_champion_kills);
    (ratio * 100.0).round() as u32
}

/// KDA ratio of a participant. Deathless games are reported as Perfect
/// rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KdaRatio {
    Perfect,
    Ratio(f64),
}

impl KdaRatio {
    /// Sort key: Perfect games rank above any finite ratio.
    pub fn sort_value(&self) -> f64 {
        match self {
            KdaRatio::Perfect => f64::INFINITY,
            KdaRatio::Ratio(value) => *value,
        }
    }
}

impl fmt::Display for KdaRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdaRatio::Perfect => write!(f, "Perfect"),
            KdaRatio::Ratio(value) => write!(f, "{value:.2}"),
        }
    }
}

/// Computes the KDA ratio for one participant.
pub fn kda_ratio(participant: &Participant) -> KdaRatio {
    if participant.deaths > 0 {
        KdaRatio::Ratio(
            f64::from(participant.kills + participant.assists) / f64::from(participant.deaths),
        )
    } else {
        KdaRatio::Perfect
    }
}

/// Splits participants into blue side (100) and red side (200) rosters,
/// preserving API order.
pub fn split_teams(participants: &[Participant]) -> (Vec<&Participant>, Vec<&Participant>) {
    let blue = participants
        .iter()
        .filter(|p| p.team_id == teams::BLUE_SIDE)
        .collect();
    let red = participants
        .iter()
        .filter(|p| p.team_id == teams::RED_SIDE)
        .collect();
    (blue, red)
}

/// Champion kills recorded for a team, from the team objectives block.
pub fn team_champion_kills(match_teams: &[Team], team_id: i64) -> i32 {
    match_teams
        .iter()
        .find(|team| team.team_id == team_id)
        .map(|team| team.objectives.champion.kills)
        .unwrap_or(0)
}

/// Whether the given team won the match.
pub fn team_won(match_teams: &[Team], team_id: i64) -> bool {
    match_teams
        .iter()
        .find(|team| team.team_id == team_id)
        .map(|team| team.win)
        .unwrap_or(false)
}

/// Objective counts for the chart panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectiveCounts {
    pub tower: i32,
    pub dragon: i32,
    pub baron: i32,
    pub inhibitor: i32,
}

impl ObjectiveCounts {
    pub fn from_team(team: &Team) -> Self {
        ObjectiveCounts {
            tower: team.objectives.tower.kills,
            dragon: team.objectives.dragon.kills,
            baron: team.objectives.baron.kills,
            inhibitor: team.objectives.inhibitor.kills,
        }
    }

    /// (label, count) pairs in display order.
    pub fn labelled(&self) -> [(&'static str, i32); 4] {
        [
            ("TOWER", self.tower),
            ("DRAGON", self.dragon),
            ("BARON", self.baron),
            ("INHIB", self.inhibitor),
        ]
    }
}

/// Gold earned per position for one roster, aligned with
/// `positions::LABELS`. Participants with an unknown position contribute to
/// no bucket; positions nobody filled sum to zero.
pub fn gold_by_position(roster: &[&Participant]) -> [i64; 5] {
    let mut sums = [0i64; 5];
    for (index, label) in positions::LABELS.iter().enumerate() {
        sums[index] = roster
            .iter()
            .filter(|p| p.team_position == *label)
            .map(|p| p.gold_earned)
            .sum();
    }
    sums
}

/// Assigns superlative title badges by PUUID: most kills, most deaths and
/// most assists across all ten participants. Assignment order matters; a
/// player topping several boards keeps only the last badge assigned
/// (kills, then deaths, then assists).
pub fn assign_titles(participants: &[Participant]) -> HashMap<String, &'static str> {
    let mut titles = HashMap::new();
    if participants.is_empty() {
        return titles;
    }

    let max_kills = participants.iter().map(|p| p.kills).max().unwrap_or(0);
    let max_deaths = participants.iter().map(|p| p.deaths).max().unwrap_or(0);
    let max_assists = participants.iter().map(|p| p.assists).max().unwrap_or(0);

    for participant in participants {
        if participant.kills == max_kills {
            titles.insert(participant.puuid.clone(), TITLE_MOST_KILLS);
        }
        if participant.deaths == max_deaths {
            titles.insert(participant.puuid.clone(), TITLE_MOST_DEATHS);
        }
        if participant.assists == max_assists {
            titles.insert(participant.puuid.clone(), TITLE_MOST_ASSISTS);
        }
    }

    titles
}

/// Whole minutes of game time.
pub fn game_duration_minutes(duration_seconds: i64) -> i64 {
    duration_seconds / 60
}

/// Finds the searched player's participant record in a match.
pub fn find_participant<'a>(game: &'a Match, puuid: &str) -> Option<&'a Participant> {
    game.info.participants.iter().find(|p| p.puuid == puuid)
}

/// Unique summoner ids across all fetched matches, in first-seen order.
/// Empty ids (absent field) are skipped.
pub fn unique_summoner_ids(matches: &[Match]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut ids = Vec::new();
    for game in matches {
        for participant in &game.info.participants {
            if participant.summoner_id.is_empty() {
                continue;
            }
            if seen.insert(participant.summoner_id.clone()) {
                ids.push(participant.summoner_id.clone());
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{MatchInfo, MatchMetadata, Objectives};

    fn participant(puuid: &str, team_id: i64, kills: i32, deaths: i32, assists: i32) -> Participant {
        Participant {
            puuid: puuid.to_string(),
            summoner_id: format!("summ-{puuid}"),
            champion_name: "Ahri".to_string(),
            team_id,
            team_position: "MIDDLE".to_string(),
            kills,
            deaths,
            assists,
            gold_earned: 10_000,
            total_damage_dealt_to_champions: 20_000,
            win: team_id == 100,
        }
    }

    fn team(team_id: i64, champion_kills: i32, win: bool) -> Team {
        let mut objectives = Objectives::default();
        objectives.champion.kills = champion_kills;
        objectives.tower.kills = 7;
        objectives.dragon.kills = 3;
        objectives.baron.kills = 1;
        objectives.inhibitor.kills = 2;
        Team {
            team_id,
            win,
            objectives,
        }
    }

    fn match_with(participants: Vec<Participant>, teams: Vec<Team>) -> Match {
        Match {
            metadata: MatchMetadata {
                match_id: "KR_1".to_string(),
                participants: vec![],
            },
            info: MatchInfo {
                game_mode: "CLASSIC".to_string(),
                game_duration: 1845,
                participants,
                teams,
            },
        }
    }

    #[test]
    fn test_kill_participation_formula() {
        // round((7 + 9) / 23 * 100) = round(69.56) = 70
        assert_eq!(kill_participation(7, 9, 23), 70);
        // round((2 + 1) / 8 * 100) = round(37.5) = 38
        assert_eq!(kill_participation(2, 1, 8), 38);
        assert_eq!(kill_participation(0, 0, 10), 0);
        assert_eq!(kill_participation(10, 10, 20), 100);
    }

    #[test]
    fn test_kill_participation_zero_team_kills() {
        assert_eq!(kill_participation(5, 5, 0), 0);
        assert_eq!(kill_participation(0, 0, 0), 0);
    }

    #[test]
    fn test_kda_ratio() {
        let p = participant("p1", 100, 12, 3, 9);
        assert_eq!(kda_ratio(&p), KdaRatio::Ratio(7.0));
        assert_eq!(kda_ratio(&p).to_string(), "7.00");

        let deathless = participant("p2", 100, 5, 0, 11);
        assert_eq!(kda_ratio(&deathless), KdaRatio::Perfect);
        assert_eq!(kda_ratio(&deathless).to_string(), "Perfect");
    }

    #[test]
    fn test_kda_sort_value_ranks_perfect_first() {
        assert!(KdaRatio::Perfect.sort_value() > KdaRatio::Ratio(100.0).sort_value());
    }

    #[test]
    fn test_split_teams() {
        let participants = vec![
            participant("p1", 100, 1, 1, 1),
            participant("p2", 200, 2, 2, 2),
            participant("p3", 100, 3, 3, 3),
        ];
        let (blue, red) = split_teams(&participants);
        assert_eq!(blue.len(), 2);
        assert_eq!(red.len(), 1);
        assert_eq!(blue[0].puuid, "p1");
        assert_eq!(red[0].puuid, "p2");
    }

    #[test]
    fn test_team_champion_kills_and_win() {
        let teams = vec![team(100, 23, true), team(200, 11, false)];
        assert_eq!(team_champion_kills(&teams, 100), 23);
        assert_eq!(team_champion_kills(&teams, 200), 11);
        assert_eq!(team_champion_kills(&teams, 300), 0);
        assert!(team_won(&teams, 100));
        assert!(!team_won(&teams, 200));
        assert!(!team_won(&teams, 300));
    }

    #[test]
    fn test_objective_counts() {
        let counts = ObjectiveCounts::from_team(&team(100, 23, true));
        assert_eq!(
            counts,
            ObjectiveCounts {
                tower: 7,
                dragon: 3,
                baron: 1,
                inhibitor: 2,
            }
        );
        assert_eq!(counts.labelled()[0], ("TOWER", 7));
    }

    #[test]
    fn test_gold_by_position() {
        let mut top = participant("p1", 100, 1, 1, 1);
        top.team_position = "TOP".to_string();
        top.gold_earned = 11_000;
        let mut jungle = participant("p2", 100, 1, 1, 1);
        jungle.team_position = "JUNGLE".to_string();
        jungle.gold_earned = 9_500;
        let mut unknown = participant("p3", 100, 1, 1, 1);
        unknown.team_position = String::new();
        unknown.gold_earned = 5_000;

        let roster: Vec<&Participant> = vec![&top, &jungle, &unknown];
        let sums = gold_by_position(&roster);
        assert_eq!(sums, [11_000, 9_500, 0, 0, 0]);
    }

    #[test]
    fn test_assign_titles() {
        let participants = vec![
            participant("slayer", 100, 15, 2, 4),
            participant("feeder", 100, 1, 12, 3),
            participant("support", 200, 2, 3, 21),
        ];
        let titles = assign_titles(&participants);
        assert_eq!(titles.get("slayer"), Some(&TITLE_MOST_KILLS));
        assert_eq!(titles.get("feeder"), Some(&TITLE_MOST_DEATHS));
        assert_eq!(titles.get("support"), Some(&TITLE_MOST_ASSISTS));
    }

    #[test]
    fn test_assign_titles_overwrite_order() {
        // One player tops every board; the assists badge wins because it is
        // assigned last
        let participants = vec![
            participant("ace", 100, 15, 12, 21),
            participant("other", 200, 1, 1, 1),
        ];
        let titles = assign_titles(&participants);
        assert_eq!(titles.get("ace"), Some(&TITLE_MOST_ASSISTS));
        assert_eq!(titles.get("other"), None);
    }

    #[test]
    fn test_assign_titles_empty() {
        assert!(assign_titles(&[]).is_empty());
    }

    #[test]
    fn test_game_duration_minutes() {
        assert_eq!(game_duration_minutes(1845), 30);
        assert_eq!(game_duration_minutes(59), 0);
    }

    #[test]
    fn test_find_participant() {
        let game = match_with(
            vec![participant("p1", 100, 1, 1, 1), participant("p2", 200, 2, 2, 2)],
            vec![team(100, 10, true), team(200, 5, false)],
        );
        assert!(find_participant(&game, "p2").is_some());
        assert!(find_participant(&game, "missing").is_none());
    }

    #[test]
    fn test_unique_summoner_ids() {
        let game_one = match_with(
            vec![participant("p1", 100, 1, 1, 1), participant("p2", 200, 2, 2, 2)],
            vec![],
        );
        let game_two = match_with(
            vec![participant("p1", 100, 1, 1, 1), participant("p3", 200, 3, 3, 3)],
            vec![],
        );

        let ids = unique_summoner_ids(&[game_one, game_two]);
        assert_eq!(ids, vec!["summ-p1", "summ-p2", "summ-p3"]);
    }

    #[test]
    fn test_unique_summoner_ids_skips_empty() {
        let mut anonymous = participant("p1", 100, 1, 1, 1);
        anonymous.summoner_id = String::new();
        let game = match_with(vec![anonymous], vec![]);
        assert!(unique_summoner_ids(&[game]).is_empty());
    }
}
