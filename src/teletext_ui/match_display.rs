//! Match card and roster table rendering
//!
//! One match renders as a result card, and in full mode two roster tables
//! (the searched player's row highlighted) followed by the chart panels.

use std::collections::HashMap;

use crate::data_fetcher::models::{ChampionCatalog, Match, Participant, RankSummary};
use crate::data_fetcher::processors::{
    find_participant, game_duration_minutes, kill_participation, split_teams,
    team_champion_kills, team_won,
};
use crate::teletext_ui::charts::{add_gold_chart, add_kda_panel, add_objective_chart};
use crate::teletext_ui::core::{TeletextPage, TeletextRow, format_number};

/// Human label for a game mode identifier.
pub fn mode_label(game_mode: &str) -> &str {
    match game_mode {
        "CLASSIC" => "SUMMONER'S RIFT",
        "ARAM" => "ARAM",
        other => other,
    }
}

/// Adds all rows for one match. Matches the searched player somehow does
/// not appear in are skipped entirely, mirroring the defensive rendering of
/// the source data.
pub fn add_match_rows(
    page: &mut TeletextPage,
    game: &Match,
    search_puuid: &str,
    player_ranks: &HashMap<String, RankSummary>,
    champions: &ChampionCatalog,
) {
    let Some(target) = find_participant(game, search_puuid) else {
        return;
    };

    page.add_row(TeletextRow::MatchHeader {
        win: team_won(&game.info.teams, target.team_id),
        mode_label: mode_label(&game.info.game_mode).to_string(),
        duration_minutes: game_duration_minutes(game.info.game_duration),
        champion: champions.display_name(&target.champion_name).to_string(),
        kills: target.kills,
        deaths: target.deaths,
        assists: target.assists,
    });

    if page.is_compact_mode() {
        return;
    }

    let (blue_roster, red_roster) = split_teams(&game.info.participants);

    page.add_row(TeletextRow::Spacer);
    add_roster_table(
        page,
        game,
        &blue_roster,
        true,
        search_puuid,
        player_ranks,
        champions,
    );
    page.add_row(TeletextRow::Spacer);
    add_roster_table(
        page,
        game,
        &red_roster,
        false,
        search_puuid,
        player_ranks,
        champions,
    );

    page.add_row(TeletextRow::Spacer);
    add_objective_chart(page, game);
    page.add_row(TeletextRow::Spacer);
    add_gold_chart(page, game);
    page.add_row(TeletextRow::Spacer);
    add_kda_panel(page, game, champions);
    page.add_row(TeletextRow::Spacer);
}

fn add_roster_table(
    page: &mut TeletextPage,
    game: &Match,
    roster: &[&Participant],
    blue_side: bool,
    search_puuid: &str,
    player_ranks: &HashMap<String, RankSummary>,
    champions: &ChampionCatalog,
) {
    let label = if blue_side {
        "TEAM 1 (BLUE)"
    } else {
        "TEAM 2 (RED)"
    };
    page.add_row(TeletextRow::RosterHeader {
        blue_side,
        label: label.to_string(),
    });
    page.add_row(TeletextRow::TableHeader(format!(
        "{:<14}{:<22}{:<9}{:>4}{:>9}{:>8}",
        "CHAMPION", "RANK", "K/D/A", "KP", "DMG", "GOLD"
    )));

    for participant in roster {
        let team_kills = team_champion_kills(&game.info.teams, participant.team_id);
        let participation =
            kill_participation(participant.kills, participant.assists, team_kills);
        let rank_label = player_ranks
            .get(&participant.summoner_id)
            .cloned()
            .unwrap_or_default()
            .label();

        page.add_row(TeletextRow::PlayerRow {
            columns: format!(
                "{:<14}{:<22}{:<9}{:>3}%{:>9}{:>8}",
                champions.display_name(&participant.champion_name),
                rank_label,
                format!(
                    "{}/{}/{}",
                    participant.kills, participant.deaths, participant.assists
                ),
                participation,
                format_number(participant.total_damage_dealt_to_champions),
                format_number(participant.gold_earned),
            ),
            highlighted: participant.puuid == search_puuid,
        });
    }
}
