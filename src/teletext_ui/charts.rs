//! Chart panels: objectives, gold by position and KDA
//!
//! Team comparisons and per-player ratios render as scaled block bars.

use crate::constants::teams;
use crate::constants::ui::CHART_BAR_WIDTH;
use crate::data_fetcher::models::{ChampionCatalog, Match, Team};
use crate::data_fetcher::processors::{
    ObjectiveCounts, assign_titles, gold_by_position, kda_ratio, split_teams,
};
use crate::teletext_ui::core::{TeletextPage, TeletextRow, format_number};

/// Width of the per-participant KDA bar; narrower than team bars because
/// the line also carries the ratio, the raw K/D/A and a possible badge.
const KDA_BAR_WIDTH: usize = 12;

/// Scales a value against the chart maximum into a block bar. Non-zero
/// values always get at least one block so small counts stay visible.
fn scaled_bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let blocks = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(blocks.clamp(1, width))
}

fn team_by_id(game: &Match, team_id: i64) -> Option<&Team> {
    game.info.teams.iter().find(|team| team.team_id == team_id)
}

/// Grouped bar chart of tower/dragon/baron/inhibitor counts per team.
pub fn add_objective_chart(page: &mut TeletextPage, game: &Match) {
    let blue = team_by_id(game, teams::BLUE_SIDE)
        .map(ObjectiveCounts::from_team)
        .unwrap_or_default();
    let red = team_by_id(game, teams::RED_SIDE)
        .map(ObjectiveCounts::from_team)
        .unwrap_or_default();

    let max = blue
        .labelled()
        .iter()
        .chain(red.labelled().iter())
        .map(|(_, count)| i64::from(*count))
        .max()
        .unwrap_or(0);

    page.add_row(TeletextRow::ChartTitle("TEAM OBJECTIVES".to_string()));
    for ((label, blue_count), (_, red_count)) in
        blue.labelled().into_iter().zip(red.labelled())
    {
        page.add_row(TeletextRow::ChartBar {
            label: label.to_string(),
            bar: scaled_bar(i64::from(blue_count), max, CHART_BAR_WIDTH),
            value: blue_count.to_string(),
            blue_side: true,
        });
        page.add_row(TeletextRow::ChartBar {
            label: String::new(),
            bar: scaled_bar(i64::from(red_count), max, CHART_BAR_WIDTH),
            value: red_count.to_string(),
            blue_side: false,
        });
    }
}

/// Paired bars of per-position gold totals for both teams.
pub fn add_gold_chart(page: &mut TeletextPage, game: &Match) {
    let (blue_roster, red_roster) = split_teams(&game.info.participants);
    let blue_gold = gold_by_position(&blue_roster);
    let red_gold = gold_by_position(&red_roster);

    let max = blue_gold
        .iter()
        .chain(red_gold.iter())
        .copied()
        .max()
        .unwrap_or(0);

    page.add_row(TeletextRow::ChartTitle("GOLD BY POSITION".to_string()));
    for (index, label) in crate::constants::positions::LABELS.iter().enumerate() {
        page.add_row(TeletextRow::ChartBar {
            label: label.to_string(),
            bar: scaled_bar(blue_gold[index], max, CHART_BAR_WIDTH),
            value: format_number(blue_gold[index]),
            blue_side: true,
        });
        page.add_row(TeletextRow::ChartBar {
            label: String::new(),
            bar: scaled_bar(red_gold[index], max, CHART_BAR_WIDTH),
            value: format_number(red_gold[index]),
            blue_side: false,
        });
    }
}

/// KDA panel: every participant with a proportional bar, exact ratio, raw
/// K/D/A and a superlative badge where earned. Sorted best ratio first,
/// deathless games on top.
pub fn add_kda_panel(page: &mut TeletextPage, game: &Match, champions: &ChampionCatalog) {
    let participants = &game.info.participants;
    let titles = assign_titles(participants);

    let mut ordered: Vec<_> = participants.iter().collect();
    ordered.sort_by(|a, b| {
        kda_ratio(b)
            .sort_value()
            .partial_cmp(&kda_ratio(a).sort_value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Bars scale against the best effective ratio; deathless games count
    // kills+assists as the effective value
    let effective = |p: &crate::data_fetcher::models::Participant| {
        i64::from(p.kills + p.assists) * 100 / i64::from(p.deaths.max(1))
    };
    let max = ordered.iter().map(|p| effective(p)).max().unwrap_or(0);

    page.add_row(TeletextRow::ChartTitle("KDA ANALYSIS".to_string()));
    for participant in ordered {
        page.add_row(TeletextRow::KdaLine {
            champion: champions
                .display_name(&participant.champion_name)
                .to_string(),
            bar: scaled_bar(effective(participant), max, KDA_BAR_WIDTH),
            ratio: kda_ratio(participant).to_string(),
            detail: format!(
                "{}/{}/{}",
                participant.kills, participant.deaths, participant.assists
            ),
            badge: titles.get(&participant.puuid).map(|b| b.to_string()),
        });
    }
}
