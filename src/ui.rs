//! Page building: maps a fetched report onto teletext rows
//!
//! Summary card first (profile, ranked standings, top mastery), then one
//! section per recent match.

use crate::cli::Args;
use crate::constants::queues;
use crate::constants::ui::TELETEXT_PAGE;
use crate::data_fetcher::models::PlayerReport;
use crate::teletext_ui::match_display::add_match_rows;
use crate::teletext_ui::{TeletextPage, TeletextRow};

const PAGE_TITLE: &str = "LOL STATS";

/// Human label for a ranked queue identifier.
fn queue_label(queue_type: &str) -> &str {
    match queue_type {
        queues::RANKED_SOLO => "RANKED SOLO/DUO",
        queues::RANKED_FLEX => "RANKED FLEX",
        other => other,
    }
}

/// Builds the full dashboard page for a completed search.
pub fn create_report_page(report: &PlayerReport, args: &Args) -> TeletextPage {
    let mut page = TeletextPage::new(
        TELETEXT_PAGE,
        PAGE_TITLE.to_string(),
        "SUMMONER SEARCH".to_string(),
        args.plain,
        args.compact,
    );

    page.add_row(TeletextRow::SummonerHeader {
        game_name: report.account.game_name.clone(),
        tag_line: report.account.tag_line.clone(),
        level: report.summoner.summoner_level,
    });
    page.add_row(TeletextRow::Spacer);

    if !report.league_entries.is_empty() {
        page.add_row(TeletextRow::SectionHeader("RANKED STANDINGS".to_string()));
        // Entries render in reverse API order, putting solo queue first
        for entry in report.league_entries.iter().rev() {
            page.add_row(TeletextRow::RankedEntry {
                queue_label: queue_label(&entry.queue_type).to_string(),
                tier: entry.tier.clone(),
                rank: entry.rank.clone(),
                league_points: entry.league_points,
                wins: entry.wins,
                losses: entry.losses,
            });
        }
        page.add_row(TeletextRow::Spacer);
    }

    if !report.mastery.is_empty() {
        page.add_row(TeletextRow::SectionHeader("TOP CHAMPIONS".to_string()));
        for mastery in report
            .mastery
            .iter()
            .take(crate::constants::MASTERY_DISPLAY_COUNT)
        {
            let champion = report
                .champions
                .name_by_numeric(mastery.champion_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Champion {}", mastery.champion_id));
            page.add_row(TeletextRow::MasteryEntry {
                champion,
                level: mastery.champion_level,
                points: mastery.champion_points,
            });
        }
        page.add_row(TeletextRow::Spacer);
    }

    page.add_row(TeletextRow::SectionHeader("RECENT MATCHES".to_string()));
    if report.matches.is_empty() {
        page.add_row(TeletextRow::ErrorMessage(
            "No recent matches found".to_string(),
        ));
    }
    for game in &report.matches {
        add_match_rows(
            &mut page,
            game,
            &report.account.puuid,
            &report.player_ranks,
            &report.champions,
        );
    }

    page
}

/// Builds a page carrying a single error banner. Any pipeline failure is
/// terminal for the search; the user re-triggers with a new invocation.
pub fn create_error_page(message: &str, args: &Args) -> TeletextPage {
    let mut page = TeletextPage::new(
        TELETEXT_PAGE,
        PAGE_TITLE.to_string(),
        "SUMMONER SEARCH".to_string(),
        args.plain,
        args.compact,
    );
    page.add_error_message(message);
    page
}
