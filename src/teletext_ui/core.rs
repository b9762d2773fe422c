// src/teletext_ui/core.rs - Teletext page model and buffered rendering

use std::io::Write;

use chrono::Local;
use crossterm::style::Color;

use crate::constants::ui::{CONTENT_MARGIN, PAGE_WIDTH};
use crate::error::AppError;
use crate::teletext_ui::colors::*;

/// Extracts the ANSI 256-color code from a crossterm color, with a fallback
/// for non-indexed colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(value) => value,
        _ => fallback,
    }
}

/// Formats an integer with thousands separators for point and gold columns.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 { format!("-{out}") } else { out }
}

#[derive(Debug)]
pub struct TeletextPage {
    page_number: u16,
    title: String,
    subheader: String,
    content_rows: Vec<TeletextRow>,
    disable_colors: bool,
    compact_mode: bool,
}

#[derive(Debug)]
pub enum TeletextRow {
    SummonerHeader {
        game_name: String,
        tag_line: String,
        level: i64,
    },
    RankedEntry {
        queue_label: String,
        tier: String,
        rank: String,
        league_points: i32,
        wins: i32,
        losses: i32,
    },
    MasteryEntry {
        champion: String,
        level: i32,
        points: i64,
    },
    SectionHeader(String),
    MatchHeader {
        win: bool,
        mode_label: String,
        duration_minutes: i64,
        champion: String,
        kills: i32,
        deaths: i32,
        assists: i32,
    },
    RosterHeader {
        blue_side: bool,
        label: String,
    },
    TableHeader(String),
    PlayerRow {
        columns: String,
        highlighted: bool,
    },
    ChartTitle(String),
    ChartBar {
        label: String,
        bar: String,
        value: String,
        blue_side: bool,
    },
    KdaLine {
        champion: String,
        bar: String,
        ratio: String,
        detail: String,
        badge: Option<String>,
    },
    ErrorMessage(String),
    Spacer,
}

impl TeletextPage {
    /// Creates a new TeletextPage instance.
    ///
    /// # Arguments
    /// * `page_number` - The teletext page number shown in the header
    /// * `title` - The title displayed at the top of the page
    /// * `subheader` - The subtitle displayed below the title
    /// * `disable_colors` - Render without ANSI color sequences
    /// * `compact_mode` - Built pages omit rosters and charts
    pub fn new(
        page_number: u16,
        title: String,
        subheader: String,
        disable_colors: bool,
        compact_mode: bool,
    ) -> Self {
        TeletextPage {
            page_number,
            title,
            subheader,
            content_rows: Vec::new(),
            disable_colors,
            compact_mode,
        }
    }

    pub fn is_compact_mode(&self) -> bool {
        self.compact_mode
    }

    pub fn add_row(&mut self, row: TeletextRow) {
        self.content_rows.push(row);
    }

    /// Adds an error message row. Pipeline failures surface as a single
    /// banner on an otherwise normal page.
    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows
            .push(TeletextRow::ErrorMessage(message.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.content_rows.is_empty()
    }

    fn fg(&self, color: Color, fallback: u8) -> String {
        if self.disable_colors {
            String::new()
        } else {
            format!("\x1b[38;5;{}m", get_ansi_code(color, fallback))
        }
    }

    fn bg(&self, color: Color, fallback: u8) -> String {
        if self.disable_colors {
            String::new()
        } else {
            format!("\x1b[48;5;{}m", get_ansi_code(color, fallback))
        }
    }

    fn reset(&self) -> &'static str {
        if self.disable_colors { "" } else { "\x1b[0m" }
    }

    fn margin(&self) -> String {
        " ".repeat(CONTENT_MARGIN)
    }

    /// Renders the whole page into a string buffer and writes it out in one
    /// call (double buffering keeps partial pages off slow terminals).
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let mut buffer = String::with_capacity(self.content_rows.len() * 96 + 256);

        self.render_header(&mut buffer);
        for row in &self.content_rows {
            self.render_row(&mut buffer, row);
        }

        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn render_header(&self, buffer: &mut String) {
        let header_text = format!(
            "RIFT-TV {} {}",
            self.page_number,
            Local::now().format("%d.%m.%Y")
        );
        let header_width = PAGE_WIDTH.saturating_sub(20);

        buffer.push_str(&format!(
            "{}{}{:<20}{}{}{}{:>header_width$}{}\n",
            self.bg(title_bg(), 46),
            self.fg(header_fg(), 21),
            self.title,
            self.reset(),
            self.bg(header_bg(), 21),
            self.fg(text_fg(), 231),
            header_text,
            self.reset(),
        ));
        buffer.push_str(&format!(
            "{}{}{}{}\n\n",
            self.margin(),
            self.fg(subheader_fg(), 46),
            self.subheader,
            self.reset(),
        ));
    }

    fn render_row(&self, buffer: &mut String, row: &TeletextRow) {
        let margin = self.margin();
        match row {
            TeletextRow::SummonerHeader {
                game_name,
                tag_line,
                level,
            } => {
                buffer.push_str(&format!(
                    "{margin}{}{game_name}{}{}#{tag_line}{}  {}LEVEL {level}{}\n",
                    self.fg(text_fg(), 231),
                    self.reset(),
                    self.fg(detail_fg(), 250),
                    self.reset(),
                    self.fg(blue_side_fg(), 51),
                    self.reset(),
                ));
            }
            TeletextRow::RankedEntry {
                queue_label,
                tier,
                rank,
                league_points,
                wins,
                losses,
            } => {
                let standing = if rank.is_empty() {
                    tier.clone()
                } else {
                    format!("{tier} {rank}")
                };
                buffer.push_str(&format!(
                    "{margin}{}{queue_label:<18}{}{}{standing:<16}{}{}{league_points} LP  {wins}W {losses}L{}\n",
                    self.fg(detail_fg(), 250),
                    self.reset(),
                    self.fg(highlight_fg(), 226),
                    self.reset(),
                    self.fg(text_fg(), 231),
                    self.reset(),
                ));
            }
            TeletextRow::MasteryEntry {
                champion,
                level,
                points,
            } => {
                buffer.push_str(&format!(
                    "{margin}{}{champion:<16}{}{}M{level}  {} pts{}\n",
                    self.fg(text_fg(), 231),
                    self.reset(),
                    self.fg(detail_fg(), 250),
                    format_number(*points),
                    self.reset(),
                ));
            }
            TeletextRow::SectionHeader(text) => {
                buffer.push_str(&format!(
                    "{margin}{}{text}{}\n",
                    self.fg(subheader_fg(), 46),
                    self.reset(),
                ));
            }
            TeletextRow::MatchHeader {
                win,
                mode_label,
                duration_minutes,
                champion,
                kills,
                deaths,
                assists,
            } => {
                let (verdict, verdict_color) = if *win {
                    ("WIN ", win_fg())
                } else {
                    ("LOSS", loss_fg())
                };
                buffer.push_str(&format!(
                    "{margin}{}{verdict}{} {}{mode_label:<18}{}{}{duration_minutes:>3} min  {champion:<14}{kills}/{deaths}/{assists}{}\n",
                    self.fg(verdict_color, 46),
                    self.reset(),
                    self.fg(detail_fg(), 250),
                    self.reset(),
                    self.fg(text_fg(), 231),
                    self.reset(),
                ));
            }
            TeletextRow::RosterHeader { blue_side, label } => {
                let color = if *blue_side {
                    blue_side_fg()
                } else {
                    red_side_fg()
                };
                buffer.push_str(&format!(
                    "{margin}{}{label}{}\n",
                    self.fg(color, 51),
                    self.reset(),
                ));
            }
            TeletextRow::TableHeader(columns) => {
                buffer.push_str(&format!(
                    "{margin}  {}{columns}{}\n",
                    self.fg(detail_fg(), 250),
                    self.reset(),
                ));
            }
            TeletextRow::PlayerRow {
                columns,
                highlighted,
            } => {
                let (marker, color) = if *highlighted {
                    ("▶", highlight_fg())
                } else {
                    (" ", text_fg())
                };
                buffer.push_str(&format!(
                    "{margin}{}{marker} {columns}{}\n",
                    self.fg(color, 231),
                    self.reset(),
                ));
            }
            TeletextRow::ChartTitle(text) => {
                buffer.push_str(&format!(
                    "{margin}{}{text}{}\n",
                    self.fg(chart_title_fg(), 226),
                    self.reset(),
                ));
            }
            TeletextRow::ChartBar {
                label,
                bar,
                value,
                blue_side,
            } => {
                let color = if *blue_side {
                    blue_side_fg()
                } else {
                    red_side_fg()
                };
                buffer.push_str(&format!(
                    "{margin}{}{label:<8}{}{}{bar:<20}{} {}{value}{}\n",
                    self.fg(detail_fg(), 250),
                    self.reset(),
                    self.fg(color, 51),
                    self.reset(),
                    self.fg(text_fg(), 231),
                    self.reset(),
                ));
            }
            TeletextRow::KdaLine {
                champion,
                bar,
                ratio,
                detail,
                badge,
            } => {
                let badge_text = match badge {
                    Some(badge) => format!(
                        "  {}{badge}{}",
                        self.fg(badge_fg(), 201),
                        self.reset()
                    ),
                    None => String::new(),
                };
                buffer.push_str(&format!(
                    "{margin}{}{champion:<14}{}{}{bar:<12}{} {}{ratio:>7}{} {}{detail}{}{badge_text}\n",
                    self.fg(text_fg(), 231),
                    self.reset(),
                    self.fg(blue_side_fg(), 51),
                    self.reset(),
                    self.fg(highlight_fg(), 226),
                    self.reset(),
                    self.fg(detail_fg(), 250),
                    self.reset(),
                ));
            }
            TeletextRow::ErrorMessage(message) => {
                buffer.push_str(&format!(
                    "{margin}{}{message}{}\n",
                    self.fg(loss_fg(), 196),
                    self.reset(),
                ));
            }
            TeletextRow::Spacer => buffer.push('\n'),
        }
    }
}
