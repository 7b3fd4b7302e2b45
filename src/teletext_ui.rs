// src/teletext_ui.rs - teletext-style standings board rendering

use crate::constants::ui::{COLUMN_GAP, COLUMN_WIDTH, PAGE_NUMBER, TEAM_NAME_WIDTH};
use crate::data_fetcher::models::{LeagueStandings, StandingsState};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::Write;

// Constants for teletext appearance
const HEADER_BG: Color = Color::Blue;
const HEADER_FG: Color = Color::White;
const LEAGUE_FG: Color = Color::Green;
const DIVISION_FG: Color = Color::Cyan;
const TEXT_FG: Color = Color::White;
const RECORD_FG: Color = Color::Yellow;
const ERROR_FG: Color = Color::Yellow;
const TITLE_BG: Color = Color::Green;

/// One row inside a league column.
#[derive(Debug, Clone)]
pub enum TeletextRow {
    LeagueHeader(String),
    DivisionHeader(String),
    TeamRow {
        name: String,
        wins: u32,
        losses: u32,
        win_pct: f64,
    },
    Spacer,
}

/// A render-ready teletext page with two league columns.
///
/// When `wide` is set the columns are drawn side by side (American left,
/// National right); otherwise they are stacked, American first.
pub struct TeletextPage {
    page_number: u16,
    title: String,
    left_column: Vec<TeletextRow>,
    right_column: Vec<TeletextRow>,
    error_banner: Option<String>,
    wide: bool,
    show_footer: bool,
}

/// True when the terminal is wide enough for the side-by-side league layout.
/// Falls back to the stacked layout when the size cannot be queried.
pub fn is_wide_terminal() -> bool {
    crossterm::terminal::size()
        .map(|(width, _)| width >= crate::constants::ui::WIDE_MIN_WIDTH)
        .unwrap_or(false)
}

/// Formats a team's record the way the standings board shows it,
/// e.g. `55-35 (61.10%)`.
pub fn format_record(wins: u32, losses: u32, win_pct: f64) -> String {
    format!("{}-{} ({:.2}%)", wins, losses, win_pct * 100.0)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}

/// Builds the column rows for one league: league heading, then each division
/// heading with its team rows, divisions separated by a spacer.
pub fn league_rows(heading: &str, league: &LeagueStandings) -> Vec<TeletextRow> {
    let mut rows = vec![TeletextRow::LeagueHeader(heading.to_string())];

    for (index, division) in league.iter().enumerate() {
        rows.push(TeletextRow::DivisionHeader(division.division_name.clone()));
        for team in &division.teams {
            rows.push(TeletextRow::TeamRow {
                name: team.name.clone(),
                wins: team.wins,
                losses: team.losses,
                win_pct: team.win_pct,
            });
        }
        if index < league.len() - 1 {
            rows.push(TeletextRow::Spacer);
        }
    }

    rows
}

/// Builds the standings page from the current state.
///
/// An error banner, when present, is shown above the columns while the last
/// good standings stay visible below it.
pub fn standings_page(state: &StandingsState, error: Option<&str>, wide: bool) -> TeletextPage {
    let mut page = TeletextPage::new(PAGE_NUMBER, "MLB STANDINGS".to_string(), wide);

    page.set_columns(
        league_rows("AMERICAN LEAGUE", &state.american_league),
        league_rows("NATIONAL LEAGUE", &state.national_league),
    );

    if let Some(message) = error {
        page.add_error_message(message);
    }

    page
}

impl TeletextPage {
    pub fn new(page_number: u16, title: String, wide: bool) -> Self {
        TeletextPage {
            page_number,
            title,
            left_column: Vec::new(),
            right_column: Vec::new(),
            error_banner: None,
            wide,
            show_footer: true,
        }
    }

    pub fn set_columns(&mut self, left: Vec<TeletextRow>, right: Vec<TeletextRow>) {
        self.left_column = left;
        self.right_column = right;
    }

    /// Sets an error banner shown above both columns. The columns themselves
    /// keep whatever standings they carry.
    pub fn add_error_message(&mut self, message: &str) {
        self.error_banner = Some(message.to_string());
    }

    /// Hides the footer row (used by quick view mode).
    pub fn set_show_footer(&mut self, show: bool) {
        self.show_footer = show;
    }

    /// Test-friendly accessor: true if the page carries the given error text.
    pub fn has_error_message(&self, message: &str) -> bool {
        self.error_banner.as_deref() == Some(message)
    }

    fn page_width(&self) -> usize {
        if self.wide {
            COLUMN_WIDTH * 2 + COLUMN_GAP
        } else {
            COLUMN_WIDTH
        }
    }

    /// Renders one column cell padded to exactly `COLUMN_WIDTH` characters.
    fn render_cell<W: Write>(&self, out: &mut W, row: Option<&TeletextRow>) -> std::io::Result<()> {
        match row {
            Some(TeletextRow::LeagueHeader(heading)) => {
                queue!(
                    out,
                    SetForegroundColor(LEAGUE_FG),
                    Print(format!("{:<width$}", heading, width = COLUMN_WIDTH)),
                    ResetColor
                )?;
            }
            Some(TeletextRow::DivisionHeader(name)) => {
                queue!(
                    out,
                    SetForegroundColor(DIVISION_FG),
                    Print(format!(
                        "{:<width$}",
                        truncate(name, COLUMN_WIDTH),
                        width = COLUMN_WIDTH
                    )),
                    ResetColor
                )?;
            }
            Some(TeletextRow::TeamRow {
                name,
                wins,
                losses,
                win_pct,
            }) => {
                let record = format_record(*wins, *losses, *win_pct);
                let record_width = COLUMN_WIDTH - TEAM_NAME_WIDTH;
                queue!(
                    out,
                    SetForegroundColor(TEXT_FG),
                    Print(format!(
                        "{:<width$}",
                        truncate(name, TEAM_NAME_WIDTH),
                        width = TEAM_NAME_WIDTH
                    )),
                    SetForegroundColor(RECORD_FG),
                    Print(format!("{:>width$}", record, width = record_width)),
                    ResetColor
                )?;
            }
            Some(TeletextRow::Spacer) | None => {
                queue!(out, Print(" ".repeat(COLUMN_WIDTH)))?;
            }
        }
        Ok(())
    }

    /// Renders the whole page through a buffered writer.
    ///
    /// Writes `\r\n` line endings so output is correct in raw mode as well as
    /// in plain terminal output. The caller decides whether to clear the
    /// screen first.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let width = self.page_width();

        // Header: green title block, blue page number block
        let title_width = width.saturating_sub(12);
        queue!(
            out,
            SetBackgroundColor(TITLE_BG),
            SetForegroundColor(HEADER_FG),
            Print(format!("{:<title_width$}", self.title)),
            SetBackgroundColor(HEADER_BG),
            Print(format!("{:>12}", format!("MLB {}", self.page_number))),
            ResetColor,
            Print("\r\n"),
            Print("\r\n")
        )?;

        if let Some(message) = &self.error_banner {
            queue!(
                out,
                SetForegroundColor(ERROR_FG),
                Print(format!("{:^width$}", truncate(message, width))),
                ResetColor,
                Print("\r\n"),
                Print("\r\n")
            )?;
        }

        if self.wide {
            let rows = self.left_column.len().max(self.right_column.len());
            for i in 0..rows {
                self.render_cell(out, self.left_column.get(i))?;
                queue!(out, Print(" ".repeat(COLUMN_GAP)))?;
                self.render_cell(out, self.right_column.get(i))?;
                queue!(out, Print("\r\n"))?;
            }
        } else {
            for row in &self.left_column {
                self.render_cell(out, Some(row))?;
                queue!(out, Print("\r\n"))?;
            }
            queue!(out, Print("\r\n"))?;
            for row in &self.right_column {
                self.render_cell(out, Some(row))?;
                queue!(out, Print("\r\n"))?;
            }
        }

        if self.show_footer {
            queue!(
                out,
                Print("\r\n"),
                SetForegroundColor(Color::Blue),
                Print("<<<"),
                SetForegroundColor(Color::White),
                Print(format!("{:^width$}", "q=Quit r=Refresh", width = width - 6)),
                SetForegroundColor(Color::Blue),
                Print(">>>"),
                ResetColor,
                Print("\r\n")
            )?;
        }

        out.flush()?;
        Ok(())
    }
}
