//! Type definitions and constants for schedule calendars.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day slot in a [`MonthGrid`]: blank or a 1-based day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCell(Option<u32>);

impl DayCell {
    pub const BLANK: DayCell = DayCell(None);

    pub fn day(day: u32) -> Self {
        DayCell(Some(day))
    }

    pub fn day_number(self) -> Option<u32> {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0.is_none()
    }

    /// Display label: the day number without leading zeros, or `""`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(day) => write!(f, "{}", day),
            None => Ok(()),
        }
    }
}

/// One week, Sunday (index 0) through Saturday (index 6).
pub type WeekRow = [DayCell; DAYS_PER_WEEK];

/// Labels of a week row, e.g. `["", "", "1", "2", "3", "4", "5"]`.
pub fn week_labels(week: &WeekRow) -> [String; DAYS_PER_WEEK] {
    (*week).map(DayCell::label)
}

/// Shape of one calendar month as rows of seven day cells.
///
/// Always has at least one row. Rebuilt from its inputs on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    pub fn new(weeks: Vec<WeekRow>) -> Self {
        debug_assert!(!weeks.is_empty(), "a month grid has at least one week");
        MonthGrid { weeks }
    }

    /// Grid with a single all-blank week.
    pub fn blank() -> Self {
        MonthGrid {
            weeks: vec![[DayCell::BLANK; DAYS_PER_WEEK]],
        }
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn labels(&self) -> Vec<[String; DAYS_PER_WEEK]> {
        self.weeks.iter().map(week_labels).collect()
    }

    /// Non-blank cells in reading order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter_map(|cell| cell.day_number())
    }
}

/// A baseball team as serialized by the schedule API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: String,
    pub team_logo: String,
    pub team_name: String,
    pub city_name: String,
    pub abbreviation: String,
    pub wins: u32,
    pub losses: u32,
}

/// A giveaway or theme night attached to a game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotion {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

/// A scheduled game. Only `date` is required; it uses the API's
/// `"Thur June 09 2021 at 07:10 PM"` layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    #[serde(default)]
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub home_team: Option<Team>,
    #[serde(default)]
    pub away_team: Option<Team>,
    #[serde(default)]
    pub promos: Vec<Promotion>,
    #[serde(default)]
    pub series_game_number: u32,
    #[serde(default)]
    pub series_game_count: u32,
}

impl ScheduledEvent {
    pub fn new(date: impl Into<String>) -> Self {
        ScheduledEvent {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn has_promotions(&self) -> bool {
        !self.promos.is_empty()
    }

    /// Position of this game within its series, e.g.
    /// `"Game #2 in a 3-day Series"`.
    pub fn series_description(&self) -> String {
        let position = if self.series_game_number == 1 {
            "The First Game".to_string()
        } else if self.series_game_number == self.series_game_count {
            "The Last Game".to_string()
        } else {
            format!("Game #{}", self.series_game_number)
        };
        format!("{} in a {}-day Series", position, self.series_game_count)
    }

    /// `"<away> at <home>"` using team abbreviations, or `""` when either
    /// team is unknown.
    pub fn matchup(&self) -> String {
        match (&self.away_team, &self.home_team) {
            (Some(away), Some(home)) => format!("{} at {}", away.abbreviation, home.abbreviation),
            _ => String::new(),
        }
    }
}

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Rendering context containing all display options.
#[derive(Clone, Debug)]
pub struct ScheduleContext {
    /// Today's date, used for highlighting and as the fallback month.
    pub today: NaiveDate,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Whether to show year in month headers.
    pub show_year_in_header: bool,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
}

pub const DAYS_PER_WEEK: usize = 7;

/// Weeks generated after the starting week; the last is dropped when blank.
pub const REMAINING_WEEKS: u32 = 5;

/// Canonical month names, matched case-sensitively.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
pub const MONTH_WIDTH: usize = 20;
pub const GUTTER_WIDTH_REGULAR: usize = 2;

// Color is enabled by default when writing to a terminal
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
