//! Month grid construction using Zeller's algorithm and the game list.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::date_text::extract_month;
use crate::types::{
    ColumnsMode, DAYS_PER_WEEK, DayCell, MONTH_NAMES, MonthGrid, REMAINING_WEEKS,
    ScheduleContext, ScheduledEvent, WeekRow,
};

/// Source of "today" for month fallback and highlighting.
pub trait DateProvider {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in local time or UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDate {
    pub utc: bool,
}

impl DateProvider for SystemDate {
    fn today(&self) -> NaiveDate {
        if self.utc {
            chrono::Utc::now().date_naive()
        } else {
            chrono::Local::now().date_naive()
        }
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDate(pub NaiveDate);

impl DateProvider for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Check if a year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Weekday of the 1st of the month using Zeller's congruence.
pub fn first_weekday_of_month(year: i32, month: u32) -> Weekday {
    let m = if month < 3 { month + 12 } else { month };
    let q: i32 = 1;
    let year_i = if month < 3 { year - 1 } else { year };
    let k: i32 = year_i.rem_euclid(100);
    let j: i32 = year_i.div_euclid(100);

    let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}

/// 1-based month number for a canonical English month name ("June" -> 6).
///
/// Matching is exact and case-sensitive.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|&candidate| candidate == name)
        .map(|idx| idx as u32 + 1)
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

/// Year and month to render for a list of games.
///
/// The month comes from the first game's date, falling back to today's month
/// when the list is empty or the month cannot be read. The year is always
/// today's year.
pub fn resolve_target_month(events: &[ScheduledEvent], today: &dyn DateProvider) -> (i32, u32) {
    let today = today.today();
    let Some(first) = events.first() else {
        return (today.year(), today.month());
    };

    let name = extract_month(&first.date);
    if name.is_empty() {
        log::debug!("no month in {:?}, using current month", first.date);
        return (today.year(), today.month());
    }
    match month_number(name) {
        Some(month) => (today.year(), month),
        None => {
            log::warn!("unknown month {:?} in {:?}, using current month", name, first.date);
            (today.year(), today.month())
        }
    }
}

/// Build the grid for the month the games fall in.
///
/// An empty game list yields a single blank week without consulting the
/// calendar.
pub fn build_month_grid(events: &[ScheduledEvent], today: &dyn DateProvider) -> MonthGrid {
    if events.is_empty() {
        return MonthGrid::blank();
    }

    let (year, month) = resolve_target_month(events, today);
    let start_day = first_weekday_of_month(year, month).num_days_from_sunday() as i32;
    let total_days = days_in_month(year, month);

    let mut weeks = Vec::with_capacity(1 + REMAINING_WEEKS as usize);
    weeks.push(build_starting_week(start_day));
    weeks.extend(build_remaining_weeks(start_day, total_days));
    MonthGrid::new(weeks)
}

/// First, usually partial, week of a month starting on `start_day`
/// (0 = Sunday).
///
/// Columns before `start_day` are blank. A `start_day` of 7 or more yields an
/// all-blank week.
pub fn build_starting_week(start_day: i32) -> WeekRow {
    std::array::from_fn(|i| {
        let i = i as i64;
        let start_day = i64::from(start_day);
        if i < start_day {
            DayCell::BLANK
        } else {
            DayCell::day((i - start_day + 1) as u32)
        }
    })
}

/// Weeks following the starting week.
///
/// `start_day` is reduced modulo 7; negative values are mirrored first, so
/// -4 behaves like 4. Five weeks are generated and the fifth is dropped only
/// when it is entirely blank.
pub fn build_remaining_weeks(start_day: i32, total_days: u32) -> Vec<WeekRow> {
    let normalized = start_day.unsigned_abs() % DAYS_PER_WEEK as u32;
    let days_past = DAYS_PER_WEEK as u32 - normalized;

    let mut weeks = Vec::with_capacity(REMAINING_WEEKS as usize);
    for i in 0..REMAINING_WEEKS {
        let week: WeekRow = std::array::from_fn(|j| {
            let day = 7 * i + days_past + j as u32 + 1;
            if day > total_days {
                DayCell::BLANK
            } else {
                DayCell::day(day)
            }
        });

        let is_last = i == REMAINING_WEEKS - 1;
        if is_last && week.iter().all(|cell| cell.is_blank()) {
            break;
        }
        weeks.push(week);
    }
    weeks
}

/// Number of months from the first game to the last, inclusive.
///
/// Returns 0 when the games are out of month order, the list is empty, or
/// either month name is not recognised.
pub fn season_length(events: &[ScheduledEvent]) -> u32 {
    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return 0;
    };

    let first_month = month_number(extract_month(&first.date));
    let last_month = month_number(extract_month(&last.date));

    match (first_month, last_month) {
        (Some(first), Some(last)) if last >= first => last - first + 1,
        (Some(_), Some(_)) => {
            log::debug!("games out of order, season length is 0");
            0
        }
        _ => 0,
    }
}

impl ScheduleContext {
    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                // ~20 chars per month + gutter, clamp to 1-3 for readability
                let month_width = crate::types::MONTH_WIDTH + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
