//! Schedule calendar formatting and display with color support.

use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

use crate::calendar::month_name;
use crate::date_text::{extract_time, format_readable_date};
use crate::schedule::{day_note, events_on_day};
use crate::types::{
    COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, DayCell, MONTH_WIDTH,
    MonthGrid, ScheduleContext, ScheduledEvent, WEEKDAY_HEADER,
};

/// A month grid together with the games drawn on it.
pub struct MonthView<'a> {
    pub year: i32,
    pub month: u32,
    pub grid: MonthGrid,
    pub events: &'a [ScheduledEvent],
}

/// Format month header with optional year and color.
pub fn format_month_header(
    year: i32,
    month: u32,
    width: usize,
    show_year: bool,
    color: bool,
) -> String {
    let name = month_name(month).unwrap_or_default();
    let header = if show_year {
        format!("{} {}", name, year)
    } else {
        name.to_string()
    };
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Display width ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            plain.push(c);
        }
    }
    plain.width()
}

/// Format day cell with color highlighting.
///
/// Color priority: today > game with promotions > game > regular
fn format_day(ctx: &ScheduleContext, view: &MonthView<'_>, cell: DayCell, is_last: bool) -> String {
    let day_str = format!("{:>2}", cell.label());
    let formatted = match cell.day_number() {
        Some(day) if ctx.color => {
            let is_today = ctx.today.day() == day
                && ctx.today.month() == view.month
                && ctx.today.year() == view.year;
            let games = events_on_day(view.events, cell);

            if is_today {
                format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
            } else if games.iter().any(|game| game.has_promotions()) {
                format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
            } else if !games.is_empty() {
                format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
            } else {
                day_str
            }
        }
        _ => day_str,
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format month as header, weekday row and one line per week.
pub fn format_month_grid(ctx: &ScheduleContext, view: &MonthView<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + view.grid.len());

    lines.push(format_month_header(
        view.year,
        view.month,
        MONTH_WIDTH,
        ctx.show_year_in_header,
        ctx.color,
    ));

    if ctx.color {
        lines.push(format!("{}{}{}", COLOR_SAND_YELLOW, WEEKDAY_HEADER, COLOR_RESET));
    } else {
        lines.push(WEEKDAY_HEADER.to_string());
    }

    for week in view.grid.weeks() {
        let mut line = String::new();
        for (idx, &cell) in week.iter().enumerate() {
            line.push_str(&format_day(ctx, view, cell, idx + 1 == week.len()));
        }
        lines.push(line);
    }

    lines
}

/// Print a single month.
pub fn print_month(ctx: &ScheduleContext, view: &MonthView<'_>) {
    for line in format_month_grid(ctx, view) {
        println!("{}", line);
    }
}

/// Lay out formatted months side by side, padding each to the month width.
pub fn join_side_by_side(ctx: &ScheduleContext, grids: &[Vec<String>]) -> Vec<String> {
    let max_height = grids.iter().map(|g| g.len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(max_height);

    for row in 0..max_height {
        let mut line = String::new();
        for (i, grid) in grids.iter().enumerate() {
            let is_last = i + 1 == grids.len();
            let text = grid.get(row).map(String::as_str).unwrap_or("");
            line.push_str(text);
            let padding = MONTH_WIDTH.saturating_sub(visible_width(text));
            line.push_str(&" ".repeat(padding));
            if !is_last {
                line.push_str(&" ".repeat(ctx.gutter_width));
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Print several months, `months_per_row` to a row.
pub fn print_months(ctx: &ScheduleContext, views: &[MonthView<'_>]) {
    let per_row = ctx.months_per_row().max(1) as usize;
    for chunk in views.chunks(per_row) {
        let grids: Vec<Vec<String>> = chunk.iter().map(|v| format_month_grid(ctx, v)).collect();
        for line in join_side_by_side(ctx, &grids) {
            println!("{}", line);
        }
        println!();
    }
}

/// Details for one day: a line per game, or the note for a day without games.
pub fn format_day_detail(month: &str, cell: DayCell, events: &[ScheduledEvent]) -> Vec<String> {
    let Some(day) = cell.day_number() else {
        return Vec::new();
    };

    let games = events_on_day(events, cell);
    let mut lines = vec![format!("{} {}", month, day)];
    if games.is_empty() {
        if let Some(note) = day_note(month, cell) {
            lines.push(format!("  {}", note));
        }
        return lines;
    }

    for game in games {
        let mut line = format!("  {:>8}", extract_time(&game.date));
        let matchup = game.matchup();
        if !matchup.is_empty() {
            line.push_str(&format!("  {}", matchup));
        }
        if game.series_game_count > 0 {
            line.push_str(&format!("  ({})", game.series_description()));
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// One line per game: readable date, matchup and a `*` for promotions.
pub fn format_event_list(events: &[ScheduledEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| {
            let mut line = format_readable_date(&event.date);
            let matchup = event.matchup();
            if !matchup.is_empty() {
                line.push_str(&format!("  {}", matchup));
            }
            if event.has_promotions() {
                line.push_str(" *");
            }
            line
        })
        .collect()
}
