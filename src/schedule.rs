//! Loading schedules and matching games to calendar days.

use std::io::Read;
use std::path::Path;

use crate::calendar::month_number;
use crate::date_text::{extract_day, extract_month, strip_leading_zeros};
use crate::error::{Result, ScheduleError};
use crate::types::{DayCell, ScheduledEvent};

/// Read a JSON array of games from `path`, or from stdin when `path` is `-`.
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduledEvent>> {
    let display = path.display().to_string();
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ScheduleError::Io {
                path: display.clone(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: display.clone(),
            source,
        })?
    };
    parse_schedule(&text, &display)
}

/// Parse a JSON array of games. `origin` names the source in errors.
pub fn parse_schedule(text: &str, origin: &str) -> Result<Vec<ScheduledEvent>> {
    let events: Vec<ScheduledEvent> =
        serde_json::from_str(text).map_err(|source| ScheduleError::Json {
            path: origin.to_string(),
            source,
        })?;
    log::debug!("loaded {} games from {}", events.len(), origin);
    Ok(events)
}

/// Group games by month number, in ascending month order.
///
/// Games keep their relative order within a month. Games whose month cannot
/// be read are skipped.
pub fn group_by_month(events: &[ScheduledEvent]) -> Vec<(u32, Vec<ScheduledEvent>)> {
    let mut groups: Vec<(u32, Vec<ScheduledEvent>)> = Vec::new();
    for event in events {
        let Some(month) = month_number(extract_month(&event.date)) else {
            log::debug!("skipping game with unreadable date {:?}", event.date);
            continue;
        };
        match groups.iter_mut().find(|(m, _)| *m == month) {
            Some((_, games)) => games.push(event.clone()),
            None => groups.push((month, vec![event.clone()])),
        }
    }
    groups.sort_by_key(|(month, _)| *month);
    groups
}

/// Games dated in `month` (1-based), in their original order.
pub fn events_in_month(events: &[ScheduledEvent], month: u32) -> Vec<ScheduledEvent> {
    events
        .iter()
        .filter(|event| month_number(extract_month(&event.date)) == Some(month))
        .cloned()
        .collect()
}

/// Games whose day of month matches the cell's label.
pub fn events_on_day(events: &[ScheduledEvent], cell: DayCell) -> Vec<&ScheduledEvent> {
    if cell.is_blank() {
        return Vec::new();
    }
    let label = cell.label();
    events
        .iter()
        .filter(|event| strip_leading_zeros(extract_day(&event.date)) == label)
        .collect()
}

/// Note shown on a day without games.
///
/// `month` is compared case-insensitively. Blank cells get no note.
pub fn day_note(month: &str, cell: DayCell) -> Option<&'static str> {
    let day = cell.day_number()?;
    let note = match month.to_lowercase().as_str() {
        "march" => "Spring Training",
        "october" if day == 31 => "Season Over",
        "october" => "Post Season",
        _ => "Off Day",
    };
    Some(note)
}
