//! Parsing and reformatting of the upstream API's date strings.
//!
//! The expected layout is `"<Wkd> <Month> <DD> <YYYY> at <hh:mm> <AM|PM>"`,
//! e.g. `"Thur June 09 2021 at 07:10 PM"`. Tokens are separated by single
//! spaces, so runs of spaces produce empty tokens that still count.
//!
//! None of these functions fail: malformed input yields an empty string (or
//! `None` for [`extract_date_parts`]) so a bad date renders blank.

/// Separator between the date half and the time half.
///
/// Padded with spaces so weekday names such as "Sat" are not split.
pub const TIME_SEPARATOR: &str = " at ";

/// Year, month and day tokens borrowed from a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
}

/// Extract year (token 3), month (token 1) and day (token 2).
///
/// Requires at least four tokens. The token contents are not validated, so
/// `"03 June 2021 Fri"` yields year `"Fri"`.
pub fn extract_date_parts(date: &str) -> Option<DateParts<'_>> {
    if date.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = date.split(' ').collect();
    if tokens.len() <= 3 {
        return None;
    }
    Some(DateParts {
        year: tokens[3],
        month: tokens[1],
        day: tokens[2],
    })
}

/// Month name (token 1), or `""` with fewer than two tokens.
pub fn extract_month(date: &str) -> &str {
    if date.is_empty() {
        return "";
    }
    date.split(' ').nth(1).unwrap_or("")
}

/// Day of month (token 2) with any leading zero kept, or `""` with fewer
/// than three tokens.
pub fn extract_day(date: &str) -> &str {
    if date.is_empty() {
        return "";
    }
    date.split(' ').nth(2).unwrap_or("")
}

/// Time portion after `" at "`, passed through [`format_time`].
pub fn extract_time(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match split_at_time(date) {
        Some((_, time)) => format_time(time),
        None => String::new(),
    }
}

/// Strip the leading zero from the day of a four token date.
///
/// `"Thur June 09 2021"` becomes `"Thur June 9 2021"`. Any other token count
/// yields `""`.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let mut tokens: Vec<&str> = date.trim().split(' ').collect();
    if tokens.len() != 4 {
        return String::new();
    }
    tokens[2] = strip_leading_zeros(tokens[2]);
    tokens.join(" ")
}

/// Strip the leading zero from the hour of a two token time.
///
/// `" 07:10 PM "` becomes `"7:10 PM"`. Any other token count yields `""`.
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    let tokens: Vec<&str> = time.trim().split(' ').collect();
    if tokens.len() != 2 {
        return String::new();
    }
    format!("{} {}", strip_leading_zeros(tokens[0]), tokens[1])
}

/// Human friendly version of a full API date string.
///
/// `"Thur June 09 2021 at 07:10 PM"` becomes `"Thur June 9 2021 at 7:10 PM"`.
/// Each half is formatted independently; the result is trimmed so an empty
/// half does not leave a dangling separator space.
pub fn format_readable_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let Some((date_half, time_half)) = split_at_time(date) else {
        return String::new();
    };
    format!("{} at {}", format_date(date_half), format_time(time_half))
        .trim()
        .to_string()
}

/// Remove the leading run of `'0'` characters only.
pub fn strip_leading_zeros(s: &str) -> &str {
    s.trim_start_matches('0')
}

/// Split on [`TIME_SEPARATOR`], requiring exactly two segments.
fn split_at_time(date: &str) -> Option<(&str, &str)> {
    let mut segments = date.split(TIME_SEPARATOR);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(date_half), Some(time_half), None) => Some((date_half, time_half)),
        _ => None,
    }
}
