//! Baseball schedule calendar with support for the upstream API's date text.
//!
//! Features:
//! - Parsing and reformatting of `"Thur June 09 2021 at 07:10 PM"` style dates
//! - Month grids (weeks x 7 days) built from a list of scheduled games
//! - Season span reporting and per-day game lookup
//! - Terminal rendering in the style of `cal`

pub mod args;
pub mod calendar;
pub mod date_text;
pub mod error;
pub mod formatter;
pub mod schedule;
pub mod types;
