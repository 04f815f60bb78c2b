//! Command-line argument parsing using clap.
//!
//! Games come from a JSON schedule file and/or repeated `--date` values.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::calendar::{DateProvider, FixedDate, SystemDate};
use crate::error::{Result, ScheduleError};
use crate::schedule::load_schedule;
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, ColumnsMode, GUTTER_WIDTH_REGULAR, ScheduleContext, ScheduledEvent,
};

/// Environment variable overriding today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV: &str = "SCHEDCAL_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "schedcal")]
#[command(about = "Displays a baseball schedule as month calendars", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// JSON schedule file ("-" reads stdin).
    #[arg(value_name = "file", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Add a game by date, e.g. "Thur June 09 2021 at 07:10 PM".
    #[arg(short = 'd', long = "date", value_name = "date", help_heading = "Input options")]
    pub dates: Vec<String>,

    /// Display every month of the season.
    #[arg(short = 's', long, help_heading = "Display options")]
    pub season: bool,

    /// List the games below the calendar.
    #[arg(short = 'l', long, help_heading = "Display options")]
    pub list: bool,

    /// Show details for one day of the displayed month.
    #[arg(short = 'D', long, help_heading = "Display options", value_name = "day")]
    pub day: Option<u32>,

    /// Take today's date from UTC instead of local time.
    #[arg(long, help_heading = "Calendar options")]
    pub utc: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence.
    #[arg(long, default_value = "warn", help_heading = "Output options", value_name = "level")]
    pub log_level: String,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a baseball schedule as a calendar.

Without a schedule, display an empty grid for the current month.

Examples:
  schedcal games.json                 Month of the first game
  schedcal -s games.json              Every month of the season
  schedcal -l games.json              Month plus a list of games
  schedcal -D 9 games.json            Details for the 9th
  schedcal -d 'Thur June 09 2021 at 07:10 PM'
  cat games.json | schedcal -         Read the schedule from stdin";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Games from the schedule file followed by any `--date` values.
    pub fn collect_events(&self) -> Result<Vec<ScheduledEvent>> {
        let mut events = match &self.file {
            Some(path) => load_schedule(path)?,
            None => Vec::new(),
        };
        events.extend(self.dates.iter().map(ScheduledEvent::new));
        Ok(events)
    }

    /// Source of today's date honoring `SCHEDCAL_TEST_TIME`.
    pub fn date_provider(&self) -> Box<dyn DateProvider> {
        match test_time_override() {
            Some(date) => Box::new(FixedDate(date)),
            None => Box::new(SystemDate { utc: self.utc }),
        }
    }
}

impl ScheduleContext {
    pub fn new(args: &Args, today: &dyn DateProvider) -> Result<Self> {
        let color = !args.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s.parse::<u32>().map_err(|_| {
                    ScheduleError::InvalidOption(format!("Invalid columns value: {}", s))
                })?;
                if n == 0 {
                    return Err(ScheduleError::InvalidOption(
                        "Columns must be positive".to_string(),
                    ));
                }
                ColumnsMode::Fixed(n)
            }
        };

        if args.season && args.day.is_some() {
            return Err(ScheduleError::InvalidOption(
                "Options -s and -D are mutually exclusive".to_string(),
            ));
        }

        if let Some(day) = args.day
            && !(1..=31).contains(&day)
        {
            return Err(ScheduleError::InvalidOption(format!(
                "Invalid day: {} (must be 1-31)",
                day
            )));
        }

        Ok(ScheduleContext {
            today: today.today(),
            color,
            show_year_in_header: true,
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
        })
    }
}

/// Today's date from `SCHEDCAL_TEST_TIME`, if set and valid.
pub fn test_time_override() -> Option<chrono::NaiveDate> {
    let value = std::env::var(TEST_TIME_ENV).ok()?;
    match chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!("ignoring invalid {}={:?}", TEST_TIME_ENV, value);
            None
        }
    }
}
