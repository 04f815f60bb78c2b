//! Schedule calendar CLI application.
//!
//! # Usage
//! ```ignore
//! schedcal                 // Current month, no games
//! schedcal games.json      // Month of the first game
//! schedcal -s games.json   // Whole season
//! schedcal -D 9 games.json // Games on the 9th
//! ```

use flexi_logger::Logger;

use schedcal::args::Args;
use schedcal::calendar::{build_month_grid, month_name, resolve_target_month, season_length};
use schedcal::error::Result;
use schedcal::formatter::{
    MonthView, format_day_detail, format_event_list, print_month, print_months,
};
use schedcal::schedule::{events_in_month, group_by_month};
use schedcal::types::{DayCell, ScheduleContext};

fn main() {
    let args = Args::parse();

    // Logging is best effort; the calendar still renders without it.
    let _logger = match Logger::try_with_env_or_str(&args.log_level).and_then(Logger::start) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("schedcal: cannot start logger: {}", e);
            None
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("schedcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let today = args.date_provider();
    let ctx = ScheduleContext::new(args, today.as_ref())?;
    let events = args.collect_events()?;

    // Display mode priority: season > single month
    if args.season {
        let groups = group_by_month(&events);
        println!("Season length: {} months", season_length(&events));
        println!();
        let views: Vec<MonthView<'_>> = groups
            .iter()
            .map(|(_, games)| {
                let (year, month) = resolve_target_month(games, today.as_ref());
                MonthView {
                    year,
                    month,
                    grid: build_month_grid(games, today.as_ref()),
                    events: games,
                }
            })
            .collect();
        print_months(&ctx, &views);
    } else {
        let (year, month) = resolve_target_month(&events, today.as_ref());
        // Only games of the rendered month are drawn on its days.
        let month_events = events_in_month(&events, month);
        let view = MonthView {
            year,
            month,
            grid: build_month_grid(&events, today.as_ref()),
            events: &month_events,
        };
        print_month(&ctx, &view);

        if let Some(day) = args.day {
            let name = month_name(month).unwrap_or_default();
            println!();
            match view.grid.days().find(|&d| d == day) {
                Some(d) => {
                    for line in format_day_detail(name, DayCell::day(d), &month_events) {
                        println!("{}", line);
                    }
                }
                None => {
                    log::warn!("day {} is not shown in the {} grid", day, name);
                    println!("{} has no day {}", name, day);
                }
            }
        }
    }

    if args.list {
        println!();
        for line in format_event_list(&events) {
            println!("{}", line);
        }
    }

    Ok(())
}
