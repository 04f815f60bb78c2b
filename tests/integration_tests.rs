//! Integration tests for schedules, rendering and the `schedcal` binary.

use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::prelude::*;

use schedcal::calendar::{FixedDate, build_month_grid};
use schedcal::error::ScheduleError;
use schedcal::formatter::{
    MonthView, center_text, format_day_detail, format_event_list, format_month_grid,
    join_side_by_side, visible_width,
};
use schedcal::schedule::{
    day_note, events_in_month, events_on_day, group_by_month, load_schedule, parse_schedule,
};
use schedcal::types::{
    ColumnsMode, DayCell, Promotion, ScheduleContext, ScheduledEvent, Team, WEEKDAY_HEADER,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.json");

fn test_context() -> ScheduleContext {
    ScheduleContext {
        today: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        color: false,
        show_year_in_header: true,
        gutter_width: 2,
        columns: ColumnsMode::Fixed(3),
    }
}

fn team(abbreviation: &str) -> Team {
    Team {
        abbreviation: abbreviation.to_string(),
        ..Default::default()
    }
}

fn game(date: &str, number: u32, count: u32) -> ScheduledEvent {
    ScheduledEvent {
        id: "1".to_string(),
        date: date.to_string(),
        home_team: Some(team("LAD")),
        away_team: Some(team("SF")),
        promos: Vec::new(),
        series_game_number: number,
        series_game_count: count,
    }
}

fn fixture_events() -> Vec<ScheduledEvent> {
    load_schedule(std::path::Path::new(FIXTURE)).unwrap()
}

fn schedcal() -> Command {
    let mut cmd = Command::cargo_bin("schedcal").unwrap();
    cmd.env("SCHEDCAL_TEST_TIME", "2023-06-15");
    cmd.env_remove("RUST_LOG");
    cmd
}

mod event_model_tests {
    use super::*;

    #[test]
    fn test_series_description() {
        let mut g = game("", 1, 2);
        assert_eq!(g.series_description(), "The First Game in a 2-day Series");

        g.series_game_number = 2;
        assert_eq!(g.series_description(), "The Last Game in a 2-day Series");

        g.series_game_count = 3;
        assert_eq!(g.series_description(), "Game #2 in a 3-day Series");

        g.series_game_number = 3;
        assert_eq!(g.series_description(), "The Last Game in a 3-day Series");

        g.series_game_count = 4;
        assert_eq!(g.series_description(), "Game #3 in a 4-day Series");
    }

    #[test]
    fn test_matchup() {
        assert_eq!(game("", 1, 3).matchup(), "SF at LAD");
        assert_eq!(ScheduledEvent::new("Thur June 09 2021").matchup(), "");
    }

    #[test]
    fn test_promotions() {
        let mut g = game("", 1, 3);
        assert!(!g.has_promotions());
        g.promos.push(Promotion {
            id: "p".to_string(),
            name: "Cap Night".to_string(),
            thumbnail_url: String::new(),
        });
        assert!(g.has_promotions());
    }

    #[test]
    fn test_parse_camel_case_json() {
        let json = r#"[{
            "date": "Thur June 09 2021 at 07:10 PM",
            "homeTeam": { "abbreviation": "LAD" },
            "awayTeam": { "abbreviation": "SF" },
            "seriesGameNumber": 2,
            "seriesGameCount": 3
        }]"#;
        let events = parse_schedule(json, "inline").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].matchup(), "SF at LAD");
        assert_eq!(events[0].series_description(), "Game #2 in a 3-day Series");
        assert!(events[0].promos.is_empty());
    }

    #[test]
    fn test_parse_requires_date() {
        let err = parse_schedule(r#"[{"id": "1"}]"#, "inline").unwrap_err();
        assert!(matches!(err, ScheduleError::Json { .. }));
        assert!(err.to_string().contains("inline"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_schedule(std::path::Path::new("/nonexistent/schedule.json")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io { .. }));
    }

    #[test]
    fn test_load_fixture() {
        let events = fixture_events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].home_team.as_ref().unwrap().team_name, "Dodgers");
        assert_eq!(events[3].away_team.as_ref().unwrap().abbreviation, "SD");
    }
}

mod schedule_tests {
    use super::*;

    #[test]
    fn test_events_on_day_ignores_leading_zero() {
        let events = fixture_events();
        let on_ninth = events_on_day(&events, DayCell::day(9));
        assert_eq!(on_ninth.len(), 1);
        assert_eq!(on_ninth[0].id, "1");

        assert_eq!(events_on_day(&events, DayCell::day(4)).len(), 1);
        assert!(events_on_day(&events, DayCell::day(12)).is_empty());
        assert!(events_on_day(&events, DayCell::BLANK).is_empty());
    }

    #[test]
    fn test_events_on_day_skips_bad_dates() {
        let events = vec![ScheduledEvent::new("Barfoo"), ScheduledEvent::new("")];
        assert!(events_on_day(&events, DayCell::day(1)).is_empty());
    }

    #[test]
    fn test_group_by_month() {
        let mut events = fixture_events();
        events.reverse();
        events.push(ScheduledEvent::new("Barfoo"));

        let groups = group_by_month(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 6);
        assert_eq!(groups[1].0, 7);
        // Reversed input order is kept within the month.
        let june_ids: Vec<&str> = groups[0].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(june_ids, ["3", "2", "1"]);
    }

    #[test]
    fn test_events_in_month() {
        let events = fixture_events();
        let june = events_in_month(&events, 6);
        let june_ids: Vec<&str> = june.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(june_ids, ["1", "2", "3"]);

        let july = events_in_month(&events, 7);
        assert_eq!(july.len(), 1);
        assert_eq!(july[0].id, "4");
        assert!(events_in_month(&events, 8).is_empty());
    }

    #[test]
    fn test_other_month_games_stay_off_the_day() {
        let events = vec![
            ScheduledEvent::new("Fri June 09 2023 at 07:10 PM"),
            ScheduledEvent::new("Sun July 09 2023 at 01:10 PM"),
        ];
        let june = events_in_month(&events, 6);
        assert_eq!(
            format_day_detail("June", DayCell::day(9), &june),
            ["June 9", "   7:10 PM"]
        );
    }

    #[test]
    fn test_day_notes() {
        assert_eq!(day_note("march", DayCell::day(15)), Some("Spring Training"));
        assert_eq!(day_note("March", DayCell::day(15)), Some("Spring Training"));
        assert_eq!(day_note("october", DayCell::day(30)), Some("Post Season"));
        assert_eq!(day_note("october", DayCell::day(31)), Some("Season Over"));
        assert_eq!(day_note("bar", DayCell::day(12)), Some("Off Day"));
        assert_eq!(day_note("march", DayCell::BLANK), None);
    }
}

mod formatter_tests {
    use super::*;

    fn june_view(events: &[ScheduledEvent]) -> MonthView<'_> {
        MonthView {
            year: 2023,
            month: 6,
            grid: build_month_grid(events, &FixedDate(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap())),
            events,
        }
    }

    #[test]
    fn test_center_text() {
        assert_eq!(center_text("June 2023", 20), "      June 2023     ");
        assert_eq!(center_text("too wide", 4), "too wide");
    }

    #[test]
    fn test_visible_width_ignores_ansi() {
        assert_eq!(visible_width("\x1b[96m10\x1b[0m"), 2);
        assert_eq!(visible_width("plain"), 5);
    }

    #[test]
    fn test_month_grid_lines() {
        let events = fixture_events();
        let lines = format_month_grid(&test_context(), &june_view(&events[..3]));

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "      June 2023     ");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        assert_eq!(lines[2], format!("{}{}", " ".repeat(12), " 1  2  3"));
        assert_eq!(lines[3], " 4  5  6  7  8  9 10");
        assert_eq!(lines[6], "25 26 27 28 29 30   ");
    }

    #[test]
    fn test_month_grid_colors() {
        let events = fixture_events();
        let ctx = ScheduleContext {
            color: true,
            ..test_context()
        };
        let lines = format_month_grid(&ctx, &june_view(&events[..3]));
        let body = lines[2..].join("\n");

        assert!(body.contains("\x1b[91m 9\x1b[0m"), "promotion day in red");
        assert!(body.contains("\x1b[96m10\x1b[0m"), "game day in teal");
        assert!(body.contains("\x1b[7m15\x1b[0m"), "today reversed");
        assert!(body.contains(" 8 "), "plain day untouched");
    }

    #[test]
    fn test_blank_grid_has_header_and_one_row() {
        let view = MonthView {
            year: 2023,
            month: 6,
            grid: build_month_grid(&[], &FixedDate(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap())),
            events: &[],
        };
        let lines = format_month_grid(&test_context(), &view);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].trim(), "");
    }

    #[test]
    fn test_join_side_by_side() {
        let grids = vec![
            vec!["ab".to_string(), "cd".to_string()],
            vec!["ef".to_string()],
        ];
        let lines = join_side_by_side(&test_context(), &grids);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("ab{}ef", " ".repeat(20)));
        assert_eq!(lines[1], "cd");
    }

    #[test]
    fn test_day_detail_with_game() {
        let events = fixture_events();
        let lines = format_day_detail("June", DayCell::day(9), &events);
        assert_eq!(
            lines,
            [
                "June 9",
                "   7:10 PM  SF at LAD  (The First Game in a 3-day Series)"
            ]
        );
    }

    #[test]
    fn test_day_detail_without_game() {
        assert_eq!(
            format_day_detail("March", DayCell::day(15), &[]),
            ["March 15", "  Spring Training"]
        );
        assert!(format_day_detail("March", DayCell::BLANK, &[]).is_empty());
    }

    #[test]
    fn test_event_list() {
        let events = vec![
            fixture_events().remove(0),
            ScheduledEvent::new("Sat June 10 2023 at 06:10 PM"),
            ScheduledEvent::new("Barfoo"),
        ];
        assert_eq!(
            format_event_list(&events),
            [
                "Fri June 9 2023 at 7:10 PM  SF at LAD *",
                "Sat June 10 2023 at 6:10 PM",
                "",
            ]
        );
    }
}

mod context_validation_tests {
    use super::*;
    use clap::Parser;
    use schedcal::args::Args;

    fn today() -> FixedDate {
        FixedDate(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap())
    }

    #[test]
    fn test_context_creation_default() {
        let args = Args::parse_from(["schedcal"]);
        let ctx = ScheduleContext::new(&args, &today()).unwrap();
        assert_eq!(ctx.today, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(ctx.columns, ColumnsMode::Auto);
        assert!(ctx.show_year_in_header);
    }

    #[test]
    fn test_context_no_color() {
        let args = Args::parse_from(["schedcal", "--no-color"]);
        let ctx = ScheduleContext::new(&args, &today()).unwrap();
        assert!(!ctx.color);
    }

    #[test]
    fn test_context_fixed_columns() {
        let args = Args::parse_from(["schedcal", "-c", "2"]);
        let ctx = ScheduleContext::new(&args, &today()).unwrap();
        assert_eq!(ctx.columns, ColumnsMode::Fixed(2));
        assert_eq!(ctx.months_per_row(), 2);
    }

    #[test]
    fn test_context_invalid_columns() {
        let args = Args::parse_from(["schedcal", "-c", "0"]);
        assert!(ScheduleContext::new(&args, &today()).is_err());

        let args = Args::parse_from(["schedcal", "-c", "abc"]);
        assert!(ScheduleContext::new(&args, &today()).is_err());
    }

    #[test]
    fn test_context_mutually_exclusive_options() {
        let args = Args::parse_from(["schedcal", "-s", "-D", "3"]);
        let err = ScheduleContext::new(&args, &today()).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_context_invalid_day() {
        let args = Args::parse_from(["schedcal", "-D", "40"]);
        assert!(ScheduleContext::new(&args, &today()).is_err());
    }

    #[test]
    fn test_collect_events_appends_dates() {
        let args = Args::parse_from([
            "schedcal",
            FIXTURE,
            "-d",
            "Sat July 01 2023 at 07:10 PM",
        ]);
        let events = args.collect_events().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[4].date, "Sat July 01 2023 at 07:10 PM");
    }
}

mod cli_tests {
    use super::*;

    #[test]
    fn test_month_from_schedule() {
        schedcal()
            .arg(FIXTURE)
            .assert()
            .success()
            .stdout(predicate::str::contains("June 2023"))
            .stdout(predicate::str::contains(WEEKDAY_HEADER))
            .stdout(predicate::str::contains(" 4  5  6  7  8  9 10"))
            .stdout(predicate::str::contains("25 26 27 28 29 30"));
    }

    #[test]
    fn test_help_describes_empty_grid() {
        schedcal()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("empty grid for the current month"));
    }

    #[test]
    fn test_no_schedule_shows_current_month() {
        schedcal()
            .assert()
            .success()
            .stdout(predicate::str::contains("June 2023"))
            .stdout(predicate::str::contains(" 1  2  3").not());
    }

    #[test]
    fn test_date_option() {
        schedcal()
            .args(["-d", "Sat July 01 2023 at 07:10 PM"])
            .assert()
            .success()
            .stdout(predicate::str::contains("July 2023"))
            .stdout(predicate::str::contains("30 31"));
    }

    #[test]
    fn test_day_detail() {
        schedcal()
            .args(["-D", "9", FIXTURE])
            .assert()
            .success()
            .stdout(predicate::str::contains("June 9"))
            .stdout(predicate::str::contains(
                "7:10 PM  SF at LAD  (The First Game in a 3-day Series)",
            ));

        schedcal()
            .args(["-D", "12", FIXTURE])
            .assert()
            .success()
            .stdout(predicate::str::contains("Off Day"));
    }

    #[test]
    fn test_day_detail_ignores_other_months() {
        schedcal()
            .args(["-D", "4", FIXTURE])
            .assert()
            .success()
            .stdout(predicate::str::contains("June 4"))
            .stdout(predicate::str::contains("Off Day"))
            .stdout(predicate::str::contains("SD at LAD").not());
    }

    #[test]
    fn test_day_detail_outside_month() {
        schedcal()
            .args(["-D", "31", FIXTURE])
            .assert()
            .success()
            .stdout(predicate::str::contains("June has no day 31"));
    }

    #[test]
    fn test_season() {
        schedcal()
            .args(["-s", "-c", "2", FIXTURE])
            .assert()
            .success()
            .stdout(predicate::str::contains("Season length: 2 months"))
            .stdout(predicate::str::is_match(r"June 2023\s+July 2023").unwrap());
    }

    #[test]
    fn test_list() {
        schedcal()
            .args(["-l", FIXTURE])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Fri June 9 2023 at 7:10 PM  SF at LAD *",
            ))
            .stdout(predicate::str::contains(
                "Tue July 4 2023 at 7:10 PM  SD at LAD *",
            ));
    }

    #[test]
    fn test_stdin() {
        let json = std::fs::read_to_string(FIXTURE).unwrap();
        schedcal()
            .arg("-")
            .write_stdin(json)
            .assert()
            .success()
            .stdout(predicate::str::contains("June 2023"));
    }

    #[test]
    fn test_missing_file() {
        schedcal()
            .arg("/nonexistent/schedule.json")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("schedcal: cannot read"));
    }

    #[test]
    fn test_invalid_json() {
        schedcal()
            .arg("-")
            .write_stdin("{not json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid schedule"));
    }

    #[test]
    fn test_invalid_columns() {
        schedcal()
            .args(["-c", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Columns must be positive"));
    }
}
