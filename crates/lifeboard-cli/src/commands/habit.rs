//! Habit commands: create, query and toggle commitments in a snapshot.

use chrono::NaiveDate;
use clap::Subcommand;
use lifeboard_core::storage::{find_commitment, replace_commitment, MAX_WINDOW_LENGTH};
use lifeboard_core::{
    current_streak, due_on, is_completed, streak_summary, today_local, toggle_completion_at,
    weekly_progress, window_summary, Commitment, Config, ScheduledDays,
};
use serde::Serialize;

use super::{parse_day, Snapshot};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Print a new commitment as JSON
    New {
        /// Display name
        name: String,
        /// Comma-separated weekdays, 0=Sunday .. 6=Saturday (default: every day)
        #[arg(long, value_delimiter = ',')]
        days: Vec<i64>,
        /// Creation day (defaults to today)
        #[arg(long, value_parser = parse_day)]
        created: Option<NaiveDate>,
    },
    /// Commitments due on a day
    Due {
        /// Day to check (defaults to today)
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Current and longest streaks
    Streak {
        /// Only this commitment
        #[arg(long)]
        id: Option<String>,
        /// Reference day (defaults to today)
        #[arg(long, value_parser = parse_day)]
        today: Option<NaiveDate>,
    },
    /// Rolling compliance window
    Week {
        /// Commitment ID
        #[arg(long)]
        id: String,
        /// Last day of the window (defaults to today)
        #[arg(long, value_parser = parse_day)]
        end: Option<NaiveDate>,
        /// Window length in days (defaults to progress.window_length)
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_LENGTH))
        )]
        length: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip completion of a day and print the updated snapshot
    Toggle {
        /// Commitment ID
        #[arg(long)]
        id: String,
        /// Day to toggle (defaults to today)
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
        /// Day to refresh the streak for (defaults to today)
        #[arg(long, value_parser = parse_day)]
        today: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DueRow<'a> {
    id: &'a str,
    name: &'a str,
    done: bool,
    streak: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StreakRow<'a> {
    id: &'a str,
    name: &'a str,
    current: u32,
    longest: u32,
}

pub fn run(action: HabitAction, snapshot: &Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::New {
            name,
            days,
            created,
        } => {
            let created = created.unwrap_or_else(today_local);
            let commitment =
                Commitment::new(name, created).with_schedule(ScheduledDays::from_indices(days));
            println!("{}", serde_json::to_string_pretty(&commitment)?);
        }
        HabitAction::Due { date, json } => {
            let config = Config::load()?;
            let commitments = snapshot.load(&config)?;
            let date = date.unwrap_or_else(today_local);

            let rows: Vec<DueRow> = due_on(&commitments, date)
                .into_iter()
                .map(|c| DueRow {
                    id: c.id(),
                    name: &c.name,
                    done: is_completed(c, date),
                    streak: current_streak(c, date),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("Nothing due on {date}");
            } else {
                for row in &rows {
                    let mark = if row.done { "x" } else { " " };
                    println!("[{mark}] {} (streak {})", row.name, row.streak);
                }
            }
        }
        HabitAction::Streak { id, today } => {
            let config = Config::load()?;
            let commitments = snapshot.load(&config)?;
            let today = today.unwrap_or_else(today_local);

            let selected: Vec<&Commitment> = match id {
                Some(id) => vec![find_commitment(&commitments, &id)?],
                None => commitments.iter().collect(),
            };
            let rows: Vec<StreakRow> = selected
                .into_iter()
                .map(|c| {
                    let summary = streak_summary(c, today);
                    StreakRow {
                        id: c.id(),
                        name: &c.name,
                        current: summary.current,
                        longest: summary.longest,
                    }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Week {
            id,
            end,
            length,
            json,
        } => {
            let config = Config::load()?;
            let commitments = snapshot.load(&config)?;
            let end = end.unwrap_or_else(today_local);
            let length = length.map_or_else(|| config.window_length(), |n| n as usize);

            let commitment = find_commitment(&commitments, &id)?;
            let window = weekly_progress(commitment, end, length);

            if json {
                println!("{}", serde_json::to_string_pretty(&window)?);
            } else {
                let header: Vec<String> = window
                    .iter()
                    .map(|day| day.date.format("%a").to_string().chars().take(2).collect())
                    .collect();
                let cells: Vec<String> = window
                    .iter()
                    .map(|day| format!("{:<2}", day.glyph()))
                    .collect();
                let summary = window_summary(&window);
                let streak = streak_summary(commitment, end);

                println!("{}", commitment.name);
                println!("{}", header.join(" "));
                println!("{}", cells.join(" "));
                println!(
                    "{}/{} due days done, streak {} (best {})",
                    summary.completed, summary.due, streak.current, streak.longest
                );
            }
        }
        HabitAction::Toggle { id, date, today } => {
            let config = Config::load()?;
            let mut commitments = snapshot.load(&config)?;
            let today = today.unwrap_or_else(today_local);
            let date = date.unwrap_or(today);

            let updated = toggle_completion_at(find_commitment(&commitments, &id)?, date, today);
            replace_commitment(&mut commitments, updated)?;
            println!("{}", serde_json::to_string_pretty(&commitments)?);
        }
    }
    Ok(())
}
