use chrono::NaiveDate;
use clap::Args;
use lifeboard_core::{build_agenda, today_local, Config};

use super::{parse_day, Snapshot};

#[derive(Args)]
pub struct AgendaArgs {
    /// Reference day (defaults to today)
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,
    /// Only commitments still open today
    #[arg(long)]
    open: bool,
}

pub fn run(args: AgendaArgs, snapshot: &Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let commitments = snapshot.load(&config)?;
    let today = args.today.unwrap_or_else(today_local);

    let mut agenda = build_agenda(&commitments, today, config.window_length());
    if args.open {
        agenda.retain(|entry| entry.needs_attention());
    }
    println!("{}", serde_json::to_string_pretty(&agenda)?);
    Ok(())
}
