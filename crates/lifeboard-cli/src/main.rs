use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lifeboard-cli", version, about = "Lifeboard CLI")]
struct Cli {
    /// JSON commitments snapshot (defaults to data.commitments_file)
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit queries and the completion toggle
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Dashboard aggregate for every commitment
    Agenda(commands::agenda::AgendaArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LIFEBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let snapshot = commands::Snapshot::new(cli.file);
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action, &snapshot),
        Commands::Agenda(args) => commands::agenda::run(args, &snapshot),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
