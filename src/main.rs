//! Detective Quest: a mystery in the mansion
//!
//! Walk the mansion, collect clues and name the most likely culprit.

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use detective_quest::tui::{App, ConsoleOptions, ReportFormat};
use detective_quest::Difficulty;
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detective-quest")]
#[command(about = "Mansion mystery built on a room tree, a clue BST and a suspect hash table")]
#[command(version)]
struct Cli {
    /// Play one case at this tier (1 = novice, 2 = adventurer, 3 = master) and exit
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    mode: Option<u8>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Format of the end-of-case summary
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = ConsoleOptions {
        mode: cli.mode.and_then(Difficulty::from_menu),
        color: !cli.no_color && stdout().is_tty(),
        report: cli.report,
    };

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), stdout().lock(), options);
    app.run()
}
