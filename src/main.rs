//! Emoji Equations - CLI
//!
//! Daily emoji equation quiz with TUI and plain CLI modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use emoji_equations::{
    commands::{check_puzzle_file, list_dates, run_simple},
    config::{QuizConfig, Timing, today},
    core::Round,
    error::QuizError,
    output::{
        print_check_report, print_date_listing, print_share, print_simple_outcome,
        print_unavailable,
    },
    share::DEFAULT_URL,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// TUI mode logs here so output does not corrupt the screen
const LOG_FILE: &str = "emoji_equations.log";

#[derive(Parser)]
#[command(
    name = "emoji_equations",
    about = "Daily emoji equation quiz: find the missing emoji",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date as YYYY-MM-DD (default: today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Directory of YYYY-MM-DD.json puzzle files (default: built-in puzzles)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for option shuffling
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Link appended to the share string
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    url: String,

    /// Pause after a resolved round, in milliseconds
    #[arg(long, global = true, default_value = "1500")]
    delay_ms: u64,

    /// Pause after a resolved round that has a rationale, in milliseconds
    #[arg(long, global = true, default_value = "4000")]
    rationale_delay_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompts without TUI)
    Simple,

    /// Validate a puzzle file and summarize its rounds
    Check {
        /// Path to the puzzle JSON file
        path: PathBuf,
    },

    /// List the dates that have a puzzle
    Dates,
}

impl Cli {
    fn config(&self) -> QuizConfig {
        QuizConfig {
            date: self.date.unwrap_or_else(today),
            data_dir: self.data_dir.clone(),
            seed: self.seed,
            url: self.url.clone(),
            timing: Timing {
                resolve_delay: Duration::from_millis(self.delay_ms),
                rationale_delay: Duration::from_millis(self.rationale_delay_ms),
            },
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr for line-based commands, to a file for the TUI
fn init_tracing(tui: bool) -> Result<()> {
    if tui {
        let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(matches!(command, Commands::Play))?;
    debug!(date = %config.date, data_dir = ?config.data_dir, "Starting");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { path } => run_check_command(&path),
        Commands::Dates => run_dates_command(&config),
    }
}

/// Load the configured day's rounds; `None` if that day has no puzzle
fn load_rounds(config: &QuizConfig) -> Result<Option<Vec<Round>>> {
    match config.repository().load(config.date) {
        Ok(rounds) => {
            info!(date = %config.date, rounds = rounds.len(), "Loaded puzzle");
            Ok(Some(rounds))
        }
        Err(QuizError::DataUnavailable { date }) => {
            print_unavailable(date);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("loading puzzle for {}", config.date)),
    }
}

fn run_play_command(config: &QuizConfig) -> Result<()> {
    use emoji_equations::interactive::{App, run_tui};

    let Some(rounds) = load_rounds(config)? else {
        return Ok(());
    };

    let app = App::new(rounds, config.encoder(), config.timing, config.rng())?;
    if let Some(share) = run_tui(app)? {
        print_share(&share);
    }
    Ok(())
}

fn run_simple_command(config: &QuizConfig) -> Result<()> {
    let Some(rounds) = load_rounds(config)? else {
        return Ok(());
    };

    let mut rng = config.rng();
    let outcome = run_simple(rounds, config.encoder(), &mut rng)?;
    print_simple_outcome(&outcome);
    Ok(())
}

fn run_check_command(path: &Path) -> Result<()> {
    let report = check_puzzle_file(path)?;
    print_check_report(&report);
    Ok(())
}

fn run_dates_command(config: &QuizConfig) -> Result<()> {
    let listing = list_dates(config.repository().as_ref(), today())?;
    print_date_listing(&listing);
    Ok(())
}
