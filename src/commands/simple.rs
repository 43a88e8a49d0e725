//! Simple interactive CLI mode
//!
//! Text-based quiz without TUI. Instead of a timed pause, the player presses
//! Enter to move past a resolved round.

use crate::core::Round;
use crate::output::formatters::{display_order, format_caption, format_equation, outcome_summary};
use crate::session::{AdvanceResult, SessionEngine, SubmitResult};
use crate::share::ShareEncoder;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// How a simple-mode run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleOutcome {
    /// Number of completed play-throughs
    pub sessions_completed: usize,
    /// Share string of the last completed play-through
    pub last_share: Option<String>,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if `rounds` is empty.
pub fn run_simple<R: Rng + ?Sized>(
    rounds: Vec<Round>,
    encoder: ShareEncoder,
    rng: &mut R,
) -> Result<SimpleOutcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(stdin.lock(), stdout.lock(), rounds, encoder, rng)
}

enum Input {
    Pick(String),
    Quit,
}

/// Play sessions over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error on I/O failure or if `rounds` is empty.
pub fn play<I: BufRead, O: Write, R: Rng + ?Sized>(
    mut input: I,
    mut out: O,
    rounds: Vec<Round>,
    encoder: ShareEncoder,
    rng: &mut R,
) -> Result<SimpleOutcome> {
    let mut engine = SessionEngine::new(encoder);
    engine.start(rounds.clone())?;

    let mut outcome = SimpleOutcome {
        sessions_completed: 0,
        last_share: None,
    };

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║     Emoji Equations - {:<22} ║", engine.encoder().date_label())?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Fill in the missing emoji. Type the option number, or 'q' to quit.\n")?;

    'session: loop {
        while let Some(round) = engine.current_round().cloned() {
            let (number, total) = {
                let snapshot = engine.snapshot();
                (snapshot.round_number(), snapshot.total_rounds)
            };
            let options = display_order(&round, rng);
            let mut tried: Vec<&str> = Vec::new();

            while engine.state().attempts_remaining > 0 {
                let left = engine.state().attempts_remaining;
                writeln!(out, "────────────────────────────────────────────────")?;
                writeln!(
                    out,
                    "Round {number}/{total}: {left} {} left",
                    if left == 1 { "guess" } else { "guesses" }
                )?;
                writeln!(out, "\n   {}\n", format_equation(&round, None))?;
                for caption in round.equation().iter().filter_map(format_caption) {
                    writeln!(out, "   ({caption})")?;
                }
                for (i, option) in options.iter().enumerate() {
                    writeln!(out, "  {}) {option}", i + 1)?;
                }

                let choice = match read_choice(&mut input, &mut out, options.len())? {
                    Input::Pick(choice) => choice,
                    Input::Quit => break 'session,
                };
                let Some(option) = options.get(choice.parse::<usize>().unwrap_or(0).wrapping_sub(1))
                else {
                    writeln!(out, "❌ Pick a number between 1 and {}\n", options.len())?;
                    continue;
                };
                if tried.contains(&option.as_str()) {
                    writeln!(out, "↺ Already tried {option}. Pick another.\n")?;
                    continue;
                }

                match engine.submit(option) {
                    SubmitResult::Incorrect { attempts_remaining } => {
                        tried.push(option);
                        writeln!(out, "\n✗ Not quite. {attempts_remaining} left.\n")?;
                    }
                    SubmitResult::Resolved(resolved) => {
                        writeln!(out, "\n{}", outcome_summary(&resolved))?;
                        writeln!(
                            out,
                            "   {}",
                            format_equation(&round, Some(round.correct_answer()))
                        )?;
                        if !round.rationale().trim().is_empty() {
                            writeln!(out, "   💡 {}", round.rationale())?;
                        }
                    }
                    SubmitResult::Ignored => {}
                }
            }

            if let Input::Quit = prompt(&mut input, &mut out, "\nPress Enter to continue")? {
                break 'session;
            }
            if engine.advance() == AdvanceResult::Complete {
                debug!("Simple session complete");
            }
        }

        let share = engine.share_string();
        outcome.sessions_completed += 1;

        writeln!(out, "\n════════════════════════════════════════════════")?;
        writeln!(
            out,
            "  Score: {}/{}",
            engine.score(),
            engine.state().rounds.len()
        )?;
        writeln!(out, "════════════════════════════════════════════════\n")?;
        if let Some(share) = &share {
            writeln!(out, "{share}\n")?;
        }
        outcome.last_share = share;

        match prompt(&mut input, &mut out, "Play again? (yes/no)")? {
            Input::Pick(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                engine.restart(rounds.clone())?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => break,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(outcome)
}

fn read_choice<I: BufRead, O: Write>(input: &mut I, out: &mut O, count: usize) -> Result<Input> {
    prompt(input, out, &format!("\nPick (1-{count})"))
}

/// Show a prompt and read one trimmed line; end of input counts as quit
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> Result<Input> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Quit);
    }

    let line = line.trim();
    if matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Input::Quit);
    }
    Ok(Input::Pick(line.to_string()))
}
