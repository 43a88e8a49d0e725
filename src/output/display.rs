//! Display functions for command results

use crate::commands::{CheckReport, DateListing, SimpleOutcome};
use colored::Colorize;

/// Print the result of checking a puzzle file
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checked: {}",
        report.path.display().to_string().bright_yellow().bold()
    );
    if let Some(date) = report.date {
        println!("Date:    {date}");
    }
    println!("{}", "─".repeat(60).cyan());

    for round in &report.rounds {
        println!(
            "\n#{:<3} {}   answer: {}",
            round.id,
            round.prompt,
            round.answer.bright_green()
        );
        println!(
            "     {} options{}",
            round.option_count,
            if round.has_rationale {
                ""
            } else {
                ", no rationale"
            }
        );
    }

    println!();
    println!(
        "{}",
        format!("✅ {} rounds valid", report.rounds.len())
            .green()
            .bold()
    );
}

/// Print the dates a repository can serve
pub fn print_date_listing(listing: &DateListing) {
    println!("\n📅 {}", "Available puzzles:".bright_cyan().bold());

    if listing.dates.is_empty() {
        println!("   (none)");
        return;
    }

    for date in &listing.dates {
        if *date == listing.today {
            println!("   {} {}", date.to_string().bright_yellow().bold(), "← today".green());
        } else if *date > listing.today {
            println!("   {}", date.to_string().bright_black());
        } else {
            println!("   {date}");
        }
    }

    if !listing.has_today()
        && let Some(latest) = listing.latest_playable()
    {
        println!("\nNo puzzle today. Try: --date {latest}");
    }
}

/// Print a message for a date with no puzzle
pub fn print_unavailable(date: chrono::NaiveDate) {
    println!(
        "\n{}",
        format!("❌ No puzzle is available for {date}. Please come back tomorrow!")
            .red()
            .bold()
    );
}

/// Print the closing summary of a simple-mode run
pub fn print_simple_outcome(outcome: &SimpleOutcome) {
    if outcome.sessions_completed > 1 {
        println!(
            "Played {} times today.",
            outcome.sessions_completed.to_string().bright_cyan()
        );
    }
}

/// Print a share string after the TUI closes
pub fn print_share(share: &str) {
    println!("\n{}", "Share your result:".bright_cyan().bold());
    println!("{share}\n");
}
