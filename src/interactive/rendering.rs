//! TUI rendering with ratatui
//!
//! Visualizations for the quiz interface.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ATTEMPTS, Round, TryMark};
use crate::output::formatters::{format_caption, format_equation};
use crate::session::{Phase, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.engine.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Round or results
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    if snapshot.phase == Phase::Complete {
        render_results(f, &snapshot, main_chunks[0]);
    } else {
        render_round(f, app, &snapshot, main_chunks[0]);
    }
    render_info_panel(f, app, &snapshot, main_chunks[1]);

    render_status(f, &snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🧮 EMOJI EQUATIONS - {}", app.engine.encoder().date_label());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Equation
            Constraint::Percentage(55), // Options
        ])
        .split(area);

    let Some(round) = snapshot.round else {
        let paragraph = Paragraph::new("Loading...").block(
            Block::default()
                .title(" Equation ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    render_equation(f, round, snapshot, chunks[0]);
    render_options(f, app, round, snapshot, chunks[1]);
}

fn render_equation(f: &mut Frame, round: &Round, snapshot: &SessionSnapshot, area: Rect) {
    let resolved = snapshot.phase == Phase::RoundResolved;
    let fill = resolved.then(|| round.correct_answer());

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_equation(round, fill),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let captions: Vec<&str> = round.equation().iter().filter_map(format_caption).collect();
    if !captions.is_empty() {
        content.push(
            Line::from(Span::styled(
                captions.join(" · "),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
    }

    if resolved && !round.rationale().trim().is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::raw("💡 "),
            Span::styled(round.rationale(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(
                    " Round {}/{} ",
                    snapshot.round_number(),
                    snapshot.total_rounds
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_options(
    f: &mut Frame,
    app: &App,
    round: &Round,
    snapshot: &SessionSnapshot,
    area: Rect,
) {
    let resolved = snapshot.phase == Phase::RoundResolved;

    let items: Vec<ListItem> = app
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_answer = option == round.correct_answer();
            let was_wrong = app.wrong_picks.contains(option);

            let style = if resolved && is_answer {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if was_wrong {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if i == app.selected && !resolved {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let marker = if i == app.selected && !resolved { "▶" } else { " " };
            ListItem::new(format!(" {marker} {}. {option}", i + 1)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Options ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn mark_span(mark: TryMark) -> Span<'static> {
    match mark {
        TryMark::Correct => Span::styled("■ ", Style::default().fg(Color::Green)),
        TryMark::Incorrect => Span::styled("■ ", Style::default().fg(Color::Red)),
        TryMark::Unused => Span::styled("□ ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_results(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "🎉 {}/{} correct",
                snapshot.score,
                snapshot.results.len()
            ),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for outcome in snapshot.results {
        let mut spans = vec![Span::raw(format!("Round {:<3}", outcome.round_index + 1))];
        spans.extend(outcome.tries.iter().map(|&mark| mark_span(mark)));
        lines.push(Line::from(spans));
    }

    if let Some(share) = &snapshot.share {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Share (printed on exit):",
            Style::default().fg(Color::Cyan),
        )));
        lines.extend(share.lines().map(|line| Line::from(line.to_string())));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Attempts and progress
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_progress(f, app, snapshot, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let used = MAX_ATTEMPTS - snapshot.attempts_remaining;
    let attempts: String = (0..MAX_ATTEMPTS)
        .map(|i| if i < used { "● " } else { "○ " })
        .collect();

    let mut lines = vec![];
    if snapshot.phase == Phase::RoundActive {
        lines.push(Line::from(format!(
            "Guesses:  {attempts} ({} left)",
            snapshot.attempts_remaining
        )));
    }
    lines.push(Line::from(format!(
        "Score:    {}/{}",
        snapshot.score,
        snapshot.results.len()
    )));

    let mut history = vec![Span::raw("History:  ")];
    history.extend(snapshot.results.iter().map(|outcome| {
        if outcome.correct {
            Span::styled("■ ", Style::default().fg(Color::Green))
        } else {
            Span::styled("■ ", Style::default().fg(Color::Red))
        }
    }));
    lines.push(Line::from(history));

    if app.stats.sessions_completed > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "Played {} · best {}/{}",
                app.stats.sessions_completed, app.stats.best_score, snapshot.total_rounds
            ),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Progress ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let help_text = match snapshot.phase {
        Phase::Complete => "r: Play Again | q: Quit",
        Phase::RoundResolved => "Enter: Continue | q: Quit",
        Phase::RoundActive | Phase::Idle => "←/→ or 1-9: Choose | Enter: Submit | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
