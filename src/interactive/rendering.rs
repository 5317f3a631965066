//! TUI rendering with ratatui
//!
//! Three boards side by side in the puzzle's display order, each with its own keyboard.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Language, LetterStatus, MAX_GUESSES, StatusRow, WORD_LENGTH, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Min(MAX_GUESSES as u16 + 6), // Boards
            Constraint::Length(7),                   // Score and messages
            Constraint::Length(3),                   // Input area
            Constraint::Length(3),                   // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let board_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    for (&language, &area) in app.session.puzzle().display_order.iter().zip(board_chunks.iter()) {
        render_board(f, app, language, area);
    }

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Score
            Constraint::Percentage(50), // Messages
        ])
        .split(chunks[2]);

    render_score(f, app, info_chunks[0]);
    render_messages(f, app, info_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🌍 TRIWORD  {}",
        app.session.puzzle().id.as_str()
    ))
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

fn tile_style(status: LetterStatus) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => base.fg(Color::White),
    }
}

fn guess_line(guess: &Word, row: &StatusRow) -> Line<'static> {
    let spans: Vec<Span> = guess
        .chars()
        .iter()
        .zip(row.iter())
        .map(|(&letter, status)| {
            Span::styled(
                format!(" {} ", char::from(letter).to_ascii_uppercase()),
                tile_style(status),
            )
        })
        .collect();
    Line::from(spans)
}

fn pending_line(input: &str) -> Line<'static> {
    let spans: Vec<Span> = input
        .chars()
        .map(|c| c.to_uppercase().to_string())
        .chain(std::iter::repeat_n("·".to_string(), WORD_LENGTH))
        .take(WORD_LENGTH)
        .map(|c| Span::styled(format!(" {c} "), Style::default().fg(Color::Yellow)))
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, language: Language, area: Rect) {
    let session = &app.session;
    let solved = session.is_solved(language);
    let rows = session.rows(language);

    let mut lines: Vec<Line> = session
        .guesses()
        .iter()
        .zip(rows)
        .map(|(guess, row)| guess_line(guess, row))
        .collect();

    if app.input_mode == InputMode::Guessing && !solved {
        lines.push(pending_line(&app.input_buffer));
    }
    while lines.len() < MAX_GUESSES {
        lines.push(Line::from(Span::styled(
            " ·  ·  ·  ·  · ",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.truncate(MAX_GUESSES);

    if app.input_mode == InputMode::GameOver && !solved {
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                session.solutions()[language].display().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(""));
    }

    for keys in KEYBOARD_ROWS {
        let spans: Vec<Span> = keys
            .chars()
            .map(|letter| {
                Span::styled(
                    letter.to_ascii_uppercase().to_string(),
                    tile_style(app.keyboard.get(language, letter)),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let title = format!(
        " {} {} · {} ",
        if solved { "✓" } else { " " },
        language.name(),
        session.puzzle().difficulties[language]
    );
    let color = if solved { Color::Green } else { Color::White };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(board, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(area);

    let used = app.session.turn();
    let progress_pct = (used * 100 / MAX_GUESSES).min(100) as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{used}/{MAX_GUESSES} used | Score {}",
            app.session.score()
        ));
    f.render_widget(gauge, chunks[0]);

    let content = match &app.last_turn {
        Some(turn) => {
            let breakdown: Vec<Span> = app
                .session
                .puzzle()
                .display_order
                .iter()
                .map(|&language| {
                    let points = turn.languages[language];
                    if points.skipped {
                        Span::styled(
                            format!("{} -  ", language.code()),
                            Style::default().fg(Color::DarkGray),
                        )
                    } else {
                        Span::raw(format!("{} {:+}  ", language.code(), points.total()))
                    }
                })
                .collect();
            vec![
                Line::from(format!(
                    "Turn {} (x{}): {:+}",
                    turn.turn,
                    turn.weight,
                    turn.total()
                )),
                Line::from(breakdown),
            ]
        }
        None => vec![Line::from("No guesses yet")],
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Last Turn ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[1]);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a 5-letter word in any of the three languages ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Status: {}", app.session.status());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {}%",
        app.stats.games_played, app.stats.win_percentage
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
