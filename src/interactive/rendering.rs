//! TUI rendering with ratatui
//!
//! Board, letter status and deduction panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, Verdict};
use crate::game::RoundStatus;
use crate::output::formatters::{letters_with_status, position_hint};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Number of hint words listed when hints are shown
const HINT_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
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
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔤 WORD GUESS - {} letters",
        app.session.round().word_length()
    );
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

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char) -> String {
    format!(" {} ", letter.to_ascii_uppercase())
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let length = round.word_length();
    let mut lines = Vec::with_capacity(round.max_attempts());

    for attempt in round.history() {
        let mut spans = Vec::with_capacity(length * 2);
        for (&letter, &verdict) in attempt.guess.chars().iter().zip(attempt.feedback.verdicts()) {
            spans.push(Span::styled(tile(letter as char), verdict_style(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if round.status() == RoundStatus::InProgress {
        let mut typed = app.input_buffer.chars();
        let spans: Vec<Span> = (0..length)
            .flat_map(|_| {
                let cell = typed.next().map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |c| {
                        Span::styled(
                            tile(c),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                );
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let empty_rows = round.remaining_attempts().saturating_sub(1);
    for _ in 0..empty_rows {
        lines.push(Line::styled(
            " · ".repeat(length),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = format!(
        " Attempt {}/{} ",
        round.current_attempt().min(round.max_attempts()),
        round.max_attempts()
    );
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Letter board
            Constraint::Length(5), // Deductions
            Constraint::Min(4),    // Hints or messages
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_deductions(f, app, chunks[1]);
    if app.show_hints {
        render_hints(f, app, chunks[2]);
        render_messages(f, app, chunks[3]);
    } else {
        let merged = Rect {
            height: chunks[2].height + chunks[3].height,
            ..chunks[2]
        };
        render_messages(f, app, merged);
    }
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let status = app.session.round().deduction().letter_status();
    let spans: Vec<Span> = status
        .iter()
        .flat_map(|(letter, status)| {
            let style = match status {
                LetterStatus::Correct => verdict_style(Verdict::Correct),
                LetterStatus::Present => verdict_style(Verdict::Present),
                LetterStatus::Absent => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
                LetterStatus::Unknown => Style::default().fg(Color::White),
            };
            [
                Span::styled((letter as char).to_ascii_uppercase().to_string(), style),
                Span::raw(" "),
            ]
        })
        .collect();

    let letters = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(letters, area);
}

fn render_deductions(f: &mut Frame, app: &App, area: Rect) {
    let deduction = app.session.round().deduction();
    let candidates = deduction.candidates();
    let candidate_text = if candidates.is_empty() {
        "-".to_string()
    } else {
        candidates
            .iter()
            .map(|l| (l as char).to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let absent = letters_with_status(deduction.letter_status(), LetterStatus::Absent);

    let content = vec![
        Line::from(vec![
            Span::raw("Pattern:  "),
            Span::styled(
                position_hint(deduction).to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("In word:  "),
            Span::styled(candidate_text, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Absent:   "),
            Span::styled(absent, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Deductions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.hint_words(HINT_LIMIT);
    let items: Vec<ListItem> = if hints.is_empty() {
        vec![ListItem::new("No consistent words in the list")]
    } else {
        hints
            .iter()
            .map(|word| ListItem::new(format!("  {}", word.text().to_uppercase())))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Possible Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let best = app
        .session
        .best_record()
        .map_or_else(|| "-".to_string(), |b| b.to_string());
    let best = Paragraph::new(format!("Best: {best}")).alignment(Alignment::Center);
    f.render_widget(best, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.session.games_played(),
        app.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.round().status().is_finished() {
        "Esc: Quit | ^N: New Game | ←/→: Length"
    } else {
        "Enter: Submit | ^R: Reveal | ^H: Hints | ←/→: Length | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Session};
    use crate::wordlists::loader::load_pool;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_deductions() {
        let config = GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        };
        let session = Session::new(config, load_pool(Some("tiger\n"), 5)).unwrap();
        let mut app = App::new(session);
        app.input_buffer = "grape".to_string();
        app.submit();
        app.input_buffer = "ti".to_string();
        app.show_hints = true;

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Attempt 2/12"));
        assert!(text.contains("Deductions"));
        assert!(text.contains("Possible Words"));
        assert!(text.contains("TIGER"));
    }
}
