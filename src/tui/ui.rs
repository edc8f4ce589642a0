//! UI rendering using ratatui
//!
//! Screens:
//! - Playing: figure, masked word, guesses, input and feedback
//! - Stats: lifetime statistics panel
//! - RoundOver: revealed word, outcome, statistics and the play-again prompt

use super::figure;
use crate::app::{App, Screen, Tone};
use crate::game::GameStatus;
use crate::stats::StatsTracker;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);

    match app.screen {
        Screen::Playing => render_game(frame, layout[1], app),
        Screen::Stats => render_stats_panel(frame, layout[1], app.tracker()),
        Screen::RoundOver => render_round_over(frame, layout[1], app),
    }

    let footer = Paragraph::new(app.screen.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // logo | category | tries
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(16),
        ])
        .split(inner);

    let logo = Paragraph::new("HANGMAN")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let category = Paragraph::new(format!("Category: {}", app.category()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(category, header_layout[1]);

    let tries = app.session().attempts_remaining();
    let tries_widget = Paragraph::new(format!("Tries left: {}", tries))
        .style(Style::default().fg(tries_color(tries)).bold())
        .alignment(Alignment::Right);
    frame.render_widget(tries_widget, header_layout[2]);
}

/// Figure on the left, everything else on the right
fn split_with_figure(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(30)])
        .split(area);

    let figure_area = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(figure::height()), Constraint::Min(0)])
        .split(columns[0])[0];

    let drawing = Paragraph::new(figure::stage(app.session().wrong_guesses()))
        .style(Style::default().fg(figure_color(app.session().status())));
    frame.render_widget(drawing, figure_area);

    columns[1]
}

fn render_game(frame: &mut Frame, area: Rect, app: &App) {
    let content = split_with_figure(frame, area, app);
    let session = app.session();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Word mask
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Correct guesses
            Constraint::Length(1), // Incorrect guesses
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Spacer
            Constraint::Min(2),    // Feedback
        ])
        .split(content);

    let word = Paragraph::new(format!("Word: {}", session.rendered_word()))
        .style(Style::default().fg(Color::White).bold());
    frame.render_widget(word, rows[0]);

    let correct = session.correct_letters();
    if !correct.is_empty() {
        let line = Paragraph::new(format!("Correct guesses: {}", format_letters(&correct)))
            .style(Style::default().fg(Color::Green));
        frame.render_widget(line, rows[2]);
    }

    let incorrect = session.incorrect_letters();
    if !incorrect.is_empty() {
        let line = Paragraph::new(format!("Incorrect guesses: {}", format_letters(&incorrect)))
            .style(Style::default().fg(Color::Red));
        frame.render_widget(line, rows[3]);
    }

    render_input_line(frame, rows[5], "Enter a letter (or command)", &app.input);
    render_feedback(frame, rows[7], app);
}

fn render_round_over(frame: &mut Frame, area: Rect, app: &App) {
    let content = split_with_figure(frame, area, app);
    let session = app.session();
    let won = session.status() == GameStatus::Won;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Revealed word
            Constraint::Length(1), // Spacer
            Constraint::Length(7), // Stats
            Constraint::Length(1), // Save warning
            Constraint::Length(1), // Prompt
            Constraint::Min(2),    // Feedback
        ])
        .split(content);

    let (headline, color) = if won {
        ("Excellent work! You're a word master!", Color::Green)
    } else {
        ("Better luck next time! Keep practicing!", Color::Red)
    };
    frame.render_widget(
        Paragraph::new(headline).style(Style::default().fg(color).bold()),
        rows[0],
    );

    let reveal = Paragraph::new(format!("The word was '{}'", session.secret_word()))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(reveal, rows[1]);

    render_stats_panel(frame, rows[3], app.tracker());

    if let Some(warning) = &app.save_warning {
        let line = Paragraph::new(warning.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(line, rows[4]);
    }

    render_input_line(frame, rows[5], "Would you like to play again? (y/n)", &app.input);
    render_feedback(frame, rows[6], app);
}

fn render_stats_panel(frame: &mut Frame, area: Rect, tracker: &StatsTracker) {
    let text = stats_lines(tracker).join("\n");
    let panel = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Game Statistics"),
        );
    frame.render_widget(panel, area);
}

fn render_input_line(frame: &mut Frame, area: Rect, prompt: &str, input: &str) {
    let line = Paragraph::new(format!("{}: {}_", prompt, input))
        .style(Style::default().fg(Color::White));
    frame.render_widget(line, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    if app.feedback.is_empty() {
        return;
    }
    let feedback = Paragraph::new(app.feedback.text.as_str())
        .style(Style::default().fg(tone_color(app.feedback.tone)))
        .wrap(Wrap { trim: true });
    frame.render_widget(feedback, area);
}

/// Lines of the statistics panel
fn stats_lines(tracker: &StatsTracker) -> Vec<String> {
    vec![
        format!("Games Played: {}", tracker.games_played()),
        format!("Games Won: {}", tracker.games_won()),
        format!("Win Rate: {:.1}%", tracker.win_percentage()),
        format!("Current Streak: {}", tracker.current_streak()),
        format!("Best Streak: {}", tracker.best_streak()),
    ]
}

/// Comma-separated letters, e.g. "A, E, M"
fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn tries_color(tries: u8) -> Color {
    match tries {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    }
}

fn figure_color(status: GameStatus) -> Color {
    match status {
        GameStatus::Playing => Color::White,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::Cyan,
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
        Tone::Warning => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_letters() {
        assert_eq!(format_letters(&[]), "");
        assert_eq!(format_letters(&['A']), "A");
        assert_eq!(format_letters(&['A', 'E', 'M']), "A, E, M");
    }

    #[test]
    fn test_stats_lines() {
        let mut tracker = StatsTracker::new();
        tracker.record_outcome(GameStatus::Won).unwrap();
        tracker.record_outcome(GameStatus::Won).unwrap();
        tracker.record_outcome(GameStatus::Lost).unwrap();

        assert_eq!(
            stats_lines(&tracker),
            vec![
                "Games Played: 3",
                "Games Won: 2",
                "Win Rate: 66.7%",
                "Current Streak: 0",
                "Best Streak: 2",
            ]
        );
    }

    #[test]
    fn test_stats_lines_with_no_games() {
        let lines = stats_lines(&StatsTracker::new());
        assert_eq!(lines[2], "Win Rate: 0.0%");
    }

    #[test]
    fn test_tries_color_thresholds() {
        assert_eq!(tries_color(6), Color::Green);
        assert_eq!(tries_color(4), Color::Green);
        assert_eq!(tries_color(3), Color::Yellow);
        assert_eq!(tries_color(2), Color::Yellow);
        assert_eq!(tries_color(1), Color::Red);
        assert_eq!(tries_color(0), Color::Red);
    }

    #[test]
    fn test_tone_colors_are_distinct() {
        let colors = [
            tone_color(Tone::Neutral),
            tone_color(Tone::Good),
            tone_color(Tone::Bad),
            tone_color(Tone::Warning),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
