//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{HISTORY_HEADINGS, feedback_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
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

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let length = app.config.secret_length;

    let header = Row::new(
        std::iter::once("#")
            .chain(HISTORY_HEADINGS)
            .chain(std::iter::once("Pegs")),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .game
        .history()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.feedback.is_perfect(length) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(entry.guess.to_string()),
                Cell::from(entry.feedback.exact.to_string()),
                Cell::from(entry.feedback.value.to_string()),
                Cell::from(feedback_pegs(entry.feedback, length)),
            ])
            .style(style)
        })
        .collect();

    let guess_width = u16::try_from(length * 3).unwrap_or(u16::MAX).max(5);
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(guess_width),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Min(4),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(table, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses left gauge
            Constraint::Length(5), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_guesses_left(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses_left(f: &mut Frame, app: &App, area: Rect) {
    let max = app.config.max_guesses;
    let left = app.game.guesses_left();
    let ratio = if max > 0 { left as f64 / max as f64 } else { 0.0 };

    let color = if left * 4 <= max {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{left}/{max}"));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.hint {
        Some(hint) => vec![
            Line::from(vec![
                Span::raw("Try:   "),
                Span::styled(
                    hint.guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Codes: {} still possible", hint.candidates)),
            Line::from(format!("Worst: {} left after it", hint.worst_case)),
        ],
        None => vec![Line::from("Press TAB for a hint")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Solver Hint ")
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (" Game over | 'n' new game, 'q' quit ", "", Color::Green),
        InputMode::Guess => (
            " Enter your guess (e.g. 1 2 3 4) | ENTER submit | TAB hint ",
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
    let text = format!(
        "Games: {} | Won: {} | Symbols 1-{} | Length {} | ESC: Quit",
        app.stats.total_games,
        app.stats.games_won,
        app.config.num_choices,
        app.config.secret_length
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Code;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_history_and_gauge() {
        let config = GameConfig::default();
        let secret = Code::new(vec![2, 1, 2, 2], &config).unwrap();
        let mut app = App::new(config, Some(secret), StdRng::seed_from_u64(1)).unwrap();
        app.input_buffer = "1232".to_string();
        app.submit_guess();

        let text = screen(&app);
        assert!(text.contains("Correct Position"));
        assert!(text.contains("1 2 3 2"));
        assert!(text.contains("11/12"));
        assert!(text.contains("Press TAB for a hint"));
    }
}
