//! TUI rendering with ratatui
//!
//! Layout for the word scramble screen and its modal alerts.

use super::app::{App, MessageStyle};
use crate::core::{Feasibility, SpellChecker};
use crate::output::formatters::{capitalize, score_line};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Round info and messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if app.alert.is_some() {
        render_alert(f, app);
    }
}

fn render_header<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw("🔤 WORD SCRAMBLE  ·  "),
        Span::styled(
            capitalize(app.session.state().root_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
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

fn render_input<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter new word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_words<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let state = app.session.state();

    let items: Vec<ListItem> = if state.used_words().is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        state
            .used_words()
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("({:>2}) ", word.chars().count()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(capitalize(word)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", state.word_count()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Round stats
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_round_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_stats<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let rules = app.session.rules();
    let letters = match rules.feasibility {
        Feasibility::Letters => "reuse allowed",
        Feasibility::Multiset => "each letter once",
    };

    let content = vec![
        Line::from(format!("Round:      {}", app.session.rounds_played())),
        Line::from(format!("Best score: {}", app.session.best_score())),
        Line::from(format!("Min length: {}", rules.min_length)),
        Line::from(format!("Letters:    {letters}")),
        Line::from(format!("Language:   {}", rules.language)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
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

fn render_status<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let score = Paragraph::new(score_line(app.session.state().score()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(score, chunks[0]);

    let help = Paragraph::new("Enter: Submit | TAB: Scoring | Ctrl-R: Reset | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_alert<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let (color, hint) = if alert.needs_confirmation() {
        (Color::Yellow, "y/Enter: Reset | n/Esc: Cancel")
    } else if alert.is_error() {
        (Color::Red, "Enter: OK")
    } else {
        (Color::Cyan, "Enter: OK")
    };

    let message = alert.message();
    let mut lines: Vec<Line> = message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let area = centered_rect(f.area(), 60, 9);
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::game::Session;
    use crate::output::Alert;
    use crate::wordlists::{Dictionary, WordList};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<Dictionary> {
        App::new(Session::new(
            WordList::from_slice(&["silent"]),
            Dictionary::new("en", ["lines"]),
            Rules::default(),
            StdRng::seed_from_u64(1),
        ))
    }

    fn screen(app: &App<Dictionary>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_root_and_score() {
        let mut app = app();
        app.input_buffer = "lines".to_string();
        app.submit_input();

        let text = screen(&app);
        assert!(text.contains("Silent"));
        assert!(text.contains("Your score: 10"));
        assert!(text.contains("Lines"));
    }

    #[test]
    fn renders_alert_popup() {
        let mut app = app();
        app.alert = Some(Alert::ResetConfirm);

        let text = screen(&app);
        assert!(text.contains("Reset game"));
        assert!(text.contains("Cancel"));
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(area, 60, 9);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 9);
        assert_eq!(popup.x, 20);
    }
}
