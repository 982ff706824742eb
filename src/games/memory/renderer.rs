/// Memory word game renderer - pure drawing, no game logic
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game::{Feedback, MemoryWordGame, Screen};

const TITLE: (u8, u8, u8) = (0, 200, 220);
const TEXT: (u8, u8, u8) = (230, 230, 230);
const DIM: (u8, u8, u8) = (140, 140, 140);
const HEART: (u8, u8, u8) = (220, 40, 60);
const GOOD: (u8, u8, u8) = (60, 200, 90);

/// Scales an RGB colour by the screen's current opacity.
fn faded((r, g, b): (u8, u8, u8), opacity: f32) -> Color {
    let scale = |c: u8| (f32::from(c) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

pub fn render<R: Rng>(frame: &mut Frame, game: &MemoryWordGame<R>) {
    let (screen, opacity) = game.visible();
    // A fully faded screen is not drawn at all.
    if opacity <= 0.0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new(" MEMWORD ")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(faded(TITLE, opacity)).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match screen {
        Screen::Start => render_start(frame, chunks[1], chunks[2], game, opacity),
        Screen::Main => render_main(frame, chunks[1], chunks[2], game, opacity),
        Screen::End => render_end(frame, chunks[1], chunks[2], game, opacity),
    }
}

fn render_start<R: Rng>(
    frame: &mut Frame,
    body: Rect,
    footer: Rect,
    game: &MemoryWordGame<R>,
    opacity: f32,
) {
    let mut lines = vec![
        Line::from("Words appear one at a time."),
        Line::from("Say whether you have seen each word before in this round."),
        Line::from(""),
        Line::from(format!(
            "Right answers score a point. Wrong answers cost a life. You have {}.",
            game.state().max_lives()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(faded(TITLE, opacity)).add_modifier(Modifier::BOLD),
        )),
    ];
    if game.best_score() > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Best score: {}", game.best_score())));
    }
    lines.extend(error_line(game, opacity));

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(faded(TEXT, opacity)))
            .block(Block::default().title(" HOW TO PLAY ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        body,
    );
    render_footer(frame, footer, "[Enter] Start  [Q] Quit", opacity);
}

fn render_main<R: Rng>(
    frame: &mut Frame,
    body: Rect,
    footer: Rect,
    game: &MemoryWordGame<R>,
    opacity: f32,
) {
    let state = game.state();
    let hearts = "♥ ".repeat(state.lives() as usize);

    let feedback = match game.feedback() {
        Some(Feedback::Correct) => {
            Span::styled("Correct!", Style::default().fg(faded(GOOD, opacity)))
        }
        Some(Feedback::Wrong) => {
            Span::styled("Wrong!", Style::default().fg(faded(HEART, opacity)))
        }
        None => Span::raw(""),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("SCORE: {}", state.score())),
            Span::raw("    "),
            Span::styled(
                hearts.trim_end().to_string(),
                Style::default().fg(faded(HEART, opacity)),
            ),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            state.current_word().unwrap_or("").to_uppercase(),
            Style::default().fg(faded(TITLE, opacity)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(feedback),
    ];
    lines.extend(error_line(game, opacity));

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(faded(TEXT, opacity)))
            .block(Block::default().title(" NEW OR OLD? ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        body,
    );
    render_footer(frame, footer, "[N/←] New  [O/→] Old  [Q] Quit", opacity);
}

fn render_end<R: Rng>(
    frame: &mut Frame,
    body: Rect,
    footer: Rect,
    game: &MemoryWordGame<R>,
    opacity: f32,
) {
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(faded(HEART, opacity)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Final score: {}", game.final_score().unwrap_or(0))),
        Line::from(format!("Best score: {}", game.best_score())),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(faded(TEXT, opacity)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        body,
    );
    render_footer(frame, footer, "[R] Play again  [Q] Quit", opacity);
}

/// The last rejected operation, if any, in warning colours.
fn error_line<R: Rng>(game: &MemoryWordGame<R>, opacity: f32) -> Option<Line<'static>> {
    game.last_error().map(|err| {
        Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(faded(HEART, opacity)),
        ))
    })
}

fn render_footer(frame: &mut Frame, area: Rect, text: &str, opacity: f32) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(faded(DIM, opacity)))
            .alignment(Alignment::Center),
        area,
    );
}
