use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Direction, GameState, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics, paused: bool) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let board_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let board = self.render_board(state);
        frame.render_widget(board, board_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);

        if state.is_game_over() {
            self.render_game_over(frame, state, metrics);
        } else if paused {
            self.render_paused(frame);
        }
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let boosted = state.snake.boost_remaining() > 0.0;
        let head_style = if boosted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        let body_style = if boosted {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::Green)
        };

        let head_glyph = match state.snake.direction {
            Direction::Up => "▲ ",
            Direction::Down => "▼ ",
            Direction::Left => "◀ ",
            Direction::Right => "▶ ",
        };

        let mut lines = Vec::with_capacity(state.grid_size);
        for y in 0..state.grid_size {
            let mut spans = Vec::with_capacity(state.grid_size);
            for x in 0..state.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(head_glyph, head_style)
                } else if state.snake.body.contains(&pos) {
                    Span::styled("□ ", body_style)
                } else if pos == state.food.position {
                    Span::styled("O ", pulse_style(Color::Red, state.food.pulse))
                } else if state.poison.is_active() && pos == state.poison.position {
                    Span::styled("X ", pulse_style(Color::Magenta, state.poison.pulse))
                } else if state.speed_potion.is_active() && pos == state.speed_potion.position {
                    Span::styled("* ", pulse_style(Color::LightBlue, state.speed_potion.pulse))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ];

        let boost = state.snake.boost_remaining();
        if boost > 0.0 {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                format!("Boost: {:.1}s", boost),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::raw("    "));
        spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            metrics.best_score.to_string(),
            Style::default().fg(Color::White),
        ));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let area = centered_rect(frame.area(), 36, 8);
        frame.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.snake.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.best_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Any key or click restarts, Q quits",
                Style::default().fg(Color::Gray),
            )]),
        ];

        let popup = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(popup, area);
    }

    fn render_paused(&self, frame: &mut Frame) {
        let area = centered_rect(frame.area(), 30, 5);
        frame.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                "Press P to resume",
                Style::default().fg(Color::Gray),
            )]),
        ];

        let popup = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );
        frame.render_widget(popup, area);
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or mouse swipe to steer | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Bold on the positive half of the pulse wave, so board items blink
fn pulse_style(color: Color, pulse: f32) -> Style {
    let style = Style::default().fg(color);
    if pulse.sin() > 0.0 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// A `width` x `height` rect centered in `area`, clamped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
