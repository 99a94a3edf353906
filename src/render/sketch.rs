use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, BorderType, Borders, Paragraph,
    },
};

use crate::sketch::Turtle;

/// Logical canvas half-extents; the braille canvas scales to the terminal
pub const CANVAS_HALF_WIDTH: f64 = 200.0;
pub const CANVAS_HALF_HEIGHT: f64 = 150.0;

pub struct SketchRenderer;

impl SketchRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, turtle: &Turtle) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(1), // Status
                Constraint::Min(0),    // Canvas
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let status = self.render_status(turtle);
        frame.render_widget(status, chunks[0]);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Sketch "),
            )
            .marker(Marker::Braille)
            .x_bounds([-CANVAS_HALF_WIDTH, CANVAS_HALF_WIDTH])
            .y_bounds([-CANVAS_HALF_HEIGHT, CANVAS_HALF_HEIGHT])
            .paint(|ctx| {
                for stroke in turtle.strokes() {
                    ctx.draw(&CanvasLine {
                        x1: stroke.x1,
                        y1: stroke.y1,
                        x2: stroke.x2,
                        y2: stroke.y2,
                        color: Color::Green,
                    });
                }
                let marker = [(turtle.x, turtle.y)];
                ctx.draw(&Points {
                    coords: &marker,
                    color: Color::Yellow,
                });
            });
        frame.render_widget(canvas, chunks[1]);

        let controls = self.render_controls(turtle);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_status(&self, turtle: &Turtle) -> Paragraph<'_> {
        let pen = if turtle.pen_down { "down" } else { "up" };
        let text = vec![Line::from(vec![
            Span::styled("Heading: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:.0}°", turtle.heading),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Pen: ", Style::default().fg(Color::Yellow)),
            Span::styled(pen, Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _turtle: &Turtle) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" move | "),
            Span::styled("←→", Style::default().fg(Color::Cyan)),
            Span::raw(" turn | "),
            Span::styled("U", Style::default().fg(Color::Yellow)),
            Span::raw("/"),
            Span::styled("D", Style::default().fg(Color::Yellow)),
            Span::raw(" pen up/down | "),
            Span::styled("C", Style::default().fg(Color::Yellow)),
            Span::raw(" clear | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for SketchRenderer {
    fn default() -> Self {
        Self::new()
    }
}
