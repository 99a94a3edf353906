use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::input::{sketch_command, SketchCommand};
use crate::render::SketchRenderer;
use crate::sketch::{SketchConfig, Turtle};

pub struct SketchMode {
    config: SketchConfig,
    turtle: Turtle,
    renderer: SketchRenderer,
    should_quit: bool,
}

impl SketchMode {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            turtle: Turtle::new(),
            renderer: SketchRenderer::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Redraw at 30 FPS; the drawing only changes on input
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.turtle);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            self.apply(sketch_command(key));
        }
    }

    fn apply(&mut self, command: SketchCommand) {
        match command {
            SketchCommand::Forward => self.turtle.forward(self.config.move_distance),
            SketchCommand::Backward => self.turtle.backward(self.config.move_distance),
            SketchCommand::TurnLeft => self.turtle.turn_left(self.config.rotate_angle),
            SketchCommand::TurnRight => self.turtle.turn_right(self.config.rotate_angle),
            SketchCommand::PenUp => self.turtle.pen_up(),
            SketchCommand::PenDown => self.turtle.pen_down(),
            SketchCommand::Clear => {
                self.turtle.clear();
                info!("sketch cleared");
            }
            SketchCommand::Quit => self.should_quit = true,
            SketchCommand::None => {}
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
