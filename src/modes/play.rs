use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// 60 Hz frame rate
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let swipe_min_cells = config.swipe_min_cells;
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(swipe_min_cells),
            paused: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run frame loop with cleanup
        let result = self.run_frame_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_frame_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(FRAME_INTERVAL);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Frame boundary: update by elapsed wall-clock time, then draw
                _ = frame_timer.tick() => {
                    let dt = last_frame.elapsed().as_secs_f32();
                    last_frame = Instant::now();

                    self.advance(dt);
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.paused);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
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
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);

                // Terminal state: any key restarts, quit keys still quit
                if self.state.is_game_over() {
                    match action {
                        KeyAction::Quit => self.should_quit = true,
                        _ => self.reset_game(),
                    }
                    return;
                }

                match action {
                    KeyAction::Game(Action::Turn(direction)) => self.queue_turn(direction),
                    KeyAction::Game(Action::Continue) => {}
                    KeyAction::Pause => self.paused = !self.paused,
                    KeyAction::Restart => self.reset_game(),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                if self.state.is_game_over() {
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        self.reset_game();
                    }
                    return;
                }
                if self.paused {
                    return;
                }
                if let KeyAction::Game(Action::Turn(direction)) =
                    self.input_handler.handle_mouse_event(mouse)
                {
                    self.queue_turn(direction);
                }
            }
            _ => {}
        }
    }

    /// Buffer a heading change unless it reverses straight into the body
    fn queue_turn(&mut self, direction: Direction) {
        if !direction.is_opposite(self.state.snake.direction) {
            self.state.snake.queue_direction(direction);
        }
    }

    fn advance(&mut self, dt: f32) {
        if self.paused || self.state.is_game_over() {
            return;
        }

        let result = self.engine.update(&mut self.state, dt);
        if result.terminated {
            let final_score = self.state.snake.score;
            self.metrics.on_game_over(final_score);
            info!(
                "game over: score {final_score}, cause {:?}",
                result.info.collision
            );
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.paused = false;
        info!("new game");
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
