use rand::Rng;

use super::action::Direction;
use super::config::GameConfig;
use super::pickups::{Food, TimedPickup};
use super::state::{CollisionType, GameState, MoveResult, Position, Snake};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInfo {
    /// The snake ate the food this frame
    pub ate_food: bool,
    /// The snake ate active poison this frame
    pub ate_poison: bool,
    /// The snake drank an active speed potion this frame
    pub drank_potion: bool,
    /// Fatal collision, if the snake died this frame
    pub collision: Option<CollisionType>,
}

/// Result of a frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The game is in (or entered) the terminal game-over state
    pub terminated: bool,
    pub info: TickInfo,
}

/// The game engine: advances all entities by elapsed time and resolves
/// their interactions. Owns the rng; everything else is in `GameState`.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: snake centered heading right, food placed under
    /// the placement policy, both pickups dormant
    pub fn reset(&mut self) -> GameState {
        let grid_size = self.config.grid_size;
        let center = (grid_size / 2) as i32;

        let snake = Snake::new(Position::new(center, center), Direction::Right, &self.config);
        let food = Food::new(&mut self.rng, grid_size);
        let poison = TimedPickup::poison(&self.config, &mut self.rng);
        let speed_potion = TimedPickup::speed_potion(&self.config, &mut self.rng);

        let mut state = GameState::new(snake, food, poison, speed_potion, grid_size);
        self.relocate_food(&mut state);
        state
    }

    /// Advance one frame by `dt` seconds: entity timers first, then the
    /// snake, then the eat/poison/potion checks against the head cell.
    /// A terminal state freezes everything until an explicit reset.
    pub fn update(&mut self, state: &mut GameState, dt: f32) -> TickResult {
        if state.is_game_over() {
            return TickResult {
                terminated: true,
                info: TickInfo::default(),
            };
        }

        let grid_size = state.grid_size;
        state.food.update(dt);
        state.poison.update(dt, grid_size, &mut self.rng);
        state.speed_potion.update(dt, grid_size, &mut self.rng);

        let moved = match state.snake.update(dt, grid_size) {
            MoveResult::Crashed(collision) => {
                return TickResult {
                    terminated: true,
                    info: TickInfo {
                        collision: Some(collision),
                        ..TickInfo::default()
                    },
                };
            }
            MoveResult::Moved { dropped_tail } => Some(dropped_tail),
            MoveResult::Idle => None,
        };

        let mut info = TickInfo::default();
        let head = state.snake.head();

        if head == state.food.position {
            state.snake.grow();
            // The growth belongs to the move being resolved: keep the tail
            // it dropped instead of re-growing a cell late.
            if let Some(Some(tail)) = moved {
                state.snake.restore_tail(tail);
            }
            self.relocate_food(state);
            info.ate_food = true;
        }

        if state.poison.is_active() && head == state.poison.position {
            state.snake.shrink();
            state.poison.deactivate(&mut self.rng);
            info.ate_poison = true;
        }

        if state.speed_potion.is_active() && head == state.speed_potion.position {
            state
                .snake
                .activate_speed_effect(self.config.speed_effect_duration);
            state.speed_potion.deactivate(&mut self.rng);
            info.drank_potion = true;
        }

        TickResult {
            terminated: false,
            info,
        }
    }

    /// Move the food to a random cell that is not an active pickup cell and
    /// not on the snake, retrying until satisfied
    fn relocate_food(&mut self, state: &mut GameState) {
        loop {
            state
                .food
                .randomize_position(&mut self.rng, state.grid_size);
            let pos = state.food.position;

            if state.poison.is_active() && pos == state.poison.position {
                continue;
            }
            if state.speed_potion.is_active() && pos == state.speed_potion.position {
                continue;
            }
            if state.snake.body.contains(&pos) {
                continue;
            }
            return;
        }
    }
}
