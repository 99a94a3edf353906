use super::action::Direction;
use super::config::GameConfig;
use super::pickups::{Food, TimedPickup};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check that the position lies inside a square grid of the given side
    pub fn in_grid(&self, grid_size: usize) -> bool {
        self.x >= 0 && self.x < grid_size as i32 && self.y >= 0 && self.y < grid_size as i32
    }
}

/// What killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// Outcome of a single `Snake::update` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The accumulator is still below the move delay; no cell was entered
    Idle,
    /// Advanced one cell; carries the tail cell dropped to hold the target
    /// length, if one was dropped
    Moved { dropped_tail: Option<Position> },
    /// The move was fatal; the body is unchanged from the last valid state
    Crashed(CollisionType),
}

/// The snake: an ordered body (head first), a buffered heading, and the
/// timers that throttle movement and bound the speed effect
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at index 0
    pub body: Vec<Position>,
    /// Heading committed at the last actual move
    pub direction: Direction,
    /// Buffered heading, committed at the next move (last write wins)
    pub next_direction: Direction,
    /// Target length; the body never exceeds it
    pub grow_to: usize,
    pub score: u32,
    pub alive: bool,
    /// Seconds per one-cell advance; halved while the speed effect runs
    pub move_delay: f32,
    normal_delay: f32,
    min_delay: f32,
    speed_multiplier: f32,
    food_score: u32,
    poison_penalty: u32,
    move_timer: f32,
    speed_time_left: f32,
}

impl Snake {
    /// Create a snake with its head at `head`, body extending opposite to
    /// `direction`, sized and tuned by the config
    pub fn new(head: Position, direction: Direction, config: &GameConfig) -> Self {
        let length = config.initial_snake_length.max(1);
        let (dx, dy) = direction.delta();

        let mut body = vec![head];
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        let grow_to = body.len();
        Self {
            body,
            direction,
            next_direction: direction,
            grow_to,
            score: 0,
            alive: true,
            move_delay: config.move_delay,
            normal_delay: config.move_delay,
            min_delay: config.min_move_delay,
            speed_multiplier: config.speed_multiplier,
            food_score: config.food_score,
            poison_penalty: config.poison_penalty,
            move_timer: 0.0,
            speed_time_left: 0.0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Buffer a heading change for the next move. Reversal filtering is the
    /// input layer's job; this is a plain overwrite.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    /// Fraction of the current move interval already elapsed, for
    /// interpolated drawing
    pub fn move_progress(&self) -> f32 {
        if self.move_delay <= 0.0 {
            return 1.0;
        }
        (self.move_timer / self.move_delay).clamp(0.0, 1.0)
    }

    /// Seconds of speed boost remaining, zero when inactive
    pub fn boost_remaining(&self) -> f32 {
        self.speed_time_left.max(0.0)
    }

    /// Advance timers by `dt` and move one cell once the move delay has
    /// accumulated. Returns what happened; on a crash the body keeps its
    /// last valid state and `alive` goes false.
    pub fn update(&mut self, dt: f32, grid_size: usize) -> MoveResult {
        if !self.alive {
            return MoveResult::Idle;
        }

        if self.speed_time_left > 0.0 {
            self.speed_time_left -= dt;
            if self.speed_time_left <= 0.0 {
                self.speed_time_left = 0.0;
                self.move_delay = self.normal_delay;
            }
        }

        self.move_timer += dt;
        if self.move_timer < self.move_delay {
            return MoveResult::Idle;
        }
        self.move_timer = 0.0;

        self.direction = self.next_direction;
        let new_head = self.head().moved_in_direction(self.direction);

        if !new_head.in_grid(grid_size) {
            self.alive = false;
            return MoveResult::Crashed(CollisionType::Wall);
        }

        // The tail cell vacates this move when the body is at its target
        // length, so it is not a collision target.
        let drops_tail = self.body.len() + 1 > self.grow_to;
        let check = if drops_tail {
            &self.body[..self.body.len() - 1]
        } else {
            &self.body[..]
        };
        if check.contains(&new_head) {
            self.alive = false;
            return MoveResult::Crashed(CollisionType::SelfCollision);
        }

        self.body.insert(0, new_head);
        let dropped_tail = if self.body.len() > self.grow_to {
            self.body.pop()
        } else {
            None
        };
        MoveResult::Moved { dropped_tail }
    }

    /// Raise the target length and award the food score
    pub fn grow(&mut self) {
        self.grow_to += 1;
        self.score += self.food_score;
    }

    /// Lower the target length (floor 1) and deduct the poison penalty
    /// (floor 0), trimming the body immediately if it now exceeds the target
    pub fn shrink(&mut self) {
        self.grow_to = self.grow_to.saturating_sub(1).max(1);
        self.score = self.score.saturating_sub(self.poison_penalty);
        while self.body.len() > self.grow_to {
            self.body.pop();
        }
    }

    /// Start (or extend) the speed effect: the move delay is multiplied
    /// down, floored, and restored once the duration runs out
    pub fn activate_speed_effect(&mut self, duration: f32) {
        self.speed_time_left = duration;
        self.move_delay = (self.move_delay * self.speed_multiplier).max(self.min_delay);
    }

    /// Re-append a tail cell dropped by the move that is being resolved,
    /// used when that same move eats food
    pub(crate) fn restore_tail(&mut self, tail: Position) {
        self.body.push(tail);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state: the snake plus the three board entities
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub poison: TimedPickup,
    pub speed_potion: TimedPickup,
    pub grid_size: usize,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Food,
        poison: TimedPickup,
        speed_potion: TimedPickup,
        grid_size: usize,
    ) -> Self {
        Self {
            snake,
            food,
            poison,
            speed_potion,
            grid_size,
        }
    }

    /// Terminal state: the snake died and the board is frozen
    pub fn is_game_over(&self) -> bool {
        !self.snake.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(head: Position, direction: Direction, length: usize) -> Snake {
        let config = GameConfig {
            initial_snake_length: length,
            ..GameConfig::small()
        };
        Snake::new(head, direction, &config)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
    }

    #[test]
    fn test_bounds_checking() {
        assert!(Position::new(0, 0).in_grid(16));
        assert!(Position::new(15, 15).in_grid(16));
        assert!(!Position::new(-1, 0).in_grid(16));
        assert!(!Position::new(16, 0).in_grid(16));
        assert!(!Position::new(0, 16).in_grid(16));
    }

    #[test]
    fn test_snake_creation() {
        let snake = snake_at(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.grow_to, 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
        assert!(snake.alive);
    }

    #[test]
    fn test_no_move_below_delay() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 1);
        let result = snake.update(0.05, 10);
        assert_eq!(result, MoveResult::Idle);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert!(snake.move_progress() > 0.3 && snake.move_progress() < 0.4);
    }

    #[test]
    fn test_move_after_delay_accumulates() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 1);
        assert_eq!(snake.update(0.10, 10), MoveResult::Idle);
        let result = snake.update(0.10, 10);
        assert!(matches!(result, MoveResult::Moved { .. }));
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_queued_direction_commits_on_move() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 1);
        snake.queue_direction(Direction::Up);
        // Last write wins within one move interval
        snake.queue_direction(Direction::Down);
        assert_eq!(snake.direction, Direction::Right);

        snake.update(0.15, 10);
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn test_wall_crash_leaves_body_unmutated() {
        let mut snake = snake_at(Position::new(0, 0), Direction::Left, 2);
        let before = snake.body.clone();
        let result = snake.update(0.15, 10);
        assert_eq!(result, MoveResult::Crashed(CollisionType::Wall));
        assert!(!snake.alive);
        assert_eq!(snake.body, before);
    }

    #[test]
    fn test_self_collision() {
        // Body folded so the head can turn into a mid-body cell
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 5);
        snake.queue_direction(Direction::Down);
        snake.update(0.15, 10);
        snake.queue_direction(Direction::Left);
        snake.update(0.15, 10);
        snake.queue_direction(Direction::Up);
        let before = snake.body.clone();
        let result = snake.update(0.15, 10);
        assert_eq!(result, MoveResult::Crashed(CollisionType::SelfCollision));
        assert!(!snake.alive);
        assert_eq!(snake.body, before);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_safe() {
        // Body closed into a 2x2 square: the head re-enters the cell the
        // tail leaves on the same move.
        let mut snake = snake_at(Position::new(0, 0), Direction::Down, 1);
        snake.body = vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
        ];
        snake.grow_to = 4;
        let result = snake.update(0.15, 10);
        assert!(matches!(result, MoveResult::Moved { .. }));
        assert_eq!(snake.head(), Position::new(0, 1));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_grow_and_shrink() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 1);
        snake.grow();
        assert_eq!(snake.grow_to, 2);
        assert_eq!(snake.score, 10);

        snake.shrink();
        assert_eq!(snake.grow_to, 1);
        assert_eq!(snake.score, 5);

        // Floors: target never below 1, score never below 0
        snake.shrink();
        assert_eq!(snake.grow_to, 1);
        assert_eq!(snake.score, 0);
        snake.shrink();
        assert_eq!(snake.score, 0);
    }

    #[test]
    fn test_shrink_trims_body_immediately() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 3);
        snake.shrink();
        assert_eq!(snake.grow_to, 2);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_speed_effect_halves_and_restores() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 1);
        snake.activate_speed_effect(3.0);
        assert_eq!(snake.move_delay, 0.075);
        assert!(snake.boost_remaining() > 0.0);

        // Run the effect out; the normal delay comes back
        for _ in 0..50 {
            snake.update(0.075, 100);
        }
        assert_eq!(snake.move_delay, 0.15);
        assert_eq!(snake.boost_remaining(), 0.0);
    }

    #[test]
    fn test_speed_effect_floor() {
        let mut snake = snake_at(Position::new(5, 5), Direction::Right, 1);
        for _ in 0..5 {
            snake.activate_speed_effect(3.0);
        }
        assert_eq!(snake.move_delay, 0.05);
    }

    #[test]
    fn test_length_never_exceeds_target() {
        let mut snake = snake_at(Position::new(1, 5), Direction::Right, 1);
        snake.grow();
        snake.grow();
        for _ in 0..6 {
            snake.update(0.15, 100);
            assert!(snake.len() <= snake.grow_to);
        }
        assert_eq!(snake.len(), snake.grow_to);
    }
}
