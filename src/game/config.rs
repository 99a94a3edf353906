use serde::{Deserialize, Serialize};

/// Configuration for the snake game
///
/// Every rule tunable lives here so the rest of the game logic stays free
/// of magic numbers. The struct is built once and passed into constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Seconds between one-cell advances under normal speed
    pub move_delay: f32,
    /// Lower bound on the move delay, no matter how many potions stack
    pub min_move_delay: f32,
    /// Factor applied to the move delay when a speed potion is drunk
    pub speed_multiplier: f32,
    /// Seconds the speed effect lasts
    pub speed_effect_duration: f32,

    /// Score awarded for eating food
    pub food_score: u32,
    /// Score removed for eating poison (floored at zero)
    pub poison_penalty: u32,

    /// Seconds of dormancy before poison activates, drawn uniformly
    pub poison_spawn_range: (f32, f32),
    /// Seconds of dormancy before the speed potion activates, drawn uniformly
    pub potion_spawn_range: (f32, f32),
    /// Seconds an active speed potion survives uneaten, drawn uniformly
    pub potion_lifetime_range: (f32, f32),

    /// Minimum mouse drag, in terminal cells, for a swipe to register
    pub swipe_min_cells: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 16,
            initial_snake_length: 1,
            move_delay: 0.15,
            min_move_delay: 0.05,
            speed_multiplier: 0.5,
            speed_effect_duration: 3.0,
            food_score: 10,
            poison_penalty: 5,
            poison_spawn_range: (15.0, 25.0),
            potion_spawn_range: (10.0, 20.0),
            potion_lifetime_range: (5.0, 8.0),
            swipe_min_cells: 4,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.initial_snake_length, 1);
        assert_eq!(config.move_delay, 0.15);
        assert_eq!(config.min_move_delay, 0.05);
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::new(24);
        assert_eq!(config.grid_size, 24);
        assert_eq!(config.move_delay, GameConfig::default().move_delay);
    }
}
