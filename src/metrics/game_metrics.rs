use std::time::{Duration, Instant};

/// Session clock and score records for the play loop
pub struct GameMetrics {
    start_time: Instant,
    pub elapsed: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    /// Restart the clock for a fresh game
    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Elapsed play time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
