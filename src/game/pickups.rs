use std::f32::consts::TAU;

use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// Radians of pulse phase advanced per second; drives the blink of the
/// board glyphs
const PULSE_RATE: f32 = 6.0;

/// Pick a uniformly random cell on the grid
pub(crate) fn random_cell(rng: &mut impl Rng, grid_size: usize) -> Position {
    Position::new(
        rng.gen_range(0..grid_size as i32),
        rng.gen_range(0..grid_size as i32),
    )
}

/// The always-present food item
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Position,
    /// Visual pulse phase in [0, TAU)
    pub pulse: f32,
}

impl Food {
    pub fn new(rng: &mut impl Rng, grid_size: usize) -> Self {
        Self {
            position: random_cell(rng, grid_size),
            pulse: 0.0,
        }
    }

    /// Jump to a random cell. Placement constraints (not on the snake, not
    /// on an active pickup) are the caller's rejection loop.
    pub fn randomize_position(&mut self, rng: &mut impl Rng, grid_size: usize) {
        self.position = random_cell(rng, grid_size);
    }

    pub fn update(&mut self, dt: f32) {
        self.pulse = (self.pulse + dt * PULSE_RATE) % TAU;
    }
}

/// Which timed pickup an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Shrinks the snake and costs score when eaten
    Poison,
    /// Grants the timed speed effect when eaten
    SpeedPotion,
}

/// Lifecycle of a timed pickup
#[derive(Debug, Clone, PartialEq)]
pub enum PickupPhase {
    /// Hidden, counting down to activation
    Dormant { countdown: f32 },
    /// On the board; a `Some` lifetime counts down to self-despawn
    Active { lifetime: Option<f32> },
}

/// A pickup that cycles between dormancy and board presence: poison and the
/// speed potion differ only in their timer ranges and eat effect
#[derive(Debug, Clone, PartialEq)]
pub struct TimedPickup {
    pub kind: PickupKind,
    pub position: Position,
    pub phase: PickupPhase,
    /// Visual pulse phase in [0, TAU)
    pub pulse: f32,
    spawn_range: (f32, f32),
    lifetime_range: Option<(f32, f32)>,
}

impl TimedPickup {
    pub fn poison(config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self::dormant(
            PickupKind::Poison,
            config.poison_spawn_range,
            None,
            rng,
        )
    }

    pub fn speed_potion(config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self::dormant(
            PickupKind::SpeedPotion,
            config.potion_spawn_range,
            Some(config.potion_lifetime_range),
            rng,
        )
    }

    fn dormant(
        kind: PickupKind,
        spawn_range: (f32, f32),
        lifetime_range: Option<(f32, f32)>,
        rng: &mut impl Rng,
    ) -> Self {
        let countdown = rng.gen_range(spawn_range.0..=spawn_range.1);
        Self {
            kind,
            position: Position::new(0, 0),
            phase: PickupPhase::Dormant { countdown },
            pulse: 0.0,
            spawn_range,
            lifetime_range,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, PickupPhase::Active { .. })
    }

    /// Advance the pulse and the dormancy/lifetime timers. Activation lands
    /// on a freshly randomized cell; an expired lifetime re-arms dormancy.
    pub fn update(&mut self, dt: f32, grid_size: usize, rng: &mut impl Rng) {
        self.pulse = (self.pulse + dt * PULSE_RATE) % TAU;

        match &mut self.phase {
            PickupPhase::Dormant { countdown } => {
                *countdown -= dt;
                if *countdown <= 0.0 {
                    self.position = random_cell(rng, grid_size);
                    let lifetime = self
                        .lifetime_range
                        .map(|(lo, hi)| rng.gen_range(lo..=hi));
                    self.phase = PickupPhase::Active { lifetime };
                }
            }
            PickupPhase::Active {
                lifetime: Some(remaining),
            } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.deactivate(rng);
                }
            }
            PickupPhase::Active { lifetime: None } => {}
        }
    }

    /// Leave the board and re-arm the dormant countdown from zero
    pub fn deactivate(&mut self, rng: &mut impl Rng) {
        let countdown = rng.gen_range(self.spawn_range.0..=self.spawn_range.1);
        self.phase = PickupPhase::Dormant { countdown };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_food_randomize_stays_on_grid() {
        let mut rng = rng();
        let mut food = Food::new(&mut rng, 10);
        for _ in 0..100 {
            food.randomize_position(&mut rng, 10);
            assert!(food.position.in_grid(10));
        }
    }

    #[test]
    fn test_poison_starts_dormant_in_range() {
        let mut rng = rng();
        let poison = TimedPickup::poison(&GameConfig::default(), &mut rng);
        assert!(!poison.is_active());
        match poison.phase {
            PickupPhase::Dormant { countdown } => {
                assert!((15.0..=25.0).contains(&countdown));
            }
            _ => panic!("expected dormant"),
        }
    }

    #[test]
    fn test_poison_activates_after_countdown() {
        let mut rng = rng();
        let mut poison = TimedPickup::poison(&GameConfig::default(), &mut rng);
        poison.phase = PickupPhase::Dormant { countdown: 1.0 };

        poison.update(0.5, 10, &mut rng);
        assert!(!poison.is_active());

        poison.update(0.6, 10, &mut rng);
        assert!(poison.is_active());
        assert!(poison.position.in_grid(10));
        // Poison never times out on its own
        assert_eq!(poison.phase, PickupPhase::Active { lifetime: None });
    }

    #[test]
    fn test_potion_draws_lifetime_on_activation() {
        let mut rng = rng();
        let mut potion = TimedPickup::speed_potion(&GameConfig::default(), &mut rng);
        potion.phase = PickupPhase::Dormant { countdown: 0.1 };
        potion.update(0.2, 10, &mut rng);

        match potion.phase {
            PickupPhase::Active {
                lifetime: Some(life),
            } => assert!((5.0..=8.0).contains(&life)),
            ref other => panic!("expected active with lifetime, got {:?}", other),
        }
    }

    #[test]
    fn test_potion_expires_uneaten_and_rearms() {
        let mut rng = rng();
        let mut potion = TimedPickup::speed_potion(&GameConfig::default(), &mut rng);
        potion.phase = PickupPhase::Active {
            lifetime: Some(0.3),
        };

        potion.update(0.4, 10, &mut rng);
        assert!(!potion.is_active());
        match potion.phase {
            PickupPhase::Dormant { countdown } => {
                assert!((10.0..=20.0).contains(&countdown));
            }
            _ => panic!("expected re-armed dormancy"),
        }
    }

    #[test]
    fn test_deactivate_rearms_countdown() {
        let mut rng = rng();
        let mut poison = TimedPickup::poison(&GameConfig::default(), &mut rng);
        poison.phase = PickupPhase::Active { lifetime: None };

        poison.deactivate(&mut rng);
        match poison.phase {
            PickupPhase::Dormant { countdown } => {
                assert!((15.0..=25.0).contains(&countdown));
            }
            _ => panic!("expected dormant"),
        }
    }

    #[test]
    fn test_pulse_wraps() {
        let mut rng = rng();
        let mut food = Food::new(&mut rng, 10);
        for _ in 0..100 {
            food.update(0.016);
            assert!((0.0..TAU).contains(&food.pulse));
        }
    }
}
