// Deterministic autopilot standing in for keyboard and mouse.

use crate::domain::{InputSource, PlayerInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Frames a wander direction is held before a new one is picked.
pub const HOLD_TICKS: u64 = 30;
/// Fire once every this many frames.
pub const FIRE_EVERY: u64 = 45;

pub struct ScriptedInput {
    rng: StdRng,
    held: PlayerInput,
}

impl ScriptedInput {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            held: PlayerInput::default(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_frame(&mut self, tick: u64) -> PlayerInput {
        if tick % HOLD_TICKS == 0 {
            self.held = PlayerInput {
                horizontal: self.rng.gen_range(-1.0..=1.0),
                vertical: self.rng.gen_range(-1.0..=1.0),
                mouse_x: self.rng.gen_range(-0.5..=0.5),
                mouse_y: 0.0,
                fire: false,
            };
        }
        PlayerInput {
            fire: tick % FIRE_EVERY == FIRE_EVERY - 1,
            ..self.held
        }
    }
}
