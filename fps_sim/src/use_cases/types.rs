// Use-case level settings, outputs and errors for the game loop.

use crate::domain::tuning::{ArenaTuning, EnemyTuning, FireballTuning, LookTuning, PlayerTuning};
use crate::domain::{EnemySnapshot, FireballSnapshot, PlayerSnapshot};
use messenger::{MessengerError, MessengerSettings};
use serde::Serialize;
use std::time::Duration;

/// Everything needed to build a [`Simulation`](super::Simulation).
#[derive(Debug, Clone)]
pub struct SimSettings {
    /// Fixed step of the game loop.
    pub tick_interval: Duration,
    /// Frames to run before the loop stops on its own (0 runs until shutdown).
    pub ticks: u64,
    /// Seed for every random decision in the scene.
    pub seed: u64,
    pub messenger: MessengerSettings,
    pub player: PlayerTuning,
    pub look: LookTuning,
    pub enemy: EnemyTuning,
    pub fireball: FireballTuning,
    pub arena: ArenaTuning,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000 / 60),
            ticks: 0,
            seed: 0,
            messenger: MessengerSettings::default(),
            player: PlayerTuning::default(),
            look: LookTuning::default(),
            enemy: EnemyTuning::default(),
            fireball: FireballTuning::default(),
            arena: ArenaTuning::default(),
        }
    }
}

/// Gameplay that happened during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    pub enemies_spawned: Vec<u64>,
    pub enemies_hit: Vec<u64>,
    pub points_awarded: u32,
    pub fireballs_launched: u32,
    pub damage_taken: i32,
    pub enemies_removed: Vec<u64>,
}

impl StepReport {
    pub fn is_quiet(&self) -> bool {
        self.enemies_spawned.is_empty()
            && self.enemies_hit.is_empty()
            && self.fireballs_launched == 0
            && self.damage_taken == 0
            && self.enemies_removed.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdate {
    pub tick: u64,
    pub player: PlayerSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub fireballs: Vec<FireballSnapshot>,
    pub impacts: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("gameplay event failed")]
    Messenger(#[from] MessengerError),
}
