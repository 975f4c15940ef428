use serde::Deserialize;

/// Gameplay tuning for wandering enemies.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Forward speed in units per second.
    pub speed: f32,

    /// Obstacles closer than this make the enemy turn away.
    pub obstacle_range: f32,

    /// Radius of the look-ahead sphere cast.
    pub cast_radius: f32,

    /// Body radius (hit-scan target size).
    pub radius: f32,

    /// Seconds the death pose lasts before the body is removed.
    pub death_delay: f32,

    /// How far in front of the enemy a fireball spawns.
    pub fireball_spawn_distance: f32,

    /// Random turns are drawn from `-max_turn..max_turn` whole degrees.
    pub max_turn: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            obstacle_range: 5.0,
            cast_radius: 0.75,
            radius: 0.5,
            death_delay: 1.5,
            fireball_spawn_distance: 1.5,
            max_turn: 110,
        }
    }
}
