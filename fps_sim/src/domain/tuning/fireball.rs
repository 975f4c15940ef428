use serde::Deserialize;

/// Gameplay tuning for enemy fireballs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FireballTuning {
    /// Travel speed in units per second.
    pub speed: f32,

    /// Health removed from the player on contact.
    pub damage: i32,

    /// Trigger radius.
    pub radius: f32,
}

impl Default for FireballTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            damage: 1,
            radius: 0.25,
        }
    }
}
