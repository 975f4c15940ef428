// Gameplay tuning values with their stock defaults.

pub mod arena;
pub mod enemy;
pub mod fireball;
pub mod player;

pub use arena::ArenaTuning;
pub use enemy::EnemyTuning;
pub use fireball::FireballTuning;
pub use player::{LookTuning, PlayerTuning, RotationAxes};
