// Domain layer: scene entities and gameplay rules.

pub mod geometry;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use ports::InputSource;
pub use state::{
    Arena, Enemy, EnemySnapshot, Fireball, FireballSnapshot, Impact, Player, PlayerInput,
    PlayerSnapshot, Vec2,
};
