// Per-frame gameplay systems operating on domain state.

pub mod fireballs;
pub mod look;
pub mod movement;
pub mod shooting;
pub mod wandering;
