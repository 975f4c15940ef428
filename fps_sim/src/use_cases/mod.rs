// Use cases layer: the simulation loop and the events it publishes.

pub mod events;
pub mod game;
pub mod scene;
pub mod types;

pub use game::{Simulation, world_task};
pub use types::{SimError, SimSettings, StepReport, WorldUpdate};
