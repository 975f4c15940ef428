pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::SimConfig;
pub use frameworks::runtime::{RunError, RunSummary, run, run_with_config};
