// Binary startup and the entry points that run one simulation.

use crate::frameworks::config::{ConfigError, SimConfig};
use crate::interface_adapters::{Hud, HudState, ScriptedInput, SettingsPopup};
use crate::use_cases::{SimError, Simulation, WorldUpdate, world_task};
use messenger::MessengerError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Notify, watch};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("configuration error")]
    Config(#[from] ConfigError),
    #[error("simulation error")]
    Sim(#[from] SimError),
    #[error("ui wiring error")]
    Messenger(#[from] MessengerError),
    #[error("world task failed")]
    Task(#[from] tokio::task::JoinError),
}

/// What a finished run looked like from the HUD and the world.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub hud: HudState,
    pub world: WorldUpdate,
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(config: SimConfig) -> Result<RunSummary, RunError> {
    config.validate()?;
    let mut sim = Simulation::new(config.sim_settings())?;
    let max_health = sim.player().max_health;
    let hud = Hud::attach(sim.messenger_mut(), HudState::new(max_health))?;

    // Startup goes through the popup, the same way a player would set things.
    let mut popup = SettingsPopup::default();
    popup.open(sim.messenger())?;
    if let Some(name) = &config.player_name {
        popup.submit_name(sim.messenger(), name)?;
    }
    if let Some(speed) = config.speed_multiplier {
        popup.set_speed(sim.messenger(), speed)?;
    }
    popup.close(sim.messenger())?;

    let (world_tx, world_rx) = watch::channel(sim.snapshot());
    let shutdown = Arc::new(Notify::new());
    let input = ScriptedInput::new(config.seed);

    tracing::info!(
        ticks = config.ticks,
        tick_interval_ms = config.tick_interval().as_millis(),
        seed = config.seed,
        "simulation starting"
    );

    // Spawn the Game Loop (World Task)
    let world = tokio::spawn(world_task(sim, input, world_tx, Arc::clone(&shutdown)));

    let ctrl_c = {
        let shutdown = Arc::clone(&shutdown);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.notify_one();
            }
        })
    };

    let result = world.await;
    ctrl_c.abort();
    let sim = result?.inspect_err(|e| {
        tracing::error!(error = %e, "world task stopped");
    })?;

    let summary = RunSummary {
        ticks: sim.tick(),
        hud: hud.state(),
        world: world_rx.borrow().clone(),
    };

    let mut messenger = sim.into_messenger()?;
    hud.detach(&mut messenger)?;
    tracing::info!(
        ticks = summary.ticks,
        score = summary.hud.score,
        health = summary.hud.health,
        "simulation finished"
    );
    Ok(summary)
}

pub async fn run_with_config() -> Result<RunSummary, RunError> {
    init_runtime();

    let config = SimConfig::load().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;

    run(config).await
}
