// Fixed-step simulation of the arena and the task that drives it.

use super::events::{self, SpeedSubscription};
use super::scene::SceneController;
use super::types::{SimError, SimSettings, StepReport, WorldUpdate};
use crate::domain::systems::fireballs::{self, FireballEvent};
use crate::domain::systems::shooting::{self, ShotOutcome};
use crate::domain::systems::wandering::{self, WanderConfig, WanderOutcome};
use crate::domain::systems::{look, movement};
use crate::domain::{
    Arena, Enemy, Fireball, Impact, InputSource, Player, PlayerInput, Vec2,
};
use messenger::Messenger;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tracing::{debug, info, trace};

/// Player start, looking down +Z towards the enemy spawn point.
pub const PLAYER_SPAWN: Vec2 = Vec2 { x: 0.0, z: -8.0 };

pub struct Simulation {
    settings: SimSettings,
    arena: Arena,
    messenger: Messenger,
    rng: StdRng,
    player: Player,
    player_speed: SpeedSubscription,
    scene: SceneController,
    fireballs: Vec<Fireball>,
    next_fireball_id: u64,
    impacts: Vec<Impact>,
    tick: u64,
}

impl Simulation {
    pub fn new(settings: SimSettings) -> Result<Self, SimError> {
        let mut messenger = Messenger::with_settings(settings.messenger);
        let player_speed = SpeedSubscription::subscribe(&mut messenger, 1.0)?;
        let mut player = Player::new(settings.player.max_health);
        player.position = PLAYER_SPAWN;

        Ok(Self {
            arena: Arena {
                half_extent: settings.arena.half_extent,
            },
            rng: StdRng::seed_from_u64(settings.seed),
            settings,
            messenger,
            player,
            player_speed,
            scene: SceneController::new(),
            fireballs: Vec::new(),
            next_fireball_id: 1,
            impacts: Vec::new(),
            tick: 0,
        })
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn messenger(&self) -> &Messenger {
        &self.messenger
    }

    /// Lets UI code subscribe to gameplay channels.
    pub fn messenger_mut(&mut self) -> &mut Messenger {
        &mut self.messenger
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        self.scene.enemies()
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.player_speed.current()
    }

    /// Advances the scene by one frame of `dt` seconds.
    pub fn step(&mut self, input: &PlayerInput, dt: f32) -> Result<StepReport, SimError> {
        let mut report = StepReport {
            tick: self.tick + 1,
            ..StepReport::default()
        };
        let speed = self.player_speed.current();

        if let Some(id) = self
            .scene
            .ensure_enemy(&mut self.messenger, &mut self.rng, speed)?
        {
            report.enemies_spawned.push(id);
        }

        look::tick_look(&mut self.player, input, &self.settings.look);
        movement::tick_player(
            &mut self.player,
            input,
            dt,
            speed,
            &self.settings.player,
            &self.arena,
        );
        if input.fire {
            self.fire(&mut report)?;
        }
        self.wander(dt, &mut report)?;
        self.move_fireballs(dt, &mut report)?;

        report.enemies_removed = self.scene.despawn_dead(&mut self.messenger, dt)?;
        self.impacts.retain_mut(|impact| {
            impact.ttl -= dt;
            impact.ttl > 0.0
        });

        self.tick += 1;
        Ok(report)
    }

    fn fire(&mut self, report: &mut StepReport) -> Result<(), SimError> {
        let outcome = shooting::fire_ray(
            &self.player,
            self.scene.enemies(),
            self.settings.enemy.radius,
            &self.settings.player,
            &self.arena,
        );

        match outcome {
            Some(ShotOutcome::Enemy { enemy_id, distance }) => {
                let alive = self
                    .scene
                    .enemies()
                    .iter()
                    .any(|e| e.id == enemy_id && e.alive);
                if !alive {
                    return Ok(());
                }

                // Score first so a failed broadcast leaves the enemy untouched.
                let points = events::enemy_hit(&self.messenger, enemy_id)?;
                if let Some(enemy) = self.scene.enemy_mut(enemy_id) {
                    enemy.react_to_hit(self.settings.enemy.death_delay);
                }
                info!(enemy_id, distance, points, "enemy hit");
                report.enemies_hit.push(enemy_id);
                report.points_awarded += points;
            }
            Some(ShotOutcome::Scenery { point }) => {
                trace!(x = point.x, z = point.z, "shot hit scenery");
                self.impacts.push(Impact {
                    position: point,
                    ttl: self.settings.player.impact_ttl,
                });
            }
            None => {}
        }
        Ok(())
    }

    fn wander(&mut self, dt: f32, report: &mut StepReport) -> Result<(), SimError> {
        let cfg = WanderConfig {
            tuning: self.settings.enemy,
            arena: self.arena,
            player_radius: self.settings.player.radius,
        };

        for (enemy, speed) in self.scene.enemies_with_speed_mut() {
            match wandering::tick_enemy(enemy, self.player.position, dt, speed, cfg, &mut self.rng) {
                WanderOutcome::LaunchFireball { position, yaw } => {
                    let id = self.next_fireball_id;
                    self.next_fireball_id += 1;
                    enemy.fireball_id = Some(id);
                    self.fireballs.push(Fireball {
                        id,
                        owner_id: enemy.id,
                        position,
                        yaw,
                    });

                    debug!(enemy_id = enemy.id, fireball_id = id, "fireball launched");
                    events::fireball_launched(&self.messenger, enemy.id, position)?;
                    report.fireballs_launched += 1;
                }
                WanderOutcome::Turned { degrees } => {
                    trace!(enemy_id = enemy.id, degrees, "enemy turned");
                }
                WanderOutcome::Idle | WanderOutcome::Walked => {}
            }
        }
        Ok(())
    }

    fn move_fireballs(&mut self, dt: f32, report: &mut StepReport) -> Result<(), SimError> {
        let fireball_events = fireballs::tick_fireballs(
            &mut self.fireballs,
            self.player.position,
            self.settings.player.radius,
            dt,
            &self.settings.fireball,
            &self.arena,
        );

        for event in fireball_events {
            if let Some(owner) = self.scene.enemy_mut(event.owner_id()) {
                owner.fireball_id = None;
            }
            if let FireballEvent::HitPlayer { damage, .. } = event {
                let health = self.player.hurt(damage);
                info!(health, "player hurt");
                report.damage_taken += damage;
                events::health_changed(&self.messenger, health, self.player.max_health)?;
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> WorldUpdate {
        WorldUpdate {
            tick: self.tick,
            player: (&self.player).into(),
            enemies: self.scene.enemies().iter().map(Into::into).collect(),
            fireballs: self.fireballs.iter().map(Into::into).collect(),
            impacts: self.impacts.len(),
        }
    }

    /// Removes the scene's own listeners and hands back the messenger.
    pub fn into_messenger(mut self) -> Result<Messenger, SimError> {
        self.scene.clear(&mut self.messenger)?;
        self.player_speed.unsubscribe(&mut self.messenger)?;
        Ok(self.messenger)
    }
}

/// Drives `sim` at its configured tick rate until the tick limit or a shutdown signal.
pub async fn world_task<I>(
    mut sim: Simulation,
    mut input: I,
    world_tx: watch::Sender<WorldUpdate>,
    shutdown: Arc<Notify>,
) -> Result<Simulation, SimError>
where
    I: InputSource + 'static,
{
    let tick_interval = sim.settings.tick_interval;
    let ticks = sim.settings.ticks;
    let dt = tick_interval.as_secs_f32();

    // Drive the fixed-step game loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval.max(Duration::from_millis(1)));

    loop {
        if ticks != 0 && sim.tick >= ticks {
            info!(tick = sim.tick, "tick limit reached");
            break;
        }

        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                info!(tick = sim.tick, "shutdown requested");
                break;
            }
            _ = interval.tick() => {}
        }

        let frame = input.next_frame(sim.tick);
        let report = sim.step(&frame, dt)?;
        if !report.is_quiet() {
            debug!(?report, "frame events");
        }
        world_tx.send_replace(sim.snapshot());
    }

    Ok(sim)
}
