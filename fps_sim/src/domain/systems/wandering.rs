use crate::domain::geometry::{CastTarget, sphere_cast};
use crate::domain::state::{Arena, Enemy, Vec2};
use crate::domain::tuning::EnemyTuning;
use rand::Rng;

/// What a wandering enemy decided this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderOutcome {
    Idle,
    Walked,
    /// Player spotted ahead and no fireball of ours is in flight.
    LaunchFireball { position: Vec2, yaw: f32 },
    /// Obstacle within range; turned by `degrees`.
    Turned { degrees: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct WanderConfig {
    pub tuning: EnemyTuning,
    pub arena: Arena,
    pub player_radius: f32,
}

pub fn tick_enemy<R: Rng + ?Sized>(
    enemy: &mut Enemy,
    player_position: Vec2,
    dt: f32,
    speed_multiplier: f32,
    cfg: WanderConfig,
    rng: &mut R,
) -> WanderOutcome {
    let WanderConfig {
        tuning,
        arena,
        player_radius,
    } = cfg;
    if !enemy.alive {
        return WanderOutcome::Idle;
    }

    let forward = Vec2::forward(enemy.yaw);
    enemy.position = arena.clamp(
        enemy.position + forward * (tuning.speed * speed_multiplier * dt),
        tuning.radius,
    );

    let bodies = [(CastTarget::Player, player_position, player_radius)];
    let Some(hit) = sphere_cast(enemy.position, forward, tuning.cast_radius, &arena, bodies) else {
        return WanderOutcome::Walked;
    };

    match hit.target {
        CastTarget::Player => {
            if enemy.fireball_id.is_some() {
                return WanderOutcome::Walked;
            }
            WanderOutcome::LaunchFireball {
                position: enemy.position + forward * tuning.fireball_spawn_distance,
                yaw: enemy.yaw,
            }
        }
        // A non-positive turn limit leaves nothing to sample, so keep walking.
        _ if hit.distance < tuning.obstacle_range && tuning.max_turn > 0 => {
            let degrees = rng.gen_range(-tuning.max_turn..tuning.max_turn) as f32;
            enemy.yaw = (enemy.yaw + degrees).rem_euclid(360.0);
            WanderOutcome::Turned { degrees }
        }
        _ => WanderOutcome::Walked,
    }
}
