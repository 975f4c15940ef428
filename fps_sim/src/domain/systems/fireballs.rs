use crate::domain::state::{Arena, Fireball, Vec2};
use crate::domain::tuning::FireballTuning;

/// Why a fireball left the scene this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireballEvent {
    HitPlayer { fireball_id: u64, owner_id: u64, damage: i32 },
    HitWall { fireball_id: u64, owner_id: u64 },
}

impl FireballEvent {
    pub fn owner_id(&self) -> u64 {
        match *self {
            FireballEvent::HitPlayer { owner_id, .. } | FireballEvent::HitWall { owner_id, .. } => {
                owner_id
            }
        }
    }
}

/// Moves every fireball and despawns the ones that touched something.
pub fn tick_fireballs(
    fireballs: &mut Vec<Fireball>,
    player_position: Vec2,
    player_radius: f32,
    dt: f32,
    tuning: &FireballTuning,
    arena: &Arena,
) -> Vec<FireballEvent> {
    let mut events = Vec::new();
    let trigger_distance = player_radius + tuning.radius;

    fireballs.retain_mut(|f| {
        f.position = f.position + Vec2::forward(f.yaw) * (tuning.speed * dt);

        if f.position.distance(player_position) <= trigger_distance {
            events.push(FireballEvent::HitPlayer {
                fireball_id: f.id,
                owner_id: f.owner_id,
                damage: tuning.damage,
            });
            return false;
        }
        if !arena.contains(f.position) {
            events.push(FireballEvent::HitWall {
                fireball_id: f.id,
                owner_id: f.owner_id,
            });
            return false;
        }
        true
    });

    events
}
