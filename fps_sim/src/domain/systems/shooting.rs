use crate::domain::geometry::{CastTarget, sphere_cast};
use crate::domain::state::{Arena, Enemy, Player, Vec2};
use crate::domain::tuning::PlayerTuning;

/// Result of a hit-scan shot fired through the centre of the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// The ray hit an enemy body (alive or already in its death pose).
    Enemy { enemy_id: u64, distance: f32 },
    /// The ray hit a wall or the floor.
    Scenery { point: Vec2 },
}

pub fn fire_ray(
    player: &Player,
    enemies: &[Enemy],
    enemy_radius: f32,
    tuning: &PlayerTuning,
    arena: &Arena,
) -> Option<ShotOutcome> {
    let direction = Vec2::forward(player.yaw);
    let bodies = enemies
        .iter()
        .map(|e| (CastTarget::Enemy(e.id), e.position, enemy_radius));
    let hit = sphere_cast(player.position, direction, 0.0, arena, bodies);

    // Aiming down means the floor may come before anything else.
    let floor = (player.pitch > 0.0)
        .then(|| tuning.eye_height / player.pitch.to_radians().tan())
        .filter(|distance| distance.is_finite());

    match (hit, floor) {
        (Some(hit), Some(floor)) if floor < hit.distance => Some(ShotOutcome::Scenery {
            point: player.position + direction * floor,
        }),
        (Some(hit), _) => Some(match hit.target {
            CastTarget::Enemy(enemy_id) => ShotOutcome::Enemy {
                enemy_id,
                distance: hit.distance,
            },
            CastTarget::Wall | CastTarget::Player => ShotOutcome::Scenery {
                point: player.position + direction * hit.distance,
            },
        }),
        (None, Some(floor)) => Some(ShotOutcome::Scenery {
            point: player.position + direction * floor,
        }),
        (None, None) => None,
    }
}
