// Keeps one wandering enemy in the scene and wires it to the speed channel.

use super::events::SpeedSubscription;
use crate::domain::{Enemy, Vec2};
use messenger::{Messenger, MessengerError};
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info};

/// Where replacement enemies appear.
pub const SPAWN_POINT: Vec2 = Vec2 { x: 0.0, z: 0.0 };

pub struct SceneController {
    enemies: Vec<Enemy>,
    // Each enemy listens for speed changes for as long as it exists.
    speeds: HashMap<u64, SpeedSubscription>,
    next_enemy_id: u64,
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneController {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            speeds: HashMap::new(),
            next_enemy_id: 1,
        }
    }

    /// Spawns a replacement at [`SPAWN_POINT`] facing a random way once the scene is empty.
    pub fn ensure_enemy<R: Rng + ?Sized>(
        &mut self,
        messenger: &mut Messenger,
        rng: &mut R,
        speed_multiplier: f32,
    ) -> Result<Option<u64>, MessengerError> {
        if !self.enemies.is_empty() {
            return Ok(None);
        }
        let yaw = rng.gen_range(0..360) as f32;
        self.spawn_enemy(messenger, SPAWN_POINT, yaw, speed_multiplier)
            .map(Some)
    }

    pub fn spawn_enemy(
        &mut self,
        messenger: &mut Messenger,
        position: Vec2,
        yaw: f32,
        speed_multiplier: f32,
    ) -> Result<u64, MessengerError> {
        let speed = SpeedSubscription::subscribe(messenger, speed_multiplier)?;
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;

        self.enemies.push(Enemy::new(id, position, yaw));
        self.speeds.insert(id, speed);
        info!(enemy_id = id, yaw, "enemy spawned");
        Ok(id)
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy_mut(&mut self, id: u64) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Every enemy paired with the speed multiplier it last heard.
    pub fn enemies_with_speed_mut(&mut self) -> impl Iterator<Item = (&mut Enemy, f32)> {
        let speeds = &self.speeds;
        self.enemies.iter_mut().map(move |enemy| {
            let speed = speeds
                .get(&enemy.id)
                .map_or(1.0, SpeedSubscription::current);
            (enemy, speed)
        })
    }

    /// Advances death poses and removes enemies whose pose has played out.
    pub fn despawn_dead(
        &mut self,
        messenger: &mut Messenger,
        dt: f32,
    ) -> Result<Vec<u64>, MessengerError> {
        for enemy in self.enemies.iter_mut().filter(|e| !e.alive) {
            enemy.dying_timer -= dt;
        }

        let (expired, kept): (Vec<Enemy>, Vec<Enemy>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(Enemy::is_expired);
        self.enemies = kept;

        let mut removed = Vec::new();
        for enemy in expired {
            if let Some(speed) = self.speeds.remove(&enemy.id) {
                speed.unsubscribe(messenger)?;
            }
            debug!(enemy_id = enemy.id, "enemy despawned");
            removed.push(enemy.id);
        }
        Ok(removed)
    }

    /// Drops every enemy and its listener.
    pub fn clear(&mut self, messenger: &mut Messenger) -> Result<(), MessengerError> {
        self.enemies.clear();
        for (_, speed) in self.speeds.drain() {
            speed.unsubscribe(messenger)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::events::{self, SPEED_CHANGED};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn when_scene_is_empty_then_one_enemy_spawns_at_origin() {
        let mut messenger = Messenger::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut scene = SceneController::new();

        let first = scene
            .ensure_enemy(&mut messenger, &mut rng, 1.0)
            .expect("spawn");
        let second = scene
            .ensure_enemy(&mut messenger, &mut rng, 1.0)
            .expect("no spawn");

        assert_eq!(first, Some(1));
        assert_eq!(second, None);
        assert_eq!(scene.enemies().len(), 1);
        assert_eq!(scene.enemies()[0].position, SPAWN_POINT);
        assert!((0.0..360.0).contains(&scene.enemies()[0].yaw));
        assert_eq!(messenger.registry().listener_count(SPEED_CHANGED), 1);
    }

    #[test]
    fn when_speed_changes_then_enemies_report_new_multiplier() {
        let mut messenger = Messenger::new();
        let mut scene = SceneController::new();
        scene
            .spawn_enemy(&mut messenger, Vec2::ZERO, 0.0, 1.0)
            .expect("spawn");

        events::speed_changed(&messenger, 2.0).expect("broadcast");

        let speeds: Vec<f32> = scene.enemies_with_speed_mut().map(|(_, s)| s).collect();
        assert_eq!(speeds, vec![2.0]);
    }

    #[test]
    fn when_death_pose_ends_then_enemy_and_listener_are_removed() {
        let mut messenger = Messenger::new();
        let mut scene = SceneController::new();
        let id = scene
            .spawn_enemy(&mut messenger, Vec2::ZERO, 0.0, 1.0)
            .expect("spawn");
        scene.enemy_mut(id).expect("enemy").react_to_hit(1.0);

        let early = scene.despawn_dead(&mut messenger, 0.5).expect("tick");
        let late = scene.despawn_dead(&mut messenger, 0.5).expect("tick");

        assert!(early.is_empty());
        assert_eq!(late, vec![id]);
        assert!(scene.enemies().is_empty());
        assert!(!messenger.registry().contains(SPEED_CHANGED));
    }

    #[test]
    fn when_scene_is_cleared_then_no_speed_listeners_remain() {
        let mut messenger = Messenger::new();
        let mut scene = SceneController::new();
        for _ in 0..3 {
            scene
                .spawn_enemy(&mut messenger, Vec2::ZERO, 0.0, 1.0)
                .expect("spawn");
        }

        scene.clear(&mut messenger).expect("clear");

        assert!(scene.enemies().is_empty());
        assert_eq!(messenger.registry().listener_count(SPEED_CHANGED), 0);
    }
}
