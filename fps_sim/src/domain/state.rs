// Domain-level scene entities, input and snapshot types.

use serde::Serialize;
use std::ops::{Add, Mul, Sub};

/// Point or direction on the ground plane (Unity's X/Z axes).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, z: 0.0 };

    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Unit forward vector for a yaw in degrees (0 = +Z, clockwise seen from above).
    pub fn forward(yaw_degrees: f32) -> Self {
        let yaw = yaw_degrees.to_radians();
        Self::new(yaw.sin(), yaw.cos())
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.z * other.z
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Scales the vector down so its length does not exceed `max`.
    pub fn clamp_length(self, max: f32) -> Self {
        let length = self.length();
        if length > max && length > 0.0 {
            self * (max / length)
        } else {
            self
        }
    }

    /// Maps a local-space offset (x = right, z = forward) into world space.
    pub fn rotated(self, yaw_degrees: f32) -> Self {
        let (sin, cos) = yaw_degrees.to_radians().sin_cos();
        Self::new(self.x * cos + self.z * sin, -self.x * sin + self.z * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.z * rhs)
    }
}

/// One frame of player input, already read from whatever device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerInput {
    pub horizontal: f32, // strafe axis, -1.0..=1.0
    pub vertical: f32,   // forward axis, -1.0..=1.0
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub fire: bool,
}

/// Square room centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub half_extent: f32,
}

impl Arena {
    /// Keeps a body of `radius` inside the walls.
    pub fn clamp(&self, position: Vec2, radius: f32) -> Vec2 {
        let limit = (self.half_extent - radius).max(0.0);
        Vec2::new(
            position.x.clamp(-limit, limit),
            position.z.clamp(-limit, limit),
        )
    }

    pub fn contains(&self, position: Vec2) -> bool {
        position.x.abs() <= self.half_extent && position.z.abs() <= self.half_extent
    }
}

pub struct Player {
    pub position: Vec2,
    pub yaw: f32,   // degrees, body rotation
    pub pitch: f32, // degrees, camera rotation (positive looks down)
    pub health: i32,
    pub max_health: i32,
}

impl Player {
    pub fn new(max_health: i32) -> Self {
        Self {
            position: Vec2::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health: max_health,
            max_health,
        }
    }

    /// Applies damage and returns the remaining health (may go negative).
    pub fn hurt(&mut self, damage: i32) -> i32 {
        self.health -= damage;
        self.health
    }
}

pub struct Enemy {
    pub id: u64,
    pub position: Vec2,
    pub yaw: f32,
    pub alive: bool,
    // Seconds left in the death pose before the body is removed.
    pub dying_timer: f32,
    // Fireball currently in flight, at most one per enemy.
    pub fireball_id: Option<u64>,
}

impl Enemy {
    pub fn new(id: u64, position: Vec2, yaw: f32) -> Self {
        Self {
            id,
            position,
            yaw,
            alive: true,
            dying_timer: 0.0,
            fireball_id: None,
        }
    }

    /// Reactive-target behaviour: stop wandering and start the death pose.
    pub fn react_to_hit(&mut self, death_delay: f32) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.dying_timer = death_delay;
    }

    /// True once the death pose has played out.
    pub fn is_expired(&self) -> bool {
        !self.alive && self.dying_timer <= 0.0
    }
}

pub struct Fireball {
    pub id: u64,
    pub owner_id: u64,
    pub position: Vec2,
    pub yaw: f32,
}

/// Marker left where a shot hit scenery.
pub struct Impact {
    pub position: Vec2,
    pub ttl: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub yaw: f32,
    pub pitch: f32,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemySnapshot {
    pub id: u64,
    pub position: Vec2,
    pub yaw: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FireballSnapshot {
    pub id: u64,
    pub owner_id: u64,
    pub position: Vec2,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            position: p.position,
            yaw: p.yaw,
            pitch: p.pitch,
            health: p.health,
        }
    }
}

impl From<&Enemy> for EnemySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.id,
            position: e.position,
            yaw: e.yaw,
            alive: e.alive,
        }
    }
}

impl From<&Fireball> for FireballSnapshot {
    fn from(f: &Fireball) -> Self {
        Self {
            id: f.id,
            owner_id: f.owner_id,
            position: f.position,
        }
    }
}
