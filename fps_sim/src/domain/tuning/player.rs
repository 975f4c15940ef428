use serde::Deserialize;

/// Gameplay tuning for the first-person player.
///
/// Keep this separate from runtime configuration (tick rates, run length, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Walk speed in units per second (diagonals are clamped to it).
    pub speed: f32,

    /// Collision radius of the character controller.
    pub radius: f32,

    /// Health at spawn.
    pub max_health: i32,

    /// Camera height above the floor, used when a shot is aimed downwards.
    pub eye_height: f32,

    /// Seconds an impact marker stays after a shot hits scenery.
    pub impact_ttl: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 6.0,
            radius: 0.5,
            max_health: 5,
            eye_height: 1.0,
            impact_ttl: 1.0,
        }
    }
}

/// Which mouse axes drive the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationAxes {
    #[default]
    MouseXAndY,
    MouseX,
    MouseY,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LookTuning {
    pub axes: RotationAxes,

    /// Degrees of yaw per unit of horizontal mouse movement.
    pub sensitivity_hor: f32,

    /// Degrees of pitch per unit of vertical mouse movement.
    pub sensitivity_vert: f32,

    /// Pitch limits in degrees.
    pub min_vert: f32,
    pub max_vert: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self {
            axes: RotationAxes::MouseXAndY,
            sensitivity_hor: 6.0,
            sensitivity_vert: 6.0,
            min_vert: -45.0,
            max_vert: 45.0,
        }
    }
}
