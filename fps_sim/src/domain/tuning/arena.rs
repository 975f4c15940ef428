use serde::Deserialize;

/// Size of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    /// Distance from the centre to each wall.
    pub half_extent: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self { half_extent: 12.0 }
    }
}
