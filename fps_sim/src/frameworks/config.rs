// Runtime configuration: an optional TOML file plus environment overrides.

use crate::domain::tuning::{ArenaTuning, EnemyTuning, FireballTuning, LookTuning, PlayerTuning};
use crate::use_cases::SimSettings;
use messenger::MessengerSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, time::Duration};

// Runtime constants (not gameplay tuning).

pub const DEFAULT_TICKS: u64 = 600;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000 / 60;
pub const DEFAULT_SEED: u64 = 42;

/// Path of the TOML config file.
pub const CONFIG_PATH_VAR: &str = "SIM_CONFIG";
pub const TICKS_VAR: &str = "SIM_TICKS";
pub const SEED_VAR: &str = "SIM_SEED";
pub const TICK_MS_VAR: &str = "SIM_TICK_MS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Frames to simulate (0 runs until Ctrl-C).
    pub ticks: u64,
    pub tick_interval_ms: u64,
    pub seed: u64,
    /// Name entered through the settings popup at startup.
    pub player_name: Option<String>,
    /// Speed slider value applied at startup.
    pub speed_multiplier: Option<f32>,
    pub messenger: MessengerSettings,
    pub player: PlayerTuning,
    pub look: LookTuning,
    pub enemy: EnemyTuning,
    pub fireball: FireballTuning,
    pub arena: ArenaTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: DEFAULT_SEED,
            player_name: None,
            speed_multiplier: None,
            messenger: MessengerSettings::default(),
            player: PlayerTuning::default(),
            look: LookTuning::default(),
            enemy: EnemyTuning::default(),
            fireball: FireballTuning::default(),
            arena: ArenaTuning::default(),
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `SIM_CONFIG` (if set) and then applies the `SIM_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_path(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ticks) = parse_override(&lookup, TICKS_VAR)? {
            self.ticks = ticks;
        }
        if let Some(seed) = parse_override(&lookup, SEED_VAR)? {
            self.seed = seed;
        }
        if let Some(millis) = parse_override(&lookup, TICK_MS_VAR)? {
            self.tick_interval_ms = millis;
        }
        Ok(())
    }

    /// Rejects tuning the game loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy.max_turn <= 0 {
            return Err(ConfigError::Invalid {
                field: "enemy.max_turn",
                reason: "must be positive",
            });
        }
        let (min, max) = (self.look.min_vert, self.look.max_vert);
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ConfigError::Invalid {
                field: "look.min_vert",
                reason: "must not exceed look.max_vert",
            });
        }
        Ok(())
    }

    /// Tick interval, never shorter than one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn sim_settings(&self) -> SimSettings {
        SimSettings {
            tick_interval: self.tick_interval(),
            ticks: self.ticks,
            seed: self.seed,
            messenger: self.messenger,
            player: self.player,
            look: self.look,
            enemy: self.enemy,
            fireball: self.fireball,
            arena: self.arena,
        }
    }
}

fn parse_override<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}
