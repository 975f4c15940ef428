// Broadcast policy and per-messenger settings.

use serde::{Deserialize, Serialize};

/// What a broadcast does when nobody listens on the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessengerMode {
    /// Fail with [`MessengerError::NoListener`](crate::MessengerError::NoListener).
    #[default]
    RequireListener,
    /// Do nothing.
    DontRequireListener,
}

impl MessengerMode {
    pub fn requires_listener(self) -> bool {
        matches!(self, MessengerMode::RequireListener)
    }
}

/// Configuration applied when a [`Messenger`](crate::Messenger) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessengerSettings {
    /// Mode used by broadcasts that do not pass one explicitly.
    pub default_mode: MessengerMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_nothing_is_configured_then_listener_is_required() {
        assert_eq!(MessengerSettings::default().default_mode, MessengerMode::RequireListener);
    }

    #[test]
    fn when_settings_are_parsed_then_mode_uses_snake_case() {
        let settings: MessengerSettings =
            toml::from_str("default_mode = \"dont_require_listener\"").expect("valid toml");

        assert_eq!(settings.default_mode, MessengerMode::DontRequireListener);
        assert!(!settings.default_mode.requires_listener());
    }

    #[test]
    fn when_table_is_empty_then_defaults_apply() {
        let settings: MessengerSettings = toml::from_str("").expect("valid toml");

        assert_eq!(settings, MessengerSettings::default());
    }
}
