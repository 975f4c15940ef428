// Settings popup controls that publish their changes as events.

use crate::use_cases::events;
use messenger::{Messenger, MessengerError};
use std::ops::RangeInclusive;
use tracing::debug;

/// Range of the speed slider.
pub const SPEED_RANGE: RangeInclusive<f32> = 0.1..=2.0;

#[derive(Debug, Default)]
pub struct SettingsPopup {
    open: bool,
}

impl SettingsPopup {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, messenger: &Messenger) -> Result<(), MessengerError> {
        events::settings_opened(messenger)?;
        self.open = true;
        Ok(())
    }

    pub fn close(&mut self, messenger: &Messenger) -> Result<(), MessengerError> {
        events::settings_closed(messenger)?;
        self.open = false;
        Ok(())
    }

    /// Publishes the trimmed name; blank input is ignored and returns `false`.
    pub fn submit_name(&self, messenger: &Messenger, name: &str) -> Result<bool, MessengerError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("blank name ignored");
            return Ok(false);
        }
        events::name_submitted(messenger, name)?;
        Ok(true)
    }

    /// Clamps the slider value into [`SPEED_RANGE`], publishes it and returns what was applied.
    pub fn set_speed(&self, messenger: &Messenger, value: f32) -> Result<f32, MessengerError> {
        let applied = value.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
        events::speed_changed(messenger, applied)?;
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapters::hud::{Hud, HudState};

    #[test]
    fn when_slider_goes_past_its_end_then_speed_is_clamped() {
        let mut messenger = Messenger::new();
        let hud = Hud::attach(&mut messenger, HudState::new(5)).expect("attach");
        let popup = SettingsPopup::default();

        let applied = popup.set_speed(&messenger, 5.0).expect("speed");

        assert_eq!(applied, 2.0);
        assert_eq!(hud.state().speed_multiplier, 2.0);
    }

    #[test]
    fn when_name_is_blank_then_nothing_is_published() {
        let mut messenger = Messenger::new();
        let hud = Hud::attach(&mut messenger, HudState::new(5)).expect("attach");
        let popup = SettingsPopup::default();

        assert!(!popup.submit_name(&messenger, "   ").expect("blank"));
        assert!(popup.submit_name(&messenger, "  Grace ").expect("name"));

        assert_eq!(hud.state().player_name.as_deref(), Some("Grace"));
    }

    #[test]
    fn when_nobody_listens_then_popup_stays_closed() {
        let messenger = Messenger::new();
        let mut popup = SettingsPopup::default();

        assert!(popup.open(&messenger).is_err());
        assert!(!popup.is_open());
    }
}
