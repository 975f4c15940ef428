// Heads-up display model fed entirely by gameplay broadcasts.

use crate::use_cases::events::{
    ENEMY_HIT, FIREBALL_LAUNCHED, HEALTH_CHANGED, NAME_SUBMITTED, SETTINGS_CLOSED, SETTINGS_OPENED,
    SPEED_CHANGED,
};
use messenger::{Listener0, Listener1, Listener2, Listener3, Messenger, MessengerError};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Points the scoreboard awards for each enemy hit.
pub const POINTS_PER_HIT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudState {
    pub score: u32,
    pub health: i32,
    pub max_health: i32,
    pub speed_multiplier: f32,
    pub settings_open: bool,
    pub player_name: Option<String>,
    pub fireballs_seen: u32,
}

impl HudState {
    pub fn new(max_health: i32) -> Self {
        Self {
            score: 0,
            health: max_health,
            max_health,
            speed_multiplier: 1.0,
            settings_open: false,
            player_name: None,
            fireballs_seen: 0,
        }
    }
}

/// Listens on every gameplay channel and folds the events into a [`HudState`].
pub struct Hud {
    state_tx: Arc<watch::Sender<HudState>>,
    on_enemy_hit: Listener1<u64, u32>,
    on_health_changed: Listener2<i32, i32>,
    on_speed_changed: Listener1<f32>,
    on_fireball_launched: Listener3<u64, f32, f32>,
    on_settings_opened: Listener0,
    on_settings_closed: Listener0,
    on_name_submitted: Listener1<String>,
}

impl Hud {
    pub fn attach(messenger: &mut Messenger, initial: HudState) -> Result<Self, MessengerError> {
        let state_tx = Arc::new(watch::Sender::new(initial));

        let tx = Arc::clone(&state_tx);
        let on_enemy_hit = Listener1::new(move |_enemy_id: u64| {
            tx.send_modify(|s| s.score += POINTS_PER_HIT);
            POINTS_PER_HIT
        });
        let tx = Arc::clone(&state_tx);
        let on_health_changed = Listener2::new(move |health: i32, max_health: i32| {
            tx.send_modify(|s| {
                s.health = health;
                s.max_health = max_health;
            });
        });
        let tx = Arc::clone(&state_tx);
        let on_speed_changed = Listener1::new(move |multiplier: f32| {
            info!(multiplier, "speed changed");
            tx.send_modify(|s| s.speed_multiplier = multiplier);
        });
        let tx = Arc::clone(&state_tx);
        let on_fireball_launched = Listener3::new(move |_enemy_id: u64, _x: f32, _z: f32| {
            tx.send_modify(|s| s.fireballs_seen += 1);
        });
        let tx = Arc::clone(&state_tx);
        let on_settings_opened = Listener0::new(move || {
            tx.send_modify(|s| s.settings_open = true);
        });
        let tx = Arc::clone(&state_tx);
        let on_settings_closed = Listener0::new(move || {
            tx.send_modify(|s| s.settings_open = false);
        });
        let tx = Arc::clone(&state_tx);
        let on_name_submitted = Listener1::new(move |name: String| {
            info!(%name, "player name submitted");
            tx.send_modify(|s| s.player_name = Some(name));
        });

        messenger.add_listener(ENEMY_HIT, &on_enemy_hit)?;
        messenger.add_listener(HEALTH_CHANGED, &on_health_changed)?;
        messenger.add_listener(SPEED_CHANGED, &on_speed_changed)?;
        messenger.add_listener(FIREBALL_LAUNCHED, &on_fireball_launched)?;
        messenger.add_listener(SETTINGS_OPENED, &on_settings_opened)?;
        messenger.add_listener(SETTINGS_CLOSED, &on_settings_closed)?;
        messenger.add_listener(NAME_SUBMITTED, &on_name_submitted)?;

        Ok(Self {
            state_tx,
            on_enemy_hit,
            on_health_changed,
            on_speed_changed,
            on_fireball_launched,
            on_settings_opened,
            on_settings_closed,
            on_name_submitted,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<HudState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> HudState {
        self.state_tx.borrow().clone()
    }

    /// Unsubscribes from every channel; the last published state stays readable by receivers.
    pub fn detach(self, messenger: &mut Messenger) -> Result<(), MessengerError> {
        messenger.remove_listener(ENEMY_HIT, &self.on_enemy_hit)?;
        messenger.remove_listener(HEALTH_CHANGED, &self.on_health_changed)?;
        messenger.remove_listener(SPEED_CHANGED, &self.on_speed_changed)?;
        messenger.remove_listener(FIREBALL_LAUNCHED, &self.on_fireball_launched)?;
        messenger.remove_listener(SETTINGS_OPENED, &self.on_settings_opened)?;
        messenger.remove_listener(SETTINGS_CLOSED, &self.on_settings_closed)?;
        messenger.remove_listener(NAME_SUBMITTED, &self.on_name_submitted)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::events;
    use crate::domain::Vec2;

    #[test]
    fn when_gameplay_events_arrive_then_hud_state_follows() {
        let mut messenger = Messenger::new();
        let hud = Hud::attach(&mut messenger, HudState::new(5)).expect("attach");
        let mut updates = hud.subscribe();

        let points = events::enemy_hit(&messenger, 1).expect("hit");
        events::health_changed(&messenger, 3, 5).expect("health");
        events::speed_changed(&messenger, 1.5).expect("speed");
        events::fireball_launched(&messenger, 1, Vec2::ZERO).expect("fireball");

        assert_eq!(points, POINTS_PER_HIT);
        assert!(updates.has_changed().expect("sender alive"));
        let state = updates.borrow_and_update().clone();
        assert_eq!(state.score, 1);
        assert_eq!(state.health, 3);
        assert_eq!(state.speed_multiplier, 1.5);
        assert_eq!(state.fireballs_seen, 1);
    }

    #[test]
    fn when_settings_flow_runs_then_popup_and_name_are_tracked() {
        let mut messenger = Messenger::new();
        let hud = Hud::attach(&mut messenger, HudState::new(5)).expect("attach");

        events::settings_opened(&messenger).expect("open");
        assert!(hud.state().settings_open);
        events::name_submitted(&messenger, "Ada").expect("name");
        events::settings_closed(&messenger).expect("close");

        let state = hud.state();
        assert!(!state.settings_open);
        assert_eq!(state.player_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn when_hud_detaches_then_its_channels_are_released() {
        let mut messenger = Messenger::new();
        let hud = Hud::attach(&mut messenger, HudState::new(5)).expect("attach");
        assert_eq!(messenger.registry().len(), 7);

        hud.detach(&mut messenger).expect("detach");

        assert!(messenger.registry().is_empty());
        assert!(matches!(
            events::enemy_hit(&messenger, 1),
            Err(MessengerError::NoListener { .. })
        ));
    }
}
