// Gameplay channels and typed broadcast helpers.
//
// Producers and consumers only agree on the names and shapes below.

use crate::domain::Vec2;
use messenger::{Listener1, Messenger, MessengerError, MessengerMode};
use tokio::sync::watch;

/// `fn(enemy_id: u64) -> u32` points awarded.
pub const ENEMY_HIT: &str = "ENEMY_HIT";
/// `fn(multiplier: f32)`.
pub const SPEED_CHANGED: &str = "SPEED_CHANGED";
/// `fn(health: i32, max_health: i32)`.
pub const HEALTH_CHANGED: &str = "HEALTH_CHANGED";
/// `fn(enemy_id: u64, x: f32, z: f32)`, nobody has to listen.
pub const FIREBALL_LAUNCHED: &str = "FIREBALL_LAUNCHED";
/// `fn()`.
pub const SETTINGS_OPENED: &str = "SETTINGS_OPENED";
/// `fn()`.
pub const SETTINGS_CLOSED: &str = "SETTINGS_CLOSED";
/// `fn(name: String)`.
pub const NAME_SUBMITTED: &str = "NAME_SUBMITTED";

/// Announces a hit and sums the points every listener awarded for it.
pub fn enemy_hit(messenger: &Messenger, enemy_id: u64) -> Result<u32, MessengerError> {
    let mut points = 0;
    messenger.broadcast_collect(ENEMY_HIT, (enemy_id,), |awarded: u32| points += awarded)?;
    Ok(points)
}

pub fn speed_changed(messenger: &Messenger, multiplier: f32) -> Result<(), MessengerError> {
    messenger.broadcast(SPEED_CHANGED, (multiplier,))
}

pub fn health_changed(
    messenger: &Messenger,
    health: i32,
    max_health: i32,
) -> Result<(), MessengerError> {
    messenger.broadcast(HEALTH_CHANGED, (health, max_health))
}

pub fn fireball_launched(
    messenger: &Messenger,
    enemy_id: u64,
    position: Vec2,
) -> Result<(), MessengerError> {
    messenger.broadcast_with_mode(
        FIREBALL_LAUNCHED,
        (enemy_id, position.x, position.z),
        MessengerMode::DontRequireListener,
    )
}

pub fn settings_opened(messenger: &Messenger) -> Result<(), MessengerError> {
    messenger.broadcast(SETTINGS_OPENED, ())
}

pub fn settings_closed(messenger: &Messenger) -> Result<(), MessengerError> {
    messenger.broadcast(SETTINGS_CLOSED, ())
}

pub fn name_submitted(messenger: &Messenger, name: &str) -> Result<(), MessengerError> {
    messenger.broadcast(NAME_SUBMITTED, (name.to_string(),))
}

/// Speed multiplier kept current by its own `SPEED_CHANGED` listener.
pub struct SpeedSubscription {
    listener: Listener1<f32>,
    multiplier: watch::Receiver<f32>,
}

impl SpeedSubscription {
    pub fn subscribe(messenger: &mut Messenger, initial: f32) -> Result<Self, MessengerError> {
        let (multiplier_tx, multiplier) = watch::channel(initial);
        let listener = Listener1::new(move |value: f32| {
            multiplier_tx.send_replace(value);
        });
        messenger.add_listener(SPEED_CHANGED, &listener)?;
        Ok(Self {
            listener,
            multiplier,
        })
    }

    pub fn current(&self) -> f32 {
        *self.multiplier.borrow()
    }

    pub fn unsubscribe(self, messenger: &mut Messenger) -> Result<(), MessengerError> {
        messenger.remove_listener(SPEED_CHANGED, &self.listener)
    }
}
