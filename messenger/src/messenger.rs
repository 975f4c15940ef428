// Messenger facade: typed add/remove/broadcast over the channel registry.

use crate::arity::Arguments;
use crate::error::MessengerError;
use crate::listener::Listener;
use crate::mode::{MessengerMode, MessengerSettings};
use crate::registry::ChannelRegistry;
use tracing::trace;

/// Typed publish/subscribe hub keyed by channel name.
///
/// Producers and consumers only share the channel name and the call shape.
/// Every listener on a channel must have the same signature; broadcasts must
/// use that signature too.
///
/// ```
/// use messenger::{Listener1, Messenger};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// let mut messenger = Messenger::new();
/// let hits = Arc::new(AtomicU32::new(0));
/// let counter = Arc::clone(&hits);
/// let on_damage = Listener1::new(move |amount: f32| {
///     counter.fetch_add(amount as u32, Ordering::Relaxed);
/// });
///
/// messenger.add_listener("damage", &on_damage)?;
/// messenger.broadcast("damage", (3.0_f32,))?;
/// assert_eq!(hits.load(Ordering::Relaxed), 3);
///
/// messenger.remove_listener("damage", &on_damage)?;
/// assert!(messenger.broadcast("damage", (1.0_f32,)).is_err());
/// # Ok::<(), messenger::MessengerError>(())
/// ```
#[derive(Default)]
pub struct Messenger {
    registry: ChannelRegistry,
    settings: MessengerSettings,
}

impl Messenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: MessengerSettings) -> Self {
        Self {
            registry: ChannelRegistry::new(),
            settings,
        }
    }

    pub fn settings(&self) -> MessengerSettings {
        self.settings
    }

    /// Read-only view of the registered channels.
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    pub fn add_listener<A: Arguments, R: 'static>(
        &mut self,
        name: &str,
        listener: &Listener<A, R>,
    ) -> Result<(), MessengerError> {
        self.registry.register(name, listener)
    }

    pub fn remove_listener<A: Arguments, R: 'static>(
        &mut self,
        name: &str,
        listener: &Listener<A, R>,
    ) -> Result<(), MessengerError> {
        self.registry.unregister(name, listener)
    }

    /// Invokes every plain listener on `name` with `args`, in registration order.
    pub fn broadcast<A: Arguments>(&self, name: &str, args: A) -> Result<(), MessengerError> {
        self.broadcast_with_mode(name, args, self.settings.default_mode)
    }

    pub fn broadcast_with_mode<A: Arguments>(
        &self,
        name: &str,
        args: A,
        mode: MessengerMode,
    ) -> Result<(), MessengerError> {
        let Some(listeners) = self.resolve::<A, ()>(name, mode)? else {
            return Ok(());
        };
        trace!(channel = name, listeners = listeners.len(), "broadcast");

        for listener in &listeners {
            listener.invoke(args.clone());
        }
        Ok(())
    }

    /// Invokes every value-returning listener on `name`, handing each result to
    /// `on_result` before the next listener runs.
    pub fn broadcast_collect<A, R, F>(
        &self,
        name: &str,
        args: A,
        on_result: F,
    ) -> Result<(), MessengerError>
    where
        A: Arguments,
        R: 'static,
        F: FnMut(R),
    {
        self.broadcast_collect_with_mode(name, args, on_result, self.settings.default_mode)
    }

    pub fn broadcast_collect_with_mode<A, R, F>(
        &self,
        name: &str,
        args: A,
        mut on_result: F,
        mode: MessengerMode,
    ) -> Result<(), MessengerError>
    where
        A: Arguments,
        R: 'static,
        F: FnMut(R),
    {
        let Some(listeners) = self.resolve::<A, R>(name, mode)? else {
            return Ok(());
        };
        trace!(channel = name, listeners = listeners.len(), "broadcast with results");

        for listener in &listeners {
            on_result(listener.invoke(args.clone()));
        }
        Ok(())
    }

    /// Invokes fallible listeners in order and stops at the first error.
    ///
    /// Listeners that already ran keep their effects.
    pub fn try_broadcast<A, E>(&self, name: &str, args: A) -> Result<(), MessengerError>
    where
        A: Arguments,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.try_broadcast_with_mode::<A, E>(name, args, self.settings.default_mode)
    }

    pub fn try_broadcast_with_mode<A, E>(
        &self,
        name: &str,
        args: A,
        mode: MessengerMode,
    ) -> Result<(), MessengerError>
    where
        A: Arguments,
        E: std::error::Error + Send + Sync + 'static,
    {
        let Some(listeners) = self.resolve::<A, Result<(), E>>(name, mode)? else {
            return Ok(());
        };
        trace!(channel = name, listeners = listeners.len(), "fallible broadcast");

        for (index, listener) in listeners.iter().enumerate() {
            listener
                .invoke(args.clone())
                .map_err(|source| MessengerError::ListenerFailed {
                    channel: name.to_string(),
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }

    fn resolve<A: Arguments, R: 'static>(
        &self,
        name: &str,
        mode: MessengerMode,
    ) -> Result<Option<Vec<Listener<A, R>>>, MessengerError> {
        if mode.requires_listener() && !self.registry.contains(name) {
            return Err(MessengerError::NoListener {
                channel: name.to_string(),
            });
        }
        self.registry.invocation_list::<A, R>(name)
    }
}
