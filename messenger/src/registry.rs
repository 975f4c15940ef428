// Channel registry: name -> ordered, same-signature listeners.

use crate::arity::Arguments;
use crate::error::{MessengerError, Operation};
use crate::listener::{Listener, ListenerId};
use crate::signature::Signature;
use std::any::Any;
use std::collections::HashMap;
use tracing::debug;

/// Listener stored with its concrete type erased.
struct StoredListener {
    id: ListenerId,
    handle: Box<dyn Any + Send + Sync>,
}

impl StoredListener {
    fn new<A: Arguments, R: 'static>(listener: &Listener<A, R>) -> Self {
        Self {
            id: listener.id(),
            handle: Box::new(listener.clone()),
        }
    }
}

struct Channel {
    /// Bound by the first registration; every entry in `listeners` matches it.
    signature: Signature,
    /// Registration order, which is also broadcast order.
    listeners: Vec<StoredListener>,
}

/// Registration table behind a [`Messenger`](crate::Messenger).
///
/// A channel exists exactly while it has at least one listener.
#[derive(Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Channel>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listener` to the channel, creating the channel on first use.
    pub fn register<A: Arguments, R: 'static>(
        &mut self,
        name: &str,
        listener: &Listener<A, R>,
    ) -> Result<(), MessengerError> {
        let requested = Signature::of::<A, R>();

        match self.channels.get_mut(name) {
            Some(channel) => {
                if channel.signature != requested {
                    return Err(conflict(name, Operation::Add, &channel.signature, requested));
                }
                channel.listeners.push(StoredListener::new(listener));
                debug!(
                    channel = name,
                    listener = %listener.id(),
                    listeners = channel.listeners.len(),
                    "listener added"
                );
            }
            None => {
                debug!(
                    channel = name,
                    listener = %listener.id(),
                    signature = %requested,
                    "channel created"
                );
                self.channels.insert(
                    name.to_string(),
                    Channel {
                        signature: requested,
                        listeners: vec![StoredListener::new(listener)],
                    },
                );
            }
        }
        Ok(())
    }

    /// Removes the first registration of `listener`, dropping the channel once empty.
    ///
    /// A listener with the right signature that was never registered is ignored.
    pub fn unregister<A: Arguments, R: 'static>(
        &mut self,
        name: &str,
        listener: &Listener<A, R>,
    ) -> Result<(), MessengerError> {
        let Some(channel) = self.channels.get_mut(name) else {
            return Err(MessengerError::UnknownChannel {
                channel: name.to_string(),
            });
        };
        if channel.listeners.is_empty() {
            return Err(MessengerError::EmptyChannel {
                channel: name.to_string(),
            });
        }
        let requested = Signature::of::<A, R>();
        if channel.signature != requested {
            return Err(conflict(name, Operation::Remove, &channel.signature, requested));
        }

        if let Some(position) = channel
            .listeners
            .iter()
            .position(|stored| stored.id == listener.id())
        {
            channel.listeners.remove(position);
            debug!(
                channel = name,
                listener = %listener.id(),
                listeners = channel.listeners.len(),
                "listener removed"
            );
        }

        if channel.listeners.is_empty() {
            self.channels.remove(name);
            debug!(channel = name, "channel removed");
        }
        Ok(())
    }

    /// Snapshot of the channel's listeners typed as `fn(A) -> R`.
    ///
    /// `Ok(None)` means nobody ever registered on `name`, which callers treat
    /// differently from a signature mismatch.
    pub fn invocation_list<A: Arguments, R: 'static>(
        &self,
        name: &str,
    ) -> Result<Option<Vec<Listener<A, R>>>, MessengerError> {
        let Some(channel) = self.channels.get(name) else {
            return Ok(None);
        };
        let requested = Signature::of::<A, R>();
        if channel.signature != requested {
            return Err(conflict(name, Operation::Broadcast, &channel.signature, requested));
        }

        channel
            .listeners
            .iter()
            .map(|stored| {
                stored
                    .handle
                    .downcast_ref::<Listener<A, R>>()
                    .cloned()
                    .ok_or_else(|| {
                        conflict(name, Operation::Broadcast, &channel.signature, Signature::of::<A, R>())
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Number of registrations on `name` (zero for unknown channels).
    pub fn listener_count(&self, name: &str) -> usize {
        self.channels
            .get(name)
            .map_or(0, |channel| channel.listeners.len())
    }

    pub fn signature(&self, name: &str) -> Option<&Signature> {
        self.channels.get(name).map(|channel| &channel.signature)
    }

    /// Channel names in no particular order.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    #[cfg(test)]
    fn insert_empty_channel(&mut self, name: &str, signature: Signature) {
        self.channels.insert(
            name.to_string(),
            Channel {
                signature,
                listeners: Vec::new(),
            },
        );
    }
}

fn conflict(
    name: &str,
    operation: Operation,
    registered: &Signature,
    requested: Signature,
) -> MessengerError {
    MessengerError::SignatureConflict {
        channel: name.to_string(),
        operation,
        registered: registered.clone(),
        requested,
    }
}
