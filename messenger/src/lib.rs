//! Typed, string-keyed publish/subscribe messaging.
//!
//! Listeners subscribe to a channel name with a fixed call shape (zero to
//! three inputs, optional return value). The first listener fixes the
//! channel's [`Signature`]; later listeners and broadcasts must match it or
//! get a [`MessengerError::SignatureConflict`].

pub mod arity;
pub mod error;
pub mod listener;
pub mod messenger;
pub mod mode;
pub mod registry;
pub mod signature;

pub use arity::{Arguments, Listener0, Listener1, Listener2, Listener3, ListenerFn};
pub use error::{MessengerError, Operation};
pub use listener::{Listener, ListenerId};
pub use messenger::Messenger;
pub use mode::{MessengerMode, MessengerSettings};
pub use registry::ChannelRegistry;
pub use signature::{Signature, TypeTag};
