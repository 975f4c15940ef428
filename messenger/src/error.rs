// Errors surfaced by registry and broadcast operations.

use crate::signature::Signature;
use std::fmt;

/// Registry operation that detected a signature mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Broadcast,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add listener",
            Operation::Remove => "remove listener",
            Operation::Broadcast => "broadcast",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessengerError {
    /// Channel already holds listeners of a different shape.
    #[error(
        "cannot {operation} on channel {channel:?}: listeners have signature {registered} but {requested} was requested"
    )]
    SignatureConflict {
        channel: String,
        operation: Operation,
        registered: Signature,
        requested: Signature,
    },

    #[error("cannot remove listener from channel {channel:?}: no such channel")]
    UnknownChannel { channel: String },

    /// A channel entry exists without listeners; the registry never leaves one behind.
    #[error("channel {channel:?} exists but has no listeners")]
    EmptyChannel { channel: String },

    #[error("broadcasting on channel {channel:?} but no listener found")]
    NoListener { channel: String },

    /// A fallible listener returned an error; later listeners were not invoked.
    #[error("listener {index} on channel {channel:?} failed")]
    ListenerFailed {
        channel: String,
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MessengerError {
    /// Channel name the error refers to.
    pub fn channel(&self) -> &str {
        match self {
            MessengerError::SignatureConflict { channel, .. }
            | MessengerError::UnknownChannel { channel }
            | MessengerError::EmptyChannel { channel }
            | MessengerError::NoListener { channel }
            | MessengerError::ListenerFailed { channel, .. } => channel,
        }
    }
}
