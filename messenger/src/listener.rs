// Identity-carrying, type-erasable listener handles.

use crate::arity::{Arguments, ListenerFn};
use crate::signature::Signature;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a listener.
///
/// Minted once per [`Listener::new`]; clones of a listener share it, which is
/// what removal compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Callback taking the argument tuple `A` and returning `R`.
///
/// Build one through the arity aliases ([`Listener0`](crate::Listener0) ..
/// [`Listener3`](crate::Listener3)), keep a clone around, and pass it back to
/// [`Messenger::remove_listener`](crate::Messenger::remove_listener) to
/// unsubscribe.
pub struct Listener<A, R = ()> {
    id: ListenerId,
    callback: Arc<dyn ListenerFn<A, R>>,
}

impl<A: Arguments, R: 'static> Listener<A, R> {
    pub fn new<F>(callback: F) -> Self
    where
        F: ListenerFn<A, R>,
    {
        Self {
            id: ListenerId::next(),
            callback: Arc::new(callback),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn signature() -> Signature {
        Signature::of::<A, R>()
    }

    pub(crate) fn invoke(&self, args: A) -> R {
        self.callback.call(args)
    }
}

impl<A, R> Clone for Listener<A, R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A: Arguments, R: 'static> fmt::Debug for Listener<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("signature", &Self::signature().to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arity::{Listener0, Listener2};

    #[test]
    fn when_listener_is_cloned_then_identity_is_shared() {
        let listener = Listener0::new(|| {});
        let clone = listener.clone();

        assert_eq!(listener.id(), clone.id());
    }

    #[test]
    fn when_same_closure_is_wrapped_twice_then_identities_differ() {
        let first = Listener0::new(|| {});
        let second = Listener0::new(|| {});

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn when_invoked_then_arguments_reach_the_closure() {
        let listener: Listener2<i32, i32, i32> = Listener2::new(|a: i32, b: i32| a * b);

        assert_eq!(listener.invoke((6, 7)), 42);
        assert_eq!(Listener2::<i32, i32, i32>::signature().to_string(), "fn(i32, i32) -> i32");
    }
}
