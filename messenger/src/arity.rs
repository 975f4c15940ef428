// Arity facades: argument tuples and closure adapters for 0..=3 inputs.
//
// Broadcast arguments travel as a tuple (`()`, `(A,)`, `(A, B)`, `(A, B, C)`)
// and every listener of that arity is adapted to take the whole tuple.

use crate::listener::Listener;
use crate::signature::TypeTag;

/// Argument tuple accepted by a channel.
///
/// Every listener receives its own copy, hence the `Clone` bound.
pub trait Arguments: Clone + 'static {
    const ARITY: usize;

    fn type_tags() -> Vec<TypeTag>;
}

/// Callable that can back a [`Listener`] taking the tuple `Args`.
pub trait ListenerFn<Args, R>: Send + Sync + 'static {
    fn call(&self, args: Args) -> R;
}

macro_rules! arity_facade {
    ($arity:literal; $($ty:ident => $arg:ident),*) => {
        impl<$($ty: Clone + 'static),*> Arguments for ($($ty,)*) {
            const ARITY: usize = $arity;

            fn type_tags() -> Vec<TypeTag> {
                vec![$(TypeTag::of::<$ty>()),*]
            }
        }

        impl<Func, Ret, $($ty),*> ListenerFn<($($ty,)*), Ret> for Func
        where
            Func: Fn($($ty),*) -> Ret + Send + Sync + 'static,
        {
            fn call(&self, ($($arg,)*): ($($ty,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

arity_facade!(0;);
arity_facade!(1; A => a);
arity_facade!(2; A => a, B => b);
arity_facade!(3; A => a, B => b, C => c);

/// Listener without inputs.
pub type Listener0<R = ()> = Listener<(), R>;
/// Listener with one input.
pub type Listener1<A, R = ()> = Listener<(A,), R>;
/// Listener with two inputs.
pub type Listener2<A, B, R = ()> = Listener<(A, B), R>;
/// Listener with three inputs.
pub type Listener3<A, B, C, R = ()> = Listener<(A, B, C), R>;
