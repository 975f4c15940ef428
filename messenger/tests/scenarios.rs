use messenger::{Listener0, Listener1, Messenger, MessengerError, MessengerMode, Signature};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn ping_runs_once_then_fails_after_its_only_listener_leaves() {
    let mut messenger = Messenger::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let on_ping = Listener0::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    messenger.add_listener("ping", &on_ping).expect("register");
    messenger.broadcast("ping", ()).expect("broadcast");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    messenger.remove_listener("ping", &on_ping).expect("unregister");
    let result = messenger.broadcast_with_mode("ping", (), MessengerMode::RequireListener);

    assert!(matches!(result, Err(MessengerError::NoListener { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn score_rejects_a_differently_typed_second_listener() {
    let mut messenger = Messenger::new();
    let on_score = Listener0::new(|| 100_i32);
    messenger.add_listener("score", &on_score).expect("register");

    let result = messenger.add_listener("score", &Listener1::new(|_: String| {}));

    assert!(matches!(result, Err(MessengerError::SignatureConflict { .. })));
    assert_eq!(messenger.registry().listener_count("score"), 1);
    assert_eq!(
        messenger.registry().signature("score"),
        Some(&Signature::of::<(), i32>())
    );

    let mut results = Vec::new();
    messenger
        .broadcast_collect("score", (), |value: i32| results.push(value))
        .expect("original listener still answers");
    assert_eq!(results, vec![100]);
}

#[test]
fn damage_reaches_listeners_in_registration_order_on_every_run() {
    let mut messenger = Messenger::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for name in ["c1", "c2"] {
        let seen = Arc::clone(&seen);
        messenger
            .add_listener(
                "damage",
                &Listener1::new(move |amount: f32| {
                    seen.lock().expect("seen mutex poisoned").push((name, amount));
                }),
            )
            .expect("register");
    }

    for _ in 0..10 {
        messenger.broadcast("damage", (3.5_f32,)).expect("broadcast");
    }

    let seen = seen.lock().expect("seen mutex poisoned");
    assert_eq!(seen.len(), 20);
    for pair in seen.chunks(2) {
        assert_eq!(pair, [("c1", 3.5), ("c2", 3.5)]);
    }
}

#[test]
fn mixed_signatures_never_coexist_on_one_channel() {
    let mut messenger = Messenger::new();
    messenger
        .add_listener("event", &Listener1::new(|_: u8| {}))
        .expect("register");

    let attempts = [
        messenger.add_listener("event", &Listener0::new(|| {})),
        messenger.add_listener("event", &Listener1::new(|_: u16| {})),
        messenger.add_listener("event", &Listener1::new(|value: u8| value)),
    ];

    for attempt in attempts {
        assert!(matches!(attempt, Err(MessengerError::SignatureConflict { .. })));
    }
    messenger
        .add_listener("event", &Listener1::new(|_: u8| {}))
        .expect("matching signature is accepted");
    assert_eq!(messenger.registry().listener_count("event"), 2);
}

#[test]
fn channel_can_be_reestablished_with_a_new_signature_once_empty() {
    let mut messenger = Messenger::new();
    let first = Listener1::new(|_: f32| {});
    messenger.add_listener("slot", &first).expect("register");
    messenger.remove_listener("slot", &first).expect("unregister");

    messenger
        .add_listener("slot", &Listener0::new(|| "fresh".to_string()))
        .expect("empty channel forgets its old signature");

    assert_eq!(
        messenger.registry().signature("slot"),
        Some(&Signature::of::<(), String>())
    );
}

#[test]
fn lenient_broadcast_on_unknown_channel_invokes_nothing() {
    let mut messenger = Messenger::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    messenger
        .add_listener(
            "known",
            &Listener0::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .expect("register");

    messenger
        .broadcast_with_mode("unknown", (), MessengerMode::DontRequireListener)
        .expect("no-op");

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
