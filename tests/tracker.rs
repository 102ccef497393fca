//! End-to-end tracker tests through the public API

use std::cell::RefCell;

use keystate::tracker::{DispatchOutcome, KeyHandler, ListenerId};
use keystate::{EventHub, EventSource, KeyQuery, KeyTracker, Signal, TrackerError};

#[test]
fn test_game_loop_polling() {
    let hub = EventHub::new();
    let tracker = KeyTracker::new(hub.clone(), false);

    // Frame 1: nothing held
    assert_eq!(tracker.is_pressed("d"), Ok(false));

    // Player holds D, then taps W while D is still down
    hub.key_down(68);
    assert_eq!(tracker.is_pressed("d"), Ok(true));
    hub.key_down(87);
    hub.key_up(87);
    assert_eq!(tracker.is_pressed("w"), Ok(false));
    assert_eq!(tracker.is_pressed("d"), Ok(true));

    hub.key_up(68);
    assert!(!tracker.any_pressed());
}

#[test]
fn test_suppress_default_scenario() {
    let hub = EventHub::new();
    let tracker = KeyTracker::new(hub.clone(), true);

    let outcome = hub.key_down(65);
    assert_eq!(
        outcome,
        DispatchOutcome {
            default_prevented: true,
            delivered: 1
        }
    );
    assert_eq!(tracker.is_pressed("a"), Ok(true));
    assert_eq!(tracker.is_pressed(65u32), Ok(true));

    hub.key_up(65);
    assert_eq!(tracker.is_pressed("a"), Ok(false));
    assert_eq!(tracker.is_pressed(65u32), Ok(false));
}

#[test]
fn test_default_config_scenario() {
    let hub = EventHub::new();
    let tracker = KeyTracker::new(hub.clone(), false);

    let outcome = hub.key_down(37);
    assert!(!outcome.default_prevented);
    assert_eq!(tracker.is_pressed("arrowLeft"), Ok(true));
}

#[test]
fn test_invalid_identifier_is_distinguishable_from_released() {
    let hub = EventHub::new();
    let tracker = KeyTracker::new(hub, false);

    assert_eq!(tracker.is_pressed("arrowLeft"), Ok(false));
    let err = tracker.is_pressed("arowLeft").unwrap_err();
    assert_eq!(err, TrackerError::InvalidKeyIdentifier("arowLeft".into()));
    assert!(err.to_string().contains("arowLeft"));
}

#[test]
fn test_query_variants() {
    let hub = EventHub::new();
    let tracker = KeyTracker::new(hub.clone(), false);
    hub.key_down(13);

    assert_eq!(tracker.is_pressed(KeyQuery::ByName("enter".into())), Ok(true));
    assert_eq!(tracker.is_pressed(KeyQuery::ByCode(13)), Ok(true));
    assert_eq!(tracker.is_pressed(String::from("enter")), Ok(true));
}

#[test]
fn test_foreign_listener_coexists() {
    let hub = EventHub::new();
    let tracker = KeyTracker::new(hub.clone(), false);

    // Another part of the application cancels default handling for Tab only
    hub.subscribe(
        Signal::KeyDown,
        Box::new(|event| {
            if event.key_code == 9 {
                event.prevent_default();
            }
        }),
    );

    assert!(hub.key_down(9).default_prevented);
    assert!(!hub.key_down(27).default_prevented);
    assert_eq!(tracker.pressed_codes(), vec![9, 27]);
}

/// Event source that records subscriptions without delivering anything
#[derive(Default)]
struct RecordingSource {
    subscribed: RefCell<Vec<Signal>>,
    unsubscribed: RefCell<Vec<ListenerId>>,
}

impl EventSource for &RecordingSource {
    fn subscribe(&self, signal: Signal, _handler: KeyHandler) -> ListenerId {
        let mut subscribed = self.subscribed.borrow_mut();
        subscribed.push(signal);
        ListenerId::new(subscribed.len() as u64)
    }

    fn unsubscribe(&self, _signal: Signal, id: ListenerId) -> bool {
        self.unsubscribed.borrow_mut().push(id);
        true
    }
}

#[test]
fn test_custom_event_source() {
    let source = RecordingSource::default();
    {
        let tracker = KeyTracker::new(&source, false);
        assert!(!tracker.is_disposed());
        assert_eq!(
            *source.subscribed.borrow(),
            vec![Signal::KeyDown, Signal::KeyUp]
        );
    }
    assert_eq!(
        *source.unsubscribed.borrow(),
        vec![ListenerId::new(1), ListenerId::new(2)]
    );
}
