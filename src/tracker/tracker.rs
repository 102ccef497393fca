//! KeyTracker: live key-down state behind an injected event source

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use super::event::{EventSource, KeyEvent, ListenerId, Signal};
use super::hub::EventHub;
use super::query::{KeyQuery, TrackerError};
use crate::config::TrackerConfig;
use crate::keycodes::{KeyCode, KeyCodeRegistry};

type DownSet = Rc<RefCell<HashSet<KeyCode>>>;

/// Tracks which keys are currently held down
///
/// Subscribes a key-down and a key-up listener on construction. A code is
/// in the down-set iff the last signal seen for it was key-down.
pub struct KeyTracker<S: EventSource = EventHub> {
    source: S,
    down: DownSet,
    suppress_default_behavior: bool,
    /// Cleared on dispose so a dispatch already in flight stops updating
    active: Rc<Cell<bool>>,
    /// (key-down, key-up) listeners, `None` once disposed
    listeners: Option<(ListenerId, ListenerId)>,
}

impl<S: EventSource> KeyTracker<S> {
    /// Create a tracker and subscribe it to `source`
    ///
    /// With `suppress_default_behavior` set, every key event the tracker sees
    /// is marked so the host skips its own handling.
    pub fn new(source: S, suppress_default_behavior: bool) -> Self {
        let down: DownSet = Rc::default();
        let active = Rc::new(Cell::new(true));

        let set = Rc::clone(&down);
        let live = Rc::clone(&active);
        let on_down = source.subscribe(
            Signal::KeyDown,
            Box::new(move |event: &mut KeyEvent| {
                if !live.get() {
                    return;
                }
                if suppress_default_behavior {
                    event.prevent_default();
                }
                if set.borrow_mut().insert(event.key_code) {
                    tracing::debug!(key_code = event.key_code, "key down");
                }
            }),
        );

        let set = Rc::clone(&down);
        let live = Rc::clone(&active);
        let on_up = source.subscribe(
            Signal::KeyUp,
            Box::new(move |event: &mut KeyEvent| {
                if !live.get() {
                    return;
                }
                if suppress_default_behavior {
                    event.prevent_default();
                }
                if set.borrow_mut().remove(&event.key_code) {
                    tracing::debug!(key_code = event.key_code, "key up");
                }
            }),
        );

        tracing::debug!(suppress_default_behavior, "key tracker subscribed");

        Self {
            source,
            down,
            suppress_default_behavior,
            active,
            listeners: Some((on_down, on_up)),
        }
    }

    /// Create a tracker using the options in `config`
    pub fn with_config(source: S, config: &TrackerConfig) -> Self {
        Self::new(source, config.suppress_default_behavior)
    }

    /// Whether `key` is currently held down
    ///
    /// Accepts a registry name (`"arrowLeft"`) or a raw code (`37`). Names
    /// missing from the registry are an error, never `false`.
    pub fn is_pressed(&self, key: impl Into<KeyQuery>) -> Result<bool, TrackerError> {
        let code = key.into().resolve(KeyCodeRegistry::global())?;
        Ok(self.is_pressed_by_code(code))
    }

    pub fn is_pressed_by_name(&self, name: &str) -> Result<bool, TrackerError> {
        let code = KeyCodeRegistry::global()
            .lookup(name)
            .ok_or_else(|| TrackerError::InvalidKeyIdentifier(name.to_string()))?;
        Ok(self.is_pressed_by_code(code))
    }

    #[inline]
    pub fn is_pressed_by_code(&self, code: KeyCode) -> bool {
        self.down.borrow().contains(&code)
    }

    /// Codes currently held down, sorted ascending
    pub fn pressed_codes(&self) -> Vec<KeyCode> {
        let mut codes: Vec<KeyCode> = self.down.borrow().iter().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn pressed_count(&self) -> usize {
        self.down.borrow().len()
    }

    pub fn any_pressed(&self) -> bool {
        !self.down.borrow().is_empty()
    }

    /// Forget every held key
    ///
    /// For when release events can no longer arrive, e.g. the window lost
    /// focus while keys were down.
    pub fn reset(&mut self) {
        let mut down = self.down.borrow_mut();
        if !down.is_empty() {
            tracing::debug!(cleared = down.len(), "key tracker reset");
            down.clear();
        }
    }

    pub fn suppresses_default(&self) -> bool {
        self.suppress_default_behavior
    }

    /// Unsubscribe both listeners from the event source
    ///
    /// Later signals no longer change the down-set, including the rest of a
    /// dispatch that is running when this is called. Queries keep answering
    /// from the last observed state. Calling this again does nothing.
    pub fn dispose(&mut self) {
        let Some((on_down, on_up)) = self.listeners.take() else {
            return;
        };
        self.active.set(false);

        let removed_down = self.source.unsubscribe(Signal::KeyDown, on_down);
        let removed_up = self.source.unsubscribe(Signal::KeyUp, on_up);
        if !(removed_down && removed_up) {
            tracing::warn!("key tracker listener was already removed from its event source");
        }
        tracing::debug!("key tracker disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.listeners.is_none()
    }

    /// The event source this tracker subscribed to
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: EventSource> Drop for KeyTracker<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<S: EventSource> std::fmt::Debug for KeyTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyTracker")
            .field("pressed", &self.pressed_codes())
            .field("suppress_default_behavior", &self.suppress_default_behavior)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
