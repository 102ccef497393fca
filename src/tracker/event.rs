//! Key signals and the event-source seam the tracker subscribes through

use std::fmt;

use crate::keycodes::KeyCode;

/// The two press/release notifications a host delivers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    KeyDown,
    KeyUp,
}

impl Signal {
    /// Host-side event name
    pub const fn name(self) -> &'static str {
        match self {
            Signal::KeyDown => "keydown",
            Signal::KeyUp => "keyup",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single press or release, as seen by a listener
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    default_prevented: bool,
}

impl KeyEvent {
    pub const fn new(key_code: KeyCode) -> Self {
        Self {
            key_code,
            default_prevented: false,
        }
    }

    /// Ask the host to skip its own handling of this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Identifies one subscription on an event source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Callback invoked for every event of the signal it was subscribed to
pub type KeyHandler = Box<dyn FnMut(&mut KeyEvent)>;

/// Anything that can deliver key signals to subscribers
///
/// Implementations are expected to be cheap handles (an `Rc` inside) so a
/// tracker can keep one around to unsubscribe later.
pub trait EventSource {
    /// Register `handler` for `signal`
    fn subscribe(&self, signal: Signal, handler: KeyHandler) -> ListenerId;

    /// Remove a listener. Returns false if it was not registered.
    fn unsubscribe(&self, signal: Signal, id: ListenerId) -> bool;
}
