//! In-process event source
//!
//! `EventHub` stands in for the host's document-level key listeners. The
//! winit adapter feeds real window events into it; tests drive it directly.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::{EventSource, KeyEvent, KeyHandler, ListenerId, Signal};
use crate::keycodes::KeyCode;

type SharedHandler = Rc<RefCell<KeyHandler>>;

struct Listener {
    id: ListenerId,
    signal: Signal,
    handler: SharedHandler,
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// What happened when an event was dispatched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Some listener asked the host to skip its default handling
    pub default_prevented: bool,
    /// Number of listeners that saw the event
    pub delivered: usize,
}

/// Cloneable handle to a shared listener list
///
/// Clones refer to the same listeners. Not `Send`: all dispatching happens on
/// the thread that owns the event loop.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `signal` for `key_code` to every listener subscribed to it,
    /// in subscription order
    ///
    /// Listeners added or removed by a handler take effect from the next
    /// dispatch on. A handler may dispatch again from inside its callback;
    /// the nested dispatch skips any listener that is still running.
    pub fn dispatch(&self, signal: Signal, key_code: KeyCode) -> DispatchOutcome {
        let handlers: Vec<SharedHandler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.signal == signal)
            .map(|l| Rc::clone(&l.handler))
            .collect();

        let mut event = KeyEvent::new(key_code);
        let mut delivered = 0;
        for handler in &handlers {
            let Ok(mut handler) = handler.try_borrow_mut() else {
                tracing::warn!(
                    signal = signal.name(),
                    key_code,
                    "skipping listener already running in an outer dispatch"
                );
                continue;
            };
            (*handler)(&mut event);
            delivered += 1;
        }

        tracing::trace!(
            signal = signal.name(),
            key_code,
            delivered,
            default_prevented = event.default_prevented(),
            "dispatched key event"
        );

        DispatchOutcome {
            default_prevented: event.default_prevented(),
            delivered,
        }
    }

    #[inline]
    pub fn key_down(&self, key_code: KeyCode) -> DispatchOutcome {
        self.dispatch(Signal::KeyDown, key_code)
    }

    #[inline]
    pub fn key_up(&self, key_code: KeyCode) -> DispatchOutcome {
        self.dispatch(Signal::KeyUp, key_code)
    }

    /// Number of listeners currently subscribed to `signal`
    pub fn listener_count(&self, signal: Signal) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.signal == signal)
            .count()
    }
}

impl EventSource for EventHub {
    fn subscribe(&self, signal: Signal, handler: KeyHandler) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId::new(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            signal,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    fn unsubscribe(&self, signal: Signal, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner
            .listeners
            .retain(|l| !(l.id == id && l.signal == signal));
        inner.listeners.len() != before
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("key_down_listeners", &self.listener_count(Signal::KeyDown))
            .field("key_up_listeners", &self.listener_count(Signal::KeyUp))
            .finish()
    }
}
