//! Polled key state
//!
//! A [`KeyTracker`] listens to press/release signals from an [`EventSource`]
//! and answers "is this key down right now?" from inside a game loop.
//!
//! # Architecture
//!
//! ```text
//! host event → EventHub::dispatch → tracker listeners → down-set ← KeyTracker::is_pressed
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let hub = EventHub::new();
//! let tracker = KeyTracker::new(hub.clone(), false);
//!
//! hub.key_down(37);
//! assert!(tracker.is_pressed("arrowLeft")?);
//! assert!(tracker.is_pressed(37u32)?);
//! ```

mod event;
mod hub;
mod query;
#[allow(clippy::module_inception)]
mod tracker;

pub use event::{EventSource, KeyEvent, KeyHandler, ListenerId, Signal};
pub use hub::{DispatchOutcome, EventHub};
pub use query::{KeyQuery, TrackerError};
pub use tracker::KeyTracker;
