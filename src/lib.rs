//! keystate - polled keyboard state for game loops
//!
//! Tracks which keys are held down so a frame loop can ask "is this key
//! down?" instead of reacting to individual press/release events. Keys are
//! named through a fixed key-code table.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keycodes;
pub mod tracing;
pub mod tracker;
pub mod winit_adapter;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use keycodes::{KeyCode, KeyCodeRegistry};
pub use tracker::{EventHub, EventSource, KeyQuery, KeyTracker, Signal, TrackerError};
