//! Named keyboard key codes
//!
//! A fixed table mapping human-readable key names to the integer codes the
//! host reports in its press/release events:
//!
//! ```text
//! "arrowLeft" → 37    "a" → 65    "numpad5" → 101    "f1" → 112
//! ```

mod registry;
mod table;

pub use registry::{lookup, KeyCode, KeyCodeRegistry};
