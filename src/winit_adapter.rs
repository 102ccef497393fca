//! Adapter to feed winit keyboard events into an `EventHub`

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::keycodes::KeyCode;
use crate::tracker::{DispatchOutcome, EventHub, Signal};

/// Map a physical winit key onto the key-code table
///
/// Left and right variants of a modifier share one code, so releasing
/// either side clears it: with both Shift keys held, letting go of Right
/// Shift makes `is_pressed("shift")` false. Returns None for keys the table
/// has no code for.
pub fn key_code_from_winit(physical_key: PhysicalKey) -> Option<KeyCode> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let key_code = match code {
        WinitKeyCode::Backspace => 8,
        WinitKeyCode::Tab => 9,
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => 13,
        WinitKeyCode::ShiftLeft | WinitKeyCode::ShiftRight => 16,
        WinitKeyCode::ControlLeft | WinitKeyCode::ControlRight => 17,
        WinitKeyCode::AltLeft | WinitKeyCode::AltRight => 18,
        WinitKeyCode::Pause => 19,
        WinitKeyCode::CapsLock => 20,
        WinitKeyCode::Escape => 27,
        WinitKeyCode::Space => 32,

        // Navigation
        WinitKeyCode::PageUp => 33,
        WinitKeyCode::PageDown => 34,
        WinitKeyCode::End => 35,
        WinitKeyCode::Home => 36,
        WinitKeyCode::ArrowLeft => 37,
        WinitKeyCode::ArrowUp => 38,
        WinitKeyCode::ArrowRight => 39,
        WinitKeyCode::ArrowDown => 40,
        WinitKeyCode::PrintScreen => 44,
        WinitKeyCode::Insert => 45,
        WinitKeyCode::Delete => 46,

        // Digit row
        WinitKeyCode::Digit0 => 48,
        WinitKeyCode::Digit1 => 49,
        WinitKeyCode::Digit2 => 50,
        WinitKeyCode::Digit3 => 51,
        WinitKeyCode::Digit4 => 52,
        WinitKeyCode::Digit5 => 53,
        WinitKeyCode::Digit6 => 54,
        WinitKeyCode::Digit7 => 55,
        WinitKeyCode::Digit8 => 56,
        WinitKeyCode::Digit9 => 57,

        // Letters
        WinitKeyCode::KeyA => 65,
        WinitKeyCode::KeyB => 66,
        WinitKeyCode::KeyC => 67,
        WinitKeyCode::KeyD => 68,
        WinitKeyCode::KeyE => 69,
        WinitKeyCode::KeyF => 70,
        WinitKeyCode::KeyG => 71,
        WinitKeyCode::KeyH => 72,
        WinitKeyCode::KeyI => 73,
        WinitKeyCode::KeyJ => 74,
        WinitKeyCode::KeyK => 75,
        WinitKeyCode::KeyL => 76,
        WinitKeyCode::KeyM => 77,
        WinitKeyCode::KeyN => 78,
        WinitKeyCode::KeyO => 79,
        WinitKeyCode::KeyP => 80,
        WinitKeyCode::KeyQ => 81,
        WinitKeyCode::KeyR => 82,
        WinitKeyCode::KeyS => 83,
        WinitKeyCode::KeyT => 84,
        WinitKeyCode::KeyU => 85,
        WinitKeyCode::KeyV => 86,
        WinitKeyCode::KeyW => 87,
        WinitKeyCode::KeyX => 88,
        WinitKeyCode::KeyY => 89,
        WinitKeyCode::KeyZ => 90,

        WinitKeyCode::SuperLeft => 91,
        WinitKeyCode::SuperRight => 92,
        WinitKeyCode::ContextMenu => 93,

        // Numpad (physical keys)
        WinitKeyCode::Numpad0 => 96,
        WinitKeyCode::Numpad1 => 97,
        WinitKeyCode::Numpad2 => 98,
        WinitKeyCode::Numpad3 => 99,
        WinitKeyCode::Numpad4 => 100,
        WinitKeyCode::Numpad5 => 101,
        WinitKeyCode::Numpad6 => 102,
        WinitKeyCode::Numpad7 => 103,
        WinitKeyCode::Numpad8 => 104,
        WinitKeyCode::Numpad9 => 105,
        WinitKeyCode::NumpadMultiply => 106,
        WinitKeyCode::NumpadAdd => 107,
        WinitKeyCode::NumpadSubtract => 109,
        WinitKeyCode::NumpadDecimal => 110,
        WinitKeyCode::NumpadDivide => 111,

        // Function keys
        WinitKeyCode::F1 => 112,
        WinitKeyCode::F2 => 113,
        WinitKeyCode::F3 => 114,
        WinitKeyCode::F4 => 115,
        WinitKeyCode::F5 => 116,
        WinitKeyCode::F6 => 117,
        WinitKeyCode::F7 => 118,
        WinitKeyCode::F8 => 119,
        WinitKeyCode::F9 => 120,
        WinitKeyCode::F10 => 121,
        WinitKeyCode::F11 => 122,
        WinitKeyCode::F12 => 123,

        WinitKeyCode::NumLock => 144,
        WinitKeyCode::ScrollLock => 145,

        // Punctuation
        WinitKeyCode::Semicolon => 186,
        WinitKeyCode::Equal => 187,
        WinitKeyCode::Comma => 188,
        WinitKeyCode::Minus => 189,
        WinitKeyCode::Period => 190,
        WinitKeyCode::Slash => 191,
        WinitKeyCode::Backquote => 192,
        WinitKeyCode::BracketLeft => 219,
        WinitKeyCode::Backslash => 220,
        WinitKeyCode::BracketRight => 221,
        WinitKeyCode::Quote => 222,

        _ => return None,
    };

    Some(key_code)
}

#[inline]
pub fn signal_from_state(state: ElementState) -> Signal {
    match state {
        ElementState::Pressed => Signal::KeyDown,
        ElementState::Released => Signal::KeyUp,
    }
}

/// Dispatch one physical key transition to `hub`
///
/// Returns None without dispatching if the key has no code.
pub fn dispatch_winit_key(
    hub: &EventHub,
    physical_key: PhysicalKey,
    state: ElementState,
) -> Option<DispatchOutcome> {
    let Some(key_code) = key_code_from_winit(physical_key) else {
        tracing::trace!(?physical_key, "ignoring key without a key code");
        return None;
    };
    Some(hub.dispatch(signal_from_state(state), key_code))
}

/// Dispatch a window event to `hub` if it is keyboard input
pub fn dispatch_window_event(hub: &EventHub, event: &WindowEvent) -> Option<DispatchOutcome> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            dispatch_winit_key(hub, event.physical_key, event.state)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::KeyCodeRegistry;
    use crate::tracker::KeyTracker;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::KeyA)), Some(65));
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::KeyZ)), Some(90));
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::Digit0)), Some(48));
    }

    #[test]
    fn test_modifier_sides_share_code() {
        let left = key_code_from_winit(PhysicalKey::Code(WinitKeyCode::ShiftLeft));
        let right = key_code_from_winit(PhysicalKey::Code(WinitKeyCode::ShiftRight));
        assert_eq!(left, Some(16));
        assert_eq!(left, right);
    }

    #[test]
    fn test_releasing_one_modifier_side_clears_shared_code() {
        let hub = EventHub::new();
        let tracker = KeyTracker::new(hub.clone(), false);
        let press = |key, state| dispatch_winit_key(&hub, PhysicalKey::Code(key), state);

        press(WinitKeyCode::ShiftLeft, ElementState::Pressed);
        press(WinitKeyCode::ShiftRight, ElementState::Pressed);
        assert_eq!(tracker.is_pressed("shift"), Ok(true));

        // Left Shift is still physically held
        press(WinitKeyCode::ShiftRight, ElementState::Released);
        assert_eq!(tracker.is_pressed("shift"), Ok(false));
    }

    #[test]
    fn test_numpad_keys_are_distinct() {
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::Numpad0)), Some(96));
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::Numpad5)), Some(101));
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::Numpad9)), Some(105));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_code_from_winit(PhysicalKey::Code(WinitKeyCode::F24)), None);
        assert_eq!(
            key_code_from_winit(PhysicalKey::Unidentified(
                winit::keyboard::NativeKeyCode::Unidentified
            )),
            None
        );
    }

    #[test]
    fn test_mapped_codes_are_in_registry() {
        let registry = KeyCodeRegistry::global();
        let keys = [
            WinitKeyCode::ArrowLeft,
            WinitKeyCode::Escape,
            WinitKeyCode::SuperRight,
            WinitKeyCode::NumpadDecimal,
            WinitKeyCode::Quote,
            WinitKeyCode::F12,
        ];
        for key in keys {
            let code = key_code_from_winit(PhysicalKey::Code(key)).expect("should map");
            assert!(registry.name_of(code).is_some(), "{:?} → {} not named", key, code);
        }
    }

    #[test]
    fn test_dispatch_reaches_tracker() {
        let hub = EventHub::new();
        let tracker = KeyTracker::new(hub.clone(), false);

        let outcome = dispatch_winit_key(
            &hub,
            PhysicalKey::Code(WinitKeyCode::ArrowLeft),
            ElementState::Pressed,
        )
        .expect("should dispatch");
        assert!(!outcome.default_prevented);
        assert_eq!(tracker.is_pressed("arrowLeft"), Ok(true));

        dispatch_winit_key(
            &hub,
            PhysicalKey::Code(WinitKeyCode::ArrowLeft),
            ElementState::Released,
        );
        assert_eq!(tracker.is_pressed("arrowLeft"), Ok(false));
    }

    #[test]
    fn test_dispatch_unmapped_key_is_skipped() {
        let hub = EventHub::new();
        let _tracker = KeyTracker::new(hub.clone(), true);
        assert!(dispatch_winit_key(
            &hub,
            PhysicalKey::Code(WinitKeyCode::F20),
            ElementState::Pressed
        )
        .is_none());
    }
}
