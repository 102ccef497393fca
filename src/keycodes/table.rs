//! The named key-code table
//!
//! Codes follow the legacy DOM `KeyboardEvent.keyCode` numbering.
//! Multi-word names are camelCase, digits are bare characters.

/// Every (name, code) pair known to the registry, in table order
pub(crate) const KEY_CODES: &[(&str, u32)] = &[
    ("backspace", 8),
    ("tab", 9),
    ("enter", 13),
    ("shift", 16),
    ("ctrl", 17),
    ("alt", 18),
    ("pauseBreak", 19),
    ("capsLock", 20),
    ("esc", 27),
    ("space", 32),
    ("pageUp", 33),
    ("pageDown", 34),
    ("end", 35),
    ("home", 36),
    ("arrowLeft", 37),
    ("arrowUp", 38),
    ("arrowRight", 39),
    ("arrowDown", 40),
    ("printScreen", 44),
    ("insert", 45),
    ("delete", 46),
    // Digit row
    ("0", 48),
    ("1", 49),
    ("2", 50),
    ("3", 51),
    ("4", 52),
    ("5", 53),
    ("6", 54),
    ("7", 55),
    ("8", 56),
    ("9", 57),
    // Letters
    ("a", 65),
    ("b", 66),
    ("c", 67),
    ("d", 68),
    ("e", 69),
    ("f", 70),
    ("g", 71),
    ("h", 72),
    ("i", 73),
    ("j", 74),
    ("k", 75),
    ("l", 76),
    ("m", 77),
    ("n", 78),
    ("o", 79),
    ("p", 80),
    ("q", 81),
    ("r", 82),
    ("s", 83),
    ("t", 84),
    ("u", 85),
    ("v", 86),
    ("w", 87),
    ("x", 88),
    ("y", 89),
    ("z", 90),
    ("windowsLeft", 91),
    ("windowsRight", 92),
    ("select", 93),
    // Numeric keypad
    ("numpad0", 96),
    ("numpad1", 97),
    ("numpad2", 98),
    ("numpad3", 99),
    ("numpad4", 100),
    ("numpad5", 101),
    ("numpad6", 102),
    ("numpad7", 103),
    ("numpad8", 104),
    ("numpad9", 105),
    ("multiply", 106),
    ("add", 107),
    ("subtract", 109),
    ("decimalPoint", 110),
    ("divide", 111),
    // Function keys
    ("f1", 112),
    ("f2", 113),
    ("f3", 114),
    ("f4", 115),
    ("f5", 116),
    ("f6", 117),
    ("f7", 118),
    ("f8", 119),
    ("f9", 120),
    ("f10", 121),
    ("f11", 122),
    ("f12", 123),
    ("numLock", 144),
    ("scrollLock", 145),
    // Punctuation
    ("semiColon", 186),
    ("equal", 187),
    ("comma", 188),
    ("dash", 189),
    ("period", 190),
    ("forwardSlash", 191),
    ("graveAccent", 192),
    ("openBracket", 219),
    ("backSlash", 220),
    ("closeBracket", 221),
    ("singleQuote", 222),
];
