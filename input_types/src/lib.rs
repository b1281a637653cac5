#![no_std]

//! # Input Types
//!
//! This crate defines the input event types the workbench consumes.
//!
//! ## Philosophy
//!
//! - **Events, not callbacks**: Input is structured events, not DOM listener closures
//! - **Logical keys**: Keys are identified by their `KeyboardEvent.key` name, not scan codes
//! - **Window focus is input too**: Losing focus is an event, so held-key trackers can reset
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes
//! - Text composition / IME handling
//! - Pointer or touch input

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Input event
///
/// Everything the document-level listener can observe that matters for
/// shortcut tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// The window lost focus (blur). Keys released elsewhere are never reported.
    FocusLost,
}

impl InputEvent {
    /// Creates a key event
    pub fn key(event: KeyEvent) -> Self {
        Self::Key(event)
    }

    /// Returns true if this is a key event
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns the key event if this is a key event
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(event) => Some(event),
            Self::FocusLost => None,
        }
    }
}

/// Keyboard event
///
/// Represents a single keyboard state change (key press, release, or repeat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that changed state
    pub key: Key,
    /// Modifier keys reported active by the platform
    pub modifiers: Modifiers,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(key: Key, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            key,
            modifiers,
            state,
        }
    }

    /// Creates a key pressed event
    pub fn pressed(key: Key, modifiers: Modifiers) -> Self {
        Self::new(key, modifiers, KeyState::Pressed)
    }

    /// Creates a key released event
    pub fn released(key: Key, modifiers: Modifiers) -> Self {
        Self::new(key, modifiers, KeyState::Released)
    }

    /// Creates a key repeat event
    pub fn repeat(key: Key, modifiers: Modifiers) -> Self {
        Self::new(key, modifiers, KeyState::Repeat)
    }

    /// Returns true for events delivered as `keydown` (initial press or auto-repeat)
    pub fn is_down(&self) -> bool {
        matches!(self.state, KeyState::Pressed | KeyState::Repeat)
    }

    /// Returns true if this is a release event
    pub fn is_released(&self) -> bool {
        self.state == KeyState::Released
    }

    /// Returns true if this is a repeat event
    pub fn is_repeat(&self) -> bool {
        self.state == KeyState::Repeat
    }
}

/// Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Logical key identifier
///
/// Mirrors the DOM `KeyboardEvent.key` vocabulary. Letters are folded to
/// lowercase so `Shift` does not change which key is held.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    // Modifiers
    Meta,
    Control,
    Alt,
    Shift,

    // Editing
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    Space,

    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    /// Function key F1..F24
    Function(u8),
    /// Any single printable character
    Character(char),
    /// Any other named key, kept verbatim
    Other(String),
}

impl Key {
    /// Parses a DOM key name (`"Meta"`, `"Backspace"`, `"a"`, `"F5"`, ...)
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "Meta" => Key::Meta,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "Shift" => Key::Shift,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            "Tab" => Key::Tab,
            " " | "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c.to_ascii_lowercase()),
                    _ => match parse_function_key(name) {
                        Some(n) => Key::Function(n),
                        None => Key::Other(name.to_string()),
                    },
                }
            }
        }
    }

    /// Returns true for the four modifier keys
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Meta | Key::Control | Key::Alt | Key::Shift)
    }
}

fn parse_function_key(name: &str) -> Option<u8> {
    let digits = name.strip_prefix('F')?;
    let n: u8 = digits.parse().ok()?;
    (1..=24).contains(&n).then_some(n)
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_dom_name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Function(n) => write!(f, "F{}", n),
            Key::Character(c) => write!(f, "{}", c),
            Key::Space => write!(f, "Space"),
            Key::Other(name) => write!(f, "{}", name),
            named => write!(f, "{:?}", named),
        }
    }
}

/// Modifier keys
///
/// Bitflags representing modifier key states as the platform reports them
/// on each event (`metaKey`, `ctrlKey`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Command key
    pub const META: Self = Self { bits: 1 << 3 };

    /// Creates a new modifier set with no modifiers
    pub fn none() -> Self {
        Self::NONE
    }

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks if Meta is pressed
    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true if no modifiers are pressed
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.contains(Self::CTRL) {
            parts.push("Ctrl");
        }
        if self.contains(Self::ALT) {
            parts.push("Alt");
        }
        if self.contains(Self::SHIFT) {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}
