#![no_std]

//! # Shortcut Service
//!
//! Global keyboard shortcuts for the workbench.
//!
//! ## Philosophy
//!
//! - **Held-key sets, not single events**: A shortcut fires when every key of
//!   its combination is currently down, in any order
//! - **Superset matching**: Extra held keys never block a match
//! - **Platform aliases are explicit**: `Delete` is also satisfied by `Backspace`
//! - **No domain knowledge**: The matcher returns actions; the caller applies them
//!
//! ## Example
//!
//! ```ignore
//! use services_shortcuts::{default_matcher, Action};
//!
//! let mut matcher = default_matcher();
//! matcher.on_key_down(Key::Meta, true);
//! let fired = matcher.on_key_down(Key::Backspace, true);
//! assert_eq!(fired, vec![Action::ToggleAssistantPanel]);
//! ```

extern crate alloc;

pub mod matcher;
pub mod shortcut;

pub use matcher::{HeldKeys, ShortcutBinding, ShortcutMatcher};
pub use shortcut::KeyboardShortcut;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use input_types::Key;
use serde::{Deserialize, Serialize};

/// Combination bound to the assistant panel toggle unless overridden
pub const TOGGLE_ASSISTANT_COMBINATION: &str = "Meta+Delete";

/// Action that can be triggered by a shortcut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Show or hide the assistant panel
    ToggleAssistantPanel,
    /// Custom action with name
    Custom(String),
}

impl Action {
    /// Get the action name
    pub fn name(&self) -> &str {
        match self {
            Action::ToggleAssistantPanel => "toggle_assistant_panel",
            Action::Custom(name) => name,
        }
    }

    /// Parse action from name
    pub fn from_name(name: &str) -> Self {
        match name {
            "toggle_assistant_panel" => Action::ToggleAssistantPanel,
            _ => Action::Custom(name.to_string()),
        }
    }
}

/// Errors from parsing a key combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    /// The combination has no keys at all
    Empty,
    /// A `+`-separated segment was blank (e.g. `"Meta+"`)
    EmptySegment(usize),
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseKeyError::Empty => write!(f, "Key combination is empty"),
            ParseKeyError::EmptySegment(index) => {
                write!(f, "Key combination has a blank segment at position {}", index)
            }
        }
    }
}

/// Keys that must all be held for a shortcut to fire
///
/// Order is kept for display only; matching ignores it. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Key>", into = "Vec<Key>")]
pub struct KeyCombination {
    keys: Vec<Key>,
}

impl KeyCombination {
    /// Creates a combination, dropping duplicate keys
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Result<Self, ParseKeyError> {
        let mut unique: Vec<Key> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        if unique.is_empty() {
            return Err(ParseKeyError::Empty);
        }
        Ok(Self { keys: unique })
    }

    /// Parses `+`-separated DOM key names, e.g. `"Meta+Delete"`
    pub fn parse(spec: &str) -> Result<Self, ParseKeyError> {
        if spec.trim().is_empty() {
            return Err(ParseKeyError::Empty);
        }
        let mut keys = Vec::new();
        for (index, segment) in spec.split('+').enumerate() {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(ParseKeyError::EmptySegment(index));
            }
            keys.push(Key::from_dom_name(segment));
        }
        Self::new(keys)
    }

    /// The keys of this combination
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// `Meta+Delete`, the built-in assistant panel toggle
    pub fn toggle_assistant_default() -> Self {
        Self {
            keys: vec![Key::Meta, Key::Delete],
        }
    }
}

impl TryFrom<Vec<Key>> for KeyCombination {
    type Error = ParseKeyError;

    fn try_from(keys: Vec<Key>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<KeyCombination> for Vec<Key> {
    fn from(combination: KeyCombination) -> Self {
        combination.keys
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.keys.iter().map(|k| k.to_string()).collect();
        write!(f, "{}", parts.join("+"))
    }
}

/// Matcher with the workbench's built-in bindings
pub fn default_matcher() -> ShortcutMatcher<Action> {
    let mut matcher = ShortcutMatcher::new();
    matcher.bind(
        KeyCombination::toggle_assistant_default(),
        Action::ToggleAssistantPanel,
    );
    matcher
}
