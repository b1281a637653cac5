//! Single-callback shortcut

use crate::matcher::HeldKeys;
use crate::KeyCombination;
use alloc::boxed::Box;
use core::fmt;
use input_types::InputEvent;

/// One key combination wired straight to a callback
///
/// Convenience for hosts that register a handful of shortcuts and do not
/// need action values.
pub struct KeyboardShortcut {
    combination: KeyCombination,
    held: HeldKeys,
    callback: Box<dyn FnMut()>,
}

impl KeyboardShortcut {
    pub fn new(combination: KeyCombination, callback: impl FnMut() + 'static) -> Self {
        Self {
            combination,
            held: HeldKeys::new(),
            callback: Box::new(callback),
        }
    }

    pub fn combination(&self) -> &KeyCombination {
        &self.combination
    }

    /// Feeds one event; returns true if the callback ran
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key_event) if key_event.is_down() => {
                self.held
                    .press(key_event.key.clone(), key_event.modifiers.is_meta());
                if self.held.satisfies(&self.combination) {
                    (self.callback)();
                    return true;
                }
                false
            }
            InputEvent::Key(key_event) => {
                self.held.release(&key_event.key);
                false
            }
            InputEvent::FocusLost => {
                self.held.clear();
                false
            }
        }
    }
}

impl fmt::Debug for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardShortcut")
            .field("combination", &self.combination)
            .field("held", &self.held)
            .finish_non_exhaustive()
    }
}
