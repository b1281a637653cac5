//! Held-key tracking and combination matching

use crate::KeyCombination;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use input_types::{InputEvent, Key};

/// Set of keys currently held down
///
/// Fed from document-level key events regardless of which element has focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: BTreeSet<Key>,
}

impl HeldKeys {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a keydown. `meta_active` adds the synthetic `Meta` marker,
    /// since the platform may not report the Meta keydown itself.
    pub fn press(&mut self, key: Key, meta_active: bool) {
        self.keys.insert(key);
        if meta_active {
            self.keys.insert(Key::Meta);
        }
    }

    /// Records a keyup
    pub fn release(&mut self, key: &Key) {
        self.keys.remove(key);
        if *key == Key::Meta {
            self.keys.remove(&Key::Meta);
        }
    }

    /// Forgets every held key
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Returns true if `key` is held
    pub fn contains(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    /// Returns true if every key of the combination is held
    ///
    /// `Delete` is also satisfied by `Backspace`, which is what the same
    /// physical key reports on some platforms.
    pub fn satisfies(&self, combination: &KeyCombination) -> bool {
        combination.keys().iter().all(|key| {
            self.keys.contains(key) || (*key == Key::Delete && self.keys.contains(&Key::Backspace))
        })
    }

    /// Number of held keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if nothing is held
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A combination bound to an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding<A> {
    pub combination: KeyCombination,
    pub action: A,
}

/// Tracks held keys and reports which bound actions fire on each keydown
///
/// An action fires once per qualifying keydown event, auto-repeat included;
/// holding the keys without new keydowns never fires again.
#[derive(Debug, Clone)]
pub struct ShortcutMatcher<A> {
    held: HeldKeys,
    bindings: Vec<ShortcutBinding<A>>,
}

impl<A: Clone> ShortcutMatcher<A> {
    /// Creates a matcher with no bindings
    pub fn new() -> Self {
        Self {
            held: HeldKeys::new(),
            bindings: Vec::new(),
        }
    }

    /// Binds a combination to an action, replacing any existing binding for it
    pub fn bind(&mut self, combination: KeyCombination, action: A) {
        if let Some(existing) = self
            .bindings
            .iter_mut()
            .find(|b| b.combination == combination)
        {
            existing.action = action;
            return;
        }
        self.bindings.push(ShortcutBinding {
            combination,
            action,
        });
    }

    /// Removes a binding, returning its action
    pub fn unbind(&mut self, combination: &KeyCombination) -> Option<A> {
        let index = self
            .bindings
            .iter()
            .position(|b| &b.combination == combination)?;
        Some(self.bindings.remove(index).action)
    }

    /// Action bound to exactly this combination
    pub fn action_for(&self, combination: &KeyCombination) -> Option<&A> {
        self.bindings
            .iter()
            .find(|b| &b.combination == combination)
            .map(|b| &b.action)
    }

    /// Number of bindings
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Handles a keydown (initial or auto-repeat), returning fired actions
    pub fn on_key_down(&mut self, key: Key, meta_active: bool) -> Vec<A> {
        self.held.press(key, meta_active);
        self.bindings
            .iter()
            .filter(|b| self.held.satisfies(&b.combination))
            .map(|b| b.action.clone())
            .collect()
    }

    /// Handles a keyup
    pub fn on_key_up(&mut self, key: &Key) {
        self.held.release(key);
    }

    /// Handles window blur; keys released while unfocused are never reported
    pub fn on_focus_lost(&mut self) {
        self.held.clear();
    }

    /// Returns true if every key of `combination` is currently held
    pub fn matches(&self, combination: &KeyCombination) -> bool {
        self.held.satisfies(combination)
    }

    /// Routes one input event, returning fired actions
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<A> {
        match event {
            InputEvent::Key(key_event) if key_event.is_down() => {
                self.on_key_down(key_event.key.clone(), key_event.modifiers.is_meta())
            }
            InputEvent::Key(key_event) => {
                self.on_key_up(&key_event.key);
                Vec::new()
            }
            InputEvent::FocusLost => {
                self.on_focus_lost();
                Vec::new()
            }
        }
    }

    /// Currently held keys
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }
}

impl<A: Clone> Default for ShortcutMatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}
