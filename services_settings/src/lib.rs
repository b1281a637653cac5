//! # Settings Registry Service
//!
//! A typed settings system for the workbench.
//!
//! ## Philosophy
//!
//! - **Typed settings**: All settings have explicit types, not stringly-typed
//! - **Layered**: Read-only defaults + host overrides
//! - **Validated once**: [`WorkbenchSettings`] is built from the registry up front,
//!   so services never see a malformed value
//! - **Testable**: All settings logic can be tested independently
//!
//! ## Example
//!
//! ```ignore
//! use services_settings::{create_default_registry, keys, SettingValue, WorkbenchSettings};
//!
//! let mut registry = create_default_registry();
//! registry.set_override(keys::ASSISTANT_REPLY_DELAY_MS, SettingValue::Integer(200))?;
//!
//! let settings = WorkbenchSettings::from_registry(&registry)?;
//! assert_eq!(settings.reply_delay_ms, 200);
//! ```

pub mod overrides;
pub mod workbench;

pub use overrides::{apply_overrides_json, export_overrides_json};
pub use workbench::WorkbenchSettings;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Setting key (path-like identifier)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SettingKey(String);

impl SettingKey {
    /// Creates a new setting key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if this key starts with the given prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SettingKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Setting value (strongly typed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    /// Integer value
    Integer(i64),
    /// String value
    String(String),
}

impl SettingValue {
    /// Name of the variant, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Integer(_) => "integer",
            SettingValue::String(_) => "string",
        }
    }

    /// Returns true if both values are the same variant
    pub fn same_type(&self, other: &SettingValue) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Tries to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Tries to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(v) => write!(f, "{}", v),
            SettingValue::String(v) => write!(f, "{}", v),
        }
    }
}

/// Errors from reading or overriding settings
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Unknown setting: {0}")]
    UnknownKey(SettingKey),

    #[error("Setting {key} expects {expected}, got {found}")]
    TypeMismatch {
        key: SettingKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: SettingKey, reason: String },

    #[error("Failed to parse overrides: {0}")]
    Parse(String),
}

/// Settings registry
///
/// Overrides may only target registered keys and must keep the default's type.
#[derive(Debug, Clone, Default)]
pub struct SettingsRegistry {
    /// Default settings (read-only)
    defaults: BTreeMap<SettingKey, SettingValue>,
    /// Host overrides
    overrides: BTreeMap<SettingKey, SettingValue>,
}

impl SettingsRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a default setting
    pub fn register_default(&mut self, key: impl Into<SettingKey>, value: SettingValue) {
        self.defaults.insert(key.into(), value);
    }

    /// Sets an override for a registered key
    pub fn set_override(
        &mut self,
        key: impl Into<SettingKey>,
        value: SettingValue,
    ) -> Result<(), SettingsError> {
        let key = key.into();
        let default = self
            .defaults
            .get(&key)
            .ok_or_else(|| SettingsError::UnknownKey(key.clone()))?;
        if !default.same_type(&value) {
            return Err(SettingsError::TypeMismatch {
                key,
                expected: default.type_name(),
                found: value.type_name(),
            });
        }
        self.overrides.insert(key, value);
        Ok(())
    }

    /// Removes an override
    pub fn remove_override(&mut self, key: &SettingKey) -> bool {
        self.overrides.remove(key).is_some()
    }

    /// Gets the effective setting value (override or default)
    pub fn get(&self, key: &SettingKey) -> Option<&SettingValue> {
        self.overrides.get(key).or_else(|| self.defaults.get(key))
    }

    /// Gets the default value for a setting
    pub fn get_default(&self, key: &SettingKey) -> Option<&SettingValue> {
        self.defaults.get(key)
    }

    /// Gets the override (if any) for a setting
    pub fn get_override(&self, key: &SettingKey) -> Option<&SettingValue> {
        self.overrides.get(key)
    }

    /// Returns all default setting keys
    pub fn list_defaults(&self) -> Vec<SettingKey> {
        self.defaults.keys().cloned().collect()
    }

    /// Returns all overridden keys
    pub fn list_overrides(&self) -> Vec<SettingKey> {
        self.overrides.keys().cloned().collect()
    }

    /// Returns all effective settings with a given prefix
    pub fn list_with_prefix(&self, prefix: &str) -> Vec<(SettingKey, SettingValue)> {
        self.defaults
            .keys()
            .filter(|key| key.starts_with(prefix))
            .filter_map(|key| self.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    /// Clears all overrides
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Exports overrides for persistence
    pub fn export_overrides(&self) -> BTreeMap<SettingKey, SettingValue> {
        self.overrides.clone()
    }
}

/// Common setting keys
pub mod keys {
    pub const STORAGE_PROJECTS_KEY: &str = "storage.projects_key";
    pub const ASSISTANT_REPLY_DELAY_MS: &str = "assistant.reply_delay_ms";
    pub const ASSISTANT_GREETING: &str = "assistant.greeting";
    pub const SHORTCUTS_TOGGLE_ASSISTANT: &str = "shortcuts.toggle_assistant";
    pub const EVENTS_HISTORY_LIMIT: &str = "events.history_limit";
}

/// Slot the projects blob is persisted under unless overridden
pub const DEFAULT_PROJECTS_KEY: &str = "workbench-projects";

/// Simulated assistant latency unless overridden
pub const DEFAULT_REPLY_DELAY_MS: i64 = 1500;

/// First message of every assistant conversation unless overridden
pub const DEFAULT_GREETING: &str =
    "I am your local LLM assistant. How can I help you with your project today?";

/// Number of queued store events kept before the oldest are dropped
pub const DEFAULT_EVENT_HISTORY_LIMIT: i64 = 256;

/// Creates a settings registry with default settings
pub fn create_default_registry() -> SettingsRegistry {
    let mut registry = SettingsRegistry::new();

    // Storage
    registry.register_default(
        keys::STORAGE_PROJECTS_KEY,
        SettingValue::String(DEFAULT_PROJECTS_KEY.to_string()),
    );

    // Assistant
    registry.register_default(
        keys::ASSISTANT_REPLY_DELAY_MS,
        SettingValue::Integer(DEFAULT_REPLY_DELAY_MS),
    );
    registry.register_default(
        keys::ASSISTANT_GREETING,
        SettingValue::String(DEFAULT_GREETING.to_string()),
    );

    // Shortcuts
    registry.register_default(
        keys::SHORTCUTS_TOGGLE_ASSISTANT,
        SettingValue::String(services_shortcuts::TOGGLE_ASSISTANT_COMBINATION.to_string()),
    );

    // Events
    registry.register_default(
        keys::EVENTS_HISTORY_LIMIT,
        SettingValue::Integer(DEFAULT_EVENT_HISTORY_LIMIT),
    );

    registry
}
