//! Typed settings view consumed by the workbench services

use crate::{
    keys, SettingKey, SettingValue, SettingsError, SettingsRegistry, DEFAULT_EVENT_HISTORY_LIMIT,
    DEFAULT_GREETING, DEFAULT_PROJECTS_KEY, DEFAULT_REPLY_DELAY_MS,
};
use services_shortcuts::KeyCombination;

/// Validated workbench configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbenchSettings {
    /// Storage slot holding the projects blob
    pub projects_key: String,
    /// Simulated assistant latency
    pub reply_delay_ms: u64,
    /// First assistant message of every session
    pub greeting: String,
    /// Combination that toggles the assistant panel
    pub toggle_assistant: KeyCombination,
    /// Queued store events kept before the oldest are dropped
    pub event_history_limit: usize,
}

impl WorkbenchSettings {
    /// Reads and validates every workbench setting
    pub fn from_registry(registry: &SettingsRegistry) -> Result<Self, SettingsError> {
        let projects_key = string_setting(registry, keys::STORAGE_PROJECTS_KEY)?;
        if projects_key.trim().is_empty() {
            return Err(invalid(keys::STORAGE_PROJECTS_KEY, "must not be blank"));
        }

        let reply_delay_ms = integer_setting(registry, keys::ASSISTANT_REPLY_DELAY_MS)?;
        let reply_delay_ms = u64::try_from(reply_delay_ms)
            .map_err(|_| invalid(keys::ASSISTANT_REPLY_DELAY_MS, "must not be negative"))?;

        let greeting = string_setting(registry, keys::ASSISTANT_GREETING)?;

        let combination = string_setting(registry, keys::SHORTCUTS_TOGGLE_ASSISTANT)?;
        let toggle_assistant = KeyCombination::parse(&combination)
            .map_err(|err| invalid(keys::SHORTCUTS_TOGGLE_ASSISTANT, &err.to_string()))?;

        let limit = integer_setting(registry, keys::EVENTS_HISTORY_LIMIT)?;
        let event_history_limit = usize::try_from(limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| invalid(keys::EVENTS_HISTORY_LIMIT, "must be at least 1"))?;

        Ok(Self {
            projects_key,
            reply_delay_ms,
            greeting,
            toggle_assistant,
            event_history_limit,
        })
    }
}

impl Default for WorkbenchSettings {
    fn default() -> Self {
        Self {
            projects_key: DEFAULT_PROJECTS_KEY.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS as u64,
            greeting: DEFAULT_GREETING.to_string(),
            toggle_assistant: KeyCombination::toggle_assistant_default(),
            event_history_limit: DEFAULT_EVENT_HISTORY_LIMIT as usize,
        }
    }
}

fn lookup<'a>(registry: &'a SettingsRegistry, key: &str) -> Result<&'a SettingValue, SettingsError> {
    let key = SettingKey::new(key);
    registry.get(&key).ok_or(SettingsError::UnknownKey(key))
}

fn string_setting(registry: &SettingsRegistry, key: &str) -> Result<String, SettingsError> {
    let value = lookup(registry, key)?;
    value
        .as_string()
        .map(str::to_string)
        .ok_or_else(|| SettingsError::TypeMismatch {
            key: SettingKey::new(key),
            expected: "string",
            found: value.type_name(),
        })
}

fn integer_setting(registry: &SettingsRegistry, key: &str) -> Result<i64, SettingsError> {
    let value = lookup(registry, key)?;
    value.as_integer().ok_or_else(|| SettingsError::TypeMismatch {
        key: SettingKey::new(key),
        expected: "integer",
        found: value.type_name(),
    })
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        key: SettingKey::new(key),
        reason: reason.to_string(),
    }
}
