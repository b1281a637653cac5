//! JSON overrides
//!
//! Hosts supply overrides as one flat JSON object keyed by setting name, e.g.
//! `{"assistant.reply_delay_ms": 250}`. A `null` value resets that key to its
//! default. The whole object is validated before anything is applied.

use crate::{SettingKey, SettingValue, SettingsError, SettingsRegistry};
use serde_json::{Map, Value};
use tracing::debug;

/// Applies a JSON object of overrides, returning how many keys changed
///
/// Either every entry applies or none does.
pub fn apply_overrides_json(
    registry: &mut SettingsRegistry,
    json: &str,
) -> Result<usize, SettingsError> {
    let object: Map<String, Value> =
        serde_json::from_str(json).map_err(|err| SettingsError::Parse(err.to_string()))?;

    let mut staged = Vec::with_capacity(object.len());
    for (name, raw) in object {
        let key = SettingKey::new(name);
        let default = registry
            .get_default(&key)
            .ok_or_else(|| SettingsError::UnknownKey(key.clone()))?;
        let value = match raw {
            Value::Null => None,
            other => Some(to_setting_value(&key, default, other)?),
        };
        staged.push((key, value));
    }

    let count = staged.len();
    for (key, value) in staged {
        match value {
            Some(value) => registry.set_override(key, value)?,
            None => {
                registry.remove_override(&key);
            }
        }
    }
    debug!(count, "settings overrides applied");
    Ok(count)
}

/// Serializes the current overrides as a flat JSON object
pub fn export_overrides_json(registry: &SettingsRegistry) -> Result<String, SettingsError> {
    let mut object = Map::new();
    for (key, value) in registry.export_overrides() {
        object.insert(key.as_str().to_string(), to_json_value(value));
    }
    serde_json::to_string(&Value::Object(object)).map_err(|err| SettingsError::Parse(err.to_string()))
}

/// Converts a JSON value using the default's type as the target
fn to_setting_value(
    key: &SettingKey,
    default: &SettingValue,
    raw: Value,
) -> Result<SettingValue, SettingsError> {
    let mismatch = |found: &'static str| SettingsError::TypeMismatch {
        key: key.clone(),
        expected: default.type_name(),
        found,
    };

    match (default, raw) {
        (SettingValue::Integer(_), Value::Number(n)) => n
            .as_i64()
            .map(SettingValue::Integer)
            .ok_or_else(|| mismatch("float")),
        (SettingValue::String(_), Value::String(s)) => Ok(SettingValue::String(s)),
        (_, other) => Err(mismatch(json_type_name(&other))),
    }
}

fn to_json_value(value: SettingValue) -> Value {
    match value {
        SettingValue::Integer(i) => Value::Number(i.into()),
        SettingValue::String(s) => Value::String(s),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
