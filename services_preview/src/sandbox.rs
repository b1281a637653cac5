//! Sandbox policy for preview frames

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capabilities granted to a sandboxed preview document
///
/// Everything not listed is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxPolicy {
    pub allow_scripts: bool,
    pub allow_same_origin: bool,
    pub allow_forms: bool,
    pub allow_popups: bool,
}

impl SandboxPolicy {
    /// Denies everything
    pub const fn locked() -> Self {
        Self {
            allow_scripts: false,
            allow_same_origin: false,
            allow_forms: false,
            allow_popups: false,
        }
    }

    /// Scripts may run; the document stays cross-origin to the host
    pub const fn scripts_only() -> Self {
        Self {
            allow_scripts: true,
            ..Self::locked()
        }
    }

    /// Value for the frame's `sandbox` attribute
    pub fn attribute_value(&self) -> String {
        let tokens = [
            (self.allow_scripts, "allow-scripts"),
            (self.allow_same_origin, "allow-same-origin"),
            (self.allow_forms, "allow-forms"),
            (self.allow_popups, "allow-popups"),
        ];
        tokens
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, token)| *token)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self::scripts_only()
    }
}

impl fmt::Display for SandboxPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attribute_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_only_attribute() {
        assert_eq!(SandboxPolicy::scripts_only().attribute_value(), "allow-scripts");
        assert_eq!(SandboxPolicy::default(), SandboxPolicy::scripts_only());
    }

    #[test]
    fn test_locked_attribute_is_empty() {
        assert_eq!(SandboxPolicy::locked().to_string(), "");
    }

    #[test]
    fn test_multiple_tokens() {
        let policy = SandboxPolicy {
            allow_forms: true,
            ..SandboxPolicy::scripts_only()
        };
        assert_eq!(policy.attribute_value(), "allow-scripts allow-forms");
    }

    #[test]
    fn test_serializes_as_flags() {
        let json = serde_json::to_value(SandboxPolicy::scripts_only()).unwrap();
        assert_eq!(json["allow_scripts"], true);
        assert_eq!(json["allow_popups"], false);
    }
}
