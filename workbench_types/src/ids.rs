//! Unique identifiers for workbench entities
//!
//! Identifiers are opaque strings. Fresh ones are UUID v4 in simple form, but
//! anything non-empty read back from storage is accepted as-is, so blobs
//! written by older builds keep their ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new random project ID
    pub fn new() -> Self {
        Self(fresh_id())
    }

    /// Wraps an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns false for the empty identifier, which is never issued
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::from_string(id)
    }
}

/// Unique identifier for a tab
///
/// Unique within its owning project; fresh ids are also globally unique.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Creates a new random tab ID
    pub fn new() -> Self {
        Self(fresh_id())
    }

    /// Wraps an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns false for the empty identifier, which is never issued
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::from_string(id)
    }
}
