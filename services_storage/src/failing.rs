//! # Failing Store
//!
//! A store wrapper that can simulate write failures, for testing how callers
//! degrade when durable storage refuses writes (quota exceeded, disk full).

use crate::{KeyValueStore, StorageError};
use tracing::warn;

/// Policy for when failures should occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Never fail (passthrough)
    Never,
    /// Fail every write after the first N succeed
    AfterWrites(usize),
    /// Fail every write
    Always,
    /// Fail writes to specific keys
    OnKeys(Vec<String>),
}

/// Wrapper around a store that can simulate failures
///
/// Reads always pass through.
#[derive(Debug, Clone)]
pub struct FailingStore<S: KeyValueStore> {
    inner: S,
    policy: FailurePolicy,
    write_count: usize,
    rejected: usize,
}

impl<S: KeyValueStore> FailingStore<S> {
    /// Create a new failing store with the given policy
    pub fn new(inner: S, policy: FailurePolicy) -> Self {
        Self {
            inner,
            policy,
            write_count: 0,
            rejected: 0,
        }
    }

    fn should_fail(&self, key: &str) -> bool {
        match &self.policy {
            FailurePolicy::Never => false,
            FailurePolicy::AfterWrites(n) => self.write_count >= *n,
            FailurePolicy::Always => true,
            FailurePolicy::OnKeys(keys) => keys.iter().any(|k| k == key),
        }
    }

    /// Get the underlying store (for inspection)
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get mutable access to the underlying store
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Number of writes that reached the inner store
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of writes refused by the policy
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Reset the failure policy
    pub fn set_policy(&mut self, policy: FailurePolicy) {
        self.policy = policy;
        self.write_count = 0;
        self.rejected = 0;
    }
}

impl<S: KeyValueStore> KeyValueStore for FailingStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.should_fail(key) {
            self.rejected += 1;
            warn!(key, policy = ?self.policy, "simulated write failure");
            return Err(StorageError::Unavailable("simulated failure".to_string()));
        }

        self.inner.set(key, value)?;
        self.write_count += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.should_fail(key) {
            self.rejected += 1;
            return Err(StorageError::Unavailable("simulated failure".to_string()));
        }
        self.inner.remove(key)
    }
}
