//! Projects blob codec
//!
//! The blob is the JSON array of projects, nothing else: selection and the
//! panel flag are session state and are never written.

use services_storage::StorageError;
use std::collections::HashSet;
use thiserror::Error;
use workbench_types::{Project, ProjectId, TabId};

/// Errors from reading or writing the projects blob
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Failed to serialize projects: {0}")]
    SerializationFailed(String),

    #[error("Failed to parse projects: {0}")]
    DeserializationFailed(String),

    #[error("Project has an empty id")]
    EmptyProjectId,

    #[error("Tab in project {0} has an empty id")]
    EmptyTabId(ProjectId),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(ProjectId),

    #[error("Duplicate tab id {tab_id} in project {project_id}")]
    DuplicateTabId { project_id: ProjectId, tab_id: TabId },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Serializes projects to the persisted layout
pub fn encode_projects(projects: &[Project]) -> Result<String, PersistenceError> {
    serde_json::to_string(projects)
        .map_err(|err| PersistenceError::SerializationFailed(err.to_string()))
}

/// Parses and validates a persisted blob
pub fn decode_projects(blob: &str) -> Result<Vec<Project>, PersistenceError> {
    let projects: Vec<Project> = serde_json::from_str(blob)
        .map_err(|err| PersistenceError::DeserializationFailed(err.to_string()))?;
    validate_projects(&projects)?;
    Ok(projects)
}

/// Checks that every id is non-empty and unique in its scope
pub fn validate_projects(projects: &[Project]) -> Result<(), PersistenceError> {
    let mut project_ids = HashSet::new();
    for project in projects {
        if !project.id.is_valid() {
            return Err(PersistenceError::EmptyProjectId);
        }
        if !project_ids.insert(&project.id) {
            return Err(PersistenceError::DuplicateProjectId(project.id.clone()));
        }

        let mut tab_ids = HashSet::new();
        for tab in &project.tabs {
            if !tab.id.is_valid() {
                return Err(PersistenceError::EmptyTabId(project.id.clone()));
            }
            if !tab_ids.insert(&tab.id) {
                return Err(PersistenceError::DuplicateTabId {
                    project_id: project.id.clone(),
                    tab_id: tab.id.clone(),
                });
            }
        }
    }
    Ok(())
}
